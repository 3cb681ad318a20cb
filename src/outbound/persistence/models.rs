//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and
//! are never exposed to the domain. They exist solely to satisfy
//! Diesel's type requirements for queries and mutations.

use diesel::prelude::*;

use super::schema::users;

/// Row struct for reading full user records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: i64,
    pub name: String,
    pub mail: String,
}

/// Row struct for the list projection; deliberately omits `mail`.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserSummaryRow {
    pub id: i64,
    pub name: String,
}

/// Insertable struct for creating new user records. The id is assigned
/// by the identity column.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub name: &'a str,
    pub mail: &'a str,
}
