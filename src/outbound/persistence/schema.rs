//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match the migrations under `migrations/`
//! exactly; `diesel print-schema` can regenerate them from a live
//! database.

diesel::table! {
    /// User registry table.
    ///
    /// The `id` column is a generated identity primary key. Neither
    /// `name` nor `mail` carries a uniqueness constraint; the service
    /// contract does not enforce one.
    users (id) {
        /// Primary key, assigned by the database.
        id -> Int8,
        /// Display name.
        name -> Text,
        /// Mail address.
        mail -> Text,
    }
}
