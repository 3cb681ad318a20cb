//! User data model.
//!
//! The registry stores users keyed by a server-generated numeric
//! identifier. `UserSummary` is the reduced-field projection returned by
//! list responses; it carries no lifecycle of its own and is derived on
//! each read.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Stable numeric user identifier assigned by the persistence layer.
///
/// Identifiers are immutable after creation. The wrapper exists so ids
/// cannot be confused with other integers flowing through handlers.
///
/// # Examples
/// ```
/// use user_registry::domain::UserId;
///
/// let id = UserId::new(7);
/// assert_eq!(id.as_i64(), 7);
/// assert_eq!(id.to_string(), "7");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(transparent)]
pub struct UserId(i64);

impl UserId {
    /// Wrap a raw identifier.
    #[must_use]
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Access the raw identifier.
    #[must_use]
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for UserId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

/// A registered user.
///
/// Identity is `id`; uniqueness of `name` and `mail` is not enforced in
/// this layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    /// Server-generated identifier.
    pub id: UserId,
    /// Display name. Mutable via `PUT /users/{id}`.
    pub name: String,
    /// Mail address. Not updatable under the current contract.
    pub mail: String,
}

/// Reduced-field read view of a [`User`] used for list responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserSummary {
    /// Server-generated identifier.
    pub id: UserId,
    /// Display name.
    pub name: String,
}

impl From<&User> for UserSummary {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
        }
    }
}

/// Attributes supplied by the client when creating a user.
///
/// The id is assigned by the repository, never by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserDraft {
    /// Display name.
    pub name: String,
    /// Mail address.
    pub mail: String,
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn user_id_serialises_as_bare_integer() {
        let json = serde_json::to_string(&UserId::new(42)).expect("serialise");
        assert_eq!(json, "42");
    }

    #[rstest]
    fn user_json_shape_is_flat() {
        let user = User {
            id: UserId::new(1),
            name: "Alice".into(),
            mail: "a@x.com".into(),
        };
        let value = serde_json::to_value(&user).expect("serialise");
        assert_eq!(
            value,
            serde_json::json!({ "id": 1, "name": "Alice", "mail": "a@x.com" })
        );
    }

    #[rstest]
    fn summary_projection_drops_mail() {
        let user = User {
            id: UserId::new(2),
            name: "Bea".into(),
            mail: "b@x.com".into(),
        };
        let value = serde_json::to_value(UserSummary::from(&user)).expect("serialise");
        assert_eq!(value, serde_json::json!({ "id": 2, "name": "Bea" }));
    }
}
