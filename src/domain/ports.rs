//! Domain ports defining the edges of the hexagon.
//!
//! The registry has a single driven adapter: the user repository. The
//! trait exposes strongly typed errors so adapters map their failures
//! into predictable variants instead of returning `anyhow::Result`.

use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;
use thiserror::Error as ThisError;

use super::{User, UserDraft, UserId, UserSummary};

/// Persistence errors raised by [`UserRepository`] adapters.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum UserPersistenceError {
    /// Repository connection could not be established.
    #[error("user repository connection failed: {message}")]
    Connection { message: String },
    /// Query or mutation failed during execution.
    #[error("user repository query failed: {message}")]
    Query { message: String },
}

impl UserPersistenceError {
    /// Helper for connection oriented failures.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Helper for query failures.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Persistence port for user records.
///
/// Single-entity lookups signal absence with `Ok(None)` rather than an
/// error; adapters reserve the error channel for genuine failures.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// List all users as the reduced [`UserSummary`] projection.
    async fn list(&self) -> Result<Vec<UserSummary>, UserPersistenceError>;

    /// Fetch a user by identifier.
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserPersistenceError>;

    /// Fetch the first user with the given name.
    async fn find_by_name(&self, name: &str) -> Result<Option<User>, UserPersistenceError>;

    /// Fetch the first user with the given mail address.
    async fn find_by_mail(&self, mail: &str) -> Result<Option<User>, UserPersistenceError>;

    /// Persist a new user and return it with its assigned identifier.
    async fn create(&self, draft: &UserDraft) -> Result<User, UserPersistenceError>;

    /// Find a user and replace its name, returning the updated record.
    ///
    /// Returns `Ok(None)` when no user with the identifier exists.
    async fn rename(&self, id: UserId, name: &str)
    -> Result<Option<User>, UserPersistenceError>;

    /// Delete a user, reporting whether a record was removed.
    async fn delete(&self, id: UserId) -> Result<bool, UserPersistenceError>;

    /// Count the stored users.
    async fn count(&self) -> Result<u64, UserPersistenceError>;
}

#[derive(Debug, Default)]
struct InMemoryState {
    next_id: i64,
    rows: BTreeMap<i64, User>,
}

/// In-memory [`UserRepository`] used when no database is configured and
/// by handler tests.
///
/// Identifiers are assigned sequentially starting at 1, matching the
/// identity column behaviour of the PostgreSQL adapter.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    state: Mutex<InMemoryState>,
}

impl InMemoryUserRepository {
    /// Create an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn list(&self) -> Result<Vec<UserSummary>, UserPersistenceError> {
        let state = self.state.lock().expect("registry state poisoned");
        Ok(state.rows.values().map(UserSummary::from).collect())
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserPersistenceError> {
        let state = self.state.lock().expect("registry state poisoned");
        Ok(state.rows.get(&id.as_i64()).cloned())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<User>, UserPersistenceError> {
        let state = self.state.lock().expect("registry state poisoned");
        Ok(state.rows.values().find(|user| user.name == name).cloned())
    }

    async fn find_by_mail(&self, mail: &str) -> Result<Option<User>, UserPersistenceError> {
        let state = self.state.lock().expect("registry state poisoned");
        Ok(state.rows.values().find(|user| user.mail == mail).cloned())
    }

    async fn create(&self, draft: &UserDraft) -> Result<User, UserPersistenceError> {
        let mut state = self.state.lock().expect("registry state poisoned");
        state.next_id += 1;
        let user = User {
            id: UserId::new(state.next_id),
            name: draft.name.clone(),
            mail: draft.mail.clone(),
        };
        state.rows.insert(user.id.as_i64(), user.clone());
        Ok(user)
    }

    async fn rename(
        &self,
        id: UserId,
        name: &str,
    ) -> Result<Option<User>, UserPersistenceError> {
        let mut state = self.state.lock().expect("registry state poisoned");
        Ok(state.rows.get_mut(&id.as_i64()).map(|user| {
            user.name = name.to_owned();
            user.clone()
        }))
    }

    async fn delete(&self, id: UserId) -> Result<bool, UserPersistenceError> {
        let mut state = self.state.lock().expect("registry state poisoned");
        Ok(state.rows.remove(&id.as_i64()).is_some())
    }

    async fn count(&self) -> Result<u64, UserPersistenceError> {
        let state = self.state.lock().expect("registry state poisoned");
        Ok(state.rows.len() as u64)
    }
}
