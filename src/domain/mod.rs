//! Domain primitives and the persistence port.
//!
//! Purpose: define the strongly typed user entities shared by the HTTP
//! and persistence layers, the transport-agnostic error payload, and the
//! repository port the service is assembled around. Serialisation
//! contracts (serde) are documented on each type.

pub mod error;
pub mod ports;
pub mod user;

pub use self::error::{Error, ErrorCode};
pub use self::ports::{InMemoryUserRepository, UserPersistenceError, UserRepository};
pub use self::user::{User, UserDraft, UserId, UserSummary};

/// Response header carrying the request correlation identifier.
pub const TRACE_ID_HEADER: &str = "trace-id";
