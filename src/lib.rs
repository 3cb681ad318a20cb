//! User registry service library.
//!
//! A single REST resource (`/users`) offering create, read, update,
//! delete, and count operations, assembled hexagonally: the domain owns
//! the types and the repository port, inbound adapters translate HTTP,
//! and the outbound adapter persists to PostgreSQL.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod server;

pub use doc::ApiDoc;
pub use middleware::Trace;
