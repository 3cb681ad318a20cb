//! PostgreSQL persistence adapter using Diesel.
//!
//! Concrete implementation of the domain's [`crate::domain::UserRepository`]
//! port, backed by PostgreSQL via `diesel-async` with `bb8` connection
//! pooling. Row structs and schema definitions are internal; only the
//! repository and pool types are exported.

mod diesel_user_repository;
mod models;
mod pool;
mod schema;

pub use diesel_user_repository::DieselUserRepository;
pub use pool::{DbPool, PoolConfig, PoolError};
