//! `db` crate — pure persistence layer.
//!
//! Provides a connection pool, typed row structs, and repository functions
//! for the `users`, `clients` and `suppliers` tables.  No business logic
//! lives here; the per-owner tax-id rules are enforced by the `registry`
//! crate, backed by the unique constraints in `migrations/`.

pub mod error;
pub mod pool;
pub mod repository;
pub mod models;

pub use pool::DbPool;
pub use error::DbError;
