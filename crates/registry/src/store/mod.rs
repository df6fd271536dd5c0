//! Store traits — the persistence contract every manager is built on.
//!
//! Managers only ever see `Arc<dyn OwnerStore>` and `Arc<dyn OwnedStore<R>>`;
//! [`postgres`] backs them with the `db` crate and [`memory`] keeps
//! everything in a map for tests.

use async_trait::async_trait;
use db::DbError;
use uuid::Uuid;

use crate::models::{OwnedRecord, Owner};

pub mod memory;
pub mod postgres;

/// Read-only owner lookup.
#[async_trait]
pub trait OwnerStore: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Owner>, DbError>;
}

/// Persistence for one kind of owned record.
///
/// Implementations must reject an `insert` or `update` that would give two
/// records of the same owner the same tax id with
/// [`DbError::UniqueViolation`].
#[async_trait]
pub trait OwnedStore<R: OwnedRecord>: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<R>, DbError>;

    async fn find_by_owner(&self, owner_id: Uuid) -> Result<Vec<R>, DbError>;

    async fn find_by_tax_id(&self, tax_id: &str, owner_id: Uuid) -> Result<Option<R>, DbError>;

    async fn insert(&self, record: &R) -> Result<R, DbError>;

    /// Replace the stored record with the same id, keeping its owner.
    /// Returns `DbError::NotFound` if that record no longer exists.
    async fn update(&self, record: &R) -> Result<R, DbError>;

    /// Returns `DbError::NotFound` if nothing was deleted.
    async fn delete_by_id(&self, id: Uuid) -> Result<(), DbError>;
}
