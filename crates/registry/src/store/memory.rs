//! In-memory stores — test doubles for [`OwnerStore`] and [`OwnedStore`].
//!
//! Useful in unit and HTTP tests where a real Postgres instance is either
//! unavailable or irrelevant. [`MemoryStore`] enforces the same per-owner
//! tax-id constraint as the database schema.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use db::DbError;
use uuid::Uuid;

use crate::models::{OwnedRecord, Owner};
use crate::store::{OwnedStore, OwnerStore};

/// A fixed set of owners.
#[derive(Debug, Default)]
pub struct MemoryOwnerStore {
    owners: HashMap<Uuid, Owner>,
}

impl MemoryOwnerStore {
    pub fn with_owners(owners: impl IntoIterator<Item = Owner>) -> Self {
        Self {
            owners: owners.into_iter().map(|o| (o.id, o)).collect(),
        }
    }
}

#[async_trait]
impl OwnerStore for MemoryOwnerStore {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Owner>, DbError> {
        Ok(self.owners.get(&id).cloned())
    }
}

/// Records of one kind, keyed by id.
pub struct MemoryStore<R> {
    records: Mutex<HashMap<Uuid, R>>,
}

impl<R: OwnedRecord> MemoryStore<R> {
    pub fn new() -> Self {
        Self {
            records: Mutex::new(HashMap::new()),
        }
    }

    /// Number of stored records across all owners.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<Uuid, R>> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<R: OwnedRecord> Default for MemoryStore<R> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<R: OwnedRecord> OwnedStore<R> for MemoryStore<R> {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<R>, DbError> {
        Ok(self.lock().get(&id).cloned())
    }

    async fn find_by_owner(&self, owner_id: Uuid) -> Result<Vec<R>, DbError> {
        Ok(self
            .lock()
            .values()
            .filter(|r| r.owner_id() == owner_id)
            .cloned()
            .collect())
    }

    async fn find_by_tax_id(&self, tax_id: &str, owner_id: Uuid) -> Result<Option<R>, DbError> {
        Ok(self
            .lock()
            .values()
            .find(|r| r.owner_id() == owner_id && r.tax_id() == tax_id)
            .cloned())
    }

    async fn insert(&self, record: &R) -> Result<R, DbError> {
        let mut records = self.lock();

        if records.contains_key(&record.id()) {
            return Err(DbError::UniqueViolation(format!("{}_pkey", R::KIND)));
        }
        ensure_tax_id_free(&*records, record.id(), record.owner_id(), record.tax_id())?;

        records.insert(record.id(), record.clone());
        Ok(record.clone())
    }

    async fn update(&self, record: &R) -> Result<R, DbError> {
        let mut records = self.lock();

        let owner_id = records.get(&record.id()).ok_or(DbError::NotFound)?.owner_id();
        if record.owner_id() != owner_id {
            return Err(DbError::NotFound);
        }
        ensure_tax_id_free(&*records, record.id(), owner_id, record.tax_id())?;

        records.insert(record.id(), record.clone());
        Ok(record.clone())
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<(), DbError> {
        self.lock().remove(&id).map(|_| ()).ok_or(DbError::NotFound)
    }
}

/// Mirrors the `(owner_id, tax id)` unique constraint of the schema.
fn ensure_tax_id_free<R: OwnedRecord>(
    records: &HashMap<Uuid, R>,
    id: Uuid,
    owner_id: Uuid,
    tax_id: &str,
) -> Result<(), DbError> {
    let taken = records
        .values()
        .any(|r| r.id() != id && r.owner_id() == owner_id && r.tax_id() == tax_id);
    if taken {
        return Err(DbError::UniqueViolation(format!("{}_owner_tax_id", R::KIND)));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Supplier, SupplierDraft};

    fn supplier(owner_id: Uuid, cnpj: &str) -> Supplier {
        Supplier::assemble(Uuid::new_v4(), owner_id, SupplierDraft::new(cnpj, "Acme"))
    }

    #[tokio::test]
    async fn insert_rejects_duplicate_tax_id_for_same_owner() {
        let store = MemoryStore::<Supplier>::new();
        let owner = Uuid::new_v4();

        store.insert(&supplier(owner, "42")).await.unwrap();
        let err = store.insert(&supplier(owner, "42")).await.unwrap_err();

        assert!(matches!(err, DbError::UniqueViolation(_)));
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn update_replaces_record_with_same_id() {
        let store = MemoryStore::<Supplier>::new();
        let mut s = supplier(Uuid::new_v4(), "42");
        store.insert(&s).await.unwrap();

        s.name = "Acme Ltda".into();
        store.update(&s).await.unwrap();

        let stored = store.find_by_id(s.id).await.unwrap().unwrap();
        assert_eq!(stored.name, "Acme Ltda");
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn update_of_deleted_record_does_not_resurrect_it() {
        let store = MemoryStore::<Supplier>::new();
        let s = supplier(Uuid::new_v4(), "42");
        store.insert(&s).await.unwrap();
        store.delete_by_id(s.id).await.unwrap();

        let err = store.update(&s).await.unwrap_err();

        assert!(matches!(err, DbError::NotFound));
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn delete_of_missing_id_is_not_found() {
        let store = MemoryStore::<Supplier>::new();
        let err = store.delete_by_id(Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound));
    }
}
