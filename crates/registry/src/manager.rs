//! Owner-scoped record management.
//!
//! `OwnedRecordManager` implements the create / update / list / get / delete
//! use cases once for every [`OwnedRecord`]:
//! 1. Records are created only for an existing owner.
//! 2. A tax id is unique among one owner's records, never globally.
//! 3. Updates replace every field except `id` and `owner_id`.
//! 4. The uniqueness pre-check is backed by the store's own constraint, so a
//!    concurrent duplicate that slips past the check is still a conflict.

use std::sync::Arc;

use tracing::{info, instrument, warn};
use uuid::Uuid;

use db::DbError;

use crate::error::{ErrorDetails, RegistryError};
use crate::models::{Client, OwnedRecord, Supplier};
use crate::store::{OwnedStore, OwnerStore};

/// Client use cases, CPF unique per owner.
pub type ClientManager = OwnedRecordManager<Client>;
/// Supplier use cases, CNPJ unique per owner.
pub type SupplierManager = OwnedRecordManager<Supplier>;

/// Stateless use-case layer over an owner lookup and a record store.
pub struct OwnedRecordManager<R: OwnedRecord> {
    owners: Arc<dyn OwnerStore>,
    records: Arc<dyn OwnedStore<R>>,
}

impl<R: OwnedRecord> OwnedRecordManager<R> {
    pub fn new(owners: Arc<dyn OwnerStore>, records: Arc<dyn OwnedStore<R>>) -> Self {
        Self { owners, records }
    }

    /// Register a new record under `owner_id`.
    ///
    /// # Errors
    /// - [`RegistryError::NotFound`] if the owner does not exist.
    /// - [`RegistryError::Conflict`] if the owner already has a record with
    ///   this tax id. Nothing is persisted in that case.
    #[instrument(skip(self, draft), fields(kind = R::KIND))]
    pub async fn create(&self, owner_id: Uuid, draft: R::Draft) -> Result<R, RegistryError> {
        let owner = self
            .owners
            .find_by_id(owner_id)
            .await?
            .ok_or_else(|| RegistryError::not_found("owner"))?;

        self.ensure_tax_id_free(R::draft_tax_id(&draft), owner.id).await?;

        let record = R::assemble(Uuid::new_v4(), owner.id, draft);
        let saved = self.records.insert(&record).await.map_err(Self::write_error)?;

        info!(id = %saved.id(), "{} created", R::KIND);
        Ok(saved)
    }

    /// Replace the fields of record `id` with `draft`, keeping its owner.
    ///
    /// Uniqueness is only re-checked when the tax id actually changes, so a
    /// record never conflicts with itself. A record deleted after the lookup
    /// is reported as not found, never re-created.
    #[instrument(skip(self, draft), fields(kind = R::KIND))]
    pub async fn update(&self, id: Uuid, draft: R::Draft) -> Result<R, RegistryError> {
        let existing = self.fetch(id).await?;

        let new_tax_id = R::draft_tax_id(&draft);
        if new_tax_id != existing.tax_id() {
            self.ensure_tax_id_free(new_tax_id, existing.owner_id()).await?;
        }

        let record = R::assemble(existing.id(), existing.owner_id(), draft);
        let saved = self.records.update(&record).await.map_err(Self::write_error)?;

        info!(%id, "{} updated", R::KIND);
        Ok(saved)
    }

    /// Every record belonging to `owner_id`; empty when there are none.
    pub async fn list_by_owner(&self, owner_id: Uuid) -> Result<Vec<R>, RegistryError> {
        Ok(self.records.find_by_owner(owner_id).await?)
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<R, RegistryError> {
        self.fetch(id).await
    }

    /// Look up a record by tax id inside one owner's scope.
    pub async fn get_by_tax_id(&self, tax_id: &str, owner_id: Uuid) -> Result<R, RegistryError> {
        self.records
            .find_by_tax_id(tax_id, owner_id)
            .await?
            .ok_or_else(|| RegistryError::not_found(R::KIND))
    }

    #[instrument(skip(self), fields(kind = R::KIND))]
    pub async fn delete(&self, id: Uuid) -> Result<(), RegistryError> {
        self.fetch(id).await?;

        match self.records.delete_by_id(id).await {
            Ok(()) => {
                info!(%id, "{} deleted", R::KIND);
                Ok(())
            }
            // Removed by someone else between the lookup and the delete.
            Err(DbError::NotFound) => Err(RegistryError::not_found(R::KIND)),
            Err(e) => Err(e.into()),
        }
    }

    // -----------------------------------------------------------------------
    // Helpers
    // -----------------------------------------------------------------------

    async fn fetch(&self, id: Uuid) -> Result<R, RegistryError> {
        self.records
            .find_by_id(id)
            .await?
            .ok_or_else(|| RegistryError::not_found(R::KIND))
    }

    async fn ensure_tax_id_free(&self, tax_id: &str, owner_id: Uuid) -> Result<(), RegistryError> {
        if self.records.find_by_tax_id(tax_id, owner_id).await?.is_some() {
            warn!(%owner_id, "{} already registered", R::TAX_ID_LABEL);
            return Err(Self::conflict());
        }
        Ok(())
    }

    fn write_error(err: DbError) -> RegistryError {
        match err {
            DbError::UniqueViolation(constraint) => {
                warn!(%constraint, "store rejected duplicate {}", R::TAX_ID_LABEL);
                Self::conflict()
            }
            DbError::NotFound => RegistryError::not_found(R::KIND),
            other => other.into(),
        }
    }

    fn conflict() -> RegistryError {
        RegistryError::Conflict(ErrorDetails::tax_id_taken(R::TAX_ID_LABEL))
    }
}
