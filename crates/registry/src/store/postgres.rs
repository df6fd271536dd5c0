//! Postgres-backed stores, delegating to the `db` repository functions.

use async_trait::async_trait;
use tracing::debug;
use uuid::Uuid;

use db::models::{ClientRow, OwnerRow, SupplierRow};
use db::repository::{clients, owners, suppliers};
use db::{DbError, DbPool};

use crate::models::{Client, Owner, Supplier};
use crate::store::{OwnedStore, OwnerStore};

// ---------------------------------------------------------------------------
// Row conversions
// ---------------------------------------------------------------------------

impl From<OwnerRow> for Owner {
    fn from(row: OwnerRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
        }
    }
}

impl From<ClientRow> for Client {
    fn from(row: ClientRow) -> Self {
        Self {
            id: row.id,
            owner_id: row.owner_id,
            cpf: row.cpf,
            name: row.name,
            birth_date: row.birth_date,
            phone: row.phone,
        }
    }
}

impl From<SupplierRow> for Supplier {
    fn from(row: SupplierRow) -> Self {
        Self {
            id: row.id,
            owner_id: row.owner_id,
            cnpj: row.cnpj,
            name: row.name,
        }
    }
}

// ---------------------------------------------------------------------------
// Owners
// ---------------------------------------------------------------------------

#[derive(Clone)]
pub struct PgOwnerStore {
    pool: DbPool,
}

impl PgOwnerStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OwnerStore for PgOwnerStore {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Owner>, DbError> {
        Ok(owners::find_owner(&self.pool, id).await?.map(Owner::from))
    }
}

// ---------------------------------------------------------------------------
// Clients
// ---------------------------------------------------------------------------

#[derive(Clone)]
pub struct PgClientStore {
    pool: DbPool,
}

impl PgClientStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OwnedStore<Client> for PgClientStore {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Client>, DbError> {
        Ok(clients::find_client(&self.pool, id).await?.map(Client::from))
    }

    async fn find_by_owner(&self, owner_id: Uuid) -> Result<Vec<Client>, DbError> {
        let rows = clients::list_clients_by_owner(&self.pool, owner_id).await?;
        debug!(%owner_id, count = rows.len(), "loaded clients");
        Ok(rows.into_iter().map(Client::from).collect())
    }

    async fn find_by_tax_id(&self, tax_id: &str, owner_id: Uuid) -> Result<Option<Client>, DbError> {
        Ok(clients::find_client_by_cpf(&self.pool, tax_id, owner_id)
            .await?
            .map(Client::from))
    }

    async fn insert(&self, record: &Client) -> Result<Client, DbError> {
        let row = clients::insert_client(
            &self.pool,
            record.id,
            record.owner_id,
            &record.cpf,
            &record.name,
            record.birth_date,
            record.phone.as_deref(),
        )
        .await?;
        Ok(row.into())
    }

    async fn update(&self, record: &Client) -> Result<Client, DbError> {
        let row = clients::update_client(
            &self.pool,
            record.id,
            &record.cpf,
            &record.name,
            record.birth_date,
            record.phone.as_deref(),
        )
        .await?;
        Ok(row.into())
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<(), DbError> {
        clients::delete_client(&self.pool, id).await
    }
}

// ---------------------------------------------------------------------------
// Suppliers
// ---------------------------------------------------------------------------

#[derive(Clone)]
pub struct PgSupplierStore {
    pool: DbPool,
}

impl PgSupplierStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OwnedStore<Supplier> for PgSupplierStore {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Supplier>, DbError> {
        Ok(suppliers::find_supplier(&self.pool, id).await?.map(Supplier::from))
    }

    async fn find_by_owner(&self, owner_id: Uuid) -> Result<Vec<Supplier>, DbError> {
        let rows = suppliers::list_suppliers_by_owner(&self.pool, owner_id).await?;
        debug!(%owner_id, count = rows.len(), "loaded suppliers");
        Ok(rows.into_iter().map(Supplier::from).collect())
    }

    async fn find_by_tax_id(&self, tax_id: &str, owner_id: Uuid) -> Result<Option<Supplier>, DbError> {
        Ok(suppliers::find_supplier_by_cnpj(&self.pool, tax_id, owner_id)
            .await?
            .map(Supplier::from))
    }

    async fn insert(&self, record: &Supplier) -> Result<Supplier, DbError> {
        let row = suppliers::insert_supplier(
            &self.pool,
            record.id,
            record.owner_id,
            &record.cnpj,
            &record.name,
        )
        .await?;
        Ok(row.into())
    }

    async fn update(&self, record: &Supplier) -> Result<Supplier, DbError> {
        let row = suppliers::update_supplier(&self.pool, record.id, &record.cnpj, &record.name).await?;
        Ok(row.into())
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<(), DbError> {
        suppliers::delete_supplier(&self.pool, id).await
    }
}
