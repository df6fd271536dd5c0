//! Route handlers, one module per resource.

use std::sync::Arc;

use db::DbPool;
use registry::store::postgres::{PgClientStore, PgOwnerStore, PgSupplierStore};
use registry::{ClientManager, OwnerStore, SupplierManager};

pub mod clients;
pub mod suppliers;

/// Shared handler state: one manager per resource.
#[derive(Clone)]
pub struct AppState {
    pub clients: Arc<ClientManager>,
    pub suppliers: Arc<SupplierManager>,
}

impl AppState {
    pub fn new(clients: ClientManager, suppliers: SupplierManager) -> Self {
        Self {
            clients: Arc::new(clients),
            suppliers: Arc::new(suppliers),
        }
    }

    /// Both managers backed by the same Postgres pool.
    pub fn postgres(pool: DbPool) -> Self {
        let owners: Arc<dyn OwnerStore> = Arc::new(PgOwnerStore::new(pool.clone()));
        Self::new(
            ClientManager::new(owners.clone(), Arc::new(PgClientStore::new(pool.clone()))),
            SupplierManager::new(owners, Arc::new(PgSupplierStore::new(pool))),
        )
    }
}
