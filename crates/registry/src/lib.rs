//! `registry` crate — owner-scoped client and supplier records.
//!
//! Both verticals run through one generic [`OwnedRecordManager`]; the record
//! type decides which field is its tax id (CPF for clients, CNPJ for
//! suppliers) and the injected stores decide where records live.

pub mod models;
pub mod error;
pub mod store;
pub mod manager;

pub use models::{Owner, Client, ClientDraft, Supplier, SupplierDraft, OwnedRecord};
pub use error::{RegistryError, ErrorDetails};
pub use manager::{OwnedRecordManager, ClientManager, SupplierManager};
pub use store::{OwnerStore, OwnedStore};
