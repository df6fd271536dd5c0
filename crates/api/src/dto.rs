//! Request bodies and view projections.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use registry::{Client, ClientDraft, Supplier, SupplierDraft};

/// `POST /clients` body: the owner plus the client fields.
#[derive(Debug, Deserialize)]
pub struct NewClientDto {
    pub owner_id: Uuid,
    #[serde(flatten)]
    pub client: ClientDraft,
}

/// `POST /suppliers` body.
#[derive(Debug, Deserialize)]
pub struct NewSupplierDto {
    pub owner_id: Uuid,
    #[serde(flatten)]
    pub supplier: SupplierDraft,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientView {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub cpf: String,
    pub name: String,
    pub birth_date: Option<NaiveDate>,
    pub phone: Option<String>,
}

impl From<Client> for ClientView {
    fn from(c: Client) -> Self {
        Self {
            id: c.id,
            owner_id: c.owner_id,
            cpf: c.cpf,
            name: c.name,
            birth_date: c.birth_date,
            phone: c.phone,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupplierView {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub cnpj: String,
    pub name: String,
}

impl From<Supplier> for SupplierView {
    fn from(s: Supplier) -> Self {
        Self {
            id: s.id,
            owner_id: s.owner_id,
            cnpj: s.cnpj,
            name: s.name,
        }
    }
}
