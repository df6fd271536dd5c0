//! Core domain models for the registry.
//!
//! Clients and suppliers are both *owned records*: they belong to exactly one
//! [`Owner`] and carry a tax id that is unique within that owner's scope.
//! [`OwnedRecord`] captures that shape so one manager serves both.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ---------------------------------------------------------------------------
// OwnedRecord
// ---------------------------------------------------------------------------

/// A record partitioned by owner and keyed, within that owner, by a tax id.
pub trait OwnedRecord: Clone + Send + Sync + 'static {
    /// Caller-supplied fields: everything except `id` and `owner_id`.
    type Draft: Send + Sync;

    /// Lower-case noun used in messages and logs ("client").
    const KIND: &'static str;
    /// Name of the tax id field as users know it ("CPF").
    const TAX_ID_LABEL: &'static str;

    fn id(&self) -> Uuid;
    fn owner_id(&self) -> Uuid;
    fn tax_id(&self) -> &str;

    fn draft_tax_id(draft: &Self::Draft) -> &str;

    /// Build the full record from its identity and a draft.
    fn assemble(id: Uuid, owner_id: Uuid, draft: Self::Draft) -> Self;
}

// ---------------------------------------------------------------------------
// Owner
// ---------------------------------------------------------------------------

/// The user account under whose scope records are partitioned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Owner {
    pub id: Uuid,
    pub name: String,
}

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub cpf: String,
    pub name: String,
    pub birth_date: Option<NaiveDate>,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientDraft {
    pub cpf: String,
    pub name: String,
    pub birth_date: Option<NaiveDate>,
    pub phone: Option<String>,
}

impl ClientDraft {
    /// Convenience constructor for testing.
    pub fn new(cpf: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            cpf: cpf.into(),
            name: name.into(),
            birth_date: None,
            phone: None,
        }
    }
}

impl OwnedRecord for Client {
    type Draft = ClientDraft;

    const KIND: &'static str = "client";
    const TAX_ID_LABEL: &'static str = "CPF";

    fn id(&self) -> Uuid {
        self.id
    }

    fn owner_id(&self) -> Uuid {
        self.owner_id
    }

    fn tax_id(&self) -> &str {
        &self.cpf
    }

    fn draft_tax_id(draft: &ClientDraft) -> &str {
        &draft.cpf
    }

    fn assemble(id: Uuid, owner_id: Uuid, draft: ClientDraft) -> Self {
        Self {
            id,
            owner_id,
            cpf: draft.cpf,
            name: draft.name,
            birth_date: draft.birth_date,
            phone: draft.phone,
        }
    }
}

// ---------------------------------------------------------------------------
// Supplier
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Supplier {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub cnpj: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplierDraft {
    pub cnpj: String,
    pub name: String,
}

impl SupplierDraft {
    pub fn new(cnpj: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            cnpj: cnpj.into(),
            name: name.into(),
        }
    }
}

impl OwnedRecord for Supplier {
    type Draft = SupplierDraft;

    const KIND: &'static str = "supplier";
    const TAX_ID_LABEL: &'static str = "CNPJ";

    fn id(&self) -> Uuid {
        self.id
    }

    fn owner_id(&self) -> Uuid {
        self.owner_id
    }

    fn tax_id(&self) -> &str {
        &self.cnpj
    }

    fn draft_tax_id(draft: &SupplierDraft) -> &str {
        &draft.cnpj
    }

    fn assemble(id: Uuid, owner_id: Uuid, draft: SupplierDraft) -> Self {
        Self {
            id,
            owner_id,
            cnpj: draft.cnpj,
            name: draft.name,
        }
    }
}
