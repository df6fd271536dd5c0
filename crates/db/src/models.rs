//! Row structs that map 1-to-1 onto database tables.
//!
//! These are *persistence* models — they carry no domain behaviour.
//! Domain types live in the `registry` crate.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

// ---------------------------------------------------------------------------
// users
// ---------------------------------------------------------------------------

/// A user account that owns clients and suppliers. Read-only from here.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct OwnerRow {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// clients
// ---------------------------------------------------------------------------

/// A persisted client row.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ClientRow {
    pub id: Uuid,
    pub owner_id: Uuid,
    /// Unique together with `owner_id`.
    pub cpf: String,
    pub name: String,
    pub birth_date: Option<NaiveDate>,
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// suppliers
// ---------------------------------------------------------------------------

/// A persisted supplier row.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SupplierRow {
    pub id: Uuid,
    pub owner_id: Uuid,
    /// Unique together with `owner_id`.
    pub cnpj: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
}
