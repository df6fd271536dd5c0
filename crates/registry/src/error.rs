//! Registry-level error types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Numeric status carried by a tax-id conflict.
pub const CONFLICT_STATUS: u16 = 422;

/// Structured failure body: what went wrong, when, and the numeric status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetails {
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub status: u16,
}

impl ErrorDetails {
    pub fn new(message: impl Into<String>, status: u16) -> Self {
        Self {
            message: message.into(),
            timestamp: Utc::now(),
            status,
        }
    }

    /// The conflict reported when `label` (CPF, CNPJ) is already taken.
    pub fn tax_id_taken(label: &str) -> Self {
        Self::new(format!("{label} already registered"), CONFLICT_STATUS)
    }
}

/// Errors produced by the record managers.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// The client, supplier or owner does not exist.
    #[error("{0}")]
    NotFound(String),

    /// The tax id is already registered under the same owner.
    #[error("{}", .0.message)]
    Conflict(ErrorDetails),

    /// Persistence error from the db crate.
    #[error("database error: {0}")]
    Database(#[from] db::DbError),
}

impl RegistryError {
    pub fn not_found(what: &str) -> Self {
        Self::NotFound(format!("{what} not found"))
    }
}
