//! Typed error type for the db crate.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DbError {
    #[error("sqlx error: {0}")]
    Sqlx(#[source] sqlx::Error),

    #[error("row not found")]
    NotFound,

    /// A unique constraint rejected the write. Carries the constraint name
    /// when the backend reports one.
    #[error("unique constraint violated: {0}")]
    UniqueViolation(String),

    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.is_unique_violation() {
                return Self::UniqueViolation(db_err.constraint().unwrap_or_default().to_string());
            }
        }
        Self::Sqlx(err)
    }
}
