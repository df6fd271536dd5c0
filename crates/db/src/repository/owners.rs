//! Owner lookups. This crate never writes to `users`.

use sqlx::PgPool;
use uuid::Uuid;

use crate::{DbError, models::OwnerRow};

/// Fetch a single owner by primary key, `None` when absent.
pub async fn find_owner(pool: &PgPool, id: Uuid) -> Result<Option<OwnerRow>, DbError> {
    let row = sqlx::query_as::<_, OwnerRow>(
        r#"SELECT id, name, created_at FROM users WHERE id = $1"#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row)
}
