//! Client CRUD operations.

use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{DbError, models::ClientRow};

/// Fetch a single client by its primary key.
pub async fn find_client(pool: &PgPool, id: Uuid) -> Result<Option<ClientRow>, DbError> {
    let row = sqlx::query_as::<_, ClientRow>(
        r#"
        SELECT id, owner_id, cpf, name, birth_date, phone, created_at
        FROM clients
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row)
}

/// Return every client of `owner_id`, oldest first.
pub async fn list_clients_by_owner(pool: &PgPool, owner_id: Uuid) -> Result<Vec<ClientRow>, DbError> {
    let rows = sqlx::query_as::<_, ClientRow>(
        r#"
        SELECT id, owner_id, cpf, name, birth_date, phone, created_at
        FROM clients
        WHERE owner_id = $1
        ORDER BY created_at ASC
        "#,
    )
    .bind(owner_id)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// Look a client up by CPF within a single owner's scope.
pub async fn find_client_by_cpf(
    pool: &PgPool,
    cpf: &str,
    owner_id: Uuid,
) -> Result<Option<ClientRow>, DbError> {
    let row = sqlx::query_as::<_, ClientRow>(
        r#"
        SELECT id, owner_id, cpf, name, birth_date, phone, created_at
        FROM clients
        WHERE cpf = $1 AND owner_id = $2
        "#,
    )
    .bind(cpf)
    .bind(owner_id)
    .fetch_optional(pool)
    .await?;

    Ok(row)
}

/// Insert a new client.
///
/// A CPF already used by another client of the same owner surfaces as
/// [`DbError::UniqueViolation`].
pub async fn insert_client(
    pool: &PgPool,
    id: Uuid,
    owner_id: Uuid,
    cpf: &str,
    name: &str,
    birth_date: Option<NaiveDate>,
    phone: Option<&str>,
) -> Result<ClientRow, DbError> {
    let row = sqlx::query_as::<_, ClientRow>(
        r#"
        INSERT INTO clients (id, owner_id, cpf, name, birth_date, phone)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id, owner_id, cpf, name, birth_date, phone, created_at
        "#,
    )
    .bind(id)
    .bind(owner_id)
    .bind(cpf)
    .bind(name)
    .bind(birth_date)
    .bind(phone)
    .fetch_one(pool)
    .await?;

    Ok(row)
}

/// Overwrite every mutable column of client `id`. `owner_id` never changes.
///
/// Returns `DbError::NotFound` if the row no longer exists.
pub async fn update_client(
    pool: &PgPool,
    id: Uuid,
    cpf: &str,
    name: &str,
    birth_date: Option<NaiveDate>,
    phone: Option<&str>,
) -> Result<ClientRow, DbError> {
    let row = sqlx::query_as::<_, ClientRow>(
        r#"
        UPDATE clients
        SET cpf = $2, name = $3, birth_date = $4, phone = $5
        WHERE id = $1
        RETURNING id, owner_id, cpf, name, birth_date, phone, created_at
        "#,
    )
    .bind(id)
    .bind(cpf)
    .bind(name)
    .bind(birth_date)
    .bind(phone)
    .fetch_optional(pool)
    .await?
    .ok_or(DbError::NotFound)?;

    Ok(row)
}

/// Permanently delete a client by its primary key.
///
/// Returns `DbError::NotFound` if no row was deleted.
pub async fn delete_client(pool: &PgPool, id: Uuid) -> Result<(), DbError> {
    let result = sqlx::query("DELETE FROM clients WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(DbError::NotFound);
    }

    Ok(())
}
