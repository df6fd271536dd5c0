//! Supplier CRUD operations.

use sqlx::PgPool;
use uuid::Uuid;

use crate::{DbError, models::SupplierRow};

/// Fetch a single supplier by its primary key.
pub async fn find_supplier(pool: &PgPool, id: Uuid) -> Result<Option<SupplierRow>, DbError> {
    let row = sqlx::query_as::<_, SupplierRow>(
        r#"SELECT id, owner_id, cnpj, name, created_at FROM suppliers WHERE id = $1"#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row)
}

/// Return every supplier of `owner_id`, oldest first.
pub async fn list_suppliers_by_owner(
    pool: &PgPool,
    owner_id: Uuid,
) -> Result<Vec<SupplierRow>, DbError> {
    let rows = sqlx::query_as::<_, SupplierRow>(
        r#"
        SELECT id, owner_id, cnpj, name, created_at
        FROM suppliers
        WHERE owner_id = $1
        ORDER BY created_at ASC
        "#,
    )
    .bind(owner_id)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// Look a supplier up by CNPJ within a single owner's scope.
pub async fn find_supplier_by_cnpj(
    pool: &PgPool,
    cnpj: &str,
    owner_id: Uuid,
) -> Result<Option<SupplierRow>, DbError> {
    let row = sqlx::query_as::<_, SupplierRow>(
        r#"
        SELECT id, owner_id, cnpj, name, created_at
        FROM suppliers
        WHERE cnpj = $1 AND owner_id = $2
        "#,
    )
    .bind(cnpj)
    .bind(owner_id)
    .fetch_optional(pool)
    .await?;

    Ok(row)
}

/// Insert a new supplier.
pub async fn insert_supplier(
    pool: &PgPool,
    id: Uuid,
    owner_id: Uuid,
    cnpj: &str,
    name: &str,
) -> Result<SupplierRow, DbError> {
    let row = sqlx::query_as::<_, SupplierRow>(
        r#"
        INSERT INTO suppliers (id, owner_id, cnpj, name)
        VALUES ($1, $2, $3, $4)
        RETURNING id, owner_id, cnpj, name, created_at
        "#,
    )
    .bind(id)
    .bind(owner_id)
    .bind(cnpj)
    .bind(name)
    .fetch_one(pool)
    .await?;

    Ok(row)
}

/// Overwrite the CNPJ and name of supplier `id`.
///
/// Returns `DbError::NotFound` if the row no longer exists.
pub async fn update_supplier(
    pool: &PgPool,
    id: Uuid,
    cnpj: &str,
    name: &str,
) -> Result<SupplierRow, DbError> {
    let row = sqlx::query_as::<_, SupplierRow>(
        r#"
        UPDATE suppliers
        SET cnpj = $2, name = $3
        WHERE id = $1
        RETURNING id, owner_id, cnpj, name, created_at
        "#,
    )
    .bind(id)
    .bind(cnpj)
    .bind(name)
    .fetch_optional(pool)
    .await?
    .ok_or(DbError::NotFound)?;

    Ok(row)
}

/// Permanently delete a supplier by its primary key.
///
/// Returns `DbError::NotFound` if no row was deleted.
pub async fn delete_supplier(pool: &PgPool, id: Uuid) -> Result<(), DbError> {
    let result = sqlx::query("DELETE FROM suppliers WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(DbError::NotFound);
    }

    Ok(())
}
