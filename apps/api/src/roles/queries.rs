use sqlx::PgPool;

use crate::models::role::RoleRow;

pub async fn fetch_all_roles(pool: &PgPool) -> Result<Vec<RoleRow>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM roles ORDER BY name")
        .fetch_all(pool)
        .await
}

pub async fn fetch_role_by_id(pool: &PgPool, id: i64) -> Result<Option<RoleRow>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM roles WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn insert_role(
    pool: &PgPool,
    name: &str,
    description: &str,
    icon: &str,
    color: &str,
) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar(
        r#"
        INSERT INTO roles (name, description, icon, color)
        VALUES ($1, $2, $3, $4)
        RETURNING id
        "#,
    )
    .bind(name)
    .bind(description)
    .bind(icon)
    .bind(color)
    .fetch_one(pool)
    .await
}

/// Partial update; absent fields keep their current value.
/// Returns the number of rows touched (0 when the role does not exist).
pub async fn update_role(
    pool: &PgPool,
    id: i64,
    name: Option<&str>,
    description: Option<&str>,
    icon: Option<&str>,
    color: Option<&str>,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE roles SET
            name        = COALESCE($2, name),
            description = COALESCE($3, description),
            icon        = COALESCE($4, icon),
            color       = COALESCE($5, color)
        WHERE id = $1
        "#,
    )
    .bind(id)
    .bind(name)
    .bind(description)
    .bind(icon)
    .bind(color)
    .execute(pool)
    .await?;
    Ok(result.rows_affected())
}

pub async fn delete_role(pool: &PgPool, id: i64) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM roles WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}
