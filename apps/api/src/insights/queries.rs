use sqlx::PgPool;

use crate::models::insight::InsightRow;

/// Insights, optionally filtered by category. An unknown category simply
/// matches nothing.
pub async fn fetch_insights(
    pool: &PgPool,
    category: Option<&str>,
) -> Result<Vec<InsightRow>, sqlx::Error> {
    match category {
        Some(category) => {
            sqlx::query_as("SELECT * FROM career_insights WHERE category = $1 ORDER BY id")
                .bind(category)
                .fetch_all(pool)
                .await
        }
        None => {
            sqlx::query_as("SELECT * FROM career_insights ORDER BY id")
                .fetch_all(pool)
                .await
        }
    }
}

pub async fn insert_insight(
    pool: &PgPool,
    category: &str,
    label: &str,
    value: &str,
    meta: &str,
) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar(
        r#"
        INSERT INTO career_insights (category, label, value, meta)
        VALUES ($1, $2, $3, $4)
        RETURNING id
        "#,
    )
    .bind(category)
    .bind(label)
    .bind(value)
    .bind(meta)
    .fetch_one(pool)
    .await
}

/// Partial update; absent fields keep their current value.
pub async fn update_insight(
    pool: &PgPool,
    id: i64,
    category: Option<&str>,
    label: Option<&str>,
    value: Option<&str>,
    meta: Option<&str>,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE career_insights SET
            category = COALESCE($2, category),
            label    = COALESCE($3, label),
            value    = COALESCE($4, value),
            meta     = COALESCE($5, meta)
        WHERE id = $1
        "#,
    )
    .bind(id)
    .bind(category)
    .bind(label)
    .bind(value)
    .bind(meta)
    .execute(pool)
    .await?;
    Ok(result.rows_affected())
}

pub async fn delete_insight(pool: &PgPool, id: i64) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM career_insights WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}
