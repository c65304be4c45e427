use sqlx::PgPool;

use crate::models::interview::QuestionRow;

/// All questions for a role, looked up by role name (exact match).
pub async fn fetch_questions_for_role(
    pool: &PgPool,
    role_name: &str,
) -> Result<Vec<QuestionRow>, sqlx::Error> {
    sqlx::query_as(
        r#"
        SELECT iq.* FROM interview_questions iq
        JOIN roles r ON iq.role_id = r.id
        WHERE r.name = $1
        ORDER BY iq.difficulty, iq.focus
        "#,
    )
    .bind(role_name)
    .fetch_all(pool)
    .await
}

pub async fn fetch_questions_by_role_id(
    pool: &PgPool,
    role_id: i64,
) -> Result<Vec<QuestionRow>, sqlx::Error> {
    sqlx::query_as(
        r#"
        SELECT * FROM interview_questions
        WHERE role_id = $1
        ORDER BY difficulty, focus
        "#,
    )
    .bind(role_id)
    .fetch_all(pool)
    .await
}

pub async fn insert_question(
    pool: &PgPool,
    role_id: i64,
    question: &str,
    focus: &str,
    difficulty: &str,
    answer: &str,
    follow_up: &str,
) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar(
        r#"
        INSERT INTO interview_questions (role_id, question, focus, difficulty, answer, follow_up)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id
        "#,
    )
    .bind(role_id)
    .bind(question)
    .bind(focus)
    .bind(difficulty)
    .bind(answer)
    .bind(follow_up)
    .fetch_one(pool)
    .await
}

/// Partial update; absent fields keep their current value.
pub async fn update_question(
    pool: &PgPool,
    id: i64,
    question: Option<&str>,
    focus: Option<&str>,
    difficulty: Option<&str>,
    answer: Option<&str>,
    follow_up: Option<&str>,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE interview_questions SET
            question   = COALESCE($2, question),
            focus      = COALESCE($3, focus),
            difficulty = COALESCE($4, difficulty),
            answer     = COALESCE($5, answer),
            follow_up  = COALESCE($6, follow_up)
        WHERE id = $1
        "#,
    )
    .bind(id)
    .bind(question)
    .bind(focus)
    .bind(difficulty)
    .bind(answer)
    .bind(follow_up)
    .execute(pool)
    .await?;
    Ok(result.rows_affected())
}

pub async fn delete_question(pool: &PgPool, id: i64) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM interview_questions WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}
