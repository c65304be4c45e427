use anyhow::Result;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

/// Creates and returns a PostgreSQL connection pool.
pub async fn create_pool(database_url: &str) -> Result<PgPool> {
    info!("Connecting to PostgreSQL...");

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await?;

    info!("PostgreSQL connection pool established");
    Ok(pool)
}

/// Idempotent schema creation, run once at startup.
/// Statements are executed one at a time; every table uses
/// `CREATE TABLE IF NOT EXISTS` so reruns are no-ops.
pub async fn init_schema(pool: &PgPool) -> Result<()> {
    for statement in SCHEMA {
        sqlx::query(statement).execute(pool).await?;
    }
    info!("Database schema initialized");
    Ok(())
}

const SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS roles (
        id          BIGSERIAL PRIMARY KEY,
        name        TEXT NOT NULL UNIQUE,
        description TEXT NOT NULL DEFAULT '',
        icon        TEXT NOT NULL DEFAULT 'code',
        color       TEXT NOT NULL DEFAULT '#7f9a7d',
        created_at  TIMESTAMPTZ NOT NULL DEFAULT now()
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS interview_questions (
        id          BIGSERIAL PRIMARY KEY,
        role_id     BIGINT NOT NULL REFERENCES roles(id) ON DELETE CASCADE,
        question    TEXT NOT NULL,
        focus       TEXT NOT NULL DEFAULT '',
        difficulty  TEXT NOT NULL DEFAULT 'Intermediate'
                    CHECK (difficulty IN ('Beginner', 'Intermediate', 'Advanced')),
        answer      TEXT NOT NULL DEFAULT '',
        follow_up   TEXT NOT NULL DEFAULT '',
        created_at  TIMESTAMPTZ NOT NULL DEFAULT now()
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS roadmaps (
        id          BIGSERIAL PRIMARY KEY,
        role_id     BIGINT NOT NULL REFERENCES roles(id) ON DELETE CASCADE,
        overview    TEXT NOT NULL DEFAULT '',
        created_at  TIMESTAMPTZ NOT NULL DEFAULT now()
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS milestones (
        id          BIGSERIAL PRIMARY KEY,
        roadmap_id  BIGINT NOT NULL REFERENCES roadmaps(id) ON DELETE CASCADE,
        title       TEXT NOT NULL,
        details     TEXT NOT NULL DEFAULT '',
        order_index INT NOT NULL DEFAULT 0,
        created_at  TIMESTAMPTZ NOT NULL DEFAULT now()
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS milestone_outcomes (
        id           BIGSERIAL PRIMARY KEY,
        milestone_id BIGINT NOT NULL REFERENCES milestones(id) ON DELETE CASCADE,
        outcome      TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS milestone_resources (
        id           BIGSERIAL PRIMARY KEY,
        milestone_id BIGINT NOT NULL REFERENCES milestones(id) ON DELETE CASCADE,
        label        TEXT NOT NULL,
        url          TEXT
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS study_topics (
        id          BIGSERIAL PRIMARY KEY,
        title       TEXT NOT NULL,
        summary     TEXT NOT NULL DEFAULT '',
        subhead     TEXT NOT NULL DEFAULT '',
        icon        TEXT NOT NULL DEFAULT 'book',
        created_at  TIMESTAMPTZ NOT NULL DEFAULT now()
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS study_resources (
        id       BIGSERIAL PRIMARY KEY,
        topic_id BIGINT NOT NULL REFERENCES study_topics(id) ON DELETE CASCADE,
        kind     TEXT NOT NULL DEFAULT 'Docs',
        title    TEXT NOT NULL,
        detail   TEXT NOT NULL DEFAULT '',
        url      TEXT
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS career_insights (
        id         BIGSERIAL PRIMARY KEY,
        category   TEXT NOT NULL
                   CHECK (category IN ('readiness', 'velocity', 'market')),
        label      TEXT NOT NULL,
        value      TEXT NOT NULL DEFAULT '',
        meta       TEXT NOT NULL DEFAULT '',
        created_at TIMESTAMPTZ NOT NULL DEFAULT now()
    )
    "#,
];
