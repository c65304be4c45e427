use std::collections::HashMap;

use sqlx::PgPool;

use crate::models::study::{StudyResourceRow, StudyTopicRow};

/// All study topics with their resources attached, ordered by title.
pub async fn fetch_all_topics(
    pool: &PgPool,
) -> Result<Vec<(StudyTopicRow, Vec<StudyResourceRow>)>, sqlx::Error> {
    let topics: Vec<StudyTopicRow> = sqlx::query_as("SELECT * FROM study_topics ORDER BY title")
        .fetch_all(pool)
        .await?;

    let resources: Vec<StudyResourceRow> =
        sqlx::query_as("SELECT * FROM study_resources ORDER BY topic_id, id")
            .fetch_all(pool)
            .await?;

    let mut by_topic: HashMap<i64, Vec<StudyResourceRow>> = HashMap::new();
    for resource in resources {
        by_topic.entry(resource.topic_id).or_default().push(resource);
    }

    Ok(topics
        .into_iter()
        .map(|topic| {
            let resources = by_topic.remove(&topic.id).unwrap_or_default();
            (topic, resources)
        })
        .collect())
}

pub struct NewStudyResource<'a> {
    pub kind: &'a str,
    pub title: &'a str,
    pub detail: &'a str,
    pub url: Option<&'a str>,
}

/// Inserts a topic and its resources in one transaction.
pub async fn insert_topic(
    pool: &PgPool,
    title: &str,
    summary: &str,
    subhead: &str,
    icon: &str,
    resources: &[NewStudyResource<'_>],
) -> Result<i64, sqlx::Error> {
    let mut tx = pool.begin().await?;

    let topic_id: i64 = sqlx::query_scalar(
        r#"
        INSERT INTO study_topics (title, summary, subhead, icon)
        VALUES ($1, $2, $3, $4)
        RETURNING id
        "#,
    )
    .bind(title)
    .bind(summary)
    .bind(subhead)
    .bind(icon)
    .fetch_one(&mut *tx)
    .await?;

    for resource in resources {
        sqlx::query(
            r#"
            INSERT INTO study_resources (topic_id, kind, title, detail, url)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(topic_id)
        .bind(resource.kind)
        .bind(resource.title)
        .bind(resource.detail)
        .bind(resource.url)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;
    Ok(topic_id)
}
