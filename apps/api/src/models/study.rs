use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct StudyTopicRow {
    pub id: i64,
    pub title: String,
    pub summary: String,
    pub subhead: String,
    pub icon: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct StudyResourceRow {
    pub id: i64,
    pub topic_id: i64,
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub detail: String,
    pub url: Option<String>,
}
