use axum::{extract::State, http::StatusCode, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::errors::AppError;
use crate::models::study::{StudyResourceRow, StudyTopicRow};
use crate::state::AppState;
use crate::study::queries::{self, NewStudyResource};

#[derive(Serialize)]
pub struct StudyTopicResponse {
    pub id: i64,
    pub title: String,
    pub summary: String,
    pub subhead: String,
    pub icon: String,
    pub created_at: DateTime<Utc>,
    pub resources: Vec<StudyResourceRow>,
}

impl StudyTopicResponse {
    fn new(topic: StudyTopicRow, resources: Vec<StudyResourceRow>) -> Self {
        StudyTopicResponse {
            id: topic.id,
            title: topic.title,
            summary: topic.summary,
            subhead: topic.subhead,
            icon: topic.icon,
            created_at: topic.created_at,
            resources,
        }
    }
}

/// GET /api/study
pub async fn handle_list_topics(
    State(state): State<AppState>,
) -> Result<Json<Vec<StudyTopicResponse>>, AppError> {
    let topics = queries::fetch_all_topics(&state.db).await?;
    Ok(Json(
        topics
            .into_iter()
            .map(|(topic, resources)| StudyTopicResponse::new(topic, resources))
            .collect(),
    ))
}

#[derive(Deserialize)]
pub struct CreateStudyResource {
    #[serde(rename = "type", default = "default_kind")]
    pub kind: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub detail: String,
    pub url: Option<String>,
}

fn default_kind() -> String {
    "Docs".to_string()
}

#[derive(Deserialize)]
pub struct CreateStudyTopic {
    pub title: Option<String>,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub subhead: String,
    #[serde(default = "default_icon")]
    pub icon: String,
    #[serde(default)]
    pub resources: Vec<CreateStudyResource>,
}

fn default_icon() -> String {
    "book".to_string()
}

/// POST /api/study
pub async fn handle_create_topic(
    State(state): State<AppState>,
    Json(req): Json<CreateStudyTopic>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let title = req
        .title
        .filter(|t| !t.is_empty())
        .ok_or_else(|| AppError::Validation("Title is required".to_string()))?;

    let resources: Vec<NewStudyResource<'_>> = req
        .resources
        .iter()
        .map(|r| NewStudyResource {
            kind: &r.kind,
            title: &r.title,
            detail: &r.detail,
            url: r.url.as_deref(),
        })
        .collect();

    let id = queries::insert_topic(
        &state.db,
        &title,
        &req.summary,
        &req.subhead,
        &req.icon,
        &resources,
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "id": id, "message": "Study topic created successfully" })),
    ))
}
