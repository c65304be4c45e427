use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::errors::AppError;
use crate::interview::queries;
use crate::models::interview::{is_valid_difficulty, QuestionRow};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct RoleNameParams {
    pub role: Option<String>,
}

/// A question as the interview practice surface consumes it
/// (`followUp` in camelCase).
#[derive(Serialize)]
pub struct QuestionResponse {
    pub id: i64,
    pub question: String,
    pub focus: String,
    pub difficulty: String,
    pub answer: String,
    #[serde(rename = "followUp")]
    pub follow_up: String,
}

impl From<QuestionRow> for QuestionResponse {
    fn from(row: QuestionRow) -> Self {
        QuestionResponse {
            id: row.id,
            question: row.question,
            focus: row.focus,
            difficulty: row.difficulty,
            answer: row.answer,
            follow_up: row.follow_up,
        }
    }
}

/// GET /api/interview?role=<name>
/// An unknown role yields an empty array, not a 404.
pub async fn handle_get_questions(
    State(state): State<AppState>,
    Query(params): Query<RoleNameParams>,
) -> Result<Json<Vec<QuestionResponse>>, AppError> {
    let role = params
        .role
        .filter(|r| !r.is_empty())
        .ok_or_else(|| AppError::Validation("Role parameter is required".to_string()))?;

    let questions = queries::fetch_questions_for_role(&state.db, &role).await?;
    Ok(Json(
        questions.into_iter().map(QuestionResponse::from).collect(),
    ))
}

/// GET /api/interview/role/:role_id
pub async fn handle_get_questions_by_role_id(
    State(state): State<AppState>,
    Path(role_id): Path<i64>,
) -> Result<Json<Vec<QuestionRow>>, AppError> {
    Ok(Json(
        queries::fetch_questions_by_role_id(&state.db, role_id).await?,
    ))
}

#[derive(Deserialize)]
pub struct CreateQuestion {
    pub role_id: Option<i64>,
    pub question: Option<String>,
    #[serde(default)]
    pub focus: String,
    #[serde(default = "default_difficulty")]
    pub difficulty: String,
    #[serde(default)]
    pub answer: String,
    #[serde(default)]
    pub follow_up: String,
}

fn default_difficulty() -> String {
    "Intermediate".to_string()
}

/// POST /api/interview
pub async fn handle_create_question(
    State(state): State<AppState>,
    Json(req): Json<CreateQuestion>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let (role_id, question) = match (req.role_id, req.question) {
        (Some(role_id), Some(question)) if !question.is_empty() => (role_id, question),
        _ => {
            return Err(AppError::Validation(
                "role_id and question are required".to_string(),
            ))
        }
    };
    if !is_valid_difficulty(&req.difficulty) {
        return Err(AppError::Validation(
            "Difficulty must be Beginner, Intermediate, or Advanced".to_string(),
        ));
    }

    let id = queries::insert_question(
        &state.db,
        role_id,
        &question,
        &req.focus,
        &req.difficulty,
        &req.answer,
        &req.follow_up,
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "id": id, "message": "Question created successfully" })),
    ))
}

#[derive(Deserialize)]
pub struct UpdateQuestion {
    pub question: Option<String>,
    pub focus: Option<String>,
    pub difficulty: Option<String>,
    pub answer: Option<String>,
    pub follow_up: Option<String>,
}

/// PUT /api/interview/:id
pub async fn handle_update_question(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateQuestion>,
) -> Result<Json<Value>, AppError> {
    if req.question.is_none()
        && req.focus.is_none()
        && req.difficulty.is_none()
        && req.answer.is_none()
        && req.follow_up.is_none()
    {
        return Err(AppError::Validation("No fields to update".to_string()));
    }
    if let Some(difficulty) = &req.difficulty {
        if !is_valid_difficulty(difficulty) {
            return Err(AppError::Validation(
                "Difficulty must be Beginner, Intermediate, or Advanced".to_string(),
            ));
        }
    }

    let touched = queries::update_question(
        &state.db,
        id,
        req.question.as_deref(),
        req.focus.as_deref(),
        req.difficulty.as_deref(),
        req.answer.as_deref(),
        req.follow_up.as_deref(),
    )
    .await?;

    if touched == 0 {
        return Err(AppError::NotFound("Question not found".to_string()));
    }
    Ok(Json(json!({ "message": "Question updated successfully" })))
}

/// DELETE /api/interview/:id
pub async fn handle_delete_question(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, AppError> {
    if queries::delete_question(&state.db, id).await? == 0 {
        return Err(AppError::NotFound("Question not found".to_string()));
    }
    Ok(Json(json!({ "message": "Question deleted successfully" })))
}
