use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::errors::AppError;
use crate::models::role::RoleRow;
use crate::roles::queries;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct CreateRole {
    pub name: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_icon")]
    pub icon: String,
    #[serde(default = "default_color")]
    pub color: String,
}

fn default_icon() -> String {
    "code".to_string()
}

fn default_color() -> String {
    "#7f9a7d".to_string()
}

#[derive(Deserialize)]
pub struct UpdateRole {
    pub name: Option<String>,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub color: Option<String>,
}

/// GET /api/roles
pub async fn handle_list_roles(
    State(state): State<AppState>,
) -> Result<Json<Vec<RoleRow>>, AppError> {
    Ok(Json(queries::fetch_all_roles(&state.db).await?))
}

/// GET /api/roles/:id
pub async fn handle_get_role(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<RoleRow>, AppError> {
    let role = queries::fetch_role_by_id(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Role not found".to_string()))?;
    Ok(Json(role))
}

/// POST /api/roles
pub async fn handle_create_role(
    State(state): State<AppState>,
    Json(req): Json<CreateRole>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let name = req
        .name
        .filter(|n| !n.is_empty())
        .ok_or_else(|| AppError::Validation("Name is required".to_string()))?;

    let id = queries::insert_role(&state.db, &name, &req.description, &req.icon, &req.color).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "id": id, "message": "Role created successfully" })),
    ))
}

/// PUT /api/roles/:id
pub async fn handle_update_role(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateRole>,
) -> Result<Json<Value>, AppError> {
    if req.name.is_none() && req.description.is_none() && req.icon.is_none() && req.color.is_none()
    {
        return Err(AppError::Validation("No fields to update".to_string()));
    }

    let touched = queries::update_role(
        &state.db,
        id,
        req.name.as_deref(),
        req.description.as_deref(),
        req.icon.as_deref(),
        req.color.as_deref(),
    )
    .await?;

    if touched == 0 {
        return Err(AppError::NotFound("Role not found".to_string()));
    }
    Ok(Json(json!({ "message": "Role updated successfully" })))
}

/// DELETE /api/roles/:id
/// Related questions, roadmaps, and milestones cascade.
pub async fn handle_delete_role(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, AppError> {
    if queries::delete_role(&state.db, id).await? == 0 {
        return Err(AppError::NotFound("Role not found".to_string()));
    }
    Ok(Json(json!({ "message": "Role deleted successfully" })))
}
