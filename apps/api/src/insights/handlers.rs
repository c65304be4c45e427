use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::errors::AppError;
use crate::insights::queries;
use crate::models::insight::{is_valid_category, InsightRow};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct CategoryParams {
    pub category: Option<String>,
}

/// An insight as shown on dashboard cards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InsightCard {
    pub id: i64,
    pub label: String,
    pub value: String,
    pub meta: String,
}

/// Insights grouped by category for the dashboard view.
#[derive(Debug, Default, PartialEq, Serialize)]
pub struct GroupedInsights {
    pub readiness: Vec<InsightCard>,
    pub velocity: Vec<InsightCard>,
    pub market: Vec<InsightCard>,
}

/// Groups rows into the three known categories; rows with any other
/// category are dropped.
pub fn group_insights(rows: Vec<InsightRow>) -> GroupedInsights {
    let mut grouped = GroupedInsights::default();
    for row in rows {
        let card = InsightCard {
            id: row.id,
            label: row.label,
            value: row.value,
            meta: row.meta,
        };
        match row.category.as_str() {
            "readiness" => grouped.readiness.push(card),
            "velocity" => grouped.velocity.push(card),
            "market" => grouped.market.push(card),
            _ => {}
        }
    }
    grouped
}

/// Response for GET /api/insights: flat when filtered by category,
/// grouped otherwise.
#[derive(Serialize)]
#[serde(untagged)]
pub enum InsightsResponse {
    Flat(Vec<InsightRow>),
    Grouped(GroupedInsights),
}

/// GET /api/insights?category=<c>
pub async fn handle_get_insights(
    State(state): State<AppState>,
    Query(params): Query<CategoryParams>,
) -> Result<Json<InsightsResponse>, AppError> {
    match params.category {
        Some(category) => {
            let rows = queries::fetch_insights(&state.db, Some(&category)).await?;
            Ok(Json(InsightsResponse::Flat(rows)))
        }
        None => {
            let rows = queries::fetch_insights(&state.db, None).await?;
            Ok(Json(InsightsResponse::Grouped(group_insights(rows))))
        }
    }
}

#[derive(Deserialize)]
pub struct CreateInsight {
    pub category: Option<String>,
    pub label: Option<String>,
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub meta: String,
}

/// POST /api/insights
pub async fn handle_create_insight(
    State(state): State<AppState>,
    Json(req): Json<CreateInsight>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let (category, label) = match (req.category, req.label) {
        (Some(category), Some(label)) if !label.is_empty() => (category, label),
        _ => {
            return Err(AppError::Validation(
                "Category and label are required".to_string(),
            ))
        }
    };
    if !is_valid_category(&category) {
        return Err(AppError::Validation(
            "Category must be readiness, velocity, or market".to_string(),
        ));
    }

    let id = queries::insert_insight(&state.db, &category, &label, &req.value, &req.meta).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "id": id, "message": "Insight created successfully" })),
    ))
}

#[derive(Deserialize)]
pub struct UpdateInsight {
    pub category: Option<String>,
    pub label: Option<String>,
    pub value: Option<String>,
    pub meta: Option<String>,
}

/// PUT /api/insights/:id
pub async fn handle_update_insight(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateInsight>,
) -> Result<Json<Value>, AppError> {
    if req.category.is_none() && req.label.is_none() && req.value.is_none() && req.meta.is_none() {
        return Err(AppError::Validation("No fields to update".to_string()));
    }
    if let Some(category) = &req.category {
        if !is_valid_category(category) {
            return Err(AppError::Validation(
                "Category must be readiness, velocity, or market".to_string(),
            ));
        }
    }

    let touched = queries::update_insight(
        &state.db,
        id,
        req.category.as_deref(),
        req.label.as_deref(),
        req.value.as_deref(),
        req.meta.as_deref(),
    )
    .await?;

    if touched == 0 {
        return Err(AppError::NotFound("Insight not found".to_string()));
    }
    Ok(Json(json!({ "message": "Insight updated successfully" })))
}

/// DELETE /api/insights/:id
pub async fn handle_delete_insight(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, AppError> {
    if queries::delete_insight(&state.db, id).await? == 0 {
        return Err(AppError::NotFound("Insight not found".to_string()));
    }
    Ok(Json(json!({ "message": "Insight deleted successfully" })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn make_row(id: i64, category: &str, label: &str) -> InsightRow {
        InsightRow {
            id,
            category: category.to_string(),
            label: label.to_string(),
            value: "82%".to_string(),
            meta: "Up 12% since last month".to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_group_insights_by_category() {
        let rows = vec![
            make_row(1, "readiness", "Confidence score"),
            make_row(2, "velocity", "Learning streak"),
            make_row(3, "market", "Top role match"),
            make_row(4, "readiness", "Interview decks"),
        ];
        let grouped = group_insights(rows);
        assert_eq!(grouped.readiness.len(), 2);
        assert_eq!(grouped.velocity.len(), 1);
        assert_eq!(grouped.market.len(), 1);
        assert_eq!(grouped.readiness[0].label, "Confidence score");
    }

    #[test]
    fn test_group_insights_drops_unknown_categories() {
        let rows = vec![
            make_row(1, "readiness", "Confidence score"),
            make_row(2, "mystery", "Should vanish"),
        ];
        let grouped = group_insights(rows);
        assert_eq!(grouped.readiness.len(), 1);
        assert_eq!(grouped.velocity.len(), 0);
        assert_eq!(grouped.market.len(), 0);
    }

    #[test]
    fn test_group_insights_empty_input() {
        let grouped = group_insights(vec![]);
        assert_eq!(grouped, GroupedInsights::default());
    }
}
