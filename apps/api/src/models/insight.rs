use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct InsightRow {
    pub id: i64,
    pub category: String,
    pub label: String,
    pub value: String,
    pub meta: String,
    pub created_at: DateTime<Utc>,
}

/// Categories accepted by the career_insights table CHECK constraint.
pub const CATEGORIES: &[&str] = &["readiness", "velocity", "market"];

pub fn is_valid_category(value: &str) -> bool {
    CATEGORIES.contains(&value)
}
