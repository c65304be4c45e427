use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct RoadmapRow {
    pub id: i64,
    pub role_id: i64,
    pub overview: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct MilestoneRow {
    pub id: i64,
    pub roadmap_id: i64,
    pub title: String,
    pub details: String,
    pub order_index: i32,
    pub created_at: DateTime<Utc>,
}

/// A reference attached to a milestone. The URL is optional: much of the
/// seeded content names a book or course without linking it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MilestoneResource {
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// One ordered step of a role's learning path, fully assembled with its
/// child collections. This is the unit the allocator partitions; it is
/// read-only once fetched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Milestone {
    pub title: String,
    pub details: String,
    pub outcomes: Vec<String>,
    pub resources: Vec<MilestoneResource>,
}

/// A role's roadmap: overview text plus milestones ordered by `order_index`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Roadmap {
    pub overview: String,
    pub milestones: Vec<Milestone>,
}
