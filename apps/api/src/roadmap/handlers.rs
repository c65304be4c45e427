use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::roadmap::{Milestone, MilestoneResource};
use crate::roadmap::allocator::{allocate_day_ranges, allocate_weeks, DayRangeBucket, WeekBucket};
use crate::roadmap::queries::{fetch_roadmap_for_role, fetch_roadmap_goals, RoadmapGoal};
use crate::state::AppState;

/// Durations accepted by the weekly roadmap surface.
const WEEKLY_DURATIONS: &[u32] = &[30, 60, 90];

const DEFAULT_DURATION_DAYS: u32 = 30;

#[derive(Deserialize)]
pub struct RoadmapParams {
    pub goal: Option<String>,
    /// Kept as a raw string: an unparsable value falls back to the default
    /// on the day-range surface instead of failing extraction.
    pub days: Option<String>,
}

#[derive(Serialize)]
pub struct RoadmapResponse {
    pub goal: String,
    pub days: u32,
    pub overview: String,
    pub milestones: Vec<ScheduledMilestone>,
}

/// A milestone with its assigned day window, as serialized on the wire.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledMilestone {
    pub title: String,
    pub details: String,
    pub outcomes: Vec<String>,
    pub resources: Vec<MilestoneResource>,
    pub start_day: u32,
    pub end_day: u32,
    pub duration: String,
}

impl From<DayRangeBucket> for ScheduledMilestone {
    fn from(bucket: DayRangeBucket) -> Self {
        let Milestone {
            title,
            details,
            outcomes,
            resources,
        } = bucket.milestone;
        ScheduledMilestone {
            title,
            details,
            outcomes,
            resources,
            start_day: bucket.start_day,
            end_day: bucket.end_day,
            duration: bucket.label,
        }
    }
}

/// GET /api/roadmap?goal=<name>&days=<n>
///
/// Day-range policy: one bucket per milestone. `days` defaults to 30 when
/// missing or unparsable.
pub async fn handle_get_roadmap(
    State(state): State<AppState>,
    Query(params): Query<RoadmapParams>,
) -> Result<Json<RoadmapResponse>, AppError> {
    let goal = require_goal(params.goal)?;
    let days = parse_days_or_default(params.days.as_deref())?;

    let roadmap = fetch_roadmap_for_role(&state.db, &goal)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Roadmap not found for goal '{goal}'")))?;

    let buckets = allocate_day_ranges(roadmap.milestones, days)?;

    Ok(Json(RoadmapResponse {
        goal,
        days,
        overview: roadmap.overview,
        milestones: buckets.into_iter().map(ScheduledMilestone::from).collect(),
    }))
}

#[derive(Serialize)]
pub struct WeeklyRoadmapResponse {
    pub goal: String,
    pub duration: u32,
    pub overview: String,
    pub weeks: Vec<WeekEntry>,
}

/// A week bucket as serialized on the wire: the milestone list is exposed
/// under `focus`.
#[derive(Serialize)]
pub struct WeekEntry {
    pub title: String,
    pub summary: String,
    pub focus: Vec<Milestone>,
}

impl From<WeekBucket> for WeekEntry {
    fn from(bucket: WeekBucket) -> Self {
        WeekEntry {
            title: bucket.label,
            summary: bucket.summary,
            focus: bucket.milestones,
        }
    }
}

/// GET /api/roadmap/weekly?goal=<name>&days=<n>
///
/// Week-bucket policy. `days` is required and restricted to 30, 60, or 90.
pub async fn handle_get_weekly_roadmap(
    State(state): State<AppState>,
    Query(params): Query<RoadmapParams>,
) -> Result<Json<WeeklyRoadmapResponse>, AppError> {
    let (goal, days_raw) = match (params.goal, params.days) {
        (Some(goal), Some(days)) if !goal.is_empty() => (goal, days),
        _ => {
            return Err(AppError::Validation(
                "Goal and days parameters are required".to_string(),
            ))
        }
    };
    let days: u32 = days_raw
        .parse()
        .ok()
        .filter(|d| WEEKLY_DURATIONS.contains(d))
        .ok_or_else(|| AppError::Validation("Days must be 30, 60, or 90".to_string()))?;

    let roadmap = fetch_roadmap_for_role(&state.db, &goal)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Roadmap not found for goal '{goal}'")))?;

    let weeks = allocate_weeks(roadmap.milestones, days)?;

    Ok(Json(WeeklyRoadmapResponse {
        goal,
        duration: days,
        overview: roadmap.overview,
        weeks: weeks.into_iter().map(WeekEntry::from).collect(),
    }))
}

/// GET /api/roadmap/goals
pub async fn handle_get_roadmap_goals(
    State(state): State<AppState>,
) -> Result<Json<Vec<RoadmapGoal>>, AppError> {
    Ok(Json(fetch_roadmap_goals(&state.db).await?))
}

fn require_goal(goal: Option<String>) -> Result<String, AppError> {
    goal.filter(|g| !g.is_empty())
        .ok_or_else(|| AppError::Validation("Goal parameter is required".to_string()))
}

fn parse_days_or_default(days: Option<&str>) -> Result<u32, AppError> {
    let days: i64 = match days {
        Some(raw) => raw.parse().unwrap_or(i64::from(DEFAULT_DURATION_DAYS)),
        None => i64::from(DEFAULT_DURATION_DAYS),
    };
    u32::try_from(days)
        .ok()
        .filter(|d| *d > 0)
        .ok_or_else(|| AppError::Validation("Days must be a positive number".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_days_default_when_missing() {
        assert_eq!(parse_days_or_default(None).unwrap(), 30);
    }

    #[test]
    fn test_days_default_when_unparsable() {
        assert_eq!(parse_days_or_default(Some("soon")).unwrap(), 30);
        assert_eq!(parse_days_or_default(Some("")).unwrap(), 30);
    }

    #[test]
    fn test_days_parsed_when_valid() {
        assert_eq!(parse_days_or_default(Some("90")).unwrap(), 90);
    }

    #[test]
    fn test_days_rejects_non_positive() {
        assert!(parse_days_or_default(Some("0")).is_err());
        assert!(parse_days_or_default(Some("-7")).is_err());
    }
}
