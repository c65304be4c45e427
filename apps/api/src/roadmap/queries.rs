use std::collections::HashMap;

use sqlx::{FromRow, PgPool};

use crate::models::roadmap::{Milestone, MilestoneResource, MilestoneRow, Roadmap, RoadmapRow};

/// A role that has a roadmap, as listed by `/api/roadmap/goals`.
#[derive(Debug, Clone, serde::Serialize, FromRow)]
pub struct RoadmapGoal {
    pub name: String,
    pub icon: String,
    pub color: String,
    pub overview: String,
}

/// Fetches a role's roadmap by role name (exact match), with milestones
/// ordered by `order_index` and their outcome/resource collections attached.
/// Schema permits several roadmaps per role; the earliest one wins.
pub async fn fetch_roadmap_for_role(
    pool: &PgPool,
    role_name: &str,
) -> Result<Option<Roadmap>, sqlx::Error> {
    let roadmap: Option<RoadmapRow> = sqlx::query_as(
        r#"
        SELECT rm.* FROM roadmaps rm
        JOIN roles r ON rm.role_id = r.id
        WHERE r.name = $1
        ORDER BY rm.id
        LIMIT 1
        "#,
    )
    .bind(role_name)
    .fetch_optional(pool)
    .await?;

    let Some(roadmap) = roadmap else {
        return Ok(None);
    };

    let rows: Vec<MilestoneRow> = sqlx::query_as(
        r#"
        SELECT * FROM milestones
        WHERE roadmap_id = $1
        ORDER BY order_index, id
        "#,
    )
    .bind(roadmap.id)
    .fetch_all(pool)
    .await?;

    let mut outcomes: HashMap<i64, Vec<String>> = HashMap::new();
    let outcome_rows: Vec<(i64, String)> = sqlx::query_as(
        r#"
        SELECT mo.milestone_id, mo.outcome FROM milestone_outcomes mo
        JOIN milestones m ON mo.milestone_id = m.id
        WHERE m.roadmap_id = $1
        ORDER BY mo.id
        "#,
    )
    .bind(roadmap.id)
    .fetch_all(pool)
    .await?;
    for (milestone_id, outcome) in outcome_rows {
        outcomes.entry(milestone_id).or_default().push(outcome);
    }

    let mut resources: HashMap<i64, Vec<MilestoneResource>> = HashMap::new();
    let resource_rows: Vec<(i64, String, Option<String>)> = sqlx::query_as(
        r#"
        SELECT mr.milestone_id, mr.label, mr.url FROM milestone_resources mr
        JOIN milestones m ON mr.milestone_id = m.id
        WHERE m.roadmap_id = $1
        ORDER BY mr.id
        "#,
    )
    .bind(roadmap.id)
    .fetch_all(pool)
    .await?;
    for (milestone_id, label, url) in resource_rows {
        resources
            .entry(milestone_id)
            .or_default()
            .push(MilestoneResource { label, url });
    }

    let milestones = rows
        .into_iter()
        .map(|row| Milestone {
            title: row.title,
            details: row.details,
            outcomes: outcomes.remove(&row.id).unwrap_or_default(),
            resources: resources.remove(&row.id).unwrap_or_default(),
        })
        .collect();

    Ok(Some(Roadmap {
        overview: roadmap.overview,
        milestones,
    }))
}

/// Lists every role that has at least one roadmap, ordered by role name.
pub async fn fetch_roadmap_goals(pool: &PgPool) -> Result<Vec<RoadmapGoal>, sqlx::Error> {
    let mut goals: Vec<RoadmapGoal> = sqlx::query_as(
        r#"
        SELECT DISTINCT ON (r.id) r.name, r.icon, r.color, rm.overview
        FROM roles r
        JOIN roadmaps rm ON rm.role_id = r.id
        ORDER BY r.id, rm.id
        "#,
    )
    .fetch_all(pool)
    .await?;
    goals.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(goals)
}
