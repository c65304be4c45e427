//! First-boot content seeding.
//!
//! Seed content ships as an embedded JSON document so a fresh database
//! serves real roles, questions, roadmaps, study topics, and insights
//! without a separate loader step. Seeding is idempotent: it is skipped
//! entirely once any role rows exist.

use std::collections::HashMap;

use anyhow::Result;
use serde::Deserialize;
use sqlx::PgPool;
use tracing::info;

use crate::models::roadmap::Milestone;

const SEED_JSON: &str = include_str!("../data/seed.json");

#[derive(Deserialize)]
struct SeedData {
    roles: Vec<SeedRole>,
    interview_questions: Vec<SeedRoleQuestions>,
    roadmaps: Vec<SeedRoadmap>,
    study_topics: Vec<SeedStudyTopic>,
    career_insights: Vec<SeedInsight>,
}

#[derive(Deserialize)]
struct SeedRole {
    name: String,
    description: String,
    icon: String,
    color: String,
}

#[derive(Deserialize)]
struct SeedRoleQuestions {
    role: String,
    questions: Vec<SeedQuestion>,
}

#[derive(Deserialize)]
struct SeedQuestion {
    question: String,
    focus: String,
    difficulty: String,
    answer: String,
    follow_up: String,
}

#[derive(Deserialize)]
struct SeedRoadmap {
    role: String,
    overview: String,
    milestones: Vec<Milestone>,
}

#[derive(Deserialize)]
struct SeedStudyTopic {
    title: String,
    summary: String,
    subhead: String,
    icon: String,
    resources: Vec<SeedStudyResource>,
}

#[derive(Deserialize)]
struct SeedStudyResource {
    #[serde(rename = "type")]
    kind: String,
    title: String,
    detail: String,
    #[serde(default)]
    url: Option<String>,
}

#[derive(Deserialize)]
struct SeedInsight {
    category: String,
    label: String,
    value: String,
    meta: String,
}

pub async fn run(pool: &PgPool) -> Result<()> {
    let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM roles")
        .fetch_one(pool)
        .await?;
    if existing > 0 {
        info!("Content tables already seeded, skipping");
        return Ok(());
    }

    let data: SeedData = serde_json::from_str(SEED_JSON)?;
    let mut tx = pool.begin().await?;

    let mut role_ids: HashMap<String, i64> = HashMap::new();
    for role in &data.roles {
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO roles (name, description, icon, color) VALUES ($1, $2, $3, $4) RETURNING id",
        )
        .bind(&role.name)
        .bind(&role.description)
        .bind(&role.icon)
        .bind(&role.color)
        .fetch_one(&mut *tx)
        .await?;
        role_ids.insert(role.name.clone(), id);
    }

    for group in &data.interview_questions {
        let Some(&role_id) = role_ids.get(&group.role) else {
            continue;
        };
        for q in &group.questions {
            sqlx::query(
                r#"
                INSERT INTO interview_questions (role_id, question, focus, difficulty, answer, follow_up)
                VALUES ($1, $2, $3, $4, $5, $6)
                "#,
            )
            .bind(role_id)
            .bind(&q.question)
            .bind(&q.focus)
            .bind(&q.difficulty)
            .bind(&q.answer)
            .bind(&q.follow_up)
            .execute(&mut *tx)
            .await?;
        }
    }

    for roadmap in &data.roadmaps {
        let Some(&role_id) = role_ids.get(&roadmap.role) else {
            continue;
        };
        let roadmap_id: i64 =
            sqlx::query_scalar("INSERT INTO roadmaps (role_id, overview) VALUES ($1, $2) RETURNING id")
                .bind(role_id)
                .bind(&roadmap.overview)
                .fetch_one(&mut *tx)
                .await?;

        for (index, milestone) in roadmap.milestones.iter().enumerate() {
            let milestone_id: i64 = sqlx::query_scalar(
                r#"
                INSERT INTO milestones (roadmap_id, title, details, order_index)
                VALUES ($1, $2, $3, $4)
                RETURNING id
                "#,
            )
            .bind(roadmap_id)
            .bind(&milestone.title)
            .bind(&milestone.details)
            .bind(index as i32)
            .fetch_one(&mut *tx)
            .await?;

            for outcome in &milestone.outcomes {
                sqlx::query("INSERT INTO milestone_outcomes (milestone_id, outcome) VALUES ($1, $2)")
                    .bind(milestone_id)
                    .bind(outcome)
                    .execute(&mut *tx)
                    .await?;
            }
            for resource in &milestone.resources {
                sqlx::query(
                    "INSERT INTO milestone_resources (milestone_id, label, url) VALUES ($1, $2, $3)",
                )
                .bind(milestone_id)
                .bind(&resource.label)
                .bind(&resource.url)
                .execute(&mut *tx)
                .await?;
            }
        }
    }

    for topic in &data.study_topics {
        let topic_id: i64 = sqlx::query_scalar(
            "INSERT INTO study_topics (title, summary, subhead, icon) VALUES ($1, $2, $3, $4) RETURNING id",
        )
        .bind(&topic.title)
        .bind(&topic.summary)
        .bind(&topic.subhead)
        .bind(&topic.icon)
        .fetch_one(&mut *tx)
        .await?;

        for resource in &topic.resources {
            sqlx::query(
                "INSERT INTO study_resources (topic_id, kind, title, detail, url) VALUES ($1, $2, $3, $4, $5)",
            )
            .bind(topic_id)
            .bind(&resource.kind)
            .bind(&resource.title)
            .bind(&resource.detail)
            .bind(&resource.url)
            .execute(&mut *tx)
            .await?;
        }
    }

    for insight in &data.career_insights {
        sqlx::query(
            "INSERT INTO career_insights (category, label, value, meta) VALUES ($1, $2, $3, $4)",
        )
        .bind(&insight.category)
        .bind(&insight.label)
        .bind(&insight.value)
        .bind(&insight.meta)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;
    info!(
        "Seeded {} roles, {} roadmaps, {} study topics, {} insights",
        data.roles.len(),
        data.roadmaps.len(),
        data.study_topics.len(),
        data.career_insights.len()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_seed_content_parses() {
        let data: SeedData = serde_json::from_str(SEED_JSON).expect("seed.json must deserialize");
        assert!(!data.roles.is_empty());
        assert!(!data.roadmaps.is_empty());
        // every question group and roadmap references a seeded role
        let names: Vec<&str> = data.roles.iter().map(|r| r.name.as_str()).collect();
        for group in &data.interview_questions {
            assert!(names.contains(&group.role.as_str()), "{}", group.role);
        }
        for roadmap in &data.roadmaps {
            assert!(names.contains(&roadmap.role.as_str()), "{}", roadmap.role);
        }
    }

    #[test]
    fn test_seed_milestones_are_ordered_and_titled() {
        let data: SeedData = serde_json::from_str(SEED_JSON).unwrap();
        for roadmap in &data.roadmaps {
            assert!(!roadmap.milestones.is_empty(), "{}", roadmap.role);
            for milestone in &roadmap.milestones {
                assert!(!milestone.title.is_empty());
            }
        }
    }
}
