pub mod health;

use axum::{routing::get, Router};

use crate::insights::handlers as insights;
use crate::interview::handlers as interview;
use crate::roadmap::handlers as roadmap;
use crate::roles::handlers as roles;
use crate::state::AppState;
use crate::study::handlers as study;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Roles
        .route(
            "/api/roles",
            get(roles::handle_list_roles).post(roles::handle_create_role),
        )
        .route(
            "/api/roles/:id",
            get(roles::handle_get_role)
                .put(roles::handle_update_role)
                .delete(roles::handle_delete_role),
        )
        // Interview questions
        .route(
            "/api/interview",
            get(interview::handle_get_questions).post(interview::handle_create_question),
        )
        .route(
            "/api/interview/role/:role_id",
            get(interview::handle_get_questions_by_role_id),
        )
        .route(
            "/api/interview/:id",
            axum::routing::put(interview::handle_update_question)
                .delete(interview::handle_delete_question),
        )
        // Roadmaps
        .route("/api/roadmap", get(roadmap::handle_get_roadmap))
        .route(
            "/api/roadmap/weekly",
            get(roadmap::handle_get_weekly_roadmap),
        )
        .route("/api/roadmap/goals", get(roadmap::handle_get_roadmap_goals))
        // Study topics
        .route(
            "/api/study",
            get(study::handle_list_topics).post(study::handle_create_topic),
        )
        // Career insights
        .route(
            "/api/insights",
            get(insights::handle_get_insights).post(insights::handle_create_insight),
        )
        .route(
            "/api/insights/:id",
            axum::routing::put(insights::handle_update_insight)
                .delete(insights::handle_delete_insight),
        )
        // Legacy paths kept for older clients
        .route("/interview", get(interview::handle_get_questions))
        .route("/roadmap", get(roadmap::handle_get_roadmap))
        .with_state(state)
}
