pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::scoring::handlers;

pub fn build_router() -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Scoring engine
        .route("/api/v1/score", post(handlers::handle_score))
        // ATS vendor reference
        .route("/api/v1/ats", get(handlers::handle_list_ats))
        .route("/api/v1/ats/:id", get(handlers::handle_get_ats))
        .route("/api/v1/job-boards", get(handlers::handle_job_boards))
        // Keyword taxonomy
        .route("/api/v1/sectors", get(handlers::handle_list_sectors))
        .route(
            "/api/v1/sectors/:id/keywords",
            get(handlers::handle_sector_keywords),
        )
        .route(
            "/api/v1/keywords/extract",
            post(handlers::handle_extract_keywords),
        )
        .route(
            "/api/v1/keywords/missing",
            post(handlers::handle_missing_keywords),
        )
}

// ────────────────────────────────────────────────────────────────────────────
// Router smoke tests
// ────────────────────────────────────────────────────────────────────────────
