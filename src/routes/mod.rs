pub mod health;
pub mod jobs;
pub mod metrics;

use axum::routing::get;
use axum::Router;

use crate::app_state::AppState;

/// Health and job routes. The Prometheus endpoint is mounted separately in `main`.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/api/jobs", get(jobs::list_jobs))
        .route("/api/jobs/{job_id}", get(jobs::get_job_detail))
        .with_state(state)
}
