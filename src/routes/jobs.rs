use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use garde::Validate;
use serde_json::json;
use std::sync::Arc;
use tracing::error;

use crate::app_state::AppState;
use crate::models::api::{JobDetailResponse, JobListQuery, JobListResponse};
use crate::services::detail::DetailError;
use crate::services::jobs::JobService;

/// Failures surfaced by the job routes, always as an `ok: false` body.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("WORK24_KEY is not configured")]
    NotConfigured,

    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("{0}")]
    ListFailed(String),

    #[error("not_found")]
    NotFound,

    #[error("{0}")]
    DetailFailed(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = self.to_string();
        match self {
            ApiError::NotConfigured => (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({"ok": false, "error": message})),
            )
                .into_response(),
            ApiError::InvalidQuery(_) => (
                StatusCode::BAD_REQUEST,
                Json(JobListResponse::failure(message)),
            )
                .into_response(),
            ApiError::ListFailed(_) => {
                (StatusCode::OK, Json(JobListResponse::failure(message))).into_response()
            }
            ApiError::NotFound => (
                StatusCode::NOT_FOUND,
                Json(json!({"ok": false, "error": message})),
            )
                .into_response(),
            ApiError::DetailFailed(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"ok": false, "error": message})),
            )
                .into_response(),
        }
    }
}

fn job_service(state: &AppState) -> Result<Arc<JobService>, ApiError> {
    state.jobs.clone().ok_or(ApiError::NotConfigured)
}

/// GET /api/jobs: list postings with resolved work regions.
pub async fn list_jobs(
    State(state): State<AppState>,
    query: Result<Query<JobListQuery>, QueryRejection>,
) -> Result<Json<JobListResponse>, ApiError> {
    metrics::counter!("job_list_requests_total").increment(1);
    let jobs = job_service(&state)?;
    let Query(query) = query.map_err(|rejection| ApiError::InvalidQuery(rejection.body_text()))?;
    query
        .validate()
        .map_err(|report| ApiError::InvalidQuery(report.to_string()))?;

    match jobs.list_jobs(&query).await {
        Ok(items) => Ok(Json(JobListResponse::success(items))),
        Err(e) => {
            error!(error = %e, "Job list request failed");
            Err(ApiError::ListFailed(e.to_string()))
        }
    }
}

/// GET /api/jobs/{job_id}: full detail of one posting.
pub async fn get_job_detail(
    State(state): State<AppState>,
    Path(job_id): Path<String>,
) -> Result<Json<JobDetailResponse>, ApiError> {
    metrics::counter!("job_detail_requests_total").increment(1);
    let jobs = job_service(&state)?;

    match jobs.job_detail(&job_id).await {
        Ok(item) => Ok(Json(JobDetailResponse { ok: true, item })),
        Err(DetailError::NotFound(_)) => Err(ApiError::NotFound),
        Err(DetailError::Upstream(e)) => {
            error!(job_id = %job_id, error = %e, "Job detail request failed");
            Err(ApiError::DetailFailed(e.to_string()))
        }
    }
}
