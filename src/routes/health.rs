use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use crate::app_state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub checks: HealthChecks,
}

#[derive(Serialize)]
pub struct HealthChecks {
    pub work24: ComponentHealth,
    pub region_cache: CacheHealth,
}

#[derive(Serialize)]
pub struct ComponentHealth {
    pub status: String,
}

#[derive(Serialize)]
pub struct CacheHealth {
    pub entries: usize,
    pub ttl_secs: u64,
}

/// GET /health: service status; degraded when the Work24 key is missing.
pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let configured = state.jobs.is_some();

    let response = HealthResponse {
        status: if configured {
            "ok".to_string()
        } else {
            "degraded".to_string()
        },
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            work24: ComponentHealth {
                status: if configured {
                    "ok".to_string()
                } else {
                    "not_configured".to_string()
                },
            },
            region_cache: CacheHealth {
                entries: state.region_cache.len(),
                ttl_secs: state.region_cache.ttl().as_secs(),
            },
        },
    };

    (StatusCode::OK, Json(response))
}
