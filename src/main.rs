use axum::routing::get;
use metrics_exporter_prometheus::PrometheusBuilder;
use std::sync::Arc;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use work24_jobs::app_state::AppState;
use work24_jobs::config::AppConfig;
use work24_jobs::routes;
use work24_jobs::services::{jobs::JobService, region_cache::RegionCache, work24::Work24Client};

#[tokio::main]
async fn main() {
    // Initialize structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    // Load configuration from environment
    let config = AppConfig::from_env().expect("Failed to load configuration from environment");

    tracing::info!("Initializing work24-jobs server");

    // Initialize Prometheus metrics recorder
    let prometheus_handle = PrometheusBuilder::new()
        .install_recorder()
        .expect("Failed to install Prometheus metrics recorder");
    let prometheus_handle = Arc::new(prometheus_handle);

    metrics::describe_counter!("job_list_requests_total", "Job list requests received");
    metrics::describe_counter!("job_detail_requests_total", "Job detail requests received");
    metrics::describe_counter!(
        "work24_upstream_requests_total",
        "Requests sent to the Work24 API, by mode"
    );
    metrics::describe_counter!("region_cache_hits_total", "Region lookups served from cache");
    metrics::describe_counter!(
        "region_cache_misses_total",
        "Region lookups that required a detail call"
    );
    metrics::describe_counter!(
        "region_lookup_failures_total",
        "Region lookups that failed and were left blank"
    );
    metrics::describe_histogram!(
        "job_enrichment_seconds",
        "Time to resolve work regions for one listing page"
    );
    metrics::describe_gauge!("region_cache_entries", "Job ids held in the region cache");

    // Region cache lives for the whole process and is shared by all requests
    let region_cache = Arc::new(RegionCache::new(
        config.region_cache_ttl(),
        config.region_cache_capacity,
    ));

    let state = match config.work24_key() {
        Some(key) => {
            tracing::info!("Initializing Work24 client");
            let client = Work24Client::new(
                key,
                &config.work24_list_url,
                &config.work24_detail_url,
                config.request_timeout(),
            )
            .expect("Failed to initialize Work24 client");

            let jobs = JobService::new(
                Arc::new(client),
                Arc::clone(&region_cache),
                config.enrich_concurrency(),
            );
            AppState::new(jobs, region_cache)
        }
        None => {
            tracing::warn!("WORK24_KEY is missing; job routes will answer 'not configured'");
            AppState::unconfigured(region_cache)
        }
    };

    let app = routes::build_router(state)
        // Prometheus metrics endpoint (separate state)
        .route(
            "/metrics",
            get(routes::metrics::prometheus_metrics).with_state(prometheus_handle),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive());

    tracing::info!("Starting work24-jobs on {}", config.bind_addr);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .expect("Failed to bind to address");

    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await.expect("Server error");
}
