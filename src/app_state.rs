use std::sync::Arc;

use crate::services::jobs::JobService;
use crate::services::region_cache::RegionCache;

/// Shared application state passed to all route handlers.
#[derive(Clone)]
pub struct AppState {
    /// `None` when the Work24 key is missing; job routes then answer "not configured".
    pub jobs: Option<Arc<JobService>>,
    pub region_cache: Arc<RegionCache>,
}

impl AppState {
    pub fn new(jobs: JobService, region_cache: Arc<RegionCache>) -> Self {
        Self {
            jobs: Some(Arc::new(jobs)),
            region_cache,
        }
    }

    pub fn unconfigured(region_cache: Arc<RegionCache>) -> Self {
        Self {
            jobs: None,
            region_cache,
        }
    }
}
