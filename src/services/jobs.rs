use std::sync::Arc;
use tracing::info;

use crate::models::api::JobListQuery;
use crate::models::job::{JobDetail, JobSummary};
use crate::services::detail::{fetch_detail, DetailError, RegionResolver};
use crate::services::enrichment::{enrich_and_filter, filter_by_district, DEFAULT_CONCURRENCY};
use crate::services::listing::fetch_list;
use crate::services::region_cache::RegionCache;
use crate::services::source::{JobSource, ListParams, SourceError};

/// Job listing pipeline: list fetch, region enrichment, filtering and detail lookups.
pub struct JobService {
    source: Arc<dyn JobSource>,
    resolver: RegionResolver,
    concurrency: usize,
}

impl JobService {
    pub fn new(source: Arc<dyn JobSource>, cache: Arc<RegionCache>, concurrency: usize) -> Self {
        Self {
            resolver: RegionResolver::new(Arc::clone(&source), cache),
            source,
            concurrency: concurrency.max(1),
        }
    }

    pub fn with_default_concurrency(source: Arc<dyn JobSource>, cache: Arc<RegionCache>) -> Self {
        Self::new(source, cache, DEFAULT_CONCURRENCY)
    }

    pub fn cache(&self) -> &RegionCache {
        self.resolver.cache()
    }

    /// List one page of postings with resolved work regions, filtered by region
    /// and district when requested.
    pub async fn list_jobs(&self, query: &JobListQuery) -> Result<Vec<JobSummary>, SourceError> {
        let params = ListParams {
            page: query.page,
            page_size: query.page_size,
            keyword: query.keyword.clone(),
        };

        let summaries = fetch_list(self.source.as_ref(), &params).await?;
        let fetched = summaries.len();

        let enriched = enrich_and_filter(
            &self.resolver,
            summaries,
            query.region.as_deref(),
            self.concurrency,
        )
        .await;
        let items = filter_by_district(enriched, query.district.as_deref());

        info!(
            page = query.page,
            fetched,
            returned = items.len(),
            "Job list served"
        );
        Ok(items)
    }

    pub async fn job_detail(&self, job_id: &str) -> Result<JobDetail, DetailError> {
        fetch_detail(self.source.as_ref(), job_id).await
    }
}
