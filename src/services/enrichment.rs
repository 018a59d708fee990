use std::sync::Arc;
use std::time::Instant;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{debug, error, warn};

use crate::models::job::JobSummary;
use crate::services::detail::RegionResolver;
use crate::services::region::region_matches;

/// Default number of detail lookups allowed in flight at once.
pub const DEFAULT_CONCURRENCY: usize = 6;

/// Attach a work region to every summary, then apply the optional region filter.
///
/// Lookups run as spawned tasks gated by a semaphore, so at most `concurrency`
/// detail calls are outstanding. Summaries without an id are left untouched.
/// A failed lookup only blanks its own item's region. All tasks are awaited
/// before filtering; the original order is kept.
pub async fn enrich_and_filter(
    resolver: &RegionResolver,
    mut summaries: Vec<JobSummary>,
    region_filter: Option<&str>,
    concurrency: usize,
) -> Vec<JobSummary> {
    let started = Instant::now();
    let semaphore = Arc::new(Semaphore::new(concurrency.max(1)));
    let mut tasks = JoinSet::new();

    for (index, summary) in summaries.iter_mut().enumerate() {
        let Some(job_id) = summary.id.clone() else {
            continue;
        };
        summary.work_region = Some(String::new());

        let resolver = resolver.clone();
        let semaphore = Arc::clone(&semaphore);
        tasks.spawn(async move {
            let _permit = semaphore.acquire_owned().await;
            let result = resolver.resolve(&job_id).await;
            (index, job_id, result)
        });
    }

    let spawned = tasks.len();
    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok((index, _, Ok(region))) => summaries[index].work_region = Some(region),
            Ok((_, job_id, Err(e))) => {
                metrics::counter!("region_lookup_failures_total").increment(1);
                warn!(job_id = %job_id, error = %e, "Region lookup failed");
            }
            Err(e) => {
                metrics::counter!("region_lookup_failures_total").increment(1);
                error!(error = %e, "Region lookup task aborted");
            }
        }
    }

    metrics::histogram!("job_enrichment_seconds").record(started.elapsed().as_secs_f64());
    debug!(
        lookups = spawned,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "Enrichment finished"
    );

    match region_filter.map(str::trim).filter(|f| !f.is_empty()) {
        Some(filter) => summaries
            .into_iter()
            .filter(|s| region_matches(s.work_region.as_deref().unwrap_or_default(), filter))
            .collect(),
        None => summaries,
    }
}

/// Keep summaries whose resolved region or listing district mentions `district`.
pub fn filter_by_district(summaries: Vec<JobSummary>, district: Option<&str>) -> Vec<JobSummary> {
    let Some(district) = district.map(str::trim).filter(|d| !d.is_empty()) else {
        return summaries;
    };

    summaries
        .into_iter()
        .filter(|s| {
            s.work_region
                .as_deref()
                .is_some_and(|region| region.contains(district))
                || s.district.as_deref().is_some_and(|d| d.contains(district))
        })
        .collect()
}
