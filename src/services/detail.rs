use serde_json::Value;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::models::job::{
    ApplicationPeriod, JobDetail, JobUrls, RecruitmentSection, SelectionStep,
};
use crate::services::region_cache::RegionCache;
use crate::services::source::{field, nested_records, JobSource, SourceError};

const DETAIL_ROOT: &str = "dhsOpenEmpInfoDetailRoot";

/// Separator between the distinct work locations kept in a region hint.
pub const REGION_SEPARATOR: &str = ", ";

/// How many distinct work locations make up a region hint.
const REGION_HINT_LIMIT: usize = 2;

/// Keys (lower-cased) under which Work24 stores self-introduction prompts.
const SELF_INTRO_KEYS: &[&str] = &["selfintroqstcont", "qstcont", "selfintroqst"];

#[derive(Debug, thiserror::Error)]
pub enum DetailError {
    #[error("Job posting not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    Upstream(#[from] SourceError),
}

/// The posting record inside a detail document, if there is one.
pub fn detail_root(document: &Value) -> Option<&Value> {
    document.get(DETAIL_ROOT).filter(|root| root.is_object())
}

fn recruitment_records(root: &Value) -> Vec<&Value> {
    nested_records(root, "empRecrList", "empRecrListInfo")
}

fn selection_records(root: &Value) -> Vec<&Value> {
    nested_records(root, "empSelsList", "empSelsListInfo")
}

/// Join the first two distinct work locations of the recruitment sections.
pub fn extract_work_region(root: &Value) -> String {
    let mut seen: Vec<String> = Vec::new();
    for record in recruitment_records(root) {
        if let Some(location) = field(record, "workRegionNm") {
            if !seen.contains(&location) {
                seen.push(location);
            }
        }
    }
    seen.truncate(REGION_HINT_LIMIT);
    seen.join(REGION_SEPARATOR)
}

fn push_prompt(text: &str, out: &mut Vec<String>, seen: &mut HashSet<String>) {
    let text = text.trim();
    if !text.is_empty() && seen.insert(text.to_string()) {
        out.push(text.to_string());
    }
}

fn collect_prompts(value: &Value, out: &mut Vec<String>, seen: &mut HashSet<String>) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                let is_prompt_key = SELF_INTRO_KEYS.contains(&key.to_lowercase().as_str());
                match child {
                    Value::String(text) if is_prompt_key => push_prompt(text, out, seen),
                    Value::Array(items) if is_prompt_key => {
                        for item in items {
                            match item {
                                Value::String(text) => push_prompt(text, out, seen),
                                other => collect_prompts(other, out, seen),
                            }
                        }
                    }
                    other => collect_prompts(other, out, seen),
                }
            }
        }
        Value::Array(items) => {
            for item in items {
                collect_prompts(item, out, seen);
            }
        }
        _ => {}
    }
}

/// Self-introduction prompts from the selection-step records, then from the
/// posting's own self-introduction list. De-duplicated, first-seen order.
pub fn extract_self_intro_questions(root: &Value) -> Vec<String> {
    let mut out = Vec::new();
    let mut seen = HashSet::new();

    for step in selection_records(root) {
        collect_prompts(step, &mut out, &mut seen);
    }

    match root.get("empSelfintroList") {
        Some(Value::String(text)) => {
            for line in text.lines() {
                push_prompt(line, &mut out, &mut seen);
            }
        }
        Some(list) => collect_prompts(list, &mut out, &mut seen),
        None => {}
    }

    out
}

fn recruitment_section(record: &Value) -> RecruitmentSection {
    RecruitmentSection {
        title: field(record, "empRecrNm"),
        description: field(record, "jobCont"),
        selection_process: field(record, "selsCont"),
        work_location: field(record, "workRegionNm"),
        career: field(record, "empWantedCareerNm"),
        education: field(record, "empWantedEduNm"),
        other_requirements: field(record, "sptCertEtc"),
        headcount: field(record, "recrPsncnt"),
        note: field(record, "empRecrMemoCont"),
    }
}

fn selection_step(record: &Value) -> SelectionStep {
    SelectionStep {
        name: field(record, "selsNm"),
        schedule: field(record, "selsSchdCont"),
        details: field(record, "selsCont"),
        note: field(record, "selsMemoCont"),
    }
}

/// Build the full detail projection from a posting record.
pub fn build_detail(root: &Value) -> JobDetail {
    JobDetail {
        id: field(root, "empSeqno"),
        title: field(root, "empWantedTitle"),
        company: field(root, "empBusiNm"),
        company_type: field(root, "coClcdNm"),
        period: ApplicationPeriod {
            start: field(root, "empWantedStdt"),
            end: field(root, "empWantedEndt"),
        },
        employment_type: field(root, "empWantedTypeNm"),
        required_docs: field(root, "empSubmitDocCont"),
        application_method: field(root, "empRcptMthdCont"),
        announcement: field(root, "empAcptPsnAnncCont"),
        inquiry: field(root, "inqryCont"),
        other_info: field(root, "empnEtcCont"),
        logo_url: field(root, "regLogImgNm"),
        urls: JobUrls {
            homepage: field(root, "empWantedHomepg"),
            recruitment: field(root, "empWantedHomepgDetail"),
            mobile: field(root, "empWantedMobileUrl"),
        },
        recruitment_summary: field(root, "empnRecrSummaryCont"),
        common_requirements: field(root, "recrCommCont"),
        recruitment_sections: recruitment_records(root)
            .into_iter()
            .map(recruitment_section)
            .collect(),
        selection_steps: selection_records(root)
            .into_iter()
            .map(selection_step)
            .collect(),
        self_intro_questions: extract_self_intro_questions(root),
        work_region: extract_work_region(root),
    }
}

/// Fetch a single posting. Always reads upstream; the region cache is not consulted.
pub async fn fetch_detail(source: &dyn JobSource, job_id: &str) -> Result<JobDetail, DetailError> {
    let document = source.detail(job_id).await?;
    let root = detail_root(&document).ok_or_else(|| DetailError::NotFound(job_id.to_string()))?;
    Ok(build_detail(root))
}

/// Resolves the work region of a posting, backed by the shared [`RegionCache`].
#[derive(Clone)]
pub struct RegionResolver {
    source: Arc<dyn JobSource>,
    cache: Arc<RegionCache>,
}

impl RegionResolver {
    pub fn new(source: Arc<dyn JobSource>, cache: Arc<RegionCache>) -> Self {
        Self { source, cache }
    }

    pub fn cache(&self) -> &RegionCache {
        &self.cache
    }

    /// Region hint for `job_id`, from the cache while it is live.
    ///
    /// A non-success HTTP status is cached as an empty region so a failing id
    /// is not refetched until the entry expires. Transport and parse errors are
    /// returned without caching.
    pub async fn resolve(&self, job_id: &str) -> Result<String, SourceError> {
        if let Some(region) = self.cache.get(job_id) {
            metrics::counter!("region_cache_hits_total").increment(1);
            debug!(job_id, "Region cache hit");
            return Ok(region);
        }
        metrics::counter!("region_cache_misses_total").increment(1);

        let region = match self.source.detail(job_id).await {
            Ok(document) => detail_root(&document)
                .map(extract_work_region)
                .unwrap_or_default(),
            Err(SourceError::Status(status)) => {
                warn!(job_id, status, "Work24 detail returned an error status");
                String::new()
            }
            Err(e) => return Err(e),
        };

        self.cache.insert(job_id, &region);
        Ok(region)
    }
}
