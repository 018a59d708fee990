//! Test helpers: a scripted in-memory Work24 source.

use async_trait::async_trait;
use serde_json::{json, Value};
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use work24_jobs::services::source::{JobSource, ListMode, ListParams, SourceError};
use work24_jobs::services::xml::xml_to_value;

/// How the fake answers a detail call for one job id.
#[derive(Clone)]
pub enum DetailReply {
    /// Posting whose recruitment sections list these work locations.
    Regions(Vec<String>),
    /// A full document, used verbatim.
    Document(Value),
    /// Upstream answered with this HTTP status.
    Status(u16),
    /// Upstream could not be parsed.
    Broken,
}

/// In-memory `JobSource` that counts calls and tracks detail concurrency.
#[derive(Default)]
pub struct FakeSource {
    pub primary_list: Mutex<Option<Value>>,
    pub fallback_list: Mutex<Option<Value>>,
    pub details: Mutex<HashMap<String, DetailReply>>,
    pub detail_delay: Option<Duration>,
    pub failing_list: bool,

    pub primary_calls: AtomicUsize,
    pub fallback_calls: AtomicUsize,
    pub detail_calls: AtomicUsize,
    in_flight: AtomicUsize,
    pub max_in_flight: AtomicUsize,
    pub detail_ids: Mutex<Vec<String>>,
}

impl FakeSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delay(delay: Duration) -> Self {
        Self {
            detail_delay: Some(delay),
            ..Self::default()
        }
    }

    /// Every listing call answers with HTTP 503.
    pub fn failing() -> Self {
        Self {
            failing_list: true,
            ..Self::default()
        }
    }

    pub fn set_primary(&self, document: Value) {
        *self.primary_list.lock().unwrap() = Some(document);
    }

    pub fn set_fallback(&self, document: Value) {
        *self.fallback_list.lock().unwrap() = Some(document);
    }

    pub fn set_detail(&self, job_id: &str, reply: DetailReply) {
        self.details
            .lock()
            .unwrap()
            .insert(job_id.to_string(), reply);
    }

    pub fn set_region(&self, job_id: &str, regions: &[&str]) {
        self.set_detail(
            job_id,
            DetailReply::Regions(regions.iter().map(|r| r.to_string()).collect()),
        );
    }

    pub fn detail_calls(&self) -> usize {
        self.detail_calls.load(Ordering::SeqCst)
    }

    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }

    pub fn distinct_detail_ids(&self) -> usize {
        self.detail_ids
            .lock()
            .unwrap()
            .iter()
            .collect::<HashSet<_>>()
            .len()
    }
}

#[async_trait]
impl JobSource for FakeSource {
    async fn list(&self, mode: ListMode, _params: &ListParams) -> Result<Value, SourceError> {
        if self.failing_list {
            return Err(SourceError::Status(503));
        }
        let document = match mode {
            ListMode::Primary => {
                self.primary_calls.fetch_add(1, Ordering::SeqCst);
                self.primary_list.lock().unwrap().clone()
            }
            ListMode::DetailSearch => {
                self.fallback_calls.fetch_add(1, Ordering::SeqCst);
                self.fallback_list.lock().unwrap().clone()
            }
        };
        Ok(document.unwrap_or_else(|| list_document(&[])))
    }

    async fn detail(&self, job_id: &str) -> Result<Value, SourceError> {
        self.detail_calls.fetch_add(1, Ordering::SeqCst);
        self.detail_ids.lock().unwrap().push(job_id.to_string());

        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);
        if let Some(delay) = self.detail_delay {
            tokio::time::sleep(delay).await;
        }
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        let reply = self.details.lock().unwrap().get(job_id).cloned();
        match reply {
            Some(DetailReply::Regions(regions)) => Ok(detail_document(job_id, &regions)),
            Some(DetailReply::Document(document)) => Ok(document),
            Some(DetailReply::Status(status)) => Err(SourceError::Status(status)),
            Some(DetailReply::Broken) => Err(xml_to_value("<broken>").unwrap_err().into()),
            None => Ok(json!({})),
        }
    }
}

/// Listing document with one row per id, in the Work24 shape.
pub fn list_document(ids: &[&str]) -> Value {
    let rows: Vec<Value> = ids
        .iter()
        .map(|id| {
            json!({
                "empSeqno": id,
                "empWantedTitle": format!("공고 {id}"),
                "empBusiNm": "테스트 회사"
            })
        })
        .collect();
    json!({"dhsOpenEmpInfoList": {"total": rows.len().to_string(), "dhsOpenEmpInfo": rows}})
}

/// Detail document whose recruitment sections carry the given work locations.
pub fn detail_document(job_id: &str, regions: &[String]) -> Value {
    let sections: Vec<Value> = regions
        .iter()
        .map(|region| json!({"empRecrNm": "모집", "workRegionNm": region}))
        .collect();
    json!({
        "dhsOpenEmpInfoDetailRoot": {
            "empSeqno": job_id,
            "empRecrList": {"empRecrListInfo": sections}
        }
    })
}
