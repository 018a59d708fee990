use garde::Validate;
use serde::{Deserialize, Serialize};

use crate::models::job::{JobDetail, JobSummary};

/// Query parameters accepted by `GET /api/jobs`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct JobListQuery {
    #[garde(range(min = 1))]
    #[serde(default = "default_page")]
    pub page: u32,

    #[garde(range(min = 1, max = 100))]
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    #[garde(skip)]
    pub keyword: Option<String>,

    /// Province filter, full or abbreviated ("서울", "서울특별시").
    #[garde(skip)]
    pub region: Option<String>,

    /// City/county/district filter ("강남구").
    #[garde(skip)]
    pub district: Option<String>,
}

fn default_page() -> u32 {
    1
}

fn default_page_size() -> u32 {
    20
}

impl Default for JobListQuery {
    fn default() -> Self {
        Self {
            page: default_page(),
            page_size: default_page_size(),
            keyword: None,
            region: None,
            district: None,
        }
    }
}

/// Response body for `GET /api/jobs`.
#[derive(Debug, Serialize, Deserialize)]
pub struct JobListResponse {
    pub ok: bool,
    pub items: Vec<JobSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl JobListResponse {
    pub fn success(items: Vec<JobSummary>) -> Self {
        Self {
            ok: true,
            items,
            error: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            ok: false,
            items: Vec::new(),
            error: Some(error.into()),
        }
    }
}

/// Response body for `GET /api/jobs/{job_id}`.
#[derive(Debug, Serialize, Deserialize)]
pub struct JobDetailResponse {
    pub ok: bool,
    pub item: JobDetail,
}
