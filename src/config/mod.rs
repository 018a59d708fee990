use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server bind address (e.g., "0.0.0.0:3000").
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// Work24 open API authentication key. The job routes answer
    /// "not configured" when this is absent.
    #[serde(default)]
    pub work24_key: Option<String>,

    /// Work24 listing endpoint (callTp=L).
    #[serde(default = "default_list_url")]
    pub work24_list_url: String,

    /// Work24 detail endpoint (callTp=D).
    #[serde(default = "default_detail_url")]
    pub work24_detail_url: String,

    /// Timeout applied to every upstream request, in seconds.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Maximum number of detail lookups in flight during enrichment.
    #[serde(default = "default_enrich_concurrency")]
    pub enrich_concurrency: usize,

    /// How long a resolved work region stays valid, in seconds.
    #[serde(default = "default_region_cache_ttl_secs")]
    pub region_cache_ttl_secs: u64,

    /// Maximum number of job ids kept in the region cache.
    #[serde(default = "default_region_cache_capacity")]
    pub region_cache_capacity: usize,
}

fn default_bind_addr() -> String {
    "0.0.0.0:3000".to_string()
}

fn default_list_url() -> String {
    "https://www.work24.go.kr/cm/openApi/call/wk/callOpenApiSvcInfo210L21.do".to_string()
}

fn default_detail_url() -> String {
    "https://www.work24.go.kr/cm/openApi/call/wk/callOpenApiSvcInfo210D21.do".to_string()
}

fn default_request_timeout_secs() -> u64 {
    20
}

fn default_enrich_concurrency() -> usize {
    6
}

fn default_region_cache_ttl_secs() -> u64 {
    24 * 60 * 60
}

fn default_region_cache_capacity() -> usize {
    10_000
}

impl AppConfig {
    pub fn from_env() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();
        envy::from_env()
    }

    /// The Work24 key, if one is set and non-blank.
    pub fn work24_key(&self) -> Option<&str> {
        self.work24_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn region_cache_ttl(&self) -> Duration {
        Duration::from_secs(self.region_cache_ttl_secs)
    }

    pub fn enrich_concurrency(&self) -> usize {
        self.enrich_concurrency.max(1)
    }
}
