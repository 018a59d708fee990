//! Work24 (고용24) Open API client.
//!
//! Queries the Korean Ministry of Employment and Labor job-posting API for the
//! listing (210L21) and detail (210D21) services.
//!
//! Official Source: <https://www.work24.go.kr>

use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

use crate::services::source::{JobSource, ListMode, ListParams, SourceError};
use crate::services::xml::xml_to_value;

/// Client for the Work24 job-posting API.
pub struct Work24Client {
    http: reqwest::Client,
    auth_key: String,
    list_url: String,
    detail_url: String,
}

impl Work24Client {
    pub fn new(
        auth_key: &str,
        list_url: &str,
        detail_url: &str,
        timeout: Duration,
    ) -> Result<Self, SourceError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("work24-jobs/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;

        Ok(Self {
            http,
            auth_key: auth_key.to_string(),
            list_url: list_url.to_string(),
            detail_url: detail_url.to_string(),
        })
    }

    fn list_query(&self, mode: ListMode, params: &ListParams) -> Vec<(&'static str, String)> {
        let mut query = vec![
            ("authKey", self.auth_key.clone()),
            ("callTp", mode.to_string()),
            ("returnType", "XML".to_string()),
            ("startPage", params.page.to_string()),
            ("display", params.page_size.to_string()),
            ("sortField", "regDt".to_string()),
            ("sortOrderBy", "desc".to_string()),
        ];
        if let Some(keyword) = params.keyword.as_deref().filter(|k| !k.trim().is_empty()) {
            query.push(("keyword", keyword.trim().to_string()));
        }
        query
    }

    async fn fetch_xml(&self, url: &str, query: &[(&str, String)]) -> Result<Value, SourceError> {
        let response = self.http.get(url).query(query).send().await?;

        if !response.status().is_success() {
            return Err(SourceError::Status(response.status().as_u16()));
        }

        let body = response.text().await?;
        Ok(xml_to_value(&body)?)
    }
}

#[async_trait]
impl JobSource for Work24Client {
    async fn list(&self, mode: ListMode, params: &ListParams) -> Result<Value, SourceError> {
        let url = match mode {
            ListMode::Primary => &self.list_url,
            ListMode::DetailSearch => &self.detail_url,
        };
        metrics::counter!("work24_upstream_requests_total", "mode" => mode.to_string())
            .increment(1);
        debug!(mode = %mode, page = params.page, "Requesting Work24 listing");
        self.fetch_xml(url, &self.list_query(mode, params)).await
    }

    async fn detail(&self, job_id: &str) -> Result<Value, SourceError> {
        let query = [
            ("authKey", self.auth_key.clone()),
            ("returnType", "XML".to_string()),
            ("callTp", ListMode::DetailSearch.to_string()),
            ("empSeqno", job_id.to_string()),
        ];
        metrics::counter!("work24_upstream_requests_total", "mode" => "detail").increment(1);
        debug!(job_id, "Requesting Work24 detail");
        self.fetch_xml(&self.detail_url, &query).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> Work24Client {
        Work24Client::new("KEY", "http://list", "http://detail", Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn test_list_query_is_sorted_newest_first() {
        let params = ListParams {
            page: 2,
            page_size: 50,
            keyword: None,
        };
        let query = client().list_query(ListMode::Primary, &params);
        assert!(query.contains(&("callTp", "L".to_string())));
        assert!(query.contains(&("startPage", "2".to_string())));
        assert!(query.contains(&("display", "50".to_string())));
        assert!(query.contains(&("sortField", "regDt".to_string())));
        assert!(query.contains(&("sortOrderBy", "desc".to_string())));
        assert!(!query.iter().any(|(k, _)| *k == "keyword"));
    }

    #[test]
    fn test_list_query_carries_keyword_in_fallback_mode() {
        let params = ListParams {
            page: 1,
            page_size: 20,
            keyword: Some(" 백엔드 ".to_string()),
        };
        let query = client().list_query(ListMode::DetailSearch, &params);
        assert!(query.contains(&("callTp", "D".to_string())));
        assert!(query.contains(&("keyword", "백엔드".to_string())));
    }
}
