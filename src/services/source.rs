use async_trait::async_trait;
use serde_json::Value;
use strum::{Display, EnumString};

use crate::services::xml::XmlError;

/// Which Work24 listing mode to call (`callTp` parameter).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
pub enum ListMode {
    /// Regular listing, sorted by registration date.
    #[strum(serialize = "L")]
    Primary,
    /// Detail-search mode, used as a fallback when the listing comes back empty.
    #[strum(serialize = "D")]
    DetailSearch,
}

/// Paging and keyword parameters for a listing call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListParams {
    pub page: u32,
    pub page_size: u32,
    pub keyword: Option<String>,
}

/// Error type for upstream listing/detail calls.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("HTTP request to Work24 failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Work24 returned HTTP {0}")]
    Status(u16),

    #[error("Failed to parse Work24 response: {0}")]
    Xml(String),
}

impl From<XmlError> for SourceError {
    fn from(err: XmlError) -> Self {
        SourceError::Xml(err.0)
    }
}

/// The two external capabilities the job pipeline depends on.
///
/// Both return the upstream document already converted to a JSON tree.
#[async_trait]
pub trait JobSource: Send + Sync {
    async fn list(&self, mode: ListMode, params: &ListParams) -> Result<Value, SourceError>;

    async fn detail(&self, job_id: &str) -> Result<Value, SourceError>;
}

/// Read a trimmed, non-empty string field from a record.
pub(crate) fn field(record: &Value, key: &str) -> Option<String> {
    match record.get(key)? {
        Value::String(s) => {
            let s = s.trim();
            (!s.is_empty()).then(|| s.to_string())
        }
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Normalize a "single object or array" collection into a list of records.
pub(crate) fn records(value: Option<&Value>) -> Vec<&Value> {
    match value {
        Some(Value::Array(items)) => items.iter().filter(|v| v.is_object()).collect(),
        Some(obj @ Value::Object(_)) => vec![obj],
        _ => Vec::new(),
    }
}

/// Records nested as `{container: {item: [...]}}`, the shape Work24 uses for lists.
pub(crate) fn nested_records<'a>(parent: &'a Value, container: &str, item: &str) -> Vec<&'a Value> {
    records(parent.get(container).and_then(|c| c.get(item)))
}
