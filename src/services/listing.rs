use serde_json::Value;
use tracing::info;

use crate::models::job::JobSummary;
use crate::services::region::parse_region;
use crate::services::source::{field, records, JobSource, ListMode, ListParams, SourceError};

const LIST_ROOT: &str = "dhsOpenEmpInfoList";
const LIST_ROW: &str = "dhsOpenEmpInfo";

/// Reduce a Work24 listing document to job summaries.
///
/// Missing fields become `None`; a missing or oddly shaped row collection
/// yields an empty list.
pub fn parse_list(document: &Value) -> Vec<JobSummary> {
    let Some(root) = document.get(LIST_ROOT) else {
        return Vec::new();
    };

    records(root.get(LIST_ROW)).into_iter().map(summarize).collect()
}

fn summarize(row: &Value) -> JobSummary {
    let region_text = field(row, "empWantedWorkRegionNm");
    let (province, district) = region_text
        .as_deref()
        .map(parse_region)
        .unwrap_or((None, None));

    JobSummary {
        id: field(row, "empSeqno"),
        title: field(row, "empWantedTitle"),
        company: field(row, "empBusiNm"),
        start_date: field(row, "empWantedStdt"),
        end_date: field(row, "empWantedEndt"),
        employment_type: field(row, "empWantedTypeNm"),
        logo_url: field(row, "regLogImgNm"),
        web_url: field(row, "empWantedHomepgDetail"),
        mobile_url: field(row, "empWantedMobileUrl"),
        region_text,
        province,
        district,
        work_region: None,
    }
}

/// Fetch one page of summaries, newest first.
///
/// When the regular listing comes back with zero rows, the same page is
/// requested once more in detail-search mode before giving up.
pub async fn fetch_list(
    source: &dyn JobSource,
    params: &ListParams,
) -> Result<Vec<JobSummary>, SourceError> {
    let document = source.list(ListMode::Primary, params).await?;
    let items = parse_list(&document);
    if !items.is_empty() {
        return Ok(items);
    }

    info!(
        page = params.page,
        "Work24 listing returned no rows, retrying in detail-search mode"
    );
    let document = source.list(ListMode::DetailSearch, params).await?;
    Ok(parse_list(&document))
}
