use serde::{Deserialize, Serialize};

/// One row of a job listing, reduced from a Work24 posting.
///
/// Built fresh for every list request. `work_region` stays `None` until the
/// enrichment pass attaches the region resolved from the posting's detail.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobSummary {
    pub id: Option<String>,
    pub title: Option<String>,
    pub company: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub employment_type: Option<String>,
    pub logo_url: Option<String>,
    pub web_url: Option<String>,
    pub mobile_url: Option<String>,

    /// Region text as given by the listing row itself, when present.
    pub region_text: Option<String>,
    pub province: Option<String>,
    pub district: Option<String>,

    pub work_region: Option<String>,
}

/// Full projection of a single posting.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobDetail {
    pub id: Option<String>,
    pub title: Option<String>,
    pub company: Option<String>,
    pub company_type: Option<String>,
    pub period: ApplicationPeriod,
    pub employment_type: Option<String>,
    pub required_docs: Option<String>,
    pub application_method: Option<String>,
    pub announcement: Option<String>,
    pub inquiry: Option<String>,
    pub other_info: Option<String>,
    pub logo_url: Option<String>,
    pub urls: JobUrls,
    pub recruitment_summary: Option<String>,
    pub common_requirements: Option<String>,
    pub recruitment_sections: Vec<RecruitmentSection>,
    pub selection_steps: Vec<SelectionStep>,
    pub self_intro_questions: Vec<String>,
    /// Never null; empty when no work location could be found.
    pub work_region: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApplicationPeriod {
    pub start: Option<String>,
    pub end: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobUrls {
    pub homepage: Option<String>,
    pub recruitment: Option<String>,
    pub mobile: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecruitmentSection {
    pub title: Option<String>,
    pub description: Option<String>,
    pub selection_process: Option<String>,
    pub work_location: Option<String>,
    pub career: Option<String>,
    pub education: Option<String>,
    pub other_requirements: Option<String>,
    pub headcount: Option<String>,
    pub note: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SelectionStep {
    pub name: Option<String>,
    pub schedule: Option<String>,
    pub details: Option<String>,
    pub note: Option<String>,
}
