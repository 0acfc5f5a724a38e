use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::{FlagState, Report, Review};

// -- Reviews --

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AddReviewRequest {
    pub site: String,
    /// Deserialized wide so an out-of-range rating reaches our validation
    /// instead of failing in serde.
    pub rating: i64,
    pub review: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DeleteReviewRequest {
    pub site: String,
    pub index: usize,
}

#[derive(Debug, Serialize)]
pub struct SiteReviewsResponse {
    pub score: Option<f64>,
    pub reviews: Vec<Review>,
}

#[derive(Debug, Serialize)]
pub struct AllReviewsResponse {
    pub reviews: HashMap<String, Vec<Review>>,
}

#[derive(Debug, Serialize)]
pub struct TotalReviewsResponse {
    pub count: usize,
}

// -- Reports --

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AddReportRequest {
    pub site: String,
    pub reason: String,
}

#[derive(Debug, Serialize)]
pub struct ReportCreatedResponse {
    pub message: String,
    pub report: Report,
}

#[derive(Debug, Serialize)]
pub struct ReportsResponse {
    pub reports: Vec<Report>,
}

// -- Moderation --

/// Partial update for a site's flag state. Omitted fields are left
/// unchanged; setting both booleans to `false` in one call resets `flags`
/// to 0 as well.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FlagStatePatch {
    pub is_blacklisted: Option<bool>,
    pub is_risky: Option<bool>,
    pub flags: Option<u64>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlaggedSitesResponse {
    pub flagged_sites: HashMap<String, FlagState>,
}

#[derive(Debug, Serialize)]
pub struct FlagStateResponse {
    pub message: String,
    pub site: FlagState,
}

/// `site` is omitted entirely (not null) when the site had no flag state
/// to reset.
#[derive(Debug, Serialize)]
pub struct UnblockResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site: Option<FlagState>,
}

#[derive(Debug, Serialize)]
pub struct SiteDeletedResponse {
    pub message: String,
    pub site: String,
}

// -- Insights --

/// One row of the top-flagged ranking: a site key joined with its state.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlaggedSiteEntry {
    pub site: String,
    pub flags: u64,
    pub is_blacklisted: bool,
    pub is_risky: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightsResponse {
    pub top_flagged_sites: Vec<FlaggedSiteEntry>,
}

// -- Shared --

#[derive(Debug, Serialize)]
pub struct AckResponse {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
