use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single user review of a site. Reviews have no stable id; they are
/// addressed by position within their site's list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    pub rating: u8,
    pub text: String,
}

/// A user report against a site. Ids are monotonic and never reused;
/// deleting a report does not renumber the rest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub id: u64,
    pub site: String,
    pub reason: String,
    pub timestamp: DateTime<Utc>,
}

/// Per-site moderation state. `flags` counts open reports against the
/// site; `isBlacklisted` blocks access in the extension, `isRisky` only
/// warns. Field names are camelCase on the wire and on disk.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlagState {
    pub is_blacklisted: bool,
    pub is_risky: bool,
    pub flags: u64,
}
