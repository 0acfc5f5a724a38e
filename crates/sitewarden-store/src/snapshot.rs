use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use sitewarden_types::models::{FlagState, Report, Review};

/// The entire persisted state: one JSON document, rewritten whole on every
/// mutation. Key names match the data file the service has always written.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub reviews: HashMap<String, Vec<Review>>,
    pub reports: Vec<Report>,
    pub flagged_sites: HashMap<String, FlagState>,
    pub next_report_id: u64,
}

impl Default for Snapshot {
    fn default() -> Self {
        Self {
            reviews: HashMap::new(),
            reports: Vec::new(),
            flagged_sites: HashMap::new(),
            next_report_id: 1,
        }
    }
}
