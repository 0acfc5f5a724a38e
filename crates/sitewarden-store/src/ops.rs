use std::collections::HashMap;

use chrono::Utc;

use sitewarden_types::api::FlagStatePatch;
use sitewarden_types::models::{FlagState, Report, Review};

use crate::Store;
use crate::error::StoreError;

impl Store {
    // -- Reviews --

    pub fn add_review(&self, site: &str, rating: i64, text: &str) -> Result<(), StoreError> {
        if site.is_empty() || text.is_empty() {
            return Err(StoreError::Validation(
                "Missing site, rating or review in request body".into(),
            ));
        }
        if !(1..=5).contains(&rating) {
            return Err(StoreError::Validation(
                "Rating must be an integer between 1 and 5".into(),
            ));
        }
        self.with_data_mut(|data| {
            data.reviews.entry(site.to_string()).or_default().push(Review {
                rating: rating as u8,
                text: text.to_string(),
            });
            Ok(())
        })
    }

    /// Reviews are addressed by position; deleting shifts later indices
    /// down, so callers must not hold indices across mutations.
    pub fn delete_review(&self, site: &str, index: usize) -> Result<(), StoreError> {
        self.with_data_mut(|data| {
            let reviews = data
                .reviews
                .get_mut(site)
                .ok_or_else(|| StoreError::NotFound("Review not found".into()))?;
            if index >= reviews.len() {
                return Err(StoreError::NotFound("Review not found".into()));
            }
            reviews.remove(index);
            Ok(())
        })
    }

    pub fn site_reviews(&self, site: &str) -> Result<Vec<Review>, StoreError> {
        self.with_data(|data| Ok(data.reviews.get(site).cloned().unwrap_or_default()))
    }

    pub fn all_reviews(&self) -> Result<HashMap<String, Vec<Review>>, StoreError> {
        self.with_data(|data| Ok(data.reviews.clone()))
    }

    pub fn total_review_count(&self) -> Result<usize, StoreError> {
        self.with_data(|data| Ok(data.reviews.values().map(Vec::len).sum()))
    }

    // -- Reports --

    /// Assigns the next monotonic id and bumps the site's flag count,
    /// creating its flag state on first report.
    pub fn add_report(&self, site: &str, reason: &str) -> Result<Report, StoreError> {
        if site.is_empty() || reason.is_empty() {
            return Err(StoreError::Validation(
                "Missing site or reason in request body".into(),
            ));
        }
        self.with_data_mut(|data| {
            let report = Report {
                id: data.next_report_id,
                site: site.to_string(),
                reason: reason.to_string(),
                timestamp: Utc::now(),
            };
            data.next_report_id += 1;
            data.reports.push(report.clone());
            data.flagged_sites.entry(site.to_string()).or_default().flags += 1;
            Ok(report)
        })
    }

    pub fn delete_report(&self, id: u64) -> Result<(), StoreError> {
        self.with_data_mut(|data| {
            let index = data
                .reports
                .iter()
                .position(|r| r.id == id)
                .ok_or_else(|| StoreError::NotFound("Report not found".into()))?;
            let removed = data.reports.remove(index);
            // Flags track open reports, floored at zero.
            if let Some(state) = data.flagged_sites.get_mut(&removed.site) {
                state.flags = state.flags.saturating_sub(1);
            }
            Ok(())
        })
    }

    pub fn reports(&self) -> Result<Vec<Report>, StoreError> {
        self.with_data(|data| Ok(data.reports.clone()))
    }

    // -- Moderation --

    /// Partial update of a site's flag state; omitted fields stay as they
    /// are. Explicitly setting both booleans to false marks the site safe,
    /// which resets `flags` to 0 even when the patch supplies a value.
    pub fn set_flag_state(
        &self,
        site: &str,
        patch: &FlagStatePatch,
    ) -> Result<FlagState, StoreError> {
        self.with_data_mut(|data| {
            let state = data.flagged_sites.entry(site.to_string()).or_default();
            if let Some(blacklisted) = patch.is_blacklisted {
                state.is_blacklisted = blacklisted;
            }
            if let Some(risky) = patch.is_risky {
                state.is_risky = risky;
            }
            if let Some(flags) = patch.flags {
                state.flags = flags;
            }
            if patch.is_risky == Some(false) && patch.is_blacklisted == Some(false) {
                *state = FlagState::default();
            }
            Ok(state.clone())
        })
    }

    /// Resets the site's flag state and drops every report against it in
    /// one logical action. A site with no flag state is a successful no-op.
    pub fn unblock_site(&self, site: &str) -> Result<Option<FlagState>, StoreError> {
        self.with_data_mut(|data| {
            let Some(state) = data.flagged_sites.get_mut(site) else {
                return Ok(None);
            };
            *state = FlagState::default();
            let cleared = state.clone();
            data.reports.retain(|r| r.site != site);
            Ok(Some(cleared))
        })
    }

    /// Removes every trace of a site: reviews, flag state, and reports.
    /// Idempotent.
    pub fn delete_site(&self, site: &str) -> Result<(), StoreError> {
        self.with_data_mut(|data| {
            data.reviews.remove(site);
            data.flagged_sites.remove(site);
            data.reports.retain(|r| r.site != site);
            Ok(())
        })
    }

    pub fn flag_states(&self) -> Result<HashMap<String, FlagState>, StoreError> {
        self.with_data(|data| Ok(data.flagged_sites.clone()))
    }
}
