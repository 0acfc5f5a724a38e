use std::collections::HashMap;

use sitewarden_types::api::FlaggedSiteEntry;
use sitewarden_types::models::{FlagState, Review};

/// Default ranking size for the insights endpoint.
pub const TOP_FLAGGED_LIMIT: usize = 10;

/// Mean rating rounded to two decimals; `None` when there are no reviews.
pub fn average_rating(reviews: &[Review]) -> Option<f64> {
    if reviews.is_empty() {
        return None;
    }
    let total: u64 = reviews.iter().map(|r| u64::from(r.rating)).sum();
    let mean = total as f64 / reviews.len() as f64;
    Some((mean * 100.0).round() / 100.0)
}

/// Sites ranked by flag count, highest first, truncated to `n`. Ties are
/// broken by site key so one call always produces the same order.
pub fn top_flagged(states: &HashMap<String, FlagState>, n: usize) -> Vec<FlaggedSiteEntry> {
    let mut entries: Vec<FlaggedSiteEntry> = states
        .iter()
        .map(|(site, state)| FlaggedSiteEntry {
            site: site.clone(),
            flags: state.flags,
            is_blacklisted: state.is_blacklisted,
            is_risky: state.is_risky,
        })
        .collect();
    entries.sort_by(|a, b| b.flags.cmp(&a.flags).then_with(|| a.site.cmp(&b.site)));
    entries.truncate(n);
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    fn review(rating: u8) -> Review {
        Review {
            rating,
            text: "text".into(),
        }
    }

    #[test]
    fn no_reviews_means_no_score() {
        assert_eq!(average_rating(&[]), None);
    }

    #[test]
    fn mean_is_rounded_to_two_decimals() {
        assert_eq!(average_rating(&[review(4), review(5), review(3)]), Some(4.0));
        assert_eq!(average_rating(&[review(4), review(5)]), Some(4.5));
        // 10/3 = 3.333... rounds to 3.33
        assert_eq!(
            average_rating(&[review(3), review(3), review(4)]),
            Some(3.33)
        );
        // 11/3 = 3.666... rounds to 3.67
        assert_eq!(
            average_rating(&[review(3), review(4), review(4)]),
            Some(3.67)
        );
    }

    #[test]
    fn ranking_sorts_by_flags_then_site() {
        let mut states = HashMap::new();
        states.insert("low.com".to_string(), FlagState { flags: 1, ..Default::default() });
        states.insert("high.com".to_string(), FlagState { flags: 9, ..Default::default() });
        states.insert("b-tie.com".to_string(), FlagState { flags: 4, ..Default::default() });
        states.insert("a-tie.com".to_string(), FlagState { flags: 4, ..Default::default() });

        let ranked = top_flagged(&states, 10);
        let sites: Vec<&str> = ranked.iter().map(|e| e.site.as_str()).collect();
        assert_eq!(sites, vec!["high.com", "a-tie.com", "b-tie.com", "low.com"]);
    }

    #[test]
    fn ranking_is_truncated() {
        let mut states = HashMap::new();
        for i in 0..15 {
            states.insert(
                format!("site{i:02}.com"),
                FlagState { flags: i, ..Default::default() },
            );
        }
        let ranked = top_flagged(&states, TOP_FLAGGED_LIMIT);
        assert_eq!(ranked.len(), TOP_FLAGGED_LIMIT);
        assert_eq!(ranked[0].flags, 14);
    }
}
