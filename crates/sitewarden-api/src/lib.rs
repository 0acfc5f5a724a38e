pub mod error;
pub mod extract;
pub mod insights;
pub mod moderation;
pub mod reports;
pub mod reviews;

use std::sync::Arc;

use axum::{
    Router,
    routing::{delete, get, post},
};

use sitewarden_store::Store;

pub type AppState = Arc<Store>;

/// The full route table. Site keys arriving as path parameters are
/// percent-decoded by the extractor, so full-URL keys work when callers
/// URL-encode them.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/reviews", get(reviews::get_reviews))
        .route(
            "/review",
            post(reviews::add_review).delete(reviews::delete_review),
        )
        .route("/all-reviews", get(reviews::all_reviews))
        .route("/total-reviews-count", get(reviews::total_reviews_count))
        .route("/report", post(reports::add_report))
        .route("/reports", get(reports::get_reports))
        .route("/report/{id}", delete(reports::delete_report))
        .route("/flagged-sites", get(moderation::get_flagged_sites))
        .route("/flagged-site/{site}", post(moderation::update_flagged_site))
        .route("/unblock-site/{site}", post(moderation::unblock_site))
        .route("/site/{site}", delete(moderation::delete_site))
        .route("/insights", get(insights::get_insights))
        .with_state(state)
}
