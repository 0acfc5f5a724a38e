use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use sitewarden_store::aggregate;
use sitewarden_types::api::{
    AckResponse, AddReviewRequest, AllReviewsResponse, DeleteReviewRequest, SiteReviewsResponse,
    TotalReviewsResponse,
};

use crate::AppState;
use crate::error::ApiError;
use crate::extract::Json;

#[derive(Debug, Deserialize)]
pub struct ReviewsQuery {
    pub site: Option<String>,
}

/// GET /reviews?site=S — the site's reviews plus their aggregate score
/// (null when the site has none).
pub async fn get_reviews(
    State(store): State<AppState>,
    Query(query): Query<ReviewsQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let site = query
        .site
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ApiError::Validation("Missing site parameter".into()))?;

    let reviews = store.site_reviews(&site)?;
    let score = aggregate::average_rating(&reviews);
    Ok(Json(SiteReviewsResponse { score, reviews }))
}

/// POST /review
pub async fn add_review(
    State(store): State<AppState>,
    Json(req): Json<AddReviewRequest>,
) -> Result<impl IntoResponse, ApiError> {
    store.add_review(&req.site, req.rating, &req.review)?;
    Ok((
        StatusCode::CREATED,
        Json(AckResponse {
            message: "Review added".into(),
        }),
    ))
}

/// DELETE /review — deletion is by position within the site's list.
pub async fn delete_review(
    State(store): State<AppState>,
    Json(req): Json<DeleteReviewRequest>,
) -> Result<impl IntoResponse, ApiError> {
    store.delete_review(&req.site, req.index)?;
    Ok(Json(AckResponse {
        message: "Review deleted".into(),
    }))
}

/// GET /all-reviews
pub async fn all_reviews(State(store): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(AllReviewsResponse {
        reviews: store.all_reviews()?,
    }))
}

/// GET /total-reviews-count
pub async fn total_reviews_count(
    State(store): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(TotalReviewsResponse {
        count: store.total_review_count()?,
    }))
}
