use axum::{
    extract::{Path, State},
    response::IntoResponse,
};

use sitewarden_types::api::{
    FlagStatePatch, FlagStateResponse, FlaggedSitesResponse, SiteDeletedResponse, UnblockResponse,
};

use crate::AppState;
use crate::error::ApiError;
use crate::extract::Json;

/// GET /flagged-sites
pub async fn get_flagged_sites(
    State(store): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(FlaggedSitesResponse {
        flagged_sites: store.flag_states()?,
    }))
}

/// POST /flagged-site/{site} — partial update; setting both booleans to
/// false marks the site safe and resets its flag count.
pub async fn update_flagged_site(
    State(store): State<AppState>,
    Path(site): Path<String>,
    Json(patch): Json<FlagStatePatch>,
) -> Result<impl IntoResponse, ApiError> {
    let state = store.set_flag_state(&site, &patch)?;
    Ok(Json(FlagStateResponse {
        message: "Flagged site updated".into(),
        site: state,
    }))
}

/// POST /unblock-site/{site} — resets the site's flag state and drops all
/// of its reports. Succeeds even when the site was never flagged.
pub async fn unblock_site(
    State(store): State<AppState>,
    Path(site): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let state = store.unblock_site(&site)?;
    Ok(Json(UnblockResponse {
        message: "Site unblocked successfully".into(),
        site: state,
    }))
}

/// DELETE /site/{site} — removes the site's reviews, flag state, and
/// reports. Idempotent.
pub async fn delete_site(
    State(store): State<AppState>,
    Path(site): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    store.delete_site(&site)?;
    Ok(Json(SiteDeletedResponse {
        message: "Site permanently deleted".into(),
        site,
    }))
}
