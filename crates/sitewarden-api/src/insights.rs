use axum::{extract::State, response::IntoResponse};

use sitewarden_store::aggregate;
use sitewarden_types::api::InsightsResponse;

use crate::AppState;
use crate::error::ApiError;
use crate::extract::Json;

/// GET /insights — the ten most-flagged sites, most flags first.
pub async fn get_insights(State(store): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let states = store.flag_states()?;
    Ok(Json(InsightsResponse {
        top_flagged_sites: aggregate::top_flagged(&states, aggregate::TOP_FLAGGED_LIMIT),
    }))
}
