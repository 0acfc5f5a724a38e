use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use sitewarden_types::api::{AckResponse, AddReportRequest, ReportCreatedResponse, ReportsResponse};

use crate::AppState;
use crate::error::ApiError;
use crate::extract::Json;

/// POST /report — creates the report and bumps the site's flag count,
/// echoing the created report back.
pub async fn add_report(
    State(store): State<AppState>,
    Json(req): Json<AddReportRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let report = store.add_report(&req.site, &req.reason)?;
    Ok((
        StatusCode::CREATED,
        Json(ReportCreatedResponse {
            message: "Report added".into(),
            report,
        }),
    ))
}

/// GET /reports
pub async fn get_reports(State(store): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(ReportsResponse {
        reports: store.reports()?,
    }))
}

/// DELETE /report/{id}
pub async fn delete_report(
    State(store): State<AppState>,
    Path(id): Path<u64>,
) -> Result<impl IntoResponse, ApiError> {
    store.delete_report(id)?;
    Ok(Json(AckResponse {
        message: "Report deleted".into(),
    }))
}
