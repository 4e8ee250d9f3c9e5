//! Report API endpoints: cost report, snapshots and plain-text download

use axum::{
    extract::{Path, Query, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    error::AppResult,
    models::report::{CreateReport, Report},
};

use super::{stats::CostReportRow, CreatedResponse, MessageResponse};

/// Date range for the maintenance cost report
#[derive(Debug, Deserialize, IntoParams)]
pub struct CostReportQuery {
    #[serde(rename = "startDate")]
    pub start_date: Option<NaiveDate>,
    #[serde(rename = "endDate")]
    pub end_date: Option<NaiveDate>,
}

/// Maintenance cost report over an inclusive date range
#[utoipa::path(
    get,
    path = "/reports/maintenance",
    tag = "reports",
    params(CostReportQuery),
    responses(
        (status = 200, description = "Cost report rows", body = Vec<CostReportRow>)
    )
)]
pub async fn maintenance_cost_report(
    State(state): State<crate::AppState>,
    Query(query): Query<CostReportQuery>,
) -> AppResult<Json<Vec<CostReportRow>>> {
    let rows = state
        .services
        .stats
        .cost_report(query.start_date, query.end_date)
        .await?;
    Ok(Json(rows))
}

/// Save a report snapshot
#[utoipa::path(
    post,
    path = "/reports",
    tag = "reports",
    request_body = CreateReport,
    responses(
        (status = 200, description = "Report saved", body = CreatedResponse)
    )
)]
pub async fn create_report(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateReport>,
) -> AppResult<Json<CreatedResponse>> {
    let id = state.services.reports.create(&data).await?;
    Ok(Json(CreatedResponse {
        id,
        message: "Report saved".to_string(),
    }))
}

/// List all reports, newest first
#[utoipa::path(
    get,
    path = "/reports",
    tag = "reports",
    responses(
        (status = 200, description = "Report list", body = Vec<Report>)
    )
)]
pub async fn list_reports(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<Report>>> {
    let reports = state.services.reports.list().await?;
    Ok(Json(reports))
}

/// Delete a report
#[utoipa::path(
    delete,
    path = "/reports/{id}",
    tag = "reports",
    params(("id" = i64, Path, description = "Report ID")),
    responses(
        (status = 200, description = "Report deleted", body = MessageResponse),
        (status = 404, description = "Report not found")
    )
)]
pub async fn delete_report(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<MessageResponse>> {
    state.services.reports.delete(id).await?;
    Ok(Json(MessageResponse {
        message: "Report deleted".to_string(),
    }))
}

/// Download a report as a plain-text attachment
#[utoipa::path(
    get,
    path = "/reports/{id}/download",
    tag = "reports",
    params(("id" = i64, Path, description = "Report ID")),
    responses(
        (status = 200, description = "Rendered report", content_type = "text/plain"),
        (status = 404, description = "Report not found")
    )
)]
pub async fn download_report(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
) -> AppResult<Response> {
    let rendered = state.services.reports.render_text(id).await?;
    let headers = [
        (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename={}", rendered.filename),
        ),
    ];
    Ok((headers, rendered.content).into_response())
}
