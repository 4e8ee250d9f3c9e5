//! Maintenance work-order API endpoints, including the timer lifecycle

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::maintenance::{CreateMaintenance, MaintenanceDetails, UpdateMaintenance},
};

use super::{CreatedResponse, MessageResponse};

/// Response for a started work order
#[derive(Serialize, ToSchema)]
pub struct StartResponse {
    pub message: String,
    pub start_time: DateTime<Utc>,
}

/// Response for a completed work order
#[derive(Serialize, ToSchema)]
pub struct CompleteResponse {
    pub message: String,
    pub end_time: DateTime<Utc>,
    /// Actual hours, formatted to exactly two decimal places
    pub actual_hours: Option<String>,
}

/// List all work orders with equipment and client details
#[utoipa::path(
    get,
    path = "/maintenance",
    tag = "maintenance",
    responses(
        (status = 200, description = "Work-order list", body = Vec<MaintenanceDetails>)
    )
)]
pub async fn list_maintenance(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<MaintenanceDetails>>> {
    let records = state.services.maintenance.list().await?;
    Ok(Json(records))
}

/// Create a work order
#[utoipa::path(
    post,
    path = "/maintenance",
    tag = "maintenance",
    request_body = CreateMaintenance,
    responses(
        (status = 200, description = "Work order created", body = CreatedResponse)
    )
)]
pub async fn create_maintenance(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateMaintenance>,
) -> AppResult<Json<CreatedResponse>> {
    let id = state.services.maintenance.create(&data).await?;
    Ok(Json(CreatedResponse {
        id,
        message: "Work order created".to_string(),
    }))
}

/// Update a work order
#[utoipa::path(
    put,
    path = "/maintenance/{id}",
    tag = "maintenance",
    params(("id" = i64, Path, description = "Work order ID")),
    request_body = UpdateMaintenance,
    responses(
        (status = 200, description = "Work order updated", body = MessageResponse)
    )
)]
pub async fn update_maintenance(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
    Json(data): Json<UpdateMaintenance>,
) -> AppResult<Json<MessageResponse>> {
    state.services.maintenance.update(id, &data).await?;
    Ok(Json(MessageResponse {
        message: "Work order updated".to_string(),
    }))
}

/// Delete a work order
#[utoipa::path(
    delete,
    path = "/maintenance/{id}",
    tag = "maintenance",
    params(("id" = i64, Path, description = "Work order ID")),
    responses(
        (status = 200, description = "Work order deleted", body = MessageResponse)
    )
)]
pub async fn delete_maintenance(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<MessageResponse>> {
    state.services.maintenance.delete(id).await?;
    Ok(Json(MessageResponse {
        message: "Work order deleted".to_string(),
    }))
}

/// Start the work timer
#[utoipa::path(
    put,
    path = "/maintenance/{id}/start",
    tag = "maintenance",
    params(("id" = i64, Path, description = "Work order ID")),
    responses(
        (status = 200, description = "Work started", body = StartResponse),
        (status = 404, description = "Work order not found")
    )
)]
pub async fn start_maintenance(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<StartResponse>> {
    let start_time = state.services.maintenance.start(id).await?;
    Ok(Json(StartResponse {
        message: "Work started".to_string(),
        start_time,
    }))
}

/// Stop the work timer and complete the order
#[utoipa::path(
    put,
    path = "/maintenance/{id}/complete",
    tag = "maintenance",
    params(("id" = i64, Path, description = "Work order ID")),
    responses(
        (status = 200, description = "Work completed", body = CompleteResponse),
        (status = 404, description = "Work order not found")
    )
)]
pub async fn complete_maintenance(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<CompleteResponse>> {
    let result = state.services.maintenance.complete(id).await?;
    Ok(Json(CompleteResponse {
        message: "Work completed".to_string(),
        end_time: result.end_time,
        actual_hours: result.actual_hours.map(|h| format!("{:.2}", h)),
    }))
}
