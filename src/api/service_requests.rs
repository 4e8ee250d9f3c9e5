//! Service-request API endpoints

use axum::{
    extract::{Path, State},
    Json,
};

use crate::{
    error::AppResult,
    models::service_request::{
        AssignTechnician, CreateServiceRequest, RecordSolution, ServiceRequest,
    },
};

use super::{CreatedResponse, MessageResponse};

/// List all service requests, newest first
#[utoipa::path(
    get,
    path = "/service-requests",
    tag = "service-requests",
    responses(
        (status = 200, description = "Request list", body = Vec<ServiceRequest>)
    )
)]
pub async fn list_requests(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<ServiceRequest>>> {
    let requests = state.services.requests.list().await?;
    Ok(Json(requests))
}

/// Create a service request
#[utoipa::path(
    post,
    path = "/service-requests",
    tag = "service-requests",
    request_body = CreateServiceRequest,
    responses(
        (status = 200, description = "Request created", body = CreatedResponse)
    )
)]
pub async fn create_request(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateServiceRequest>,
) -> AppResult<Json<CreatedResponse>> {
    let id = state.services.requests.create(&data).await?;
    Ok(Json(CreatedResponse {
        id,
        message: "Request created".to_string(),
    }))
}

/// Assign a technician to a request
#[utoipa::path(
    put,
    path = "/service-requests/{id}/assign",
    tag = "service-requests",
    params(("id" = i64, Path, description = "Request ID")),
    request_body = AssignTechnician,
    responses(
        (status = 200, description = "Technician assigned", body = MessageResponse),
        (status = 404, description = "Request not found")
    )
)]
pub async fn assign_request(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
    Json(data): Json<AssignTechnician>,
) -> AppResult<Json<MessageResponse>> {
    state.services.requests.assign(id, &data.technician).await?;
    Ok(Json(MessageResponse {
        message: "Technician assigned".to_string(),
    }))
}

/// Record the solution for a request
#[utoipa::path(
    put,
    path = "/service-requests/{id}/solution",
    tag = "service-requests",
    params(("id" = i64, Path, description = "Request ID")),
    request_body = RecordSolution,
    responses(
        (status = 200, description = "Solution recorded", body = MessageResponse),
        (status = 404, description = "Request not found")
    )
)]
pub async fn solve_request(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
    Json(data): Json<RecordSolution>,
) -> AppResult<Json<MessageResponse>> {
    state
        .services
        .requests
        .record_solution(id, &data.solution_description)
        .await?;
    Ok(Json(MessageResponse {
        message: "Solution recorded".to_string(),
    }))
}

/// Delete a service request
#[utoipa::path(
    delete,
    path = "/service-requests/{id}",
    tag = "service-requests",
    params(("id" = i64, Path, description = "Request ID")),
    responses(
        (status = 200, description = "Request deleted", body = MessageResponse)
    )
)]
pub async fn delete_request(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<MessageResponse>> {
    state.services.requests.delete(id).await?;
    Ok(Json(MessageResponse {
        message: "Request deleted".to_string(),
    }))
}
