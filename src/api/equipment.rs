//! Equipment API endpoints

use axum::{
    extract::{Path, State},
    Json,
};

use crate::{
    error::AppResult,
    models::equipment::{CreateEquipment, EquipmentDetails, UpdateEquipment},
};

use super::{CreatedResponse, MessageResponse};

/// List all equipment with owning client details
#[utoipa::path(
    get,
    path = "/equipment",
    tag = "equipment",
    responses(
        (status = 200, description = "Equipment list", body = Vec<EquipmentDetails>)
    )
)]
pub async fn list_equipment(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<EquipmentDetails>>> {
    let equipment = state.services.equipment.list().await?;
    Ok(Json(equipment))
}

/// Create equipment
#[utoipa::path(
    post,
    path = "/equipment",
    tag = "equipment",
    request_body = CreateEquipment,
    responses(
        (status = 200, description = "Equipment created", body = CreatedResponse)
    )
)]
pub async fn create_equipment(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateEquipment>,
) -> AppResult<Json<CreatedResponse>> {
    let id = state.services.equipment.create(&data).await?;
    Ok(Json(CreatedResponse {
        id,
        message: "Equipment created".to_string(),
    }))
}

/// Update equipment
#[utoipa::path(
    put,
    path = "/equipment/{id}",
    tag = "equipment",
    params(("id" = i64, Path, description = "Equipment ID")),
    request_body = UpdateEquipment,
    responses(
        (status = 200, description = "Equipment updated", body = MessageResponse)
    )
)]
pub async fn update_equipment(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
    Json(data): Json<UpdateEquipment>,
) -> AppResult<Json<MessageResponse>> {
    state.services.equipment.update(id, &data).await?;
    Ok(Json(MessageResponse {
        message: "Equipment updated".to_string(),
    }))
}

/// Delete equipment
#[utoipa::path(
    delete,
    path = "/equipment/{id}",
    tag = "equipment",
    params(("id" = i64, Path, description = "Equipment ID")),
    responses(
        (status = 200, description = "Equipment deleted", body = MessageResponse)
    )
)]
pub async fn delete_equipment(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<MessageResponse>> {
    state.services.equipment.delete(id).await?;
    Ok(Json(MessageResponse {
        message: "Equipment deleted".to_string(),
    }))
}
