//! Spare-parts API endpoints

use axum::{
    extract::{Path, State},
    Json,
};

use crate::{
    error::AppResult,
    models::part::{CreatePart, Part, UpdatePart},
};

use super::{CreatedResponse, MessageResponse};

/// List all parts
#[utoipa::path(
    get,
    path = "/parts",
    tag = "parts",
    responses(
        (status = 200, description = "Part list", body = Vec<Part>)
    )
)]
pub async fn list_parts(State(state): State<crate::AppState>) -> AppResult<Json<Vec<Part>>> {
    let parts = state.services.parts.list().await?;
    Ok(Json(parts))
}

/// Create a part
#[utoipa::path(
    post,
    path = "/parts",
    tag = "parts",
    request_body = CreatePart,
    responses(
        (status = 200, description = "Part created", body = CreatedResponse)
    )
)]
pub async fn create_part(
    State(state): State<crate::AppState>,
    Json(data): Json<CreatePart>,
) -> AppResult<Json<CreatedResponse>> {
    let id = state.services.parts.create(&data).await?;
    Ok(Json(CreatedResponse {
        id,
        message: "Part created".to_string(),
    }))
}

/// Update a part
#[utoipa::path(
    put,
    path = "/parts/{id}",
    tag = "parts",
    params(("id" = i64, Path, description = "Part ID")),
    request_body = UpdatePart,
    responses(
        (status = 200, description = "Part updated", body = MessageResponse)
    )
)]
pub async fn update_part(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
    Json(data): Json<UpdatePart>,
) -> AppResult<Json<MessageResponse>> {
    state.services.parts.update(id, &data).await?;
    Ok(Json(MessageResponse {
        message: "Part updated".to_string(),
    }))
}

/// Delete a part
#[utoipa::path(
    delete,
    path = "/parts/{id}",
    tag = "parts",
    params(("id" = i64, Path, description = "Part ID")),
    responses(
        (status = 200, description = "Part deleted", body = MessageResponse)
    )
)]
pub async fn delete_part(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<MessageResponse>> {
    state.services.parts.delete(id).await?;
    Ok(Json(MessageResponse {
        message: "Part deleted".to_string(),
    }))
}
