//! Clients API endpoints

use axum::{
    extract::{Path, State},
    Json,
};

use crate::{
    error::AppResult,
    models::client::{Client, CreateClient, UpdateClient},
};

use super::{CreatedResponse, MessageResponse};

/// List all clients
#[utoipa::path(
    get,
    path = "/clients",
    tag = "clients",
    responses(
        (status = 200, description = "Client list", body = Vec<Client>)
    )
)]
pub async fn list_clients(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<Client>>> {
    let clients = state.services.clients.list().await?;
    Ok(Json(clients))
}

/// Create a client
#[utoipa::path(
    post,
    path = "/clients",
    tag = "clients",
    request_body = CreateClient,
    responses(
        (status = 200, description = "Client created", body = CreatedResponse)
    )
)]
pub async fn create_client(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateClient>,
) -> AppResult<Json<CreatedResponse>> {
    let id = state.services.clients.create(&data).await?;
    Ok(Json(CreatedResponse {
        id,
        message: "Client created".to_string(),
    }))
}

/// Update a client
#[utoipa::path(
    put,
    path = "/clients/{id}",
    tag = "clients",
    params(("id" = i64, Path, description = "Client ID")),
    request_body = UpdateClient,
    responses(
        (status = 200, description = "Client updated", body = MessageResponse)
    )
)]
pub async fn update_client(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
    Json(data): Json<UpdateClient>,
) -> AppResult<Json<MessageResponse>> {
    state.services.clients.update(id, &data).await?;
    Ok(Json(MessageResponse {
        message: "Client updated".to_string(),
    }))
}

/// Delete a client
#[utoipa::path(
    delete,
    path = "/clients/{id}",
    tag = "clients",
    params(("id" = i64, Path, description = "Client ID")),
    responses(
        (status = 200, description = "Client deleted", body = MessageResponse)
    )
)]
pub async fn delete_client(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<MessageResponse>> {
    state.services.clients.delete(id).await?;
    Ok(Json(MessageResponse {
        message: "Client deleted".to_string(),
    }))
}
