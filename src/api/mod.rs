//! API handlers for Vulcan REST endpoints

pub mod clients;
pub mod equipment;
pub mod health;
pub mod maintenance;
pub mod openapi;
pub mod parts;
pub mod reports;
pub mod service_requests;
pub mod stats;

use serde::Serialize;
use utoipa::ToSchema;

/// Response for create operations: new identity plus confirmation
#[derive(Serialize, ToSchema)]
pub struct CreatedResponse {
    pub id: i64,
    pub message: String,
}

/// Confirmation response for update/delete operations
#[derive(Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}
