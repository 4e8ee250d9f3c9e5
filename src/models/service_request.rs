//! Service-request model
//!
//! Requests carry denormalized client/equipment snapshot fields rather
//! than foreign keys: a request may arrive before the asset is
//! registered, so it is deliberately decoupled from the client and
//! equipment tables.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use super::enums::{RequestStatus, Urgency};

/// Inbound service-request record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ServiceRequest {
    pub id: i64,
    pub client_name: String,
    pub equipment_name: String,
    pub equipment_model: Option<String>,
    pub serial_number: Option<String>,
    pub problem_description: String,
    pub contact_person: Option<String>,
    pub phone: Option<String>,
    pub urgency: Urgency,
    pub status: RequestStatus,
    pub created_date: DateTime<Utc>,
    pub assigned_technician: Option<String>,
    pub solution_description: Option<String>,
}

/// Create service-request payload
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateServiceRequest {
    pub client_name: String,
    pub equipment_name: String,
    pub equipment_model: Option<String>,
    pub serial_number: Option<String>,
    pub problem_description: String,
    pub contact_person: Option<String>,
    pub phone: Option<String>,
    pub urgency: Option<Urgency>,
}

/// Assign a technician to a request
#[derive(Debug, Deserialize, ToSchema)]
pub struct AssignTechnician {
    pub technician: String,
}

/// Record the solution for a request
#[derive(Debug, Deserialize, ToSchema)]
pub struct RecordSolution {
    pub solution_description: String,
}
