//! Equipment model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Equipment record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Equipment {
    pub id: i64,
    pub name: String,
    pub model: Option<String>,
    /// Unique when present
    pub serial_number: Option<String>,
    pub location: Option<String>,
    /// Owning client; a unit may be registered before its client is
    pub client_id: Option<i64>,
    pub installation_date: Option<NaiveDate>,
    pub last_service: Option<NaiveDate>,
    pub next_service: Option<NaiveDate>,
    /// Free-text status, defaults to "active"
    pub status: String,
}

/// Equipment row joined with its owning client (for listings)
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct EquipmentDetails {
    pub id: i64,
    pub name: String,
    pub model: Option<String>,
    pub serial_number: Option<String>,
    pub location: Option<String>,
    pub client_id: Option<i64>,
    pub installation_date: Option<NaiveDate>,
    pub last_service: Option<NaiveDate>,
    pub next_service: Option<NaiveDate>,
    pub status: String,
    pub client_name: Option<String>,
    pub contact_person: Option<String>,
    pub phone: Option<String>,
}

/// Create equipment request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateEquipment {
    pub name: String,
    pub model: Option<String>,
    pub serial_number: Option<String>,
    pub location: Option<String>,
    pub client_id: Option<i64>,
    pub installation_date: Option<NaiveDate>,
    pub last_service: Option<NaiveDate>,
    pub next_service: Option<NaiveDate>,
    pub status: Option<String>,
}

/// Update equipment request (full-record replace)
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateEquipment {
    pub name: String,
    pub model: Option<String>,
    pub serial_number: Option<String>,
    pub location: Option<String>,
    pub client_id: Option<i64>,
    pub installation_date: Option<NaiveDate>,
    pub last_service: Option<NaiveDate>,
    pub next_service: Option<NaiveDate>,
    pub status: Option<String>,
}
