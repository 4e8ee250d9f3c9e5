//! Maintenance work-order model

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use super::enums::{Difficulty, MaintenanceStatus};

/// Maintenance work-order record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Maintenance {
    pub id: i64,
    pub equipment_id: i64,
    pub maintenance_date: Option<NaiveDate>,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub maintenance_type: Option<String>,
    pub description: Option<String>,
    pub work_cost: f64,
    pub parts_cost: f64,
    pub technician: Option<String>,
    pub status: MaintenanceStatus,
    pub duration_hours: Option<f64>,
    pub difficulty: Difficulty,
    /// Null until the work order is completed or entered manually
    pub actual_hours: Option<f64>,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
}

/// Maintenance row joined with equipment and client (for listings)
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct MaintenanceDetails {
    pub id: i64,
    pub equipment_id: i64,
    pub maintenance_date: Option<NaiveDate>,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub maintenance_type: Option<String>,
    pub description: Option<String>,
    pub work_cost: f64,
    pub parts_cost: f64,
    pub technician: Option<String>,
    pub status: MaintenanceStatus,
    pub duration_hours: Option<f64>,
    pub difficulty: Difficulty,
    pub actual_hours: Option<f64>,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub equipment_name: String,
    pub model: Option<String>,
    pub serial_number: Option<String>,
    pub client_name: Option<String>,
}

/// Create maintenance request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateMaintenance {
    pub equipment_id: i64,
    pub maintenance_date: Option<NaiveDate>,
    #[serde(rename = "type")]
    pub maintenance_type: Option<String>,
    pub description: Option<String>,
    pub work_cost: Option<f64>,
    pub parts_cost: Option<f64>,
    pub technician: Option<String>,
    pub duration_hours: Option<f64>,
    pub difficulty: Option<Difficulty>,
}

/// Update maintenance request (full-record replace)
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateMaintenance {
    pub equipment_id: i64,
    pub maintenance_date: Option<NaiveDate>,
    #[serde(rename = "type")]
    pub maintenance_type: Option<String>,
    pub description: Option<String>,
    pub work_cost: Option<f64>,
    pub parts_cost: Option<f64>,
    pub technician: Option<String>,
    pub status: MaintenanceStatus,
    pub duration_hours: Option<f64>,
    pub difficulty: Option<Difficulty>,
    /// Manually entered actual hours
    pub actual_hours: Option<f64>,
}
