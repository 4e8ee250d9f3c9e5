//! Aggregation API endpoints: work plan, low stock, dashboard counters

use axum::{extract::State, Json};
use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::enums::{Difficulty, MaintenanceStatus},
};

/// One row of the upcoming work plan
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct WorkPlanItem {
    pub equipment_name: String,
    pub model: Option<String>,
    pub serial_number: Option<String>,
    pub client_name: String,
    pub contact_person: Option<String>,
    pub phone: Option<String>,
    pub maintenance_date: Option<NaiveDate>,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub maintenance_type: Option<String>,
    pub description: Option<String>,
    pub technician: Option<String>,
    pub status: MaintenanceStatus,
    pub duration_hours: Option<f64>,
    pub difficulty: Difficulty,
    pub actual_hours: Option<f64>,
}

/// A part at or below its minimum stock threshold
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct LowStockPart {
    pub name: String,
    pub part_number: Option<String>,
    pub quantity: i64,
    pub min_quantity: i64,
    pub price: Option<f64>,
    pub supplier: Option<String>,
    pub category: Option<String>,
    /// How many units short of the minimum threshold
    pub need_to_order: i64,
}

/// Dashboard counters. All five keys are always present.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_equipment: i64,
    pub active_maintenance: i64,
    pub low_stock_parts: i64,
    pub completed_this_month: i64,
    pub new_requests: i64,
}

/// One row of the maintenance cost report
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct CostReportRow {
    pub maintenance_date: Option<NaiveDate>,
    pub equipment_name: String,
    pub model: Option<String>,
    pub client_name: String,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub maintenance_type: Option<String>,
    pub description: Option<String>,
    pub technician: Option<String>,
    pub work_cost: f64,
    pub parts_cost: f64,
    /// work_cost + parts_cost, nulls treated as zero
    pub total_cost: f64,
    pub duration_hours: Option<f64>,
    pub actual_hours: Option<f64>,
    pub difficulty: Difficulty,
    pub status: MaintenanceStatus,
}

/// Work plan for the next 7 days
#[utoipa::path(
    get,
    path = "/work-plan",
    tag = "stats",
    responses(
        (status = 200, description = "Upcoming maintenance", body = Vec<WorkPlanItem>)
    )
)]
pub async fn work_plan(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<WorkPlanItem>>> {
    let today = Utc::now().date_naive();
    let plan = state.services.stats.work_plan(today).await?;
    Ok(Json(plan))
}

/// Parts that need reordering
#[utoipa::path(
    get,
    path = "/low-stock-parts",
    tag = "stats",
    responses(
        (status = 200, description = "Low-stock parts", body = Vec<LowStockPart>)
    )
)]
pub async fn low_stock_parts(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<LowStockPart>>> {
    let parts = state.services.stats.low_stock_parts().await?;
    Ok(Json(parts))
}

/// Dashboard counters
#[utoipa::path(
    get,
    path = "/dashboard/stats",
    tag = "stats",
    responses(
        (status = 200, description = "Dashboard counters", body = DashboardStats)
    )
)]
pub async fn dashboard_stats(
    State(state): State<crate::AppState>,
) -> AppResult<Json<DashboardStats>> {
    let now: DateTime<Utc> = Utc::now();
    let stats = state.services.stats.dashboard(now).await?;
    Ok(Json(stats))
}
