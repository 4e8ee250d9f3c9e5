//! Report model
//!
//! A report is an immutable, named snapshot of an aggregated dataset.
//! The dataset is stored serialized in the `data` column and parsed back
//! when listing; a corrupted payload degrades that report's data to null
//! instead of failing the whole listing.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Persisted report with its payload deserialized
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Report {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub report_type: String,
    pub period_start: Option<NaiveDate>,
    pub period_end: Option<NaiveDate>,
    pub created_date: DateTime<Utc>,
    /// Aggregated dataset at generation time; null when the stored
    /// payload could not be parsed
    pub data: Option<serde_json::Value>,
    pub file_path: Option<String>,
}

/// Create report request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateReport {
    pub name: String,
    #[serde(rename = "type")]
    pub report_type: String,
    pub period_start: Option<NaiveDate>,
    pub period_end: Option<NaiveDate>,
    pub data: serde_json::Value,
}
