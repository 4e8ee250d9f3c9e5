//! Shared domain enums
//!
//! Status and classification fields are closed enumerations stored as
//! lowercase text, validated when a request body is deserialized.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ---------------------------------------------------------------------------
// MaintenanceStatus
// ---------------------------------------------------------------------------

/// Work-order status. The timer lifecycle only ever advances
/// planned → in_progress → completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[serde(rename_all = "snake_case")]
#[sqlx(rename_all = "snake_case")]
pub enum MaintenanceStatus {
    Planned,
    InProgress,
    Completed,
}

impl Default for MaintenanceStatus {
    fn default() -> Self {
        MaintenanceStatus::Planned
    }
}

// ---------------------------------------------------------------------------
// Difficulty
// ---------------------------------------------------------------------------

/// Work-order difficulty rating
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[serde(rename_all = "snake_case")]
#[sqlx(rename_all = "snake_case")]
pub enum Difficulty {
    Low,
    Medium,
    High,
}

impl Default for Difficulty {
    fn default() -> Self {
        Difficulty::Medium
    }
}

// ---------------------------------------------------------------------------
// Urgency
// ---------------------------------------------------------------------------

/// Service-request urgency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[serde(rename_all = "snake_case")]
#[sqlx(rename_all = "snake_case")]
pub enum Urgency {
    Low,
    Medium,
    High,
    Critical,
}

impl Default for Urgency {
    fn default() -> Self {
        Urgency::Medium
    }
}

// ---------------------------------------------------------------------------
// RequestStatus
// ---------------------------------------------------------------------------

/// Service-request status. Advances new → assigned → resolved, each
/// transition gated by an explicit action (assign technician, record
/// solution).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[serde(rename_all = "snake_case")]
#[sqlx(rename_all = "snake_case")]
pub enum RequestStatus {
    New,
    Assigned,
    Resolved,
}

impl Default for RequestStatus {
    fn default() -> Self {
        RequestStatus::New
    }
}
