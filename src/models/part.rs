//! Spare-part model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Spare-part record. Low stock holds when quantity <= min_quantity.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Part {
    pub id: i64,
    pub name: String,
    /// Unique when present
    pub part_number: Option<String>,
    pub quantity: i64,
    pub min_quantity: i64,
    pub price: Option<f64>,
    pub supplier: Option<String>,
    pub category: Option<String>,
}

/// Create part request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreatePart {
    pub name: String,
    pub part_number: Option<String>,
    #[serde(default)]
    pub quantity: i64,
    #[serde(default)]
    pub min_quantity: i64,
    pub price: Option<f64>,
    pub supplier: Option<String>,
    pub category: Option<String>,
}

/// Update part request (full-record replace)
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdatePart {
    pub name: String,
    pub part_number: Option<String>,
    pub quantity: i64,
    pub min_quantity: i64,
    pub price: Option<f64>,
    pub supplier: Option<String>,
    pub category: Option<String>,
}
