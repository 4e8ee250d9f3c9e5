//! Vulcan Maintenance Management System
//!
//! A Rust implementation of the Vulcan maintenance-management server,
//! providing a REST JSON API for industrial equipment servicing: clients,
//! equipment, spare parts, work orders, service requests and reports.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
