//! Data models for Vulcan

pub mod client;
pub mod enums;
pub mod equipment;
pub mod maintenance;
pub mod part;
pub mod report;
pub mod service_request;

// Re-export commonly used types
pub use client::Client;
pub use enums::{Difficulty, MaintenanceStatus, RequestStatus, Urgency};
pub use equipment::{Equipment, EquipmentDetails};
pub use maintenance::{Maintenance, MaintenanceDetails};
pub use part::Part;
pub use report::Report;
pub use service_request::ServiceRequest;
