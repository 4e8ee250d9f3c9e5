//! Business logic services

pub mod clients;
pub mod equipment;
pub mod maintenance;
pub mod parts;
pub mod reports;
pub mod requests;
pub mod stats;

use crate::repository::Repository;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub clients: clients::ClientsService,
    pub equipment: equipment::EquipmentService,
    pub parts: parts::PartsService,
    pub maintenance: maintenance::MaintenanceService,
    pub requests: requests::RequestsService,
    pub stats: stats::StatsService,
    pub reports: reports::ReportsService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository) -> Self {
        Self {
            clients: clients::ClientsService::new(repository.clone()),
            equipment: equipment::EquipmentService::new(repository.clone()),
            parts: parts::PartsService::new(repository.clone()),
            maintenance: maintenance::MaintenanceService::new(repository.clone()),
            requests: requests::RequestsService::new(repository.clone()),
            stats: stats::StatsService::new(repository.clone()),
            reports: reports::ReportsService::new(repository),
        }
    }
}
