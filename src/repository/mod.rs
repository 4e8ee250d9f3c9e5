//! Repository layer for database operations

pub mod clients;
pub mod equipment;
pub mod maintenance;
pub mod parts;
pub mod reports;
pub mod seed;
pub mod service_requests;

use sqlx::{Pool, Sqlite};

/// Main repository struct holding the database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Sqlite>,
    pub clients: clients::ClientsRepository,
    pub equipment: equipment::EquipmentRepository,
    pub parts: parts::PartsRepository,
    pub maintenance: maintenance::MaintenanceRepository,
    pub service_requests: service_requests::ServiceRequestsRepository,
    pub reports: reports::ReportsRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self {
            clients: clients::ClientsRepository::new(pool.clone()),
            equipment: equipment::EquipmentRepository::new(pool.clone()),
            parts: parts::PartsRepository::new(pool.clone()),
            maintenance: maintenance::MaintenanceRepository::new(pool.clone()),
            service_requests: service_requests::ServiceRequestsRepository::new(pool.clone()),
            reports: reports::ReportsRepository::new(pool.clone()),
            pool,
        }
    }
}
