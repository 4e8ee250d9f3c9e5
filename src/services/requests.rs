//! Service-requests workflow service

use crate::{
    error::AppResult,
    models::service_request::{CreateServiceRequest, ServiceRequest},
    repository::Repository,
};

#[derive(Clone)]
pub struct RequestsService {
    repository: Repository,
}

impl RequestsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<ServiceRequest>> {
        self.repository.service_requests.list().await
    }

    pub async fn get_by_id(&self, id: i64) -> AppResult<ServiceRequest> {
        self.repository.service_requests.get_by_id(id).await
    }

    pub async fn create(&self, data: &CreateServiceRequest) -> AppResult<i64> {
        self.repository.service_requests.create(data).await
    }

    /// Assign a technician: new → assigned
    pub async fn assign(&self, id: i64, technician: &str) -> AppResult<()> {
        self.repository.service_requests.assign(id, technician).await
    }

    /// Record the solution: assigned → resolved
    pub async fn record_solution(&self, id: i64, solution: &str) -> AppResult<()> {
        self.repository.service_requests.record_solution(id, solution).await
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        self.repository.service_requests.delete(id).await
    }
}
