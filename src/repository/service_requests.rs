//! Service-requests repository for database operations

use chrono::Utc;
use sqlx::{Pool, Sqlite};

use crate::{
    error::{AppError, AppResult},
    models::enums::{RequestStatus, Urgency},
    models::service_request::{CreateServiceRequest, ServiceRequest},
};

#[derive(Clone)]
pub struct ServiceRequestsRepository {
    pool: Pool<Sqlite>,
}

impl ServiceRequestsRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    /// List all requests, newest first
    pub async fn list(&self) -> AppResult<Vec<ServiceRequest>> {
        let rows = sqlx::query_as::<_, ServiceRequest>(
            "SELECT * FROM service_requests ORDER BY created_date DESC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Get request by ID
    pub async fn get_by_id(&self, id: i64) -> AppResult<ServiceRequest> {
        sqlx::query_as::<_, ServiceRequest>("SELECT * FROM service_requests WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Service request {} not found", id)))
    }

    /// Create a request, returning the new identity.
    /// Status starts at new.
    pub async fn create(&self, data: &CreateServiceRequest) -> AppResult<i64> {
        let result = sqlx::query(
            r#"
            INSERT INTO service_requests
                (client_name, equipment_name, equipment_model, serial_number,
                 problem_description, contact_person, phone, urgency,
                 status, created_date)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&data.client_name)
        .bind(&data.equipment_name)
        .bind(&data.equipment_model)
        .bind(&data.serial_number)
        .bind(&data.problem_description)
        .bind(&data.contact_person)
        .bind(&data.phone)
        .bind(data.urgency.unwrap_or(Urgency::Medium))
        .bind(RequestStatus::New)
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;
        Ok(result.last_insert_rowid())
    }

    /// Assign a technician, advancing the request to assigned
    pub async fn assign(&self, id: i64, technician: &str) -> AppResult<()> {
        let result = sqlx::query(
            "UPDATE service_requests SET assigned_technician = ?, status = ? WHERE id = ?",
        )
        .bind(technician)
        .bind(RequestStatus::Assigned)
        .bind(id)
        .execute(&self.pool)
        .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Service request {} not found", id)));
        }
        Ok(())
    }

    /// Record the solution, advancing the request to resolved
    pub async fn record_solution(&self, id: i64, solution: &str) -> AppResult<()> {
        let result = sqlx::query(
            "UPDATE service_requests SET solution_description = ?, status = ? WHERE id = ?",
        )
        .bind(solution)
        .bind(RequestStatus::Resolved)
        .bind(id)
        .execute(&self.pool)
        .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Service request {} not found", id)));
        }
        Ok(())
    }

    /// Delete a request
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM service_requests WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Service request {} not found", id)));
        }
        Ok(())
    }
}
