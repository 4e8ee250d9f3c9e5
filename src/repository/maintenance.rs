//! Maintenance work-order repository for database operations

use chrono::{DateTime, Utc};
use sqlx::{Pool, Sqlite};

use crate::{
    error::{AppError, AppResult},
    models::maintenance::{CreateMaintenance, Maintenance, MaintenanceDetails, UpdateMaintenance},
    models::enums::{Difficulty, MaintenanceStatus},
};

#[derive(Clone)]
pub struct MaintenanceRepository {
    pool: Pool<Sqlite>,
}

impl MaintenanceRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    /// List all work orders joined with equipment and client details,
    /// newest first
    pub async fn list(&self) -> AppResult<Vec<MaintenanceDetails>> {
        let rows = sqlx::query_as::<_, MaintenanceDetails>(
            r#"
            SELECT
                m.id, m.equipment_id, m.maintenance_date, m.type,
                m.description, m.work_cost, m.parts_cost, m.technician,
                m.status, m.duration_hours, m.difficulty, m.actual_hours,
                m.start_time, m.end_time,
                e.name AS equipment_name,
                e.model,
                e.serial_number,
                c.name AS client_name
            FROM maintenance m
            JOIN equipment e ON m.equipment_id = e.id
            LEFT JOIN clients c ON e.client_id = c.id
            ORDER BY m.maintenance_date DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Get work order by ID
    pub async fn get_by_id(&self, id: i64) -> AppResult<Maintenance> {
        sqlx::query_as::<_, Maintenance>("SELECT * FROM maintenance WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Maintenance {} not found", id)))
    }

    /// Create a work order, returning the new identity.
    /// Status starts at planned; the timer fields stay null.
    pub async fn create(&self, data: &CreateMaintenance) -> AppResult<i64> {
        let result = sqlx::query(
            r#"
            INSERT INTO maintenance
                (equipment_id, maintenance_date, type, description,
                 work_cost, parts_cost, technician, status,
                 duration_hours, difficulty)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(data.equipment_id)
        .bind(data.maintenance_date)
        .bind(&data.maintenance_type)
        .bind(&data.description)
        .bind(data.work_cost.unwrap_or(0.0))
        .bind(data.parts_cost.unwrap_or(0.0))
        .bind(&data.technician)
        .bind(MaintenanceStatus::Planned)
        .bind(data.duration_hours)
        .bind(data.difficulty.unwrap_or_default())
        .execute(&self.pool)
        .await?;
        Ok(result.last_insert_rowid())
    }

    /// Update a work order (every column rewritten)
    pub async fn update(&self, id: i64, data: &UpdateMaintenance) -> AppResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE maintenance SET
                equipment_id = ?, maintenance_date = ?, type = ?,
                description = ?, work_cost = ?, parts_cost = ?,
                technician = ?, status = ?, duration_hours = ?,
                difficulty = ?, actual_hours = ?
            WHERE id = ?
            "#,
        )
        .bind(data.equipment_id)
        .bind(data.maintenance_date)
        .bind(&data.maintenance_type)
        .bind(&data.description)
        .bind(data.work_cost.unwrap_or(0.0))
        .bind(data.parts_cost.unwrap_or(0.0))
        .bind(&data.technician)
        .bind(data.status)
        .bind(data.duration_hours)
        .bind(data.difficulty.unwrap_or(Difficulty::Medium))
        .bind(data.actual_hours)
        .bind(id)
        .execute(&self.pool)
        .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Maintenance {} not found", id)));
        }
        Ok(())
    }

    /// Delete a work order
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM maintenance WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Maintenance {} not found", id)));
        }
        Ok(())
    }

    /// Start the work timer: record the start timestamp and force the
    /// status to in_progress. Restarting overwrites the previous
    /// start_time.
    pub async fn set_started(&self, id: i64, start_time: DateTime<Utc>) -> AppResult<()> {
        let result = sqlx::query(
            "UPDATE maintenance SET start_time = ?, status = ? WHERE id = ?",
        )
        .bind(start_time)
        .bind(MaintenanceStatus::InProgress)
        .bind(id)
        .execute(&self.pool)
        .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Maintenance {} not found", id)));
        }
        Ok(())
    }

    /// Stop the work timer: record the end timestamp, the computed
    /// actual hours and the completed status
    pub async fn set_completed(
        &self,
        id: i64,
        end_time: DateTime<Utc>,
        actual_hours: Option<f64>,
    ) -> AppResult<()> {
        let result = sqlx::query(
            "UPDATE maintenance SET end_time = ?, actual_hours = ?, status = ? WHERE id = ?",
        )
        .bind(end_time)
        .bind(actual_hours)
        .bind(MaintenanceStatus::Completed)
        .bind(id)
        .execute(&self.pool)
        .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Maintenance {} not found", id)));
        }
        Ok(())
    }
}
