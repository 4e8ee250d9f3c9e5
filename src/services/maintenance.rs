//! Maintenance work-order service: CRUD plus the work-timer lifecycle.
//!
//! The timer lifecycle advances planned → in_progress → completed.
//! Start records a timestamp and may be re-entered (the later call
//! overwrites the earlier start). Complete derives the actual hours
//! from the recorded start, or falls back to the planned duration when
//! the timer was never started.

use chrono::{DateTime, Utc};

use crate::{
    error::AppResult,
    models::maintenance::{
        CreateMaintenance, Maintenance, MaintenanceDetails, UpdateMaintenance,
    },
    repository::Repository,
};

/// Wall-clock difference in fractional hours, rounded to two decimals.
pub fn elapsed_hours(start: DateTime<Utc>, end: DateTime<Utc>) -> f64 {
    let ms = (end - start).num_milliseconds() as f64;
    let hours = ms / 3_600_000.0;
    (hours * 100.0).round() / 100.0
}

/// Result of a completed work order
#[derive(Debug, Clone)]
pub struct CompletionResult {
    pub end_time: DateTime<Utc>,
    pub actual_hours: Option<f64>,
}

#[derive(Clone)]
pub struct MaintenanceService {
    repository: Repository,
}

impl MaintenanceService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<MaintenanceDetails>> {
        self.repository.maintenance.list().await
    }

    pub async fn get_by_id(&self, id: i64) -> AppResult<Maintenance> {
        self.repository.maintenance.get_by_id(id).await
    }

    pub async fn create(&self, data: &CreateMaintenance) -> AppResult<i64> {
        self.repository.maintenance.create(data).await
    }

    pub async fn update(&self, id: i64, data: &UpdateMaintenance) -> AppResult<()> {
        self.repository.maintenance.update(id, data).await
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        self.repository.maintenance.delete(id).await
    }

    /// Start the work timer. Allowed from any state; a repeated start
    /// overwrites the previous start_time.
    pub async fn start(&self, id: i64) -> AppResult<DateTime<Utc>> {
        let now = Utc::now();
        self.repository.maintenance.set_started(id, now).await?;
        Ok(now)
    }

    /// Stop the work timer and complete the order.
    ///
    /// The read and the write are two independent round-trips; a
    /// conflicting write between them is last-write-wins.
    pub async fn complete(&self, id: i64) -> AppResult<CompletionResult> {
        let record = self.repository.maintenance.get_by_id(id).await?;
        let end_time = Utc::now();

        let actual_hours = match record.start_time {
            Some(start) => Some(elapsed_hours(start, end_time)),
            None => record.duration_hours,
        };

        self.repository
            .maintenance
            .set_completed(id, end_time, actual_hours)
            .await?;

        Ok(CompletionResult {
            end_time,
            actual_hours,
        })
    }
}
