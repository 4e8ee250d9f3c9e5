//! Reports repository for database operations

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{FromRow, Pool, Row, Sqlite};

use crate::{
    error::{AppError, AppResult},
    models::report::{CreateReport, Report},
};

/// Report row with the payload still serialized
#[derive(Debug, Clone, FromRow)]
pub struct RawReport {
    pub id: i64,
    pub name: String,
    #[sqlx(rename = "type")]
    pub report_type: String,
    pub period_start: Option<NaiveDate>,
    pub period_end: Option<NaiveDate>,
    pub created_date: DateTime<Utc>,
    pub data: Option<String>,
    pub file_path: Option<String>,
}

#[derive(Clone)]
pub struct ReportsRepository {
    pool: Pool<Sqlite>,
}

impl ReportsRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    /// Create a report snapshot, returning the new identity.
    /// The dataset is serialized into the data column.
    pub async fn create(&self, data: &CreateReport) -> AppResult<i64> {
        let payload = serde_json::to_string(&data.data)
            .map_err(|e| AppError::Internal(format!("Failed to serialize report data: {}", e)))?;

        let result = sqlx::query(
            r#"
            INSERT INTO reports (name, type, period_start, period_end, created_date, data)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&data.name)
        .bind(&data.report_type)
        .bind(data.period_start)
        .bind(data.period_end)
        .bind(Utc::now())
        .bind(payload)
        .execute(&self.pool)
        .await?;
        Ok(result.last_insert_rowid())
    }

    /// List all reports, newest first, with payloads deserialized.
    /// A corrupted payload is logged and degrades that report's data to
    /// null; the rest of the listing still returns.
    pub async fn list(&self) -> AppResult<Vec<Report>> {
        let rows = sqlx::query("SELECT * FROM reports ORDER BY created_date DESC")
            .fetch_all(&self.pool)
            .await?;

        let reports = rows
            .into_iter()
            .map(|row| {
                let id: i64 = row.get("id");
                let data = row
                    .get::<Option<String>, _>("data")
                    .and_then(|raw| match serde_json::from_str(&raw) {
                        Ok(value) => Some(value),
                        Err(e) => {
                            tracing::warn!("Report {} has an unparseable payload: {}", id, e);
                            None
                        }
                    });
                Report {
                    id,
                    name: row.get("name"),
                    report_type: row.get("type"),
                    period_start: row.get("period_start"),
                    period_end: row.get("period_end"),
                    created_date: row.get("created_date"),
                    data,
                    file_path: row.get("file_path"),
                }
            })
            .collect();

        Ok(reports)
    }

    /// Get a report by ID with its payload still serialized
    pub async fn get_raw(&self, id: i64) -> AppResult<RawReport> {
        sqlx::query_as::<_, RawReport>("SELECT * FROM reports WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Report {} not found", id)))
    }

    /// Delete a report
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM reports WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Report {} not found", id)));
        }
        Ok(())
    }
}
