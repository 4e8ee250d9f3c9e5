//! Aggregation engine: derived read-only views over the base tables.

use chrono::{DateTime, Duration, NaiveDate, Utc};

use crate::{
    api::stats::{CostReportRow, DashboardStats, LowStockPart, WorkPlanItem},
    error::AppResult,
    repository::Repository,
};

#[derive(Clone)]
pub struct StatsService {
    repository: Repository,
}

impl StatsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Connectivity probe backing the readiness endpoint
    pub async fn ping(&self) -> AppResult<()> {
        sqlx::query_scalar::<_, i64>("SELECT 1")
            .fetch_one(&self.repository.pool)
            .await?;
        Ok(())
    }

    /// Upcoming work plan: maintenance dated within [today, today+7d]
    /// inclusive, joined with equipment and client, ordered by date then
    /// status. Pure function of the reference date and stored data.
    pub async fn work_plan(&self, today: NaiveDate) -> AppResult<Vec<WorkPlanItem>> {
        let horizon = today + Duration::days(7);
        let rows = sqlx::query_as::<_, WorkPlanItem>(
            r#"
            SELECT
                e.name AS equipment_name,
                e.model,
                e.serial_number,
                c.name AS client_name,
                c.contact_person,
                c.phone,
                m.maintenance_date,
                m.type,
                m.description,
                m.technician,
                m.status,
                m.duration_hours,
                m.difficulty,
                m.actual_hours
            FROM maintenance m
            JOIN equipment e ON m.equipment_id = e.id
            JOIN clients c ON e.client_id = c.id
            WHERE m.maintenance_date >= ? AND m.maintenance_date <= ?
            ORDER BY m.maintenance_date, m.status
            "#,
        )
        .bind(today)
        .bind(horizon)
        .fetch_all(&self.repository.pool)
        .await?;
        Ok(rows)
    }

    /// Parts at or below their minimum threshold, most urgent first
    pub async fn low_stock_parts(&self) -> AppResult<Vec<LowStockPart>> {
        let rows = sqlx::query_as::<_, LowStockPart>(
            r#"
            SELECT
                name,
                part_number,
                quantity,
                min_quantity,
                price,
                supplier,
                category,
                (min_quantity - quantity) AS need_to_order
            FROM parts
            WHERE quantity <= min_quantity
            ORDER BY (min_quantity - quantity) DESC
            "#,
        )
        .fetch_all(&self.repository.pool)
        .await?;
        Ok(rows)
    }

    /// Dashboard counters: five independent counts fanned out
    /// concurrently and joined. A failed sub-count is logged and
    /// reported as zero so the response always carries all five keys.
    pub async fn dashboard(&self, now: DateTime<Utc>) -> AppResult<DashboardStats> {
        let pool = &self.repository.pool;
        let month = now.format("%Y-%m").to_string();

        let (total_equipment, active_maintenance, low_stock_parts, completed_this_month, new_requests) = tokio::join!(
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM equipment").fetch_one(pool),
            sqlx::query_scalar::<_, i64>(
                "SELECT COUNT(*) FROM maintenance WHERE status IN ('planned', 'in_progress')",
            )
            .fetch_one(pool),
            sqlx::query_scalar::<_, i64>(
                "SELECT COUNT(*) FROM parts WHERE quantity <= min_quantity",
            )
            .fetch_one(pool),
            sqlx::query_scalar::<_, i64>(
                r#"
                SELECT COUNT(*) FROM maintenance
                WHERE status = 'completed'
                  AND strftime('%Y-%m', maintenance_date) = ?
                "#,
            )
            .bind(&month)
            .fetch_one(pool),
            sqlx::query_scalar::<_, i64>(
                "SELECT COUNT(*) FROM service_requests WHERE status = 'new'",
            )
            .fetch_one(pool),
        );

        fn tolerate(label: &str, result: Result<i64, sqlx::Error>) -> i64 {
            result.unwrap_or_else(|e| {
                tracing::warn!("Dashboard counter {} failed: {}", label, e);
                0
            })
        }

        Ok(DashboardStats {
            total_equipment: tolerate("total_equipment", total_equipment),
            active_maintenance: tolerate("active_maintenance", active_maintenance),
            low_stock_parts: tolerate("low_stock_parts", low_stock_parts),
            completed_this_month: tolerate("completed_this_month", completed_this_month),
            new_requests: tolerate("new_requests", new_requests),
        })
    }

    /// Cost report over an inclusive date range, newest first, with
    /// total_cost = work_cost + parts_cost (nulls as zero). Defaults to
    /// calendar year 2024 when bounds are omitted so an empty query
    /// string still yields a sensible report.
    pub async fn cost_report(
        &self,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> AppResult<Vec<CostReportRow>> {
        let start = start_date.unwrap_or_else(|| NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        let end = end_date.unwrap_or_else(|| NaiveDate::from_ymd_opt(2024, 12, 31).unwrap());

        let rows = sqlx::query_as::<_, CostReportRow>(
            r#"
            SELECT
                m.maintenance_date,
                e.name AS equipment_name,
                e.model,
                c.name AS client_name,
                m.type,
                m.description,
                m.technician,
                m.work_cost,
                m.parts_cost,
                (COALESCE(m.work_cost, 0) + COALESCE(m.parts_cost, 0)) AS total_cost,
                m.duration_hours,
                m.actual_hours,
                m.difficulty,
                m.status
            FROM maintenance m
            JOIN equipment e ON m.equipment_id = e.id
            JOIN clients c ON e.client_id = c.id
            WHERE m.maintenance_date BETWEEN ? AND ?
            ORDER BY m.maintenance_date DESC
            "#,
        )
        .bind(start)
        .bind(end)
        .fetch_all(&self.repository.pool)
        .await?;
        Ok(rows)
    }
}
