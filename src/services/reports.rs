//! Report generator: snapshot aggregated datasets and render them.

use serde_json::Value;

use crate::{
    error::AppResult,
    models::report::{CreateReport, Report},
    repository::{reports::RawReport, Repository},
};

/// A rendered plain-text report ready to be served as an attachment
#[derive(Debug, Clone)]
pub struct RenderedReport {
    pub filename: String,
    pub content: String,
}

#[derive(Clone)]
pub struct ReportsService {
    repository: Repository,
}

impl ReportsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Persist a snapshot of an aggregated dataset as an immutable report
    pub async fn create(&self, data: &CreateReport) -> AppResult<i64> {
        self.repository.reports.create(data).await
    }

    /// List all reports newest first, payloads deserialized
    pub async fn list(&self) -> AppResult<Vec<Report>> {
        self.repository.reports.list().await
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        self.repository.reports.delete(id).await
    }

    /// Render a stored report to a plain-text document. A payload that
    /// fails to parse still yields the header, with the failure reported
    /// inline instead of aborting the response.
    pub async fn render_text(&self, id: i64) -> AppResult<RenderedReport> {
        let report = self.repository.reports.get_raw(id).await?;
        Ok(RenderedReport {
            filename: format!("report-{}.txt", report.id),
            content: render_report(&report),
        })
    }
}

fn render_report(report: &RawReport) -> String {
    let mut out = format!("REPORT: {}\n", report.name);
    out.push_str(&format!("Type: {}\n", report.report_type));
    out.push_str(&format!(
        "Period: {} - {}\n",
        format_date(report.period_start),
        format_date(report.period_end)
    ));
    out.push_str(&format!(
        "Created: {}\n\n",
        report.created_date.format("%Y-%m-%d %H:%M:%S")
    ));

    let Some(raw) = report.data.as_deref() else {
        return out;
    };

    match serde_json::from_str::<Vec<Value>>(raw) {
        Ok(entries) => {
            let mut total = 0.0_f64;
            for entry in &entries {
                out.push_str(&format!("Equipment: {}\n", field(entry, "equipment_name")));
                out.push_str(&format!("Client: {}\n", field(entry, "client_name")));
                out.push_str(&format!("Date: {}\n", field(entry, "maintenance_date")));
                let cost = entry
                    .get("total_cost")
                    .and_then(Value::as_f64)
                    .unwrap_or(0.0);
                total += cost;
                out.push_str(&format!("Cost: {:.2}\n", cost));
                out.push_str("---\n");
            }
            out.push_str(&format!(
                "\nTOTAL: {} entries, total cost: {:.2}",
                entries.len(),
                total
            ));
        }
        Err(e) => {
            tracing::warn!("Report {} payload failed to parse: {}", report.id, e);
            out.push_str(&format!("Failed to parse report data: {}", e));
        }
    }

    out
}

fn field(entry: &Value, key: &str) -> String {
    match entry.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Null) | None => "-".to_string(),
        Some(other) => other.to_string(),
    }
}

fn format_date(date: Option<chrono::NaiveDate>) -> String {
    date.map(|d| d.to_string()).unwrap_or_else(|| "-".to_string())
}
