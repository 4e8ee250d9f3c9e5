//! Store-level tests running against an in-memory SQLite database with
//! migrations applied.

use axum::{extract::State, http::StatusCode};
use chrono::{Duration, NaiveDate, TimeZone, Utc};
use serde_json::json;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;
use std::sync::Arc;

use vulcan_server::{
    api,
    config::AppConfig,
    error::AppError,
    models::client::CreateClient,
    models::enums::{MaintenanceStatus, RequestStatus, Urgency},
    models::equipment::CreateEquipment,
    models::maintenance::CreateMaintenance,
    models::part::CreatePart,
    models::report::CreateReport,
    models::service_request::CreateServiceRequest,
    repository::{seed, Repository},
    services::{maintenance::elapsed_hours, Services},
    AppState,
};

async fn test_store() -> (Services, Pool<Sqlite>) {
    // A single connection keeps every statement on the same in-memory
    // database. Foreign keys stay unenforced, matching the server.
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .expect("Invalid connection string")
        .foreign_keys(false);
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .expect("Failed to open in-memory database");
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");
    (Services::new(Repository::new(pool.clone())), pool)
}

fn part(name: &str, number: &str, quantity: i64, min_quantity: i64) -> CreatePart {
    CreatePart {
        name: name.to_string(),
        part_number: Some(number.to_string()),
        quantity,
        min_quantity,
        price: Some(10.0),
        supplier: None,
        category: None,
    }
}

async fn fixture_equipment(services: &Services) -> i64 {
    let client_id = services
        .clients
        .create(&CreateClient {
            name: "Metalworks Plant".to_string(),
            contact_person: Some("A. Ivanov".to_string()),
            phone: Some("+1-555-123-4567".to_string()),
            email: None,
            address: None,
        })
        .await
        .expect("create client");

    services
        .equipment
        .create(&CreateEquipment {
            name: "Turning lathe".to_string(),
            model: Some("CNC-100".to_string()),
            serial_number: Some("TS001".to_string()),
            location: Some("Shop 1".to_string()),
            client_id: Some(client_id),
            installation_date: None,
            last_service: None,
            next_service: None,
            status: None,
        })
        .await
        .expect("create equipment")
}

fn work_order(equipment_id: i64, date: NaiveDate, duration_hours: Option<f64>) -> CreateMaintenance {
    CreateMaintenance {
        equipment_id,
        maintenance_date: Some(date),
        maintenance_type: Some("scheduled".to_string()),
        description: None,
        work_cost: Some(1000.0),
        parts_cost: Some(250.0),
        technician: Some("P. Sergeyev".to_string()),
        duration_hours,
        difficulty: None,
    }
}

// ---------------------------------------------------------------------------
// Low stock
// ---------------------------------------------------------------------------

#[tokio::test]
async fn low_stock_lists_exactly_parts_at_or_below_threshold() {
    let (services, _pool) = test_store().await;

    services.parts.create(&part("Bearing", "B-1", 15, 5)).await.unwrap();
    services.parts.create(&part("Belt", "B-2", 8, 10)).await.unwrap();
    services.parts.create(&part("Sensor", "B-3", 1, 5)).await.unwrap();
    services.parts.create(&part("Filter", "B-4", 8, 8)).await.unwrap();

    let low = services.stats.low_stock_parts().await.unwrap();
    let names: Vec<&str> = low.iter().map(|p| p.name.as_str()).collect();

    // quantity <= min_quantity only, most urgent first
    assert_eq!(names, vec!["Sensor", "Belt", "Filter"]);
    assert_eq!(low[0].need_to_order, 4);
    assert_eq!(low[1].need_to_order, 2);
    assert_eq!(low[2].need_to_order, 0);
}

#[tokio::test]
async fn low_stock_need_to_order_example() {
    let (services, _pool) = test_store().await;
    services.parts.create(&part("Sensor", "S-3", 3, 5)).await.unwrap();

    let low = services.stats.low_stock_parts().await.unwrap();
    assert_eq!(low.len(), 1);
    assert_eq!(low[0].need_to_order, 2);
}

// ---------------------------------------------------------------------------
// Work plan
// ---------------------------------------------------------------------------

#[tokio::test]
async fn work_plan_window_is_inclusive_on_both_ends() {
    let (services, _pool) = test_store().await;
    let equipment_id = fixture_equipment(&services).await;

    let today = NaiveDate::from_ymd_opt(2024, 11, 20).unwrap();
    for offset in [-1_i64, 0, 3, 7, 8] {
        services
            .maintenance
            .create(&work_order(equipment_id, today + Duration::days(offset), Some(4.0)))
            .await
            .unwrap();
    }

    let plan = services.stats.work_plan(today).await.unwrap();
    let dates: Vec<NaiveDate> = plan.iter().filter_map(|i| i.maintenance_date).collect();

    assert_eq!(
        dates,
        vec![
            today,
            today + Duration::days(3),
            today + Duration::days(7),
        ]
    );
    assert_eq!(plan[0].equipment_name, "Turning lathe");
    assert_eq!(plan[0].client_name, "Metalworks Plant");
}

// ---------------------------------------------------------------------------
// Work-timer lifecycle
// ---------------------------------------------------------------------------

#[tokio::test]
async fn start_sets_status_and_start_time() {
    let (services, _pool) = test_store().await;
    let equipment_id = fixture_equipment(&services).await;
    let id = services
        .maintenance
        .create(&work_order(equipment_id, NaiveDate::from_ymd_opt(2024, 11, 25).unwrap(), Some(4.0)))
        .await
        .unwrap();

    let started = services.maintenance.start(id).await.unwrap();

    let record = services.maintenance.get_by_id(id).await.unwrap();
    assert_eq!(record.status, MaintenanceStatus::InProgress);
    assert_eq!(record.start_time, Some(started));
    assert!(record.actual_hours.is_none());
}

#[tokio::test]
async fn restarting_overwrites_start_time() {
    let (services, _pool) = test_store().await;
    let equipment_id = fixture_equipment(&services).await;
    let id = services
        .maintenance
        .create(&work_order(equipment_id, NaiveDate::from_ymd_opt(2024, 11, 25).unwrap(), Some(4.0)))
        .await
        .unwrap();

    let first = services.maintenance.start(id).await.unwrap();
    let second = services.maintenance.start(id).await.unwrap();

    let record = services.maintenance.get_by_id(id).await.unwrap();
    assert!(second >= first);
    assert_eq!(record.start_time, Some(second));
}

#[tokio::test]
async fn complete_without_start_falls_back_to_planned_duration() {
    let (services, _pool) = test_store().await;
    let equipment_id = fixture_equipment(&services).await;
    let id = services
        .maintenance
        .create(&work_order(equipment_id, NaiveDate::from_ymd_opt(2024, 11, 25).unwrap(), Some(4.0)))
        .await
        .unwrap();

    let result = services.maintenance.complete(id).await.unwrap();
    assert_eq!(result.actual_hours, Some(4.0));

    let record = services.maintenance.get_by_id(id).await.unwrap();
    assert_eq!(record.status, MaintenanceStatus::Completed);
    assert_eq!(record.actual_hours, Some(4.0));
    assert!(record.end_time.is_some());
    assert!(record.start_time.is_none());
}

#[tokio::test]
async fn complete_after_start_computes_elapsed_hours() {
    let (services, _pool) = test_store().await;
    let equipment_id = fixture_equipment(&services).await;
    let id = services
        .maintenance
        .create(&work_order(equipment_id, NaiveDate::from_ymd_opt(2024, 11, 25).unwrap(), Some(4.0)))
        .await
        .unwrap();

    services.maintenance.start(id).await.unwrap();
    let result = services.maintenance.complete(id).await.unwrap();

    // Start and complete ran back to back, so the rounded elapsed time
    // is zero hours rather than the planned four.
    assert_eq!(result.actual_hours, Some(0.0));

    let record = services.maintenance.get_by_id(id).await.unwrap();
    assert_eq!(record.status, MaintenanceStatus::Completed);
    assert_eq!(record.actual_hours, Some(0.0));
}

#[tokio::test]
async fn completing_missing_work_order_is_not_found() {
    let (services, _pool) = test_store().await;

    let err = services.maintenance.complete(9999).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[test]
fn elapsed_hours_rounds_to_two_decimals() {
    let start = Utc.with_ymd_and_hms(2024, 11, 25, 8, 0, 0).unwrap();

    // 5,400,000 ms elapsed -> 1.50 hours
    let end = start + Duration::milliseconds(5_400_000);
    let hours = elapsed_hours(start, end);
    assert_eq!(hours, 1.5);
    assert_eq!(format!("{:.2}", hours), "1.50");

    // 100 seconds -> 0.0277... -> 0.03
    let end = start + Duration::seconds(100);
    assert_eq!(elapsed_hours(start, end), 0.03);
}

// ---------------------------------------------------------------------------
// Dashboard
// ---------------------------------------------------------------------------

#[tokio::test]
async fn dashboard_returns_all_five_counters() {
    let (services, pool) = test_store().await;
    assert!(seed::seed_if_empty(&pool).await.unwrap());

    let stats = services.stats.dashboard(Utc::now()).await.unwrap();

    assert_eq!(stats.total_equipment, 4);
    // One planned and one in_progress order in the sample data
    assert_eq!(stats.active_maintenance, 2);
    // Belt (8 <= 10) and sensor (3 <= 5)
    assert_eq!(stats.low_stock_parts, 2);
    // Sample completions are dated November 2024
    assert_eq!(stats.completed_this_month, 0);
    assert_eq!(stats.new_requests, 3);
}

#[tokio::test]
async fn dashboard_counts_completions_in_reference_month() {
    let (services, pool) = test_store().await;
    assert!(seed::seed_if_empty(&pool).await.unwrap());

    let november = Utc.with_ymd_and_hms(2024, 11, 30, 12, 0, 0).unwrap();
    let stats = services.stats.dashboard(november).await.unwrap();
    assert_eq!(stats.completed_this_month, 3);
}

#[tokio::test]
async fn dashboard_reports_zero_for_a_failed_counter() {
    let (services, pool) = test_store().await;
    assert!(seed::seed_if_empty(&pool).await.unwrap());

    // Lose one table behind the repository's back so its counter fails
    sqlx::query("DROP TABLE service_requests")
        .execute(&pool)
        .await
        .unwrap();

    let stats = services.stats.dashboard(Utc::now()).await.unwrap();

    assert_eq!(stats.new_requests, 0);
    assert_eq!(stats.total_equipment, 4);
    assert_eq!(stats.active_maintenance, 2);
    assert_eq!(stats.low_stock_parts, 2);
}

#[tokio::test]
async fn seeding_runs_once() {
    let (_services, pool) = test_store().await;
    assert!(seed::seed_if_empty(&pool).await.unwrap());
    assert!(!seed::seed_if_empty(&pool).await.unwrap());
}

// ---------------------------------------------------------------------------
// Health
// ---------------------------------------------------------------------------

fn test_state(services: Services) -> AppState {
    AppState {
        config: Arc::new(AppConfig {
            server: Default::default(),
            database: Default::default(),
            logging: Default::default(),
        }),
        services: Arc::new(services),
    }
}

#[tokio::test]
async fn readiness_follows_store_availability() {
    let (services, pool) = test_store().await;
    let state = test_state(services);

    let response = api::health::readiness_check(State(state.clone())).await;
    assert_eq!(response.status(), StatusCode::OK);

    // A closed pool fails the probe
    pool.close().await;
    let response = api::health::readiness_check(State(state)).await;
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}

// ---------------------------------------------------------------------------
// Cost report
// ---------------------------------------------------------------------------

#[tokio::test]
async fn cost_report_sums_costs_and_defaults_to_2024() {
    let (services, pool) = test_store().await;
    assert!(seed::seed_if_empty(&pool).await.unwrap());

    let rows = services.stats.cost_report(None, None).await.unwrap();
    // All five sample orders are dated November 2024
    assert_eq!(rows.len(), 5);
    // Newest first
    assert!(rows.windows(2).all(|w| w[0].maintenance_date >= w[1].maintenance_date));
    // total_cost = work_cost + parts_cost
    for row in &rows {
        assert!((row.total_cost - (row.work_cost + row.parts_cost)).abs() < 1e-9);
    }

    let empty = services
        .stats
        .cost_report(
            Some(NaiveDate::from_ymd_opt(2023, 1, 1).unwrap()),
            Some(NaiveDate::from_ymd_opt(2023, 12, 31).unwrap()),
        )
        .await
        .unwrap();
    assert!(empty.is_empty());
}

// ---------------------------------------------------------------------------
// Service requests
// ---------------------------------------------------------------------------

#[tokio::test]
async fn request_status_advances_through_assign_and_solution() {
    let (services, _pool) = test_store().await;

    let id = services
        .requests
        .create(&CreateServiceRequest {
            client_name: "Metalworks Plant".to_string(),
            equipment_name: "Turning lathe".to_string(),
            equipment_model: None,
            serial_number: None,
            problem_description: "Motor will not start".to_string(),
            contact_person: None,
            phone: None,
            urgency: Some(Urgency::High),
        })
        .await
        .unwrap();

    let request = services.requests.get_by_id(id).await.unwrap();
    assert_eq!(request.status, RequestStatus::New);
    assert_eq!(request.urgency, Urgency::High);

    services.requests.assign(id, "M. Kozlov").await.unwrap();
    let request = services.requests.get_by_id(id).await.unwrap();
    assert_eq!(request.status, RequestStatus::Assigned);
    assert_eq!(request.assigned_technician.as_deref(), Some("M. Kozlov"));

    services
        .requests
        .record_solution(id, "Replaced the starter relay")
        .await
        .unwrap();
    let request = services.requests.get_by_id(id).await.unwrap();
    assert_eq!(request.status, RequestStatus::Resolved);
    assert_eq!(
        request.solution_description.as_deref(),
        Some("Replaced the starter relay")
    );
}

#[tokio::test]
async fn assigning_missing_request_is_not_found() {
    let (services, _pool) = test_store().await;
    let err = services.requests.assign(42, "Nobody").await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

// ---------------------------------------------------------------------------
// Reports
// ---------------------------------------------------------------------------

fn sample_dataset() -> serde_json::Value {
    json!([
        {
            "equipment_name": "Turning lathe",
            "client_name": "Metalworks Plant",
            "maintenance_date": "2024-11-15",
            "total_cost": 6200.50
        },
        {
            "equipment_name": "Milling machine",
            "client_name": "Precision Parts Co",
            "maintenance_date": "2024-11-18",
            "total_cost": 5100.00
        }
    ])
}

#[tokio::test]
async fn report_round_trips_its_dataset() {
    let (services, _pool) = test_store().await;

    let dataset = sample_dataset();
    let id = services
        .reports
        .create(&CreateReport {
            name: "November costs".to_string(),
            report_type: "maintenance".to_string(),
            period_start: NaiveDate::from_ymd_opt(2024, 11, 1),
            period_end: NaiveDate::from_ymd_opt(2024, 11, 30),
            data: dataset.clone(),
        })
        .await
        .unwrap();

    let reports = services.reports.list().await.unwrap();
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].id, id);
    assert_eq!(reports[0].data.as_ref(), Some(&dataset));

    services.reports.delete(id).await.unwrap();
    assert!(services.reports.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn report_renders_header_entries_and_total() {
    let (services, _pool) = test_store().await;

    let id = services
        .reports
        .create(&CreateReport {
            name: "November costs".to_string(),
            report_type: "maintenance".to_string(),
            period_start: NaiveDate::from_ymd_opt(2024, 11, 1),
            period_end: NaiveDate::from_ymd_opt(2024, 11, 30),
            data: sample_dataset(),
        })
        .await
        .unwrap();

    let rendered = services.reports.render_text(id).await.unwrap();
    assert_eq!(rendered.filename, format!("report-{}.txt", id));

    let content = &rendered.content;
    assert!(content.starts_with("REPORT: November costs\n"));
    assert!(content.contains("Type: maintenance\n"));
    assert!(content.contains("Period: 2024-11-01 - 2024-11-30\n"));
    assert!(content.contains("Equipment: Turning lathe\n"));
    assert!(content.contains("Client: Precision Parts Co\n"));
    assert!(content.contains("Cost: 6200.50\n"));
    assert!(content.contains("TOTAL: 2 entries, total cost: 11300.50"));
}

#[tokio::test]
async fn corrupted_payload_degrades_without_failing() {
    let (services, pool) = test_store().await;

    services
        .reports
        .create(&CreateReport {
            name: "Good".to_string(),
            report_type: "maintenance".to_string(),
            period_start: None,
            period_end: None,
            data: sample_dataset(),
        })
        .await
        .unwrap();

    // Corrupt payload written behind the repository's back
    sqlx::query(
        "INSERT INTO reports (name, type, created_date, data) VALUES (?, ?, ?, ?)",
    )
    .bind("Broken")
    .bind("maintenance")
    .bind(Utc::now())
    .bind("{not json")
    .execute(&pool)
    .await
    .unwrap();

    let reports = services.reports.list().await.unwrap();
    assert_eq!(reports.len(), 2);
    let broken = reports.iter().find(|r| r.name == "Broken").unwrap();
    assert!(broken.data.is_none());
    let good = reports.iter().find(|r| r.name == "Good").unwrap();
    assert!(good.data.is_some());

    // Download still produces the header plus an inline parse error
    let rendered = services.reports.render_text(broken.id).await.unwrap();
    assert!(rendered.content.starts_with("REPORT: Broken\n"));
    assert!(rendered.content.contains("Failed to parse report data"));
}

#[tokio::test]
async fn downloading_missing_report_is_not_found() {
    let (services, _pool) = test_store().await;
    let err = services.reports.render_text(77).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

// ---------------------------------------------------------------------------
// CRUD semantics
// ---------------------------------------------------------------------------

#[tokio::test]
async fn update_replaces_every_column() {
    let (services, _pool) = test_store().await;
    let id = services.parts.create(&part("Bearing", "B-1", 15, 5)).await.unwrap();

    services
        .parts
        .update(
            id,
            &vulcan_server::models::part::UpdatePart {
                name: "Radial bearing".to_string(),
                part_number: Some("B-1".to_string()),
                quantity: 4,
                min_quantity: 5,
                price: None,
                supplier: None,
                category: None,
            },
        )
        .await
        .unwrap();

    let updated = services.parts.get_by_id(id).await.unwrap();
    assert_eq!(updated.name, "Radial bearing");
    assert_eq!(updated.quantity, 4);
    // Columns absent from the payload are rewritten too
    assert!(updated.price.is_none());
}

#[tokio::test]
async fn duplicate_serial_number_is_rejected() {
    let (services, _pool) = test_store().await;
    let equipment_id = fixture_equipment(&services).await;
    let existing = services.equipment.get_by_id(equipment_id).await.unwrap();

    let err = services
        .equipment
        .create(&CreateEquipment {
            name: "Clone".to_string(),
            model: None,
            serial_number: existing.serial_number.clone(),
            location: None,
            client_id: None,
            installation_date: None,
            last_service: None,
            next_service: None,
            status: None,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Database(_)));
}

#[tokio::test]
async fn deleting_client_does_not_cascade_to_equipment() {
    let (services, _pool) = test_store().await;
    let equipment_id = fixture_equipment(&services).await;
    let equipment = services.equipment.get_by_id(equipment_id).await.unwrap();
    let client_id = equipment.client_id.unwrap();

    services.clients.delete(client_id).await.unwrap();

    // Equipment survives with a dangling client reference
    let survivor = services.equipment.get_by_id(equipment_id).await.unwrap();
    assert_eq!(survivor.client_id, Some(client_id));

    let listed = services.equipment.list().await.unwrap();
    assert_eq!(listed.len(), 1);
    assert!(listed[0].client_name.is_none());
}
