//! Sample-data seeding
//!
//! On an empty store a fixed sample dataset is inserted so the API is
//! usable out of the box. Inserts run as a linear awaited sequence in
//! foreign-key order: clients, equipment, parts, maintenance, requests.

use sqlx::{Pool, Sqlite};

use crate::error::AppResult;

/// Insert the sample dataset if the clients table is empty.
/// Returns true when seeding ran.
pub async fn seed_if_empty(pool: &Pool<Sqlite>) -> AppResult<bool> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM clients")
        .fetch_one(pool)
        .await?;
    if count > 0 {
        tracing::debug!("Sample data already present, skipping seed");
        return Ok(false);
    }

    tracing::info!("Empty store, inserting sample data");

    let clients = [
        ("Metalworks Plant", "A. Ivanov", "+1-555-123-4567", "ivanov@metalworks.example", "15 Industrial St"),
        ("Precision Parts Co", "M. Petrova", "+1-555-765-4321", "petrova@precisionparts.example", "28 Factory Ave"),
        ("Heavy Machinery Ltd", "V. Sidorov", "+1-555-555-4433", "sidorov@heavymach.example", "42 Technical Blvd"),
    ];
    for (name, contact, phone, email, address) in clients {
        sqlx::query(
            "INSERT INTO clients (name, contact_person, phone, email, address) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(name)
        .bind(contact)
        .bind(phone)
        .bind(email)
        .bind(address)
        .execute(pool)
        .await?;
    }

    let equipment = [
        ("Turning lathe", "CNC-100", "TS001", "Shop 1", 1_i64, "2023-01-15", "2024-10-01", "2024-12-01"),
        ("Milling machine", "FM-200", "FS001", "Shop 2", 2, "2023-03-20", "2024-10-15", "2025-01-15"),
        ("Hydraulic press", "P-500", "PR001", "Shop 3", 3, "2022-11-10", "2024-09-20", "2024-11-20"),
        ("Drilling machine", "DR-150", "DR001", "Shop 1", 1, "2023-05-05", "2024-09-10", "2024-11-10"),
    ];
    for (name, model, serial, location, client_id, installed, last, next) in equipment {
        sqlx::query(
            r#"
            INSERT INTO equipment
                (name, model, serial_number, location, client_id,
                 installation_date, last_service, next_service)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(name)
        .bind(model)
        .bind(serial)
        .bind(location)
        .bind(client_id)
        .bind(installed)
        .bind(last)
        .bind(next)
        .execute(pool)
        .await?;
    }

    let parts = [
        ("Radial bearing", "BEARING-001", 15_i64, 5_i64, 1200.50, "Bearing Services Inc", "mechanical"),
        ("Timing belt", "BELT-002", 8, 10, 850.75, "BeltPro Supply", "mechanical"),
        ("Temperature sensor", "SENSOR-003", 3, 5, 2100.00, "Electronics Depot", "electronics"),
        ("Motor oil", "OIL-004", 25, 10, 450.25, "Petrochem Supply", "lubricants"),
        ("Air filter", "FILTER-005", 12, 8, 780.00, "Filter Works", "filters"),
    ];
    for (name, number, qty, min_qty, price, supplier, category) in parts {
        sqlx::query(
            r#"
            INSERT INTO parts
                (name, part_number, quantity, min_quantity, price, supplier, category)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(name)
        .bind(number)
        .bind(qty)
        .bind(min_qty)
        .bind(price)
        .bind(supplier)
        .bind(category)
        .execute(pool)
        .await?;
    }

    let maintenance: [(i64, &str, &str, &str, f64, f64, &str, &str, f64, &str, Option<f64>); 5] = [
        (1, "2024-11-15", "scheduled", "Routine lathe service", 5000.00, 1200.50, "P. Sergeyev", "completed", 4.0, "medium", Some(4.5)),
        (2, "2024-11-18", "unscheduled", "Temperature sensor replacement", 3000.00, 2100.00, "M. Kozlov", "completed", 3.0, "high", Some(3.5)),
        (3, "2024-11-20", "scheduled", "Hydraulics adjustment", 4500.00, 0.00, "P. Sergeyev", "completed", 5.0, "low", Some(4.0)),
        (1, "2024-11-25", "scheduled", "Regular service", 4000.00, 800.00, "M. Kozlov", "in_progress", 4.0, "medium", None),
        (4, "2024-11-28", "unscheduled", "Cooling system repair", 6000.00, 1500.00, "P. Sergeyev", "planned", 6.0, "high", None),
    ];
    for (equipment_id, date, kind, description, work_cost, parts_cost, technician, status, duration, difficulty, actual) in maintenance {
        sqlx::query(
            r#"
            INSERT INTO maintenance
                (equipment_id, maintenance_date, type, description, work_cost,
                 parts_cost, technician, status, duration_hours, difficulty, actual_hours)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(equipment_id)
        .bind(date)
        .bind(kind)
        .bind(description)
        .bind(work_cost)
        .bind(parts_cost)
        .bind(technician)
        .bind(status)
        .bind(duration)
        .bind(difficulty)
        .bind(actual)
        .execute(pool)
        .await?;
    }

    let requests = [
        ("Metalworks Plant", "Turning lathe", "CNC-100", "TS001",
         "Motor will not start, relay clicks on power-up", "A. Ivanov", "+1-555-123-4567", "high"),
        ("Precision Parts Co", "Milling machine", "FM-200", "FS001",
         "Strong noise and vibration under load, diagnostics needed", "M. Petrova", "+1-555-765-4321", "medium"),
        ("Heavy Machinery Ltd", "Hydraulic press", "P-500", "PR001",
         "Oil leaking from the hydraulic system, pressure dropping", "V. Sidorov", "+1-555-555-4433", "critical"),
    ];
    for (client, equipment_name, model, serial, problem, contact, phone, urgency) in requests {
        sqlx::query(
            r#"
            INSERT INTO service_requests
                (client_name, equipment_name, equipment_model, serial_number,
                 problem_description, contact_person, phone, urgency, status, created_date)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, 'new', ?)
            "#,
        )
        .bind(client)
        .bind(equipment_name)
        .bind(model)
        .bind(serial)
        .bind(problem)
        .bind(contact)
        .bind(phone)
        .bind(urgency)
        .bind(chrono::Utc::now())
        .execute(pool)
        .await?;
    }

    tracing::info!("Sample data inserted");
    Ok(true)
}
