//! Vulcan Server - Maintenance Management System
//!
//! A Rust REST API server for industrial equipment servicing.

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use vulcan_server::{
    api,
    config::AppConfig,
    repository::{seed, Repository},
    services::Services,
    AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load().expect("Failed to load configuration");

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("vulcan_server={},tower_http=debug", config.logging.level).into());

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Vulcan Server v{}", env!("CARGO_PKG_VERSION"));

    // Open the data file, creating it on first startup
    // Foreign keys stay unenforced: deletes never cascade and existing
    // data may hold dangling client references
    let connect_options = SqliteConnectOptions::from_str(&format!("sqlite://{}", config.database.path))
        .expect("Invalid database path")
        .create_if_missing(true)
        .foreign_keys(false);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.database.max_connections)
        .connect_with(connect_options)
        .await
        .expect("Failed to open database");

    tracing::info!("Opened data file {}", config.database.path);

    // Apply the schema idempotently
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run database migrations");

    tracing::info!("Database migrations completed");

    // Insert the sample dataset on an empty store
    seed::seed_if_empty(&pool)
        .await
        .expect("Failed to seed sample data");

    // Save server address before moving config
    let server_host = config.server.host.clone();
    let server_port = config.server.port;

    // Create repository and services
    let repository = Repository::new(pool);
    let services = Services::new(repository);

    // Create application state
    let state = AppState {
        config: Arc::new(config),
        services: Arc::new(services),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::new(
        server_host.parse().expect("Invalid host address"),
        server_port,
    );

    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes
fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        // Health check
        .route("/health", get(api::health::health_check))
        .route("/ready", get(api::health::readiness_check))
        // Clients
        .route("/clients", get(api::clients::list_clients))
        .route("/clients", post(api::clients::create_client))
        .route("/clients/:id", put(api::clients::update_client))
        .route("/clients/:id", delete(api::clients::delete_client))
        // Equipment
        .route("/equipment", get(api::equipment::list_equipment))
        .route("/equipment", post(api::equipment::create_equipment))
        .route("/equipment/:id", put(api::equipment::update_equipment))
        .route("/equipment/:id", delete(api::equipment::delete_equipment))
        // Parts
        .route("/parts", get(api::parts::list_parts))
        .route("/parts", post(api::parts::create_part))
        .route("/parts/:id", put(api::parts::update_part))
        .route("/parts/:id", delete(api::parts::delete_part))
        // Maintenance work orders
        .route("/maintenance", get(api::maintenance::list_maintenance))
        .route("/maintenance", post(api::maintenance::create_maintenance))
        .route("/maintenance/:id", put(api::maintenance::update_maintenance))
        .route("/maintenance/:id", delete(api::maintenance::delete_maintenance))
        .route("/maintenance/:id/start", put(api::maintenance::start_maintenance))
        .route("/maintenance/:id/complete", put(api::maintenance::complete_maintenance))
        // Service requests
        .route("/service-requests", get(api::service_requests::list_requests))
        .route("/service-requests", post(api::service_requests::create_request))
        .route("/service-requests/:id/assign", put(api::service_requests::assign_request))
        .route("/service-requests/:id/solution", put(api::service_requests::solve_request))
        .route("/service-requests/:id", delete(api::service_requests::delete_request))
        // Aggregations
        .route("/work-plan", get(api::stats::work_plan))
        .route("/low-stock-parts", get(api::stats::low_stock_parts))
        .route("/dashboard/stats", get(api::stats::dashboard_stats))
        // Reports
        .route("/reports/maintenance", get(api::reports::maintenance_cost_report))
        .route("/reports", post(api::reports::create_report))
        .route("/reports", get(api::reports::list_reports))
        .route("/reports/:id", delete(api::reports::delete_report))
        .route("/reports/:id/download", get(api::reports::download_report))
        .with_state(state);

    // OpenAPI documentation
    let openapi = api::openapi::create_openapi_router();

    Router::new()
        .nest("/api", api)
        .merge(openapi)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
