//! OpenAPI documentation

use axum::{routing::get, Json, Router};
use utoipa::OpenApi;

use crate::api::{clients, equipment, health, maintenance, parts, reports, service_requests, stats};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Vulcan API",
        version = "1.0.0",
        description = "Industrial Equipment Maintenance Management REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html"),
        contact(name = "Vulcan Team", email = "dev@vulcan-maintenance.org")
    ),
    servers(
        (url = "/api", description = "API root")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Clients
        clients::list_clients,
        clients::create_client,
        clients::update_client,
        clients::delete_client,
        // Equipment
        equipment::list_equipment,
        equipment::create_equipment,
        equipment::update_equipment,
        equipment::delete_equipment,
        // Parts
        parts::list_parts,
        parts::create_part,
        parts::update_part,
        parts::delete_part,
        // Maintenance
        maintenance::list_maintenance,
        maintenance::create_maintenance,
        maintenance::update_maintenance,
        maintenance::delete_maintenance,
        maintenance::start_maintenance,
        maintenance::complete_maintenance,
        // Service requests
        service_requests::list_requests,
        service_requests::create_request,
        service_requests::assign_request,
        service_requests::solve_request,
        service_requests::delete_request,
        // Aggregations
        stats::work_plan,
        stats::low_stock_parts,
        stats::dashboard_stats,
        // Reports
        reports::maintenance_cost_report,
        reports::create_report,
        reports::list_reports,
        reports::delete_report,
        reports::download_report,
    ),
    components(
        schemas(
            // Clients
            crate::models::client::Client,
            crate::models::client::CreateClient,
            crate::models::client::UpdateClient,
            // Equipment
            crate::models::equipment::Equipment,
            crate::models::equipment::EquipmentDetails,
            crate::models::equipment::CreateEquipment,
            crate::models::equipment::UpdateEquipment,
            // Parts
            crate::models::part::Part,
            crate::models::part::CreatePart,
            crate::models::part::UpdatePart,
            // Maintenance
            crate::models::maintenance::Maintenance,
            crate::models::maintenance::MaintenanceDetails,
            crate::models::maintenance::CreateMaintenance,
            crate::models::maintenance::UpdateMaintenance,
            maintenance::StartResponse,
            maintenance::CompleteResponse,
            // Service requests
            crate::models::service_request::ServiceRequest,
            crate::models::service_request::CreateServiceRequest,
            crate::models::service_request::AssignTechnician,
            crate::models::service_request::RecordSolution,
            // Reports
            crate::models::report::Report,
            crate::models::report::CreateReport,
            // Aggregations
            stats::WorkPlanItem,
            stats::LowStockPart,
            stats::DashboardStats,
            stats::CostReportRow,
            // Enums
            crate::models::enums::MaintenanceStatus,
            crate::models::enums::Difficulty,
            crate::models::enums::Urgency,
            crate::models::enums::RequestStatus,
            // Shared
            crate::api::CreatedResponse,
            crate::api::MessageResponse,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "clients", description = "Client management"),
        (name = "equipment", description = "Equipment management"),
        (name = "parts", description = "Spare-parts inventory"),
        (name = "maintenance", description = "Work orders and timer lifecycle"),
        (name = "service-requests", description = "Inbound service requests"),
        (name = "stats", description = "Derived views and dashboard counters"),
        (name = "reports", description = "Cost reports and snapshots")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new().route(
        "/api-docs/openapi.json",
        get(|| async { Json(ApiDoc::openapi()) }),
    )
}
