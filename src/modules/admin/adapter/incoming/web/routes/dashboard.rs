use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::admin::application::domain::dashboard::DashboardReport;
use crate::modules::auth::adapter::incoming::web::extractors::AdminUser;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Booking statistics, occupancy, active reservations, users and lots
#[utoipa::path(
    get,
    path = "/admin/dashboard",
    tag = "admin",
    responses(
        (status = 200, description = "Dashboard data", body = inline(SuccessResponse<DashboardReport>)),
        (status = 401, description = "Not logged in", body = ErrorResponse),
        (status = 403, description = "Admin access only", body = ErrorResponse),
    ),
    security(("session" = []))
)]
#[get("/admin/dashboard")]
pub async fn admin_dashboard_handler(
    _admin: AdminUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.admin.dashboard.execute().await {
        Ok(report) => ApiResponse::success(report),
        Err(e) => {
            error!(error = %e, "Failed to build admin dashboard");
            ApiResponse::internal_error()
        }
    }
}
