use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::reservation::application::domain::entities::ReservationView;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Every reservation with its user, spot and lot
#[utoipa::path(
    get,
    path = "/admin/reservations",
    tag = "admin",
    responses(
        (status = 200, description = "All reservations", body = inline(SuccessResponse<Vec<ReservationView>>)),
        (status = 401, description = "Not logged in", body = ErrorResponse),
        (status = 403, description = "Admin access only", body = ErrorResponse),
    ),
    security(("session" = []))
)]
#[get("/admin/reservations")]
pub async fn list_reservations_handler(
    _admin: AdminUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.reservation.list_all.execute().await {
        Ok(reservations) => ApiResponse::success(reservations),
        Err(e) => {
            error!(error = %e, "Failed to list reservations");
            ApiResponse::internal_error()
        }
    }
}
