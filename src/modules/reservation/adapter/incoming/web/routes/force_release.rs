use actix_web::{post, web, Responder};
use tracing::{error, info};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::reservation::application::domain::entities::ReleaseReceipt;
use crate::modules::reservation::application::ports::incoming::use_cases::ForceReleaseError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Close any open reservation and free its spot
#[utoipa::path(
    post,
    path = "/admin/force-release/{reservation_id}",
    tag = "admin",
    params(("reservation_id" = i32, Path, description = "Reservation id")),
    responses(
        (status = 200, description = "Reservation closed", body = inline(SuccessResponse<ReleaseReceipt>)),
        (status = 401, description = "Not logged in", body = ErrorResponse),
        (status = 403, description = "Admin access only", body = ErrorResponse),
        (status = 404, description = "Reservation not found", body = ErrorResponse),
        (status = 409, description = "Reservation already closed", body = ErrorResponse),
    ),
    security(("session" = []))
)]
#[post("/admin/force-release/{reservation_id}")]
pub async fn force_release_handler(
    admin: AdminUser,
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    let reservation_id = path.into_inner();

    match data.reservation.force_release.execute(reservation_id).await {
        Ok(receipt) => {
            info!(admin_id = %admin.principal.user_id, reservation_id, "Force release");
            let notice = format!("Spot {} has been force-released.", receipt.reservation.spot_id);
            ApiResponse::success_with_notice(receipt, notice)
        }

        Err(ForceReleaseError::ReservationNotFound) => {
            ApiResponse::not_found("RESERVATION_NOT_FOUND", "Reservation not found.")
        }

        Err(ForceReleaseError::AlreadyClosed) => ApiResponse::conflict(
            "RESERVATION_ALREADY_CLOSED",
            "Reservation is already closed.",
        ),

        Err(ForceReleaseError::RepositoryError(e)) => {
            error!(error = %e, reservation_id, "Force release failed");
            ApiResponse::internal_error()
        }
    }
}
