use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::reservation::application::domain::entities::ReleaseReceipt;
use crate::modules::reservation::application::ports::incoming::use_cases::ReleaseSpotError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Release the caller's active reservation
#[utoipa::path(
    get,
    path = "/user/release",
    tag = "user",
    responses(
        (status = 200, description = "Reservation closed, cost computed", body = inline(SuccessResponse<ReleaseReceipt>)),
        (status = 401, description = "Not logged in", body = ErrorResponse),
        (status = 409, description = "No active reservation", body = ErrorResponse),
    ),
    security(("session" = []))
)]
#[get("/user/release")]
pub async fn release_spot_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    let user_id = user.principal.user_id;

    match data.reservation.release.execute(user_id).await {
        Ok(receipt) => ApiResponse::success_with_notice(receipt, "Spot released. Thank you!"),

        Err(ReleaseSpotError::NoActiveReservation) => {
            ApiResponse::conflict("NO_ACTIVE_RESERVATION", "No active reservation found.")
        }

        Err(ReleaseSpotError::RepositoryError(e)) => {
            error!(error = %e, user_id = %user_id, "Release failed");
            ApiResponse::internal_error()
        }
    }
}
