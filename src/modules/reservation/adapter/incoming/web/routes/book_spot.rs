use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::reservation::application::domain::entities::Reservation;
use crate::modules::reservation::application::ports::incoming::use_cases::BookSpotError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Book the first available spot of a lot
#[utoipa::path(
    get,
    path = "/user/book/{lot_id}",
    tag = "user",
    params(("lot_id" = i32, Path, description = "Parking lot id")),
    responses(
        (status = 201, description = "Spot booked", body = inline(SuccessResponse<Reservation>)),
        (status = 401, description = "Not logged in", body = ErrorResponse),
        (status = 404, description = "Lot not found", body = ErrorResponse),
        (status = 409, description = "Active reservation exists or lot is full", body = ErrorResponse),
    ),
    security(("session" = []))
)]
#[get("/user/book/{lot_id}")]
pub async fn book_spot_handler(
    user: AuthenticatedUser,
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    let lot_id = path.into_inner();
    let user_id = user.principal.user_id;

    match data.reservation.book.execute(user_id, lot_id).await {
        Ok(reservation) => {
            let notice = format!("Spot {} booked successfully!", reservation.spot_id);
            ApiResponse::created_with_notice(reservation, notice)
        }

        Err(BookSpotError::LotNotFound) => {
            ApiResponse::not_found("LOT_NOT_FOUND", "Parking lot not found.")
        }

        Err(BookSpotError::AlreadyActive) => ApiResponse::conflict(
            "ACTIVE_RESERVATION_EXISTS",
            "You already have an active reservation!",
        ),

        Err(BookSpotError::NoAvailability) => {
            ApiResponse::conflict("NO_AVAILABLE_SPOT", "No spots available in this lot.")
        }

        Err(BookSpotError::RepositoryError(e)) => {
            error!(error = %e, user_id = %user_id, lot_id, "Booking failed");
            ApiResponse::internal_error()
        }
    }
}
