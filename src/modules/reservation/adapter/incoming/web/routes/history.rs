use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::reservation::application::domain::entities::ReservationView;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// The caller's reservations
#[utoipa::path(
    get,
    path = "/user/history",
    tag = "user",
    responses(
        (status = 200, description = "Own reservations in booking order", body = inline(SuccessResponse<Vec<ReservationView>>)),
        (status = 401, description = "Not logged in", body = ErrorResponse),
    ),
    security(("session" = []))
)]
#[get("/user/history")]
pub async fn history_handler(user: AuthenticatedUser, data: web::Data<AppState>) -> impl Responder {
    match data.reservation.history.execute(user.principal.user_id).await {
        Ok(history) => ApiResponse::success(history),
        Err(e) => {
            error!(error = %e, user_id = %user.principal.user_id, "Failed to load history");
            ApiResponse::internal_error()
        }
    }
}
