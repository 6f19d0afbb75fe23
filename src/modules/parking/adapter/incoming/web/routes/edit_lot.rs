use actix_web::{post, web, Responder};
use tracing::error;

use super::lot_request::LotRequest;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::parking::application::domain::entities::ParkingLot;
use crate::modules::parking::application::ports::incoming::use_cases::EditLotError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Overwrite a lot's fields
///
/// Existing spots are kept as they are; only the declared maximum changes.
#[utoipa::path(
    post,
    path = "/admin/lot/edit/{lot_id}",
    tag = "admin",
    params(("lot_id" = i32, Path, description = "Parking lot id")),
    request_body = LotRequest,
    responses(
        (status = 200, description = "Lot updated", body = inline(SuccessResponse<ParkingLot>)),
        (status = 400, description = "Malformed lot fields", body = ErrorResponse),
        (status = 403, description = "Admin access only", body = ErrorResponse),
        (status = 404, description = "Lot not found", body = ErrorResponse),
    ),
    security(("session" = []))
)]
#[post("/admin/lot/edit/{lot_id}")]
pub async fn edit_lot_handler(
    _admin: AdminUser,
    path: web::Path<i32>,
    req: web::Json<LotRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let lot_id = path.into_inner();

    match data.parking.edit.execute(lot_id, req.into_inner().into()).await {
        Ok(lot) => ApiResponse::success_with_notice(lot, "Parking lot updated successfully!"),

        Err(EditLotError::LotNotFound) => {
            ApiResponse::not_found("LOT_NOT_FOUND", "Parking lot not found.")
        }

        Err(EditLotError::ValidationFailure(e)) => ApiResponse::validation_error(&e.to_string()),

        Err(EditLotError::RepositoryError(e)) => {
            error!(error = %e, lot_id, "Failed to update lot");
            ApiResponse::internal_error()
        }
    }
}
