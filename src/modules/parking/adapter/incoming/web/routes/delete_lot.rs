use actix_web::{get, web, Responder};
use tracing::{error, info};

use crate::api::schemas::{ErrorResponse, NoticeResponse};
use crate::modules::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::parking::application::ports::incoming::use_cases::DeleteLotError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Delete a lot that has no occupied spots
#[utoipa::path(
    get,
    path = "/admin/delete_lot/{lot_id}",
    tag = "admin",
    params(("lot_id" = i32, Path, description = "Parking lot id")),
    responses(
        (status = 200, description = "Lot deleted", body = NoticeResponse),
        (status = 403, description = "Admin access only", body = ErrorResponse),
        (status = 404, description = "Lot not found", body = ErrorResponse),
        (status = 409, description = "Lot has occupied spots", body = ErrorResponse),
    ),
    security(("session" = []))
)]
#[get("/admin/delete_lot/{lot_id}")]
pub async fn delete_lot_handler(
    admin: AdminUser,
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    let lot_id = path.into_inner();

    match data.parking.delete.execute(lot_id).await {
        Ok(()) => {
            info!(admin_id = %admin.principal.user_id, lot_id, "Lot deleted by admin");
            ApiResponse::notice("Parking lot deleted.")
        }

        Err(DeleteLotError::LotNotFound) => {
            ApiResponse::not_found("LOT_NOT_FOUND", "Parking lot not found.")
        }

        Err(DeleteLotError::HasOccupiedSpots(_)) => ApiResponse::conflict(
            "LOT_HAS_OCCUPIED_SPOTS",
            "Can't delete lot with occupied spots.",
        ),

        Err(DeleteLotError::RepositoryError(e)) => {
            error!(error = %e, lot_id, "Failed to delete lot");
            ApiResponse::internal_error()
        }
    }
}
