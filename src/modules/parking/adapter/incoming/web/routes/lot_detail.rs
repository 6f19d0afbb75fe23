use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::parking::application::domain::entities::LotDetail;
use crate::modules::parking::application::ports::incoming::use_cases::GetLotDetailError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// A lot with its spot counts and spots
#[utoipa::path(
    get,
    path = "/admin/lot/{lot_id}",
    tag = "admin",
    params(("lot_id" = i32, Path, description = "Parking lot id")),
    responses(
        (status = 200, description = "Lot detail", body = inline(SuccessResponse<LotDetail>)),
        (status = 403, description = "Admin access only", body = ErrorResponse),
        (status = 404, description = "Lot not found", body = ErrorResponse),
    ),
    security(("session" = []))
)]
#[get("/admin/lot/{lot_id}")]
pub async fn lot_detail_handler(
    _admin: AdminUser,
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    let lot_id = path.into_inner();

    match data.parking.detail.execute(lot_id).await {
        Ok(detail) => ApiResponse::success(detail),

        Err(GetLotDetailError::LotNotFound) => {
            ApiResponse::not_found("LOT_NOT_FOUND", "Parking lot not found.")
        }

        Err(GetLotDetailError::QueryError(e)) => {
            error!(error = %e, lot_id, "Failed to load lot detail");
            ApiResponse::internal_error()
        }
    }
}
