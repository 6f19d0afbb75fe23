use actix_web::{post, web, Responder};
use tracing::{error, info};

use super::lot_request::LotRequest;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::parking::application::domain::entities::ParkingLot;
use crate::modules::parking::application::ports::incoming::use_cases::CreateLotError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Create a parking lot with its spots
#[utoipa::path(
    post,
    path = "/admin/add_lot",
    tag = "admin",
    request_body = LotRequest,
    responses(
        (status = 201, description = "Lot created", body = inline(SuccessResponse<ParkingLot>)),
        (status = 400, description = "Malformed lot fields", body = ErrorResponse),
        (status = 401, description = "Not logged in", body = ErrorResponse),
        (status = 403, description = "Admin access only", body = ErrorResponse),
    ),
    security(("session" = []))
)]
#[post("/admin/add_lot")]
pub async fn add_lot_handler(
    admin: AdminUser,
    req: web::Json<LotRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.parking.create.execute(req.into_inner().into()).await {
        Ok(lot) => {
            info!(admin_id = %admin.principal.user_id, lot_id = lot.id, "Lot added");
            ApiResponse::created_with_notice(lot, "Parking lot added successfully with spots!")
        }
        Err(CreateLotError::ValidationFailure(e)) => ApiResponse::validation_error(&e.to_string()),
        Err(CreateLotError::RepositoryError(e)) => {
            error!(error = %e, "Failed to create lot");
            ApiResponse::internal_error()
        }
    }
}
