use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::admin::application::ports::incoming::use_cases::{
    GetUserHistoryError, UserHistory,
};
use crate::modules::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::auth::application::domain::entities::UserId;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// A user's reservations, newest first
#[utoipa::path(
    get,
    path = "/admin/user/history/{user_id}",
    tag = "admin",
    params(("user_id" = i32, Path, description = "User id")),
    responses(
        (status = 200, description = "User and reservations", body = inline(SuccessResponse<UserHistory>)),
        (status = 403, description = "Admin access only", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
    ),
    security(("session" = []))
)]
#[get("/admin/user/history/{user_id}")]
pub async fn user_history_handler(
    _admin: AdminUser,
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    let user_id = UserId::from(path.into_inner());

    match data.admin.user_history.execute(user_id).await {
        Ok(history) => ApiResponse::success(history),

        Err(GetUserHistoryError::UserNotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found.")
        }

        Err(GetUserHistoryError::QueryError(e)) => {
            error!(error = %e, user_id = %user_id, "Failed to load user history");
            ApiResponse::internal_error()
        }
    }
}
