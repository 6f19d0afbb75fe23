use actix_web::{post, web, Responder};
use tracing::{error, info};

use crate::api::schemas::{ErrorResponse, NoticeResponse};
use crate::modules::admin::application::ports::incoming::use_cases::DeleteUserError;
use crate::modules::auth::adapter::incoming::web::extractors::AdminUser;
use crate::modules::auth::application::domain::entities::UserId;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Delete a regular user and all of their reservations
#[utoipa::path(
    post,
    path = "/admin/user/delete/{user_id}",
    tag = "admin",
    params(("user_id" = i32, Path, description = "User id")),
    responses(
        (status = 200, description = "User deleted", body = NoticeResponse),
        (status = 403, description = "Admin access only, or target is an admin", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
    ),
    security(("session" = []))
)]
#[post("/admin/user/delete/{user_id}")]
pub async fn delete_user_handler(
    admin: AdminUser,
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    let user_id = UserId::from(path.into_inner());

    match data.admin.delete_user.execute(user_id).await {
        Ok(()) => {
            info!(admin_id = %admin.principal.user_id, user_id = %user_id, "User removed by admin");
            ApiResponse::notice("User deleted successfully.")
        }

        Err(DeleteUserError::UserNotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found.")
        }

        Err(DeleteUserError::AdminProtected) => {
            ApiResponse::forbidden("ADMIN_PROTECTED", "Admin account cannot be deleted.")
        }

        Err(DeleteUserError::RepositoryError(e)) => {
            error!(error = %e, user_id = %user_id, "Failed to delete user");
            ApiResponse::internal_error()
        }
    }
}
