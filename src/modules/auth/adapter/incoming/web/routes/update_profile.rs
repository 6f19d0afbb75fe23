use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::auth::application::domain::entities::User;
use crate::modules::auth::application::ports::incoming::use_cases::{
    ProfileUpdate, UpdateProfileError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct EditProfileRequest {
    #[schema(example = "alicia")]
    pub username: Option<String>,
    /// Leave empty to keep the current password
    #[schema(example = "")]
    pub password: Option<String>,
}

/// Edit the caller's username and/or password
#[utoipa::path(
    post,
    path = "/user/edit-profile",
    tag = "user",
    request_body = EditProfileRequest,
    responses(
        (status = 200, description = "Profile updated", body = inline(SuccessResponse<User>)),
        (status = 400, description = "Invalid username or password", body = ErrorResponse),
        (status = 401, description = "Not logged in", body = ErrorResponse),
        (status = 409, description = "Username already taken", body = ErrorResponse),
    ),
    security(("session" = []))
)]
#[post("/user/edit-profile")]
pub async fn update_profile_handler(
    user: AuthenticatedUser,
    req: web::Json<EditProfileRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();
    let update = ProfileUpdate {
        username: req.username,
        password: req.password,
    };

    match data
        .auth
        .update_profile
        .execute(user.principal.user_id, update)
        .await
    {
        Ok(updated) => ApiResponse::success_with_notice(updated, "Profile updated!"),

        Err(UpdateProfileError::InvalidCredentials(e)) => {
            ApiResponse::validation_error(&e.to_string())
        }

        Err(UpdateProfileError::UsernameTaken) => ApiResponse::conflict(
            "USERNAME_TAKEN",
            "Username already exists. Try a different one.",
        ),

        Err(UpdateProfileError::UserNotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }

        Err(UpdateProfileError::HashingFailed(e)) | Err(UpdateProfileError::RepositoryError(e)) => {
            error!(error = %e, user_id = %user.principal.user_id, "Profile update failed");
            ApiResponse::internal_error()
        }
    }
}
