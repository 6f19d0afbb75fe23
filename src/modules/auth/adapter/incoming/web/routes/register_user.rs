use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::application::domain::entities::User;
use crate::modules::auth::application::ports::incoming::use_cases::RegisterUserError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct RegisterRequest {
    #[schema(example = "alice")]
    pub username: String,
    #[schema(example = "pw1")]
    pub password: String,
}

/// Create a regular account
#[utoipa::path(
    post,
    path = "/register",
    tag = "auth",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Account created", body = inline(SuccessResponse<User>)),
        (status = 400, description = "Invalid username or password", body = ErrorResponse),
        (status = 409, description = "Username already taken", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/register")]
pub async fn register_user_handler(
    req: web::Json<RegisterRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();

    match data.auth.register.execute(&req.username, &req.password).await {
        Ok(user) => {
            info!(user_id = %user.id, "Registration completed");
            ApiResponse::created_with_notice(user, "Registration successful. Please log in.")
        }

        Err(RegisterUserError::InvalidCredentials(e)) => {
            ApiResponse::validation_error(&e.to_string())
        }

        Err(RegisterUserError::UsernameTaken) => {
            warn!("Registration rejected: username taken");
            ApiResponse::conflict(
                "USERNAME_TAKEN",
                "Username already exists. Try a different one.",
            )
        }

        Err(RegisterUserError::HashingFailed(e)) | Err(RegisterUserError::RepositoryError(e)) => {
            error!(error = %e, "Registration failed");
            ApiResponse::internal_error()
        }
    }
}
