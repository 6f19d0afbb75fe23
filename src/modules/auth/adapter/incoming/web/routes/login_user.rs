use actix_web::{post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::session::SessionContext;
use crate::modules::auth::application::domain::entities::Principal;
use crate::modules::auth::application::ports::incoming::use_cases::LoginUserError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct LoginRequest {
    #[schema(example = "alice")]
    pub username: String,
    #[schema(example = "pw1")]
    pub password: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    pub user: Principal,
    /// Landing page for the user's role
    #[schema(example = "/user/dashboard")]
    pub redirect: String,
}

async fn login(req: LoginRequest, session: SessionContext, data: &AppState) -> HttpResponse {
    match data.auth.login.execute(&req.username, &req.password).await {
        Ok(principal) => {
            if let Err(e) = session.sign_in(principal.user_id) {
                error!(error = %e, user_id = %principal.user_id, "Failed to start session");
                return ApiResponse::internal_error();
            }

            let redirect = principal.landing_path().to_string();
            ApiResponse::success_with_notice(
                LoginResponse {
                    user: principal,
                    redirect,
                },
                "Logged in successfully!",
            )
        }

        Err(LoginUserError::InvalidCredentials) => {
            warn!("Login failed: invalid credentials");
            ApiResponse::unauthorized("INVALID_CREDENTIALS", "Invalid username or password.")
        }

        Err(LoginUserError::HashingFailed(e)) | Err(LoginUserError::RepositoryError(e)) => {
            error!(error = %e, "Login failed");
            ApiResponse::internal_error()
        }
    }
}

/// Log in
///
/// Starts a session and tells the client where to land for its role.
#[utoipa::path(
    post,
    path = "/login",
    tag = "auth",
    request_body = LoginRequest,
    responses(
        (
            status = 200,
            description = "Login successful",
            body = inline(SuccessResponse<LoginResponse>),
            example = json!({
                "success": true,
                "data": {
                    "user": { "user_id": 2, "username": "alice", "is_admin": false },
                    "redirect": "/user/dashboard"
                },
                "message": "Logged in successfully!"
            })
        ),
        (
            status = 401,
            description = "Invalid credentials",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "INVALID_CREDENTIALS",
                    "message": "Invalid username or password."
                }
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/login")]
pub async fn login_handler(
    req: web::Json<LoginRequest>,
    session: SessionContext,
    data: web::Data<AppState>,
) -> impl Responder {
    login(req.into_inner(), session, &data).await
}

/// Log in from the admin entry point
///
/// Same behavior as `/login`.
#[utoipa::path(
    post,
    path = "/admin",
    tag = "auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = inline(SuccessResponse<LoginResponse>)),
        (status = 401, description = "Invalid credentials", body = ErrorResponse),
    )
)]
#[post("/admin")]
pub async fn admin_login_handler(
    req: web::Json<LoginRequest>,
    session: SessionContext,
    data: web::Data<AppState>,
) -> impl Responder {
    login(req.into_inner(), session, &data).await
}
