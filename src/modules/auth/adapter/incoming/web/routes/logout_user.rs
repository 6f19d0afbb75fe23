use actix_web::{get, Responder};
use tracing::info;

use crate::api::schemas::{ErrorResponse, NoticeResponse};
use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::auth::adapter::incoming::web::session::SessionContext;
use crate::shared::api::ApiResponse;

/// Log out
#[utoipa::path(
    get,
    path = "/logout",
    tag = "auth",
    responses(
        (status = 200, description = "Session purged", body = NoticeResponse),
        (status = 401, description = "Not logged in", body = ErrorResponse),
    ),
    security(("session" = []))
)]
#[get("/logout")]
pub async fn logout_handler(user: AuthenticatedUser, session: SessionContext) -> impl Responder {
    session.clear();
    info!(user_id = %user.principal.user_id, "User logged out");

    ApiResponse::notice("You have been logged out.")
}
