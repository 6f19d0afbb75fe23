use actix_web::{dev::Payload, web, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use futures::future::LocalBoxFuture;
use tracing::{error, warn};

use crate::modules::auth::adapter::incoming::web::session::SessionContext;
use crate::modules::auth::application::domain::entities::{Capability, Principal};
use crate::shared::api::ApiResponse;
use crate::AppState;

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

fn login_required() -> ActixError {
    create_api_error(ApiResponse::unauthorized(
        "LOGIN_REQUIRED",
        "Please log in to access this page.",
    ))
}

/// Caller with a session that points at an existing account.
///
/// The account is re-read on every request; a session of a deleted user is
/// purged and answered with `401 LOGIN_REQUIRED`.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub principal: Principal,
}

impl FromRequest for AuthenticatedUser {
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let state = req.app_data::<web::Data<AppState>>().cloned();
        let session = SessionContext::from_request(req, payload);

        Box::pin(async move {
            let Some(state) = state else {
                error!("AppState missing while resolving session principal");
                return Err(create_api_error(ApiResponse::internal_error()));
            };

            let session = session.await?;
            let Some(user_id) = session.user_id() else {
                return Err(login_required());
            };

            match state.principal_resolver.resolve(user_id).await {
                Ok(Some(principal)) => Ok(AuthenticatedUser { principal }),
                Ok(None) => {
                    warn!(user_id = %user_id, "Session refers to a missing user");
                    session.clear();
                    Err(login_required())
                }
                Err(e) => {
                    error!(error = %e, user_id = %user_id, "Failed to resolve session principal");
                    Err(create_api_error(ApiResponse::internal_error()))
                }
            }
        })
    }
}

/// Authenticated caller allowed to manage parking.
#[derive(Debug, Clone)]
pub struct AdminUser {
    pub principal: Principal,
}

impl FromRequest for AdminUser {
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let authenticated = AuthenticatedUser::from_request(req, payload);

        Box::pin(async move {
            let AuthenticatedUser { principal } = authenticated.await?;

            if !principal.can(Capability::ManageParking) {
                warn!(user_id = %principal.user_id, "Non-admin attempted an admin operation");
                return Err(create_api_error(ApiResponse::forbidden(
                    "ADMIN_ONLY",
                    "Admin access only.",
                )));
            }

            Ok(AdminUser { principal })
        })
    }
}
