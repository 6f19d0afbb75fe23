use actix_web::{get, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::{IntoParams, ToSchema};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::parking::application::domain::entities::LotSummary;
use crate::modules::parking::application::ports::outgoing::LotSearch;
use crate::modules::reservation::application::domain::entities::ReservationView;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DashboardQuery {
    /// Substring of the lot name or pin code
    pub search: Option<String>,
    /// `1`, `true`, `on` or `yes` to hide full lots
    pub available: Option<String>,
}

impl DashboardQuery {
    fn into_search(self) -> LotSearch {
        LotSearch {
            text: self.search,
            available_only: self.available.as_deref().is_some_and(is_truthy),
        }
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "on" | "yes"
    )
}

#[derive(Debug, Serialize, ToSchema)]
pub struct UserDashboard {
    pub lots: Vec<LotSummary>,
    pub active_reservation: Option<ReservationView>,
}

/// Search lots and show the caller's active reservation
#[utoipa::path(
    get,
    path = "/user/dashboard",
    tag = "user",
    params(DashboardQuery),
    responses(
        (status = 200, description = "Matching lots and active reservation", body = inline(SuccessResponse<UserDashboard>)),
        (status = 401, description = "Not logged in", body = ErrorResponse),
    ),
    security(("session" = []))
)]
#[get("/user/dashboard")]
pub async fn user_dashboard_handler(
    user: AuthenticatedUser,
    query: web::Query<DashboardQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let user_id = user.principal.user_id;

    let lots = match data.parking.search.execute(query.into_inner().into_search()).await {
        Ok(lots) => lots,
        Err(e) => {
            error!(error = %e, "Lot search failed");
            return ApiResponse::internal_error();
        }
    };

    let active_reservation = match data.reservation.active.execute(user_id).await {
        Ok(active) => active,
        Err(e) => {
            error!(error = %e, user_id = %user_id, "Active reservation lookup failed");
            return ApiResponse::internal_error();
        }
    };

    ApiResponse::success(UserDashboard {
        lots,
        active_reservation,
    })
}
