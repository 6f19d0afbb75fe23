use crate::api::schemas::{ErrorDetail, ErrorResponse, NoticeResponse};
use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::OpenApi;

use crate::modules::admin::application::domain::dashboard::{
    DailyBookings, DashboardReport, LotOccupancy,
};
use crate::modules::admin::application::ports::incoming::use_cases::UserHistory;
use crate::modules::auth::adapter::incoming::web::routes::{
    EditProfileRequest, LoginRequest, LoginResponse, RegisterRequest,
};
use crate::modules::auth::application::domain::entities::{Principal, User, UserId};
use crate::modules::parking::adapter::incoming::web::routes::{LotRequest, UserDashboard};
use crate::modules::parking::application::domain::entities::{
    LotDetail, LotSummary, ParkingLot, ParkingSpot, SpotStatus,
};
use crate::modules::reservation::application::domain::entities::{
    ReleaseReceipt, Reservation, ReservationView,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Parking Reservation API",
        version = "1.0.0",
        description = "Parking lots, spot booking and administration"
    ),
    paths(
        // Auth endpoints
        crate::modules::auth::adapter::incoming::web::routes::register_user_handler,
        crate::modules::auth::adapter::incoming::web::routes::login_handler,
        crate::modules::auth::adapter::incoming::web::routes::admin_login_handler,
        crate::modules::auth::adapter::incoming::web::routes::logout_handler,

        // User endpoints
        crate::modules::parking::adapter::incoming::web::routes::user_dashboard_handler,
        crate::modules::reservation::adapter::incoming::web::routes::book_spot_handler,
        crate::modules::reservation::adapter::incoming::web::routes::release_spot_handler,
        crate::modules::reservation::adapter::incoming::web::routes::history_handler,
        crate::modules::auth::adapter::incoming::web::routes::update_profile_handler,

        // Admin endpoints
        crate::modules::admin::adapter::incoming::web::routes::admin_dashboard_handler,
        crate::modules::parking::adapter::incoming::web::routes::add_lot_handler,
        crate::modules::parking::adapter::incoming::web::routes::lot_detail_handler,
        crate::modules::parking::adapter::incoming::web::routes::edit_lot_handler,
        crate::modules::parking::adapter::incoming::web::routes::delete_lot_handler,
        crate::modules::reservation::adapter::incoming::web::routes::list_reservations_handler,
        crate::modules::reservation::adapter::incoming::web::routes::force_release_handler,
        crate::modules::admin::adapter::incoming::web::routes::delete_user_handler,
        crate::modules::admin::adapter::incoming::web::routes::user_history_handler,
    ),
    components(
        schemas(
            // Response wrappers
            ErrorResponse,
            ErrorDetail,
            NoticeResponse,

            // Auth
            RegisterRequest,
            LoginRequest,
            LoginResponse,
            EditProfileRequest,
            User,
            UserId,
            Principal,

            // Parking
            LotRequest,
            ParkingLot,
            ParkingSpot,
            SpotStatus,
            LotSummary,
            LotDetail,
            UserDashboard,

            // Reservations
            Reservation,
            ReservationView,
            ReleaseReceipt,

            // Admin
            DashboardReport,
            DailyBookings,
            LotOccupancy,
            UserHistory
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Registration, login and logout"),
        (name = "user", description = "Lot search, booking and profile"),
        (name = "admin", description = "Lot, reservation and user administration"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "session",
                SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                    "session",
                    "Private session cookie set by /login or /admin",
                ))),
            )
        }
    }
}
