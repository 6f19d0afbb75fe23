pub mod api;
pub mod health;
pub mod modules;
pub mod shared;

use crate::api::openapi::ApiDoc;
use crate::modules::admin::adapter::outgoing::UserAdminRepositoryPostgres;
use crate::modules::admin::application::admin_use_cases::AdminUseCases;
use crate::modules::admin::application::service::{
    DeleteUserService, GetDashboardService, GetUserHistoryService,
};
use crate::modules::auth::adapter::outgoing::security::Argon2Hasher;
use crate::modules::auth::adapter::outgoing::{UserQueryPostgres, UserRepositoryPostgres};
use crate::modules::auth::application::auth_use_cases::AuthUseCases;
use crate::modules::auth::application::helpers::PrincipalResolver;
use crate::modules::auth::application::service::ensure_admin_service::AdminBootstrap;
use crate::modules::auth::application::service::{
    BasicCredentialPolicy, EnsureAdminService, LoginUserService, RegisterUserService,
    UpdateProfileService,
};
use crate::modules::parking::adapter::outgoing::{LotQueryPostgres, LotRepositoryPostgres};
use crate::modules::parking::application::parking_use_cases::ParkingUseCases;
use crate::modules::parking::application::service::{
    CreateLotService, DeleteLotService, EditLotService, GetLotDetailService, SearchLotsService,
};
use crate::modules::reservation::adapter::outgoing::{
    ReservationQueryPostgres, ReservationRepositoryPostgres,
};
use crate::modules::reservation::application::reservation_use_cases::ReservationUseCases;
use crate::modules::reservation::application::service::{
    BookSpotService, ForceReleaseService, GetActiveReservationService, GetHistoryService,
    ListReservationsService, ReleaseSpotService,
};
use crate::shared::api::{custom_json_config, custom_path_config, custom_query_config};
use crate::shared::config::AppConfig;

use actix_session::config::CookieContentSecurity;
use actix_session::storage::CookieSessionStore;
use actix_session::SessionMiddleware;
use actix_web::cookie::{Key, SameSite};
use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use anyhow::Context;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

pub const SESSION_COOKIE_NAME: &str = "session";

#[derive(Clone)]
pub struct AppState {
    pub auth: AuthUseCases,
    pub parking: ParkingUseCases,
    pub reservation: ReservationUseCases,
    pub admin: AdminUseCases,
    pub principal_resolver: PrincipalResolver,
}

#[cfg(not(tarpaulin_include))]
fn build_state(db: &Arc<DatabaseConnection>, hasher: Argon2Hasher) -> AppState {
    let user_query = UserQueryPostgres::new(Arc::clone(db));
    let user_repo = UserRepositoryPostgres::new(Arc::clone(db));
    let lot_query = LotQueryPostgres::new(Arc::clone(db));
    let lot_repo = LotRepositoryPostgres::new(Arc::clone(db));
    let reservation_query = ReservationQueryPostgres::new(Arc::clone(db));
    let reservation_repo = ReservationRepositoryPostgres::new(Arc::clone(db));
    let user_admin_repo = UserAdminRepositoryPostgres::new(Arc::clone(db));

    let auth = AuthUseCases {
        register: Arc::new(RegisterUserService::new(
            user_query.clone(),
            user_repo.clone(),
            hasher.clone(),
            BasicCredentialPolicy,
        )),
        login: Arc::new(LoginUserService::new(user_query.clone(), hasher.clone())),
        update_profile: Arc::new(UpdateProfileService::new(
            user_query.clone(),
            user_repo,
            hasher,
            BasicCredentialPolicy,
        )),
    };

    let parking = ParkingUseCases {
        create: Arc::new(CreateLotService::new(lot_repo.clone())),
        edit: Arc::new(EditLotService::new(lot_repo.clone())),
        delete: Arc::new(DeleteLotService::new(lot_repo)),
        search: Arc::new(SearchLotsService::new(lot_query.clone())),
        detail: Arc::new(GetLotDetailService::new(lot_query.clone())),
    };

    let reservation = ReservationUseCases {
        book: Arc::new(BookSpotService::new(reservation_repo.clone())),
        release: Arc::new(ReleaseSpotService::new(reservation_repo.clone())),
        force_release: Arc::new(ForceReleaseService::new(reservation_repo)),
        history: Arc::new(GetHistoryService::new(reservation_query.clone())),
        list_all: Arc::new(ListReservationsService::new(reservation_query.clone())),
        active: Arc::new(GetActiveReservationService::new(reservation_query.clone())),
    };

    let admin = AdminUseCases {
        dashboard: Arc::new(GetDashboardService::new(
            reservation_query.clone(),
            lot_query,
            user_query.clone(),
        )),
        delete_user: Arc::new(DeleteUserService::new(user_admin_repo)),
        user_history: Arc::new(GetUserHistoryService::new(
            user_query.clone(),
            reservation_query,
        )),
    };

    AppState {
        auth,
        parking,
        reservation,
        admin,
        principal_resolver: PrincipalResolver::new(Arc::new(user_query)),
    }
}

#[cfg(not(tarpaulin_include))]
async fn ensure_admin(
    config: &AppConfig,
    db: &Arc<DatabaseConnection>,
    hasher: Argon2Hasher,
) -> anyhow::Result<()> {
    let Some(seed) = &config.admin else {
        info!("ADMIN_USERNAME not set, skipping admin bootstrap");
        return Ok(());
    };

    let service = EnsureAdminService::new(
        UserQueryPostgres::new(Arc::clone(db)),
        UserRepositoryPostgres::new(Arc::clone(db)),
        hasher,
        BasicCredentialPolicy,
    );

    match service.ensure(&seed.username, &seed.password).await? {
        AdminBootstrap::Created(id) => info!(user_id = %id, "Admin account created"),
        AdminBootstrap::AlreadyPresent(id) => info!(user_id = %id, "Admin account present"),
        AdminBootstrap::NotAnAdmin(id) => {
            warn!(user_id = %id, username = %seed.username, "Configured admin username belongs to a regular account")
        }
    }

    Ok(())
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    let config = AppConfig::from_env()?;
    let server_url = config.server_url();

    // Database connection
    let mut opt = ConnectOptions::new(config.database.url.clone());
    opt.max_connections(config.database.max_connections)
        .min_connections(config.database.min_connections)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .context("Failed to connect to database")?;
    let db_arc = Arc::new(conn);

    if config.database.run_migrations {
        Migrator::up(db_arc.as_ref(), None)
            .await
            .context("Failed to run migrations")?;
        info!("Migrations applied");
    }

    let hasher = Argon2Hasher::new(config.argon2)
        .map_err(|e| anyhow::anyhow!("Invalid Argon2 settings: {e}"))?;

    ensure_admin(&config, &db_arc, hasher.clone()).await?;

    let state = web::Data::new(build_state(&db_arc, hasher));
    let session_key = Key::derive_from(config.secret_key.as_bytes());
    let cookie_secure = config.cookie_secure;
    let openapi = ApiDoc::openapi();

    info!(environment = %config.environment, url = %server_url, "Server listening");

    HttpServer::new(move || {
        App::new()
            .wrap(
                SessionMiddleware::builder(CookieSessionStore::default(), session_key.clone())
                    .cookie_name(SESSION_COOKIE_NAME.to_string())
                    .cookie_http_only(true)
                    .cookie_secure(cookie_secure)
                    .cookie_same_site(SameSite::Lax)
                    .cookie_content_security(CookieContentSecurity::Private)
                    .build(),
            )
            .wrap(Logger::new("%r %s %Dms"))
            .app_data(state.clone())
            .app_data(web::Data::new(Arc::clone(&db_arc)))
            .app_data(custom_json_config())
            .app_data(custom_path_config())
            .app_data(custom_query_config())
            .service(
                SwaggerUi::new("/docs/{_:.*}").url("/api-docs/openapi.json", openapi.clone()),
            )
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await?;

    Ok(())
}

fn init_routes(cfg: &mut web::ServiceConfig) {
    use crate::modules::admin::adapter::incoming::web::routes as admin;
    use crate::modules::auth::adapter::incoming::web::routes as auth;
    use crate::modules::parking::adapter::incoming::web::routes as parking;
    use crate::modules::reservation::adapter::incoming::web::routes as reservation;

    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Auth
    cfg.service(auth::register_user_handler);
    cfg.service(auth::login_handler);
    cfg.service(auth::admin_login_handler);
    cfg.service(auth::logout_handler);
    cfg.service(auth::update_profile_handler);
    // User
    cfg.service(parking::user_dashboard_handler);
    cfg.service(reservation::book_spot_handler);
    cfg.service(reservation::release_spot_handler);
    cfg.service(reservation::history_handler);
    // Admin
    cfg.service(admin::admin_dashboard_handler);
    cfg.service(parking::add_lot_handler);
    cfg.service(parking::lot_detail_handler);
    cfg.service(parking::edit_lot_handler);
    cfg.service(parking::delete_lot_handler);
    cfg.service(reservation::list_reservations_handler);
    cfg.service(reservation::force_release_handler);
    cfg.service(admin::delete_user_handler);
    cfg.service(admin::user_history_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
        std::process::exit(1);
    }
}
