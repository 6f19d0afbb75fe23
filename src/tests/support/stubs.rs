use async_trait::async_trait;
use chrono::{Duration, TimeZone, Utc};

use crate::modules::admin::application::domain::dashboard::DashboardReport;
use crate::modules::admin::application::ports::incoming::use_cases::{
    DeleteUserError, DeleteUserUseCase, GetDashboardError, GetDashboardUseCase,
    GetUserHistoryError, GetUserHistoryUseCase, UserHistory,
};
use crate::modules::auth::application::domain::entities::{Principal, User, UserId};
use crate::modules::auth::application::ports::incoming::use_cases::{
    LoginUserError, LoginUserUseCase, ProfileUpdate, RegisterUserError, RegisterUserUseCase,
    UpdateProfileError, UpdateProfileUseCase,
};
use crate::modules::auth::application::ports::outgoing::{UserQuery, UserQueryError};
use crate::modules::parking::application::domain::entities::{LotDetail, LotSummary, ParkingLot};
use crate::modules::parking::application::ports::incoming::use_cases::{
    CreateLotError, CreateLotUseCase, DeleteLotError, DeleteLotUseCase, EditLotError,
    EditLotUseCase, GetLotDetailError, GetLotDetailUseCase, SearchLotsError, SearchLotsUseCase,
};
use crate::modules::parking::application::ports::outgoing::{LotData, LotSearch};
use crate::modules::reservation::application::domain::cost::parking_cost;
use crate::modules::reservation::application::domain::entities::{
    ReleaseReceipt, Reservation, ReservationView,
};
use crate::modules::reservation::application::ports::incoming::use_cases::{
    BookSpotError, BookSpotUseCase, ForceReleaseError, ForceReleaseUseCase,
    GetActiveReservationUseCase, GetHistoryUseCase, ListReservationsUseCase, ReleaseSpotError,
    ReleaseSpotUseCase, ReservationReadError,
};

const NOT_CONFIGURED: &str = "not used in this test";

/* --------------------------------------------------
 * Fixtures
 * -------------------------------------------------- */

pub fn user(id: i32, username: &str) -> User {
    User {
        id: UserId::from(id),
        username: username.to_string(),
        password_hash: "hash".to_string(),
        is_admin: false,
    }
}

pub fn admin(id: i32) -> User {
    User {
        id: UserId::from(id),
        username: "admin".to_string(),
        password_hash: "hash".to_string(),
        is_admin: true,
    }
}

pub fn lot_summary(id: i32, name: &str, available: i64, occupied: i64) -> LotSummary {
    LotSummary {
        id,
        prime_location_name: name.to_string(),
        price_per_hour: 40.0,
        address: "1 Main Road".to_string(),
        pin_code: "560001".to_string(),
        maximum_number_of_spots: (available + occupied) as i32,
        available_spots: available,
        occupied_spots: occupied,
    }
}

/// Reservation of `user{user_id}` in lot 1. Closed ones lasted two hours.
pub fn reservation_view(id: i32, user_id: i32, open: bool) -> ReservationView {
    let parking_time = Utc.with_ymd_and_hms(2025, 7, 1, 9, 0, 0).unwrap();
    let leaving_time = (!open).then(|| parking_time + Duration::hours(2));
    let cost_per_hour = 40.0;

    ReservationView {
        id,
        spot_id: id,
        lot_id: 1,
        lot_name: "Central Mall".to_string(),
        user_id: UserId::from(user_id),
        username: format!("user{user_id}"),
        parking_time,
        leaving_time,
        cost_per_hour,
        total_cost: leaving_time.map(|end| parking_cost(parking_time, end, cost_per_hour)),
    }
}

/* --------------------------------------------------
 * UserQuery backed by a fixed list
 * -------------------------------------------------- */

#[derive(Clone, Default)]
pub struct StubUserQuery {
    users: Vec<User>,
}

impl StubUserQuery {
    pub fn with_users(users: Vec<User>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl UserQuery for StubUserQuery {
    async fn find_by_id(&self, user_id: UserId) -> Result<Option<User>, UserQueryError> {
        Ok(self.users.iter().find(|u| u.id == user_id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, UserQueryError> {
        Ok(self.users.iter().find(|u| u.username == username).cloned())
    }

    async fn list_non_admin(&self) -> Result<Vec<User>, UserQueryError> {
        Ok(self.users.iter().filter(|u| !u.is_admin).cloned().collect())
    }
}

/* --------------------------------------------------
 * Default use case
 *
 * Stands in for every use case a route test does not
 * exercise. Reads come back empty, writes fail.
 * -------------------------------------------------- */

#[derive(Clone, Copy, Default)]
pub struct UnusedUseCase;

#[async_trait]
impl RegisterUserUseCase for UnusedUseCase {
    async fn execute(&self, _: &str, _: &str) -> Result<User, RegisterUserError> {
        Err(RegisterUserError::RepositoryError(NOT_CONFIGURED.into()))
    }
}

#[async_trait]
impl LoginUserUseCase for UnusedUseCase {
    async fn execute(&self, _: &str, _: &str) -> Result<Principal, LoginUserError> {
        Err(LoginUserError::InvalidCredentials)
    }
}

#[async_trait]
impl UpdateProfileUseCase for UnusedUseCase {
    async fn execute(&self, _: UserId, _: ProfileUpdate) -> Result<User, UpdateProfileError> {
        Err(UpdateProfileError::RepositoryError(NOT_CONFIGURED.into()))
    }
}

#[async_trait]
impl CreateLotUseCase for UnusedUseCase {
    async fn execute(&self, _: LotData) -> Result<ParkingLot, CreateLotError> {
        Err(CreateLotError::RepositoryError(NOT_CONFIGURED.into()))
    }
}

#[async_trait]
impl EditLotUseCase for UnusedUseCase {
    async fn execute(&self, _: i32, _: LotData) -> Result<ParkingLot, EditLotError> {
        Err(EditLotError::RepositoryError(NOT_CONFIGURED.into()))
    }
}

#[async_trait]
impl DeleteLotUseCase for UnusedUseCase {
    async fn execute(&self, _: i32) -> Result<(), DeleteLotError> {
        Err(DeleteLotError::RepositoryError(NOT_CONFIGURED.into()))
    }
}

#[async_trait]
impl SearchLotsUseCase for UnusedUseCase {
    async fn execute(&self, _: LotSearch) -> Result<Vec<LotSummary>, SearchLotsError> {
        Ok(vec![])
    }
}

#[async_trait]
impl GetLotDetailUseCase for UnusedUseCase {
    async fn execute(&self, _: i32) -> Result<LotDetail, GetLotDetailError> {
        Err(GetLotDetailError::LotNotFound)
    }
}

#[async_trait]
impl BookSpotUseCase for UnusedUseCase {
    async fn execute(&self, _: UserId, _: i32) -> Result<Reservation, BookSpotError> {
        Err(BookSpotError::RepositoryError(NOT_CONFIGURED.into()))
    }
}

#[async_trait]
impl ReleaseSpotUseCase for UnusedUseCase {
    async fn execute(&self, _: UserId) -> Result<ReleaseReceipt, ReleaseSpotError> {
        Err(ReleaseSpotError::NoActiveReservation)
    }
}

#[async_trait]
impl ForceReleaseUseCase for UnusedUseCase {
    async fn execute(&self, _: i32) -> Result<ReleaseReceipt, ForceReleaseError> {
        Err(ForceReleaseError::ReservationNotFound)
    }
}

#[async_trait]
impl GetHistoryUseCase for UnusedUseCase {
    async fn execute(&self, _: UserId) -> Result<Vec<ReservationView>, ReservationReadError> {
        Ok(vec![])
    }
}

#[async_trait]
impl ListReservationsUseCase for UnusedUseCase {
    async fn execute(&self) -> Result<Vec<ReservationView>, ReservationReadError> {
        Ok(vec![])
    }
}

#[async_trait]
impl GetActiveReservationUseCase for UnusedUseCase {
    async fn execute(&self, _: UserId) -> Result<Option<ReservationView>, ReservationReadError> {
        Ok(None)
    }
}

#[async_trait]
impl GetDashboardUseCase for UnusedUseCase {
    async fn execute(&self) -> Result<DashboardReport, GetDashboardError> {
        Err(GetDashboardError::QueryError(NOT_CONFIGURED.into()))
    }
}

#[async_trait]
impl DeleteUserUseCase for UnusedUseCase {
    async fn execute(&self, _: UserId) -> Result<(), DeleteUserError> {
        Err(DeleteUserError::UserNotFound)
    }
}

#[async_trait]
impl GetUserHistoryUseCase for UnusedUseCase {
    async fn execute(&self, _: UserId) -> Result<UserHistory, GetUserHistoryError> {
        Err(GetUserHistoryError::UserNotFound)
    }
}
