use async_trait::async_trait;

use crate::modules::admin::application::domain::dashboard::{
    DailyBookings, DashboardReport, LotOccupancy,
};
use crate::modules::admin::application::ports::incoming::use_cases::{
    GetDashboardError, GetDashboardUseCase,
};
use crate::modules::auth::application::ports::outgoing::UserQuery;
use crate::modules::parking::application::ports::outgoing::{LotQuery, LotSearch};
use crate::modules::reservation::application::ports::outgoing::ReservationQuery;

pub struct GetDashboardService<R, L, U>
where
    R: ReservationQuery,
    L: LotQuery,
    U: UserQuery,
{
    reservations: R,
    lots: L,
    users: U,
}

impl<R, L, U> GetDashboardService<R, L, U>
where
    R: ReservationQuery,
    L: LotQuery,
    U: UserQuery,
{
    pub fn new(reservations: R, lots: L, users: U) -> Self {
        Self {
            reservations,
            lots,
            users,
        }
    }
}

#[async_trait]
impl<R, L, U> GetDashboardUseCase for GetDashboardService<R, L, U>
where
    R: ReservationQuery + Send + Sync,
    L: LotQuery + Send + Sync,
    U: UserQuery + Send + Sync,
{
    async fn execute(&self) -> Result<DashboardReport, GetDashboardError> {
        let per_day = self.reservations.count_bookings_per_day().await?;
        let lots = self.lots.search(LotSearch::default()).await?;
        let active_reservations = self.reservations.list_active().await?;
        let users = self.users.list_non_admin().await?;

        Ok(DashboardReport {
            bookings_per_day: per_day
                .into_iter()
                .map(|(date, count)| DailyBookings { date, count })
                .collect(),
            occupancy: lots.iter().map(LotOccupancy::from).collect(),
            active_reservations,
            users,
            lots,
        })
    }
}
