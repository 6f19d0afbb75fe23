use chrono::NaiveDate;
use serde::Serialize;
use utoipa::ToSchema;

use crate::modules::auth::application::domain::entities::User;
use crate::modules::parking::application::domain::entities::LotSummary;
use crate::modules::reservation::application::domain::entities::ReservationView;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct DailyBookings {
    #[schema(value_type = String, example = "2025-07-01")]
    pub date: NaiveDate,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct LotOccupancy {
    pub lot_id: i32,
    pub prime_location_name: String,
    pub available: i64,
    pub occupied: i64,
}

impl From<&LotSummary> for LotOccupancy {
    fn from(lot: &LotSummary) -> Self {
        LotOccupancy {
            lot_id: lot.id,
            prime_location_name: lot.prime_location_name.clone(),
            available: lot.available_spots,
            occupied: lot.occupied_spots,
        }
    }
}

/// Everything the admin dashboard shows, gathered in one read.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct DashboardReport {
    pub bookings_per_day: Vec<DailyBookings>,
    pub occupancy: Vec<LotOccupancy>,
    pub active_reservations: Vec<ReservationView>,
    pub users: Vec<User>,
    pub lots: Vec<LotSummary>,
}
