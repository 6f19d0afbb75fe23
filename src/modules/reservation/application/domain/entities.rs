use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use super::cost::parking_cost;
use crate::modules::auth::application::domain::entities::UserId;

/// A booking of one spot. Open while `leaving_time` is `None`.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Reservation {
    pub id: i32,
    pub spot_id: i32,
    pub user_id: UserId,
    pub parking_time: DateTime<Utc>,
    pub leaving_time: Option<DateTime<Utc>>,
    /// Lot price at booking time.
    pub cost_per_hour: f64,
}

impl Reservation {
    pub fn is_active(&self) -> bool {
        self.leaving_time.is_none()
    }

    pub fn total_cost(&self) -> Option<f64> {
        self.leaving_time
            .map(|end| parking_cost(self.parking_time, end, self.cost_per_hour))
    }
}

/// Reservation joined with its spot, lot and user for listings.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ReservationView {
    pub id: i32,
    pub spot_id: i32,
    pub lot_id: i32,
    #[schema(example = "Central Mall")]
    pub lot_name: String,
    pub user_id: UserId,
    #[schema(example = "alice")]
    pub username: String,
    pub parking_time: DateTime<Utc>,
    pub leaving_time: Option<DateTime<Utc>>,
    pub cost_per_hour: f64,
    /// Present once the reservation is closed.
    pub total_cost: Option<f64>,
}

impl ReservationView {
    pub fn is_active(&self) -> bool {
        self.leaving_time.is_none()
    }
}

/// Result of closing a reservation.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ReleaseReceipt {
    pub reservation: Reservation,
    #[schema(example = 80.0)]
    pub total_cost: f64,
}

impl ReleaseReceipt {
    /// `None` if the reservation is still open.
    pub fn for_closed(reservation: Reservation) -> Option<Self> {
        let total_cost = reservation.total_cost()?;
        Some(Self {
            reservation,
            total_cost,
        })
    }
}
