use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::modules::auth::application::domain::entities::UserId;
use crate::modules::reservation::application::domain::entities::Reservation;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ReservationRepositoryError {
    #[error("Parking lot not found")]
    LotNotFound,

    #[error("User already has an active reservation")]
    AlreadyActive,

    #[error("No available spot in this lot")]
    NoAvailability,

    #[error("User has no active reservation")]
    NoActiveReservation,

    #[error("Reservation not found")]
    NotFound,

    #[error("Reservation already closed")]
    AlreadyClosed,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Writes that keep spot status and reservations consistent.
///
/// Every method runs as a single transaction: a spot is occupied exactly
/// while an open reservation references it.
#[async_trait]
pub trait ReservationRepository: Send + Sync {
    /// Claims the lowest-id available spot of the lot and opens a
    /// reservation priced at the lot's current rate.
    async fn book_spot(
        &self,
        user_id: UserId,
        lot_id: i32,
        at: DateTime<Utc>,
    ) -> Result<Reservation, ReservationRepositoryError>;

    /// Closes the user's open reservation at `at` and frees its spot.
    async fn release_active(
        &self,
        user_id: UserId,
        at: DateTime<Utc>,
    ) -> Result<Reservation, ReservationRepositoryError>;

    /// Closes any open reservation regardless of owner.
    async fn force_release(
        &self,
        reservation_id: i32,
        at: DateTime<Utc>,
    ) -> Result<Reservation, ReservationRepositoryError>;
}
