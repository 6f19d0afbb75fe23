use async_trait::async_trait;

use crate::modules::auth::application::domain::entities::UserId;
use crate::modules::reservation::application::domain::entities::Reservation;
use crate::modules::reservation::application::ports::outgoing::ReservationRepositoryError;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum BookSpotError {
    #[error("Parking lot not found")]
    LotNotFound,

    #[error("You already have an active reservation")]
    AlreadyActive,

    #[error("No spots available in this lot")]
    NoAvailability,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<ReservationRepositoryError> for BookSpotError {
    fn from(err: ReservationRepositoryError) -> Self {
        match err {
            ReservationRepositoryError::LotNotFound => BookSpotError::LotNotFound,
            ReservationRepositoryError::AlreadyActive => BookSpotError::AlreadyActive,
            ReservationRepositoryError::NoAvailability => BookSpotError::NoAvailability,
            other => BookSpotError::RepositoryError(other.to_string()),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait BookSpotUseCase: Send + Sync {
    async fn execute(&self, user_id: UserId, lot_id: i32) -> Result<Reservation, BookSpotError>;
}
