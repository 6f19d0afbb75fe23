use async_trait::async_trait;

use crate::modules::reservation::application::domain::entities::ReleaseReceipt;
use crate::modules::reservation::application::ports::outgoing::ReservationRepositoryError;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum ForceReleaseError {
    #[error("Reservation not found")]
    ReservationNotFound,

    #[error("Reservation already closed")]
    AlreadyClosed,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<ReservationRepositoryError> for ForceReleaseError {
    fn from(err: ReservationRepositoryError) -> Self {
        match err {
            ReservationRepositoryError::NotFound => ForceReleaseError::ReservationNotFound,
            ReservationRepositoryError::AlreadyClosed => ForceReleaseError::AlreadyClosed,
            other => ForceReleaseError::RepositoryError(other.to_string()),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait ForceReleaseUseCase: Send + Sync {
    async fn execute(&self, reservation_id: i32) -> Result<ReleaseReceipt, ForceReleaseError>;
}
