use async_trait::async_trait;

use crate::modules::auth::application::domain::entities::UserId;
use crate::modules::reservation::application::domain::entities::ReleaseReceipt;
use crate::modules::reservation::application::ports::outgoing::ReservationRepositoryError;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum ReleaseSpotError {
    #[error("No active reservation found")]
    NoActiveReservation,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<ReservationRepositoryError> for ReleaseSpotError {
    fn from(err: ReservationRepositoryError) -> Self {
        match err {
            ReservationRepositoryError::NoActiveReservation => {
                ReleaseSpotError::NoActiveReservation
            }
            other => ReleaseSpotError::RepositoryError(other.to_string()),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait ReleaseSpotUseCase: Send + Sync {
    async fn execute(&self, user_id: UserId) -> Result<ReleaseReceipt, ReleaseSpotError>;
}
