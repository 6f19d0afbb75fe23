use async_trait::async_trait;

use crate::modules::parking::application::ports::outgoing::LotRepositoryError;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteLotError {
    #[error("Parking lot not found")]
    LotNotFound,

    #[error("Parking lot has {0} occupied spot(s)")]
    HasOccupiedSpots(u64),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<LotRepositoryError> for DeleteLotError {
    fn from(err: LotRepositoryError) -> Self {
        match err {
            LotRepositoryError::NotFound => DeleteLotError::LotNotFound,
            LotRepositoryError::OccupiedSpots(n) => DeleteLotError::HasOccupiedSpots(n),
            LotRepositoryError::DatabaseError(msg) => DeleteLotError::RepositoryError(msg),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait DeleteLotUseCase: Send + Sync {
    async fn execute(&self, lot_id: i32) -> Result<(), DeleteLotError>;
}
