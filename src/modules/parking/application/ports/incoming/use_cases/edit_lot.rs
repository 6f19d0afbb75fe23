use async_trait::async_trait;

use crate::modules::parking::application::domain::entities::ParkingLot;
use crate::modules::parking::application::domain::lot_fields::LotFieldError;
use crate::modules::parking::application::ports::outgoing::{LotData, LotRepositoryError};

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum EditLotError {
    #[error("Parking lot not found")]
    LotNotFound,

    #[error("{0}")]
    ValidationFailure(#[from] LotFieldError),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<LotRepositoryError> for EditLotError {
    fn from(err: LotRepositoryError) -> Self {
        match err {
            LotRepositoryError::NotFound => EditLotError::LotNotFound,
            other => EditLotError::RepositoryError(other.to_string()),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait EditLotUseCase: Send + Sync {
    async fn execute(&self, lot_id: i32, data: LotData) -> Result<ParkingLot, EditLotError>;
}
