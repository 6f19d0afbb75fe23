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
pub enum CreateLotError {
    #[error("{0}")]
    ValidationFailure(#[from] LotFieldError),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<LotRepositoryError> for CreateLotError {
    fn from(err: LotRepositoryError) -> Self {
        CreateLotError::RepositoryError(err.to_string())
    }
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CreateLotUseCase: Send + Sync {
    async fn execute(&self, data: LotData) -> Result<ParkingLot, CreateLotError>;
}
