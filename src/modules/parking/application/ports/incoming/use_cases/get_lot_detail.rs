use async_trait::async_trait;

use crate::modules::parking::application::domain::entities::LotDetail;
use crate::modules::parking::application::ports::outgoing::LotQueryError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetLotDetailError {
    #[error("Parking lot not found")]
    LotNotFound,

    #[error("Query error: {0}")]
    QueryError(String),
}

impl From<LotQueryError> for GetLotDetailError {
    fn from(err: LotQueryError) -> Self {
        match err {
            LotQueryError::NotFound => GetLotDetailError::LotNotFound,
            LotQueryError::DatabaseError(msg) => GetLotDetailError::QueryError(msg),
        }
    }
}

#[async_trait]
pub trait GetLotDetailUseCase: Send + Sync {
    async fn execute(&self, lot_id: i32) -> Result<LotDetail, GetLotDetailError>;
}
