use async_trait::async_trait;

use crate::modules::parking::application::domain::entities::LotSummary;
use crate::modules::parking::application::ports::outgoing::{LotQueryError, LotSearch};

#[derive(Debug, Clone, thiserror::Error)]
pub enum SearchLotsError {
    #[error("Query error: {0}")]
    QueryError(String),
}

impl From<LotQueryError> for SearchLotsError {
    fn from(err: LotQueryError) -> Self {
        SearchLotsError::QueryError(err.to_string())
    }
}

#[async_trait]
pub trait SearchLotsUseCase: Send + Sync {
    async fn execute(&self, search: LotSearch) -> Result<Vec<LotSummary>, SearchLotsError>;
}
