use async_trait::async_trait;

use crate::modules::admin::application::domain::dashboard::DashboardReport;
use crate::modules::auth::application::ports::outgoing::UserQueryError;
use crate::modules::parking::application::ports::outgoing::LotQueryError;
use crate::modules::reservation::application::ports::outgoing::ReservationQueryError;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetDashboardError {
    #[error("Query error: {0}")]
    QueryError(String),
}

impl From<ReservationQueryError> for GetDashboardError {
    fn from(err: ReservationQueryError) -> Self {
        GetDashboardError::QueryError(err.to_string())
    }
}

impl From<LotQueryError> for GetDashboardError {
    fn from(err: LotQueryError) -> Self {
        GetDashboardError::QueryError(err.to_string())
    }
}

impl From<UserQueryError> for GetDashboardError {
    fn from(err: UserQueryError) -> Self {
        GetDashboardError::QueryError(err.to_string())
    }
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait GetDashboardUseCase: Send + Sync {
    async fn execute(&self) -> Result<DashboardReport, GetDashboardError>;
}
