use async_trait::async_trait;
use serde::Serialize;
use utoipa::ToSchema;

use crate::modules::auth::application::domain::entities::{User, UserId};
use crate::modules::auth::application::ports::outgoing::UserQueryError;
use crate::modules::reservation::application::domain::entities::ReservationView;
use crate::modules::reservation::application::ports::outgoing::ReservationQueryError;

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct UserHistory {
    pub user: User,
    /// Newest first.
    pub reservations: Vec<ReservationView>,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetUserHistoryError {
    #[error("User not found")]
    UserNotFound,

    #[error("Query error: {0}")]
    QueryError(String),
}

impl From<UserQueryError> for GetUserHistoryError {
    fn from(err: UserQueryError) -> Self {
        GetUserHistoryError::QueryError(err.to_string())
    }
}

impl From<ReservationQueryError> for GetUserHistoryError {
    fn from(err: ReservationQueryError) -> Self {
        GetUserHistoryError::QueryError(err.to_string())
    }
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait GetUserHistoryUseCase: Send + Sync {
    async fn execute(&self, user_id: UserId) -> Result<UserHistory, GetUserHistoryError>;
}
