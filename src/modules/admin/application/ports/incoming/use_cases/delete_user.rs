use async_trait::async_trait;

use crate::modules::admin::application::ports::outgoing::UserAdminRepositoryError;
use crate::modules::auth::application::domain::entities::UserId;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteUserError {
    #[error("User not found")]
    UserNotFound,

    #[error("Admin account cannot be deleted")]
    AdminProtected,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<UserAdminRepositoryError> for DeleteUserError {
    fn from(err: UserAdminRepositoryError) -> Self {
        match err {
            UserAdminRepositoryError::NotFound => DeleteUserError::UserNotFound,
            UserAdminRepositoryError::ProtectedAdmin => DeleteUserError::AdminProtected,
            UserAdminRepositoryError::DatabaseError(msg) => DeleteUserError::RepositoryError(msg),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait DeleteUserUseCase: Send + Sync {
    async fn execute(&self, user_id: UserId) -> Result<(), DeleteUserError>;
}
