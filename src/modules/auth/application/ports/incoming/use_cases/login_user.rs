use async_trait::async_trait;

use crate::modules::auth::application::domain::entities::Principal;
use crate::modules::auth::application::ports::outgoing::{HashError, UserQueryError};

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum LoginUserError {
    /// Unknown username and wrong password are indistinguishable.
    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("Hashing error: {0}")]
    HashingFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<UserQueryError> for LoginUserError {
    fn from(err: UserQueryError) -> Self {
        LoginUserError::RepositoryError(err.to_string())
    }
}

impl From<HashError> for LoginUserError {
    fn from(err: HashError) -> Self {
        LoginUserError::HashingFailed(err.to_string())
    }
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait LoginUserUseCase: Send + Sync {
    async fn execute(&self, username: &str, password: &str) -> Result<Principal, LoginUserError>;
}
