use async_trait::async_trait;

use crate::modules::auth::application::domain::entities::User;
use crate::modules::auth::application::ports::incoming::credential_policy::CredentialPolicyError;
use crate::modules::auth::application::ports::outgoing::{
    HashError, UserQueryError, UserRepositoryError,
};

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum RegisterUserError {
    #[error("{0}")]
    InvalidCredentials(#[from] CredentialPolicyError),

    #[error("Username already taken")]
    UsernameTaken,

    #[error("Hashing error: {0}")]
    HashingFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<UserRepositoryError> for RegisterUserError {
    fn from(err: UserRepositoryError) -> Self {
        match err {
            UserRepositoryError::UsernameTaken => RegisterUserError::UsernameTaken,
            other => RegisterUserError::RepositoryError(other.to_string()),
        }
    }
}

impl From<UserQueryError> for RegisterUserError {
    fn from(err: UserQueryError) -> Self {
        RegisterUserError::RepositoryError(err.to_string())
    }
}

impl From<HashError> for RegisterUserError {
    fn from(err: HashError) -> Self {
        RegisterUserError::HashingFailed(err.to_string())
    }
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait RegisterUserUseCase: Send + Sync {
    async fn execute(&self, username: &str, password: &str) -> Result<User, RegisterUserError>;
}
