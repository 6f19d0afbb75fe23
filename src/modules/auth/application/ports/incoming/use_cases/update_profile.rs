use async_trait::async_trait;

use crate::modules::auth::application::domain::entities::{User, UserId};
use crate::modules::auth::application::ports::incoming::credential_policy::CredentialPolicyError;
use crate::modules::auth::application::ports::outgoing::{
    HashError, UserQueryError, UserRepositoryError,
};

/// Requested profile edits. An absent or empty password keeps the current one.
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub username: Option<String>,
    pub password: Option<String>,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateProfileError {
    #[error("{0}")]
    InvalidCredentials(#[from] CredentialPolicyError),

    #[error("Username already taken")]
    UsernameTaken,

    #[error("User not found")]
    UserNotFound,

    #[error("Hashing error: {0}")]
    HashingFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<UserRepositoryError> for UpdateProfileError {
    fn from(err: UserRepositoryError) -> Self {
        match err {
            UserRepositoryError::UsernameTaken => UpdateProfileError::UsernameTaken,
            UserRepositoryError::NotFound => UpdateProfileError::UserNotFound,
            UserRepositoryError::DatabaseError(msg) => UpdateProfileError::RepositoryError(msg),
        }
    }
}

impl From<UserQueryError> for UpdateProfileError {
    fn from(err: UserQueryError) -> Self {
        match err {
            UserQueryError::DatabaseError(msg) => UpdateProfileError::RepositoryError(msg),
        }
    }
}

impl From<HashError> for UpdateProfileError {
    fn from(err: HashError) -> Self {
        UpdateProfileError::HashingFailed(err.to_string())
    }
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait UpdateProfileUseCase: Send + Sync {
    async fn execute(
        &self,
        user_id: UserId,
        update: ProfileUpdate,
    ) -> Result<User, UpdateProfileError>;
}
