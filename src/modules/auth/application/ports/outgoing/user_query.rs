use async_trait::async_trait;

use crate::modules::auth::application::domain::entities::{User, UserId};

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait UserQuery: Send + Sync {
    async fn find_by_id(&self, user_id: UserId) -> Result<Option<User>, UserQueryError>;

    /// Exact, case-sensitive match.
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, UserQueryError>;

    /// Every account without the admin flag, ordered by id.
    async fn list_non_admin(&self) -> Result<Vec<User>, UserQueryError>;
}
