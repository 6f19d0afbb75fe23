use async_trait::async_trait;

use crate::modules::auth::application::domain::entities::UserId;

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserAdminRepositoryError {
    #[error("User not found")]
    NotFound,

    #[error("Admin accounts cannot be deleted")]
    ProtectedAdmin,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait UserAdminRepository: Send + Sync {
    /// Removes a non-admin user and all of their reservations in one
    /// transaction, freeing the spot of an open one.
    ///
    /// Returns the number of reservations removed.
    async fn delete_user_with_reservations(
        &self,
        user_id: UserId,
    ) -> Result<u64, UserAdminRepositoryError>;
}
