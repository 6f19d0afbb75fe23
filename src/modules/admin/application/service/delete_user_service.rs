use async_trait::async_trait;
use tracing::{info, warn};

use crate::modules::admin::application::ports::incoming::use_cases::{
    DeleteUserError, DeleteUserUseCase,
};
use crate::modules::admin::application::ports::outgoing::UserAdminRepository;
use crate::modules::auth::application::domain::entities::UserId;

pub struct DeleteUserService<R>
where
    R: UserAdminRepository,
{
    repository: R,
}

impl<R> DeleteUserService<R>
where
    R: UserAdminRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> DeleteUserUseCase for DeleteUserService<R>
where
    R: UserAdminRepository + Send + Sync,
{
    async fn execute(&self, user_id: UserId) -> Result<(), DeleteUserError> {
        match self.repository.delete_user_with_reservations(user_id).await {
            Ok(removed) => {
                info!(user_id = %user_id, reservations_removed = removed, "User deleted");
                Ok(())
            }
            Err(err) => {
                let err = DeleteUserError::from(err);
                if matches!(err, DeleteUserError::AdminProtected) {
                    warn!(user_id = %user_id, "Refused to delete admin account");
                }
                Err(err)
            }
        }
    }
}
