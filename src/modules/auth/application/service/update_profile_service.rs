use async_trait::async_trait;
use tracing::info;

use crate::modules::auth::application::domain::entities::{User, UserId};
use crate::modules::auth::application::ports::incoming::credential_policy::CredentialPolicy;
use crate::modules::auth::application::ports::incoming::use_cases::{
    ProfileUpdate, UpdateProfileError, UpdateProfileUseCase,
};
use crate::modules::auth::application::ports::outgoing::{
    PasswordHasher, ProfileChanges, UserQuery, UserRepository,
};

pub struct UpdateProfileService<Q, R, H, P>
where
    Q: UserQuery,
    R: UserRepository,
    H: PasswordHasher,
    P: CredentialPolicy,
{
    query: Q,
    repository: R,
    hasher: H,
    policy: P,
}

impl<Q, R, H, P> UpdateProfileService<Q, R, H, P>
where
    Q: UserQuery,
    R: UserRepository,
    H: PasswordHasher,
    P: CredentialPolicy,
{
    pub fn new(query: Q, repository: R, hasher: H, policy: P) -> Self {
        Self {
            query,
            repository,
            hasher,
            policy,
        }
    }
}

#[async_trait]
impl<Q, R, H, P> UpdateProfileUseCase for UpdateProfileService<Q, R, H, P>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
    H: PasswordHasher + Send + Sync,
    P: CredentialPolicy + Send + Sync,
{
    async fn execute(
        &self,
        user_id: UserId,
        update: ProfileUpdate,
    ) -> Result<User, UpdateProfileError> {
        let current = self
            .query
            .find_by_id(user_id)
            .await?
            .ok_or(UpdateProfileError::UserNotFound)?;

        // Validate everything before touching storage.
        let new_username = match update.username.as_deref() {
            Some(raw) => {
                let username = self.policy.validate_username(raw)?;
                (username != current.username).then_some(username)
            }
            None => None,
        };

        let new_password = update.password.filter(|p| !p.is_empty());
        if let Some(password) = new_password.as_deref() {
            self.policy.validate_password(password)?;
        }

        if let Some(username) = new_username.as_deref() {
            if self.query.find_by_username(username).await?.is_some() {
                return Err(UpdateProfileError::UsernameTaken);
            }
        }

        let password_hash = match new_password {
            Some(password) => Some(self.hasher.hash_password(&password).await?),
            None => None,
        };

        let changes = ProfileChanges {
            username: new_username,
            password_hash,
        };

        if changes.is_empty() {
            return Ok(current);
        }

        let updated = self.repository.update_profile(user_id, changes).await?;

        info!(user_id = %user_id, "Profile updated");
        Ok(updated)
    }
}
