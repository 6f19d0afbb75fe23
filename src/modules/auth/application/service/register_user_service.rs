use async_trait::async_trait;
use tracing::info;

use crate::modules::auth::application::domain::entities::User;
use crate::modules::auth::application::ports::incoming::credential_policy::CredentialPolicy;
use crate::modules::auth::application::ports::incoming::use_cases::{
    RegisterUserError, RegisterUserUseCase,
};
use crate::modules::auth::application::ports::outgoing::{
    NewUser, PasswordHasher, UserQuery, UserRepository,
};

pub struct RegisterUserService<Q, R, H, P>
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

impl<Q, R, H, P> RegisterUserService<Q, R, H, P>
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
impl<Q, R, H, P> RegisterUserUseCase for RegisterUserService<Q, R, H, P>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
    H: PasswordHasher + Send + Sync,
    P: CredentialPolicy + Send + Sync,
{
    async fn execute(&self, username: &str, password: &str) -> Result<User, RegisterUserError> {
        let username = self.policy.validate_username(username)?;
        self.policy.validate_password(password)?;

        if self.query.find_by_username(&username).await?.is_some() {
            return Err(RegisterUserError::UsernameTaken);
        }

        let password_hash = self.hasher.hash_password(password).await?;

        // The unique index still catches a concurrent registration.
        let user = self
            .repository
            .create_user(NewUser {
                username,
                password_hash,
                is_admin: false,
            })
            .await?;

        info!(user_id = %user.id, "User registered");
        Ok(user)
    }
}
