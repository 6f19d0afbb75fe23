use async_trait::async_trait;
use tracing::info;

use crate::modules::auth::application::domain::entities::Principal;
use crate::modules::auth::application::ports::incoming::use_cases::{
    LoginUserError, LoginUserUseCase,
};
use crate::modules::auth::application::ports::outgoing::{PasswordHasher, UserQuery};

pub struct LoginUserService<Q, H>
where
    Q: UserQuery,
    H: PasswordHasher,
{
    query: Q,
    hasher: H,
}

impl<Q, H> LoginUserService<Q, H>
where
    Q: UserQuery,
    H: PasswordHasher,
{
    pub fn new(query: Q, hasher: H) -> Self {
        Self { query, hasher }
    }
}

#[async_trait]
impl<Q, H> LoginUserUseCase for LoginUserService<Q, H>
where
    Q: UserQuery + Send + Sync,
    H: PasswordHasher + Send + Sync,
{
    async fn execute(&self, username: &str, password: &str) -> Result<Principal, LoginUserError> {
        let user = self
            .query
            .find_by_username(username.trim())
            .await?
            .ok_or(LoginUserError::InvalidCredentials)?;

        if !self
            .hasher
            .verify_password(password, &user.password_hash)
            .await?
        {
            return Err(LoginUserError::InvalidCredentials);
        }

        info!(user_id = %user.id, is_admin = user.is_admin, "User logged in");
        Ok(Principal::from(user))
    }
}
