use tracing::{info, warn};

use crate::modules::auth::application::domain::entities::UserId;
use crate::modules::auth::application::ports::incoming::credential_policy::{
    CredentialPolicy, CredentialPolicyError,
};
use crate::modules::auth::application::ports::outgoing::{
    HashError, NewUser, PasswordHasher, UserQuery, UserQueryError, UserRepository,
    UserRepositoryError,
};

/// Outcome of the startup admin check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminBootstrap {
    Created(UserId),
    AlreadyPresent(UserId),
    /// The username exists but belongs to a regular account. Left untouched.
    NotAnAdmin(UserId),
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum EnsureAdminError {
    #[error("Invalid admin credentials: {0}")]
    InvalidCredentials(#[from] CredentialPolicyError),

    #[error("Hashing error: {0}")]
    HashingFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<UserQueryError> for EnsureAdminError {
    fn from(err: UserQueryError) -> Self {
        EnsureAdminError::RepositoryError(err.to_string())
    }
}

impl From<UserRepositoryError> for EnsureAdminError {
    fn from(err: UserRepositoryError) -> Self {
        EnsureAdminError::RepositoryError(err.to_string())
    }
}

impl From<HashError> for EnsureAdminError {
    fn from(err: HashError) -> Self {
        EnsureAdminError::HashingFailed(err.to_string())
    }
}

/// Makes sure the configured administrator account exists.
///
/// Never changes the password of an existing account.
pub struct EnsureAdminService<Q, R, H, P>
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

impl<Q, R, H, P> EnsureAdminService<Q, R, H, P>
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

    pub async fn ensure(
        &self,
        username: &str,
        password: &str,
    ) -> Result<AdminBootstrap, EnsureAdminError> {
        let username = self.policy.validate_username(username)?;
        self.policy.validate_password(password)?;

        if let Some(existing) = self.query.find_by_username(&username).await? {
            if existing.is_admin {
                info!(user_id = %existing.id, "Admin account present");
                return Ok(AdminBootstrap::AlreadyPresent(existing.id));
            }

            warn!(
                user_id = %existing.id,
                username = %existing.username,
                "Configured admin username belongs to a non-admin account"
            );
            return Ok(AdminBootstrap::NotAnAdmin(existing.id));
        }

        let password_hash = self.hasher.hash_password(password).await?;
        let admin = self
            .repository
            .create_user(NewUser {
                username,
                password_hash,
                is_admin: true,
            })
            .await?;

        info!(user_id = %admin.id, "Admin account created");
        Ok(AdminBootstrap::Created(admin.id))
    }
}
