pub const MAX_USERNAME_LEN: usize = 150;
pub const MAX_PASSWORD_LEN: usize = 128;

pub trait CredentialPolicy: Send + Sync {
    /// Returns the username as it will be stored.
    fn validate_username(&self, username: &str) -> Result<String, CredentialPolicyError>;

    fn validate_password(&self, password: &str) -> Result<(), CredentialPolicyError>;
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CredentialPolicyError {
    #[error("Username is required")]
    UsernameEmpty,

    #[error("Username must be at most {} characters", MAX_USERNAME_LEN)]
    UsernameTooLong,

    #[error("Password is required")]
    PasswordEmpty,

    #[error("Password must be at most {} characters", MAX_PASSWORD_LEN)]
    PasswordTooLong,
}
