use crate::modules::auth::application::ports::incoming::credential_policy::{
    CredentialPolicy, CredentialPolicyError, MAX_PASSWORD_LEN, MAX_USERNAME_LEN,
};

/// Length checks only. Usernames are trimmed, passwords are taken verbatim.
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicCredentialPolicy;

impl CredentialPolicy for BasicCredentialPolicy {
    fn validate_username(&self, username: &str) -> Result<String, CredentialPolicyError> {
        let trimmed = username.trim();

        if trimmed.is_empty() {
            return Err(CredentialPolicyError::UsernameEmpty);
        }
        if trimmed.chars().count() > MAX_USERNAME_LEN {
            return Err(CredentialPolicyError::UsernameTooLong);
        }

        Ok(trimmed.to_string())
    }

    fn validate_password(&self, password: &str) -> Result<(), CredentialPolicyError> {
        if password.is_empty() {
            return Err(CredentialPolicyError::PasswordEmpty);
        }
        if password.chars().count() > MAX_PASSWORD_LEN {
            return Err(CredentialPolicyError::PasswordTooLong);
        }

        Ok(())
    }
}
