use std::sync::Arc;

use crate::modules::auth::application::domain::entities::{Principal, UserId};
use crate::modules::auth::application::ports::outgoing::user_query::{UserQuery, UserQueryError};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ResolvePrincipalError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Turns the user id kept in the session into a fresh principal.
#[derive(Clone)]
pub struct PrincipalResolver {
    user_query: Arc<dyn UserQuery + Send + Sync>,
}

impl PrincipalResolver {
    pub fn new(user_query: Arc<dyn UserQuery + Send + Sync>) -> Self {
        Self { user_query }
    }

    /// `Ok(None)` when the account no longer exists.
    pub async fn resolve(&self, user_id: UserId) -> Result<Option<Principal>, ResolvePrincipalError> {
        match self.user_query.find_by_id(user_id).await {
            Ok(user) => Ok(user.map(Principal::from)),
            Err(UserQueryError::DatabaseError(msg)) => {
                Err(ResolvePrincipalError::RepositoryError(msg))
            }
        }
    }
}
