//! Thin wrapper around the actix session so handlers only store and read a
//! user id.

use actix_session::Session;
use actix_web::{dev::Payload, FromRequest, HttpRequest};
use futures::future::LocalBoxFuture;
use tracing::warn;

use crate::modules::auth::application::domain::entities::UserId;

pub(crate) const USER_ID_KEY: &str = "user_id";

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("failed to persist session: {0}")]
    Persist(String),
}

#[derive(Clone)]
pub struct SessionContext(Session);

impl SessionContext {
    pub fn new(session: Session) -> Self {
        Self(session)
    }

    /// Starts a fresh session for `user_id`. The session key is rotated first.
    pub fn sign_in(&self, user_id: UserId) -> Result<(), SessionError> {
        self.0.renew();
        self.0
            .insert(USER_ID_KEY, user_id.value())
            .map_err(|error| SessionError::Persist(error.to_string()))
    }

    /// The stored user id. Unreadable values count as signed out.
    pub fn user_id(&self) -> Option<UserId> {
        match self.0.get::<i32>(USER_ID_KEY) {
            Ok(id) => id.map(UserId::from),
            Err(error) => {
                warn!("invalid user id in session cookie: {error}");
                None
            }
        }
    }

    pub fn clear(&self) {
        self.0.purge();
    }
}

impl FromRequest for SessionContext {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let fut = Session::from_request(req, payload);
        Box::pin(async move { fut.await.map(SessionContext::new) })
    }
}
