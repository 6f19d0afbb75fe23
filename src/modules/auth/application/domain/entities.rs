use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// Database identity of an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct UserId(i32);

impl UserId {
    pub fn value(self) -> i32 {
        self.0
    }
}

impl From<i32> for UserId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl From<UserId> for i32 {
    fn from(id: UserId) -> Self {
        id.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct User {
    pub id: UserId,
    pub username: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub is_admin: bool,
}

/// What a signed-in principal may be allowed to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    ReserveSpot,
    ManageParking,
}

/// The caller behind a valid session, re-loaded on every request.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Principal {
    pub user_id: UserId,
    pub username: String,
    pub is_admin: bool,
}

impl Principal {
    pub fn can(&self, capability: Capability) -> bool {
        match capability {
            Capability::ReserveSpot => true,
            Capability::ManageParking => self.is_admin,
        }
    }

    /// Where the front-end should go after login.
    pub fn landing_path(&self) -> &'static str {
        if self.is_admin {
            "/admin/dashboard"
        } else {
            "/user/dashboard"
        }
    }
}

impl From<User> for Principal {
    fn from(user: User) -> Self {
        Self {
            user_id: user.id,
            username: user.username,
            is_admin: user.is_admin,
        }
    }
}
