use async_trait::async_trait;

use crate::modules::admin::application::ports::incoming::use_cases::{
    GetUserHistoryError, GetUserHistoryUseCase, UserHistory,
};
use crate::modules::auth::application::domain::entities::UserId;
use crate::modules::auth::application::ports::outgoing::UserQuery;
use crate::modules::reservation::application::ports::outgoing::{HistoryOrder, ReservationQuery};

pub struct GetUserHistoryService<U, R>
where
    U: UserQuery,
    R: ReservationQuery,
{
    users: U,
    reservations: R,
}

impl<U, R> GetUserHistoryService<U, R>
where
    U: UserQuery,
    R: ReservationQuery,
{
    pub fn new(users: U, reservations: R) -> Self {
        Self {
            users,
            reservations,
        }
    }
}

#[async_trait]
impl<U, R> GetUserHistoryUseCase for GetUserHistoryService<U, R>
where
    U: UserQuery + Send + Sync,
    R: ReservationQuery + Send + Sync,
{
    async fn execute(&self, user_id: UserId) -> Result<UserHistory, GetUserHistoryError> {
        let user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or(GetUserHistoryError::UserNotFound)?;

        let reservations = self
            .reservations
            .list_for_user(user_id, HistoryOrder::NewestFirst)
            .await?;

        Ok(UserHistory { user, reservations })
    }
}
