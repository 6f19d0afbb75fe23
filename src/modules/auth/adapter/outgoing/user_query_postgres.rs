use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;

use super::sea_orm_entity::users::{Column as UserColumn, Entity as UserEntity};
use crate::modules::auth::application::domain::entities::{User, UserId};
use crate::modules::auth::application::ports::outgoing::user_query::{UserQuery, UserQueryError};

#[derive(Clone, Debug)]
pub struct UserQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(err: sea_orm::DbErr) -> UserQueryError {
    UserQueryError::DatabaseError(err.to_string())
}

#[async_trait]
impl UserQuery for UserQueryPostgres {
    async fn find_by_id(&self, user_id: UserId) -> Result<Option<User>, UserQueryError> {
        let user = UserEntity::find_by_id(user_id.value())
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(user.map(User::from))
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, UserQueryError> {
        let user = UserEntity::find()
            .filter(UserColumn::Username.eq(username))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(user.map(User::from))
    }

    async fn list_non_admin(&self) -> Result<Vec<User>, UserQueryError> {
        let users = UserEntity::find()
            .filter(UserColumn::IsAdmin.eq(false))
            .order_by_asc(UserColumn::Id)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(users.into_iter().map(User::from).collect())
    }
}
