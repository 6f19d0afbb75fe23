use async_trait::async_trait;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
};
use std::sync::Arc;

use super::sea_orm_entity::users::{ActiveModel as UserActiveModel, Column, Entity as UserEntity};
use crate::modules::auth::application::domain::entities::{User, UserId};
use crate::modules::auth::application::ports::outgoing::user_repository::{
    NewUser, ProfileChanges, UserRepository, UserRepositoryError,
};
use crate::shared::persistence::is_unique_violation;

#[derive(Clone, Debug)]
pub struct UserRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(err: DbErr) -> UserRepositoryError {
    if is_unique_violation(&err) {
        return UserRepositoryError::UsernameTaken;
    }
    UserRepositoryError::DatabaseError(err.to_string())
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn create_user(&self, user: NewUser) -> Result<User, UserRepositoryError> {
        let active_user = UserActiveModel {
            id: NotSet,
            username: Set(user.username),
            password_hash: Set(user.password_hash),
            is_admin: Set(user.is_admin),
        };

        let inserted = active_user.insert(&*self.db).await.map_err(map_db_err)?;

        Ok(User::from(inserted))
    }

    async fn update_profile(
        &self,
        user_id: UserId,
        changes: ProfileChanges,
    ) -> Result<User, UserRepositoryError> {
        if changes.is_empty() {
            return UserEntity::find_by_id(user_id.value())
                .one(&*self.db)
                .await
                .map_err(map_db_err)?
                .map(User::from)
                .ok_or(UserRepositoryError::NotFound);
        }

        let mut model = <UserActiveModel as Default>::default();
        if let Some(username) = changes.username {
            model.username = Set(username);
        }
        if let Some(password_hash) = changes.password_hash {
            model.password_hash = Set(password_hash);
        }

        let updated = UserEntity::update_many()
            .set(model)
            .filter(Column::Id.eq(user_id.value()))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        updated
            .into_iter()
            .next()
            .map(User::from)
            .ok_or(UserRepositoryError::NotFound)
    }
}
