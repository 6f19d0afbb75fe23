use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QuerySelect,
    TransactionTrait,
};
use std::sync::Arc;

use crate::modules::admin::application::ports::outgoing::user_admin_repository::{
    UserAdminRepository, UserAdminRepositoryError,
};
use crate::modules::auth::adapter::outgoing::sea_orm_entity::users;
use crate::modules::auth::application::domain::entities::UserId;
use crate::modules::parking::adapter::outgoing::sea_orm_entity::parking_spots;
use crate::modules::parking::application::domain::entities::SpotStatus;
use crate::modules::reservation::adapter::outgoing::sea_orm_entity::reservations;

#[derive(Clone)]
pub struct UserAdminRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserAdminRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(err: DbErr) -> UserAdminRepositoryError {
    UserAdminRepositoryError::DatabaseError(err.to_string())
}

#[async_trait]
impl UserAdminRepository for UserAdminRepositoryPostgres {
    async fn delete_user_with_reservations(
        &self,
        user_id: UserId,
    ) -> Result<u64, UserAdminRepositoryError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        let user = users::Entity::find_by_id(user_id.value())
            .lock_exclusive()
            .one(&txn)
            .await
            .map_err(map_db_err)?
            .ok_or(UserAdminRepositoryError::NotFound)?;

        if user.is_admin {
            return Err(UserAdminRepositoryError::ProtectedAdmin);
        }

        let open = reservations::Entity::find()
            .filter(reservations::Column::UserId.eq(user.id))
            .filter(reservations::Column::LeavingTime.is_null())
            .one(&txn)
            .await
            .map_err(map_db_err)?;

        if let Some(open) = open {
            parking_spots::Entity::update_many()
                .col_expr(
                    parking_spots::Column::Status,
                    Expr::value(SpotStatus::Available.code()),
                )
                .filter(parking_spots::Column::Id.eq(open.spot_id))
                .exec(&txn)
                .await
                .map_err(map_db_err)?;
        }

        let removed = reservations::Entity::delete_many()
            .filter(reservations::Column::UserId.eq(user.id))
            .exec(&txn)
            .await
            .map_err(map_db_err)?
            .rows_affected;

        users::Entity::delete_by_id(user.id)
            .exec(&txn)
            .await
            .map_err(map_db_err)?;

        txn.commit().await.map_err(map_db_err)?;
        Ok(removed)
    }
}
