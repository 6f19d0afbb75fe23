use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::sea_query::{Expr, LockBehavior, LockType};
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DatabaseTransaction, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder, QuerySelect, QueryTrait, Set, TransactionTrait,
};
use std::sync::Arc;

use super::sea_orm_entity::reservations;
use crate::modules::auth::application::domain::entities::UserId;
use crate::modules::parking::adapter::outgoing::sea_orm_entity::{parking_lots, parking_spots};
use crate::modules::parking::application::domain::entities::SpotStatus;
use crate::modules::reservation::application::domain::entities::Reservation;
use crate::modules::reservation::application::ports::outgoing::reservation_repository::{
    ReservationRepository, ReservationRepositoryError,
};
use crate::shared::persistence::is_unique_violation;

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone)]
pub struct ReservationRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ReservationRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(err: DbErr) -> ReservationRepositoryError {
    ReservationRepositoryError::DatabaseError(err.to_string())
}

/// Sets the leaving time and frees the spot, inside the caller's transaction.
async fn close_reservation(
    txn: &DatabaseTransaction,
    model: reservations::Model,
    at: DateTime<Utc>,
) -> Result<reservations::Model, ReservationRepositoryError> {
    let spot_id = model.spot_id;

    let mut active = model.into_active_model();
    active.leaving_time = Set(Some(at));
    let closed = active.update(txn).await.map_err(map_db_err)?;

    parking_spots::Entity::update_many()
        .col_expr(
            parking_spots::Column::Status,
            Expr::value(SpotStatus::Available.code()),
        )
        .filter(parking_spots::Column::Id.eq(spot_id))
        .exec(txn)
        .await
        .map_err(map_db_err)?;

    Ok(closed)
}

#[async_trait]
impl ReservationRepository for ReservationRepositoryPostgres {
    async fn book_spot(
        &self,
        user_id: UserId,
        lot_id: i32,
        at: DateTime<Utc>,
    ) -> Result<Reservation, ReservationRepositoryError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        // Shared lock: concurrent bookings proceed, lot deletion waits.
        let lot = parking_lots::Entity::find_by_id(lot_id)
            .lock_shared()
            .one(&txn)
            .await
            .map_err(map_db_err)?
            .ok_or(ReservationRepositoryError::LotNotFound)?;

        let open = reservations::Entity::find()
            .filter(reservations::Column::UserId.eq(user_id.value()))
            .filter(reservations::Column::LeavingTime.is_null())
            .one(&txn)
            .await
            .map_err(map_db_err)?;

        if open.is_some() {
            return Err(ReservationRepositoryError::AlreadyActive);
        }

        // Lowest free spot; rows claimed by in-flight bookings are skipped.
        let free_spot = parking_spots::Entity::find()
            .select_only()
            .column(parking_spots::Column::Id)
            .filter(parking_spots::Column::LotId.eq(lot.id))
            .filter(parking_spots::Column::Status.eq(SpotStatus::Available.code()))
            .order_by_asc(parking_spots::Column::Id)
            .limit(1)
            .lock_with_behavior(LockType::Update, LockBehavior::SkipLocked)
            .into_query();

        let spot = parking_spots::Entity::update_many()
            .col_expr(
                parking_spots::Column::Status,
                Expr::value(SpotStatus::Occupied.code()),
            )
            .filter(parking_spots::Column::Id.in_subquery(free_spot))
            .filter(parking_spots::Column::Status.eq(SpotStatus::Available.code()))
            .exec_with_returning(&txn)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .next()
            .ok_or(ReservationRepositoryError::NoAvailability)?;

        let reservation = reservations::ActiveModel {
            id: NotSet,
            spot_id: Set(spot.id),
            user_id: Set(user_id.value()),
            parking_time: Set(at),
            leaving_time: Set(None),
            cost_per_hour: Set(lot.price_per_hour),
        }
        .insert(&txn)
        .await
        .map_err(|err| {
            // Lost a race with another booking by the same user.
            if is_unique_violation(&err) {
                ReservationRepositoryError::AlreadyActive
            } else {
                map_db_err(err)
            }
        })?;

        txn.commit().await.map_err(map_db_err)?;

        Ok(Reservation::from(reservation))
    }

    async fn release_active(
        &self,
        user_id: UserId,
        at: DateTime<Utc>,
    ) -> Result<Reservation, ReservationRepositoryError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        let open = reservations::Entity::find()
            .filter(reservations::Column::UserId.eq(user_id.value()))
            .filter(reservations::Column::LeavingTime.is_null())
            .lock_exclusive()
            .one(&txn)
            .await
            .map_err(map_db_err)?
            .ok_or(ReservationRepositoryError::NoActiveReservation)?;

        let closed = close_reservation(&txn, open, at).await?;
        txn.commit().await.map_err(map_db_err)?;

        Ok(Reservation::from(closed))
    }

    async fn force_release(
        &self,
        reservation_id: i32,
        at: DateTime<Utc>,
    ) -> Result<Reservation, ReservationRepositoryError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        let model = reservations::Entity::find_by_id(reservation_id)
            .lock_exclusive()
            .one(&txn)
            .await
            .map_err(map_db_err)?
            .ok_or(ReservationRepositoryError::NotFound)?;

        if model.leaving_time.is_some() {
            return Err(ReservationRepositoryError::AlreadyClosed);
        }

        let closed = close_reservation(&txn, model, at).await?;
        txn.commit().await.map_err(map_db_err)?;

        Ok(Reservation::from(closed))
    }
}
