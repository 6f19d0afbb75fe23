use async_trait::async_trait;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseBackend, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QuerySelect, Set, Statement, TransactionTrait,
};
use std::sync::Arc;

use super::sea_orm_entity::{parking_lots, parking_spots};
use crate::modules::parking::application::domain::entities::{ParkingLot, SpotStatus};
use crate::modules::parking::application::ports::outgoing::lot_repository::{
    LotData, LotRepository, LotRepositoryError,
};

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone)]
pub struct LotRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl LotRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(err: DbErr) -> LotRepositoryError {
    LotRepositoryError::DatabaseError(err.to_string())
}

/// One statement regardless of the spot count, so large lots stay under the
/// bind parameter limit.
fn provision_spots_statement(lot_id: i32, count: i32) -> Statement {
    Statement::from_sql_and_values(
        DatabaseBackend::Postgres,
        "INSERT INTO parking_spots (lot_id, status) \
         SELECT $1, $2 FROM generate_series(1, $3)",
        [
            lot_id.into(),
            SpotStatus::Available.code().into(),
            count.into(),
        ],
    )
}

#[async_trait]
impl LotRepository for LotRepositoryPostgres {
    async fn create_lot(&self, data: LotData) -> Result<ParkingLot, LotRepositoryError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        let lot = parking_lots::ActiveModel {
            id: NotSet,
            prime_location_name: Set(data.prime_location_name),
            price_per_hour: Set(data.price_per_hour),
            address: Set(data.address),
            pin_code: Set(data.pin_code),
            maximum_number_of_spots: Set(data.maximum_number_of_spots),
        }
        .insert(&txn)
        .await
        .map_err(map_db_err)?;

        if lot.maximum_number_of_spots > 0 {
            txn.execute(provision_spots_statement(lot.id, lot.maximum_number_of_spots))
                .await
                .map_err(map_db_err)?;
        }

        txn.commit().await.map_err(map_db_err)?;

        Ok(ParkingLot::from(lot))
    }

    async fn update_lot(
        &self,
        lot_id: i32,
        data: LotData,
    ) -> Result<ParkingLot, LotRepositoryError> {
        let model = parking_lots::ActiveModel {
            id: NotSet,
            prime_location_name: Set(data.prime_location_name),
            price_per_hour: Set(data.price_per_hour),
            address: Set(data.address),
            pin_code: Set(data.pin_code),
            maximum_number_of_spots: Set(data.maximum_number_of_spots),
        };

        let updated = parking_lots::Entity::update_many()
            .set(model)
            .filter(parking_lots::Column::Id.eq(lot_id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        updated
            .into_iter()
            .next()
            .map(ParkingLot::from)
            .ok_or(LotRepositoryError::NotFound)
    }

    async fn delete_lot(&self, lot_id: i32) -> Result<(), LotRepositoryError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        // Bookings take a shared lock on the lot row, so none can start
        // between the occupancy check and the delete.
        let lot = parking_lots::Entity::find_by_id(lot_id)
            .lock_exclusive()
            .one(&txn)
            .await
            .map_err(map_db_err)?
            .ok_or(LotRepositoryError::NotFound)?;

        let occupied = parking_spots::Entity::find()
            .filter(parking_spots::Column::LotId.eq(lot.id))
            .filter(parking_spots::Column::Status.eq(SpotStatus::Occupied.code()))
            .count(&txn)
            .await
            .map_err(map_db_err)?;

        if occupied > 0 {
            return Err(LotRepositoryError::OccupiedSpots(occupied));
        }

        parking_lots::Entity::delete_by_id(lot.id)
            .exec(&txn)
            .await
            .map_err(map_db_err)?;

        txn.commit().await.map_err(map_db_err)?;
        Ok(())
    }
}
