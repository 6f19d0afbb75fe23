use async_trait::async_trait;
use tracing::info;

use crate::modules::parking::application::domain::entities::ParkingLot;
use crate::modules::parking::application::domain::lot_fields::check_lot_fields;
use crate::modules::parking::application::ports::incoming::use_cases::{
    CreateLotError, CreateLotUseCase,
};
use crate::modules::parking::application::ports::outgoing::{LotData, LotRepository};

pub struct CreateLotService<R>
where
    R: LotRepository,
{
    repository: R,
}

impl<R> CreateLotService<R>
where
    R: LotRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CreateLotUseCase for CreateLotService<R>
where
    R: LotRepository + Send + Sync,
{
    async fn execute(&self, data: LotData) -> Result<ParkingLot, CreateLotError> {
        check_lot_fields(&data.prime_location_name, &data.address, &data.pin_code)?;

        let lot = self.repository.create_lot(data).await?;

        info!(
            lot_id = lot.id,
            spots = lot.maximum_number_of_spots.max(0),
            "Parking lot created"
        );
        Ok(lot)
    }
}
