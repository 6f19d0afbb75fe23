use async_trait::async_trait;
use tracing::info;

use crate::modules::parking::application::domain::entities::ParkingLot;
use crate::modules::parking::application::domain::lot_fields::check_lot_fields;
use crate::modules::parking::application::ports::incoming::use_cases::{
    EditLotError, EditLotUseCase,
};
use crate::modules::parking::application::ports::outgoing::{LotData, LotRepository};

pub struct EditLotService<R>
where
    R: LotRepository,
{
    repository: R,
}

impl<R> EditLotService<R>
where
    R: LotRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> EditLotUseCase for EditLotService<R>
where
    R: LotRepository + Send + Sync,
{
    async fn execute(&self, lot_id: i32, data: LotData) -> Result<ParkingLot, EditLotError> {
        check_lot_fields(&data.prime_location_name, &data.address, &data.pin_code)?;

        let lot = self.repository.update_lot(lot_id, data).await?;

        info!(lot_id, "Parking lot updated");
        Ok(lot)
    }
}
