use async_trait::async_trait;
use tracing::{info, warn};

use crate::modules::parking::application::ports::incoming::use_cases::{
    DeleteLotError, DeleteLotUseCase,
};
use crate::modules::parking::application::ports::outgoing::LotRepository;

pub struct DeleteLotService<R>
where
    R: LotRepository,
{
    repository: R,
}

impl<R> DeleteLotService<R>
where
    R: LotRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> DeleteLotUseCase for DeleteLotService<R>
where
    R: LotRepository + Send + Sync,
{
    async fn execute(&self, lot_id: i32) -> Result<(), DeleteLotError> {
        match self.repository.delete_lot(lot_id).await {
            Ok(()) => {
                info!(lot_id, "Parking lot deleted");
                Ok(())
            }
            Err(err) => {
                let err = DeleteLotError::from(err);
                if let DeleteLotError::HasOccupiedSpots(occupied) = err {
                    warn!(lot_id, occupied, "Refused to delete lot with occupied spots");
                }
                Err(err)
            }
        }
    }
}
