use async_trait::async_trait;
use chrono::Utc;
use tracing::info;

use crate::modules::auth::application::domain::entities::UserId;
use crate::modules::reservation::application::domain::entities::ReleaseReceipt;
use crate::modules::reservation::application::ports::incoming::use_cases::{
    ReleaseSpotError, ReleaseSpotUseCase,
};
use crate::modules::reservation::application::ports::outgoing::ReservationRepository;

pub struct ReleaseSpotService<R>
where
    R: ReservationRepository,
{
    repository: R,
}

impl<R> ReleaseSpotService<R>
where
    R: ReservationRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ReleaseSpotUseCase for ReleaseSpotService<R>
where
    R: ReservationRepository + Send + Sync,
{
    async fn execute(&self, user_id: UserId) -> Result<ReleaseReceipt, ReleaseSpotError> {
        let closed = self.repository.release_active(user_id, Utc::now()).await?;

        let receipt = ReleaseReceipt::for_closed(closed).ok_or_else(|| {
            ReleaseSpotError::RepositoryError("released reservation has no leaving time".into())
        })?;

        info!(
            user_id = user_id.value(),
            reservation_id = receipt.reservation.id,
            spot_id = receipt.reservation.spot_id,
            total_cost = receipt.total_cost,
            "Spot released"
        );

        Ok(receipt)
    }
}
