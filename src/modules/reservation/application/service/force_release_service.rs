use async_trait::async_trait;
use chrono::Utc;
use tracing::info;

use crate::modules::reservation::application::domain::entities::ReleaseReceipt;
use crate::modules::reservation::application::ports::incoming::use_cases::{
    ForceReleaseError, ForceReleaseUseCase,
};
use crate::modules::reservation::application::ports::outgoing::ReservationRepository;

pub struct ForceReleaseService<R>
where
    R: ReservationRepository,
{
    repository: R,
}

impl<R> ForceReleaseService<R>
where
    R: ReservationRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ForceReleaseUseCase for ForceReleaseService<R>
where
    R: ReservationRepository + Send + Sync,
{
    async fn execute(&self, reservation_id: i32) -> Result<ReleaseReceipt, ForceReleaseError> {
        let closed = self
            .repository
            .force_release(reservation_id, Utc::now())
            .await?;

        let receipt = ReleaseReceipt::for_closed(closed).ok_or_else(|| {
            ForceReleaseError::RepositoryError("released reservation has no leaving time".into())
        })?;

        info!(
            reservation_id,
            user_id = receipt.reservation.user_id.value(),
            spot_id = receipt.reservation.spot_id,
            "Reservation force-released"
        );

        Ok(receipt)
    }
}
