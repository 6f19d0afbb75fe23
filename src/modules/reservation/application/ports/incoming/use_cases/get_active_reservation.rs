use async_trait::async_trait;

use super::ReservationReadError;
use crate::modules::auth::application::domain::entities::UserId;
use crate::modules::reservation::application::domain::entities::ReservationView;

#[async_trait]
pub trait GetActiveReservationUseCase: Send + Sync {
    async fn execute(
        &self,
        user_id: UserId,
    ) -> Result<Option<ReservationView>, ReservationReadError>;
}
