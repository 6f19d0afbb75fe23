use async_trait::async_trait;

use super::ReservationReadError;
use crate::modules::auth::application::domain::entities::UserId;
use crate::modules::reservation::application::domain::entities::ReservationView;

/// The caller's own reservations in insertion order.
#[async_trait]
pub trait GetHistoryUseCase: Send + Sync {
    async fn execute(&self, user_id: UserId) -> Result<Vec<ReservationView>, ReservationReadError>;
}
