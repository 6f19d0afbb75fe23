use async_trait::async_trait;

use super::ReservationReadError;
use crate::modules::reservation::application::domain::entities::ReservationView;

#[async_trait]
pub trait ListReservationsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<ReservationView>, ReservationReadError>;
}
