use async_trait::async_trait;
use chrono::Utc;
use tracing::{info, warn};

use crate::modules::auth::application::domain::entities::UserId;
use crate::modules::reservation::application::domain::entities::Reservation;
use crate::modules::reservation::application::ports::incoming::use_cases::{
    BookSpotError, BookSpotUseCase,
};
use crate::modules::reservation::application::ports::outgoing::ReservationRepository;

pub struct BookSpotService<R>
where
    R: ReservationRepository,
{
    repository: R,
}

impl<R> BookSpotService<R>
where
    R: ReservationRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> BookSpotUseCase for BookSpotService<R>
where
    R: ReservationRepository + Send + Sync,
{
    async fn execute(&self, user_id: UserId, lot_id: i32) -> Result<Reservation, BookSpotError> {
        match self.repository.book_spot(user_id, lot_id, Utc::now()).await {
            Ok(reservation) => {
                info!(
                    user_id = user_id.value(),
                    lot_id,
                    spot_id = reservation.spot_id,
                    reservation_id = reservation.id,
                    "Spot booked"
                );
                Ok(reservation)
            }
            Err(err) => {
                let err = BookSpotError::from(err);
                if let BookSpotError::RepositoryError(msg) = &err {
                    warn!(user_id = user_id.value(), lot_id, error = %msg, "Booking failed");
                }
                Err(err)
            }
        }
    }
}
