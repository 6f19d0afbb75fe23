use async_trait::async_trait;

use crate::modules::auth::application::domain::entities::UserId;
use crate::modules::reservation::application::domain::entities::ReservationView;
use crate::modules::reservation::application::ports::incoming::use_cases::{
    get_active_reservation::GetActiveReservationUseCase, get_history::GetHistoryUseCase,
    list_reservations::ListReservationsUseCase, ReservationReadError,
};
use crate::modules::reservation::application::ports::outgoing::{HistoryOrder, ReservationQuery};

// ============================================================================
// GetHistoryService
// ============================================================================

pub struct GetHistoryService<Q>
where
    Q: ReservationQuery,
{
    query: Q,
}

impl<Q> GetHistoryService<Q>
where
    Q: ReservationQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetHistoryUseCase for GetHistoryService<Q>
where
    Q: ReservationQuery + Send + Sync,
{
    async fn execute(&self, user_id: UserId) -> Result<Vec<ReservationView>, ReservationReadError> {
        Ok(self
            .query
            .list_for_user(user_id, HistoryOrder::Natural)
            .await?)
    }
}

// ============================================================================
// ListReservationsService
// ============================================================================

pub struct ListReservationsService<Q>
where
    Q: ReservationQuery,
{
    query: Q,
}

impl<Q> ListReservationsService<Q>
where
    Q: ReservationQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListReservationsUseCase for ListReservationsService<Q>
where
    Q: ReservationQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<ReservationView>, ReservationReadError> {
        Ok(self.query.list_all().await?)
    }
}

// ============================================================================
// GetActiveReservationService
// ============================================================================

pub struct GetActiveReservationService<Q>
where
    Q: ReservationQuery,
{
    query: Q,
}

impl<Q> GetActiveReservationService<Q>
where
    Q: ReservationQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetActiveReservationUseCase for GetActiveReservationService<Q>
where
    Q: ReservationQuery + Send + Sync,
{
    async fn execute(
        &self,
        user_id: UserId,
    ) -> Result<Option<ReservationView>, ReservationReadError> {
        Ok(self.query.find_active_for_user(user_id).await?)
    }
}
