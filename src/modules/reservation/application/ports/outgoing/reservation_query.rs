use async_trait::async_trait;
use chrono::NaiveDate;

use crate::modules::auth::application::domain::entities::UserId;
use crate::modules::reservation::application::domain::entities::ReservationView;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryOrder {
    /// Insertion order.
    Natural,
    NewestFirst,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ReservationQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ReservationQuery: Send + Sync {
    async fn find_active_for_user(
        &self,
        user_id: UserId,
    ) -> Result<Option<ReservationView>, ReservationQueryError>;

    async fn list_for_user(
        &self,
        user_id: UserId,
        order: HistoryOrder,
    ) -> Result<Vec<ReservationView>, ReservationQueryError>;

    /// Every reservation in insertion order.
    async fn list_all(&self) -> Result<Vec<ReservationView>, ReservationQueryError>;

    /// Open reservations in insertion order.
    async fn list_active(&self) -> Result<Vec<ReservationView>, ReservationQueryError>;

    /// Reservations started per UTC calendar day, oldest day first.
    async fn count_bookings_per_day(&self)
        -> Result<Vec<(NaiveDate, u64)>, ReservationQueryError>;
}
