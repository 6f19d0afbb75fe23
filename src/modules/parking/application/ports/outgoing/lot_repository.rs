use async_trait::async_trait;

use crate::modules::parking::application::domain::entities::ParkingLot;

/// Writable lot fields, used by both create and edit.
#[derive(Debug, Clone, PartialEq)]
pub struct LotData {
    pub prime_location_name: String,
    pub price_per_hour: f64,
    pub address: String,
    pub pin_code: String,
    pub maximum_number_of_spots: i32,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum LotRepositoryError {
    #[error("Parking lot not found")]
    NotFound,

    #[error("Parking lot has {0} occupied spot(s)")]
    OccupiedSpots(u64),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait LotRepository: Send + Sync {
    /// Inserts the lot and provisions `maximum_number_of_spots` available
    /// spots in one transaction.
    async fn create_lot(&self, data: LotData) -> Result<ParkingLot, LotRepositoryError>;

    async fn update_lot(&self, lot_id: i32, data: LotData)
        -> Result<ParkingLot, LotRepositoryError>;

    /// Refuses while any spot of the lot is occupied.
    async fn delete_lot(&self, lot_id: i32) -> Result<(), LotRepositoryError>;
}
