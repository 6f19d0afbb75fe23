use async_trait::async_trait;

use crate::modules::parking::application::domain::entities::{LotSummary, ParkingSpot};

/// Filter for the lot listing. The default lists every lot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LotSearch {
    /// Case-insensitive substring of the name or pin code.
    pub text: Option<String>,
    /// Keep only lots with at least one available spot.
    pub available_only: bool,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum LotQueryError {
    #[error("Parking lot not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait LotQuery: Send + Sync {
    /// Matching lots ordered by id.
    async fn search(&self, search: LotSearch) -> Result<Vec<LotSummary>, LotQueryError>;

    async fn get_summary(&self, lot_id: i32) -> Result<LotSummary, LotQueryError>;

    /// Spots of the lot ordered by id.
    async fn list_spots(&self, lot_id: i32) -> Result<Vec<ParkingSpot>, LotQueryError>;
}
