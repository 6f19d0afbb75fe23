use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Occupancy of a single spot, stored as a one-letter code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum SpotStatus {
    #[serde(rename = "A")]
    Available,
    #[serde(rename = "O")]
    Occupied,
}

impl SpotStatus {
    pub const AVAILABLE_CODE: &'static str = "A";
    pub const OCCUPIED_CODE: &'static str = "O";

    pub fn code(self) -> &'static str {
        match self {
            SpotStatus::Available => Self::AVAILABLE_CODE,
            SpotStatus::Occupied => Self::OCCUPIED_CODE,
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            Self::AVAILABLE_CODE => Some(SpotStatus::Available),
            Self::OCCUPIED_CODE => Some(SpotStatus::Occupied),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ParkingLot {
    pub id: i32,
    #[schema(example = "Central Mall")]
    pub prime_location_name: String,
    #[schema(example = 40.0)]
    pub price_per_hour: f64,
    #[schema(example = "1 Main Road")]
    pub address: String,
    #[schema(example = "560001")]
    pub pin_code: String,
    /// Declared capacity. Editing it does not add or remove spot rows.
    #[schema(example = 10)]
    pub maximum_number_of_spots: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ParkingSpot {
    pub id: i32,
    pub lot_id: i32,
    pub status: SpotStatus,
}

/// A lot together with the live state of its spot rows.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct LotSummary {
    pub id: i32,
    pub prime_location_name: String,
    pub price_per_hour: f64,
    pub address: String,
    pub pin_code: String,
    pub maximum_number_of_spots: i32,
    pub available_spots: i64,
    pub occupied_spots: i64,
}

impl LotSummary {
    pub fn total_spots(&self) -> i64 {
        self.available_spots + self.occupied_spots
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct LotDetail {
    pub lot: LotSummary,
    pub spots: Vec<ParkingSpot>,
}
