use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::modules::parking::application::ports::outgoing::LotData;

/// Lot fields shared by the add and edit forms.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct LotRequest {
    #[schema(example = "Central Mall")]
    pub prime_location_name: String,
    #[schema(example = 40.0)]
    pub price_per_hour: f64,
    #[schema(example = "1 Main Road")]
    pub address: String,
    #[schema(example = "560001")]
    pub pin_code: String,
    #[schema(example = 10)]
    pub maximum_number_of_spots: i32,
}

impl From<LotRequest> for LotData {
    fn from(req: LotRequest) -> Self {
        LotData {
            prime_location_name: req.prime_location_name,
            price_per_hour: req.price_per_hour,
            address: req.address,
            pin_code: req.pin_code,
            maximum_number_of_spots: req.maximum_number_of_spots,
        }
    }
}
