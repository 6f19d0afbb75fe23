pub mod parking_lots;
pub mod parking_spots;
