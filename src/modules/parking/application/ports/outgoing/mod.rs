pub mod lot_query;
pub mod lot_repository;

pub use lot_query::{LotQuery, LotQueryError, LotSearch};
pub use lot_repository::{LotData, LotRepository, LotRepositoryError};
