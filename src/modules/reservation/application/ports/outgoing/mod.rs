pub mod reservation_query;
pub mod reservation_repository;

pub use reservation_query::{HistoryOrder, ReservationQuery, ReservationQueryError};
pub use reservation_repository::{ReservationRepository, ReservationRepositoryError};
