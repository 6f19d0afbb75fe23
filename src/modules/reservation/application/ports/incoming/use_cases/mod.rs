pub mod book_spot;
pub mod force_release;
pub mod get_active_reservation;
pub mod get_history;
pub mod list_reservations;
pub mod release_spot;

pub use book_spot::{BookSpotError, BookSpotUseCase};
pub use force_release::{ForceReleaseError, ForceReleaseUseCase};
pub use get_active_reservation::GetActiveReservationUseCase;
pub use get_history::GetHistoryUseCase;
pub use list_reservations::ListReservationsUseCase;
pub use release_spot::{ReleaseSpotError, ReleaseSpotUseCase};

use crate::modules::reservation::application::ports::outgoing::ReservationQueryError;

/// Failure of the read-only reservation use cases.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ReservationReadError {
    #[error("Query error: {0}")]
    QueryError(String),
}

impl From<ReservationQueryError> for ReservationReadError {
    fn from(err: ReservationQueryError) -> Self {
        ReservationReadError::QueryError(err.to_string())
    }
}
