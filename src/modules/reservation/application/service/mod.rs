pub mod book_spot_service;
pub mod force_release_service;
pub mod reservation_read_service;
pub mod release_spot_service;

pub use book_spot_service::BookSpotService;
pub use force_release_service::ForceReleaseService;
pub use reservation_read_service::{
    GetActiveReservationService, GetHistoryService, ListReservationsService,
};
pub use release_spot_service::ReleaseSpotService;
