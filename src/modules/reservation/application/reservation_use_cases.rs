use std::sync::Arc;

use crate::modules::reservation::application::ports::incoming::use_cases::{
    BookSpotUseCase, ForceReleaseUseCase, GetActiveReservationUseCase, GetHistoryUseCase,
    ListReservationsUseCase, ReleaseSpotUseCase,
};

#[derive(Clone)]
pub struct ReservationUseCases {
    pub book: Arc<dyn BookSpotUseCase + Send + Sync>,
    pub release: Arc<dyn ReleaseSpotUseCase + Send + Sync>,
    pub force_release: Arc<dyn ForceReleaseUseCase + Send + Sync>,
    pub history: Arc<dyn GetHistoryUseCase + Send + Sync>,
    pub list_all: Arc<dyn ListReservationsUseCase + Send + Sync>,
    pub active: Arc<dyn GetActiveReservationUseCase + Send + Sync>,
}
