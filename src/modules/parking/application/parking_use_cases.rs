use std::sync::Arc;

use crate::modules::parking::application::ports::incoming::use_cases::{
    CreateLotUseCase, DeleteLotUseCase, EditLotUseCase, GetLotDetailUseCase, SearchLotsUseCase,
};

#[derive(Clone)]
pub struct ParkingUseCases {
    pub create: Arc<dyn CreateLotUseCase + Send + Sync>,
    pub edit: Arc<dyn EditLotUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteLotUseCase + Send + Sync>,
    pub search: Arc<dyn SearchLotsUseCase + Send + Sync>,
    pub detail: Arc<dyn GetLotDetailUseCase + Send + Sync>,
}
