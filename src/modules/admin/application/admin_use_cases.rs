use std::sync::Arc;

use crate::modules::admin::application::ports::incoming::use_cases::{
    DeleteUserUseCase, GetDashboardUseCase, GetUserHistoryUseCase,
};

#[derive(Clone)]
pub struct AdminUseCases {
    pub dashboard: Arc<dyn GetDashboardUseCase + Send + Sync>,
    pub delete_user: Arc<dyn DeleteUserUseCase + Send + Sync>,
    pub user_history: Arc<dyn GetUserHistoryUseCase + Send + Sync>,
}
