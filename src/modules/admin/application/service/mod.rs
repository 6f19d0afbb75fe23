pub mod delete_user_service;
pub mod get_dashboard_service;
pub mod get_user_history_service;

pub use delete_user_service::DeleteUserService;
pub use get_dashboard_service::GetDashboardService;
pub use get_user_history_service::GetUserHistoryService;
