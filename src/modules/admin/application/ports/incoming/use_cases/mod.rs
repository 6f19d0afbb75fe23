pub mod delete_user;
pub mod get_dashboard;
pub mod get_user_history;

pub use delete_user::{DeleteUserError, DeleteUserUseCase};
pub use get_dashboard::{GetDashboardError, GetDashboardUseCase};
pub use get_user_history::{GetUserHistoryError, GetUserHistoryUseCase, UserHistory};
