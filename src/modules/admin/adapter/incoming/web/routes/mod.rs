mod dashboard;
mod delete_user;
mod user_history;

pub use dashboard::{__path_admin_dashboard_handler, admin_dashboard_handler};
pub use delete_user::{__path_delete_user_handler, delete_user_handler};
pub use user_history::{__path_user_history_handler, user_history_handler};
