mod add_lot;
mod delete_lot;
mod edit_lot;
mod lot_detail;
mod lot_request;
mod user_dashboard;

pub use add_lot::{__path_add_lot_handler, add_lot_handler};
pub use delete_lot::{__path_delete_lot_handler, delete_lot_handler};
pub use edit_lot::{__path_edit_lot_handler, edit_lot_handler};
pub use lot_detail::{__path_lot_detail_handler, lot_detail_handler};
pub use lot_request::LotRequest;
pub use user_dashboard::{
    __path_user_dashboard_handler, user_dashboard_handler, DashboardQuery, UserDashboard,
};
