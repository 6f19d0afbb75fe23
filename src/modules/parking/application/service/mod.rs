pub mod create_lot_service;
pub mod delete_lot_service;
pub mod edit_lot_service;
pub mod get_lot_detail_service;
pub mod search_lots_service;

pub use create_lot_service::CreateLotService;
pub use delete_lot_service::DeleteLotService;
pub use edit_lot_service::EditLotService;
pub use get_lot_detail_service::GetLotDetailService;
pub use search_lots_service::SearchLotsService;
