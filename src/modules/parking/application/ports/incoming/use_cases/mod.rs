pub mod create_lot;
pub mod delete_lot;
pub mod edit_lot;
pub mod get_lot_detail;
pub mod search_lots;

pub use create_lot::{CreateLotError, CreateLotUseCase};
pub use delete_lot::{DeleteLotError, DeleteLotUseCase};
pub use edit_lot::{EditLotError, EditLotUseCase};
pub use get_lot_detail::{GetLotDetailError, GetLotDetailUseCase};
pub use search_lots::{SearchLotsError, SearchLotsUseCase};
