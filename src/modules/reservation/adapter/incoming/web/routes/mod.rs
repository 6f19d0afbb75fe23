mod book_spot;
mod force_release;
mod history;
mod list_reservations;
mod release_spot;

pub use book_spot::{__path_book_spot_handler, book_spot_handler};
pub use force_release::{__path_force_release_handler, force_release_handler};
pub use history::{__path_history_handler, history_handler};
pub use list_reservations::{__path_list_reservations_handler, list_reservations_handler};
pub use release_spot::{__path_release_spot_handler, release_spot_handler};
