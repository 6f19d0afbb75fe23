pub mod user_admin_repository;

pub use user_admin_repository::{UserAdminRepository, UserAdminRepositoryError};
