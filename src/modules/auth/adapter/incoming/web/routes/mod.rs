mod login_user;
mod logout_user;
mod register_user;
mod update_profile;

pub use login_user::{__path_admin_login_handler, __path_login_handler};
pub use login_user::{admin_login_handler, login_handler, LoginRequest, LoginResponse};
pub use logout_user::{__path_logout_handler, logout_handler};
pub use register_user::{__path_register_user_handler, register_user_handler, RegisterRequest};
pub use update_profile::{__path_update_profile_handler, update_profile_handler, EditProfileRequest};
