pub mod login_user;
pub mod register_user;
pub mod update_profile;

pub use login_user::{LoginUserError, LoginUserUseCase};
pub use register_user::{RegisterUserError, RegisterUserUseCase};
pub use update_profile::{ProfileUpdate, UpdateProfileError, UpdateProfileUseCase};
