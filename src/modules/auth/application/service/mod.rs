pub mod basic_credential_policy;
pub mod ensure_admin_service;
pub mod login_user_service;
pub mod register_user_service;
pub mod update_profile_service;

pub use basic_credential_policy::BasicCredentialPolicy;
pub use ensure_admin_service::{AdminBootstrap, EnsureAdminError, EnsureAdminService};
pub use login_user_service::LoginUserService;
pub use register_user_service::RegisterUserService;
pub use update_profile_service::UpdateProfileService;
