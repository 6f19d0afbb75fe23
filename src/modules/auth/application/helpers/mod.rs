pub mod principal_resolver;

pub use principal_resolver::{PrincipalResolver, ResolvePrincipalError};
