pub mod user_admin_repository_postgres;

pub use user_admin_repository_postgres::UserAdminRepositoryPostgres;
