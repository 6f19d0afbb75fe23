pub mod lot_query_postgres;
pub mod lot_repository_postgres;
pub mod sea_orm_entity;

pub use lot_query_postgres::LotQueryPostgres;
pub use lot_repository_postgres::LotRepositoryPostgres;
