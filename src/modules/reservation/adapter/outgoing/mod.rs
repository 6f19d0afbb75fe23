pub mod reservation_query_postgres;
pub mod reservation_repository_postgres;
pub mod sea_orm_entity;

pub use reservation_query_postgres::ReservationQueryPostgres;
pub use reservation_repository_postgres::ReservationRepositoryPostgres;
