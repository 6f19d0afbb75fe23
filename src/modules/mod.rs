pub mod admin;
pub mod auth;
pub mod parking;
pub mod reservation;
