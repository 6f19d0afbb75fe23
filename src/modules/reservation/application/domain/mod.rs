pub mod cost;
pub mod entities;
