pub mod domain;
pub mod ports;
pub mod reservation_use_cases;
pub mod service;
