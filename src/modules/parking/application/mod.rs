pub mod domain;
pub mod parking_use_cases;
pub mod ports;
pub mod service;
