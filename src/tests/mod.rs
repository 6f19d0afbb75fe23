pub mod support;

mod booking_flow;
