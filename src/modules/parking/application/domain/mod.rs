pub mod entities;
pub mod lot_fields;
