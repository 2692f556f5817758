pub mod float;
pub mod integer;
pub mod properties;
