pub mod convert;
pub mod primitives;

#[cfg(feature = "tracing")]
pub mod traced;
