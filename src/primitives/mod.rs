//! Validators for single raw values.
//!
//! Every primitive validates its options when it is created and returns a
//! [`ConfigError`](crate::types::ConfigError) for options that can never be
//! satisfied. Construction checks run in a fixed order:
//!
//! 1. raw type,
//! 2. normalisation (string trimming, float rounding),
//! 3. bounds, then shape (pattern, integrality, membership).
//!
//! The first failing check is reported as a single
//! [`ValidationError`](crate::types::ValidationError) with an empty path.

pub mod float;
pub mod integer;
pub mod set;
pub mod string;

pub use float::{FloatOptions, FloatValidator, FloatValue, Rounding, MAX_PRECISION};
pub use integer::{IntegerOptions, IntegerValidator, IntegerValue};
pub use set::{SetOptions, SetValidator, SetValue};
pub use string::{StringOptions, StringValidator, StringValue};
