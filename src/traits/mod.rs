//! Core traits of the construction protocol.
//!
//! - [`ValueObject`]: an immutable validated value that unwraps to raw
//! - [`Construct`]: a validator that attempts to build a value object
//! - [`DynConstruct`] and [`Validator`]: the erased, shareable form used when
//!   validators of different types are mixed
//! - [`ConstructExt`]: convenience methods for every validator
//!
//! # Examples
//!
//! ```
//! use value_rail::prelude::*;
//!
//! let age = IntegerValidator::new(IntegerOptions::new().min(0).max(150)).unwrap();
//! assert!(age.is_valid(&Raw::from(36)));
//! assert!(!age.is_valid(&Raw::from(-1)));
//! ```

pub mod construct;
pub mod value_object;

pub use construct::{Construct, ConstructExt, DynConstruct, Validator};
pub use value_object::ValueObject;
