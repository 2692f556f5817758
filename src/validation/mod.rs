//! Validation types and utilities for accumulating errors.
//!
//! This module provides the [`Validation`] type, the explicit result value
//! every construction attempt is normalised into. Composite validators only
//! ever look at `Validation`s, never at how an inner validator reported its
//! failure.
//!
//! # Examples
//!
//! ```
//! use value_rail::validation::Validation;
//!
//! let valid: Validation<String, i32> = Validation::Valid(42);
//! assert!(valid.is_valid());
//!
//! let invalid: Validation<&str, Vec<i32>> =
//!     [Validation::invalid("err1"), Validation::valid(1), Validation::invalid("err2")]
//!         .into_iter()
//!         .collect();
//! assert_eq!(invalid.iter_errors().count(), 2);
//! ```
pub mod core;

pub use self::core::*;
