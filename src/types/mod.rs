//! Error types and utilities.
//!
//! This module holds the error model shared by every validator: locations
//! ([`Path`]), input failures ([`ValidationError`], [`ValidationErrors`]),
//! setup failures ([`ConfigError`]) and the machinery composites use to
//! collect and render them.
//!
//! # Examples
//!
//! ```
//! use value_rail::raw::RawKind;
//! use value_rail::types::{ValidationError, ValidationErrors};
//!
//! let mut errors = ValidationErrors::new();
//! errors.push(ValidationError::raw_type(RawKind::String, RawKind::Number).with_prefix("email"));
//! errors.prepend_path(2usize);
//! errors.prepend_path("users");
//!
//! assert_eq!(errors.to_string(), "users[2].email: Wrong raw value type: expected string, got number");
//! ```
use smallvec::SmallVec;

pub mod accumulator;
pub mod config_error;
pub mod error_formatter;
pub mod path;
pub mod validation_error;

pub use accumulator::*;
pub use config_error::*;
pub use path::*;
pub use validation_error::*;

/// SmallVec-backed collection used for accumulating errors.
///
/// Uses inline storage for a single element, since fail-fast validation
/// produces exactly one error in the common case.
pub type ErrorVec<E> = SmallVec<[E; 1]>;
