//! Runtime validation of untrusted input into strongly typed value objects.
//!
//! Validators are created once from their options, are immutable and can be
//! shared freely between threads. Each one turns a [`Raw`](raw::Raw) value
//! into a value object or fails with structured, path-annotated errors.
//!
//! Composite validators (arrays, objects, optionals, unions) are built out of
//! other validators and always fail with an ordered
//! [`ValidationErrors`](types::ValidationErrors) list, so a nested failure
//! reads like `users[2].email: Too long: expected at most 256 but got 300`.
//!
//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `value_rail::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Primitive Validation
//!
//! ```
//! use value_rail::prelude::*;
//!
//! let name = StringValidator::new(StringOptions::new().trim(true).max_length(5)).unwrap();
//!
//! assert_eq!(name.construct(&Raw::from("  Ada ")).unwrap().as_str(), "Ada");
//! assert!(!name.is_valid(&Raw::from("Grace Hopper")));
//! ```
//!
//! ## Nested Composition
//!
//! ```
//! use value_rail::library::Email;
//! use value_rail::prelude::*;
//! use value_rail::schema;
//!
//! let users = ArrayValidator::new(
//!     schema! { "email" => Email::new() }.unwrap(),
//!     ArrayOptions::new().unbounded_errors(),
//! )
//! .unwrap();
//!
//! let raw = Raw::array([
//!     Raw::object([("email", "ada@example.com")]),
//!     Raw::object([("email", "not an email")]),
//!     Raw::object([("email", "grace@example.com")]),
//! ]);
//!
//! let errors = users.construct(&raw).unwrap_err();
//! assert_eq!(errors.paths(), ["[1].email"]);
//! assert_eq!(errors.codes(), ["pattern_mismatch"]);
//! ```
//!
//! ## Validation Accumulation
//!
//! ```
//! use value_rail::validation::Validation;
//!
//! let v1: Validation<&str, i32> = Validation::Valid(10);
//! let v2: Validation<&str, i32> = Validation::invalid("error");
//! let combined: Validation<&str, Vec<i32>> = vec![v1, v2].into_iter().collect();
//!
//! assert!(combined.is_invalid());
//! ```

/// Composition protocol between validators
pub mod convert;
/// Path and schema macros
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Untrusted raw input
pub mod raw;
/// Value object and validator traits
pub mod traits;
/// Error model: paths, validation and configuration errors, formatting
pub mod types;
/// Validation type for error accumulation
pub mod validation;

/// String, integer, float and set validators
pub mod primitives;
/// Array, object, optional and any-of validators
pub mod composites;
/// Ready-made domain validators
pub mod library;

/// Tracing instrumentation for validators (requires `tracing` feature)
#[cfg(feature = "tracing")]
pub mod tracing_ext;

// Re-export common types that might be needed at root,
// but encourage using the prelude.
pub use convert::*;
pub use raw::{Raw, RawKind};
pub use traits::*;
pub use types::{
    error_formatter::ErrorFormatConfig, ConfigError, ErrorKind, ErrorVec, Path, ValidationError,
    ValidationErrors,
};
pub use validation::*;
