//! Convenience re-exports for common usage patterns.
//!
//! This prelude module provides the most commonly used items for quick starts.
//! Import everything with:
//!
//! ```
//! use value_rail::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Raw input**: [`Raw`], [`RawKind`], [`NoneMarker`], [`SetElement`]
//! - **Validators**: every primitive and composite validator with its options and value object
//! - **Traits**: [`Construct`], [`ConstructExt`], [`ValueObject`] and the erased [`Validator`]
//! - **Errors**: [`ValidationError`], [`ValidationErrors`], [`ErrorKind`], [`ConfigError`], [`Path`]
//!
//! # Examples
//!
//! ```
//! use value_rail::prelude::*;
//!
//! fn parse_age(raw: &Raw) -> Result<i64, ValidationErrors> {
//!     let age = IntegerValidator::new(IntegerOptions::new().min(0).max(150)).unwrap();
//!     Ok(age.construct(raw)?.get())
//! }
//!
//! assert_eq!(parse_age(&Raw::from(42)).unwrap(), 42);
//! assert_eq!(parse_age(&Raw::from("42")).unwrap_err().codes(), ["raw_type_mismatch"]);
//! ```

// Macros
pub use crate::{path, schema};

// Raw input
pub use crate::raw::{NoneMarker, Raw, RawKind, RawMap, SetElement};

// Validators
pub use crate::composites::{
    AnyOfValidator, AnyOfValue, ArrayOptions, ArrayValidator, ArrayValue, ObjectOptions,
    ObjectValidator, ObjectValue, OptionalValidator, OptionalValue,
};
pub use crate::primitives::{
    FloatOptions, FloatValidator, FloatValue, IntegerOptions, IntegerValidator, IntegerValue,
    Rounding, SetOptions, SetValidator, SetValue, StringOptions, StringValidator, StringValue,
};

// Traits
pub use crate::traits::{Construct, ConstructExt, Validator, ValueObject};

// Errors
pub use crate::types::{
    ConfigError, ErrorKind, ErrorLimit, Path, PathSegment, ValidationError, ValidationErrors,
};
pub use crate::validation::Validation;

/// Result of constructing a value object with a composite validator.
pub type ConstructResult<T> = Result<T, ValidationErrors>;
