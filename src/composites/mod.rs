//! Validators built out of other validators.
//!
//! Composites call their inner validators through
//! [`try_construct`](crate::convert::try_construct), prepend the location of
//! each failure (an index or a field name) to its path, and always fail with a
//! [`ValidationErrors`](crate::types::ValidationErrors) list.
//!
//! Array and object validators stop as soon as the configured error limit is
//! reached; [`ErrorLimit`](crate::types::ErrorLimit) documents the policy.

pub mod any_of;
pub mod array;
pub mod object;
pub mod optional;

pub use any_of::{AnyOfValidator, AnyOfValue};
pub use array::{ArrayOptions, ArrayValidator, ArrayValue};
pub use object::{ObjectOptions, ObjectValidator, ObjectValue};
pub use optional::{OptionalValidator, OptionalValue};
