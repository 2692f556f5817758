//! The construction protocol shared by every composite validator.
//!
//! Composites never branch on how an inner validator reported failure. They
//! call [`try_construct`], which always yields an explicit [`Validation`]
//! whose failure side is a list, or [`can_construct`] when only membership
//! matters.
//!
//! # Examples
//!
//! ```
//! use value_rail::convert::*;
//! use value_rail::prelude::*;
//!
//! let word = StringValidator::new(StringOptions::new().min_length(2)).unwrap();
//!
//! assert!(try_construct(&word, &Raw::from("ok")).is_valid());
//! assert_eq!(try_construct(&word, &Raw::from("x")).iter_errors().count(), 1);
//! assert!(!can_construct(&word, &Raw::from(12)));
//! ```

use crate::raw::Raw;
use crate::traits::Construct;
use crate::types::{ValidationError, ValidationErrors};
use crate::validation::core::Validation;

/// Attempts construction and normalises any failure into an error list.
///
/// A single error becomes a one-element list; a list is passed through
/// unchanged, order preserved.
#[inline]
pub fn try_construct<V>(validator: &V, raw: &Raw) -> Validation<ValidationError, V::Output>
where
    V: Construct + ?Sized,
{
    result_to_validation(validator.construct(raw))
}

/// Reports whether `validator` accepts `raw`, discarding the value object.
#[inline]
pub fn can_construct<V>(validator: &V, raw: &Raw) -> bool
where
    V: Construct + ?Sized,
{
    validator.construct(raw).is_ok()
}

/// Converts a `Validation` into a `Result` carrying the whole error list.
///
/// # Examples
///
/// ```
/// use value_rail::convert::validation_to_result;
/// use value_rail::raw::RawKind;
/// use value_rail::types::ValidationError;
/// use value_rail::validation::Validation;
///
/// let invalid = Validation::<_, ()>::invalid(ValidationError::raw_type(RawKind::String, RawKind::Null));
/// assert_eq!(validation_to_result(invalid).unwrap_err().len(), 1);
/// ```
#[inline]
pub fn validation_to_result<T>(
    validation: Validation<ValidationError, T>,
) -> Result<T, ValidationErrors> {
    validation.into_result()
}

/// Converts a `Result` into a `Validation`, whatever the error's shape.
#[inline]
pub fn result_to_validation<T, E>(result: Result<T, E>) -> Validation<ValidationError, T>
where
    E: Into<ValidationErrors>,
{
    match result {
        Ok(value) => Validation::Valid(value),
        Err(error) => Validation::Invalid(Into::<ValidationErrors>::into(error).into_inner()),
    }
}
