//! Ordered unions.

use crate::convert::try_construct;
use crate::raw::Raw;
use crate::traits::{Construct, ValueObject, Validator};
use crate::types::{ConfigError, ValidationErrors};
use crate::validation::Validation;
use core::any::Any;

/// Tries each candidate in order and keeps the first success.
///
/// When every candidate fails, the error is the concatenation of each
/// candidate's errors in candidate order.
///
/// # Examples
///
/// ```
/// use value_rail::prelude::*;
///
/// let id = AnyOfValidator::new([
///     IntegerValidator::new(IntegerOptions::new().min(1)).unwrap().shared(),
///     StringValidator::new(StringOptions::new().min_length(6)).unwrap().shared(),
/// ])
/// .unwrap();
///
/// let vo = id.construct(&Raw::from("abc123")).unwrap();
/// assert_eq!(vo.candidate(), 1);
/// assert_eq!(vo.downcast_ref::<StringValue>().map(StringValue::as_str), Some("abc123"));
///
/// let errors = id.construct(&Raw::from(true)).unwrap_err();
/// assert_eq!(errors.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct AnyOfValidator {
    candidates: Vec<Validator>,
}

impl AnyOfValidator {
    pub fn new<I>(candidates: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = Validator>,
    {
        let candidates: Vec<Validator> = candidates.into_iter().collect();
        if candidates.is_empty() {
            return Err(ConfigError::NoCandidates { min: 1, actual: 0 });
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(candidates = candidates.len(), "any-of validator created");

        Ok(Self { candidates })
    }

    #[inline]
    pub fn candidates(&self) -> &[Validator] {
        &self.candidates
    }
}

impl Construct for AnyOfValidator {
    type Output = AnyOfValue;
    type Error = ValidationErrors;

    fn construct(&self, raw: &Raw) -> Result<AnyOfValue, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        for (candidate, validator) in self.candidates.iter().enumerate() {
            match try_construct(validator, raw) {
                Validation::Valid(value) => return Ok(AnyOfValue { candidate, value }),
                Validation::Invalid(candidate_errors) => errors.extend(candidate_errors),
            }
        }

        Err(errors)
    }
}

/// The value object produced by the first matching candidate.
#[derive(Debug)]
pub struct AnyOfValue {
    candidate: usize,
    value: Box<dyn ValueObject>,
}

impl AnyOfValue {
    /// Index of the candidate that accepted the input.
    #[inline]
    pub fn candidate(&self) -> usize {
        self.candidate
    }

    #[inline]
    pub fn value(&self) -> &dyn ValueObject {
        self.value.as_ref()
    }

    pub fn downcast_ref<T: ValueObject>(&self) -> Option<&T> {
        self.value.as_ref().downcast_ref::<T>()
    }

    pub fn is<T: ValueObject>(&self) -> bool {
        self.value.as_ref().is::<T>()
    }

    #[inline]
    pub fn into_inner(self) -> Box<dyn ValueObject> {
        self.value
    }
}

impl ValueObject for AnyOfValue {
    fn to_raw(&self) -> Raw {
        self.value.to_raw()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
