//! Homogeneous sequences.

use crate::convert::try_construct;
use crate::raw::{Raw, RawKind};
use crate::traits::{Construct, ValueObject};
use crate::types::{ConfigError, ErrorAccumulator, ErrorKind, ErrorLimit, ValidationError, ValidationErrors};
use crate::validation::Validation;
use core::any::Any;
use core::ops::ControlFlow;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration of an [`ArrayValidator`].
///
/// `max_errors` is `Some(n)` to stop after `n` errors (default 1) or `None`
/// to report every invalid element.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArrayOptions {
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub max_errors: Option<usize>,
}

impl Default for ArrayOptions {
    fn default() -> Self {
        Self { min_length: None, max_length: None, max_errors: Some(1) }
    }
}

impl ArrayOptions {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn min_length(mut self, min_length: usize) -> Self {
        self.min_length = Some(min_length);
        self
    }

    pub fn max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    pub fn max_errors(mut self, max_errors: usize) -> Self {
        self.max_errors = Some(max_errors);
        self
    }

    /// Collects every element error instead of stopping early.
    pub fn unbounded_errors(mut self) -> Self {
        self.max_errors = None;
        self
    }
}

/// Validates every element of an array with the same inner validator.
///
/// The length is checked before any element is looked at. Element errors
/// get the element index prepended to their path and accumulate until the
/// error limit is reached.
///
/// # Examples
///
/// ```
/// use value_rail::prelude::*;
///
/// let tags = ArrayValidator::new(
///     StringValidator::new(StringOptions::new().min_length(1)).unwrap(),
///     ArrayOptions::new().max_length(3).max_errors(2),
/// )
/// .unwrap();
///
/// let errors = tags.construct(&Raw::array([Raw::from("a"), "".into(), 7.into(), "".into()])).unwrap_err();
/// assert_eq!(errors.codes(), ["too_long"]);
///
/// let errors = tags.construct(&Raw::array([Raw::from(""), "b".into(), 7.into()])).unwrap_err();
/// assert_eq!(errors.paths(), ["[0]", "[2]"]);
/// ```
#[derive(Debug, Clone)]
pub struct ArrayValidator<V> {
    inner: V,
    options: ArrayOptions,
    limit: ErrorLimit,
}

impl<V: Construct> ArrayValidator<V> {
    pub fn new(inner: V, options: ArrayOptions) -> Result<Self, ConfigError> {
        if let (Some(min), Some(max)) = (options.min_length, options.max_length) {
            if min > max {
                return Err(ConfigError::InvertedBounds {
                    min_option: "min_length",
                    max_option: "max_length",
                });
            }
        }
        let limit = match options.max_errors {
            Some(max) => ErrorLimit::at_most(max)?,
            None => ErrorLimit::Unbounded,
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(?options, "array validator created");

        Ok(Self { inner, options, limit })
    }

    #[inline]
    pub fn inner(&self) -> &V {
        &self.inner
    }

    #[inline]
    pub fn options(&self) -> &ArrayOptions {
        &self.options
    }

    #[inline]
    pub fn limit(&self) -> ErrorLimit {
        self.limit
    }

    fn check_length(&self, length: usize) -> Result<(), ValidationError> {
        if let Some(min) = self.options.min_length {
            if length < min {
                return Err(ErrorKind::TooShort { min, actual: length }.into());
            }
        }
        if let Some(max) = self.options.max_length {
            if length > max {
                return Err(ErrorKind::TooLong { max, actual: length }.into());
            }
        }
        Ok(())
    }
}

impl<V: Construct> Construct for ArrayValidator<V> {
    type Output = ArrayValue<V::Output>;
    type Error = ValidationErrors;

    fn construct(&self, raw: &Raw) -> Result<Self::Output, ValidationErrors> {
        let items = raw
            .as_array()
            .ok_or_else(|| ValidationError::raw_type(RawKind::Array, raw.kind()))?;
        self.check_length(items.len())?;

        let mut errors = ErrorAccumulator::new(self.limit);
        let mut values = Vec::with_capacity(items.len());

        for (index, item) in items.iter().enumerate() {
            match try_construct(&self.inner, item) {
                Validation::Valid(value) => values.push(value),
                Validation::Invalid(element_errors) => {
                    if let ControlFlow::Break(()) = errors.push_located(index, element_errors) {
                        #[cfg(feature = "tracing")]
                        tracing::trace!(index, limit = ?self.limit, "array error limit reached");
                        break;
                    }
                },
            }
        }

        errors.finish(ArrayValue { items: values })
    }
}

/// A validated array: the ordered element value objects.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrayValue<T> {
    items: Vec<T>,
}

impl<T> ArrayValue<T> {
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.items.iter()
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

impl<T: Clone> ArrayValue<T> {
    pub fn to_vec(&self) -> Vec<T> {
        self.items.clone()
    }
}

impl<T: ValueObject> ValueObject for ArrayValue<T> {
    fn to_raw(&self) -> Raw {
        Raw::Array(self.items.iter().map(ValueObject::to_raw).collect())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl<T> core::ops::Index<usize> for ArrayValue<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.items[index]
    }
}

impl<T> IntoIterator for ArrayValue<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a ArrayValue<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
