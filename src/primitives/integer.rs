//! Bounded integers.

use crate::raw::{Raw, RawKind};
use crate::traits::{Construct, ValueObject};
use crate::types::{ConfigError, ErrorKind, ValidationError};
use core::any::Any;
use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// 2^63 is exactly representable; anything at or above it does not fit an i64.
const I64_UPPER: f64 = 9_223_372_036_854_775_808.0;

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IntegerOptions {
    pub min: Option<i64>,
    pub max: Option<i64>,
}

impl IntegerOptions {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn min(mut self, min: i64) -> Self {
        self.min = Some(min);
        self
    }

    pub fn max(mut self, max: i64) -> Self {
        self.max = Some(max);
        self
    }
}

/// Validates whole numbers.
///
/// Range checks run before the integer check, so `150.5` against a maximum
/// of `150` reports `TooBig` rather than `NotInteger`.
///
/// # Examples
///
/// ```
/// use value_rail::prelude::*;
///
/// let age = IntegerValidator::new(IntegerOptions::new().min(0).max(150)).unwrap();
///
/// assert_eq!(age.construct(&Raw::from(36)).unwrap().get(), 36);
/// assert_eq!(age.construct(&Raw::from(36.5)).unwrap_err().code(), "not_integer");
/// assert_eq!(age.construct(&Raw::from(150.5)).unwrap_err().code(), "too_big");
/// ```
#[derive(Debug, Clone)]
pub struct IntegerValidator {
    options: IntegerOptions,
}

impl IntegerValidator {
    pub fn new(options: IntegerOptions) -> Result<Self, ConfigError> {
        if let (Some(min), Some(max)) = (options.min, options.max) {
            if min > max {
                return Err(ConfigError::InvertedBounds { min_option: "min", max_option: "max" });
            }
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(?options, "integer validator created");

        Ok(Self { options })
    }

    #[inline]
    pub fn options(&self) -> &IntegerOptions {
        &self.options
    }
}

impl Construct for IntegerValidator {
    type Output = IntegerValue;
    type Error = ValidationError;

    fn construct(&self, raw: &Raw) -> Result<IntegerValue, ValidationError> {
        let value = raw
            .as_f64()
            .ok_or_else(|| ValidationError::raw_type(RawKind::Number, raw.kind()))?;

        if let Some(min) = self.options.min {
            if value < min as f64 {
                return Err(ErrorKind::TooSmall { min: min as f64, actual: value }.into());
            }
        }
        if let Some(max) = self.options.max {
            if value > max as f64 {
                return Err(ErrorKind::TooBig { max: max as f64, actual: value }.into());
            }
        }
        if !value.is_finite() || value.fract() != 0.0 || value < -I64_UPPER || value >= I64_UPPER {
            return Err(ErrorKind::NotInteger { value }.into());
        }

        Ok(IntegerValue(value as i64))
    }
}

/// A validated integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IntegerValue(i64);

impl IntegerValue {
    #[inline]
    pub fn get(self) -> i64 {
        self.0
    }
}

impl ValueObject for IntegerValue {
    fn to_raw(&self) -> Raw {
        Raw::Number(self.0 as f64)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl fmt::Display for IntegerValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
