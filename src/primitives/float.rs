//! Bounded floating point numbers with optional fixed precision.

use crate::raw::{Raw, RawKind};
use crate::traits::{Construct, ValueObject};
use crate::types::{ConfigError, ErrorKind, ValidationError};
use core::any::Any;
use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Largest supported `precision`; an `f64` carries about 15 significant
/// decimal digits.
pub const MAX_PRECISION: u32 = 15;

// From 2^52 on every f64 is already an integer, so scaling gains nothing.
const SCALE_LIMIT: f64 = 4_503_599_627_370_496.0;

/// How a value is brought to the configured precision.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Rounding {
    Floor,
    Ceil,
    /// Nearest, ties toward positive infinity: `2.5` becomes `3` and `-2.5`
    /// becomes `-2`. A negative value rounding to zero keeps its sign.
    #[default]
    Round,
}

impl Rounding {
    #[inline]
    pub fn apply(self, value: f64) -> f64 {
        match self {
            Self::Floor => value.floor(),
            Self::Ceil => value.ceil(),
            Self::Round => {
                let floor = value.floor();
                let rounded = if value - floor >= 0.5 { floor + 1.0 } else { floor };
                if rounded == 0.0 {
                    rounded.copysign(value)
                } else {
                    rounded
                }
            },
        }
    }
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FloatOptions {
    pub min: Option<f64>,
    pub max: Option<f64>,
    /// Number of decimal digits kept.
    pub precision: Option<u32>,
    #[cfg_attr(feature = "serde", serde(alias = "precisionTrim"))]
    pub rounding: Rounding,
}

impl FloatOptions {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    pub fn max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    pub fn precision(mut self, precision: u32) -> Self {
        self.precision = Some(precision);
        self
    }

    pub fn rounding(mut self, rounding: Rounding) -> Self {
        self.rounding = rounding;
        self
    }
}

/// Validates numbers, rounding them to a fixed precision before the range
/// checks. The rounded value is the one stored.
///
/// # Examples
///
/// ```
/// use value_rail::prelude::*;
///
/// let percentage = FloatValidator::new(
///     FloatOptions::new().min(0.0).max(100.0).precision(2).rounding(Rounding::Round),
/// )
/// .unwrap();
///
/// assert_eq!(percentage.construct(&Raw::from(99.995)).unwrap().get(), 100.0);
/// assert_eq!(percentage.construct(&Raw::from(100.006)).unwrap_err().code(), "too_big");
/// ```
#[derive(Debug, Clone)]
pub struct FloatValidator {
    options: FloatOptions,
    factor: Option<f64>,
}

impl FloatValidator {
    pub fn new(options: FloatOptions) -> Result<Self, ConfigError> {
        for (option, bound) in [("min", options.min), ("max", options.max)] {
            if let Some(value) = bound {
                if !value.is_finite() {
                    return Err(ConfigError::NonFiniteBound { option, value });
                }
            }
        }
        if let (Some(min), Some(max)) = (options.min, options.max) {
            if min > max {
                return Err(ConfigError::InvertedBounds { min_option: "min", max_option: "max" });
            }
        }
        if let Some(precision) = options.precision {
            if precision > MAX_PRECISION {
                return Err(ConfigError::PrecisionTooLarge { precision, max: MAX_PRECISION });
            }
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(?options, "float validator created");

        let factor = options.precision.map(|p| 10f64.powi(p as i32));
        Ok(Self { options, factor })
    }

    #[inline]
    pub fn options(&self) -> &FloatOptions {
        &self.options
    }
}

impl Construct for FloatValidator {
    type Output = FloatValue;
    type Error = ValidationError;

    fn construct(&self, raw: &Raw) -> Result<FloatValue, ValidationError> {
        let mut value = raw
            .as_f64()
            .ok_or_else(|| ValidationError::raw_type(RawKind::Number, raw.kind()))?;

        if !value.is_finite() {
            return Err(ErrorKind::NotFinite { value }.into());
        }
        if let Some(factor) = self.factor {
            let scaled = value * factor;
            if scaled.is_finite() && value.abs() < SCALE_LIMIT / factor {
                value = self.options.rounding.apply(scaled) / factor;
            }
            if !value.is_finite() {
                return Err(ErrorKind::NotFinite { value }.into());
            }
        }

        if let Some(min) = self.options.min {
            if value < min {
                return Err(ErrorKind::TooSmall { min, actual: value }.into());
            }
        }
        if let Some(max) = self.options.max {
            if value > max {
                return Err(ErrorKind::TooBig { max, actual: value }.into());
            }
        }

        Ok(FloatValue(value))
    }
}

/// A validated, finite number.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct FloatValue(f64);

impl FloatValue {
    #[inline]
    pub fn get(self) -> f64 {
        self.0
    }
}

impl ValueObject for FloatValue {
    fn to_raw(&self) -> Raw {
        Raw::Number(self.0)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl fmt::Display for FloatValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
