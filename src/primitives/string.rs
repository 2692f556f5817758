//! Bounded strings.

use crate::raw::{Raw, RawKind};
use crate::traits::{Construct, ValueObject};
use crate::types::{ConfigError, ErrorKind, ValidationError};
use core::any::Any;
use core::fmt;
use regex::Regex;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration of a [`StringValidator`].
///
/// Lengths count Unicode scalar values and are checked after trimming.
/// Trimming strips Unicode whitespace and the byte order mark `U+FEFF`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StringOptions {
    pub trim: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    /// Regular expression source, compiled when the validator is created.
    pub pattern: Option<String>,
}

impl StringOptions {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }

    pub fn min_length(mut self, min_length: usize) -> Self {
        self.min_length = Some(min_length);
        self
    }

    pub fn max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }
}

/// Validates strings: raw type, then optional trim, then length, then pattern.
///
/// # Examples
///
/// ```
/// use value_rail::prelude::*;
///
/// let code = StringValidator::new(
///     StringOptions::new().trim(true).min_length(3).max_length(3).pattern("^[A-Z]+$"),
/// )
/// .unwrap();
///
/// assert_eq!(code.construct(&Raw::from(" BRL ")).unwrap().as_str(), "BRL");
/// assert_eq!(code.construct(&Raw::from("brl")).unwrap_err().code(), "pattern_mismatch");
/// assert_eq!(code.construct(&Raw::from("EURO")).unwrap_err().code(), "too_long");
/// ```
#[derive(Debug, Clone)]
pub struct StringValidator {
    options: StringOptions,
    pattern: Option<Regex>,
}

impl StringValidator {
    pub fn new(options: StringOptions) -> Result<Self, ConfigError> {
        if let (Some(min), Some(max)) = (options.min_length, options.max_length) {
            if min > max {
                return Err(ConfigError::InvertedBounds {
                    min_option: "min_length",
                    max_option: "max_length",
                });
            }
        }

        let pattern = options
            .pattern
            .as_deref()
            .map(|source| {
                Regex::new(source).map_err(|e| ConfigError::InvalidPattern {
                    pattern: source.to_owned(),
                    source: e,
                })
            })
            .transpose()?;

        #[cfg(feature = "tracing")]
        tracing::debug!(?options, "string validator created");

        Ok(Self { options, pattern })
    }

    #[inline]
    pub fn options(&self) -> &StringOptions {
        &self.options
    }
}

/// Strips leading and trailing whitespace and byte order marks.
#[inline]
pub(crate) fn trim_str(value: &str) -> &str {
    value.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

impl Construct for StringValidator {
    type Output = StringValue;
    type Error = ValidationError;

    fn construct(&self, raw: &Raw) -> Result<StringValue, ValidationError> {
        let value = raw
            .as_str()
            .ok_or_else(|| ValidationError::raw_type(RawKind::String, raw.kind()))?;
        let value = if self.options.trim { trim_str(value) } else { value };

        let length = value.chars().count();
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
        if let Some(pattern) = &self.pattern {
            if !pattern.is_match(value) {
                return Err(ErrorKind::PatternMismatch { pattern: pattern.as_str().to_owned() }.into());
            }
        }

        Ok(StringValue(value.to_owned()))
    }
}

/// A validated string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StringValue(String);

impl StringValue {
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl ValueObject for StringValue {
    fn to_raw(&self) -> Raw {
        Raw::String(self.0.clone())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl AsRef<str> for StringValue {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StringValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
