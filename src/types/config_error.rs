//! Setup-time failures.
//!
//! A [`ConfigError`] means a validator factory was called with options that
//! can never work. It is a programming mistake, never a property of input,
//! and is kept apart from [`ValidationError`](crate::types::ValidationError).

use crate::raw::Raw;

/// Invalid validator configuration.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    /// A lower bound is greater than its upper bound.
    #[error("Invalid logic: options.{min_option} should not be bigger than options.{max_option}")]
    InvertedBounds { min_option: &'static str, max_option: &'static str },

    #[error("Not a finite number: options.{option} is {value}")]
    NonFiniteBound { option: &'static str, value: f64 },

    #[error("Too big: options.precision is {precision}, the maximum is {max}")]
    PrecisionTooLarge { precision: u32, max: u32 },

    #[error("Invalid pattern {pattern:?}: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Too short: a set needs at least one element")]
    EmptySet,

    #[error("Not a finite number: set element {value}")]
    NonFiniteSetElement { value: f64 },

    /// Only `undefined` and `null` can mark an absent optional value.
    #[error("Wrong raw value type: {marker} is not a none marker")]
    InvalidNoneMarker { marker: Raw },

    /// A union needs at least one candidate.
    #[error("Too short: expected at least {min} candidates but got {actual}")]
    NoCandidates { min: usize, actual: usize },

    #[error("Too small: options.max_errors must be at least 1")]
    ZeroErrorLimit,

    #[error("Duplicate field {field:?} in object schema")]
    DuplicateField { field: String },
}

impl ConfigError {
    /// Stable machine-readable identifier of the error.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvertedBounds { .. } => "inverted_bounds",
            Self::NonFiniteBound { .. } => "non_finite_bound",
            Self::PrecisionTooLarge { .. } => "precision_too_large",
            Self::InvalidPattern { .. } => "invalid_pattern",
            Self::EmptySet => "empty_set",
            Self::NonFiniteSetElement { .. } => "non_finite_set_element",
            Self::InvalidNoneMarker { .. } => "invalid_none_marker",
            Self::NoCandidates { .. } => "no_candidates",
            Self::ZeroErrorLimit => "zero_error_limit",
            Self::DuplicateField { .. } => "duplicate_field",
        }
    }
}
