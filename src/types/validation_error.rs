//! Input-validation failures.
//!
//! A [`ValidationError`] pairs a closed [`ErrorKind`] with the [`Path`] of the
//! offending value. Composite validators fail with [`ValidationErrors`], the
//! ordered list that is the uniform failure shape at every nesting level.

use crate::raw::{RawKind, SetElement};
use crate::types::error_formatter::{ErrorFormatBuilder, ErrorFormatConfig, ErrorFormatter};
use crate::types::{ErrorVec, Path, PathSegment};
use core::fmt;
use smallvec::SmallVec;

#[cfg(feature = "serde")]
use serde::Serialize;

/// The raw kinds a validator would have accepted.
#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ExpectedKinds(SmallVec<[RawKind; 2]>);

impl ExpectedKinds {
    #[inline]
    pub fn one(kind: RawKind) -> Self {
        Self(smallvec::smallvec![kind])
    }

    /// Adds `kind` unless it is already listed.
    pub fn insert(&mut self, kind: RawKind) {
        if !self.0.contains(&kind) {
            self.0.push(kind);
        }
    }

    #[inline]
    pub fn contains(&self, kind: RawKind) -> bool {
        self.0.contains(&kind)
    }

    #[inline]
    pub fn as_slice(&self) -> &[RawKind] {
        &self.0
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<RawKind> for ExpectedKinds {
    fn from_iter<I: IntoIterator<Item = RawKind>>(iter: I) -> Self {
        let mut kinds = Self::default();
        for kind in iter {
            kinds.insert(kind);
        }
        kinds
    }
}

impl fmt::Display for ExpectedKinds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, kind) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" | ")?;
            }
            write!(f, "{kind}")?;
        }
        Ok(())
    }
}

/// What went wrong with a raw value.
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ErrorKind {
    #[error("Wrong raw value type: expected {expected}, got {actual}")]
    RawTypeMismatch { expected: ExpectedKinds, actual: RawKind },

    #[error("Too short: expected at least {min} but got {actual}")]
    TooShort { min: usize, actual: usize },

    #[error("Too long: expected at most {max} but got {actual}")]
    TooLong { max: usize, actual: usize },

    #[error("Too small: expected at least {min} but got {actual}")]
    TooSmall { min: f64, actual: f64 },

    #[error("Too big: expected at most {max} but got {actual}")]
    TooBig { max: f64, actual: f64 },

    #[error("Not an integer: {value}")]
    NotInteger { value: f64 },

    #[error("Not a finite number: {value}")]
    NotFinite { value: f64 },

    #[error("Value doesn't match pattern {pattern}")]
    PatternMismatch { pattern: String },

    #[error("Value not found in set: {value}")]
    NotInSet { allowed: Vec<SetElement>, value: SetElement },
}

impl ErrorKind {
    /// Stable machine-readable identifier of the kind.
    pub fn code(&self) -> &'static str {
        match self {
            Self::RawTypeMismatch { .. } => "raw_type_mismatch",
            Self::TooShort { .. } => "too_short",
            Self::TooLong { .. } => "too_long",
            Self::TooSmall { .. } => "too_small",
            Self::TooBig { .. } => "too_big",
            Self::NotInteger { .. } => "not_integer",
            Self::NotFinite { .. } => "not_finite",
            Self::PatternMismatch { .. } => "pattern_mismatch",
            Self::NotInSet { .. } => "not_in_set",
        }
    }
}

/// A single validation failure at a location.
#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    #[cfg_attr(feature = "serde", serde(flatten))]
    kind: ErrorKind,
    path: Path,
}

impl ValidationError {
    /// Creates a top-level error (empty path).
    #[inline]
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind, path: Path::root() }
    }

    #[inline]
    pub fn at(kind: ErrorKind, path: Path) -> Self {
        Self { kind, path }
    }

    #[inline]
    pub fn raw_type(expected: RawKind, actual: RawKind) -> Self {
        Self::new(ErrorKind::RawTypeMismatch { expected: ExpectedKinds::one(expected), actual })
    }

    #[inline]
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    #[inline]
    pub fn kind_mut(&mut self) -> &mut ErrorKind {
        &mut self.kind
    }

    #[inline]
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Prepends a location segment, as done by the composite that owns it.
    #[inline]
    pub fn prepend_path(&mut self, segment: impl Into<PathSegment>) {
        self.path.prepend(segment);
    }

    #[inline]
    pub fn with_prefix(mut self, segment: impl Into<PathSegment>) -> Self {
        self.prepend_path(segment);
        self
    }

    #[inline]
    pub fn into_parts(self) -> (ErrorKind, Path) {
        (self.kind, self.path)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_root() {
            write!(f, "{}", self.kind)
        } else {
            write!(f, "{}: {}", self.path, self.kind)
        }
    }
}

impl std::error::Error for ValidationError {}

impl From<ErrorKind> for ValidationError {
    fn from(kind: ErrorKind) -> Self {
        Self::new(kind)
    }
}

/// Ordered list of validation failures, in encounter order.
///
/// # Examples
///
/// ```
/// use value_rail::raw::RawKind;
/// use value_rail::types::{ValidationError, ValidationErrors};
///
/// let mut errors = ValidationErrors::from(ValidationError::raw_type(RawKind::String, RawKind::Null));
/// errors.prepend_path("name");
/// assert_eq!(errors.len(), 1);
/// assert_eq!(errors[0].path().to_string(), "name");
/// ```
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationErrors(ErrorVec<ValidationError>);

impl ValidationErrors {
    #[inline]
    pub fn new() -> Self {
        Self(ErrorVec::new())
    }

    #[inline]
    pub fn push(&mut self, error: ValidationError) {
        self.0.push(error);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, ValidationError> {
        self.0.iter()
    }

    #[inline]
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, ValidationError> {
        self.0.iter_mut()
    }

    #[inline]
    pub fn first(&self) -> Option<&ValidationError> {
        self.0.first()
    }

    #[inline]
    pub fn truncate(&mut self, len: usize) {
        self.0.truncate(len);
    }

    /// Prepends `segment` to the path of every error in the list.
    pub fn prepend_path(&mut self, segment: impl Into<PathSegment>) {
        let segment: PathSegment = segment.into();
        for error in &mut self.0 {
            error.prepend_path(segment.clone());
        }
    }

    /// Display strings of every path, in order.
    pub fn paths(&self) -> Vec<String> {
        self.0.iter().map(|e| e.path().to_string()).collect()
    }

    /// Machine-readable codes of every error, in order.
    pub fn codes(&self) -> Vec<&'static str> {
        self.0.iter().map(ValidationError::code).collect()
    }

    #[inline]
    pub fn into_inner(self) -> ErrorVec<ValidationError> {
        self.0
    }

    /// Returns a builder for customizing how the list is rendered.
    #[must_use]
    #[inline]
    pub fn fmt(&self) -> ErrorFormatBuilder<'_> {
        ErrorFormatBuilder::new(self)
    }

    /// Renders the list with a custom formatter.
    #[must_use]
    pub fn format_with<F: ErrorFormatter>(&self, formatter: F) -> String {
        formatter.format_errors(self.0.iter())
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&ErrorFormatConfig::default().format_errors(self.0.iter()))
    }
}

impl std::error::Error for ValidationErrors {}

impl core::ops::Index<usize> for ValidationErrors {
    type Output = ValidationError;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl From<ValidationError> for ValidationErrors {
    fn from(error: ValidationError) -> Self {
        Self(smallvec::smallvec![error])
    }
}

impl From<ErrorVec<ValidationError>> for ValidationErrors {
    fn from(errors: ErrorVec<ValidationError>) -> Self {
        Self(errors)
    }
}

impl From<ValidationErrors> for ErrorVec<ValidationError> {
    fn from(errors: ValidationErrors) -> Self {
        errors.0
    }
}

impl FromIterator<ValidationError> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = ValidationError>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<ValidationError> for ValidationErrors {
    fn extend<I: IntoIterator<Item = ValidationError>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = smallvec::IntoIter<[ValidationError; 1]>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a ValidationError;
    type IntoIter = core::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
