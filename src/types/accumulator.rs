use crate::types::{ConfigError, ErrorVec, PathSegment, ValidationError, ValidationErrors};
use core::num::NonZeroUsize;
use core::ops::ControlFlow;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How many errors a composite collects before it stops validating.
///
/// `AtMost(1)` (the default) is fail-fast; `Unbounded` reports everything
/// wrong with the input.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorLimit {
    AtMost(NonZeroUsize),
    Unbounded,
}

impl Default for ErrorLimit {
    fn default() -> Self {
        Self::AtMost(NonZeroUsize::MIN)
    }
}

impl ErrorLimit {
    /// Builds a finite limit; zero is rejected.
    pub fn at_most(max_errors: usize) -> Result<Self, ConfigError> {
        NonZeroUsize::new(max_errors).map(Self::AtMost).ok_or(ConfigError::ZeroErrorLimit)
    }

    /// The finite limit, or `None` when unbounded.
    #[inline]
    pub fn get(self) -> Option<usize> {
        match self {
            Self::AtMost(max) => Some(max.get()),
            Self::Unbounded => None,
        }
    }

    #[inline]
    pub fn is_reached(self, count: usize) -> bool {
        self.get().is_some_and(|max| count >= max)
    }
}

/// Collects element or field errors for a composite validator.
///
/// Each batch is pushed with the segment locating it; once the limit is
/// reached the list is cut to exactly the limit and the caller is told to
/// stop iterating.
#[derive(Debug, Clone, Default)]
pub struct ErrorAccumulator {
    items: ErrorVec<ValidationError>,
    limit: ErrorLimit,
}

impl ErrorAccumulator {
    #[inline]
    pub fn new(limit: ErrorLimit) -> Self {
        Self { items: ErrorVec::new(), limit }
    }

    /// Adds a batch of errors raised below `segment`.
    pub fn push_located<I>(&mut self, segment: impl Into<PathSegment>, errors: I) -> ControlFlow<()>
    where
        I: IntoIterator<Item = ValidationError>,
    {
        let segment: PathSegment = segment.into();
        self.items.extend(errors.into_iter().map(|e| e.with_prefix(segment.clone())));

        match self.limit.get() {
            Some(max) if self.items.len() >= max => {
                self.items.truncate(max);
                ControlFlow::Break(())
            },
            _ => ControlFlow::Continue(()),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn limit(&self) -> ErrorLimit {
        self.limit
    }

    /// Returns `value` if nothing was collected, otherwise the collected errors.
    pub fn finish<T>(self, value: T) -> Result<T, ValidationErrors> {
        if self.items.is_empty() {
            Ok(value)
        } else {
            Err(ValidationErrors::from(self.items))
        }
    }

    /// Consumes the accumulator and returns the underlying `ErrorVec`.
    #[inline]
    pub fn into_inner(self) -> ErrorVec<ValidationError> {
        self.items
    }
}
