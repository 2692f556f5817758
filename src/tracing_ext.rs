//! Tracing integration for value-rail.
//!
//! [`Traced`] runs every construction of the wrapped validator inside a
//! `debug` span and records failures as events, with the error count and
//! their paths as fields.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! value-rail = { version = "0.1", features = ["tracing"] }
//! ```
//!
//! # Examples
//!
//! ```
//! use value_rail::prelude::*;
//!
//! let name = StringValidator::new(StringOptions::new().min_length(1))
//!     .unwrap()
//!     .traced("user.name");
//!
//! assert!(name.construct(&Raw::from("")).is_err());
//! ```

use crate::raw::Raw;
use crate::traits::Construct;
use crate::types::ValidationErrors;
use tracing::Span;

/// A validator whose constructions are instrumented with `tracing`.
///
/// Created by [`ConstructExt::traced`](crate::traits::ConstructExt::traced).
#[derive(Debug, Clone)]
pub struct Traced<V> {
    inner: V,
    name: &'static str,
}

impl<V> Traced<V> {
    #[inline]
    pub fn new(inner: V, name: &'static str) -> Self {
        Self { inner, name }
    }

    /// Name recorded on the span.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub fn inner(&self) -> &V {
        &self.inner
    }

    #[inline]
    pub fn into_inner(self) -> V {
        self.inner
    }
}

impl<V: Construct> Construct for Traced<V> {
    type Output = V::Output;
    type Error = ValidationErrors;

    fn construct(&self, raw: &Raw) -> Result<V::Output, ValidationErrors> {
        let span = tracing::debug_span!("construct", validator = self.name, raw_kind = %raw.kind());
        let _entered = span.enter();

        self.inner.construct(raw).map_err(|error| {
            let errors: ValidationErrors = error.into();
            record_errors(&errors);
            errors
        })
    }
}

/// Emits a `debug` event describing `errors` in the current span.
pub fn record_errors(errors: &ValidationErrors) {
    tracing::debug!(
        span = span_name(&Span::current()),
        errors = errors.len(),
        paths = ?errors.paths(),
        codes = ?errors.codes(),
        "validation failed"
    );
}

fn span_name(span: &Span) -> &'static str {
    span.metadata().map(|m| m.name()).unwrap_or("none")
}
