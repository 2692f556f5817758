//! Values that may be absent.

use crate::raw::{NoneMarker, Raw};
use crate::traits::{Construct, ValueObject};
use crate::types::{ConfigError, ErrorKind, ValidationErrors};
use core::any::Any;
use smallvec::{smallvec, SmallVec};

/// Accepts one of the configured none markers or whatever `V` accepts.
///
/// A none marker short-circuits the inner validator. When the inner
/// validator rejects the raw type itself, the none markers are added to the
/// expected kinds so the error lists every acceptable input.
///
/// # Examples
///
/// ```
/// use value_rail::prelude::*;
///
/// let nickname = OptionalValidator::with_none_values(
///     StringValidator::new(StringOptions::new()).unwrap(),
///     [Raw::Null],
/// )
/// .unwrap();
///
/// assert!(nickname.construct(&Raw::Null).unwrap().is_none());
/// assert!(nickname.construct(&Raw::from("ada")).unwrap().is_some());
///
/// let errors = nickname.construct(&Raw::Undefined).unwrap_err();
/// assert_eq!(errors[0].to_string(), "Wrong raw value type: expected string | null, got undefined");
/// ```
#[derive(Debug, Clone)]
pub struct OptionalValidator<V> {
    inner: V,
    none_values: SmallVec<[NoneMarker; 2]>,
}

impl<V: Construct> OptionalValidator<V> {
    /// Treats only `undefined` as absent.
    pub fn new(inner: V) -> Self {
        Self { inner, none_values: smallvec![NoneMarker::Undefined] }
    }

    /// Treats each of `none_values` as absent; each must be `undefined` or `null`.
    pub fn with_none_values<I>(inner: V, none_values: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = Raw>,
    {
        let mut markers: SmallVec<[NoneMarker; 2]> = SmallVec::new();
        for raw in none_values {
            let marker = NoneMarker::from_raw(&raw).ok_or(ConfigError::InvalidNoneMarker { marker: raw })?;
            if !markers.contains(&marker) {
                markers.push(marker);
            }
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(none_values = ?markers, "optional validator created");

        Ok(Self { inner, none_values: markers })
    }

    #[inline]
    pub fn inner(&self) -> &V {
        &self.inner
    }

    #[inline]
    pub fn none_values(&self) -> &[NoneMarker] {
        &self.none_values
    }
}

impl<V: Construct> Construct for OptionalValidator<V> {
    type Output = OptionalValue<V::Output>;
    type Error = ValidationErrors;

    fn construct(&self, raw: &Raw) -> Result<Self::Output, ValidationErrors> {
        if let Some(marker) = NoneMarker::from_raw(raw) {
            if self.none_values.contains(&marker) {
                return Ok(OptionalValue::None(marker));
            }
        }

        self.inner.construct(raw).map(OptionalValue::Some).map_err(|error| {
            let mut errors: ValidationErrors = error.into();
            for error in errors.iter_mut().filter(|e| e.path().is_root()) {
                if let ErrorKind::RawTypeMismatch { expected, .. } = error.kind_mut() {
                    for marker in &self.none_values {
                        expected.insert(marker.kind());
                    }
                }
            }
            errors
        })
    }
}

/// A validated optional value.
#[derive(Debug, Clone, PartialEq)]
pub enum OptionalValue<T> {
    Some(T),
    /// The input was this none marker.
    None(NoneMarker),
}

impl<T> OptionalValue<T> {
    #[inline]
    pub fn is_some(&self) -> bool {
        matches!(self, Self::Some(_))
    }

    #[inline]
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None(_))
    }

    #[inline]
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Some(value) => Some(value),
            Self::None(_) => None,
        }
    }

    /// The none marker the input matched, if it was absent.
    #[inline]
    pub fn marker(&self) -> Option<NoneMarker> {
        match self {
            Self::Some(_) => None,
            Self::None(marker) => Some(*marker),
        }
    }

    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Some(value) => Some(value),
            Self::None(_) => None,
        }
    }
}

impl<T: ValueObject> ValueObject for OptionalValue<T> {
    fn to_raw(&self) -> Raw {
        match self {
            Self::Some(value) => value.to_raw(),
            Self::None(marker) => marker.to_raw(),
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
