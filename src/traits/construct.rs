use crate::convert::{can_construct, try_construct};
use crate::raw::Raw;
use crate::traits::ValueObject;
use crate::types::{ValidationError, ValidationErrors};
use crate::validation::Validation;
use core::fmt;
use std::sync::Arc;

/// A reusable, immutable rule set that turns raw input into a value object.
///
/// Primitive validators fail with a single [`ValidationError`]; composites
/// fail with a [`ValidationErrors`] list. Both convert into a list, which is
/// what [`try_construct`] hands to callers.
pub trait Construct: Send + Sync {
    type Output: ValueObject;
    type Error: Into<ValidationErrors>;

    /// Validates `raw` and builds the value object.
    fn construct(&self, raw: &Raw) -> Result<Self::Output, Self::Error>;

    /// Reports whether `raw` would be accepted, discarding the result.
    #[inline]
    fn is_valid(&self, raw: &Raw) -> bool {
        can_construct(self, raw)
    }
}

impl<V: Construct + ?Sized> Construct for &V {
    type Output = V::Output;
    type Error = V::Error;

    #[inline]
    fn construct(&self, raw: &Raw) -> Result<Self::Output, Self::Error> {
        (**self).construct(raw)
    }
}

/// Object-safe form of [`Construct`], implemented for every validator.
pub trait DynConstruct: Send + Sync {
    fn construct_dyn(&self, raw: &Raw) -> Validation<ValidationError, Box<dyn ValueObject>>;
}

impl<V: Construct> DynConstruct for V {
    fn construct_dyn(&self, raw: &Raw) -> Validation<ValidationError, Box<dyn ValueObject>> {
        try_construct(self, raw).map(|vo| Box::new(vo) as Box<dyn ValueObject>)
    }
}

/// Shared, type-erased validator handle.
///
/// Object schemas and unions mix validators of different types; they hold
/// `Validator`s. Cloning is cheap and every clone validates identically.
///
/// # Examples
///
/// ```
/// use value_rail::prelude::*;
///
/// let name = StringValidator::new(StringOptions::new().max_length(8)).unwrap().shared();
/// let vo = name.construct(&Raw::from("ada")).unwrap();
/// assert_eq!(vo.to_raw(), Raw::from("ada"));
/// assert!(vo.downcast_ref::<StringValue>().is_some());
/// ```
#[derive(Clone)]
pub struct Validator {
    inner: Arc<dyn DynConstruct>,
}

impl Validator {
    pub fn new<V: Construct + 'static>(validator: V) -> Self {
        Self { inner: Arc::new(validator) }
    }
}

impl fmt::Debug for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator").finish_non_exhaustive()
    }
}

impl Construct for Validator {
    type Output = Box<dyn ValueObject>;
    type Error = ValidationErrors;

    #[inline]
    fn construct(&self, raw: &Raw) -> Result<Self::Output, Self::Error> {
        self.inner.construct_dyn(raw).into_result()
    }
}

/// Convenience methods available on every validator.
pub trait ConstructExt: Construct + Sized + 'static {
    /// Erases the validator into a shareable [`Validator`].
    #[inline]
    fn shared(self) -> Validator {
        Validator::new(self)
    }

    /// Runs construction and normalises the outcome into a [`Validation`].
    #[inline]
    fn validate(&self, raw: &Raw) -> Validation<ValidationError, Self::Output> {
        try_construct(self, raw)
    }

    /// Wraps the validator so every construction runs inside a tracing span.
    #[cfg(feature = "tracing")]
    #[inline]
    fn traced(self, name: &'static str) -> crate::tracing_ext::Traced<Self> {
        crate::tracing_ext::Traced::new(self, name)
    }
}

impl<V: Construct + Sized + 'static> ConstructExt for V {}
