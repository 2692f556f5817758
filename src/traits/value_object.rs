use crate::raw::Raw;
use core::any::Any;
use core::fmt::Debug;

/// The result of successfully validating one raw value.
///
/// A value object is immutable and exposes one operation of its own:
/// unwrapping back to the raw representation. Re-validating that raw value
/// with the validator that produced the object yields an equal object.
///
/// `as_any` exists so erased value objects (object fields, union members)
/// can be downcast to their concrete type; implementations return `self`.
pub trait ValueObject: Debug + Send + Sync + 'static {
    /// Unwraps to the underlying raw representation.
    fn to_raw(&self) -> Raw;

    fn as_any(&self) -> &dyn Any;
}

impl dyn ValueObject {
    /// Downcasts an erased value object to its concrete type.
    #[inline]
    pub fn downcast_ref<T: ValueObject>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }

    #[inline]
    pub fn is<T: ValueObject>(&self) -> bool {
        self.as_any().is::<T>()
    }
}

impl ValueObject for Box<dyn ValueObject> {
    #[inline]
    fn to_raw(&self) -> Raw {
        (**self).to_raw()
    }

    #[inline]
    fn as_any(&self) -> &dyn Any {
        (**self).as_any()
    }
}
