use crate::types::{ErrorVec, ValidationError, ValidationErrors};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use smallvec::smallvec;

/// Outcome of one construction attempt: a value object or the errors that
/// prevented it.
///
/// `Validation<E, A>` is the explicit result value composites work with.
/// Unlike `Result`, the failure side is always a list, so "one error" and
/// "many errors" share a single shape and can be concatenated by collecting
/// an iterator of validations.
///
/// # Type Parameters
///
/// * `E` - The error type, [`ValidationError`] throughout this crate
/// * `A` - The success value type, usually a value object
///
/// # Examples
///
/// ```
/// use value_rail::validation::Validation;
///
/// let valid = Validation::<&str, i32>::valid(42);
/// assert!(valid.is_valid());
///
/// let invalid = Validation::<&str, i32>::invalid("error");
/// assert!(invalid.is_invalid());
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, PartialEq, Debug)]
pub enum Validation<E, A> {
    Valid(A),
    Invalid(ErrorVec<E>),
}

impl<E, A> Validation<E, A> {
    /// Creates a valid value.
    #[must_use]
    #[inline]
    pub fn valid(value: A) -> Self {
        Self::Valid(value)
    }

    /// Creates an invalid value from a single error.
    ///
    /// # Examples
    ///
    /// ```
    /// use value_rail::validation::Validation;
    ///
    /// let v = Validation::<&str, ()>::invalid("missing field");
    /// assert!(v.is_invalid());
    /// ```
    #[must_use]
    #[inline]
    pub fn invalid(error: E) -> Self {
        Self::Invalid(smallvec![error])
    }

    #[must_use]
    #[inline]
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    #[must_use]
    #[inline]
    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    /// Maps the valid value using the provided function.
    ///
    /// If the validation is invalid, the errors are preserved unchanged.
    #[must_use]
    #[inline]
    pub fn map<B, F>(self, f: F) -> Validation<E, B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Self::Valid(value) => Validation::Valid(f(value)),
            Self::Invalid(errors) => Validation::Invalid(errors),
        }
    }

    /// Iterates over the accumulated errors. Empty when valid.
    #[inline]
    pub fn iter_errors(&self) -> core::slice::Iter<'_, E> {
        match self {
            Self::Valid(_) => [].iter(),
            Self::Invalid(errors) => errors.iter(),
        }
    }

    /// Extracts the error list, if any.
    #[must_use]
    #[inline]
    pub fn into_errors(self) -> Option<ErrorVec<E>> {
        match self {
            Self::Valid(_) => None,
            Self::Invalid(errors) => Some(errors),
        }
    }

    /// Extracts the value, if valid.
    #[must_use]
    #[inline]
    pub fn into_value(self) -> Option<A> {
        match self {
            Self::Valid(value) => Some(value),
            Self::Invalid(_) => None,
        }
    }
}

impl<A> Validation<ValidationError, A> {
    /// Converts into a `Result` whose error side is a [`ValidationErrors`] list.
    #[must_use]
    #[inline]
    pub fn into_result(self) -> Result<A, ValidationErrors> {
        match self {
            Self::Valid(value) => Ok(value),
            Self::Invalid(errors) => Err(ValidationErrors::from(errors)),
        }
    }
}

/// Collects validations into one, keeping every value on success and every
/// error, in order, on failure.
impl<E, A, C> FromIterator<Validation<E, A>> for Validation<E, C>
where
    C: FromIterator<A>,
{
    fn from_iter<I: IntoIterator<Item = Validation<E, A>>>(iter: I) -> Self {
        let mut values = Vec::new();
        let mut errors: ErrorVec<E> = ErrorVec::new();

        for validation in iter {
            match validation {
                Validation::Valid(value) => values.push(value),
                Validation::Invalid(es) => errors.extend(es),
            }
        }

        if errors.is_empty() {
            Validation::Valid(values.into_iter().collect())
        } else {
            Validation::Invalid(errors)
        }
    }
}
