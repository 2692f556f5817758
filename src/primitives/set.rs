//! Membership in a fixed, finite set of primitives.

use crate::primitives::string::trim_str;
use crate::raw::{Raw, SetElement};
use crate::traits::{Construct, ValueObject};
use crate::types::{ConfigError, ErrorKind, ExpectedKinds, ValidationError};
use core::any::Any;
use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SetOptions {
    /// Trim string input before looking it up.
    pub trim: bool,
}

impl SetOptions {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }
}

/// Accepts exactly one of the configured elements.
///
/// The set may mix strings, numbers and booleans. Input whose kind matches
/// no element fails with `RawTypeMismatch` before membership is checked.
///
/// # Examples
///
/// ```
/// use value_rail::prelude::*;
///
/// let role = SetValidator::of(["Admin", "Regular"]).unwrap();
///
/// assert_eq!(role.construct(&Raw::from("Admin")).unwrap().as_str(), Some("Admin"));
/// assert_eq!(role.construct(&Raw::from("Root")).unwrap_err().code(), "not_in_set");
/// assert_eq!(role.construct(&Raw::from(1)).unwrap_err().code(), "raw_type_mismatch");
/// ```
#[derive(Debug, Clone)]
pub struct SetValidator {
    elements: Vec<SetElement>,
    kinds: ExpectedKinds,
    options: SetOptions,
}

impl SetValidator {
    pub fn new<I, T>(elements: I, options: SetOptions) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<SetElement>,
    {
        let elements: Vec<SetElement> = elements.into_iter().map(Into::into).collect();
        if elements.is_empty() {
            return Err(ConfigError::EmptySet);
        }
        for element in &elements {
            if let SetElement::Number(value) = element {
                if !value.is_finite() {
                    return Err(ConfigError::NonFiniteSetElement { value: *value });
                }
            }
        }
        let kinds: ExpectedKinds = elements.iter().map(SetElement::kind).collect();

        #[cfg(feature = "tracing")]
        tracing::debug!(elements = elements.len(), %kinds, ?options, "set validator created");

        Ok(Self { elements, kinds, options })
    }

    /// Builds a set validator with default options.
    #[inline]
    pub fn of<I, T>(elements: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<SetElement>,
    {
        Self::new(elements, SetOptions::default())
    }

    #[inline]
    pub fn elements(&self) -> &[SetElement] {
        &self.elements
    }

    /// Raw kinds present in the set.
    #[inline]
    pub fn kinds(&self) -> &ExpectedKinds {
        &self.kinds
    }

    #[inline]
    pub fn options(&self) -> &SetOptions {
        &self.options
    }
}

impl Construct for SetValidator {
    type Output = SetValue;
    type Error = ValidationError;

    fn construct(&self, raw: &Raw) -> Result<SetValue, ValidationError> {
        let actual = raw.kind();
        let value = match SetElement::from_raw(raw) {
            Some(value) if self.kinds.contains(actual) => value,
            _ => {
                return Err(ErrorKind::RawTypeMismatch { expected: self.kinds.clone(), actual }.into());
            },
        };
        let value = match value {
            SetElement::String(s) if self.options.trim => SetElement::String(trim_str(&s).to_owned()),
            other => other,
        };

        match self.elements.iter().find(|element| **element == value) {
            Some(element) => Ok(SetValue(element.clone())),
            None => Err(ErrorKind::NotInSet { allowed: self.elements.clone(), value }.into()),
        }
    }
}

/// A validated set member.
#[derive(Debug, Clone, PartialEq)]
pub struct SetValue(SetElement);

impl SetValue {
    #[inline]
    pub fn get(&self) -> &SetElement {
        &self.0
    }

    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        self.0.as_str()
    }

    #[inline]
    pub fn into_inner(self) -> SetElement {
        self.0
    }
}

impl ValueObject for SetValue {
    fn to_raw(&self) -> Raw {
        self.0.to_raw()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl fmt::Display for SetValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
