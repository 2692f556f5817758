//! Ready-made validators for common domain values.
//!
//! Each type here is a fixed configuration of a primitive validator. Their
//! options are hardcoded and known to be valid, so they are built with
//! `new()` (or `Default`) instead of returning a `Result`.
//!
//! [`Email`] and [`Percentage`] produce their own value objects, which wrap
//! the primitive value and add domain accessors.
//!
//! # Examples
//!
//! ```
//! use value_rail::library::{Email, Percentage};
//! use value_rail::prelude::*;
//!
//! let email = Email::new().construct(&Raw::from("  ada@example.com ")).unwrap();
//! assert_eq!(email.host(), "example.com");
//!
//! let share = Percentage::new().construct(&Raw::from(12.5)).unwrap();
//! assert_eq!(share.as_fraction(), 0.125);
//! ```

use crate::primitives::{
    FloatOptions, FloatValidator, FloatValue, Rounding, StringOptions, StringValidator, StringValue,
};
use crate::raw::Raw;
use crate::traits::{Construct, ValueObject};
use crate::types::{ErrorKind, ValidationError};
use core::any::Any;
use core::fmt;

macro_rules! string_validator {
    ($(#[$meta:meta])* $name:ident, $options:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        pub struct $name {
            validator: StringValidator,
        }

        impl $name {
            pub fn new() -> Self {
                let validator = StringValidator::new($options)
                    .expect(concat!("hardcoded ", stringify!($name), " options are valid"));
                Self { validator }
            }

            #[inline]
            pub fn options(&self) -> &StringOptions {
                self.validator.options()
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl Construct for $name {
            type Output = StringValue;
            type Error = ValidationError;

            #[inline]
            fn construct(&self, raw: &Raw) -> Result<StringValue, ValidationError> {
                self.validator.construct(raw)
            }
        }
    };
}

string_validator!(
    /// Trimmed string of at most 256 characters.
    ShortString,
    StringOptions::new().trim(true).max_length(256)
);

string_validator!(
    /// Trimmed string of at most 4096 characters.
    MediumString,
    StringOptions::new().trim(true).max_length(4096)
);

string_validator!(
    /// Trimmed string of at most 65536 characters.
    LongString,
    StringOptions::new().trim(true).max_length(65536)
);

string_validator!(
    /// Trimmed identifier of 6 to 256 characters.
    Id,
    StringOptions::new().trim(true).min_length(6).max_length(256)
);

string_validator!(
    /// Brazilian phone number, with optional `+55` country code, area code in
    /// optional parentheses and an optional hyphen: `+55 (11) 91234-5678`.
    BrazilianPhone,
    StringOptions::new().trim(true).max_length(64).pattern(BRAZILIAN_PHONE_PATTERN)
);

const BRAZILIAN_PHONE_PATTERN: &str = r"^(\+55 ?)?\(?[1-9][0-9]\)? ?9?[0-9]{4}[- ]?[0-9]{4}$";

/// Address syntax accepted by [`Email`].
pub const EMAIL_PATTERN: &str = r"^[-!#$%&'*+/0-9=?A-Z^_`a-z{|}~]+(\.[-!#$%&'*+/0-9=?A-Z^_`a-z{|}~]+)*@[A-Za-z0-9]([A-Za-z0-9-]{0,61}[A-Za-z0-9])?(\.[A-Za-z0-9]([A-Za-z0-9-]{0,61}[A-Za-z0-9])?)*$";

/// Longest accepted local part (before the `@`).
pub const EMAIL_LOCAL_PART_MAX: usize = 64;

/// Trimmed e-mail address of at most 254 characters.
///
/// A local part longer than [`EMAIL_LOCAL_PART_MAX`] is reported as a
/// pattern mismatch.
#[derive(Debug, Clone)]
pub struct Email {
    validator: StringValidator,
}

impl Email {
    pub fn new() -> Self {
        let validator = StringValidator::new(
            StringOptions::new().trim(true).max_length(254).pattern(EMAIL_PATTERN),
        )
        .expect("hardcoded email options are valid");
        Self { validator }
    }
}

impl Default for Email {
    fn default() -> Self {
        Self::new()
    }
}

impl Construct for Email {
    type Output = EmailValue;
    type Error = ValidationError;

    fn construct(&self, raw: &Raw) -> Result<EmailValue, ValidationError> {
        let value = self.validator.construct(raw)?;
        // The pattern guarantees exactly one '@'.
        let at = value.as_str().find('@').unwrap_or_default();
        if at > EMAIL_LOCAL_PART_MAX {
            return Err(ErrorKind::PatternMismatch { pattern: EMAIL_PATTERN.to_owned() }.into());
        }
        Ok(EmailValue { value, at })
    }
}

/// A validated e-mail address.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailValue {
    value: StringValue,
    at: usize,
}

impl EmailValue {
    #[inline]
    pub fn as_str(&self) -> &str {
        self.value.as_str()
    }

    /// The part before the `@`.
    #[inline]
    pub fn local_part(&self) -> &str {
        &self.value.as_str()[..self.at]
    }

    /// The domain after the `@`.
    #[inline]
    pub fn host(&self) -> &str {
        &self.value.as_str()[self.at + 1..]
    }
}

impl ValueObject for EmailValue {
    fn to_raw(&self) -> Raw {
        self.value.to_raw()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl fmt::Display for EmailValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Number between 0 and 100, rounded to two decimals.
#[derive(Debug, Clone)]
pub struct Percentage {
    validator: FloatValidator,
}

impl Percentage {
    pub fn new() -> Self {
        let validator = FloatValidator::new(
            FloatOptions::new().min(0.0).max(100.0).precision(2).rounding(Rounding::Round),
        )
        .expect("hardcoded percentage options are valid");
        Self { validator }
    }
}

impl Default for Percentage {
    fn default() -> Self {
        Self::new()
    }
}

impl Construct for Percentage {
    type Output = PercentageValue;
    type Error = ValidationError;

    #[inline]
    fn construct(&self, raw: &Raw) -> Result<PercentageValue, ValidationError> {
        self.validator.construct(raw).map(PercentageValue)
    }
}

/// A validated percentage.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct PercentageValue(FloatValue);

impl PercentageValue {
    #[inline]
    pub fn get(self) -> f64 {
        self.0.get()
    }

    /// The percentage as a fraction of one: `12.5` becomes `0.125`.
    #[inline]
    pub fn as_fraction(self) -> f64 {
        self.0.get() / 100.0
    }
}

impl ValueObject for PercentageValue {
    fn to_raw(&self) -> Raw {
        self.0.to_raw()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl fmt::Display for PercentageValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}
