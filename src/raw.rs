//! Untrusted raw input.
//!
//! Every validator reads a [`Raw`] value. The variant is decided once, at the
//! boundary where external data enters the crate (a parsed JSON body, a form,
//! a hand-built fixture), and validators only ever branch on [`Raw::kind`].
//!
//! # Examples
//!
//! ```
//! use value_rail::raw::{Raw, RawKind};
//!
//! let raw = Raw::object([("name", Raw::from("ada")), ("age", Raw::from(36))]);
//! assert_eq!(raw.kind(), RawKind::Object);
//! assert_eq!(raw.as_object().unwrap()["age"].as_f64(), Some(36.0));
//! ```
use core::fmt;
use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Keyed raw structure. Keys are sorted, so two raw objects with the same
/// members always compare and print identically.
pub type RawMap = BTreeMap<String, Raw>;

/// A raw value that has not been validated yet.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Raw {
    /// No value at all, e.g. a property missing from an object.
    #[default]
    Undefined,
    /// An explicit null.
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Array(Vec<Raw>),
    Object(RawMap),
}

/// The primitive kind of a [`Raw`] value.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RawKind {
    Undefined,
    Null,
    Boolean,
    Number,
    String,
    Array,
    Object,
}

impl RawKind {
    /// Lowercase name, as used in error messages.
    #[inline]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Undefined => "undefined",
            Self::Null => "null",
            Self::Boolean => "boolean",
            Self::Number => "number",
            Self::String => "string",
            Self::Array => "array",
            Self::Object => "object",
        }
    }
}

impl fmt::Display for RawKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw values an optional validator may treat as "no value".
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoneMarker {
    Undefined,
    Null,
}

impl NoneMarker {
    /// Returns the marker matching `raw`, if `raw` is an absence marker.
    #[inline]
    pub fn from_raw(raw: &Raw) -> Option<Self> {
        match raw {
            Raw::Undefined => Some(Self::Undefined),
            Raw::Null => Some(Self::Null),
            _ => None,
        }
    }

    #[inline]
    pub fn kind(self) -> RawKind {
        match self {
            Self::Undefined => RawKind::Undefined,
            Self::Null => RawKind::Null,
        }
    }

    #[inline]
    pub fn to_raw(self) -> Raw {
        match self {
            Self::Undefined => Raw::Undefined,
            Self::Null => Raw::Null,
        }
    }
}

impl Raw {
    #[inline]
    pub fn string(value: impl Into<String>) -> Self {
        Self::String(value.into())
    }

    #[inline]
    pub fn number(value: impl Into<f64>) -> Self {
        Self::Number(value.into())
    }

    /// Builds a raw array from anything convertible into raw values.
    pub fn array<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Raw>,
    {
        Self::Array(items.into_iter().map(Into::into).collect())
    }

    /// Builds a raw object from `(key, value)` pairs.
    pub fn object<I, K, V>(members: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Raw>,
    {
        Self::Object(members.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }

    /// Returns the primitive kind of this value.
    #[inline]
    pub fn kind(&self) -> RawKind {
        match self {
            Self::Undefined => RawKind::Undefined,
            Self::Null => RawKind::Null,
            Self::Bool(_) => RawKind::Boolean,
            Self::Number(_) => RawKind::Number,
            Self::String(_) => RawKind::String,
            Self::Array(_) => RawKind::Array,
            Self::Object(_) => RawKind::Object,
        }
    }

    #[inline]
    pub fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined)
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    #[inline]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    #[inline]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    #[inline]
    pub fn as_array(&self) -> Option<&[Raw]> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    #[inline]
    pub fn as_object(&self) -> Option<&RawMap> {
        match self {
            Self::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Looks up an object member, yielding `Undefined` for missing keys and
    /// for non-object values.
    pub fn member(&self, key: &str) -> &Raw {
        static UNDEFINED: Raw = Raw::Undefined;
        self.as_object().and_then(|map| map.get(key)).unwrap_or(&UNDEFINED)
    }
}

impl fmt::Display for Raw {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undefined => f.write_str("undefined"),
            Self::Null => f.write_str("null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::String(s) => write!(f, "{s:?}"),
            Self::Array(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            },
            Self::Object(map) => {
                f.write_str("{")?;
                for (i, (key, value)) in map.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key:?}: {value}")?;
                }
                f.write_str("}")
            },
        }
    }
}

impl From<&str> for Raw {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<String> for Raw {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<bool> for Raw {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for Raw {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<f32> for Raw {
    fn from(value: f32) -> Self {
        Self::Number(value.into())
    }
}

impl From<i32> for Raw {
    fn from(value: i32) -> Self {
        Self::Number(value.into())
    }
}

impl From<u32> for Raw {
    fn from(value: u32) -> Self {
        Self::Number(value.into())
    }
}

/// Magnitudes beyond 2^53 round to the nearest representable `f64`.
impl From<i64> for Raw {
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

/// Magnitudes beyond 2^53 round to the nearest representable `f64`.
impl From<usize> for Raw {
    fn from(value: usize) -> Self {
        Self::Number(value as f64)
    }
}

impl From<Vec<Raw>> for Raw {
    fn from(value: Vec<Raw>) -> Self {
        Self::Array(value)
    }
}

impl From<RawMap> for Raw {
    fn from(value: RawMap) -> Self {
        Self::Object(value)
    }
}

impl<T: Into<Raw>> From<Option<T>> for Raw {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

#[cfg(feature = "serde")]
mod json {
    use super::{Raw, RawMap};
    use serde_json::{Map, Number, Value};

    /// Error returned when a raw value has no JSON representation.
    #[derive(Debug, Clone, PartialEq, thiserror::Error)]
    pub enum RawToJsonError {
        #[error("undefined has no JSON representation")]
        Undefined,
        #[error("non-finite number {0} has no JSON representation")]
        NonFinite(f64),
    }

    impl From<Value> for Raw {
        fn from(value: Value) -> Self {
            match value {
                Value::Null => Raw::Null,
                Value::Bool(b) => Raw::Bool(b),
                Value::Number(n) => Raw::Number(n.as_f64().unwrap_or(f64::NAN)),
                Value::String(s) => Raw::String(s),
                Value::Array(items) => Raw::Array(items.into_iter().map(Raw::from).collect()),
                Value::Object(map) => {
                    Raw::Object(map.into_iter().map(|(k, v)| (k, Raw::from(v))).collect::<RawMap>())
                },
            }
        }
    }

    impl From<&Value> for Raw {
        fn from(value: &Value) -> Self {
            Raw::from(value.clone())
        }
    }

    impl TryFrom<Raw> for Value {
        type Error = RawToJsonError;

        /// Undefined object members are dropped and undefined array elements
        /// become `null`, the same way `JSON.stringify` treats them.
        fn try_from(raw: Raw) -> Result<Self, Self::Error> {
            match raw {
                Raw::Undefined => Err(RawToJsonError::Undefined),
                Raw::Null => Ok(Value::Null),
                Raw::Bool(b) => Ok(Value::Bool(b)),
                Raw::Number(n) => {
                    if n.fract() == 0.0 && n.abs() < 9_007_199_254_740_992.0 {
                        Ok(Value::Number(Number::from(n as i64)))
                    } else {
                        Number::from_f64(n).map(Value::Number).ok_or(RawToJsonError::NonFinite(n))
                    }
                },
                Raw::String(s) => Ok(Value::String(s)),
                Raw::Array(items) => items
                    .into_iter()
                    .map(|item| match item {
                        Raw::Undefined => Ok(Value::Null),
                        other => Value::try_from(other),
                    })
                    .collect::<Result<Vec<_>, _>>()
                    .map(Value::Array),
                Raw::Object(map) => {
                    let mut out = Map::new();
                    for (key, value) in map {
                        if value.is_undefined() {
                            continue;
                        }
                        out.insert(key, Value::try_from(value)?);
                    }
                    Ok(Value::Object(out))
                },
            }
        }
    }
}

#[cfg(feature = "serde")]
pub use json::RawToJsonError;

/// A primitive that can be a member of a finite set: string, number or boolean.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
#[derive(Debug, Clone, PartialEq)]
pub enum SetElement {
    Bool(bool),
    Number(f64),
    String(String),
}

impl SetElement {
    /// Reads a set element out of a raw value, if its kind can be one.
    pub fn from_raw(raw: &Raw) -> Option<Self> {
        match raw {
            Raw::Bool(b) => Some(Self::Bool(*b)),
            Raw::Number(n) => Some(Self::Number(*n)),
            Raw::String(s) => Some(Self::String(s.clone())),
            _ => None,
        }
    }

    #[inline]
    pub fn kind(&self) -> RawKind {
        match self {
            Self::Bool(_) => RawKind::Boolean,
            Self::Number(_) => RawKind::Number,
            Self::String(_) => RawKind::String,
        }
    }

    #[inline]
    pub fn to_raw(&self) -> Raw {
        match self {
            Self::Bool(b) => Raw::Bool(*b),
            Self::Number(n) => Raw::Number(*n),
            Self::String(s) => Raw::String(s.clone()),
        }
    }

    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for SetElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::String(s) => write!(f, "{s:?}"),
        }
    }
}

impl From<&str> for SetElement {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<String> for SetElement {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<bool> for SetElement {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for SetElement {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for SetElement {
    fn from(value: i32) -> Self {
        Self::Number(value.into())
    }
}
