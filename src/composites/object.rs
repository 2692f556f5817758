//! Keyed structures with a fixed schema.

use crate::convert::try_construct;
use crate::raw::{Raw, RawKind, RawMap};
use crate::traits::{Construct, ValueObject, Validator};
use crate::types::{ConfigError, ErrorAccumulator, ErrorLimit, ValidationError, ValidationErrors};
use crate::validation::Validation;
use core::any::Any;
use core::fmt;
use core::ops::ControlFlow;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration of an [`ObjectValidator`].
///
/// `max_errors` works as in [`ArrayOptions`](crate::composites::ArrayOptions).
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObjectOptions {
    pub max_errors: Option<usize>,
}

impl Default for ObjectOptions {
    fn default() -> Self {
        Self { max_errors: Some(1) }
    }
}

impl ObjectOptions {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn max_errors(mut self, max_errors: usize) -> Self {
        self.max_errors = Some(max_errors);
        self
    }

    pub fn unbounded_errors(mut self) -> Self {
        self.max_errors = None;
        self
    }
}

/// Validates an object field by field, in schema order.
///
/// A field missing from the input is validated as [`Raw::Undefined`], so
/// only optional fields may be left out. Keys the schema does not name are
/// ignored.
///
/// # Examples
///
/// ```
/// use value_rail::prelude::*;
///
/// let user = ObjectValidator::new(
///     [
///         ("name", StringValidator::new(StringOptions::new().min_length(1)).unwrap().shared()),
///         ("age", IntegerValidator::new(IntegerOptions::new().min(0)).unwrap().shared()),
///     ],
///     ObjectOptions::new().unbounded_errors(),
/// )
/// .unwrap();
///
/// let vo = user.construct(&Raw::object([("name", Raw::from("Ada")), ("age", 36.into())])).unwrap();
/// assert_eq!(vo.field::<IntegerValue>("age").map(|age| age.get()), Some(36));
///
/// let errors = user.construct(&Raw::object([("name", Raw::from("")), ("age", (-1).into())])).unwrap_err();
/// assert_eq!(errors.paths(), ["name", "age"]);
/// ```
#[derive(Debug, Clone)]
pub struct ObjectValidator {
    fields: Vec<(String, Validator)>,
    options: ObjectOptions,
    limit: ErrorLimit,
}

impl ObjectValidator {
    pub fn new<I, K>(fields: I, options: ObjectOptions) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (K, Validator)>,
        K: Into<String>,
    {
        let mut schema: Vec<(String, Validator)> = Vec::new();
        for (name, validator) in fields {
            let name = name.into();
            if schema.iter().any(|(existing, _)| *existing == name) {
                return Err(ConfigError::DuplicateField { field: name });
            }
            schema.push((name, validator));
        }
        let limit = match options.max_errors {
            Some(max) => ErrorLimit::at_most(max)?,
            None => ErrorLimit::Unbounded,
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(fields = schema.len(), ?options, "object validator created");

        Ok(Self { fields: schema, options, limit })
    }

    /// Field names in schema order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    /// The validator registered for `name`.
    pub fn field(&self, name: &str) -> Option<&Validator> {
        self.fields.iter().find(|(field, _)| field == name).map(|(_, validator)| validator)
    }

    #[inline]
    pub fn options(&self) -> &ObjectOptions {
        &self.options
    }

    #[inline]
    pub fn limit(&self) -> ErrorLimit {
        self.limit
    }
}

impl Construct for ObjectValidator {
    type Output = ObjectValue;
    type Error = ValidationErrors;

    fn construct(&self, raw: &Raw) -> Result<ObjectValue, ValidationErrors> {
        if raw.as_object().is_none() {
            return Err(ValidationError::raw_type(RawKind::Object, raw.kind()).into());
        }

        let mut errors = ErrorAccumulator::new(self.limit);
        let mut fields = Vec::with_capacity(self.fields.len());

        for (name, validator) in &self.fields {
            match try_construct(validator, raw.member(name)) {
                Validation::Valid(value) => fields.push((name.clone(), value)),
                Validation::Invalid(field_errors) => {
                    if let ControlFlow::Break(()) = errors.push_located(name.as_str(), field_errors) {
                        #[cfg(feature = "tracing")]
                        tracing::trace!(field = %name, limit = ?self.limit, "object error limit reached");
                        break;
                    }
                },
            }
        }

        errors.finish(ObjectValue { fields })
    }
}

/// A validated object: one value object per schema field, in schema order.
pub struct ObjectValue {
    fields: Vec<(String, Box<dyn ValueObject>)>,
}

impl ObjectValue {
    /// The value object constructed for `name`.
    pub fn get(&self, name: &str) -> Option<&dyn ValueObject> {
        self.fields.iter().find(|(field, _)| field == name).map(|(_, value)| value.as_ref())
    }

    /// Typed access to a field; `None` if the field is absent or of another type.
    pub fn field<T: ValueObject>(&self, name: &str) -> Option<&T> {
        self.get(name)?.downcast_ref::<T>()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &dyn ValueObject)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value.as_ref()))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl ValueObject for ObjectValue {
    fn to_raw(&self) -> Raw {
        let mut map = RawMap::new();
        for (name, value) in &self.fields {
            let raw = value.to_raw();
            if !raw.is_undefined() {
                map.insert(name.clone(), raw);
            }
        }
        Raw::Object(map)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl fmt::Debug for ObjectValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (name, value) in &self.fields {
            map.entry(name, value);
        }
        map.finish()
    }
}
