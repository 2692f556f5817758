//! Shorthand for building paths and object schemas.
//!
//! - [`macro@crate::path`] builds a [`Path`](crate::types::Path) from its segments.
//! - [`macro@crate::schema`] builds an [`ObjectValidator`](crate::composites::ObjectValidator)
//!   from `"field" => validator` pairs, erasing each validator on the way.
//!
//! # Examples
//!
//! ```
//! use value_rail::prelude::*;
//! use value_rail::{path, schema};
//!
//! let address = schema! {
//!     "street" => StringValidator::new(StringOptions::new().min_length(1)).unwrap(),
//!     "number" => IntegerValidator::new(IntegerOptions::new().min(1)).unwrap(),
//! }
//! .unwrap();
//! let users = ArrayValidator::new(
//!     schema! { "address" => address }.unwrap(),
//!     ArrayOptions::new(),
//! )
//! .unwrap();
//!
//! let raw = Raw::array([Raw::object([(
//!     "address",
//!     Raw::object([("street", Raw::from("Main")), ("number", 0.into())]),
//! )])]);
//! let errors = users.construct(&raw).unwrap_err();
//! assert_eq!(errors[0].path(), &path![0usize, "address", "number"]);
//! ```

/// Builds a [`Path`](crate::types::Path) from keys and indices, outermost first.
///
/// Index segments must be `usize` values.
///
/// # Examples
///
/// ```
/// use value_rail::path;
///
/// assert_eq!(path!["users", 2usize, "email"].to_string(), "users[2].email");
/// assert!(path![].is_root());
/// ```
#[macro_export]
macro_rules! path {
    () => {
        $crate::types::Path::root()
    };
    ($($segment:expr),+ $(,)?) => {{
        let mut path = $crate::types::Path::root();
        $( path.push($crate::types::PathSegment::from($segment)); )+
        path
    }};
}

/// Builds an [`ObjectValidator`](crate::composites::ObjectValidator) from
/// `"field" => validator` pairs, in declaration order.
///
/// An [`ObjectOptions`](crate::composites::ObjectOptions) value may be given
/// first, followed by `;`. Evaluates to `Result<ObjectValidator, ConfigError>`.
///
/// # Examples
///
/// ```
/// use value_rail::prelude::*;
/// use value_rail::schema;
///
/// let login = schema! {
///     ObjectOptions::new().max_errors(2);
///     "user" => StringValidator::new(StringOptions::new().min_length(3)).unwrap(),
///     "password" => StringValidator::new(StringOptions::new().min_length(8)).unwrap(),
/// }
/// .unwrap();
///
/// let errors = login.construct(&Raw::object([("user", "al")])).unwrap_err();
/// assert_eq!(errors.paths(), ["user", "password"]);
/// ```
#[macro_export]
macro_rules! schema {
    ($options:expr; $($field:expr => $validator:expr),+ $(,)?) => {
        $crate::composites::ObjectValidator::new(
            [$(($field, $crate::traits::Validator::new($validator))),+],
            $options,
        )
    };
    ($($field:expr => $validator:expr),+ $(,)?) => {
        $crate::schema!($crate::composites::ObjectOptions::default(); $($field => $validator),+)
    };
}
