//! Error list formatting utilities.

use crate::types::{ValidationError, ValidationErrors};
use core::fmt::{Display, Write};

/// Trait for customizing how a list of validation errors is rendered.
pub trait ErrorFormatter {
    fn format_item(&self, error: &ValidationError) -> String {
        error.to_string()
    }

    fn separator(&self) -> &str {
        "; "
    }

    fn format_errors<'a>(&self, errors: impl Iterator<Item = &'a ValidationError>) -> String {
        errors.map(|error| self.format_item(error)).collect::<Vec<_>>().join(self.separator())
    }
}

/// Configuration-based error formatter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorFormatConfig {
    pub separator: String,
    pub item_prefix: Option<String>,
    pub last_prefix: Option<String>,
    pub item_suffix: Option<String>,
    pub path_separator: String,
    pub multiline: bool,
    pub show_path: bool,
    pub show_code: bool,
}

impl Default for ErrorFormatConfig {
    fn default() -> Self {
        Self {
            separator: "; ".into(),
            item_prefix: None,
            last_prefix: None,
            item_suffix: None,
            path_separator: ": ".into(),
            multiline: false,
            show_path: true,
            show_code: false,
        }
    }
}

impl ErrorFormatConfig {
    /// One error per line, drawn as a tree.
    #[inline]
    pub fn pretty() -> Self {
        Self {
            separator: "\n".into(),
            item_prefix: Some("├─ ".into()),
            last_prefix: Some("└─ ".into()),
            multiline: true,
            ..Default::default()
        }
    }

    #[inline]
    pub fn compact() -> Self {
        Self { separator: " | ".into(), ..Default::default() }
    }

    #[inline]
    pub fn no_path() -> Self {
        Self { show_path: false, ..Default::default() }
    }

    #[inline]
    pub fn with_codes() -> Self {
        Self { show_code: true, ..Default::default() }
    }
}

impl ErrorFormatter for ErrorFormatConfig {
    fn format_item(&self, error: &ValidationError) -> String {
        let mut result = String::new();
        if self.show_path && !error.path().is_root() {
            let _ = write!(result, "{}{}", error.path(), self.path_separator);
        }
        let _ = write!(result, "{}", error.kind());
        if self.show_code {
            let _ = write!(result, " [{}]", error.code());
        }
        if let Some(suffix) = &self.item_suffix {
            result.push_str(suffix);
        }
        result
    }

    fn separator(&self) -> &str {
        &self.separator
    }

    fn format_errors<'a>(&self, errors: impl Iterator<Item = &'a ValidationError>) -> String {
        let items: Vec<_> = errors.collect();
        if items.is_empty() {
            return String::new();
        }

        let last_idx = items.len() - 1;
        let mut result = String::with_capacity(items.len() * 32);

        if self.multiline && self.item_prefix.is_some() {
            result.push_str(&format!("┌ {} error(s)", items.len()));
        }

        for (i, item) in items.iter().enumerate() {
            if i > 0 || (self.multiline && self.item_prefix.is_some()) {
                result.push_str(&self.separator);
            }

            let prefix = if i == last_idx {
                self.last_prefix.as_ref().or(self.item_prefix.as_ref())
            } else {
                self.item_prefix.as_ref()
            };
            if let Some(p) = prefix {
                result.push_str(p);
            }

            result.push_str(&self.format_item(item));
        }
        result
    }
}

/// Builder for customizing error list display output.
pub struct ErrorFormatBuilder<'a> {
    pub(crate) errors: &'a ValidationErrors,
    pub(crate) config: ErrorFormatConfig,
}

impl<'a> ErrorFormatBuilder<'a> {
    pub fn new(errors: &'a ValidationErrors) -> Self {
        Self { errors, config: ErrorFormatConfig::default() }
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.config.separator = separator.into();
        self
    }

    pub fn show_path(mut self, show: bool) -> Self {
        self.config.show_path = show;
        self
    }

    pub fn show_code(mut self, show: bool) -> Self {
        self.config.show_code = show;
        self
    }

    pub fn pretty(mut self) -> Self {
        self.config = ErrorFormatConfig::pretty();
        self
    }

    pub fn compact(mut self) -> Self {
        self.config = ErrorFormatConfig::compact();
        self
    }
}

impl Display for ErrorFormatBuilder<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.config.format_errors(self.errors.iter()))
    }
}
