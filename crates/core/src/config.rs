use serde::{Deserialize, Serialize};

use crate::error::{FilterError, FilterResult};

/// Prefix marking internal API symbols.
pub const DEFAULT_MARKER_PREFIX: &str = "PI_";
/// Backslash followed by a newline.
pub const DEFAULT_CONTINUATION_SUFFIX: &str = "\\\n";
/// Character class allowed inside a suppressed macro's parameter list.
///
/// Parentheses are not part of it, so macros with nested parameter
/// expressions are never recognized (and never suppressed).
pub const DEFAULT_MACRO_PARAM_ALLOWED_CHARS: &str = r"[a-zA-Z0-9_,.\s]";

/// Lexical conventions the filters recognize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Symbols starting with this prefix are treated as internal API.
    pub marker_prefix: String,
    /// A line ending with this suffix continues on the next line.
    pub continuation_suffix: String,
    /// Regex fragment matching a single parameter-list character.
    pub macro_param_allowed_chars: String,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            marker_prefix: DEFAULT_MARKER_PREFIX.to_string(),
            continuation_suffix: DEFAULT_CONTINUATION_SUFFIX.to_string(),
            macro_param_allowed_chars: DEFAULT_MACRO_PARAM_ALLOWED_CHARS.to_string(),
        }
    }
}

impl FilterConfig {
    #[must_use]
    pub fn with_marker_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.marker_prefix = prefix.into();
        self
    }

    #[must_use]
    pub fn with_continuation_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.continuation_suffix = suffix.into();
        self
    }

    #[must_use]
    pub fn with_macro_param_allowed_chars(mut self, chars: impl Into<String>) -> Self {
        self.macro_param_allowed_chars = chars.into();
        self
    }

    /// Checks that every field is usable for building filters.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidConfiguration`] when a field is empty.
    pub fn validate(&self) -> FilterResult<()> {
        let empty_field = [
            ("marker_prefix", &self.marker_prefix),
            ("continuation_suffix", &self.continuation_suffix),
            ("macro_param_allowed_chars", &self.macro_param_allowed_chars),
        ]
        .into_iter()
        .find(|(_, value)| value.is_empty());

        match empty_field {
            Some((field, _)) => Err(FilterError::InvalidConfiguration {
                reason: format!("{field} must not be empty"),
            }),
            None => Ok(()),
        }
    }

    /// Parses a configuration from JSON. Missing fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::ConfigParse`] on malformed input and
    /// [`FilterError::InvalidConfiguration`] when validation fails.
    pub fn from_json_str(input: &str) -> FilterResult<Self> {
        let config: Self = serde_json::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    /// Parses a configuration from YAML. Missing fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::ConfigParse`] on malformed input and
    /// [`FilterError::InvalidConfiguration`] when validation fails.
    #[cfg(feature = "yaml")]
    pub fn from_yaml_str(input: &str) -> FilterResult<Self> {
        let config: Self = serde_yaml::from_str(input)?;
        config.validate()?;
        Ok(config)
    }
}
