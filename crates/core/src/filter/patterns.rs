//! Regex construction for the filters.

use std::sync::OnceLock;

use regex::Regex;

use crate::config::FilterConfig;
use crate::error::{FilterError, FilterResult};

/// Pattern recognizing the first line of a function-style macro definition.
///
/// Matched from the start of the line only; whatever follows the closing
/// parenthesis is irrelevant.
#[must_use]
pub fn macro_start_source(config: &FilterConfig) -> String {
    format!(
        r"^\s*#define\s+{}\w+\((?:{})*\)",
        regex::escape(&config.marker_prefix),
        config.macro_param_allowed_chars
    )
}

/// Pattern capturing `<prefix up to identifier>` `_` `(`.
///
/// The lazy prefix makes the first occurrence on the line win.
#[must_use]
pub fn trailing_underscore_source(config: &FilterConfig) -> String {
    format!(
        r"^(.*?{}[a-zA-Z0-9]+)_(\()",
        regex::escape(&config.marker_prefix)
    )
}

/// # Errors
///
/// Returns [`FilterError::InvalidPattern`] if the allowlist fragment is not valid regex syntax.
pub fn macro_start(config: &FilterConfig) -> FilterResult<Regex> {
    compile(macro_start_source(config))
}

/// # Errors
///
/// Returns [`FilterError::InvalidPattern`] if the pattern fails to compile.
pub fn trailing_underscore(config: &FilterConfig) -> FilterResult<Regex> {
    compile(trailing_underscore_source(config))
}

pub(crate) fn default_macro_start() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(&macro_start_source(&FilterConfig::default())).unwrap())
}

pub(crate) fn default_trailing_underscore() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(&trailing_underscore_source(&FilterConfig::default())).unwrap())
}

fn compile(pattern: String) -> FilterResult<Regex> {
    Regex::new(&pattern).map_err(|source| FilterError::InvalidPattern {
        pattern,
        source: Box::new(source),
    })
}
