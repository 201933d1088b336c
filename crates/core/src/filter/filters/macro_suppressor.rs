//! # Macro Suppressor
//!
//! Drops function-style macro definitions whose name starts with the marker
//! prefix, together with all of their continuation lines.
//!
//! ```text
//! int i;                          <- forwarded
//! #define PI_Write(f, ...) \      <- dropped, enters Suppressing
//!     PI_Write_(__FILE__, f, \    <- dropped
//!               __VA_ARGS__)      <- dropped, back to Passing
//! void foo(int c);                <- forwarded
//! ```
//!
//! Object-like macros (`#define PI_MAX 8`) and macros whose parameter list
//! contains characters outside the configured allowlist are forwarded.
//!
//! ## Usage Example
//!
//! ```rust
//! use doxygen_filter_core::filter::{LineFilter, MacroSuppressor};
//!
//! let mut suppressor = MacroSuppressor::default();
//! let out = suppressor.filter_all(&["int i;\n", "#define PI_foo(a) \\\n", "  a;\n", "int j;\n"]);
//! assert_eq!(out, ["int i;\n", "int j;\n"]);
//! ```

use log::debug;
use regex::Regex;

use crate::config::{DEFAULT_CONTINUATION_SUFFIX, FilterConfig};
use crate::error::FilterResult;
use crate::filter::filter_trait::{LineAction, LineFilter};
use crate::filter::patterns;

/// Where the suppressor is relative to a macro body.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum SuppressionState {
    /// Outside any suppressed macro; lines are forwarded.
    #[default]
    Passing,
    /// Inside a suppressed macro body; lines are dropped.
    Suppressing,
}

/// Stateful filter removing marker-prefixed function-style macros.
#[derive(Debug, Clone)]
pub struct MacroSuppressor {
    macro_start: Regex,
    continuation_suffix: String,
    crlf_suffix: Option<String>,
    state: SuppressionState,
}

impl Default for MacroSuppressor {
    fn default() -> Self {
        Self {
            macro_start: patterns::default_macro_start().clone(),
            crlf_suffix: crlf_variant(DEFAULT_CONTINUATION_SUFFIX),
            continuation_suffix: DEFAULT_CONTINUATION_SUFFIX.to_string(),
            state: SuppressionState::Passing,
        }
    }
}

impl LineFilter for MacroSuppressor {
    fn name(&self) -> &'static str {
        "macro_suppressor"
    }

    fn filter_line<'a>(&mut self, line: &'a str) -> LineAction<'a> {
        self.process(line)
    }

    fn reset(&mut self) {
        self.state = SuppressionState::Passing;
    }

    fn in_block(&self) -> bool {
        self.state == SuppressionState::Suppressing
    }
}

impl MacroSuppressor {
    /// # Errors
    ///
    /// Returns an error if the macro-start pattern built from `config` does not compile.
    pub fn new(config: &FilterConfig) -> FilterResult<Self> {
        Ok(Self {
            macro_start: patterns::macro_start(config)?,
            continuation_suffix: config.continuation_suffix.clone(),
            crlf_suffix: crlf_variant(&config.continuation_suffix),
            state: SuppressionState::Passing,
        })
    }

    #[must_use]
    pub const fn state(&self) -> SuppressionState {
        self.state
    }

    pub fn process<'a>(&mut self, line: &'a str) -> LineAction<'a> {
        if self.state == SuppressionState::Passing {
            if !self.macro_start.is_match(line) {
                return LineAction::keep(line);
            }
            debug!("suppressing macro definition: {}", line.trim_end());
        }

        // The line is dropped either way; only a continuation keeps us inside the body.
        self.state = if self.continues(line) {
            SuppressionState::Suppressing
        } else {
            SuppressionState::Passing
        };
        LineAction::Drop
    }

    fn continues(&self, line: &str) -> bool {
        line.ends_with(&self.continuation_suffix)
            || self.crlf_suffix.as_deref().is_some_and(|suffix| line.ends_with(suffix))
    }
}

/// A suffix ending in `\n` also matches the same suffix ending in `\r\n`.
fn crlf_variant(suffix: &str) -> Option<String> {
    suffix
        .strip_suffix('\n')
        .filter(|stem| !stem.ends_with('\r'))
        .map(|stem| format!("{stem}\r\n"))
}
