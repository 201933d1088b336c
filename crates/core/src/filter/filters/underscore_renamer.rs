//! # Underscore Renamer
//!
//! Rewrites the first `PREFIX<alnum>+_(` on each line to `PREFIX<alnum>+(`,
//! so that the real function behind a public macro is documented under the
//! public name. Everything else on the line is left as is.

use log::trace;
use regex::Regex;

use crate::config::FilterConfig;
use crate::error::FilterResult;
use crate::filter::filter_trait::{LineAction, LineFilter};
use crate::filter::patterns;

/// Stateless filter stripping the trailing underscore from internal names.
#[derive(Debug, Clone)]
pub struct UnderscoreRenamer {
    pattern: Regex,
}

impl Default for UnderscoreRenamer {
    fn default() -> Self {
        Self {
            pattern: patterns::default_trailing_underscore().clone(),
        }
    }
}

impl LineFilter for UnderscoreRenamer {
    fn name(&self) -> &'static str {
        "underscore_renamer"
    }

    fn filter_line<'a>(&mut self, line: &'a str) -> LineAction<'a> {
        self.rename(line)
    }
}

impl UnderscoreRenamer {
    /// # Errors
    ///
    /// Returns an error if the pattern built from `config` does not compile.
    pub fn new(config: &FilterConfig) -> FilterResult<Self> {
        Ok(Self {
            pattern: patterns::trailing_underscore(config)?,
        })
    }

    #[must_use]
    pub fn rename<'a>(&self, line: &'a str) -> LineAction<'a> {
        let Some(name_end) = self
            .pattern
            .captures(line)
            .and_then(|caps| caps.get(1))
            .map(|name| name.end())
        else {
            return LineAction::keep(line);
        };

        // `name_end` points at the underscore; the byte after it is `(`.
        let mut renamed = String::with_capacity(line.len() - 1);
        renamed.push_str(&line[..name_end]);
        renamed.push_str(&line[name_end + 1..]);
        trace!("renamed: {}", renamed.trim_end());
        LineAction::rewrite(renamed)
    }
}
