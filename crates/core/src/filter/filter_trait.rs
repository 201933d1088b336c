//! Common interface of the line filters.
//!
//! A filter looks at one line at a time and decides whether to forward it
//! (possibly rewritten) or drop it. Filters may keep state between lines;
//! [`LineFilter::reset`] clears it before a new input is processed.
//!
//! # Example
//!
//! ```rust
//! use doxygen_filter_core::filter::{LineAction, LineFilter};
//!
//! struct DropBlank;
//!
//! impl LineFilter for DropBlank {
//!     fn name(&self) -> &'static str {
//!         "drop_blank"
//!     }
//!
//!     fn filter_line<'a>(&mut self, line: &'a str) -> LineAction<'a> {
//!         if line.trim().is_empty() {
//!             LineAction::Drop
//!         } else {
//!             LineAction::keep(line)
//!         }
//!     }
//! }
//!
//! let mut filter = DropBlank;
//! assert_eq!(filter.filter_line("\n"), LineAction::Drop);
//! assert_eq!(filter.filter_line("int x;\n"), LineAction::keep("int x;\n"));
//! ```

use std::borrow::Cow;

/// Outcome of filtering a single line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineAction<'a> {
    /// Emit the line. `Cow::Borrowed` means unchanged, `Cow::Owned` means rewritten.
    Forward(Cow<'a, str>),
    /// Remove the line from the output.
    Drop,
}

impl<'a> LineAction<'a> {
    /// Forward `line` unchanged.
    #[must_use]
    pub const fn keep(line: &'a str) -> Self {
        Self::Forward(Cow::Borrowed(line))
    }

    /// Forward a rewritten line.
    #[must_use]
    pub const fn rewrite(line: String) -> Self {
        Self::Forward(Cow::Owned(line))
    }

    #[must_use]
    pub const fn is_drop(&self) -> bool {
        matches!(self, Self::Drop)
    }

    #[must_use]
    pub const fn is_rewritten(&self) -> bool {
        matches!(self, Self::Forward(Cow::Owned(_)))
    }

    /// The forwarded line, or `None` if it was dropped.
    #[must_use]
    pub fn into_line(self) -> Option<Cow<'a, str>> {
        match self {
            Self::Forward(line) => Some(line),
            Self::Drop => None,
        }
    }
}

/// A single stage of the filter pipeline.
pub trait LineFilter: Send {
    /// Stable identifier used in logs.
    fn name(&self) -> &'static str;

    /// Filters one line. `line` includes its terminator when present.
    fn filter_line<'a>(&mut self, line: &'a str) -> LineAction<'a>;

    /// Clears state carried between lines.
    fn reset(&mut self) {
        // Default: stateless.
    }

    /// Whether the filter is inside a multi-line construct.
    fn in_block(&self) -> bool {
        false
    }

    /// Resets the filter and runs it over a whole sequence of lines.
    fn filter_all<S: AsRef<str>>(&mut self, lines: &[S]) -> Vec<String>
    where
        Self: Sized,
    {
        self.reset();
        lines
            .iter()
            .filter_map(|line| self.filter_line(line.as_ref()).into_line())
            .map(Cow::into_owned)
            .collect()
    }
}

impl LineFilter for Box<dyn LineFilter> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn filter_line<'a>(&mut self, line: &'a str) -> LineAction<'a> {
        (**self).filter_line(line)
    }

    fn reset(&mut self) {
        (**self).reset();
    }

    fn in_block(&self) -> bool {
        (**self).in_block()
    }
}
