use std::borrow::Cow;
use std::io::{self, BufRead, Write};

use log::trace;

use crate::config::FilterConfig;
use crate::error::FilterResult;
use crate::filter::{LineAction, LineFilter, MacroSuppressor, UnderscoreRenamer, build_filters};
use crate::stats::FilterStats;

/// How lines travel through the stages. Both modes produce identical output.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum CompositionMode {
    /// Each line passes through every stage before the next line is read.
    #[default]
    Streaming,
    /// Each stage consumes the complete output of the previous one.
    Batch,
}

/// Ordered chain of [`LineFilter`] stages.
pub struct FilterPipeline {
    stages: Vec<Box<dyn LineFilter>>,
    mode: CompositionMode,
    stats: FilterStats,
}

impl std::fmt::Debug for FilterPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilterPipeline")
            .field("stages", &self.stage_names())
            .field("mode", &self.mode)
            .field("stats", &self.stats)
            .finish()
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        let stages: Vec<Box<dyn LineFilter>> = vec![
            Box::new(MacroSuppressor::default()),
            Box::new(UnderscoreRenamer::default()),
        ];
        Self::from_filters(stages)
    }
}

impl FilterPipeline {
    /// Suppressor followed by renamer, both built from `config`.
    ///
    /// # Errors
    ///
    /// Returns an error when the configuration is invalid or a pattern fails to compile.
    pub fn new(config: &FilterConfig) -> FilterResult<Self> {
        Self::with_stages(config, true, true)
    }

    /// # Errors
    ///
    /// Returns an error when the configuration is invalid or a pattern fails to compile.
    pub fn with_stages(config: &FilterConfig, suppress: bool, rename: bool) -> FilterResult<Self> {
        Ok(Self::from_filters(build_filters(config, suppress, rename)?))
    }

    #[must_use]
    pub fn from_filters(stages: Vec<Box<dyn LineFilter>>) -> Self {
        Self {
            stages,
            mode: CompositionMode::default(),
            stats: FilterStats::new(),
        }
    }

    #[must_use]
    pub fn with_mode(mut self, mode: CompositionMode) -> Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub const fn mode(&self) -> CompositionMode {
        self.mode
    }

    /// Counters of the most recent run.
    #[must_use]
    pub const fn stats(&self) -> FilterStats {
        self.stats
    }

    #[must_use]
    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|stage| stage.name()).collect()
    }

    fn reset(&mut self) {
        for stage in &mut self.stages {
            stage.reset();
        }
        self.stats = FilterStats::new();
    }

    /// Filters `lines` using the configured [`CompositionMode`].
    pub fn filter_lines<S: AsRef<str>>(&mut self, lines: &[S]) -> Vec<String> {
        match self.mode {
            CompositionMode::Streaming => self.filter_lines_streaming(lines),
            CompositionMode::Batch => self.filter_lines_batched(lines),
        }
    }

    pub fn filter_lines_streaming<S: AsRef<str>>(&mut self, lines: &[S]) -> Vec<String> {
        self.reset();
        lines
            .iter()
            .filter_map(|line| self.push_line(line.as_ref()))
            .map(Cow::into_owned)
            .collect()
    }

    pub fn filter_lines_batched<S: AsRef<str>>(&mut self, lines: &[S]) -> Vec<String> {
        self.reset();
        self.stats.lines_read = lines.len();

        // (line, rewritten by an earlier stage)
        let mut current: Vec<(String, bool)> =
            lines.iter().map(|line| (line.as_ref().to_string(), false)).collect();

        for stage in &mut self.stages {
            let mut next = Vec::with_capacity(current.len());
            for (line, rewritten) in current {
                let was_in_block = stage.in_block();
                let action = stage.filter_line(&line);
                record_action(&mut self.stats, stage.name(), was_in_block, &action, &line);
                let replacement = match action.into_line() {
                    None => continue,
                    Some(Cow::Borrowed(_)) => None,
                    Some(Cow::Owned(new_line)) => Some(new_line),
                };
                next.push(match replacement {
                    Some(new_line) => (new_line, true),
                    None => (line, rewritten),
                });
            }
            current = next;
        }

        self.stats.lines_written = current.len();
        self.stats.lines_renamed = current.iter().filter(|(_, rewritten)| *rewritten).count();
        current.into_iter().map(|(line, _)| line).collect()
    }

    /// Filters a whole document, keeping line terminators intact.
    pub fn filter_text(&mut self, text: &str) -> String {
        let lines: Vec<&str> = text.split_inclusive('\n').collect();
        self.filter_lines(&lines).concat()
    }

    /// Like [`filter_text`](Self::filter_text), decoding invalid UTF-8 lossily.
    pub fn filter_bytes(&mut self, input: &[u8]) -> String {
        self.filter_text(&String::from_utf8_lossy(input))
    }

    /// Reads lines from `reader`, filters them and writes the survivors to `writer`.
    ///
    /// # Errors
    ///
    /// Propagates I/O errors from `reader` and `writer`; filtering itself cannot fail.
    pub fn filter_reader<R: BufRead, W: Write>(
        &mut self,
        reader: &mut R,
        writer: &mut W,
    ) -> io::Result<FilterStats> {
        match self.mode {
            CompositionMode::Streaming => {
                self.reset();
                let mut line_buf = Vec::new();
                loop {
                    line_buf.clear();
                    if reader.read_until(b'\n', &mut line_buf)? == 0 {
                        break;
                    }
                    let line = String::from_utf8_lossy(&line_buf);
                    if let Some(out) = self.push_line(&line) {
                        writer.write_all(out.as_bytes())?;
                    }
                }
            }
            CompositionMode::Batch => {
                let mut input = Vec::new();
                reader.read_to_end(&mut input)?;
                let text = String::from_utf8_lossy(&input);
                let lines: Vec<&str> = text.split_inclusive('\n').collect();
                for line in self.filter_lines_batched(&lines) {
                    writer.write_all(line.as_bytes())?;
                }
            }
        }
        writer.flush()?;
        Ok(self.stats)
    }

    /// Runs one line through every stage, updating the counters.
    fn push_line<'a>(&mut self, line: &'a str) -> Option<Cow<'a, str>> {
        self.stats.lines_read += 1;
        let mut current = Cow::Borrowed(line);

        for stage in &mut self.stages {
            let was_in_block = stage.in_block();
            let action = stage.filter_line(&current);
            record_action(&mut self.stats, stage.name(), was_in_block, &action, &current);
            let replacement = match action.into_line() {
                None => return None,
                Some(Cow::Borrowed(_)) => None,
                Some(Cow::Owned(new_line)) => Some(new_line),
            };
            if let Some(new_line) = replacement {
                current = Cow::Owned(new_line);
            }
        }

        self.stats.lines_written += 1;
        if matches!(current, Cow::Owned(_)) {
            self.stats.lines_renamed += 1;
        }
        Some(current)
    }
}

fn record_action(stats: &mut FilterStats, stage: &str, was_in_block: bool, action: &LineAction<'_>, line: &str) {
    if action.is_drop() {
        stats.lines_dropped += 1;
        if !was_in_block {
            stats.macros_suppressed += 1;
        }
        trace!("{stage}: dropped {}", line.trim_end());
    }
}

/// Removes marker-prefixed function-style macros from `lines`.
///
/// # Errors
///
/// Returns an error when `config` is invalid; the filtering itself is total.
pub fn suppress_macros<S: AsRef<str>>(lines: &[S], config: &FilterConfig) -> FilterResult<Vec<String>> {
    config.validate()?;
    Ok(MacroSuppressor::new(config)?.filter_all(lines))
}

/// Strips the trailing underscore of the first marker-prefixed call on each line.
///
/// # Errors
///
/// Returns an error when `config` is invalid; the filtering itself is total.
pub fn rename_underscored<S: AsRef<str>>(lines: &[S], config: &FilterConfig) -> FilterResult<Vec<String>> {
    config.validate()?;
    Ok(UnderscoreRenamer::new(config)?.filter_all(lines))
}

/// [`suppress_macros`] with the default `PI_` conventions.
#[must_use]
pub fn suppress_macros_default<S: AsRef<str>>(lines: &[S]) -> Vec<String> {
    MacroSuppressor::default().filter_all(lines)
}

/// [`rename_underscored`] with the default `PI_` conventions.
#[must_use]
pub fn rename_underscored_default<S: AsRef<str>>(lines: &[S]) -> Vec<String> {
    UnderscoreRenamer::default().filter_all(lines)
}

/// `rename_underscored(suppress_macros(lines))` with the default conventions.
#[must_use]
pub fn filter_default<S: AsRef<str>>(lines: &[S]) -> Vec<String> {
    rename_underscored_default(&suppress_macros_default(lines))
}
