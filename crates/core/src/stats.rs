/// Line counters collected over one pipeline run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FilterStats {
    /// Lines read from the input.
    pub lines_read: usize,
    /// Lines written to the output.
    pub lines_written: usize,
    /// Lines removed by any stage.
    pub lines_dropped: usize,
    /// Macro definitions removed (each may span several lines).
    pub macros_suppressed: usize,
    /// Lines forwarded with a rewritten name.
    pub lines_renamed: usize,
}

impl FilterStats {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl std::fmt::Display for FilterStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "read={} written={} dropped={} macros={} renamed={}",
            self.lines_read,
            self.lines_written,
            self.lines_dropped,
            self.macros_suppressed,
            self.lines_renamed
        )
    }
}
