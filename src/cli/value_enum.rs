use clap::ValueEnum;
use doxygen_filter_core::CompositionMode;

#[derive(Clone, Copy, Debug, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum CliCompositionMode {
    Streaming,
    Batch,
}

impl From<CliCompositionMode> for CompositionMode {
    fn from(value: CliCompositionMode) -> Self {
        match value {
            CliCompositionMode::Streaming => Self::Streaming,
            CliCompositionMode::Batch => Self::Batch,
        }
    }
}
