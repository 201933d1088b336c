use std::path::Path;

use derive_builder::Builder;
use doxygen_filter_core::{CompositionMode, FilterConfig};
use log::LevelFilter;

use crate::error::{AppError, Result};
use crate::persistence::{FileReader, InputSource, OutputSink};

/// Everything a single filter run needs.
#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct RunConfig {
    #[builder(default)]
    pub input: InputSource,
    #[builder(default)]
    pub output: OutputSink,
    #[builder(default)]
    pub filter: FilterConfig,
    #[builder(default = "true")]
    pub suppress: bool,
    #[builder(default = "true")]
    pub rename: bool,
    #[builder(default)]
    pub mode: CompositionMode,
    #[builder(default)]
    pub print_stats: bool,
    #[builder(default = "LevelFilter::Warn")]
    pub log_level: LevelFilter,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            input: InputSource::default(),
            output: OutputSink::default(),
            filter: FilterConfig::default(),
            suppress: true,
            rename: true,
            mode: CompositionMode::default(),
            print_stats: false,
            log_level: LevelFilter::Warn,
        }
    }
}

impl From<RunConfigBuilderError> for AppError {
    fn from(err: RunConfigBuilderError) -> Self {
        Self::Config(err.to_string())
    }
}

/// Load a [`FilterConfig`] from a `.json`, `.yaml` or `.yml` file.
///
/// # Errors
///
/// Returns an error if the file cannot be read, has an unknown extension,
/// or does not describe a valid configuration.
pub fn load_filter_config(path: &Path) -> Result<FilterConfig> {
    let ext = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    let parse: fn(&str) -> doxygen_filter_core::FilterResult<FilterConfig> = match ext.as_str() {
        "json" => FilterConfig::from_json_str,
        "yaml" | "yml" => FilterConfig::from_yaml_str,
        _ => {
            return Err(AppError::UnsupportedConfigFormat {
                path: path.to_path_buf(),
            });
        }
    };

    let text = FileReader::read_to_string(path)?;
    parse(&text).map_err(|source| AppError::ConfigFile {
        path: path.to_path_buf(),
        source,
    })
}
