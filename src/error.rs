use std::path::PathBuf;

use doxygen_filter_core::FilterError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Input file not found: '{path}'")]
    InputNotFound { path: PathBuf },

    #[error("Failed to read '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error while filtering {input}: {source}")]
    Stream {
        input: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration file '{path}': {source}")]
    ConfigFile {
        path: PathBuf,
        #[source]
        source: FilterError,
    },

    #[error("Unsupported configuration format '{path}' (expected .json, .yaml or .yml)")]
    UnsupportedConfigFormat { path: PathBuf },

    #[error(transparent)]
    Filter(#[from] FilterError),

    #[error("Invalid run configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, AppError>;
