use thiserror::Error;

/// Errors raised while building filters from a [`FilterConfig`](crate::FilterConfig).
///
/// Filtering itself never fails: every line is either forwarded or dropped.
#[derive(Debug, Error)]
pub enum FilterError {
    #[error("Invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },

    #[error("Invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: Box<regex::Error>,
    },

    #[error("Failed to parse {format} configuration: {details}")]
    ConfigParse { format: String, details: String },
}

pub type FilterResult<T> = std::result::Result<T, FilterError>;

impl From<serde_json::Error> for FilterError {
    fn from(err: serde_json::Error) -> Self {
        Self::ConfigParse {
            format: "JSON".to_string(),
            details: err.to_string(),
        }
    }
}

#[cfg(feature = "yaml")]
impl From<serde_yaml::Error> for FilterError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::ConfigParse {
            format: "YAML".to_string(),
            details: err.to_string(),
        }
    }
}
