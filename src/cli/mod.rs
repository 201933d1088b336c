mod args;
mod value_enum;

pub use args::Args;
pub use value_enum::CliCompositionMode;

use crate::config::{RunConfig, RunConfigBuilder, load_filter_config};
use crate::error::Result;
use crate::logging::level_from_flags;
use crate::persistence::{InputSource, OutputSink};

/// Convert parsed CLI arguments into a run configuration.
///
/// CLI flags take precedence over the configuration file, which takes
/// precedence over the built-in defaults.
///
/// # Errors
///
/// Returns `Err` when the configuration file cannot be loaded or the
/// resulting filter configuration is invalid.
pub fn build_config(args: &Args) -> Result<RunConfig> {
    let mut filter = match &args.config {
        Some(path) => load_filter_config(path)?,
        None => doxygen_filter_core::FilterConfig::default(),
    };
    if let Some(prefix) = &args.prefix {
        filter.marker_prefix.clone_from(prefix);
    }
    filter.validate()?;

    let output = args
        .output
        .clone()
        .map_or(OutputSink::Stdout, OutputSink::File);

    let config = RunConfigBuilder::default()
        .input(InputSource::from_arg(args.input.as_deref()))
        .output(output)
        .filter(filter)
        .suppress(!args.no_suppress)
        .rename(!args.no_rename)
        .mode(args.mode)
        .print_stats(args.stats)
        .log_level(level_from_flags(args.verbose, args.quiet))
        .build()?;
    Ok(config)
}
