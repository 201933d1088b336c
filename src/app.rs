use std::io::{self, BufWriter, Write};

use anyhow::{Context, Result};
use doxygen_filter_core::{FilterPipeline, FilterStats};
use log::{debug, info};

use crate::config::RunConfig;
use crate::error::AppError;
use crate::persistence::{FileWriter, OutputSink};

/// Filter `config.input` into `config.output`.
///
/// # Errors
///
/// Fails when the input cannot be opened or read, the output cannot be
/// written, or the filter configuration is invalid.
pub fn run_with_config(config: &RunConfig) -> Result<FilterStats> {
    let mut pipeline = FilterPipeline::with_stages(&config.filter, config.suppress, config.rename)
        .context("failed to build filter pipeline")?
        .with_mode(config.mode);
    debug!(
        "doxygen_filter v{} · stages={:?} · mode={:?}",
        crate::VERSION,
        pipeline.stage_names(),
        pipeline.mode()
    );

    let mut reader = config
        .input
        .open()
        .with_context(|| format!("failed to open input {}", config.input))?;

    let stats = match &config.output {
        OutputSink::Stdout => {
            let mut writer = BufWriter::new(io::stdout().lock());
            let stats = filter_stream(&mut pipeline, &mut reader, &mut writer, config)?;
            writer.flush().map_err(|source| stream_error(config, source))?;
            stats
        }
        OutputSink::File(path) => {
            let mut buffer = Vec::new();
            let stats = filter_stream(&mut pipeline, &mut reader, &mut buffer, config)?;
            FileWriter::atomic_write(path, &buffer).map_err(|source| AppError::Write {
                path: path.clone(),
                source,
            })?;
            stats
        }
    };

    info!("{} filtered: {stats}", config.input);
    Ok(stats)
}

fn filter_stream<W: Write>(
    pipeline: &mut FilterPipeline,
    reader: &mut Box<dyn io::BufRead>,
    writer: &mut W,
    config: &RunConfig,
) -> Result<FilterStats, AppError> {
    pipeline
        .filter_reader(reader, writer)
        .map_err(|source| stream_error(config, source))
}

fn stream_error(config: &RunConfig, source: io::Error) -> AppError {
    AppError::Stream {
        input: config.input.to_string(),
        source,
    }
}
