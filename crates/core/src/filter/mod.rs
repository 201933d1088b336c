pub mod filter_trait;
pub mod filters;
pub mod patterns;

pub use filter_trait::{LineAction, LineFilter};
pub use filters::{MacroSuppressor, SuppressionState, UnderscoreRenamer};

use crate::config::FilterConfig;
use crate::error::FilterResult;

/// Builds the enabled stages in pipeline order: suppression, then renaming.
///
/// # Errors
///
/// Returns an error when the configuration is invalid or a pattern fails to compile.
pub fn build_filters(
    config: &FilterConfig,
    suppress: bool,
    rename: bool,
) -> FilterResult<Vec<Box<dyn LineFilter>>> {
    config.validate()?;

    let mut stages: Vec<Box<dyn LineFilter>> = Vec::with_capacity(2);
    if suppress {
        stages.push(Box::new(MacroSuppressor::new(config)?));
    }
    if rename {
        stages.push(Box::new(UnderscoreRenamer::new(config)?));
    }
    Ok(stages)
}
