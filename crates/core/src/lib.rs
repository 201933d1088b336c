#![allow(clippy::cargo_common_metadata)]
#![allow(clippy::multiple_crate_versions)]

pub mod config;
pub mod error;
pub mod filter;
pub mod pipeline;
pub mod stats;

pub use config::FilterConfig;
pub use error::{FilterError, FilterResult};
pub use filter::{LineAction, LineFilter, MacroSuppressor, SuppressionState, UnderscoreRenamer};
pub use pipeline::{
    CompositionMode, FilterPipeline, filter_default, rename_underscored, rename_underscored_default,
    suppress_macros, suppress_macros_default,
};
pub use stats::FilterStats;
