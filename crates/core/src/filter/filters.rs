pub mod macro_suppressor;
pub mod underscore_renamer;

pub use macro_suppressor::{MacroSuppressor, SuppressionState};
pub use underscore_renamer::UnderscoreRenamer;
