pub mod grid;
pub mod interactive;
pub mod replay;
pub mod version;

use crate::cli::GridArgs;
use cardgrid_core::AppConfig;

pub(crate) fn effective_columns(config: &AppConfig, args: &GridArgs) -> usize {
    args.columns
        .unwrap_or_else(|| config.effective_default_columns())
}
