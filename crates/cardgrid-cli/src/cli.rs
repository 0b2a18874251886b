use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cardgrid")]
#[command(about = "Keyboard navigation for card grids", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a config file (or set CARDGRID_CONFIG env var)
    #[arg(long, global = true, value_name = "FILE", env = "CARDGRID_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Replay a sequence of keys against a grid
    Replay(ReplayArgs),
    /// Show where an index sits in a grid
    Position(PositionArgs),
    /// Compare two dot-separated versions
    CompareVersions {
        a: String,
        b: String,
    },
    /// Show the stacking order used for a host version
    Stacking {
        #[arg(long)]
        host_version: String,
    },
    /// Navigate a grid with the arrow keys
    Interactive(GridArgs),
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Args)]
pub struct GridArgs {
    /// Number of items in the grid
    #[arg(long)]
    pub items: usize,
    /// Number of columns (defaults to the configured column count)
    #[arg(long)]
    pub columns: Option<usize>,
}

#[derive(Args)]
pub struct ReplayArgs {
    #[command(flatten)]
    pub grid: GridArgs,
    /// Index selected before the first key
    #[arg(long, default_value_t = 0)]
    pub start: usize,
    /// Key names such as ArrowUp, ArrowDown, ArrowLeft, ArrowRight, Enter, Escape
    #[arg(value_name = "KEY")]
    pub keys: Vec<String>,
}

#[derive(Args)]
pub struct PositionArgs {
    #[command(flatten)]
    pub grid: GridArgs,
    pub index: usize,
}
