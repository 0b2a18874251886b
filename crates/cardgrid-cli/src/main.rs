mod cli;
mod gallery;
mod handlers;
mod output;

use cardgrid_core::AppConfig;
use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Ok(log_path) = std::env::var("CARDGRID_DEBUG_LOG") {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        tracing_subscriber::fmt()
            .with_writer(log_file)
            .with_max_level(tracing::Level::DEBUG)
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_max_level(tracing::Level::WARN)
            .init();
    }

    let cli = Cli::parse();

    let config = match cli.config {
        Some(ref path) => match AppConfig::load_from(path) {
            Ok(config) => config,
            Err(e) => output::output_error(&format!(
                "Failed to load config {}: {}",
                path.display(),
                e
            )),
        },
        None => AppConfig::load(),
    };

    let result = match cli.command {
        Commands::Replay(args) => handlers::replay::handle(&config, args),
        Commands::Position(args) => handlers::grid::handle_position(&config, args),
        Commands::CompareVersions { a, b } => handlers::version::handle_compare(&a, &b),
        Commands::Stacking { host_version } => {
            handlers::version::handle_stacking(&config, &host_version)
        }
        Commands::Interactive(args) => handlers::interactive::handle(&config, args).await,
        Commands::Completions { shell } => {
            clap_complete::generate(
                shell,
                &mut Cli::command(),
                "cardgrid",
                &mut std::io::stdout(),
            );
            Ok(())
        }
    };

    if let Err(e) = result {
        tracing::debug!("Command failed: {:#}", e);
        output::output_error(&e.to_string());
    }

    Ok(())
}
