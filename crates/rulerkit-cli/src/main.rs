use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use rulerkit_core::AppConfig;

mod commands;

use commands::{RulerArgs, SimulateArgs};

#[derive(Parser)]
#[command(name = "rulerkit")]
#[command(author, version, about = "A sliding ruler for the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive ruler
    Run(RulerArgs),
    /// Drive the ruler with a scripted drag and print a JSON trace
    Simulate(SimulateArgs),
    /// Show or create the configuration file
    Config {
        /// Print the config file path
        #[arg(long)]
        path: bool,
        /// Print the built-in defaults instead of the loaded config
        #[arg(long)]
        default: bool,
        /// Write the defaults to the config path if no file exists yet
        #[arg(long)]
        init: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let mut config = AppConfig::load()?;

    match cli.command {
        Some(Commands::Run(args)) => {
            // The TUI owns the terminal, so logs go to a file
            init_logging(&config, true)?;
            args.apply(&mut config);
            commands::run::run(config).await
        }
        None => {
            init_logging(&config, true)?;
            commands::run::run(config).await
        }
        Some(Commands::Simulate(args)) => {
            init_logging(&config, false)?;
            args.ruler.apply(&mut config);
            commands::simulate::run(&config, &args)
        }
        Some(Commands::Config {
            path,
            default,
            init,
        }) => {
            init_logging(&config, false)?;
            commands::config::run(&config, path, default, init)
        }
    }
}

/// Initialize logging, to the data directory or to stderr.
fn init_logging(config: &AppConfig, to_file: bool) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| config.general.log_level.clone()),
    );
    let registry = tracing_subscriber::registry().with(filter);

    if to_file {
        let log_path = config.log_path();
        if let Some(dir) = log_path.parent() {
            std::fs::create_dir_all(dir)?;
        }
        let file = OpenOptions::new().create(true).append(true).open(&log_path)?;
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
            .init();
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
    Ok(())
}
