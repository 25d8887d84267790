//! Docdelta CLI entry point

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod report;

#[derive(Parser)]
#[command(name = "docdelta")]
#[command(about = "Diff and combine rendered documentation archives", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a changelog comparing two archive snapshots
    Diff {
        /// The older archive
        old_archive: PathBuf,

        /// The newer archive
        new_archive: PathBuf,

        /// Label for the older snapshot in the changelog
        #[arg(long, default_value = "previous")]
        old_version: String,

        /// Label for the newer snapshot in the changelog
        #[arg(long, default_value = "current")]
        new_version: String,
    },
    /// Combine one or more archives into a single output archive
    Merge {
        /// Input archives
        #[arg(required = true)]
        archives: Vec<PathBuf>,

        /// Content root supplying the combined landing page
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Where to write the combined archive
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Show version
    Version,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(format!("docdelta={}", log_level)))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match cli.command {
        Commands::Diff {
            old_archive,
            new_archive,
            old_version,
            new_version,
        } => commands::diff(old_archive, new_archive, old_version, new_version),
        Commands::Merge {
            archives,
            catalog,
            output,
        } => commands::merge(archives, catalog, output),
        Commands::Version => {
            println!("docdelta v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}
