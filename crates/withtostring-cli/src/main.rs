//! withtostring CLI - Generates toString() subclasses for annotated Java types
//!
//! Commands:
//! - `withtostring generate` - Run processing passes and write generated sources
//! - `withtostring check` - Validate a declaration manifest and preview decisions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod generate;
mod manifest;

#[derive(Parser)]
#[command(name = "withtostring")]
#[command(author, version, about = "toString() generator for annotated Java types", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate <Type>WithToString sources for annotated declarations
    Generate {
        /// Path to the declaration manifest
        #[arg(short, long)]
        manifest: PathBuf,

        /// Output directory for generated sources (overrides config)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Marker annotation, qualified or simple (overrides config)
        #[arg(long)]
        marker: Option<String>,

        /// Path to a withtostring.toml or .json config file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Print generated sources instead of writing them
        #[arg(long)]
        dry_run: bool,

        /// Log level: trace, debug, info, warn, error, off (overrides config)
        #[arg(long)]
        log_level: Option<String>,
    },

    /// Validate a declaration manifest
    Check {
        /// Path to the declaration manifest
        #[arg(short, long)]
        manifest: PathBuf,

        /// Marker annotation, qualified or simple (overrides config)
        #[arg(long)]
        marker: Option<String>,

        /// Path to a withtostring.toml or .json config file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            manifest,
            output,
            marker,
            config,
            dry_run,
            log_level,
        } => {
            generate::run(&generate::GenerateArgs {
                manifest,
                output,
                marker,
                config,
                dry_run,
                log_level,
            })?;
        }
        Commands::Check {
            manifest,
            marker,
            config,
        } => {
            manifest::check(&manifest, marker, config)?;
        }
    }

    Ok(())
}
