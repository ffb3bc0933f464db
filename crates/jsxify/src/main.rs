//! jsxify CLI - rewrite `React.createElement` calls back into JSX.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod config;
mod files;

#[derive(Parser)]
#[command(name = "jsxify")]
#[command(about = "Rewrite React.createElement calls back into JSX")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to jsxify.toml config file
    #[arg(short, long, default_value = "jsxify.toml")]
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default jsxify.toml
    Init {
        /// Overwrite an existing config file
        #[arg(short, long)]
        yes: bool,
    },

    /// Transform files and directories
    Transform {
        /// Files or directories to transform
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// Rewrite files in place
        #[arg(short, long, conflicts_with = "out_dir")]
        write: bool,

        /// Write transformed files under this directory
        #[arg(short, long)]
        out_dir: Option<PathBuf>,

        /// Parse every file as TypeScript with JSX
        #[arg(long)]
        tsx: bool,
    },

    /// Report files that would change, failing if any would
    Check {
        /// Files or directories to check
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,

        /// Parse every file as TypeScript with JSX
        #[arg(long)]
        tsx: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Execute command
    match cli.command {
        Commands::Init { yes } => {
            commands::init::run(&cli.config, yes)?;
        }
        Commands::Transform {
            paths,
            write,
            out_dir,
            tsx,
        } => {
            let config = config::load_config(&cli.config)?;
            let out_dir = out_dir.or(config.output.dir.clone());
            let target = match (write, out_dir) {
                (true, _) => commands::transform::Target::InPlace,
                (false, Some(dir)) => commands::transform::Target::Directory(dir),
                (false, None) => commands::transform::Target::Stdout,
            };
            commands::transform::run(&config, &paths, target, tsx)?;
        }
        Commands::Check { paths, json, tsx } => {
            let config = config::load_config(&cli.config)?;
            commands::check::run(&config, &paths, json, tsx)?;
        }
    }

    Ok(())
}
