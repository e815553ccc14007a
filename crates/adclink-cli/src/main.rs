//! adclink CLI - Command-line interface for adclink
//!
//! Provides commands for:
//! - Probing the desktop connector service and listing its drives
//! - Resolving virtual paths to the local mirror
//! - Inspecting item metadata, lock and sync state
//! - Locking, unlocking and syncing files
//! - Viewing and validating configuration
//!
//! Negative answers from `ready`, `contains`, `lock` and `unlock` exit with
//! status 1 so the commands compose in shell scripts.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod context;
mod output;

use commands::{
    config::ConfigCommand,
    info::{InfoCommand, StatusCommand},
    lock::{LockCommand, UnlockCommand},
    path::{ContainsCommand, LocalPathCommand},
    service::{DrivesCommand, ReadyCommand},
    sync::SyncCommand,
};
use context::CliContext;
use output::OutputFormat;

#[derive(Debug, Parser)]
#[command(
    name = "adclink",
    version,
    about = "Resolve, lock and sync files mirrored by the desktop connector"
)]
pub struct Cli {
    /// Output in JSON format
    #[arg(long, global = true)]
    json: bool,

    /// Verbose output (can be repeated: -v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Use alternate config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check that the connector service is reachable
    Ready(ReadyCommand),
    /// List mounted drives
    Drives(DrivesCommand),
    /// Check whether a path is a tracked, locally present file
    Contains(ContainsCommand),
    /// Print the local mirror path for a virtual path
    LocalPath(LocalPathCommand),
    /// Show item metadata and lock holder
    Info(InfoCommand),
    /// Show lock and sync state
    Status(StatusCommand),
    /// Acquire the cooperative lock on a file
    Lock(LockCommand),
    /// Release the cooperative lock on a file
    Unlock(UnlockCommand),
    /// Sync a file from the cloud
    Sync(SyncCommand),
    /// View and validate configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Log filter used when `RUST_LOG` is unset
fn default_filter(verbose: u8, quiet: bool, configured: &str) -> String {
    if quiet {
        return "error".to_string();
    }
    match verbose {
        0 => configured.to_string(),
        1 => "debug".to_string(),
        _ => "trace".to_string(),
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let ctx = CliContext::load(cli.config.as_deref())?;

    // Setup tracing
    let filter = default_filter(cli.verbose, cli.quiet, &ctx.config.logging.level);
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Human
    };

    let positive = match cli.command {
        Commands::Ready(cmd) => cmd.execute(&ctx, format).await?,
        Commands::Drives(cmd) => cmd.execute(&ctx, format).await?,
        Commands::Contains(cmd) => cmd.execute(&ctx, format).await?,
        Commands::LocalPath(cmd) => cmd.execute(&ctx, format).await?,
        Commands::Info(cmd) => cmd.execute(&ctx, format).await?,
        Commands::Status(cmd) => cmd.execute(&ctx, format).await?,
        Commands::Lock(cmd) => cmd.execute(&ctx, format).await?,
        Commands::Unlock(cmd) => cmd.execute(&ctx, format).await?,
        Commands::Sync(cmd) => cmd.execute(&ctx, format).await?,
        Commands::Config(cmd) => cmd.execute(&ctx, format)?,
    };

    Ok(if positive {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}
