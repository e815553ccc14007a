//! Sync command - Bring a file's local copy up to date
//!
//! Provides the `adclink sync` CLI command which:
//! 1. Skips files whose local copy is already current (unless `--force`)
//! 2. Tells the connector that running processes released the file
//! 3. Requests the sync without waiting for it to finish

use anyhow::Result;
use clap::Args;

use adclink_core::usecases::SyncOutcome;

use crate::context::CliContext;
use crate::output::{get_formatter, OutputFormat};

#[derive(Debug, Args)]
pub struct SyncCommand {
    /// Virtual (`DRIVE://...`) or local path
    pub path: String,

    /// Sync even if the local copy is already up to date
    #[arg(long)]
    pub force: bool,
}

impl SyncCommand {
    pub async fn execute(&self, ctx: &CliContext, format: OutputFormat) -> Result<bool> {
        let formatter = get_formatter(format);
        let outcome = ctx.connector()?.sync_file(&self.path, self.force).await;

        if format.is_json() {
            let mut value = serde_json::to_value(outcome)?;
            value["path"] = serde_json::Value::from(self.path.as_str());
            formatter.print_json(&value);
            return Ok(true);
        }

        match outcome {
            SyncOutcome::AlreadySynced => {
                formatter.success(&format!("{} is already up to date", self.path));
                formatter.info("Use --force to sync anyway");
            }
            SyncOutcome::NotFound => {
                formatter.error(&format!("{} is not a tracked local file", self.path));
            }
            SyncOutcome::Requested { notified_processes } => {
                formatter.success(&format!("Sync requested for {}", self.path));
                if ctx.config.sync.release_handles {
                    formatter.field("Released", &format!("{notified_processes} process handles"));
                }
            }
        }
        Ok(true)
    }
}
