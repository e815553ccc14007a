//! Lock commands: `adclink lock` and `adclink unlock`

use anyhow::Result;
use clap::Args;
use tracing::info;

use crate::context::CliContext;
use crate::output::{get_formatter, OutputFormat};

/// Acquire the cooperative lock on a file
#[derive(Debug, Args)]
pub struct LockCommand {
    /// Virtual (`DRIVE://...`) or local path
    pub path: String,
}

impl LockCommand {
    pub async fn execute(&self, ctx: &CliContext, format: OutputFormat) -> Result<bool> {
        let connector = ctx.connector()?;
        let locked = connector.lock_file(&self.path).await;
        info!(path = %self.path, locked, "Lock requested");

        report(format, &self.path, "lock", locked);
        if !locked && !format.is_json() && connector.is_locked_by_other(&self.path).await {
            get_formatter(format).info("The file is locked by another user");
        }
        Ok(locked)
    }
}

/// Release the cooperative lock on a file
#[derive(Debug, Args)]
pub struct UnlockCommand {
    /// Virtual (`DRIVE://...`) or local path
    pub path: String,
}

impl UnlockCommand {
    pub async fn execute(&self, ctx: &CliContext, format: OutputFormat) -> Result<bool> {
        let unlocked = ctx.connector()?.unlock_file(&self.path).await;
        info!(path = %self.path, unlocked, "Unlock requested");

        report(format, &self.path, "unlock", unlocked);
        Ok(unlocked)
    }
}

fn report(format: OutputFormat, path: &str, action: &str, success: bool) {
    let formatter = get_formatter(format);
    if format.is_json() {
        formatter.print_json(&serde_json::json!({
            "path": path,
            "action": action,
            "success": success,
        }));
    } else if success {
        formatter.success(&format!("{action}ed {path}"));
    } else {
        formatter.error(&format!("Could not {action} {path}"));
    }
}
