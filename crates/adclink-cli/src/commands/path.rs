//! Path commands: `adclink contains` and `adclink local-path`

use anyhow::Result;
use clap::Args;

use crate::context::CliContext;
use crate::output::{get_formatter, OutputFormat};

/// Check whether a path is a tracked file present in the local mirror
#[derive(Debug, Args)]
pub struct ContainsCommand {
    /// Virtual (`DRIVE://...`) or local path
    pub path: String,
}

impl ContainsCommand {
    pub async fn execute(&self, ctx: &CliContext, format: OutputFormat) -> Result<bool> {
        let formatter = get_formatter(format);
        let contained = ctx.connector()?.contains(&self.path).await;

        if format.is_json() {
            formatter.print_json(&serde_json::json!({
                "path": self.path,
                "contains": contained,
            }));
        } else if contained {
            formatter.success(&format!("{} is tracked by the connector", self.path));
        } else {
            formatter.error(&format!("{} is not a tracked local file", self.path));
        }

        Ok(contained)
    }
}

/// Print the local mirror path
#[derive(Debug, Args)]
pub struct LocalPathCommand {
    /// Virtual (`DRIVE://...`) path
    pub path: String,
}

impl LocalPathCommand {
    pub async fn execute(&self, ctx: &CliContext, format: OutputFormat) -> Result<bool> {
        let formatter = get_formatter(format);
        let local = ctx.connector()?.get_local_path(&self.path).await;

        if format.is_json() {
            formatter.print_json(&serde_json::json!({
                "path": self.path,
                "local_path": local.as_ref().map(|p| p.as_str()),
            }));
            return Ok(true);
        }

        match local {
            // Bare path on stdout so it can be captured by scripts
            Some(local) => println!("{local}"),
            None => formatter.error(&format!("{} does not name a mounted drive", self.path)),
        }
        Ok(true)
    }
}
