//! Service-level commands: `adclink ready` and `adclink drives`

use anyhow::Result;
use clap::Args;
use tracing::info;

use crate::context::CliContext;
use crate::output::{get_formatter, OutputFormat};

/// Probe the connector service
#[derive(Debug, Args)]
pub struct ReadyCommand {}

impl ReadyCommand {
    pub async fn execute(&self, ctx: &CliContext, format: OutputFormat) -> Result<bool> {
        let formatter = get_formatter(format);
        let connector = ctx.connector()?;

        let ready = connector.is_ready().await;
        info!(ready, endpoint = %ctx.config.service.endpoint, "Probed connector service");

        if format.is_json() {
            formatter.print_json(&serde_json::json!({
                "ready": ready,
                "endpoint": ctx.config.service.endpoint,
            }));
        } else if ready {
            formatter.success(&format!(
                "Desktop connector is ready ({})",
                ctx.config.service.endpoint
            ));
        } else {
            formatter.error(&format!(
                "Desktop connector is not reachable at {}",
                ctx.config.service.endpoint
            ));
        }

        Ok(ready)
    }
}

/// List mounted drives in resolution order
#[derive(Debug, Args)]
pub struct DrivesCommand {}

impl DrivesCommand {
    pub async fn execute(&self, ctx: &CliContext, format: OutputFormat) -> Result<bool> {
        let formatter = get_formatter(format);
        let drives = ctx.connector()?.drives().await;

        if format.is_json() {
            formatter.print_json(&serde_json::to_value(&drives)?);
            return Ok(true);
        }

        if drives.is_empty() {
            formatter.info("No drives mounted");
            return Ok(true);
        }

        formatter.success(&format!(
            "{} drive{} mounted",
            drives.len(),
            if drives.len() == 1 { "" } else { "s" }
        ));
        for drive in &drives {
            formatter.field(&drive.scheme_prefix(), &drive.workspace_location);
        }
        Ok(true)
    }
}
