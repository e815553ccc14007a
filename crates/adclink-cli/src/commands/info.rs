//! Inspection commands: `adclink info` and `adclink status`

use anyhow::Result;
use chrono::{DateTime, Utc};
use clap::Args;
use serde_json::json;

use adclink_core::domain::LockStatus;

use crate::context::CliContext;
use crate::output::{get_formatter, OutputFormat};

/// Show item metadata and its lock holder
#[derive(Debug, Args)]
pub struct InfoCommand {
    /// Virtual (`DRIVE://...`) or local path
    pub path: String,
}

impl InfoCommand {
    pub async fn execute(&self, ctx: &CliContext, format: OutputFormat) -> Result<bool> {
        let formatter = get_formatter(format);
        let info = ctx.connector()?.get_file_info(&self.path).await;

        if format.is_json() {
            formatter.print_json(&serde_json::to_value(&info)?);
            return Ok(true);
        }

        let Some(info) = info else {
            formatter.error(&format!("{} is not a tracked local file", self.path));
            return Ok(true);
        };

        formatter.success(&info.workspace_path);
        formatter.field("Name", &info.name);
        formatter.field("Relative", &info.relative_path);
        formatter.field("Kind", if info.is_folder { "folder" } else { "file" });
        formatter.field("Modified", &format_time(info.last_modified));
        formatter.field(
            "Allowed",
            &permissions(info.can_delete, info.can_rename, info.can_move),
        );
        match (&info.lock_owner, info.lock_time) {
            (Some(owner), Some(time)) => {
                formatter.field("Locked by", &format!("{owner} since {}", format_time(time)))
            }
            _ => formatter.field("Locked by", "-"),
        }
        Ok(true)
    }
}

/// Show lock and sync state
#[derive(Debug, Args)]
pub struct StatusCommand {
    /// Virtual (`DRIVE://...`) or local path
    pub path: String,
}

impl StatusCommand {
    pub async fn execute(&self, ctx: &CliContext, format: OutputFormat) -> Result<bool> {
        let formatter = get_formatter(format);
        let connector = ctx.connector()?;

        let local_path = connector.get_local_path(&self.path).await;
        let tracked = connector.contains(&self.path).await;
        let lock = connector.lock_status(&self.path).await;
        let local_state = connector.local_state(&self.path).await;
        let synced = connector.is_synced(&self.path).await;

        if format.is_json() {
            formatter.print_json(&json!({
                "path": self.path,
                "local_path": local_path.as_ref().map(|p| p.as_str()),
                "tracked": tracked,
                "lock": lock.as_ref().map(|status| json!({
                    "state": status.state(),
                    "owner": status.holder().map(|h| h.owner.clone()),
                    "locked_at": status.holder().map(|h| h.locked_at),
                })),
                "local_state": local_state,
                "synced": synced,
            }));
            return Ok(true);
        }

        formatter.success(&self.path);
        formatter.field(
            "Local path",
            local_path.as_ref().map_or("-", |p| p.as_str()),
        );
        formatter.field("Tracked", if tracked { "yes" } else { "no" });
        formatter.field("Lock", &describe_lock(lock.as_ref()));
        formatter.field("Local state", local_state.as_deref().unwrap_or("unknown"));
        formatter.field("Synced", if synced { "yes" } else { "no" });
        Ok(true)
    }
}

fn format_time(time: DateTime<Utc>) -> String {
    time.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

fn permissions(can_delete: bool, can_rename: bool, can_move: bool) -> String {
    let allowed: Vec<&str> = [
        (can_delete, "delete"),
        (can_rename, "rename"),
        (can_move, "move"),
    ]
    .into_iter()
    .filter_map(|(allowed, name)| allowed.then_some(name))
    .collect();

    if allowed.is_empty() {
        "-".to_string()
    } else {
        allowed.join(", ")
    }
}

fn describe_lock(status: Option<&LockStatus>) -> String {
    match status {
        None => "unknown".to_string(),
        Some(LockStatus::NotLocked) => "not locked".to_string(),
        Some(LockStatus::LockedBySelf(Some(holder))) => {
            format!("locked by you since {}", format_time(holder.locked_at))
        }
        Some(LockStatus::LockedBySelf(None)) => "locked by you".to_string(),
        Some(LockStatus::LockedByOther(Some(holder))) => format!(
            "locked by {} since {}",
            holder.owner,
            format_time(holder.locked_at)
        ),
        Some(LockStatus::LockedByOther(None)) => "locked by another user".to_string(),
    }
}
