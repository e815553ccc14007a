//! Remote-tracked items

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::newtypes::{DriveId, ItemId};

/// A single file or folder tracked by the connector
///
/// Identified by [`ItemId`] independently of its path. Resolved fresh for
/// every operation and never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: ItemId,
    pub drive_id: DriveId,
    pub name: String,
    /// Path relative to the owning drive's root
    pub relative_path: String,
    /// Canonical path in the virtual namespace
    pub workspace_path: String,
    pub is_folder: bool,
    pub can_delete: bool,
    pub can_rename: bool,
    pub can_move: bool,
    #[serde(rename = "lastModifiedDate")]
    pub last_modified: DateTime<Utc>,
}
