//! File metadata returned by the facade

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::item::Item;
use super::lock::LockStatus;

/// Denormalized view of an item plus its current lock holder
///
/// Built per call and handed straight back to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileInfo {
    pub name: String,
    pub relative_path: String,
    pub workspace_path: String,
    pub is_folder: bool,
    pub last_modified: DateTime<Utc>,
    pub can_delete: bool,
    pub can_rename: bool,
    pub can_move: bool,
    /// Unset when the item is not locked or its lock status is unknown
    pub lock_owner: Option<String>,
    pub lock_time: Option<DateTime<Utc>>,
}

impl FileInfo {
    /// Merge an item with its lock status, if one was obtained
    pub fn new(item: &Item, lock_status: Option<&LockStatus>) -> Self {
        let holder = lock_status.and_then(LockStatus::holder);
        Self {
            name: item.name.clone(),
            relative_path: item.relative_path.clone(),
            workspace_path: item.workspace_path.clone(),
            is_folder: item.is_folder,
            last_modified: item.last_modified,
            can_delete: item.can_delete,
            can_rename: item.can_rename,
            can_move: item.can_move,
            lock_owner: holder.map(|h| h.owner.clone()),
            lock_time: holder.map(|h| h.locked_at),
        }
    }
}
