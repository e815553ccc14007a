//! Connector service port (driven/secondary port)
//!
//! This module defines the interface to the desktop connector's service
//! process: drive enumeration, item lookup, property and lock queries, and
//! lock/unlock/sync commands. The service is a black box; only the shapes
//! the core reads are modelled here.
//!
//! ## Design Notes
//!
//! - Uses `anyhow::Result` because errors at port boundaries are
//!   adapter-specific. The core never classifies them: every failure is
//!   turned into an absent or negative answer by the use cases.
//! - Uses `#[async_trait]` for async trait methods.
//! - Batch-shaped methods mirror the service API even though the core always
//!   sends exactly one element.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::lock::{LockState, LockStatus};
use crate::domain::newtypes::{DriveId, ItemId, LocalPath};
use crate::domain::{Drive, Item};

// ============================================================================
// Property DTOs
// ============================================================================

/// A property column the connector exposes for a drive
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyDefinition {
    /// Stable internal identifier, e.g. `DesktopConnector.Core.LocalState`
    pub id: String,
    /// Localized label; varies across connector versions and languages
    #[serde(default)]
    pub display_name: Option<String>,
}

/// Value of one property for one item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyValue {
    pub item_id: ItemId,
    pub property_id: String,
    #[serde(default)]
    pub value: Option<String>,
}

/// Response of a property query
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyValues {
    #[serde(default)]
    pub values: Vec<PropertyValue>,
}

// ============================================================================
// Item lookup DTOs
// ============================================================================

/// One entry of a workspace-path lookup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemLookupResult {
    /// The path that was looked up
    pub workspace_path: String,
    /// The matching item, if the service knows it
    #[serde(default)]
    pub item: Option<Item>,
}

// ============================================================================
// Lock DTOs
// ============================================================================

/// Raw lock status as reported by the service
///
/// Converted to the domain [`LockStatus`] with `From`. The holder is kept
/// only when both owner and timestamp are present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LockStatusRecord {
    pub item_id: ItemId,
    pub state: LockState,
    #[serde(default)]
    pub lock_owner: Option<String>,
    #[serde(default)]
    pub lock_time: Option<DateTime<Utc>>,
}

impl From<LockStatusRecord> for LockStatus {
    fn from(record: LockStatusRecord) -> Self {
        LockStatus::from_parts(record.state, record.lock_owner, record.lock_time)
    }
}

/// Response of a lock status query
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LockStatusResponse {
    #[serde(default)]
    pub status: Vec<LockStatusRecord>,
}

/// Outcome of a lock or unlock command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LockResult {
    Success,
    Failure,
}

/// Response of a lock or unlock command
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LockResponse {
    pub result: LockResult,
    /// Service-provided reason, usually only set on failure
    #[serde(default)]
    pub message: Option<String>,
}

impl LockResponse {
    pub fn is_success(&self) -> bool {
        self.result == LockResult::Success
    }
}

// ============================================================================
// IConnectorService trait
// ============================================================================

/// Port trait for the desktop connector service
///
/// Implementations talk to the connector's local service process. No
/// method is expected to retry or time out; the service is a local,
/// always-on daemon.
#[async_trait::async_trait]
pub trait IConnectorService: Send + Sync {
    /// Liveness probe; fails when the service is unavailable
    async fn discover(&self) -> anyhow::Result<()>;

    /// Enumerates mounted drives in registration order
    async fn get_drives(&self) -> anyhow::Result<Vec<Drive>>;

    /// Lists the property definitions available on a drive
    async fn get_property_definitions(
        &self,
        drive_id: &DriveId,
    ) -> anyhow::Result<Vec<PropertyDefinition>>;

    /// Looks up items by their workspace (virtual) paths
    async fn get_items_by_workspace_paths(
        &self,
        paths: &[String],
    ) -> anyhow::Result<Vec<ItemLookupResult>>;

    /// Fetches property values for the given items and property ids
    async fn get_properties(
        &self,
        item_ids: &[ItemId],
        property_ids: &[String],
    ) -> anyhow::Result<PropertyValues>;

    /// Queries cooperative lock state
    async fn get_lock_status(&self, item_ids: &[ItemId]) -> anyhow::Result<LockStatusResponse>;

    /// Acquires the cooperative lock on an item
    async fn lock_file(&self, item_id: &ItemId) -> anyhow::Result<LockResponse>;

    /// Releases the cooperative lock on an item
    async fn unlock_file(&self, item_id: &ItemId) -> anyhow::Result<LockResponse>;

    /// Tells the service that process `pid` no longer holds `local_path` open
    async fn file_closed_within_running_process(
        &self,
        pid: u32,
        local_path: &LocalPath,
    ) -> anyhow::Result<()>;

    /// Requests synchronization of the given items
    async fn sync_files(&self, item_ids: &[ItemId]) -> anyhow::Result<()>;
}
