//! Sync freshness and on-demand synchronization
//!
//! Freshness is read from the drive's local-state property. The property is
//! matched by its stable internal id because its display name is localized
//! and has been renamed across connector versions.
//!
//! A sync request first tells the service that every running process has
//! released the local file. This walks the whole process table, so its cost
//! is linear in the number of processes; it only runs when a sync is
//! actually requested, and on the blocking thread pool.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::SyncConfig;
use crate::domain::{Item, LocalPath};
use crate::ports::{IConnectorService, IProcessTable};

use super::item_locator::ItemLocator;

/// Local-state values that mean the local copy is current
const UP_TO_DATE_STATES: &[&str] = &["Cached", "Synced"];

/// What a sync request ended up doing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SyncOutcome {
    /// Not forced and the file was already up to date
    AlreadySynced,
    /// The path could not be located or resolved
    NotFound,
    /// A sync command was issued; its result is not reported back
    Requested { notified_processes: usize },
}

/// Sync checks and commands keyed by path
#[derive(Clone)]
pub struct SyncCoordinator {
    service: Arc<dyn IConnectorService>,
    locator: ItemLocator,
    processes: Arc<dyn IProcessTable>,
    settings: SyncConfig,
}

impl SyncCoordinator {
    pub fn new(
        service: Arc<dyn IConnectorService>,
        locator: ItemLocator,
        processes: Arc<dyn IProcessTable>,
        settings: SyncConfig,
    ) -> Self {
        Self {
            service,
            locator,
            processes,
            settings,
        }
    }

    /// True only if the item is located and its local state is up to date
    ///
    /// Any missing piece (item, drive, property definition, value) or any
    /// service failure yields `false`.
    pub async fn is_synced(&self, path: &str) -> bool {
        let Some(item) = self.locator.locate(path).await else {
            return false;
        };
        self.local_state_of(&item)
            .await
            .is_some_and(|value| is_up_to_date(&value))
    }

    /// Raw local-state property value of the item behind `path`
    pub async fn local_state(&self, path: &str) -> Option<String> {
        let item = self.locator.locate(path).await?;
        self.local_state_of(&item).await
    }

    async fn local_state_of(&self, item: &Item) -> Option<String> {
        let registry = self.locator.resolver().registry();
        let Some(drive) = registry.drive_by_id(&item.drive_id).await else {
            debug!(item = %item.id, drive = %item.drive_id, "Owning drive not mounted");
            return None;
        };

        let property_id = &self.settings.local_state_property_id;
        let definition = registry
            .property_definitions(&drive)
            .await
            .into_iter()
            .find(|definition| &definition.id == property_id);
        let Some(definition) = definition else {
            warn!(drive = %drive.name, property_id, "Drive has no local-state property");
            return None;
        };

        let values = match self
            .service
            .get_properties(std::slice::from_ref(&item.id), &[definition.id])
            .await
        {
            Ok(values) => values,
            Err(e) => {
                warn!(item = %item.id, error = %e, "Property query failed");
                return None;
            }
        };

        values.values.into_iter().next().and_then(|value| value.value)
    }

    /// Synchronize the item behind `path`
    ///
    /// Unless `force` is set, an up-to-date file is left alone. The outcome
    /// of the service-side sync is not awaited; re-check with
    /// [`is_synced`](Self::is_synced) if confirmation is needed.
    pub async fn sync(&self, path: &str, force: bool) -> SyncOutcome {
        if !force && self.is_synced(path).await {
            debug!(path, "Already synced");
            return SyncOutcome::AlreadySynced;
        }

        let Some(item) = self.locator.locate(path).await else {
            return SyncOutcome::NotFound;
        };
        let Some(local_path) = self.locator.resolver().resolve_local_path(path).await else {
            return SyncOutcome::NotFound;
        };

        let notified_processes = if self.settings.release_handles {
            self.release_handles(&local_path).await
        } else {
            0
        };

        match self
            .service
            .sync_files(std::slice::from_ref(&item.id))
            .await
        {
            Ok(()) => info!(path, item = %item.id, force, "Requested sync"),
            Err(e) => warn!(path, error = %e, "Sync command failed"),
        }

        SyncOutcome::Requested { notified_processes }
    }

    /// Tell the service that every running process has closed `local_path`
    async fn release_handles(&self, local_path: &LocalPath) -> usize {
        let processes = Arc::clone(&self.processes);
        let pids = match tokio::task::spawn_blocking(move || processes.running_process_ids()).await
        {
            Ok(pids) => pids,
            Err(e) => {
                warn!(error = %e, "Process enumeration failed");
                Vec::new()
            }
        };

        let mut notified = 0;
        for pid in pids {
            match self
                .service
                .file_closed_within_running_process(pid, local_path)
                .await
            {
                Ok(()) => notified += 1,
                Err(e) => debug!(pid, error = %e, "Handle release notification failed"),
            }
        }
        debug!(local = %local_path, notified, "Released process handles");
        notified
    }
}

fn is_up_to_date(value: &str) -> bool {
    UP_TO_DATE_STATES
        .iter()
        .any(|state| state.eq_ignore_ascii_case(value))
}
