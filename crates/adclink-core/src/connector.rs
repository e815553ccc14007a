//! Desktop connector facade
//!
//! [`DesktopConnector`] is the single entry point host applications use. It
//! wires the use cases over one set of ports and answers every question with
//! a plain value: service failures surface as `false` or `None`, never as an
//! error.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::config::SyncConfig;
use crate::domain::{Drive, FileInfo, LocalPath, LockStatus};
use crate::ports::{IConnectorService, ILocalFileSystem, IProcessTable};
use crate::usecases::{
    DriveRegistry, ItemLocator, LockCoordinator, PathResolver, SyncCoordinator, SyncOutcome,
};

/// Path-level access to files mirrored by the desktop connector
#[derive(Clone)]
pub struct DesktopConnector {
    service: Arc<dyn IConnectorService>,
    locator: ItemLocator,
    locks: LockCoordinator,
    sync: SyncCoordinator,
}

impl DesktopConnector {
    pub fn new(
        service: Arc<dyn IConnectorService>,
        filesystem: Arc<dyn ILocalFileSystem>,
        processes: Arc<dyn IProcessTable>,
        settings: SyncConfig,
    ) -> Self {
        let resolver = PathResolver::new(DriveRegistry::new(Arc::clone(&service)));
        let locator = ItemLocator::new(Arc::clone(&service), resolver, filesystem);
        let locks = LockCoordinator::new(Arc::clone(&service), locator.clone());
        let sync = SyncCoordinator::new(Arc::clone(&service), locator.clone(), processes, settings);

        Self {
            service,
            locator,
            locks,
            sync,
        }
    }

    /// True if the service answers discovery
    pub async fn is_ready(&self) -> bool {
        match self.service.discover().await {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %e, "Connector service not ready");
                false
            }
        }
    }

    /// Drives currently mounted by the connector
    pub async fn drives(&self) -> Vec<Drive> {
        self.locator.resolver().registry().drives().await
    }

    /// True if `path` maps to an item the connector tracks and whose local
    /// file exists
    pub async fn contains(&self, path: &str) -> bool {
        self.locator.locate(path).await.is_some()
    }

    /// Local filesystem path for a virtual (`"{drive}://"`) path
    ///
    /// Paths that are already local yield `None`; use [`contains`] to test
    /// those.
    ///
    /// [`contains`]: Self::contains
    pub async fn get_local_path(&self, path: &str) -> Option<LocalPath> {
        self.locator.resolver().virtual_drive_local_path(path).await
    }

    /// Metadata of the item behind `path`, with its lock holder if any
    ///
    /// A failed lock query still yields the item's metadata, just without
    /// lock fields.
    pub async fn get_file_info(&self, path: &str) -> Option<FileInfo> {
        let item = self.locator.locate(path).await?;
        let lock_status = self.locks.get_lock_status(&item).await;
        if lock_status.is_none() {
            debug!(path, "File info without lock status");
        }
        Some(FileInfo::new(&item, lock_status.as_ref()))
    }

    pub async fn lock_status(&self, path: &str) -> Option<LockStatus> {
        self.locks.lock_status(path).await
    }

    pub async fn is_locked(&self, path: &str) -> bool {
        self.locks.is_locked(path).await
    }

    pub async fn is_locked_by_other(&self, path: &str) -> bool {
        self.locks.is_locked_by_other(path).await
    }

    pub async fn lock_file(&self, path: &str) -> bool {
        self.locks.lock(path).await
    }

    pub async fn unlock_file(&self, path: &str) -> bool {
        self.locks.unlock(path).await
    }

    /// Raw local-state value the connector reports for `path`
    pub async fn local_state(&self, path: &str) -> Option<String> {
        self.sync.local_state(path).await
    }

    pub async fn is_synced(&self, path: &str) -> bool {
        self.sync.is_synced(path).await
    }

    /// Request a sync of `path`; see [`SyncCoordinator::sync`]
    pub async fn sync_file(&self, path: &str, force: bool) -> SyncOutcome {
        self.sync.sync(path, force).await
    }
}
