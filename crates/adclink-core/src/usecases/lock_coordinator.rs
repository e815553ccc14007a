//! Cooperative lock coordination
//!
//! Reads and changes the service-side lock of a located item. Locks held by
//! someone else are only observed; there is no override.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::{Item, LockState, LockStatus};
use crate::ports::IConnectorService;

use super::item_locator::ItemLocator;

/// Lock queries and commands keyed by path
#[derive(Clone)]
pub struct LockCoordinator {
    service: Arc<dyn IConnectorService>,
    locator: ItemLocator,
}

impl LockCoordinator {
    pub fn new(service: Arc<dyn IConnectorService>, locator: ItemLocator) -> Self {
        Self { service, locator }
    }

    /// Lock status of an already-located item
    ///
    /// `None` if the service fails or returns nothing. A locked record without
    /// owner or timestamp keeps its state and carries no holder.
    pub async fn get_lock_status(&self, item: &Item) -> Option<LockStatus> {
        let response = match self
            .service
            .get_lock_status(std::slice::from_ref(&item.id))
            .await
        {
            Ok(response) => response,
            Err(e) => {
                warn!(item = %item.id, error = %e, "Lock status query failed");
                return None;
            }
        };

        let status = LockStatus::from(response.status.into_iter().next()?);
        if status.is_locked() && status.holder().is_none() {
            debug!(item = %item.id, state = ?status.state(), "Lock holder not reported");
        }
        Some(status)
    }

    /// Lock status of the item behind `path`
    pub async fn lock_status(&self, path: &str) -> Option<LockStatus> {
        let item = self.locator.locate(path).await?;
        self.get_lock_status(&item).await
    }

    /// True if the item is locked by anyone
    pub async fn is_locked(&self, path: &str) -> bool {
        self.lock_status(path)
            .await
            .is_some_and(|status| status.state() > LockState::NotLocked)
    }

    /// True if the item is locked by another user
    pub async fn is_locked_by_other(&self, path: &str) -> bool {
        self.lock_status(path)
            .await
            .is_some_and(|status| status.state() == LockState::LockedByOther)
    }

    /// Acquire the lock; true only if the service reports success
    pub async fn lock(&self, path: &str) -> bool {
        let Some(item) = self.locator.locate(path).await else {
            debug!(path, "Cannot lock: item not found");
            return false;
        };

        match self.service.lock_file(&item.id).await {
            Ok(response) if response.is_success() => {
                info!(path, item = %item.id, "Locked file");
                true
            }
            Ok(response) => {
                info!(path, reason = ?response.message, "Connector refused lock");
                false
            }
            Err(e) => {
                warn!(path, error = %e, "Lock command failed");
                false
            }
        }
    }

    /// Release the lock; true only if the service reports success
    pub async fn unlock(&self, path: &str) -> bool {
        let Some(item) = self.locator.locate(path).await else {
            debug!(path, "Cannot unlock: item not found");
            return false;
        };

        match self.service.unlock_file(&item.id).await {
            Ok(response) if response.is_success() => {
                info!(path, item = %item.id, "Unlocked file");
                true
            }
            Ok(response) => {
                info!(path, reason = ?response.message, "Connector refused unlock");
                false
            }
            Err(e) => {
                warn!(path, error = %e, "Unlock command failed");
                false
            }
        }
    }
}
