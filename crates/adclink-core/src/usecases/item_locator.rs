//! Item lookup
//!
//! Finds the remote item behind a path. The local mirror is checked first so
//! that files absent on disk never cost a service round-trip.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::Item;
use crate::ports::{IConnectorService, ILocalFileSystem};

use super::path_resolver::PathResolver;

/// Resolves paths to remote item handles
#[derive(Clone)]
pub struct ItemLocator {
    service: Arc<dyn IConnectorService>,
    resolver: PathResolver,
    filesystem: Arc<dyn ILocalFileSystem>,
}

impl ItemLocator {
    pub fn new(
        service: Arc<dyn IConnectorService>,
        resolver: PathResolver,
        filesystem: Arc<dyn ILocalFileSystem>,
    ) -> Self {
        Self {
            service,
            resolver,
            filesystem,
        }
    }

    pub fn resolver(&self) -> &PathResolver {
        &self.resolver
    }

    /// Locate the item behind `path`
    ///
    /// This method:
    /// 1. Resolves `path` to a local path
    /// 2. Checks that the local file exists
    /// 3. Looks up the item by the original `path`, not the local path
    ///
    /// Every failure along the way yields `None`.
    pub async fn locate(&self, path: &str) -> Option<Item> {
        let local_path = self.resolver.resolve_local_path(path).await?;

        match self.filesystem.get_state(&local_path).await {
            Ok(state) if state.is_regular_file() => {}
            Ok(_) => {
                debug!(path, local = %local_path, "Local file absent, skipping item lookup");
                return None;
            }
            Err(e) => {
                warn!(local = %local_path, error = %e, "Failed to stat local file");
                return None;
            }
        }

        let results = match self
            .service
            .get_items_by_workspace_paths(&[path.to_string()])
            .await
        {
            Ok(results) => results,
            Err(e) => {
                warn!(path, error = %e, "Item lookup failed");
                return None;
            }
        };

        let item = results.into_iter().next().and_then(|result| result.item);
        if item.is_none() {
            debug!(path, "Connector does not track this path");
        }
        item
    }
}
