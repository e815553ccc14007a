//! Drive enumeration
//!
//! Drives are re-queried on every call; a mount can appear or disappear
//! between two operations.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::{Drive, DriveId};
use crate::ports::{IConnectorService, PropertyDefinition};

/// Read-only view of the connector's mounted drives
#[derive(Clone)]
pub struct DriveRegistry {
    service: Arc<dyn IConnectorService>,
}

impl DriveRegistry {
    pub fn new(service: Arc<dyn IConnectorService>) -> Self {
        Self { service }
    }

    /// All mounted drives in enumeration order, or empty if the service fails
    pub async fn drives(&self) -> Vec<Drive> {
        match self.service.get_drives().await {
            Ok(drives) => {
                debug!(count = drives.len(), "Enumerated connector drives");
                drives
            }
            Err(e) => {
                warn!(error = %e, "Failed to enumerate connector drives");
                Vec::new()
            }
        }
    }

    /// The first drive with the given id
    pub async fn drive_by_id(&self, id: &DriveId) -> Option<Drive> {
        self.drives().await.into_iter().find(|drive| &drive.id == id)
    }

    /// Property definitions of a drive, or empty if the service fails
    pub async fn property_definitions(&self, drive: &Drive) -> Vec<PropertyDefinition> {
        match self.service.get_property_definitions(&drive.id).await {
            Ok(definitions) => definitions,
            Err(e) => {
                warn!(drive = %drive.name, error = %e, "Failed to fetch property definitions");
                Vec::new()
            }
        }
    }
}
