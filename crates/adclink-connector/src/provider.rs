//! HttpConnectorService - IConnectorService implementation over HTTP/JSON
//!
//! Maps each port method to one service operation on the
//! [`ConnectorClient`]. Request bodies are camelCase JSON; responses are
//! parsed straight into the port DTOs.
//!
//! ## Design Notes
//!
//! - No retries or timeouts: the service is a local daemon and the core
//!   treats any failure as an absent answer.
//! - Batch-shaped operations are sent as given; the core always passes one
//!   element.

use anyhow::Result;
use serde::Serialize;
use tracing::{debug, info};

use adclink_core::config::ServiceConfig;
use adclink_core::domain::{Drive, DriveId, ItemId, LocalPath};
use adclink_core::ports::{
    IConnectorService, ItemLookupResult, LockResponse, LockStatusResponse, PropertyDefinition,
    PropertyValues,
};

use crate::client::ConnectorClient;
use crate::ConnectError;

// ============================================================================
// Request bodies
// ============================================================================

#[derive(Debug, Serialize)]
struct EmptyRequest {}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DriveRequest<'a> {
    drive_id: &'a DriveId,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct WorkspacePathsRequest<'a> {
    workspace_paths: &'a [String],
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PropertiesRequest<'a> {
    item_ids: &'a [ItemId],
    property_ids: &'a [String],
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ItemsRequest<'a> {
    item_ids: &'a [ItemId],
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ItemRequest<'a> {
    item_id: &'a ItemId,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct FileClosedRequest<'a> {
    process_id: u32,
    local_path: &'a LocalPath,
}

// ============================================================================
// HttpConnectorService
// ============================================================================

/// Connector service reached over its local HTTP endpoint
#[derive(Debug, Clone)]
pub struct HttpConnectorService {
    client: ConnectorClient,
}

impl HttpConnectorService {
    /// Connects to the service described by `config`
    ///
    /// Fails when the endpoint is unusable, or when
    /// `require_installation` is set and the connector API file is missing.
    /// No request is sent; use `discover` to probe the service.
    pub fn connect(config: &ServiceConfig) -> Result<Self, ConnectError> {
        if config.require_installation {
            let path = config.api_path();
            if !path.is_file() {
                return Err(ConnectError::ApiNotInstalled { path });
            }
        }

        let client = ConnectorClient::new(&config.endpoint)?;
        info!(endpoint = client.base_url(), "Connector service client ready");
        Ok(Self { client })
    }

    /// Creates a service over an existing client (useful for testing)
    pub fn with_client(client: ConnectorClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &ConnectorClient {
        &self.client
    }
}

#[async_trait::async_trait]
impl IConnectorService for HttpConnectorService {
    async fn discover(&self) -> Result<()> {
        self.client.call_empty("Discover", &EmptyRequest {}).await
    }

    async fn get_drives(&self) -> Result<Vec<Drive>> {
        let drives: Vec<Drive> = self.client.call("GetDrives", &EmptyRequest {}).await?;
        debug!(count = drives.len(), "Fetched drives");
        Ok(drives)
    }

    async fn get_property_definitions(&self, drive_id: &DriveId) -> Result<Vec<PropertyDefinition>> {
        self.client
            .call("GetPropertyDefinitions", &DriveRequest { drive_id })
            .await
    }

    async fn get_items_by_workspace_paths(
        &self,
        paths: &[String],
    ) -> Result<Vec<ItemLookupResult>> {
        self.client
            .call(
                "GetItemsByWorkspacePaths",
                &WorkspacePathsRequest {
                    workspace_paths: paths,
                },
            )
            .await
    }

    async fn get_properties(
        &self,
        item_ids: &[ItemId],
        property_ids: &[String],
    ) -> Result<PropertyValues> {
        self.client
            .call(
                "GetProperties",
                &PropertiesRequest {
                    item_ids,
                    property_ids,
                },
            )
            .await
    }

    async fn get_lock_status(&self, item_ids: &[ItemId]) -> Result<LockStatusResponse> {
        self.client
            .call("GetLockStatus", &ItemsRequest { item_ids })
            .await
    }

    async fn lock_file(&self, item_id: &ItemId) -> Result<LockResponse> {
        self.client.call("LockFile", &ItemRequest { item_id }).await
    }

    async fn unlock_file(&self, item_id: &ItemId) -> Result<LockResponse> {
        self.client.call("UnlockFile", &ItemRequest { item_id }).await
    }

    async fn file_closed_within_running_process(
        &self,
        pid: u32,
        local_path: &LocalPath,
    ) -> Result<()> {
        self.client
            .call_empty(
                "FileClosedWithinRunningProcess",
                &FileClosedRequest {
                    process_id: pid,
                    local_path,
                },
            )
            .await
    }

    async fn sync_files(&self, item_ids: &[ItemId]) -> Result<()> {
        self.client
            .call_empty("SyncFiles", &ItemsRequest { item_ids })
            .await
    }
}
