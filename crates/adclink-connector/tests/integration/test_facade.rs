//! DesktopConnector end to end over HTTP and a real local mirror

use std::sync::Arc;

use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use adclink_core::config::SyncConfig;
use adclink_core::ports::IProcessTable;
use adclink_core::usecases::SyncOutcome;
use adclink_core::DesktopConnector;
use adclink_local::LocalFileSystemAdapter;

use crate::common::{self, ENDPOINT_PATH};

struct FixedProcesses(Vec<u32>);

impl IProcessTable for FixedProcesses {
    fn running_process_ids(&self) -> Vec<u32> {
        self.0.clone()
    }
}

/// Mounts a BIM360 drive rooted at `root` with one tracked item
async fn mount_bim360(server: &MockServer, root: &TempDir) {
    let root_str = root.path().to_string_lossy().into_owned();
    common::mount_json(
        server,
        "GetDrives",
        json!([{ "id": "drv-bim", "name": "BIM360", "workspaceLocation": root_str }]),
    )
    .await;
    common::mount_json(
        server,
        "GetItemsByWorkspacePaths",
        json!([{ "workspacePath": "bim360://docs/a.rvt", "item": common::bim360_item() }]),
    )
    .await;
    common::mount_json(
        server,
        "GetPropertyDefinitions",
        json!([{ "id": "DesktopConnector.Core.LocalState", "displayName": "Local State" }]),
    )
    .await;
}

async fn setup() -> (MockServer, TempDir, DesktopConnector) {
    let (server, service) = common::setup_service().await;
    let root = TempDir::new().unwrap();
    std::fs::create_dir(root.path().join("docs")).unwrap();
    std::fs::write(root.path().join("docs").join("a.rvt"), b"revit").unwrap();
    mount_bim360(&server, &root).await;

    let connector = DesktopConnector::new(
        service,
        Arc::new(LocalFileSystemAdapter::new()),
        Arc::new(FixedProcesses(vec![100, 200])),
        SyncConfig::default(),
    );
    (server, root, connector)
}

#[tokio::test]
async fn test_virtual_path_resolves_into_local_mirror() {
    let (_server, root, connector) = setup().await;

    let local = connector
        .get_local_path("BIM360://docs/a.rvt")
        .await
        .expect("path not resolved");

    assert_eq!(local.as_path(), root.path().join("docs").join("a.rvt"));
    assert!(connector.contains("bim360://docs/a.rvt").await);
}

#[tokio::test]
async fn test_missing_local_file_is_not_contained() {
    let (_server, root, connector) = setup().await;
    std::fs::remove_file(root.path().join("docs").join("a.rvt")).unwrap();

    assert!(!connector.contains("bim360://docs/a.rvt").await);
}

#[tokio::test]
async fn test_file_info_merges_lock_holder() {
    let (server, _root, connector) = setup().await;
    common::mount_json(
        &server,
        "GetLockStatus",
        json!({
            "status": [{
                "itemId": "item-a",
                "state": "LockedByOther",
                "lockOwner": "jane@example.com",
                "lockTime": "2024-03-01T10:00:00Z"
            }]
        }),
    )
    .await;

    let info = connector
        .get_file_info("bim360://docs/a.rvt")
        .await
        .expect("no file info");

    assert_eq!(info.name, "a.rvt");
    assert_eq!(info.lock_owner.as_deref(), Some("jane@example.com"));
    assert!(connector.is_locked_by_other("bim360://docs/a.rvt").await);
    assert!(connector.is_locked("bim360://docs/a.rvt").await);
}

#[tokio::test]
async fn test_stale_file_sync_releases_handles_first() {
    let (server, _root, connector) = setup().await;
    common::mount_json(
        &server,
        "GetProperties",
        json!({ "values": [{
            "itemId": "item-a",
            "propertyId": "DesktopConnector.Core.LocalState",
            "value": "OnlineOnly"
        }]}),
    )
    .await;
    Mock::given(method("POST"))
        .and(path(format!("{ENDPOINT_PATH}/FileClosedWithinRunningProcess")))
        .respond_with(ResponseTemplate::new(200))
        .expect(2)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(format!("{ENDPOINT_PATH}/SyncFiles")))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    assert!(!connector.is_synced("bim360://docs/a.rvt").await);
    let outcome = connector.sync_file("bim360://docs/a.rvt", false).await;

    assert_eq!(outcome, SyncOutcome::Requested { notified_processes: 2 });
}

#[tokio::test]
async fn test_up_to_date_file_is_not_resynced() {
    let (server, _root, connector) = setup().await;
    common::mount_json(
        &server,
        "GetProperties",
        json!({ "values": [{
            "itemId": "item-a",
            "propertyId": "DesktopConnector.Core.LocalState",
            "value": "Cached"
        }]}),
    )
    .await;
    Mock::given(method("POST"))
        .and(path(format!("{ENDPOINT_PATH}/SyncFiles")))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    assert!(connector.is_synced("bim360://docs/a.rvt").await);
    assert_eq!(
        connector.sync_file("bim360://docs/a.rvt", false).await,
        SyncOutcome::AlreadySynced
    );
}

#[tokio::test]
async fn test_service_errors_become_negative_answers() {
    let (server, service) = common::setup_service().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    let connector = DesktopConnector::new(
        service,
        Arc::new(LocalFileSystemAdapter::new()),
        Arc::new(FixedProcesses(vec![])),
        SyncConfig::default(),
    );

    assert!(!connector.is_ready().await);
    assert!(connector.drives().await.is_empty());
    assert!(connector.get_local_path("bim360://docs/a.rvt").await.is_none());
    assert!(!connector.lock_file("bim360://docs/a.rvt").await);
}
