//! Wire format of each connector service operation

use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, ResponseTemplate};

use adclink_core::domain::{DriveId, ItemId, LocalPath, LockState, LockStatus};
use adclink_core::ports::IConnectorService;

use crate::common::{self, ENDPOINT_PATH};

#[tokio::test]
async fn test_discover_succeeds_on_200() {
    let (server, service) = common::setup_service().await;
    common::mount_empty(&server, "Discover").await;

    service.discover().await.expect("discover failed");
}

#[tokio::test]
async fn test_discover_fails_on_server_error() {
    let (server, service) = common::setup_service().await;
    Mock::given(method("POST"))
        .and(path(format!("{ENDPOINT_PATH}/Discover")))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    assert!(service.discover().await.is_err());
}

#[tokio::test]
async fn test_unreachable_service_is_an_error() {
    let (server, service) = common::setup_service().await;
    drop(server);

    assert!(service.discover().await.is_err());
    assert!(service.get_drives().await.is_err());
}

#[tokio::test]
async fn test_get_drives_parses_drive_list() {
    let (server, service) = common::setup_service().await;
    common::mount_json(
        &server,
        "GetDrives",
        json!([
            common::bim360_drive(),
            { "id": "drv-fus", "name": "Fusion", "workspaceLocation": "/local/fusion" }
        ]),
    )
    .await;

    let drives = service.get_drives().await.expect("get_drives failed");
    assert_eq!(drives.len(), 2);
    assert_eq!(drives[0].name, "BIM360");
    assert_eq!(drives[0].workspace_location, "/local/proj");
    assert_eq!(drives[1].id.as_str(), "drv-fus");
}

#[tokio::test]
async fn test_malformed_response_is_an_error() {
    let (server, service) = common::setup_service().await;
    common::mount_json(&server, "GetDrives", json!({ "unexpected": true })).await;

    assert!(service.get_drives().await.is_err());
}

#[tokio::test]
async fn test_get_property_definitions_sends_drive_id() {
    let (server, service) = common::setup_service().await;
    Mock::given(method("POST"))
        .and(path(format!("{ENDPOINT_PATH}/GetPropertyDefinitions")))
        .and(body_json(json!({ "driveId": "drv-bim" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": "DesktopConnector.Core.LocalState", "displayName": "Local State" },
            { "id": "DesktopConnector.Core.Size" }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let definitions = service
        .get_property_definitions(&DriveId::new("drv-bim").unwrap())
        .await
        .expect("get_property_definitions failed");

    assert_eq!(definitions.len(), 2);
    assert_eq!(definitions[0].display_name.as_deref(), Some("Local State"));
    assert!(definitions[1].display_name.is_none());
}

#[tokio::test]
async fn test_get_items_by_workspace_paths() {
    let (server, service) = common::setup_service().await;
    Mock::given(method("POST"))
        .and(path(format!("{ENDPOINT_PATH}/GetItemsByWorkspacePaths")))
        .and(body_json(json!({ "workspacePaths": ["bim360://docs/a.rvt"] })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "workspacePath": "bim360://docs/a.rvt", "item": common::bim360_item() }
        ])))
        .mount(&server)
        .await;

    let results = service
        .get_items_by_workspace_paths(&["bim360://docs/a.rvt".to_string()])
        .await
        .expect("lookup failed");

    let item = results[0].item.as_ref().expect("item missing");
    assert_eq!(item.id.as_str(), "item-a");
    assert_eq!(item.relative_path, "docs/a.rvt");
    assert!(!item.can_move);
}

#[tokio::test]
async fn test_get_properties() {
    let (server, service) = common::setup_service().await;
    Mock::given(method("POST"))
        .and(path(format!("{ENDPOINT_PATH}/GetProperties")))
        .and(body_json(json!({
            "itemIds": ["item-a"],
            "propertyIds": ["DesktopConnector.Core.LocalState"]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "values": [{
                "itemId": "item-a",
                "propertyId": "DesktopConnector.Core.LocalState",
                "value": "Cached"
            }]
        })))
        .mount(&server)
        .await;

    let values = service
        .get_properties(
            &[ItemId::new("item-a").unwrap()],
            &["DesktopConnector.Core.LocalState".to_string()],
        )
        .await
        .expect("get_properties failed");

    assert_eq!(values.values[0].value.as_deref(), Some("Cached"));
}

#[tokio::test]
async fn test_get_lock_status() {
    let (server, service) = common::setup_service().await;
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

    let response = service
        .get_lock_status(&[ItemId::new("item-a").unwrap()])
        .await
        .expect("get_lock_status failed");

    let record = response.status.into_iter().next().unwrap();
    assert_eq!(record.state, LockState::LockedByOther);
    let status = LockStatus::from(record);
    assert_eq!(status.holder().unwrap().owner, "jane@example.com");
}

#[tokio::test]
async fn test_lock_and_unlock_send_item_id() {
    let (server, service) = common::setup_service().await;
    Mock::given(method("POST"))
        .and(path(format!("{ENDPOINT_PATH}/LockFile")))
        .and(body_json(json!({ "itemId": "item-a" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "result": "Success" })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(format!("{ENDPOINT_PATH}/UnlockFile")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "result": "Failure",
            "message": "not locked"
        })))
        .mount(&server)
        .await;

    let id = ItemId::new("item-a").unwrap();
    assert!(service.lock_file(&id).await.unwrap().is_success());

    let unlock = service.unlock_file(&id).await.unwrap();
    assert!(!unlock.is_success());
    assert_eq!(unlock.message.as_deref(), Some("not locked"));
}

#[tokio::test]
async fn test_file_closed_and_sync_files() {
    let (server, service) = common::setup_service().await;
    Mock::given(method("POST"))
        .and(path(format!("{ENDPOINT_PATH}/FileClosedWithinRunningProcess")))
        .and(body_json(json!({ "processId": 42, "localPath": "/local/proj/docs/a.rvt" })))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(format!("{ENDPOINT_PATH}/SyncFiles")))
        .and(body_json(json!({ "itemIds": ["item-a"] })))
        .respond_with(ResponseTemplate::new(202))
        .expect(1)
        .mount(&server)
        .await;

    let local = LocalPath::new("/local/proj/docs/a.rvt").unwrap();
    service
        .file_closed_within_running_process(42, &local)
        .await
        .expect("notification failed");
    service
        .sync_files(&[ItemId::new("item-a").unwrap()])
        .await
        .expect("sync failed");
}
