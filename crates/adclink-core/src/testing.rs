//! In-memory port implementations for unit tests

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use anyhow::bail;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::{Drive, DriveId, Item, ItemId, LocalPath, LockState};
use crate::ports::{
    FileSystemState, IConnectorService, ILocalFileSystem, IProcessTable, ItemLookupResult,
    LockResponse, LockResult, LockStatusRecord, LockStatusResponse, PropertyDefinition,
    PropertyValue, PropertyValues,
};

pub(crate) const LOCAL_STATE_ID: &str = "DesktopConnector.Core.LocalState";
pub(crate) const SELF_OWNER: &str = "me@example.com";

pub(crate) fn drive(id: &str, name: &str, root: &str) -> Drive {
    Drive {
        id: DriveId::new(id).unwrap(),
        name: name.to_string(),
        workspace_location: root.to_string(),
    }
}

pub(crate) fn item(id: &str, drive_id: &str, workspace_path: &str) -> Item {
    let name = workspace_path
        .rsplit('/')
        .next()
        .unwrap_or(workspace_path)
        .to_string();
    Item {
        id: ItemId::new(id).unwrap(),
        drive_id: DriveId::new(drive_id).unwrap(),
        name,
        relative_path: workspace_path
            .split_once("://")
            .map(|(_, rest)| rest.to_string())
            .unwrap_or_default(),
        workspace_path: workspace_path.to_string(),
        is_folder: false,
        can_delete: true,
        can_rename: true,
        can_move: false,
        last_modified: "2024-01-02T03:04:05Z".parse().unwrap(),
    }
}

pub(crate) fn lock_time() -> DateTime<Utc> {
    "2024-03-01T10:00:00Z".parse().unwrap()
}

/// Mutable state behind [`MockConnector`]
#[derive(Default)]
pub(crate) struct MockState {
    /// When set, every call fails as if the service were down
    pub offline: bool,
    /// Operation names that fail individually (e.g. `"get_lock_status"`)
    pub failing: HashSet<&'static str>,
    pub drives: Vec<Drive>,
    /// Items keyed by the exact path the locator queries
    pub items: HashMap<String, Item>,
    pub definitions: Vec<PropertyDefinition>,
    /// Property id the service answers local-state queries for
    pub local_state_id: String,
    /// Local-state property value per item id
    pub local_states: HashMap<String, String>,
    pub locks: HashMap<String, LockStatusRecord>,

    pub lookups: Vec<Vec<String>>,
    pub lock_commands: Vec<ItemId>,
    pub unlock_commands: Vec<ItemId>,
    pub closed_notifications: Vec<(u32, LocalPath)>,
    pub sync_requests: Vec<Vec<ItemId>>,
}

/// Scriptable in-memory connector service
#[derive(Default)]
pub(crate) struct MockConnector {
    state: Mutex<MockState>,
}

impl MockConnector {
    pub fn with<R>(&self, f: impl FnOnce(&mut MockState) -> R) -> R {
        f(&mut self.state.lock().unwrap())
    }

    fn check(&self, op: &'static str) -> anyhow::Result<()> {
        let state = self.state.lock().unwrap();
        if state.offline {
            bail!("connector service unavailable");
        }
        if state.failing.contains(op) {
            bail!("{op} failed");
        }
        Ok(())
    }
}

#[async_trait]
impl IConnectorService for MockConnector {
    async fn discover(&self) -> anyhow::Result<()> {
        self.check("discover")
    }

    async fn get_drives(&self) -> anyhow::Result<Vec<Drive>> {
        self.check("get_drives")?;
        Ok(self.with(|s| s.drives.clone()))
    }

    async fn get_property_definitions(
        &self,
        _drive_id: &DriveId,
    ) -> anyhow::Result<Vec<PropertyDefinition>> {
        self.check("get_property_definitions")?;
        Ok(self.with(|s| s.definitions.clone()))
    }

    async fn get_items_by_workspace_paths(
        &self,
        paths: &[String],
    ) -> anyhow::Result<Vec<ItemLookupResult>> {
        self.with(|s| s.lookups.push(paths.to_vec()));
        self.check("get_items_by_workspace_paths")?;
        Ok(self.with(|s| {
            paths
                .iter()
                .filter_map(|p| {
                    s.items.get(p).map(|item| ItemLookupResult {
                        workspace_path: p.clone(),
                        item: Some(item.clone()),
                    })
                })
                .collect()
        }))
    }

    async fn get_properties(
        &self,
        item_ids: &[ItemId],
        property_ids: &[String],
    ) -> anyhow::Result<PropertyValues> {
        self.check("get_properties")?;
        Ok(self.with(|s| {
            let mut values = Vec::new();
            for id in item_ids {
                for prop in property_ids {
                    if *prop == s.local_state_id {
                        if let Some(value) = s.local_states.get(id.as_str()) {
                            values.push(PropertyValue {
                                item_id: id.clone(),
                                property_id: prop.clone(),
                                value: Some(value.clone()),
                            });
                        }
                    }
                }
            }
            PropertyValues { values }
        }))
    }

    async fn get_lock_status(&self, item_ids: &[ItemId]) -> anyhow::Result<LockStatusResponse> {
        self.check("get_lock_status")?;
        Ok(self.with(|s| LockStatusResponse {
            status: item_ids
                .iter()
                .map(|id| {
                    s.locks.get(id.as_str()).cloned().unwrap_or(LockStatusRecord {
                        item_id: id.clone(),
                        state: LockState::NotLocked,
                        lock_owner: None,
                        lock_time: None,
                    })
                })
                .collect(),
        }))
    }

    async fn lock_file(&self, item_id: &ItemId) -> anyhow::Result<LockResponse> {
        self.with(|s| s.lock_commands.push(item_id.clone()));
        self.check("lock_file")?;
        Ok(self.with(|s| {
            let held_by_other = s
                .locks
                .get(item_id.as_str())
                .is_some_and(|r| r.state == LockState::LockedByOther);
            if held_by_other {
                return LockResponse {
                    result: LockResult::Failure,
                    message: Some("locked by another user".into()),
                };
            }
            s.locks.insert(
                item_id.as_str().to_string(),
                LockStatusRecord {
                    item_id: item_id.clone(),
                    state: LockState::LockedBySelf,
                    lock_owner: Some(SELF_OWNER.into()),
                    lock_time: Some(lock_time()),
                },
            );
            LockResponse {
                result: LockResult::Success,
                message: None,
            }
        }))
    }

    async fn unlock_file(&self, item_id: &ItemId) -> anyhow::Result<LockResponse> {
        self.with(|s| s.unlock_commands.push(item_id.clone()));
        self.check("unlock_file")?;
        Ok(self.with(|s| {
            let state = s.locks.get(item_id.as_str()).map(|r| r.state);
            match state {
                Some(LockState::LockedByOther) => LockResponse {
                    result: LockResult::Failure,
                    message: Some("locked by another user".into()),
                },
                _ => {
                    s.locks.remove(item_id.as_str());
                    LockResponse {
                        result: LockResult::Success,
                        message: None,
                    }
                }
            }
        }))
    }

    async fn file_closed_within_running_process(
        &self,
        pid: u32,
        local_path: &LocalPath,
    ) -> anyhow::Result<()> {
        self.check("file_closed_within_running_process")?;
        self.with(|s| s.closed_notifications.push((pid, local_path.clone())));
        Ok(())
    }

    async fn sync_files(&self, item_ids: &[ItemId]) -> anyhow::Result<()> {
        self.with(|s| s.sync_requests.push(item_ids.to_vec()));
        self.check("sync_files")?;
        Ok(())
    }
}

/// Local filesystem that only knows a fixed set of files
#[derive(Default)]
pub(crate) struct MockFileSystem {
    pub files: Mutex<HashSet<String>>,
    pub broken: Mutex<bool>,
}

impl MockFileSystem {
    pub fn add(&self, path: &str) {
        self.files.lock().unwrap().insert(path.to_string());
    }
}

#[async_trait]
impl ILocalFileSystem for MockFileSystem {
    async fn get_state(&self, path: &LocalPath) -> anyhow::Result<FileSystemState> {
        if *self.broken.lock().unwrap() {
            bail!("permission denied");
        }
        if self.files.lock().unwrap().contains(path.as_str()) {
            Ok(FileSystemState {
                exists: true,
                is_file: true,
                size: 1024,
                modified: None,
            })
        } else {
            Ok(FileSystemState::not_found())
        }
    }
}

pub(crate) struct MockProcessTable(pub Vec<u32>);

impl IProcessTable for MockProcessTable {
    fn running_process_ids(&self) -> Vec<u32> {
        self.0.clone()
    }
}

/// Ports wired for the BIM360 scenario
///
/// Drive `BIM360` mirrors `C:\Local\Proj`; `bim360://docs/a.rvt` is a known
/// item (`item-a`) whose local file exists.
pub(crate) struct Fixture {
    pub connector: Arc<MockConnector>,
    pub filesystem: Arc<MockFileSystem>,
    pub processes: Arc<MockProcessTable>,
}

pub(crate) const VIRTUAL_PATH: &str = "bim360://docs/a.rvt";
pub(crate) const LOCAL_PATH: &str = r"C:\Local\Proj\docs\a.rvt";

impl Fixture {
    pub fn bim360() -> Self {
        let connector = Arc::new(MockConnector::default());
        connector.with(|s| {
            s.drives.push(drive("drv-bim", "BIM360", r"C:\Local\Proj"));
            s.local_state_id = LOCAL_STATE_ID.to_string();
            s.items
                .insert(VIRTUAL_PATH.to_string(), item("item-a", "drv-bim", VIRTUAL_PATH));
            s.definitions.push(PropertyDefinition {
                id: "DesktopConnector.Core.Size".into(),
                display_name: Some("Size".into()),
            });
            s.definitions.push(PropertyDefinition {
                id: LOCAL_STATE_ID.into(),
                display_name: Some("Statut".into()),
            });
        });

        let filesystem = Arc::new(MockFileSystem::default());
        filesystem.add(LOCAL_PATH);

        Self {
            connector,
            filesystem,
            processes: Arc::new(MockProcessTable(vec![1, 42, 977])),
        }
    }

    pub fn set_local_state(&self, item_id: &str, value: &str) {
        self.connector
            .with(|s| s.local_states.insert(item_id.to_string(), value.to_string()));
    }

    pub fn set_lock(&self, item_id: &str, state: LockState, owner: Option<&str>) {
        self.connector.with(|s| {
            s.locks.insert(
                item_id.to_string(),
                LockStatusRecord {
                    item_id: ItemId::new(item_id).unwrap(),
                    state,
                    lock_owner: owner.map(str::to_string),
                    lock_time: owner.map(|_| lock_time()),
                },
            )
        });
    }
}
