//! Mounted connector drives

use serde::{Deserialize, Serialize};

use super::newtypes::DriveId;

/// Format of the virtual-path prefix for a drive, e.g. `BIM360://`
const SCHEME_SEPARATOR: &str = "://";

/// Snapshot of a mounted virtual drive
///
/// Always fetched fresh from the connector service; never cached across
/// operations since drives can be mounted or unmounted at any time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Drive {
    /// Connector-assigned identifier
    pub id: DriveId,
    /// Display name, also the scheme of the drive's virtual paths
    pub name: String,
    /// Local directory this drive mirrors
    pub workspace_location: String,
}

impl Drive {
    /// Virtual-path prefix for this drive (`"{name}://"`)
    #[must_use]
    pub fn scheme_prefix(&self) -> String {
        format!("{}{SCHEME_SEPARATOR}", self.name)
    }

    /// Returns the part of `path` after this drive's scheme prefix
    ///
    /// The prefix is compared case-insensitively, so `bim360://a` matches a
    /// drive named `BIM360`.
    pub fn strip_scheme<'a>(&self, path: &'a str) -> Option<&'a str> {
        let prefix = self.scheme_prefix();
        let head = path.get(..prefix.len())?;
        if head.to_lowercase() == prefix.to_lowercase() {
            Some(&path[prefix.len()..])
        } else {
            None
        }
    }
}
