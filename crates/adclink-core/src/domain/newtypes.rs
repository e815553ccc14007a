//! Domain newtypes with validation
//!
//! This module provides strongly-typed wrappers for the identifiers handed out
//! by the connector service and for resolved local paths. Each newtype ensures
//! data validity at construction time.

use std::fmt::{self, Display, Formatter};
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::errors::DomainError;

// ============================================================================
// Connector identifiers
// ============================================================================

/// Identifier of a mounted connector drive
///
/// Opaque to this crate; only compared for equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DriveId(String);

impl DriveId {
    /// Create a new DriveId
    ///
    /// # Errors
    /// Returns error if the ID is empty
    pub fn new(id: impl Into<String>) -> Result<Self, DomainError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(DomainError::InvalidId("Drive ID cannot be empty".to_string()));
        }
        Ok(Self(id))
    }

    /// Get the inner string reference
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for DriveId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for DriveId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for DriveId {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<DriveId> for String {
    fn from(id: DriveId) -> Self {
        id.0
    }
}

/// Identifier of a remote-tracked item
///
/// Stable across renames and moves, unlike the item's workspace path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ItemId(String);

impl ItemId {
    /// Create a new ItemId
    ///
    /// # Errors
    /// Returns error if the ID is empty
    pub fn new(id: impl Into<String>) -> Result<Self, DomainError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(DomainError::InvalidId("Item ID cannot be empty".to_string()));
        }
        Ok(Self(id))
    }

    /// Get the inner string reference
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for ItemId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ItemId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for ItemId {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<ItemId> for String {
    fn from(id: ItemId) -> Self {
        id.0
    }
}

// ============================================================================
// Local paths
// ============================================================================

/// A concrete path inside a drive's local mirror
///
/// Kept as a string rather than a `PathBuf` because drive roots follow the
/// separator style of the machine that mounted them (`C:\Local\Proj` is a
/// valid root even when this code runs elsewhere). Paths built with
/// [`LocalPath::from_root`] use the root's separator throughout.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LocalPath(String);

impl LocalPath {
    /// Create a LocalPath from an already-concrete path
    ///
    /// # Errors
    /// Returns error if the path is empty
    pub fn new(path: impl Into<String>) -> Result<Self, DomainError> {
        let path = path.into();
        if path.is_empty() {
            return Err(DomainError::InvalidPath("Local path cannot be empty".to_string()));
        }
        Ok(Self(path))
    }

    /// Join a workspace root and a drive-relative remainder
    ///
    /// The remainder may use either separator; empty segments are dropped.
    /// The result uses the separator style of `root`.
    #[must_use]
    pub fn from_root(root: &str, remainder: &str) -> Self {
        let sep = separator_for(root);
        let base = trim_trailing_separators(root);

        let segments: Vec<&str> = remainder
            .split(['/', '\\'])
            .filter(|segment| !segment.is_empty())
            .collect();

        if segments.is_empty() {
            return Self(base.to_string());
        }

        let mut joined = String::with_capacity(base.len() + remainder.len() + 1);
        joined.push_str(base);
        if !base.ends_with(sep) {
            joined.push(sep);
        }
        joined.push_str(&segments.join(&sep.to_string()));
        Self(joined)
    }

    /// Get the inner string reference
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// View as a filesystem path for the local adapters
    #[must_use]
    pub fn as_path(&self) -> &Path {
        Path::new(&self.0)
    }

    /// Separator style used by this path
    #[must_use]
    pub fn separator(&self) -> char {
        separator_for(&self.0)
    }
}

impl Display for LocalPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for LocalPath {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<LocalPath> for String {
    fn from(path: LocalPath) -> Self {
        path.0
    }
}

/// Backslash if the path contains one, forward slash otherwise
pub(crate) fn separator_for(path: &str) -> char {
    if path.contains('\\') {
        '\\'
    } else {
        '/'
    }
}

/// Strip trailing separators, keeping a bare root (`/`, `D:\`) intact
pub(crate) fn trim_trailing_separators(path: &str) -> &str {
    let trimmed = path.trim_end_matches(['/', '\\']);
    if trimmed.len() == path.len() {
        return trimmed;
    }
    match trimmed.as_bytes() {
        [] => &path[..1],
        [letter, b':'] if letter.is_ascii_alphabetic() => &path[..3],
        _ => trimmed,
    }
}
