//! Path resolution
//!
//! Turns either a virtual path (`BIM360://docs/a.rvt`) or a path that is
//! already inside a drive's local mirror into a concrete [`LocalPath`].
//!
//! Resolution order:
//! 1. Virtual branch: the first drive whose `"{name}://"` prefix matches,
//!    compared case-insensitively.
//! 2. Local branch: the first drive whose normalized workspace root is a
//!    prefix of the normalized candidate, ending on a component boundary.
//!    Only `file:` URIs are percent-decoded into the result; a plain path
//!    keeps its remainder as given.
//!
//! Drives are tried in enumeration order, so when two drives could claim a
//! path the first-registered drive wins.

use percent_encoding::percent_decode_str;
use tracing::debug;
use url::Url;

use crate::domain::newtypes::{separator_for, trim_trailing_separators};
use crate::domain::{Drive, LocalPath};

use super::drive_registry::DriveRegistry;

/// A path matched to its owning drive
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPath {
    pub drive: Drive,
    pub local_path: LocalPath,
    /// Whether the input was a virtual (scheme-prefixed) path
    pub from_virtual: bool,
}

/// Maps paths onto the local mirrors of the mounted drives
#[derive(Clone)]
pub struct PathResolver {
    registry: DriveRegistry,
}

impl PathResolver {
    pub fn new(registry: DriveRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &DriveRegistry {
        &self.registry
    }

    /// Resolve a virtual or local path to its concrete local path
    ///
    /// Returns `None` when the path is not on any mounted drive, including
    /// when drives cannot be enumerated.
    pub async fn resolve_local_path(&self, path: &str) -> Option<LocalPath> {
        self.resolve(path).await.map(|resolved| resolved.local_path)
    }

    /// Local path of a virtual (`"{name}://"`) path
    ///
    /// Paths that are already local, or carry no drive scheme, are `None`.
    pub async fn virtual_drive_local_path(&self, path: &str) -> Option<LocalPath> {
        let drives = self.registry.drives().await;
        let resolved = resolve_virtual(&drives, path);
        if resolved.is_none() {
            debug!(path, "Path has no connector drive scheme");
        }
        resolved.map(|r| r.local_path)
    }

    /// Resolve a path and report which drive matched
    pub async fn resolve(&self, path: &str) -> Option<ResolvedPath> {
        let drives = self.registry.drives().await;
        let resolved = resolve_against(&drives, path);
        match &resolved {
            Some(r) => debug!(path, drive = %r.drive.name, local = %r.local_path, "Resolved path"),
            None => debug!(path, "Path is not on any connector drive"),
        }
        resolved
    }
}

/// Resolve `path` against an already-enumerated drive list
pub(crate) fn resolve_against(drives: &[Drive], path: &str) -> Option<ResolvedPath> {
    resolve_virtual(drives, path).or_else(|| resolve_local(drives, path))
}

fn resolve_virtual(drives: &[Drive], path: &str) -> Option<ResolvedPath> {
    let (drive, rest) = drives
        .iter()
        .find_map(|drive| drive.strip_scheme(path).map(|rest| (drive, rest)))?;

    let root = normalize_local_path(&drive.workspace_location);
    Some(ResolvedPath {
        drive: drive.clone(),
        local_path: LocalPath::from_root(&root, rest),
        from_virtual: true,
    })
}

fn resolve_local(drives: &[Drive], path: &str) -> Option<ResolvedPath> {
    let uri = file_uri_path(path);

    drives.iter().find_map(|drive| {
        let root = normalize_local_path(&drive.workspace_location);
        let sep = separator_for(&root);

        let rest = match &uri {
            Some(local) => strip_root(&unify(local, sep), &root, sep)?.to_string(),
            None => plain_remainder(path, &root, sep)?,
        };

        Some(ResolvedPath {
            drive: drive.clone(),
            local_path: LocalPath::from_root(&root, &rest),
            from_virtual: false,
        })
    })
}

/// Remainder of a plain (non-URI) path below `root`
///
/// Percent-escapes are file name characters, so the literal path is tried
/// first. Decoding only helps match escapes inside the root itself.
fn plain_remainder(path: &str, root: &str, sep: char) -> Option<String> {
    let literal = unify(path, sep);
    if let Some(rest) = strip_root(&literal, root, sep) {
        return Some(rest.to_string());
    }

    let decoded = unify(&percent_decode_str(path).decode_utf8_lossy(), sep);
    strip_root(&decoded, root, sep).map(str::to_string)
}

/// Normalize a local path or `file:` URI, keeping its own separator style
pub(crate) fn normalize_local_path(path: &str) -> String {
    let local = file_uri_path(path).unwrap_or_else(|| path.to_string());
    let sep = separator_for(&local);
    unify(&local, sep)
}

fn unify(path: &str, sep: char) -> String {
    let unified: String = path
        .chars()
        .map(|c| if c == '/' || c == '\\' { sep } else { c })
        .collect();
    trim_trailing_separators(&unified).to_string()
}

fn file_uri_path(path: &str) -> Option<String> {
    if !path.get(..5)?.eq_ignore_ascii_case("file:") {
        return None;
    }
    let url = Url::parse(path).ok()?;
    let decoded = percent_decode_str(url.path()).decode_utf8_lossy().into_owned();

    // file:///C:/x parses to the path "/C:/x"
    let local = match decoded.as_bytes() {
        [b'/', letter, b':', ..] if letter.is_ascii_alphabetic() => decoded[1..].to_string(),
        _ => decoded,
    };

    match url.host_str() {
        Some(host) if !host.is_empty() && !host.eq_ignore_ascii_case("localhost") => {
            Some(format!("//{host}{local}"))
        }
        _ => Some(local),
    }
}

fn strip_root<'a>(candidate: &'a str, root: &str, sep: char) -> Option<&'a str> {
    let rest = candidate.strip_prefix(root)?;
    if rest.is_empty() || rest.starts_with(sep) || root.ends_with(sep) {
        Some(rest)
    } else {
        None
    }
}
