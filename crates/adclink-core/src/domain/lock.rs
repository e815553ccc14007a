//! Cooperative lock model
//!
//! Locks are service-mediated exclusivity markers on items, not OS file
//! locks. The connector reports one of three states:
//!
//! ```text
//! NotLocked ──lock()──▶ LockedBySelf ──unlock()──▶ NotLocked
//! NotLocked ─(observed)─▶ LockedByOther
//! ```
//!
//! `LockedByOther` cannot be overridden from this side.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lock state of an item, ordered by "how locked" it is
///
/// `NotLocked < LockedBySelf < LockedByOther`, so `state > NotLocked`
/// means the item is locked by anyone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum LockState {
    NotLocked,
    LockedBySelf,
    LockedByOther,
}

impl std::fmt::Display for LockState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LockState::NotLocked => write!(f, "not locked"),
            LockState::LockedBySelf => write!(f, "locked by self"),
            LockState::LockedByOther => write!(f, "locked by other"),
        }
    }
}

/// Who holds a lock and since when
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LockHolder {
    pub owner: String,
    pub locked_at: DateTime<Utc>,
}

/// Lock status of an item
///
/// The reported state is always kept. The holder is attached when the
/// service reports both owner and timestamp; a locked item whose holder is
/// unknown still counts as locked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LockStatus {
    NotLocked,
    LockedBySelf(Option<LockHolder>),
    LockedByOther(Option<LockHolder>),
}

impl LockStatus {
    /// Build a status from the loose fields reported by the service
    ///
    /// Owner and timestamp are ignored for `NotLocked`, and dropped unless
    /// both are present.
    #[must_use]
    pub fn from_parts(
        state: LockState,
        owner: Option<String>,
        locked_at: Option<DateTime<Utc>>,
    ) -> Self {
        let holder = match (owner, locked_at) {
            (Some(owner), Some(locked_at)) => Some(LockHolder { owner, locked_at }),
            _ => None,
        };

        match state {
            LockState::NotLocked => Self::NotLocked,
            LockState::LockedBySelf => Self::LockedBySelf(holder),
            LockState::LockedByOther => Self::LockedByOther(holder),
        }
    }

    #[must_use]
    pub fn state(&self) -> LockState {
        match self {
            Self::NotLocked => LockState::NotLocked,
            Self::LockedBySelf(_) => LockState::LockedBySelf,
            Self::LockedByOther(_) => LockState::LockedByOther,
        }
    }

    /// Lock holder, if locked and reported
    #[must_use]
    pub fn holder(&self) -> Option<&LockHolder> {
        match self {
            Self::NotLocked => None,
            Self::LockedBySelf(holder) | Self::LockedByOther(holder) => holder.as_ref(),
        }
    }

    /// True if locked by anyone
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.state() > LockState::NotLocked
    }

    #[must_use]
    pub fn is_locked_by_other(&self) -> bool {
        self.state() == LockState::LockedByOther
    }
}
