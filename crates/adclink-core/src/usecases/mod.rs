//! Use cases (interactors) for adclink
//!
//! This module contains the coordinators that turn connector-service calls
//! into path-level answers. Each coordinator swallows service failures and
//! reports them as absence, so nothing here returns an error.
//!
//! ## Use Cases
//!
//! - [`DriveRegistry`] - Drive enumeration and per-drive property definitions
//! - [`PathResolver`] - Virtual or local path to concrete local path
//! - [`ItemLocator`] - Local path to remote item handle
//! - [`LockCoordinator`] - Cooperative lock queries and commands
//! - [`SyncCoordinator`] - Sync freshness checks and on-demand sync

pub mod drive_registry;
pub mod item_locator;
pub mod lock_coordinator;
pub mod path_resolver;
pub mod sync_coordinator;

pub use drive_registry::DriveRegistry;
pub use item_locator::ItemLocator;
pub use lock_coordinator::LockCoordinator;
pub use path_resolver::{PathResolver, ResolvedPath};
pub use sync_coordinator::{SyncCoordinator, SyncOutcome};
