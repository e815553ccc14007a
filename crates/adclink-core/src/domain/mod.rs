//! Domain entities
//!
//! This module contains the value types exchanged with the connector service:
//! - Newtypes for identifiers and resolved local paths
//! - Drive snapshots and remote items
//! - The tri-state lock model
//! - The `FileInfo` DTO returned by the facade
//! - Domain-specific error types

pub mod drive;
pub mod errors;
pub mod file_info;
pub mod item;
pub mod lock;
pub mod newtypes;

pub use drive::Drive;
pub use errors::DomainError;
pub use file_info::FileInfo;
pub use item::Item;
pub use lock::{LockHolder, LockState, LockStatus};
pub use newtypes::*;
