//! Port definitions (hexagonal architecture interfaces)
//!
//! This module defines the port traits that form the boundaries of the
//! hexagonal architecture. Ports are interfaces that the core depends on,
//! but whose implementations live in adapter crates.
//!
//! ## Ports Overview
//!
//! - [`IConnectorService`] - The desktop connector's service process
//! - [`ILocalFileSystem`] - Existence checks against the local mirror
//! - [`IProcessTable`] - Snapshot of running OS processes

pub mod connector_service;
pub mod local_filesystem;
pub mod process_table;

pub use connector_service::{
    IConnectorService, ItemLookupResult, LockResponse, LockResult, LockStatusRecord,
    LockStatusResponse, PropertyDefinition, PropertyValue, PropertyValues,
};
pub use local_filesystem::{FileSystemState, ILocalFileSystem};
pub use process_table::IProcessTable;
