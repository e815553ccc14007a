//! adclink Core - Path resolution and lock/sync coordination
//!
//! This crate contains the hexagonal architecture core with:
//! - **Domain entities** - `Drive`, `Item`, `LockStatus`, `FileInfo`, `LocalPath`
//! - **Use cases** - `DriveRegistry`, `PathResolver`, `ItemLocator`,
//!   `LockCoordinator`, `SyncCoordinator`
//! - **Port definitions** - Traits for adapters: `IConnectorService`,
//!   `ILocalFileSystem`, `IProcessTable`
//! - **Facade** - [`DesktopConnector`], the path-in, answer-out surface
//!
//! # Architecture
//!
//! The domain module contains pure value types with no I/O.
//! Ports define trait interfaces that adapter crates implement.
//! Use cases orchestrate domain types through port interfaces and never
//! propagate service failures: every failure becomes "absent" or `false`.

pub mod config;
pub mod connector;
pub mod domain;
pub mod ports;
pub mod usecases;

#[cfg(test)]
pub(crate) mod testing;

pub use connector::DesktopConnector;
