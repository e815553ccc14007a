//! adclink local - host-side adapters
//!
//! Implements the core's host-facing ports:
//!
//! - [`filesystem`] - [`ILocalFileSystem`] over `tokio::fs`
//! - [`processes`] - [`IProcessTable`] over `sysinfo`
//!
//! [`ILocalFileSystem`]: adclink_core::ports::ILocalFileSystem
//! [`IProcessTable`]: adclink_core::ports::IProcessTable

pub mod filesystem;
pub mod processes;

pub use filesystem::LocalFileSystemAdapter;
pub use processes::SystemProcessTable;
