//! Process table port (driven/secondary port)
//!
//! Before a forced sync the connector is told, for every live process, that
//! the process has released the file. This port supplies that process list.

/// Port trait for enumerating running OS processes
pub trait IProcessTable: Send + Sync {
    /// Snapshot of the identifiers of all currently running processes
    ///
    /// An empty list is a valid answer when enumeration is unavailable.
    /// Implementations may block; async callers run this on the blocking
    /// thread pool.
    fn running_process_ids(&self) -> Vec<u32>;
}
