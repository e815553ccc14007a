//! Process table adapter backed by `sysinfo`

use adclink_core::ports::IProcessTable;
use sysinfo::System;
use tracing::debug;

/// Snapshot of the host's running processes
///
/// Each call refreshes the process list, so the result reflects the moment
/// of the call. The refresh reads the OS process table synchronously.
#[derive(Debug, Clone, Default)]
pub struct SystemProcessTable;

impl SystemProcessTable {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl IProcessTable for SystemProcessTable {
    fn running_process_ids(&self) -> Vec<u32> {
        let mut sys = System::new();
        sys.refresh_processes();

        let mut pids: Vec<u32> = sys.processes().keys().map(|pid| pid.as_u32()).collect();
        pids.sort_unstable();
        debug!(count = pids.len(), "Enumerated running processes");
        pids
    }
}
