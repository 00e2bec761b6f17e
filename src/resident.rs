//! Resident memory of the current process.
//!
//! Reads the same figure `ps -o rss` reports, through procfs.

use crate::{stats::human_size, Error, Result};
use std::fmt;

/// Resident set size of a process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResidentMemory {
    /// Resident bytes.
    pub bytes: usize,
}

impl ResidentMemory {
    /// Converts a number of resident pages into bytes.
    ///
    /// # Errors
    ///
    /// Fails if the size does not fit in memory addresses.
    pub fn from_pages(pages: u64, page_size: u64) -> Result<Self> {
        pages
            .checked_mul(page_size)
            .and_then(|bytes| usize::try_from(bytes).ok())
            .map(|bytes| Self { bytes })
            .ok_or(Error::Overflow { pages })
    }
}

impl fmt::Display for ResidentMemory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&human_size(self.bytes))
    }
}

/// Reads the resident memory of the current process.
///
/// # Errors
///
/// Fails if procfs cannot be read, or everywhere but on Linux.
#[cfg(target_os = "linux")]
pub fn current() -> Result<ResidentMemory> {
    let statm = procfs::process::Process::myself()?.statm()?;

    ResidentMemory::from_pages(statm.resident, procfs::page_size())
}

/// Reads the resident memory of the current process.
///
/// # Errors
///
/// Fails if procfs cannot be read, or everywhere but on Linux.
#[cfg(not(target_os = "linux"))]
pub fn current() -> Result<ResidentMemory> {
    Err(Error::Unsupported)
}

/// Logs the resident memory of the current process.
///
/// Probing is best-effort: a failure is only reported as a warning.
pub fn log_current() {
    match current() {
        Ok(resident) => log::info!("resident memory: {}", resident),
        Err(err) => log::warn!("resident memory unavailable: {}", err),
    }
}
