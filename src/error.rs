use thiserror::Error;

/// Errors raised while probing the process memory.
#[derive(Debug, Error)]
pub enum Error {
    /// The process status could not be read.
    #[cfg(target_os = "linux")]
    #[error("cannot read process status: {0}")]
    Procfs(#[source] Box<procfs::ProcError>),

    /// The resident size does not fit in memory addresses.
    #[error("{pages} resident pages overflow the address space")]
    Overflow {
        /// Resident page count.
        pages: u64,
    },

    /// Resident memory cannot be probed on this platform.
    #[error("resident memory probing is only supported on Linux")]
    Unsupported,
}

#[cfg(target_os = "linux")]
impl From<procfs::ProcError> for Error {
    fn from(err: procfs::ProcError) -> Self {
        Self::Procfs(Box::new(err))
    }
}

/// A specialized Result type for memory probing.
pub type Result<T> = std::result::Result<T, Error>;
