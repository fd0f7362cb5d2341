//! Error types for lp-rsqrt
//!
//! The math itself is total and has no error path; only writing harness
//! output to a byte sink can fail.

use core::fmt;

/// Error returned by a [`ByteSink`](crate::harness::ByteSink)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkError {
    /// Fixed-size sink has no room left for the write
    Full { needed: usize, available: usize },
    /// Write system call returned a negative status
    Syscall(i32),
    /// Underlying writer failed
    #[cfg(feature = "std")]
    Io(std::string::String),
}

impl fmt::Display for SinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SinkError::Full { needed, available } => {
                write!(
                    f,
                    "Sink full: needed {needed} bytes, {available} available"
                )
            }
            SinkError::Syscall(code) => write!(f, "Write syscall failed: {code}"),
            #[cfg(feature = "std")]
            SinkError::Io(msg) => write!(f, "I/O error: {msg}"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SinkError {
    // Default implementation is sufficient
}

#[cfg(feature = "std")]
impl From<std::io::Error> for SinkError {
    fn from(err: std::io::Error) -> Self {
        SinkError::Io(std::format!("{err}"))
    }
}
