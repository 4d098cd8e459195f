//! Error types for redid-core
//!
//! This module provides a no_std compatible error type that can be used
//! throughout the crate.

use core::fmt;

/// Core error type - no_std compatible, Copy for efficiency
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A fixed-offset read needed bytes past the end of the buffer
    OutOfRange {
        /// First byte of the requested span
        offset: usize,
        /// Length of the requested span
        len: usize,
        /// Number of bytes actually available
        available: usize,
    },
    /// A CTA-861 data block claims more payload than its collection holds
    MalformedDescriptor {
        /// Absolute offset of the offending block header
        offset: usize,
    },
}

impl Error {
    pub(crate) const fn out_of_range(offset: usize, len: usize, available: usize) -> Self {
        Self::OutOfRange {
            offset,
            len,
            available,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange {
                offset,
                len,
                available,
            } => write!(
                f,
                "read of {} byte(s) at offset 0x{:02X} exceeds buffer length {}",
                len, offset, available
            ),
            Self::MalformedDescriptor { offset } => {
                write!(f, "malformed CTA-861 data block at offset 0x{:02X}", offset)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// Result type alias using the core Error type
pub type Result<T> = core::result::Result<T, Error>;
