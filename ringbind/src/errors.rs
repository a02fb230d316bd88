//! Error Types for Checked Ring Operations
//!
//! ## Design Philosophy
//!
//! The hot path never reports errors. `write` always succeeds (the oldest
//! element is dropped on overflow), `fill` stops at full and `trim` stops at
//! the first kept element. Reading an empty ring through `read`/`peek` is a
//! caller precondition, checked only by debug assertions.
//!
//! `RingError` exists for the code paths that *choose* to check:
//!
//! - `try_read` / `try_peek` report [`RingError::Empty`]
//! - `try_from_slice` / `bind_at` reject storage or cursors that cannot form a ring
//! - `snapshot` reports a destination too small for the occupied region
//!
//! Like the rest of the crate, errors carry only inline `Copy` data so they
//! can be returned from interrupt context and stored without allocation.
//!
//! ```rust
//! use ringbind::{Ring, RingError};
//!
//! let mut storage = [0u8; 4];
//! let mut ring = Ring::bind(&mut storage);
//!
//! match ring.try_read() {
//!     Ok(byte) => { let _ = byte; }
//!     Err(RingError::Empty) => { /* nothing received yet */ }
//!     Err(_) => unreachable!(),
//! }
//! ```

use thiserror_no_std::Error;

/// Result type for checked ring operations
pub type RingResult<T> = Result<T, RingError>;

/// Errors reported by the checked ring operations
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RingError {
    /// Checked read or peek on a ring with no occupied slots
    #[error("ring buffer is empty")]
    Empty,

    /// Storage block too small to hold any element
    #[error("capacity {capacity} is below the minimum of 2 slots")]
    CapacityTooSmall {
        /// Slot count of the rejected storage
        capacity: usize,
    },

    /// Runtime-sized storage does not match the ring's slot count
    #[error("storage has {actual} slots, ring expects {expected}")]
    LengthMismatch {
        /// Slot count required by the ring type
        expected: usize,
        /// Slot count of the supplied storage
        actual: usize,
    },

    /// A cursor handed to `bind_at` lies outside the storage
    #[error("cursor {cursor} outside storage of {capacity} slots")]
    CursorOutOfBounds {
        /// The offending cursor value
        cursor: usize,
        /// Slot count of the storage
        capacity: usize,
    },

    /// Destination of a snapshot cannot hold every occupied element
    #[error("snapshot needs {required} slots, destination has {available}")]
    SnapshotOverflow {
        /// Occupied elements to copy
        required: usize,
        /// Capacity of the destination
        available: usize,
    },
}

#[cfg(feature = "defmt")]
impl defmt::Format for RingError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::Empty =>
                defmt::write!(fmt, "Ring empty"),
            Self::CapacityTooSmall { capacity } =>
                defmt::write!(fmt, "Capacity {} below 2", capacity),
            Self::LengthMismatch { expected, actual } =>
                defmt::write!(fmt, "Storage {} slots, expected {}", actual, expected),
            Self::CursorOutOfBounds { cursor, capacity } =>
                defmt::write!(fmt, "Cursor {} outside [0, {})", cursor, capacity),
            Self::SnapshotOverflow { required, available } =>
                defmt::write!(fmt, "Snapshot needs {}, have {}", required, available),
        }
    }
}
