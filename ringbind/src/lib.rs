//! Fixed-capacity ring buffer over caller-supplied storage
//!
//! Binds to a `[T; N]` the host already owns and turns it into a FIFO with
//! a drop-oldest overflow policy, plus bulk helpers (each, map, fill, trim,
//! sort), aliasing views (dup, extent) and in-place re-alignment.
//! Designed for firmware that cannot allocate.
//!
//! Key constraints:
//! - No heap, no `unsafe`, no locks
//! - O(1) `write`/`read`/`peek`/`len`
//! - Usable capacity is `N - 1`; `N < 2` does not compile
//!
//! ```rust
//! use ringbind::Ring;
//!
//! let mut storage = [0u8; 64];
//! let mut rx = Ring::bind(&mut storage);
//!
//! // Interrupt side
//! for byte in b"\r\nOK" {
//!     rx.write(*byte);
//! }
//!
//! // Main loop side
//! rx.trim(|b| *b == b'\r' || *b == b'\n');
//! while let Ok(byte) = rx.try_read() {
//!     let _ = byte; // handle byte
//! }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

#[macro_use]
mod macros;

pub mod bulk;
pub mod constants;
pub mod cursor;
pub mod errors;
pub mod iter;
pub mod ring;
pub mod view;

// Public API
pub use cursor::Cursors;
pub use errors::{RingError, RingResult};
pub use iter::Iter;
pub use ring::{Alias, Mode, Owner, Ring, RingBuffer, View};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_exists() {
        assert!(!VERSION.is_empty());
    }
}
