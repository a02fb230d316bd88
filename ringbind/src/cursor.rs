//! Cursor Arithmetic over a Fixed Slot Range
//!
//! A ring is two indices into a storage block of `N` slots. Everything else
//! (length, fullness, traversal, rotation) is derived from them, so the
//! arithmetic lives here as small pure functions parameterised by `N`.
//!
//! ```text
//! N = 8, read = 5, write = 2   (wrapped)
//! ┌─────┬─────┬─────┬─────┬─────┬─────┬─────┬─────┐
//! │  F  │  G  │     │     │     │  C  │  D  │  E  │
//! └─────┴─────┴─────┴─────┴─────┴─────┴─────┴─────┘
//!             ↑                    ↑
//!           write                read
//!
//! occupied = [5, 8) ∪ [0, 2)      len = (2 - 5 + 8) % 8 = 5
//! ```
//!
//! Cursors are plain `usize` indices rather than pointers, so a cursor can be
//! copied into a view, serialized for diagnostics, or validated against the
//! storage without any reasoning about address validity.

/// Moves `cursor` one slot forward, wrapping to 0 past the last slot.
///
/// Returns the new position for call chaining.
#[inline]
pub fn advance<const N: usize>(cursor: &mut usize) -> usize {
    ring_assert!(*cursor < N, "cursor outside storage");
    *cursor += 1;
    if *cursor == N {
        *cursor = 0;
    }
    *cursor
}

/// The slot after `cursor`, with wraparound. Pure.
#[inline]
pub const fn next<const N: usize>(cursor: usize) -> usize {
    let next = cursor + 1;
    if next == N {
        0
    } else {
        next
    }
}

/// Maps a position that drifted outside `[0, N)` back onto a slot index.
///
/// Relative computations such as `write - 1` or `read + offset` may land on
/// either side of the storage; the result is always the slot they denote
/// modulo `N`.
///
/// ```rust
/// use ringbind::cursor::normalize;
/// assert_eq!(normalize::<5>(-1), 4);
/// assert_eq!(normalize::<5>(7), 2);
/// assert_eq!(normalize::<5>(3), 3);
/// ```
#[inline]
pub const fn normalize<const N: usize>(position: isize) -> usize {
    position.rem_euclid(N as isize) as usize
}

/// True if `position` is a valid slot index.
#[inline]
pub const fn in_bounds<const N: usize>(position: usize) -> bool {
    position < N
}

/// Number of slots from `read` forward up to (excluding) `write`.
#[inline]
pub const fn distance<const N: usize>(read: usize, write: usize) -> usize {
    (write + N - read) % N
}

/// True if `position` lies in the region `[read, write)` taken with wraparound.
///
/// Handles the contiguous case (`write > read`) and the wrapped case
/// (`write < read`, two sub-ranges). `read == write` is the empty region.
pub const fn in_region<const N: usize>(read: usize, write: usize, position: usize) -> bool {
    if write > read {
        read <= position && position < write
    } else if read > write {
        (read <= position && position < N) || position < write
    } else {
        false
    }
}

/// Read/write cursor pair of a ring or view at one point in time.
///
/// Handed out by `RingBuffer::cursors` for diagnostics and accepted by
/// `Ring::bind_at` to re-attach to storage that already holds data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cursors {
    /// Slot holding the oldest unread element
    pub read: usize,
    /// Slot the next write lands in
    pub write: usize,
}

impl Cursors {
    /// Both cursors at slot 0, the state of a freshly bound ring
    pub const ORIGIN: Self = Self { read: 0, write: 0 };

    /// The complementary pair: the free region seen as occupied
    pub const fn swapped(self) -> Self {
        Self { read: self.write, write: self.read }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Cursors {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "read={} write={}", self.read, self.write)
    }
}
