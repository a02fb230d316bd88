//! Capacity limits
//!
//! One slot of every ring is permanently reserved so that `read == write`
//! always means "empty". A storage block of `N` slots therefore holds at most
//! `N - 1` elements, and a block must have at least two slots to hold anything.

/// Smallest storage block a ring can bind to.
///
/// Checked at compile time for `Ring::bind` and at runtime for
/// `Ring::try_from_slice`.
pub const MIN_CAPACITY: usize = 2;

/// Slots permanently held back from use to tell empty apart from full.
pub const RESERVED_SLOTS: usize = 1;

/// Usable element count for a storage block of `capacity` slots.
///
/// ```rust
/// use ringbind::constants::usable_capacity;
/// assert_eq!(usable_capacity(4), 3);
/// assert_eq!(usable_capacity(2), 1);
/// ```
pub const fn usable_capacity(capacity: usize) -> usize {
    capacity.saturating_sub(RESERVED_SLOTS)
}
