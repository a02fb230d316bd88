//! Views, Physical Alignment and Reset
//!
//! ## Views
//!
//! A [`View`] is a second cursor pair over the same slots. Two are available:
//!
//! - [`dup`](RingBuffer::dup): same cursors as the source, a snapshot of "what
//!   is queued right now" that can be consumed without touching the source.
//! - [`extent`](RingBuffer::extent): cursors swapped, so the *free* slots look
//!   like the occupied region. `extent().extent()` is the original region again.
//!
//! ```text
//!                read              write
//!                  ↓                 ↓
//! ring    [  .  ,  A  ,  B  ,  C  ,  .  ,  .  ]
//!                  └── occupied ──┘  └─ free ─┘
//!
//! extent  [  .  ,  A  ,  B  ,  C  ,  .  ,  .  ]
//!          ─┘      ↑                 ↑     └──
//!        occupied write            read  occupied
//! ```
//!
//! Views alias the storage. Data written through one handle is visible through
//! all of them, but cursors move independently, so a writer can overwrite
//! slots another handle still considers unread. That is the contract of a
//! shared block, not a fault in the ring; keep views short-lived.
//!
//! ## Alignment
//!
//! [`align`](RingBuffer::align) rotates the whole storage in place so that
//! the oldest element lands in slot 0 and the occupied region becomes
//! `storage[..len]`. Handy before handing the data to a DMA engine or a
//! checksum routine that wants one contiguous slice. Views taken before an
//! `align` keep their old cursor values and no longer describe the data.

use core::cell::Cell;

use crate::ring::{Alias, Mode, RingBuffer};

pub use crate::ring::View;

impl<T, const N: usize> Clone for RingBuffer<'_, T, N, Alias> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, const N: usize> Copy for RingBuffer<'_, T, N, Alias> {}

impl<'a, T: Copy, const N: usize, M: Mode> RingBuffer<'a, T, N, M> {
    /// Shallow copy with independent cursors over the same storage
    ///
    /// ```rust
    /// use ringbind::Ring;
    ///
    /// let mut storage = [0u8; 8];
    /// let mut ring = Ring::bind(&mut storage);
    /// ring.push(1).push(2).push(3);
    ///
    /// let mut peek_ahead = ring.dup();
    /// assert_eq!(peek_ahead.read(), 1);
    /// assert_eq!(peek_ahead.read(), 2);
    ///
    /// // The ring itself has not moved
    /// assert_eq!(ring.len(), 3);
    /// assert_eq!(ring.peek(), 1);
    /// ```
    ///
    /// Writing through either handle can overwrite data the other still
    /// considers queued.
    pub fn dup(&self) -> View<'a, T, N> {
        RingBuffer::from_parts(self.slots, self.cursors())
    }

    /// The free slots, seen as a ring of their own
    ///
    /// The returned view reads from this ring's write cursor up to its read
    /// cursor. Taking the extent of the extent gives back this ring's region.
    ///
    /// ```rust
    /// use ringbind::Ring;
    ///
    /// let mut storage = [0xFFu8; 6];
    /// let mut ring = Ring::bind(&mut storage);
    /// ring.push(1).push(2);
    ///
    /// // Scrub the free space without disturbing queued data
    /// ring.extent().map(|_| 0);
    /// assert_eq!(ring.slot(4), Some(0));
    /// assert_eq!(ring.iter().collect::<Vec<_>>(), vec![1, 2]);
    /// ```
    ///
    /// An empty ring has an empty extent: `read == write` never means full.
    pub fn extent(&self) -> View<'a, T, N> {
        RingBuffer::from_parts(self.slots, self.cursors().swapped())
    }

    /// Rotates storage in place so the oldest element sits in slot 0
    ///
    /// Afterwards `read == 0`, `write == len()`, and slot `i` holds the
    /// `i`-th oldest element. Contents, count and order are unchanged.
    /// Costs at most `N` swaps and no extra memory.
    ///
    /// Every other handle on this storage is stale afterwards.
    ///
    /// ```rust
    /// use ringbind::Ring;
    ///
    /// let mut storage = [0u8; 5];
    /// {
    ///     let mut ring = Ring::bind(&mut storage);
    ///     ring.push(1).push(2).push(3).pop().pop().push(4).push(5).push(6);
    ///     ring.align();
    /// }
    /// assert_eq!(&storage[..4], &[3, 4, 5, 6]);
    /// ```
    pub fn align(&mut self) -> &mut Self {
        let len = self.len();
        let shift = self.read;

        if len > 0 && shift > 0 {
            rotate_left(self.slots, shift);
            ring_debug!("aligned {} slots, shifted left by {}", N, shift);
        }

        self.read = 0;
        self.write = len;
        self
    }

    /// Empties the ring and moves both cursors back to slot 0
    ///
    /// Old values stay in storage but are unreachable through the ring.
    pub fn clear(&mut self) -> &mut Self {
        ring_trace!("clearing ring of {} elements", self.len());
        self.read = 0;
        self.write = 0;
        self
    }
}

/// Rotates `slots` left by `shift` using block swaps only
///
/// `A` is the block still to move right, `B` the block still to move left;
/// `a_len` and `b_len` are their widths, both strictly positive throughout.
/// Each step swaps the shorter block into its final place and shrinks the
/// longer one by that width. When the widths meet the last swap finishes the
/// rotation. Every swap puts at least one element in its final slot, hence at
/// most `slots.len()` swaps.
fn rotate_left<T>(slots: &[Cell<T>], shift: usize) {
    let n = slots.len();
    if shift == 0 || shift >= n {
        return;
    }

    let mut a_len = shift;
    let mut b_len = n - shift;

    while a_len != b_len {
        if a_len > b_len {
            swap_blocks(slots, shift - a_len, shift, b_len);
            a_len -= b_len;
        } else {
            swap_blocks(slots, shift - a_len, shift + b_len - a_len, a_len);
            b_len -= a_len;
        }
    }

    swap_blocks(slots, shift - a_len, shift, a_len);
}

fn swap_blocks<T>(slots: &[Cell<T>], left: usize, right: usize, width: usize) {
    for offset in 0..width {
        slots[left + offset].swap(&slots[right + offset]);
    }
}
