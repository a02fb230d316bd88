//! Ring Buffer Bound to Caller-Supplied Storage
//!
//! ## Overview
//!
//! [`Ring`] is a fixed-capacity FIFO that never allocates. It does not own its
//! slots: the host declares a `[T; N]` somewhere (a `static`, a stack frame,
//! a DMA region) and binds a ring to it. The ring itself is two cursors and a
//! borrow, so it costs three words regardless of `N`.
//!
//! ```text
//!  storage: [T; 6]
//! ┌─────┬─────┬─────┬─────┬─────┬─────┐
//! │     │  A  │  B  │  C  │     │     │
//! └─────┴─────┴─────┴─────┴─────┴─────┘
//!          ↑                 ↑
//!        read              write
//!      (oldest)       (next slot written)
//! ```
//!
//! ### Reserved Slot
//!
//! `read == write` always means empty, so a ring over `N` slots holds at most
//! `N - 1` elements. A full ring has exactly one free slot between `write`
//! and `read`. This keeps `len()` a single subtraction with no extra counter.
//!
//! ### Overflow Policy
//!
//! `write` never fails. When the ring is full, the write lands in the reserved
//! slot and `read` is pushed forward, dropping the oldest element. Recent data
//! wins, which is what sensor histories and UART receive queues want.
//!
//! ### Shared Storage and Views
//!
//! At bind time the exclusive `&mut [T; N]` is turned into a shared slice of
//! `Cell<T>`. That lets [`dup`](RingBuffer::dup) and
//! [`extent`](RingBuffer::extent) hand out [`View`]s that read and write the
//! *same* slots with their own cursors, all in safe code. The price is the
//! `T: Copy` bound on the operations and the fact that rings are neither
//! `Send` nor `Sync`: a ring shared with an interrupt handler must sit behind
//! the host's own critical section.
//!
//! ## Usage Example
//!
//! ```rust
//! use ringbind::Ring;
//!
//! let mut storage = [0u16; 4];
//! let mut ring = Ring::bind(&mut storage);
//!
//! ring.push(1).push(2).push(3);
//! assert!(ring.is_full());
//!
//! // Full: the oldest element (1) is dropped
//! ring.push(4);
//! assert_eq!(ring.read(), 2);
//! assert_eq!(ring.len(), 2);
//! ```

use core::cell::Cell;
use core::convert::Infallible;
use core::fmt;
use core::marker::PhantomData;

use crate::constants::{usable_capacity, MIN_CAPACITY};
use crate::cursor::{self, Cursors};
use crate::errors::{RingError, RingResult};

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::Owner {}
    impl Sealed for super::Alias {}
}

/// Distinguishes the bound ring from the views derived from it
pub trait Mode: sealed::Sealed {}

/// Marker for the ring created by binding storage
#[derive(Debug)]
pub enum Owner {}

/// Marker for a `dup`/`extent` view sharing another ring's storage
#[derive(Debug)]
pub enum Alias {}

impl Mode for Owner {}
impl Mode for Alias {}

/// Fixed-capacity ring over `N` externally owned slots
///
/// Use it through the [`Ring`] and [`View`] aliases. Every read/write and
/// bulk operation is available on both; only construction differs.
///
/// ## Internal Invariants
///
/// - `read < N` and `write < N`
/// - `len() == (write - read) mod N`, hence `len() <= N - 1`
/// - the occupied region is `read, read+1, ..., write-1` taken modulo `N`
pub struct RingBuffer<'a, T, const N: usize, M: Mode = Owner> {
    /// The bound storage, always exactly `N` cells
    pub(crate) slots: &'a [Cell<T>],

    /// Slot of the oldest unread element
    pub(crate) read: usize,

    /// Slot the next write lands in
    pub(crate) write: usize,

    pub(crate) mode: PhantomData<M>,
}

/// A ring bound to storage. Not cloneable; derive views with `dup`/`extent`.
pub type Ring<'a, T, const N: usize> = RingBuffer<'a, T, N, Owner>;

/// An aliasing view over another ring's storage with independent cursors.
pub type View<'a, T, const N: usize> = RingBuffer<'a, T, N, Alias>;

impl<'a, T, const N: usize, M: Mode> RingBuffer<'a, T, N, M> {
    /// Rejects `N < 2` when a constructor is monomorphised
    const CAPACITY_CHECK: () = assert!(N >= MIN_CAPACITY, "ring storage needs at least 2 slots");

    pub(crate) fn from_parts(slots: &'a [Cell<T>], cursors: Cursors) -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::CAPACITY_CHECK;
        ring_assert!(slots.len() == N, "storage length differs from N");
        ring_assert!(cursor::in_bounds::<N>(cursors.read), "read cursor outside storage");
        ring_assert!(cursor::in_bounds::<N>(cursors.write), "write cursor outside storage");

        Self {
            slots,
            read: cursors.read,
            write: cursors.write,
            mode: PhantomData,
        }
    }
}

impl<'a, T, const N: usize> Ring<'a, T, N> {
    /// Binds an empty ring to `storage`, both cursors at slot 0
    ///
    /// The storage stays exclusively borrowed for as long as the ring or any
    /// view derived from it is alive. Existing contents are left in place
    /// but are not part of the ring.
    ///
    /// Storage with fewer than two slots fails to compile:
    ///
    /// ```compile_fail
    /// use ringbind::Ring;
    /// let mut storage = [0u8; 1];
    /// let ring = Ring::bind(&mut storage);
    /// let _ = ring.len();
    /// ```
    pub fn bind(storage: &'a mut [T; N]) -> Self {
        Self::from_parts(into_cells(storage), Cursors::ORIGIN)
    }

    /// Binds to storage that already holds data between `cursors.read` and
    /// `cursors.write`
    ///
    /// Used to re-attach after a warm reset where the storage survived
    /// (e.g. a `.noinit` RAM section) and the cursors were saved elsewhere.
    pub fn bind_at(storage: &'a mut [T; N], cursors: Cursors) -> RingResult<Self> {
        for position in [cursors.read, cursors.write] {
            if !cursor::in_bounds::<N>(position) {
                ring_warn!("bind rejected: cursor {} outside {} slots", position, N);
                return Err(RingError::CursorOutOfBounds { cursor: position, capacity: N });
            }
        }

        Ok(Self::from_parts(into_cells(storage), cursors))
    }

    /// Binds to a runtime-sized slice, which must have exactly `N` slots
    ///
    /// ```rust
    /// use ringbind::{Ring, RingError};
    ///
    /// let mut pool = [0u8; 16];
    /// let (head, _tail) = pool.split_at_mut(8);
    /// let ring = Ring::<u8, 8>::try_from_slice(head).unwrap();
    /// assert_eq!(ring.capacity(), 8);
    ///
    /// let mut short = [0u8; 3];
    /// assert_eq!(
    ///     Ring::<u8, 8>::try_from_slice(&mut short).unwrap_err(),
    ///     RingError::LengthMismatch { expected: 8, actual: 3 },
    /// );
    /// ```
    pub fn try_from_slice(storage: &'a mut [T]) -> RingResult<Self> {
        let actual = storage.len();
        if actual < MIN_CAPACITY {
            ring_warn!("bind rejected: {} slots is below the minimum", actual);
            return Err(RingError::CapacityTooSmall { capacity: actual });
        }

        let storage: &'a mut [T; N] = storage.try_into().map_err(|_| {
            ring_warn!("bind rejected: {} slots, expected {}", actual, N);
            RingError::LengthMismatch { expected: N, actual }
        })?;

        Ok(Self::bind(storage))
    }
}

fn into_cells<T>(storage: &mut [T]) -> &[Cell<T>] {
    Cell::from_mut(storage).as_slice_of_cells()
}

impl<'a, T: Copy, const N: usize, M: Mode> RingBuffer<'a, T, N, M> {
    /// Total slot count of the bound storage
    #[inline]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Largest possible `len()`, one less than `capacity()`
    #[inline]
    pub const fn usable_capacity(&self) -> usize {
        usable_capacity(N)
    }

    /// Number of occupied slots, always in `0..N`
    #[inline]
    pub fn len(&self) -> usize {
        cursor::distance::<N>(self.read, self.write)
    }

    /// Check if no element is stored
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.read == self.write
    }

    /// Check if the next write will drop the oldest element
    #[inline]
    pub fn is_full(&self) -> bool {
        self.len() == usable_capacity(N)
    }

    /// Writes still possible before the ring starts dropping data
    #[inline]
    pub fn free(&self) -> usize {
        usable_capacity(N) - self.len()
    }

    /// Current cursor positions
    #[inline]
    pub fn cursors(&self) -> Cursors {
        Cursors { read: self.read, write: self.write }
    }

    /// Stores `value` at the write cursor and advances it
    ///
    /// Never fails. On a full ring the oldest element is dropped to make
    /// room. The returned slot handle stays valid for the storage lifetime
    /// and can be used to patch the value in place:
    ///
    /// ```rust
    /// use ringbind::Ring;
    ///
    /// let mut storage = [0i32; 4];
    /// let mut ring = Ring::bind(&mut storage);
    ///
    /// let slot = ring.write(10);
    /// slot.set(slot.get() + 1);
    /// assert_eq!(ring.read(), 11);
    /// ```
    pub fn write(&mut self, value: T) -> &'a Cell<T> {
        let slots = self.slots;
        let slot = &slots[self.write];
        slot.set(value);

        if cursor::advance::<N>(&mut self.write) == self.read {
            ring_trace!("ring full, dropping slot {}", self.read);
            cursor::advance::<N>(&mut self.read);
        }

        slot
    }

    /// Removes and returns the oldest element
    ///
    /// The ring must not be empty. This is checked only by a debug assertion
    /// (or with the `strict-checks` feature): on an empty ring the stale slot
    /// value is returned and the ring wraps into a logically full, garbage
    /// state. Check [`is_empty`](Self::is_empty) first or use
    /// [`try_read`](Self::try_read).
    #[inline]
    pub fn read(&mut self) -> T {
        ring_assert!(!self.is_empty(), "read from empty ring");
        let value = self.slots[self.read].get();
        cursor::advance::<N>(&mut self.read);
        value
    }

    /// Returns the oldest element without removing it
    ///
    /// Same precondition as [`read`](Self::read).
    #[inline]
    pub fn peek(&self) -> T {
        ring_assert!(!self.is_empty(), "peek into empty ring");
        self.slots[self.read].get()
    }

    /// Checked [`read`](Self::read)
    pub fn try_read(&mut self) -> RingResult<T> {
        if self.is_empty() {
            return Err(RingError::Empty);
        }
        Ok(self.read())
    }

    /// Checked [`peek`](Self::peek)
    pub fn try_peek(&self) -> RingResult<T> {
        if self.is_empty() {
            return Err(RingError::Empty);
        }
        Ok(self.peek())
    }

    /// Non-blocking read for polling consumers
    ///
    /// Returns `WouldBlock` while the ring is empty, so it composes with
    /// `nb::block!` and other `nb`-based drivers.
    ///
    /// ```rust
    /// use ringbind::Ring;
    ///
    /// let mut storage = [0u8; 8];
    /// let mut ring = Ring::bind(&mut storage);
    /// assert_eq!(ring.poll_read(), Err(nb::Error::WouldBlock));
    ///
    /// ring.write(0x42);
    /// assert_eq!(nb::block!(ring.poll_read()), Ok(0x42));
    /// ```
    pub fn poll_read(&mut self) -> nb::Result<T, Infallible> {
        if self.is_empty() {
            return Err(nb::Error::WouldBlock);
        }
        Ok(self.read())
    }

    /// Chainable [`write`](Self::write)
    pub fn push(&mut self, value: T) -> &mut Self {
        self.write(value);
        self
    }

    /// Chainable [`read`](Self::read) into `out`
    ///
    /// ```rust
    /// use ringbind::Ring;
    ///
    /// let mut storage = [0u8; 4];
    /// let mut ring = Ring::bind(&mut storage);
    /// ring.push(1).push(2);
    ///
    /// let (mut a, mut b) = (0, 0);
    /// ring.pop_into(&mut a).pop_into(&mut b);
    /// assert_eq!((a, b), (1, 2));
    /// ```
    pub fn pop_into(&mut self, out: &mut T) -> &mut Self {
        *out = self.read();
        self
    }

    /// Drops the oldest element; same precondition as [`read`](Self::read)
    pub fn pop(&mut self) -> &mut Self {
        ring_assert!(!self.is_empty(), "pop from empty ring");
        cursor::advance::<N>(&mut self.read);
        self
    }

    /// Element at logical position `index` (0 = oldest)
    pub fn get(&self, index: usize) -> Option<T> {
        if index >= self.len() {
            return None;
        }
        Some(self.slots[(self.read + index) % N].get())
    }

    /// Most recently written element
    pub fn last(&self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let newest = cursor::normalize::<N>(self.write as isize - 1);
        Some(self.slots[newest].get())
    }

    /// Raw contents of storage slot `index`, occupied or not
    ///
    /// Intended for diagnostics; pair it with
    /// [`contains_index`](Self::contains_index) to tell live data from stale.
    pub fn slot(&self, index: usize) -> Option<T> {
        self.slots.get(index).map(Cell::get)
    }

    /// True if storage slot `index` currently holds an occupied element
    pub fn contains_index(&self, index: usize) -> bool {
        cursor::in_region::<N>(self.read, self.write, index)
    }

    /// True if `index` names a storage slot
    #[inline]
    pub fn in_bounds(&self, index: usize) -> bool {
        cursor::in_bounds::<N>(index)
    }

    /// Maps a relative slot position back into `0..N`
    #[inline]
    pub fn normalize(&self, position: isize) -> usize {
        cursor::normalize::<N>(position)
    }
}

struct Occupied<'r, 'a, T, const N: usize, M: Mode>(&'r RingBuffer<'a, T, N, M>);

impl<T: Copy + fmt::Debug, const N: usize, M: Mode> fmt::Debug for Occupied<'_, '_, T, N, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}

impl<T: Copy + fmt::Debug, const N: usize, M: Mode> fmt::Debug for RingBuffer<'_, T, N, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RingBuffer")
            .field("capacity", &N)
            .field("read", &self.read)
            .field("write", &self.write)
            .field("data", &Occupied(self))
            .finish()
    }
}
