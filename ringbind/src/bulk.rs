//! Bulk and Transform Operations over the Occupied Region
//!
//! Every operation here walks the ring from the read cursor to the write
//! cursor. Bounds follow from the occupancy, not from `N`:
//!
//! | Operation | Cost |
//! |-----------|------|
//! | `each`, `map` | O(len) |
//! | `fill`, `fill_with` | O(free) writes |
//! | `trim` | O(removed) |
//! | `sort_by` | O(len²) comparisons |
//!
//! All of them return the ring again so they chain with `push`/`pop`:
//!
//! ```rust
//! use ringbind::Ring;
//!
//! let mut storage = [0i16; 8];
//! let mut ring = Ring::bind(&mut storage);
//!
//! ring.push(0).push(0).push(-4).push(2)
//!     .trim(|v| *v == 0)
//!     .map(|v| v.abs())
//!     .sort();
//!
//! let mut seen = [0i16; 2];
//! let mut i = 0;
//! ring.each(|v| { seen[i] = *v; i += 1; });
//! assert_eq!(seen, [2, 4]);
//! ```

use crate::cursor;
use crate::ring::{Mode, RingBuffer};

impl<'a, T: Copy, const N: usize, M: Mode> RingBuffer<'a, T, N, M> {
    /// Calls `visitor` once per stored element, oldest first
    pub fn each<F>(&self, mut visitor: F) -> &Self
    where
        F: FnMut(&T),
    {
        let mut position = self.read;
        while position != self.write {
            visitor(&self.slots[position].get());
            cursor::advance::<N>(&mut position);
        }
        self
    }

    /// Replaces every stored element with `transform(element)`
    pub fn map<F>(&mut self, mut transform: F) -> &mut Self
    where
        F: FnMut(&T) -> T,
    {
        let mut position = self.read;
        while position != self.write {
            let slot = &self.slots[position];
            slot.set(transform(&slot.get()));
            cursor::advance::<N>(&mut position);
        }
        self
    }

    /// Writes `value` until the ring is full
    pub fn fill(&mut self, value: T) -> &mut Self {
        while !self.is_full() {
            self.write(value);
        }
        self
    }

    /// Writes `generator()` until the ring is full, one call per write
    ///
    /// ```rust
    /// use ringbind::Ring;
    ///
    /// let mut storage = [0u32; 5];
    /// let mut ring = Ring::bind(&mut storage);
    ///
    /// let mut next = 0;
    /// ring.push(100).fill_with(|| { next += 1; next });
    /// assert_eq!(ring.len(), 4);
    /// assert_eq!(ring.last(), Some(3));
    /// ```
    pub fn fill_with<F>(&mut self, mut generator: F) -> &mut Self
    where
        F: FnMut() -> T,
    {
        while !self.is_full() {
            self.write(generator());
        }
        self
    }

    /// Drops elements from the front while `predicate` holds
    ///
    /// Stops at the first element the predicate rejects, or when the ring
    /// runs empty. Elements behind a rejected one are never inspected.
    pub fn trim<F>(&mut self, mut predicate: F) -> &mut Self
    where
        F: FnMut(&T) -> bool,
    {
        while !self.is_empty() && predicate(&self.peek()) {
            self.pop();
        }
        self
    }

    /// Sorts stored elements in place; `precedes(a, b)` means `a` goes first
    ///
    /// `precedes` must be a strict weak ordering (like `<`). Exchange sort:
    /// each outer slot is compared against every later slot and swapped with
    /// it whenever `precedes(outer, later)` is false, which leaves the outer
    /// slot holding the minimum of the remainder. A pass that leaves the rest
    /// of the range free of adjacent inversions ends the sort early.
    ///
    /// Quadratic, in-place and allocation-free. Meant for the short queues of
    /// embedded firmware, not for large data sets.
    pub fn sort_by<F>(&mut self, mut precedes: F) -> &mut Self
    where
        F: FnMut(&T, &T) -> bool,
    {
        let slots = self.slots;
        let mut outer = self.read;

        while outer != self.write {
            let mut ordered = true;
            let mut previous = outer;
            let mut inner = cursor::next::<N>(outer);

            while inner != self.write {
                if !precedes(&slots[outer].get(), &slots[inner].get()) {
                    slots[outer].swap(&slots[inner]);
                }
                if previous != outer && precedes(&slots[inner].get(), &slots[previous].get()) {
                    ordered = false;
                }
                previous = inner;
                cursor::advance::<N>(&mut inner);
            }

            if ordered {
                break;
            }
            cursor::advance::<N>(&mut outer);
        }
        self
    }

    /// Sorts stored elements in ascending order
    pub fn sort(&mut self) -> &mut Self
    where
        T: PartialOrd,
    {
        self.sort_by(|a, b| a < b)
    }
}
