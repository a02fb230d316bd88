//! Traversal of the occupied region
//!
//! [`Iter`] walks from the read cursor to the write cursor, yielding copies
//! oldest first. It borrows the ring, so the ring cannot be advanced while an
//! iterator is alive; views sharing the storage still can, exactly as with
//! every other operation on shared slots.

use core::cell::Cell;
use core::iter::FusedIterator;

use crate::cursor;
use crate::errors::{RingError, RingResult};
use crate::ring::{Mode, RingBuffer};

/// Iterator over ring contents from oldest to newest
pub struct Iter<'r, T, const N: usize> {
    slots: &'r [Cell<T>],
    position: usize,
    remaining: usize,
}

impl<'r, T: Copy, const N: usize> Iterator for Iter<'r, T, N> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let item = self.slots[self.position].get();
        cursor::advance::<N>(&mut self.position);
        self.remaining -= 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T: Copy, const N: usize> ExactSizeIterator for Iter<'_, T, N> {}

impl<T: Copy, const N: usize> FusedIterator for Iter<'_, T, N> {}

impl<'a, T: Copy, const N: usize, M: Mode> RingBuffer<'a, T, N, M> {
    /// Iterate over stored elements from oldest to newest
    pub fn iter(&self) -> Iter<'_, T, N> {
        Iter {
            slots: self.slots,
            position: self.read,
            remaining: self.len(),
        }
    }

    /// Copies the occupied region, oldest first, into a fixed-capacity vector
    ///
    /// ```rust
    /// use ringbind::{Ring, RingError};
    ///
    /// let mut storage = [0u8; 8];
    /// let mut ring = Ring::bind(&mut storage);
    /// ring.push(3).push(1).push(4);
    ///
    /// let copy = ring.snapshot::<4>().unwrap();
    /// assert_eq!(copy.as_slice(), &[3, 1, 4]);
    ///
    /// assert_eq!(
    ///     ring.snapshot::<2>().unwrap_err(),
    ///     RingError::SnapshotOverflow { required: 3, available: 2 },
    /// );
    /// ```
    pub fn snapshot<const CAP: usize>(&self) -> RingResult<heapless::Vec<T, CAP>> {
        let required = self.len();
        if required > CAP {
            return Err(RingError::SnapshotOverflow { required, available: CAP });
        }

        let mut out = heapless::Vec::new();
        for item in self.iter() {
            out.push(item)
                .map_err(|_| RingError::SnapshotOverflow { required, available: CAP })?;
        }
        Ok(out)
    }
}

impl<'r, 'a, T: Copy, const N: usize, M: Mode> IntoIterator for &'r RingBuffer<'a, T, N, M> {
    type Item = T;
    type IntoIter = Iter<'r, T, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
