use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Index, IndexMut};

use super::RingBuffer;

impl<T> Default for RingBuffer<T> {
    #[inline]
    fn default() -> Self {
        RingBuffer::new()
    }
}

/// Duplicates the physical block verbatim, unused slots included, along
/// with both counters. The copy is equal to the original and fully
/// independent of it.
impl<T: Clone> Clone for RingBuffer<T> {
    fn clone(&self) -> Self {
        RingBuffer {
            storage: self.storage.clone(),
            begin: self.begin,
            len: self.len,
        }
    }
}

/// Buffers are equal iff their capacities, lengths and logical element
/// sequences all match. The physical `begin` offset does not participate:
/// two buffers holding the same elements at different physical positions
/// compare equal.
impl<T: PartialEq> PartialEq for RingBuffer<T> {
    fn eq(&self, other: &Self) -> bool {
        if self.capacity() != other.capacity() || self.len() != other.len() {
            return false;
        }
        (0..self.len()).all(|i| self.storage[self.slot(i)] == other.storage[other.slot(i)])
    }
}

impl<T: Eq> Eq for RingBuffer<T> {}

impl<T: Hash> Hash for RingBuffer<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.capacity().hash(state);
        self.len().hash(state);
        for i in 0..self.len() {
            self.storage[self.slot(i)].hash(state);
        }
    }
}

impl<T> Index<usize> for RingBuffer<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        let len = self.len();
        self.get(index).unwrap_or_else(|| {
            panic!(
                "index out of bounds: the len is {} but the index is {}",
                len, index
            )
        })
    }
}

impl<T> IndexMut<usize> for RingBuffer<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        let len = self.len();
        self.get_mut(index).unwrap_or_else(|| {
            panic!(
                "index out of bounds: the len is {} but the index is {}",
                len, index
            )
        })
    }
}

impl<T: fmt::Debug> fmt::Debug for RingBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries((0..self.len()).map(|i| &self.storage[self.slot(i)]))
            .finish()
    }
}
