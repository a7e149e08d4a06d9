use std::mem;

use crate::error::Error;
use crate::utils::{wrap_add, wrap_sub};

mod trait_impls;

/// A heap-allocated circular buffer with a fixed physical capacity.
///
/// The buffer keeps its elements in one contiguous block of `capacity`
/// slots. Elements are addressed by *logical* index: index `0` is the
/// oldest element, index `len() - 1` the newest, wherever they happen to
/// live physically. Pushing into a full buffer overwrites the element at
/// the opposite end instead of growing.
///
/// Every slot of the block always holds an initialized value; slots
/// outside the live window are reset to `T::default()` by the operations
/// that vacate them (`pop_front`, `pop_back`, `erase`, `clear`) and are
/// otherwise not meaningful.
///
/// # Examples
///
/// ```
/// use ringbuffer::RingBuffer;
///
/// let mut buffer: RingBuffer<i32> = RingBuffer::with_capacity(2);
/// buffer.push_back(1);
/// buffer.push_back(2);
/// assert_eq!(buffer.push_back(3), Some(1));
/// assert_eq!(buffer.front(), Ok(&2));
/// ```
pub struct RingBuffer<T> {
    storage: Box<[T]>,
    begin: usize,
    len: usize,
}

impl<T> RingBuffer<T> {
    #[inline]
    fn wrap_add(&self, index: usize, addend: usize) -> usize {
        wrap_add(index, addend, self.capacity())
    }

    #[inline]
    fn wrap_sub(&self, index: usize, subtrahend: usize) -> usize {
        wrap_sub(index, subtrahend, self.capacity())
    }

    /// Physical slot backing logical index `index`. Requires a non-zero
    /// capacity.
    #[inline]
    fn slot(&self, index: usize) -> usize {
        self.wrap_add(self.begin, index)
    }

    /// Physical slot where the next `push_back` lands. Requires a non-zero
    /// capacity.
    #[inline]
    fn end(&self) -> usize {
        self.wrap_add(self.begin, self.len)
    }

    /// Allocates a block of `capacity` default-initialized slots.
    #[inline]
    fn new_storage(capacity: usize) -> Box<[T]>
    where
        T: Default,
    {
        (0..capacity).map(|_| T::default()).collect()
    }
}

impl<T> RingBuffer<T> {
    /// Creates an empty `RingBuffer` with capacity 0.
    ///
    /// Nothing is allocated until [`set_capacity`](RingBuffer::set_capacity)
    /// is called.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringbuffer::RingBuffer;
    ///
    /// let buffer: RingBuffer<i32> = RingBuffer::new();
    /// assert_eq!(buffer.capacity(), 0);
    /// assert!(buffer.is_full());
    /// ```
    #[inline]
    pub fn new() -> Self {
        RingBuffer {
            storage: Vec::new().into_boxed_slice(),
            begin: 0,
            len: 0,
        }
    }

    /// Returns the number of elements in the `RingBuffer`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringbuffer::RingBuffer;
    ///
    /// let mut buffer: RingBuffer<i32> = RingBuffer::with_capacity(4);
    /// assert_eq!(buffer.len(), 0);
    /// buffer.push_back(1);
    /// assert_eq!(buffer.len(), 1);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns the number of slots in the physical storage block.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    /// Returns true if the buffer contains no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns true if every slot holds a live element.
    ///
    /// A zero-capacity buffer is always full.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringbuffer::RingBuffer;
    ///
    /// let mut buffer: RingBuffer<i32> = RingBuffer::with_capacity(1);
    /// assert!(!buffer.is_full());
    /// buffer.push_back(1);
    /// assert!(buffer.is_full());
    /// ```
    #[inline]
    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    /// Returns the number of elements that can still be pushed before the
    /// buffer starts overwriting.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringbuffer::RingBuffer;
    ///
    /// let mut buffer: RingBuffer<i32> = RingBuffer::with_capacity(4);
    /// buffer.push_back(1);
    /// assert_eq!(buffer.reserve(), 3);
    /// ```
    #[inline]
    pub fn reserve(&self) -> usize {
        self.capacity() - self.len
    }

    /// Returns true if the logical-first element sits at physical slot 0.
    #[inline]
    pub fn is_linearized(&self) -> bool {
        self.begin == 0
    }

    /// Retrieves the element at logical index `index`, or `None` if the
    /// index is out of range.
    ///
    /// Element at index 0 is the front of the buffer.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringbuffer::RingBuffer;
    ///
    /// let mut buffer: RingBuffer<i32> = RingBuffer::with_capacity(4);
    /// buffer.push_back(3);
    /// buffer.push_back(4);
    /// assert_eq!(buffer.get(1), Some(&4));
    /// assert_eq!(buffer.get(2), None);
    /// ```
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        if index < self.len {
            Some(&self.storage[self.slot(index)])
        } else {
            None
        }
    }

    /// Retrieves the element at logical index `index` mutably, or `None`
    /// if the index is out of range.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringbuffer::RingBuffer;
    ///
    /// let mut buffer: RingBuffer<i32> = RingBuffer::with_capacity(4);
    /// buffer.push_back(3);
    /// if let Some(elem) = buffer.get_mut(0) {
    ///     *elem = 7;
    /// }
    /// assert_eq!(buffer[0], 7);
    /// ```
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index < self.len {
            let slot = self.slot(index);
            Some(&mut self.storage[slot])
        } else {
            None
        }
    }

    /// Retrieves the element at logical index `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `index >= len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringbuffer::{Error, RingBuffer};
    ///
    /// let mut buffer: RingBuffer<i32> = RingBuffer::with_capacity(4);
    /// buffer.push_back(3);
    /// assert_eq!(buffer.at(0), Ok(&3));
    /// assert_eq!(buffer.at(1), Err(Error::OutOfRange { index: 1, bound: 1 }));
    /// ```
    #[inline]
    pub fn at(&self, index: usize) -> Result<&T, Error> {
        self.get(index).ok_or(Error::OutOfRange {
            index,
            bound: self.len,
        })
    }

    /// Retrieves the element at logical index `index` mutably.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `index >= len()`.
    #[inline]
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, Error> {
        let len = self.len;
        self.get_mut(index)
            .ok_or(Error::OutOfRange { index, bound: len })
    }

    /// Returns a reference to the logical-first element.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Empty`] if the buffer holds no elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringbuffer::{Error, RingBuffer};
    ///
    /// let mut buffer: RingBuffer<i32> = RingBuffer::with_capacity(3);
    /// assert_eq!(buffer.front(), Err(Error::Empty));
    /// buffer.push_back(1);
    /// buffer.push_back(2);
    /// assert_eq!(buffer.front(), Ok(&1));
    /// ```
    #[inline]
    pub fn front(&self) -> Result<&T, Error> {
        if self.is_empty() {
            return Err(Error::Empty);
        }
        Ok(&self.storage[self.begin])
    }

    /// Returns a mutable reference to the logical-first element.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Empty`] if the buffer holds no elements.
    #[inline]
    pub fn front_mut(&mut self) -> Result<&mut T, Error> {
        if self.is_empty() {
            return Err(Error::Empty);
        }
        Ok(&mut self.storage[self.begin])
    }

    /// Returns a reference to the logical-last element.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Empty`] if the buffer holds no elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringbuffer::RingBuffer;
    ///
    /// let mut buffer: RingBuffer<i32> = RingBuffer::with_capacity(3);
    /// buffer.push_back(1);
    /// buffer.push_back(2);
    /// assert_eq!(buffer.back(), Ok(&2));
    /// ```
    #[inline]
    pub fn back(&self) -> Result<&T, Error> {
        if self.is_empty() {
            return Err(Error::Empty);
        }
        Ok(&self.storage[self.slot(self.len - 1)])
    }

    /// Returns a mutable reference to the logical-last element.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Empty`] if the buffer holds no elements.
    #[inline]
    pub fn back_mut(&mut self) -> Result<&mut T, Error> {
        if self.is_empty() {
            return Err(Error::Empty);
        }
        let slot = self.slot(self.len - 1);
        Ok(&mut self.storage[slot])
    }

    /// Adds an element to the back of the buffer.
    ///
    /// Returns `None` while there is spare capacity, or `Some(evicted)`
    /// once the buffer is full, where `evicted` is the logical-first
    /// element that was overwritten. On a zero-capacity buffer the
    /// incoming element itself is discarded and returned.
    ///
    /// # Examples
    ///
    /// ```text
    /// [_, _, _] <-(+)- 1 => [1, _, _] -> None
    /// [1, _, _] <-(+)- 2 => [1, 2, _] -> None
    /// [1, 2, _] <-(+)- 3 => [1, 2, 3] -> None
    /// [1, 2, 3] <-(+)- 4 => [2, 3, 4] -> Some(1)
    /// ```
    ///
    /// ```
    /// use ringbuffer::RingBuffer;
    ///
    /// let mut buffer: RingBuffer<i32> = RingBuffer::with_capacity(3);
    /// buffer.push_back(1);
    /// buffer.push_back(2);
    /// buffer.push_back(3);
    /// let evicted = buffer.push_back(4);
    ///
    /// assert_eq!(evicted, Some(1));
    /// assert_eq!(buffer.back(), Ok(&4));
    /// ```
    pub fn push_back(&mut self, item: T) -> Option<T> {
        if self.capacity() == 0 {
            return Some(item);
        }
        if self.is_full() {
            // end == begin when full; the slot being overwritten holds the
            // oldest element.
            let end = self.end();
            let evicted = mem::replace(&mut self.storage[end], item);
            self.begin = self.wrap_add(self.begin, 1);
            Some(evicted)
        } else {
            let end = self.end();
            self.storage[end] = item;
            self.len += 1;
            None
        }
    }

    /// Adds an element to the front of the buffer.
    ///
    /// Returns `None` while there is spare capacity, or `Some(evicted)`
    /// once the buffer is full, where `evicted` is the logical-last
    /// element that was overwritten. On a zero-capacity buffer the
    /// incoming element itself is discarded and returned.
    ///
    /// # Examples
    ///
    /// ```text
    /// 1 -(+)-> [_, _, _] => [_, _, 1] -> None
    /// 2 -(+)-> [_, _, 1] => [_, 2, 1] -> None
    /// 3 -(+)-> [_, 2, 1] => [3, 2, 1] -> None
    /// 4 -(+)-> [3, 2, 1] => [4, 3, 2] -> Some(1)
    /// ```
    ///
    /// ```
    /// use ringbuffer::RingBuffer;
    ///
    /// let mut buffer: RingBuffer<i32> = RingBuffer::with_capacity(3);
    /// buffer.push_front(1);
    /// buffer.push_front(2);
    /// buffer.push_front(3);
    /// let evicted = buffer.push_front(4);
    ///
    /// assert_eq!(evicted, Some(1));
    /// assert_eq!(buffer.front(), Ok(&4));
    /// ```
    pub fn push_front(&mut self, item: T) -> Option<T> {
        if self.capacity() == 0 {
            return Some(item);
        }
        let new_begin = self.wrap_sub(self.begin, 1);
        let evicted = if self.is_full() {
            // The slot preceding begin is the logical-last slot when full.
            Some(mem::replace(&mut self.storage[new_begin], item))
        } else {
            self.storage[new_begin] = item;
            self.len += 1;
            None
        };
        self.begin = new_begin;
        evicted
    }
}

impl<T: Default> RingBuffer<T> {
    /// Creates an empty `RingBuffer` with the given physical capacity.
    ///
    /// All slots are allocated up front and hold `T::default()` until an
    /// element is written into them.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringbuffer::RingBuffer;
    ///
    /// let buffer: RingBuffer<i32> = RingBuffer::with_capacity(4);
    /// assert_eq!(buffer.capacity(), 4);
    /// assert_eq!(buffer.len(), 0);
    /// assert_eq!(buffer.reserve(), 4);
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        RingBuffer {
            storage: Self::new_storage(capacity),
            begin: 0,
            len: 0,
        }
    }

    /// Removes the logical-last element and returns it, resetting the
    /// vacated slot to `T::default()`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Empty`] if the buffer holds no elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringbuffer::{Error, RingBuffer};
    ///
    /// let mut buffer: RingBuffer<i32> = RingBuffer::with_capacity(3);
    /// buffer.push_back(1);
    /// buffer.push_back(3);
    /// assert_eq!(buffer.pop_back(), Ok(3));
    /// assert_eq!(buffer.pop_back(), Ok(1));
    /// assert_eq!(buffer.pop_back(), Err(Error::Empty));
    /// ```
    pub fn pop_back(&mut self) -> Result<T, Error> {
        if self.is_empty() {
            return Err(Error::Empty);
        }
        let slot = self.slot(self.len - 1);
        self.len -= 1;
        Ok(mem::take(&mut self.storage[slot]))
    }

    /// Removes the logical-first element and returns it, resetting the
    /// vacated slot to `T::default()`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Empty`] if the buffer holds no elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringbuffer::{Error, RingBuffer};
    ///
    /// let mut buffer: RingBuffer<i32> = RingBuffer::with_capacity(3);
    /// buffer.push_back(1);
    /// buffer.push_back(2);
    /// assert_eq!(buffer.pop_front(), Ok(1));
    /// assert_eq!(buffer.pop_front(), Ok(2));
    /// assert_eq!(buffer.pop_front(), Err(Error::Empty));
    /// ```
    pub fn pop_front(&mut self) -> Result<T, Error> {
        if self.is_empty() {
            return Err(Error::Empty);
        }
        let slot = self.begin;
        self.begin = self.wrap_add(self.begin, 1);
        self.len -= 1;
        Ok(mem::take(&mut self.storage[slot]))
    }

    /// Inserts an element at logical position `pos`, shifting everything
    /// at positions `>= pos` one slot toward the back.
    ///
    /// `pos == len()` appends. When the buffer is full, the logical-first
    /// element is evicted first to make room and returned as
    /// `Ok(Some(evicted))`; the net length is then unchanged. On a
    /// zero-capacity buffer `insert(0, item)` discards and returns the
    /// item, matching the push policy.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `pos > len()`. The buffer is left
    /// untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringbuffer::RingBuffer;
    ///
    /// let mut buffer: RingBuffer<i32> = RingBuffer::with_capacity(5);
    /// buffer.push_back(1);
    /// buffer.push_back(2);
    /// buffer.push_back(3);
    ///
    /// assert_eq!(buffer.insert(1, 99), Ok(None));
    /// assert_eq!(buffer[1], 99);
    /// assert_eq!(buffer.len(), 4);
    /// ```
    pub fn insert(&mut self, pos: usize, item: T) -> Result<Option<T>, Error> {
        if pos > self.len {
            return Err(Error::OutOfRange {
                index: pos,
                bound: self.len,
            });
        }
        if self.capacity() == 0 {
            return Ok(Some(item));
        }
        let evicted = if self.is_full() {
            Some(self.pop_front()?)
        } else {
            None
        };
        // After an eviction the frame shifted down by one, so an append
        // position may exceed the new length by exactly one.
        let pos = pos.min(self.len);
        for i in (pos..self.len).rev() {
            let src = self.slot(i);
            let dst = self.slot(i + 1);
            self.storage.swap(src, dst);
        }
        let slot = self.slot(pos);
        self.storage[slot] = item;
        self.len += 1;
        Ok(evicted)
    }

    /// Removes the logical half-open range `[first, last)`, shifting the
    /// survivors at positions `>= last` backward to close the gap.
    ///
    /// The erased elements are dropped and the vacated tail slots are
    /// reset to `T::default()`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRange`] unless `first <= last <= len()`.
    /// The buffer is left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringbuffer::RingBuffer;
    ///
    /// let mut buffer: RingBuffer<i32> = RingBuffer::with_capacity(5);
    /// buffer.push_back(1);
    /// buffer.push_back(2);
    /// buffer.push_back(3);
    /// buffer.push_back(4);
    ///
    /// buffer.erase(1, 3).unwrap();
    /// assert_eq!(buffer.len(), 2);
    /// assert_eq!(buffer[0], 1);
    /// assert_eq!(buffer[1], 4);
    /// ```
    pub fn erase(&mut self, first: usize, last: usize) -> Result<(), Error> {
        if first > last || last > self.len {
            return Err(Error::InvalidRange {
                first,
                last,
                len: self.len,
            });
        }
        let gap = last - first;
        if gap == 0 {
            return Ok(());
        }
        for i in last..self.len {
            let src = self.slot(i);
            let dst = self.slot(i - gap);
            self.storage.swap(dst, src);
        }
        // The displaced erased elements ended up in the tail slots.
        for i in self.len - gap..self.len {
            let slot = self.slot(i);
            self.storage[slot] = T::default();
        }
        self.len -= gap;
        Ok(())
    }

    /// Clears the buffer, resetting every physical slot to `T::default()`.
    ///
    /// Capacity is unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringbuffer::RingBuffer;
    ///
    /// let mut buffer: RingBuffer<i32> = RingBuffer::with_capacity(4);
    /// buffer.push_back(1);
    /// buffer.clear();
    /// assert!(buffer.is_empty());
    /// assert!(buffer.is_linearized());
    /// assert_eq!(buffer.capacity(), 4);
    /// ```
    pub fn clear(&mut self) {
        for slot in self.storage.iter_mut() {
            *slot = T::default();
        }
        self.begin = 0;
        self.len = 0;
    }

    /// Rearranges physical storage so the logical-first element sits at
    /// physical slot 0, then returns the live elements as one contiguous
    /// slice.
    ///
    /// A no-op when the buffer is already linearized; calling it twice in
    /// a row has no further effect. Otherwise the storage block is
    /// reallocated and the elements are moved into physical order.
    ///
    /// Note that any reference previously obtained from the buffer is
    /// invalidated by the reallocation (the borrow checker enforces this).
    ///
    /// # Examples
    ///
    /// ```
    /// use ringbuffer::RingBuffer;
    ///
    /// let mut buffer: RingBuffer<i32> = RingBuffer::with_capacity(3);
    /// buffer.push_back(1);
    /// buffer.push_back(2);
    /// buffer.push_back(3);
    /// buffer.push_back(4); // wraps; begin is now 1
    /// assert!(!buffer.is_linearized());
    ///
    /// assert_eq!(buffer.linearize(), &mut [2, 3, 4][..]);
    /// assert!(buffer.is_linearized());
    /// ```
    pub fn linearize(&mut self) -> &mut [T] {
        if self.begin != 0 {
            let mut fresh = Self::new_storage(self.capacity());
            for i in 0..self.len {
                let slot = self.slot(i);
                mem::swap(&mut fresh[i], &mut self.storage[slot]);
            }
            self.storage = fresh;
            self.begin = 0;
        }
        &mut self.storage[..self.len]
    }

    /// Makes the element at logical index `new_begin` the new
    /// logical-first element without moving any data.
    ///
    /// Only `begin` is reassigned. On a buffer that is not full, slots
    /// that were outside the live window (holding `T::default()`) rotate
    /// into it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] unless `new_begin < len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringbuffer::RingBuffer;
    ///
    /// let mut buffer: RingBuffer<i32> = RingBuffer::with_capacity(5);
    /// buffer.push_back(1);
    /// buffer.push_back(2);
    /// buffer.push_back(3);
    /// buffer.push_back(4);
    ///
    /// buffer.rotate(2).unwrap();
    /// assert_eq!(buffer.front(), Ok(&3));
    /// ```
    pub fn rotate(&mut self, new_begin: usize) -> Result<(), Error> {
        if new_begin >= self.len {
            return Err(Error::OutOfRange {
                index: new_begin,
                bound: self.len,
            });
        }
        self.begin = self.wrap_add(self.begin, new_begin);
        Ok(())
    }

    /// Replaces the storage block with one of `new_capacity` slots,
    /// keeping up to `new_capacity` of the logically oldest elements in
    /// order.
    ///
    /// The kept elements are moved to the front of the new block, so the
    /// buffer is linearized afterwards. Elements beyond the new capacity
    /// are dropped. A no-op when the capacity is unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringbuffer::RingBuffer;
    ///
    /// let mut buffer: RingBuffer<i32> = RingBuffer::with_capacity(5);
    /// buffer.push_back(1);
    /// buffer.push_back(2);
    /// buffer.push_back(3);
    ///
    /// buffer.set_capacity(2);
    /// assert_eq!(buffer.capacity(), 2);
    /// assert_eq!(buffer.len(), 2);
    /// assert_eq!(buffer[0], 1);
    /// assert_eq!(buffer[1], 2);
    /// ```
    pub fn set_capacity(&mut self, new_capacity: usize) {
        if new_capacity == self.capacity() {
            return;
        }
        let mut fresh = Self::new_storage(new_capacity);
        let kept = self.len.min(new_capacity);
        for i in 0..kept {
            let slot = self.slot(i);
            mem::swap(&mut fresh[i], &mut self.storage[slot]);
        }
        self.storage = fresh;
        self.begin = 0;
        self.len = kept;
    }

    /// Resizes the buffer to exactly `new_len` elements, popping from the
    /// back to shrink or pushing clones of `value` to the back to grow.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `new_len > capacity()`. The
    /// buffer is left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringbuffer::RingBuffer;
    ///
    /// let mut buffer: RingBuffer<i32> = RingBuffer::with_capacity(4);
    /// buffer.push_back(1);
    /// buffer.push_back(2);
    ///
    /// buffer.resize(4, 9).unwrap();
    /// assert_eq!(buffer.back(), Ok(&9));
    ///
    /// buffer.resize(1, 0).unwrap();
    /// assert_eq!(buffer.back(), Ok(&1));
    /// ```
    pub fn resize(&mut self, new_len: usize, value: T) -> Result<(), Error>
    where
        T: Clone,
    {
        if new_len > self.capacity() {
            return Err(Error::OutOfRange {
                index: new_len,
                bound: self.capacity(),
            });
        }
        while self.len > new_len {
            self.pop_back()?;
        }
        while self.len < new_len {
            self.push_back(value.clone());
        }
        Ok(())
    }
}

impl<T: Clone> RingBuffer<T> {
    /// Creates a `RingBuffer` of the given capacity, filled to full with
    /// clones of `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringbuffer::RingBuffer;
    ///
    /// let buffer = RingBuffer::filled(3, 7);
    /// assert_eq!(buffer.len(), 3);
    /// assert!(buffer.is_full());
    /// assert_eq!(buffer[2], 7);
    /// ```
    pub fn filled(capacity: usize, value: T) -> Self {
        RingBuffer {
            storage: vec![value; capacity].into_boxed_slice(),
            begin: 0,
            len: capacity,
        }
    }
}

impl<T> RingBuffer<T> {
    /// Exchanges storage and counters with another buffer of identical
    /// capacity.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CapacityMismatch`] if the capacities differ;
    /// neither buffer is modified in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringbuffer::RingBuffer;
    ///
    /// let mut a = RingBuffer::filled(2, 1);
    /// let mut b: RingBuffer<i32> = RingBuffer::with_capacity(2);
    ///
    /// a.swap(&mut b).unwrap();
    /// assert!(a.is_empty());
    /// assert_eq!(b.len(), 2);
    ///
    /// let mut c: RingBuffer<i32> = RingBuffer::with_capacity(3);
    /// assert!(a.swap(&mut c).is_err());
    /// ```
    pub fn swap(&mut self, other: &mut Self) -> Result<(), Error> {
        if self.capacity() != other.capacity() {
            return Err(Error::CapacityMismatch {
                left: self.capacity(),
                right: other.capacity(),
            });
        }
        mem::swap(&mut self.storage, &mut other.storage);
        mem::swap(&mut self.begin, &mut other.begin);
        mem::swap(&mut self.len, &mut other.len);
        Ok(())
    }
}
