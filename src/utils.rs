//! Modular index arithmetic over the physical storage block.

/// Advances `index` by `addend`, wrapping at `capacity`.
///
/// `capacity` must be non-zero.
#[inline]
pub fn wrap_add(index: usize, addend: usize, capacity: usize) -> usize {
    debug_assert!(addend <= capacity);
    (index + addend) % capacity
}

/// Moves `index` back by `subtrahend`, wrapping at `capacity`.
///
/// `capacity` must be non-zero.
#[inline]
pub fn wrap_sub(index: usize, subtrahend: usize, capacity: usize) -> usize {
    debug_assert!(subtrahend <= capacity);
    (index + capacity - subtrahend) % capacity
}
