//! Property tests for the ring buffer's index-arithmetic laws.

use std::collections::VecDeque;

use proptest::prelude::*;
use proptest::test_runner::TestCaseError;
use ringbuffer::RingBuffer;

/// Compares the buffer's logical content against a reference sequence.
fn assert_matches(buffer: &RingBuffer<i32>, model: &VecDeque<i32>) -> Result<(), TestCaseError> {
    prop_assert_eq!(buffer.len(), model.len());
    prop_assert!(buffer.len() <= buffer.capacity());
    for (i, expected) in model.iter().enumerate() {
        prop_assert_eq!(buffer.get(i), Some(expected));
    }
    Ok(())
}

proptest! {
    /// Pushing within capacity preserves push order under logical indexing.
    #[test]
    fn round_trip(items in prop::collection::vec(any::<i32>(), 0..64)) {
        let mut buffer: RingBuffer<i32> = RingBuffer::with_capacity(64);
        for &item in &items {
            prop_assert_eq!(buffer.push_back(item), None);
        }
        prop_assert_eq!(buffer.len(), items.len());
        for (i, &item) in items.iter().enumerate() {
            prop_assert_eq!(buffer[i], item);
        }
    }

    /// Pushing `capacity + k` items keeps exactly the last `capacity` of them.
    #[test]
    fn overwrite_law(capacity in 1usize..32, k in 1usize..32) {
        let mut buffer: RingBuffer<usize> = RingBuffer::with_capacity(capacity);
        for i in 0..capacity + k {
            buffer.push_back(i);
        }
        prop_assert_eq!(buffer.len(), capacity);
        for i in 0..capacity {
            prop_assert_eq!(buffer[i], k + i);
        }
    }

    /// `push_front` then `pop_front` is an identity on a non-full buffer.
    #[test]
    fn push_front_pop_front_identity(
        items in prop::collection::vec(any::<i32>(), 0..15),
        item in any::<i32>(),
    ) {
        let mut buffer: RingBuffer<i32> = RingBuffer::with_capacity(16);
        for &x in &items {
            buffer.push_back(x);
        }
        let before = buffer.clone();

        buffer.push_front(item);
        prop_assert_eq!(buffer.pop_front(), Ok(item));
        prop_assert_eq!(buffer, before);
    }

    /// After `insert(pos, x)` the element at `pos` is `x` and the length
    /// grew by one (the buffer is kept non-full here).
    #[test]
    fn insert_places_item(
        items in prop::collection::vec(any::<i32>(), 0..15),
        pos_seed in any::<usize>(),
        item in any::<i32>(),
    ) {
        let mut buffer: RingBuffer<i32> = RingBuffer::with_capacity(16);
        for &x in &items {
            buffer.push_back(x);
        }
        let pos = pos_seed % (buffer.len() + 1);

        prop_assert_eq!(buffer.insert(pos, item), Ok(None));
        prop_assert_eq!(buffer.len(), items.len() + 1);
        prop_assert_eq!(buffer[pos], item);
        for (i, &x) in items.iter().enumerate() {
            let shifted = if i < pos { i } else { i + 1 };
            prop_assert_eq!(buffer[shifted], x);
        }
    }

    /// `erase(first, last)` relocates every survivor from index `>= last`
    /// to `index - (last - first)`.
    #[test]
    fn erase_shift_law(
        items in prop::collection::vec(any::<i32>(), 1..32),
        first_seed in any::<usize>(),
        last_seed in any::<usize>(),
    ) {
        let mut buffer: RingBuffer<i32> = RingBuffer::with_capacity(32);
        for &x in &items {
            buffer.push_back(x);
        }
        let first = first_seed % (items.len() + 1);
        let last = first + last_seed % (items.len() - first + 1);

        buffer.erase(first, last).unwrap();
        prop_assert_eq!(buffer.len(), items.len() - (last - first));
        for i in 0..first {
            prop_assert_eq!(buffer[i], items[i]);
        }
        for i in last..items.len() {
            prop_assert_eq!(buffer[i - (last - first)], items[i]);
        }
    }

    /// Shrinking the capacity keeps exactly the oldest elements in order.
    #[test]
    fn set_capacity_keeps_oldest(
        items in prop::collection::vec(any::<i32>(), 0..32),
        new_capacity in 0usize..16,
    ) {
        let mut buffer: RingBuffer<i32> = RingBuffer::with_capacity(32);
        for &x in &items {
            buffer.push_back(x);
        }
        buffer.set_capacity(new_capacity);

        let kept = items.len().min(new_capacity);
        prop_assert_eq!(buffer.capacity(), new_capacity);
        prop_assert_eq!(buffer.len(), kept);
        for i in 0..kept {
            prop_assert_eq!(buffer[i], items[i]);
        }
    }

    /// `linearize` preserves logical content and is idempotent.
    #[test]
    fn linearize_is_idempotent(
        items in prop::collection::vec(any::<i32>(), 0..48),
        capacity in 1usize..16,
    ) {
        let mut buffer: RingBuffer<i32> = RingBuffer::with_capacity(capacity);
        for &x in &items {
            buffer.push_back(x);
        }
        let before = buffer.clone();

        let linear: Vec<i32> = buffer.linearize().to_vec();
        prop_assert!(buffer.is_linearized());
        prop_assert_eq!(&buffer, &before);
        prop_assert_eq!(linear.len(), buffer.len());
        for (i, &x) in linear.iter().enumerate() {
            prop_assert_eq!(buffer[i], x);
        }

        let again = buffer.clone();
        buffer.linearize();
        prop_assert_eq!(buffer, again);
    }

    /// Random operation sequences agree with a `VecDeque` reference model.
    #[test]
    fn agrees_with_vecdeque_model(
        capacity in 0usize..9,
        ops in prop::collection::vec((0u8..10, any::<usize>(), any::<usize>(), any::<i32>()), 0..100),
    ) {
        let mut buffer: RingBuffer<i32> = RingBuffer::with_capacity(capacity);
        let mut model: VecDeque<i32> = VecDeque::new();
        let mut capacity = capacity;

        for (op, a, b, value) in ops {
            match op {
                0 => {
                    buffer.push_back(value);
                    if capacity > 0 {
                        if model.len() == capacity {
                            model.pop_front();
                        }
                        model.push_back(value);
                    }
                }
                1 => {
                    buffer.push_front(value);
                    if capacity > 0 {
                        if model.len() == capacity {
                            model.pop_back();
                        }
                        model.push_front(value);
                    }
                }
                2 => {
                    prop_assert_eq!(buffer.pop_back().ok(), model.pop_back());
                }
                3 => {
                    prop_assert_eq!(buffer.pop_front().ok(), model.pop_front());
                }
                4 => {
                    let pos = a % (model.len() + 1);
                    let evicted = buffer.insert(pos, value).unwrap();
                    if capacity == 0 {
                        prop_assert_eq!(evicted, Some(value));
                    } else {
                        if model.len() == capacity {
                            prop_assert_eq!(evicted, model.pop_front());
                        } else {
                            prop_assert_eq!(evicted, None);
                        }
                        model.insert(pos.min(model.len()), value);
                    }
                }
                5 => {
                    let first = a % (model.len() + 1);
                    let last = first + b % (model.len() - first + 1);
                    buffer.erase(first, last).unwrap();
                    model.drain(first..last);
                }
                6 => {
                    // Rotation is only a pure rotation on a full buffer.
                    if buffer.is_full() && !buffer.is_empty() {
                        let n = a % model.len();
                        buffer.rotate(n).unwrap();
                        model.rotate_left(n);
                    }
                }
                7 => {
                    buffer.clear();
                    model.clear();
                }
                8 => {
                    buffer.linearize();
                }
                9 => {
                    let new_capacity = a % 9;
                    buffer.set_capacity(new_capacity);
                    model.truncate(new_capacity);
                    capacity = new_capacity;
                }
                _ => unreachable!(),
            }
            assert_matches(&buffer, &model)?;
        }
    }
}
