//! A circular buffer with a fixed physical capacity.
//!
//! The buffer owns one heap-allocated block of `capacity` slots and never
//! grows on its own. It supports `O(1)` insertion and removal at both ends,
//! `O(1)` access by logical index, and in-place structural edits
//! (`insert`/`erase` at an arbitrary logical position). Pushing into a full
//! buffer **overwrites** the element at the opposite end, which makes the
//! buffer suitable for bounded histories, sliding windows and similar
//! drop-oldest workloads.
//!
//! Capacity changes only happen through an explicit [`RingBuffer::set_capacity`]
//! call; there is no implicit reallocation on push.
//!
//! # Usage
//!
//! First, add the following to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! ringbuffer = "0.1"
//! ```
//!
//! # Examples
//! ```
//! use ringbuffer::RingBuffer;
//!
//! let mut buffer: RingBuffer<i32> = RingBuffer::with_capacity(3);
//! assert_eq!(buffer.capacity(), 3);
//! assert_eq!(buffer.len(), 0);
//!
//! buffer.push_back(1);
//! buffer.push_back(2);
//! buffer.push_back(3);
//! assert!(buffer.is_full());
//!
//! // A push into a full buffer evicts the oldest element.
//! assert_eq!(buffer.push_back(4), Some(1));
//! assert_eq!(buffer[0], 2);
//! assert_eq!(buffer.pop_front(), Ok(2));
//! ```
//!
//! # Insert & Erase
//! ```
//! use ringbuffer::RingBuffer;
//!
//! let mut buffer: RingBuffer<i32> = RingBuffer::with_capacity(8);
//!
//! buffer.push_back(11);
//! buffer.push_back(13);
//! buffer.insert(1, 12).unwrap();
//! buffer.erase(0, 1).unwrap();
//!
//! assert_eq!(buffer[0], 12);
//! assert_eq!(buffer[1], 13);
//! ```
//!
//! # Errors
//!
//! Every fallible operation reports a caller-input [`Error`] and leaves the
//! buffer untouched; see the [`error`] module.

#![deny(missing_docs)]

pub mod error;
mod ringbuf;
mod utils;

pub use crate::error::Error;
pub use crate::ringbuf::RingBuffer;
