//! Fixed-capacity ring buffer used by the BFS traverser.
//!
//! The queue holds lightweight indices into the traverser's entry arena
//! rather than whole entries — an arena-of-entries-with-integer-indices is
//! this format's own recommended generalization over a ring buffer of full
//! records (see DESIGN.md). The capacity and overflow contract are
//! unchanged: a bounded ring buffer whose overflow is a fatal
//! [`NmeError::QueueOverflow`].

use crate::error::{NmeError, Result};

/// Default ring-buffer capacity, matching the reference tool.
pub const DEFAULT_CAPACITY: usize = 4096;

/// A fixed-capacity FIFO ring buffer.
///
/// Enqueue appends at `tail`; dequeue removes from `head`. Both indices wrap
/// modulo `capacity`. Pushing past `capacity` is a fatal
/// [`NmeError::QueueOverflow`] — archives in scope never approach the
/// default bound.
pub struct Queue<T> {
	slots: Vec<Option<T>>,
	capacity: usize,
	head: usize,
	tail: usize,
	size: usize,
}

impl<T> Queue<T> {
	/// Creates an empty queue with the given fixed capacity.
	pub fn with_capacity(capacity: usize) -> Self {
		let mut slots = Vec::with_capacity(capacity);
		slots.resize_with(capacity, || None);
		Self { slots, capacity, head: 0, tail: 0, size: 0 }
	}

	/// Creates an empty queue with [`DEFAULT_CAPACITY`].
	pub fn new() -> Self {
		Self::with_capacity(DEFAULT_CAPACITY)
	}

	/// Number of elements currently queued.
	pub fn len(&self) -> usize {
		self.size
	}

	/// `true` if the queue holds no elements.
	pub fn is_empty(&self) -> bool {
		self.size == 0
	}

	/// Appends `value` at the tail.
	///
	/// Fails with [`NmeError::QueueOverflow`] if the queue is already at
	/// capacity.
	pub fn enqueue(&mut self, value: T) -> Result<()> {
		if self.size >= self.capacity {
			return Err(NmeError::QueueOverflow { capacity: self.capacity });
		}
		self.slots[self.tail] = Some(value);
		self.tail = (self.tail + 1) % self.capacity;
		self.size += 1;
		Ok(())
	}

	/// Removes and returns the element at the head, or `None` if empty.
	pub fn dequeue(&mut self) -> Option<T> {
		if self.size == 0 {
			return None;
		}
		let value = self.slots[self.head].take();
		self.head = (self.head + 1) % self.capacity;
		self.size -= 1;
		value
	}
}

impl<T> Default for Queue<T> {
	fn default() -> Self {
		Self::new()
	}
}
