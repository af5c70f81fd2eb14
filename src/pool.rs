/* src/pool.rs */

use core::ops::{Deref, DerefMut};

use alloc::string::String;
use alloc::vec::Vec;

use parking_lot::Mutex;

const DEFAULT_MAX_RETAINED: usize = 64;
const DEFAULT_MAX_CAPACITY: usize = 4096;

/// A pool of reusable `String` scratch buffers shared between threads.
///
/// [`BufferPool::acquire`] hands out a [`PooledBuffer`] that is always
/// empty; dropping it puts the buffer back. Buffers that grew past the
/// capacity limit, or that would exceed the retained count, are freed
/// instead.
///
/// ```
/// use ja3hello::BufferPool;
///
/// static POOL: BufferPool = BufferPool::new();
///
/// {
/// 	let mut buf = POOL.acquire();
/// 	buf.push_str("771,");
/// }
/// assert_eq!(POOL.retained(), 1);
/// assert!(POOL.acquire().is_empty());
/// ```
#[derive(Debug)]
pub struct BufferPool {
	buffers: Mutex<Vec<String>>,
	max_retained: usize,
	max_capacity: usize,
}

impl BufferPool {
	/// Create a pool retaining up to 64 buffers of at most 4 KiB each.
	#[must_use]
	pub const fn new() -> Self {
		Self::with_limits(DEFAULT_MAX_RETAINED, DEFAULT_MAX_CAPACITY)
	}

	/// Create a pool with explicit bounds on idle buffers and on the
	/// capacity of a buffer accepted back.
	#[must_use]
	pub const fn with_limits(max_retained: usize, max_capacity: usize) -> Self {
		Self {
			buffers: Mutex::new(Vec::new()),
			max_retained,
			max_capacity,
		}
	}

	/// Take an empty buffer from the pool, allocating one if none is idle.
	pub fn acquire(&self) -> PooledBuffer<'_> {
		let mut buf = self.buffers.lock().pop().unwrap_or_default();
		buf.clear();
		PooledBuffer { buf, pool: self }
	}

	/// Number of idle buffers currently held.
	#[must_use]
	pub fn retained(&self) -> usize {
		self.buffers.lock().len()
	}

	fn release(&self, mut buf: String) {
		if buf.capacity() > self.max_capacity {
			tracing::trace!(capacity = buf.capacity(), "dropping oversized scratch buffer");
			return;
		}
		buf.clear();
		let mut buffers = self.buffers.lock();
		if buffers.len() < self.max_retained {
			buffers.push(buf);
		} else {
			tracing::trace!(retained = buffers.len(), "scratch pool full, dropping buffer");
		}
	}
}

impl Default for BufferPool {
	fn default() -> Self {
		Self::new()
	}
}

/// A buffer borrowed from a [`BufferPool`], returned to it on drop.
#[derive(Debug)]
pub struct PooledBuffer<'p> {
	buf: String,
	pool: &'p BufferPool,
}

impl Deref for PooledBuffer<'_> {
	type Target = String;

	fn deref(&self) -> &String {
		&self.buf
	}
}

impl DerefMut for PooledBuffer<'_> {
	fn deref_mut(&mut self) -> &mut String {
		&mut self.buf
	}
}

impl Drop for PooledBuffer<'_> {
	fn drop(&mut self) {
		self.pool.release(core::mem::take(&mut self.buf));
	}
}
