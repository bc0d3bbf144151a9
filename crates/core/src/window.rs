//! Sequential sliding window over `f64` samples.
//!
//! The backing store is allocated once with room for `capacity` values. The
//! live window is the contiguous range `backing[start .. start + len]` and
//! slides towards the end of the store as samples arrive:
//!
//! ```text
//!   capacity 8, window size 3, after adding 1..=5
//!
//!   ┌──┬──┬──┬──┬──┬──┬──┬──┐
//!   │01│02│03│04│05│  │  │  │
//!   └──┴──┴──┴──┴──┴──┴──┴──┘
//!          └──────┘
//!          start = 2, len = 3   ->  [3, 4, 5]
//! ```
//!
//! When the next sample would run past the end of the store, the live values
//! (minus the oldest one, which is about to be evicted anyway) are copied back
//! to index 0. A larger `capacity` therefore means fewer compaction passes.

use crate::error::{Result, WindowError};

/// Bounded window retaining the most recent `window_size` samples.
///
/// This is the lock-free core; see [`crate::Window`] for the thread-safe
/// wrapper. The view returned by [`SlidingWindow::as_slice`] borrows the
/// window, so it cannot outlive the next mutation.
#[derive(Debug, Clone)]
pub struct SlidingWindow {
    backing: Vec<f64>,
    capacity: usize,
    start: usize,
    len: usize,
    window_size: usize,
}

impl SlidingWindow {
    /// Create an empty window.
    ///
    /// Fails with [`WindowError::Configuration`] when `window_size` exceeds
    /// `capacity`. Nothing is allocated in that case.
    pub fn new(capacity: usize, window_size: usize) -> Result<Self> {
        if window_size > capacity {
            tracing::warn!(capacity, window_size, "rejecting window larger than its backing store");
            return Err(WindowError::Configuration { capacity, window_size });
        }

        tracing::debug!(capacity, window_size, "window created");
        Ok(Self {
            backing: Vec::with_capacity(capacity),
            capacity,
            start: 0,
            len: 0,
            window_size,
        })
    }

    /// Append a sample, evicting the oldest one if the window is full.
    pub fn add(&mut self, value: f64) {
        self.push(value);
    }

    /// Drop every sample. The backing store keeps its contents.
    pub fn clear(&mut self) {
        self.start = 0;
        self.len = 0;
    }

    /// Remove the most recently added sample. No-op on an empty window.
    ///
    /// Note that this pops the *newest* value, unlike the eviction done by
    /// [`SlidingWindow::add`].
    pub fn remove(&mut self) {
        if self.len > 0 {
            self.len -= 1;
        }
        if self.len == 0 {
            self.start = 0;
        }
    }

    /// Bulk-load samples. Only the trailing `window_size` values can survive,
    /// so longer inputs replace the window outright instead of sliding it one
    /// value at a time.
    pub fn load(&mut self, values: &[f64]) {
        if values.is_empty() {
            return;
        }

        if values.len() >= self.window_size {
            self.start = 0;
            self.len = 0;
        }

        let load_len = values.len().min(self.window_size);
        tracing::trace!(offered = values.len(), load_len, "bulk load");
        for &value in &values[values.len() - load_len..] {
            self.push(value);
        }
    }

    /// The live samples, oldest first.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.backing[self.start..self.start + self.len]
    }

    /// Number of live samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// `true` once the window holds `window_size` samples.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.len == self.window_size
    }

    #[must_use]
    pub fn window_size(&self) -> usize {
        self.window_size
    }

    /// Logical capacity of the backing store, fixed at construction.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of backing slots written so far. Never exceeds
    /// [`SlidingWindow::capacity`].
    #[must_use]
    pub fn backing_len(&self) -> usize {
        self.backing.len()
    }

    // Single append-and-slide primitive behind `add` and `load`.
    fn push(&mut self, value: f64) {
        if self.window_size == 0 {
            return;
        }

        // Out of room: compact to the front, dropping the oldest value.
        if self.start + self.len + 1 > self.capacity {
            debug_assert!(self.len > 0);
            let (from, to) = (self.start + 1, self.start + self.len);
            self.backing.copy_within(from..to, 0);
            tracing::trace!(moved = to - from, from_index = from, "compacted window");
            self.start = 0;
            self.len -= 1;
        }

        let slot = self.start + self.len;
        if self.backing.len() <= slot {
            self.backing.push(value);
        } else {
            self.backing[slot] = value;
        }

        if self.len == self.window_size {
            self.start += 1;
        } else {
            self.len += 1;
        }
    }
}
