use crate::error::Result;
use crate::window::SlidingWindow;
use parking_lot::{MappedRwLockReadGuard, RwLock, RwLockReadGuard};
use std::ops::Deref;

/// Thread-safe sliding window.
///
/// Every mutation holds the write lock for its whole duration; readers share
/// the read lock. Wrap in an `Arc` to share between threads.
///
/// # Example
/// ```
/// use sw_core::Window;
///
/// let window = Window::new(4, 2)?;
/// window.add(1.0);
/// window.add(2.0);
/// window.add(3.0);
/// assert_eq!(&*window.view(), &[2.0, 3.0]);
/// # Ok::<(), sw_core::WindowError>(())
/// ```
#[derive(Debug)]
pub struct Window {
    inner: RwLock<SlidingWindow>,
}

/// Borrowed view of the live samples of a [`Window`], oldest first.
///
/// The view holds the window's read lock until it is dropped.
pub struct WindowView<'a> {
    guard: MappedRwLockReadGuard<'a, [f64]>,
}

impl Window {
    /// Create an empty window; see [`SlidingWindow::new`].
    pub fn new(capacity: usize, window_size: usize) -> Result<Self> {
        SlidingWindow::new(capacity, window_size).map(Self::from)
    }

    /// Append a sample, evicting the oldest one if the window is full.
    pub fn add(&self, value: f64) {
        self.inner.write().add(value);
    }

    /// Drop every sample.
    pub fn clear(&self) {
        self.inner.write().clear();
    }

    /// Remove the most recently added sample.
    pub fn remove(&self) {
        self.inner.write().remove();
    }

    /// Bulk-load samples under a single write lock.
    pub fn load(&self, values: &[f64]) {
        if values.is_empty() {
            return;
        }
        self.inner.write().load(values);
    }

    /// Borrow the live samples without copying.
    ///
    /// Writers block until the returned view is dropped, so calling a
    /// mutating method on the same window while holding a view deadlocks.
    /// Use [`Window::snapshot`] to keep the values around.
    #[must_use]
    pub fn view(&self) -> WindowView<'_> {
        let guard = RwLockReadGuard::map(self.inner.read(), SlidingWindow::as_slice);
        WindowView { guard }
    }

    /// Copy of the live samples; the lock is released before returning.
    #[must_use]
    pub fn snapshot(&self) -> Vec<f64> {
        self.inner.read().as_slice().to_vec()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.inner.read().is_full()
    }

    #[must_use]
    pub fn window_size(&self) -> usize {
        self.inner.read().window_size()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.inner.read().capacity()
    }

    #[must_use]
    pub fn into_inner(self) -> SlidingWindow {
        self.inner.into_inner()
    }
}

impl From<SlidingWindow> for Window {
    fn from(window: SlidingWindow) -> Self {
        Self {
            inner: RwLock::new(window),
        }
    }
}

impl Deref for WindowView<'_> {
    type Target = [f64];

    fn deref(&self) -> &[f64] {
        &self.guard
    }
}

impl std::fmt::Debug for WindowView<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
