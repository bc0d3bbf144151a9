use serde::{Deserialize, Serialize};
use sw_core::{Result, SlidingWindow, Window, WindowError};

/// Sizing section for a sliding window, e.g. the `[window]` table of an
/// application's TOML file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WindowConfig {
    /// Slots in the backing store. Larger values mean fewer compactions.
    pub capacity: usize,
    /// Number of most recent samples retained.
    pub window_size: usize,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            capacity: 1024,
            window_size: 128,
        }
    }
}

impl WindowConfig {
    pub fn new(capacity: usize, window_size: usize) -> Self {
        Self { capacity, window_size }
    }

    /// Check that the window fits into the backing store.
    pub fn validate(&self) -> Result<()> {
        if self.window_size > self.capacity {
            return Err(WindowError::Configuration {
                capacity: self.capacity,
                window_size: self.window_size,
            });
        }
        Ok(())
    }

    pub fn build(&self) -> Result<SlidingWindow> {
        SlidingWindow::new(self.capacity, self.window_size)
    }

    /// Like [`WindowConfig::build`], wrapped for shared use.
    pub fn build_shared(&self) -> Result<Window> {
        Window::new(self.capacity, self.window_size)
    }
}

/// Root of a window config file; the sizes live under `[window]`.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct ConfigFile {
    pub window: WindowConfig,
}
