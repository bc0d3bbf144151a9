//! slidingwindow — keep the most recent samples of an `f64` stream.
//!
//! ```
//! use slidingwindow::SlidingWindow;
//!
//! let mut w = SlidingWindow::new(19, 3)?;
//! for v in [1.0, 2.0, 3.0, 4.0] {
//!     w.add(v);
//! }
//! assert_eq!(w.as_slice(), &[2.0, 3.0, 4.0]);
//! # Ok::<(), slidingwindow::WindowError>(())
//! ```

pub use sw_config::{load as load_config, parse as parse_config, WindowConfig};
pub use sw_core::{Result, SlidingWindow, Window, WindowError, WindowView};
