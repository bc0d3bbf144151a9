//! Bounded sliding window over a stream of `f64` samples.
//!
//! [`SlidingWindow`] is the sequential container; [`Window`] wraps it in a
//! reader/writer lock for shared use.

pub mod error;
pub mod shared;
pub mod window;

pub use error::{Result, WindowError};
pub use shared::{Window, WindowView};
pub use window::SlidingWindow;
