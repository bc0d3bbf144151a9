use thiserror::Error;

/// Error type shared by the window container and its configuration layer.
#[derive(Debug, Error)]
pub enum WindowError {
    /// The requested window does not fit into the backing store.
    #[error("capacity smaller than window size (capacity {capacity}, window size {window_size})")]
    Configuration { capacity: usize, window_size: usize },

    #[error("config error: {0}")]
    Config(String),

    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

pub type Result<T, E = WindowError> = std::result::Result<T, E>;
