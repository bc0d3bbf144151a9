pub mod schema;

pub use schema::WindowConfig;

use schema::ConfigFile;
use std::path::Path;
use sw_core::{Result, WindowError};

/// Parse a window config from TOML text and validate it.
///
/// Unknown sections or keys are rejected; an empty document yields the
/// defaults.
pub fn parse(raw: &str) -> Result<WindowConfig> {
    let file: ConfigFile =
        toml::from_str(raw).map_err(|e| WindowError::Config(format!("TOML parse error: {e}")))?;
    let cfg = file.window;
    cfg.validate()?;
    Ok(cfg)
}

/// Load a window section from a TOML file.  Returns `WindowConfig::default()`
/// if the file doesn't exist.
pub fn load(path: impl AsRef<Path>) -> Result<WindowConfig> {
    let path = path.as_ref();
    if !path.exists() {
        tracing::warn!(
            "Config file not found at '{}'; using defaults.",
            path.display()
        );
        return Ok(WindowConfig::default());
    }

    let raw = std::fs::read_to_string(path)?;

    let cfg = parse(&raw)?;
    tracing::debug!(
        capacity = cfg.capacity,
        window_size = cfg.window_size,
        "loaded window config from '{}'",
        path.display()
    );
    Ok(cfg)
}
