//! Configuration loading for SafePlace
//!
//! Settings live in `<config dir>/safeplace/config.toml`. The file is
//! optional; a malformed file degrades to defaults with a logged warning
//! rather than refusing to start.

mod types;

use std::path::{Path, PathBuf};

use tracing::warn;

pub use types::{DatasetSettings, IconSettings, Settings};

const CONFIG_FILENAME: &str = "config.toml";
const CONFIG_DIR: &str = "safeplace";

/// Platform config file path, e.g. `~/.config/safeplace/config.toml`.
pub fn config_file_path() -> PathBuf {
    let base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join(CONFIG_DIR).join(CONFIG_FILENAME)
}

/// Load settings from the default location.
pub fn load_settings() -> Settings {
    load_settings_from(&config_file_path())
}

/// Load settings from a specific file. Missing file is not an error;
/// unparseable content falls back to defaults.
pub fn load_settings_from(path: &Path) -> Settings {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(_) => return Settings::default(),
    };

    match toml::from_str(&content) {
        Ok(settings) => settings,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "malformed config, using defaults");
            Settings::default()
        }
    }
}
