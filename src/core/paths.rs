//! Preset store location
//!
//! Resolution order: explicit `--store` flag, then the `DEVBELT_STORE`
//! environment variable (both handled by clap), then `~/.devbelt`.

use std::path::{Path, PathBuf};

/// Directory name used under the home directory when no override is given
pub const STORE_DIR_NAME: &str = ".devbelt";

/// Resolve the preset store directory
pub fn store_dir(explicit: Option<&Path>) -> PathBuf {
    if let Some(dir) = explicit {
        return dir.to_path_buf();
    }

    home::home_dir()
        .map(|h| h.join(STORE_DIR_NAME))
        .unwrap_or_else(|| PathBuf::from(STORE_DIR_NAME))
}
