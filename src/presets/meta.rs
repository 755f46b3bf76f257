//! Store metadata

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Metadata stored next to the preset collection in meta.json
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreMeta {
    /// Store format version
    pub store_version: String,

    /// SHA1 of the presets file this metadata was written for
    pub integrity: String,

    /// Timestamp of the last write
    pub updated_at: DateTime<Utc>,
}

impl StoreMeta {
    pub fn new(integrity: &str) -> Self {
        Self {
            store_version: env!("CARGO_PKG_VERSION").to_string(),
            integrity: integrity.to_string(),
            updated_at: Utc::now(),
        }
    }
}
