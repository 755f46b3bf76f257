//! Preset store - Read/write saved tool inputs
//!
//! Presets are opaque JSON argument blobs keyed by name, kept in a
//! single presets.json under the store directory with a meta.json
//! alongside. A malformed collection is logged and treated as empty so
//! a damaged store never blocks the tools.

use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::core::model::{ResultItem, ResultSet, Tool, ToolError};
use crate::core::render::{emit, EmitOptions, RenderConfig};
use crate::core::util::{hash_bytes, HashAlgorithm};
use crate::presets::meta::StoreMeta;

/// Store file names
pub const PRESETS_FILE: &str = "presets.json";
pub const META_FILE: &str = "meta.json";

/// One saved tool input
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Preset {
    pub name: String,
    pub tool: String,
    /// Opaque argument blob; tools interpret it, the store does not
    pub args: serde_json::Value,
    pub saved_at: DateTime<Utc>,
}

/// Ensure the store directory exists
pub fn ensure_store_dir(dir: &Path) -> Result<()> {
    if !dir.exists() {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create store directory: {:?}", dir))?;
    }
    Ok(())
}

/// Load the preset collection; a missing or malformed file yields empty
pub fn load_presets(dir: &Path) -> Vec<Preset> {
    let path = dir.join(PRESETS_FILE);
    let Ok(content) = fs::read_to_string(&path) else {
        return Vec::new();
    };

    match serde_json::from_str(&content) {
        Ok(presets) => presets,
        Err(e) => {
            eprintln!(
                "warning: malformed preset store {:?}, starting empty: {}",
                path, e
            );
            Vec::new()
        }
    }
}

/// Write the preset collection and refresh meta.json
pub fn save_presets(dir: &Path, presets: &[Preset]) -> Result<()> {
    ensure_store_dir(dir)?;

    let json = serde_json::to_string_pretty(presets)?;
    let path = dir.join(PRESETS_FILE);
    fs::write(&path, &json).with_context(|| format!("Failed to write {:?}", path))?;

    let meta = StoreMeta::new(&hash_bytes(json.as_bytes(), HashAlgorithm::Sha1));
    let meta_path = dir.join(META_FILE);
    fs::write(&meta_path, serde_json::to_string_pretty(&meta)?)
        .with_context(|| format!("Failed to write {:?}", meta_path))?;

    Ok(())
}

/// Read store metadata, if present
#[allow(dead_code)]
pub fn read_meta(dir: &Path) -> Result<StoreMeta> {
    let path = dir.join(META_FILE);
    let content = fs::read_to_string(&path).context("Failed to read meta.json")?;
    Ok(serde_json::from_str(&content)?)
}

fn preset_item(preset: &Preset) -> ResultItem {
    ResultItem::preset(
        &preset.name,
        serde_json::json!({
            "tool": preset.tool,
            "args": preset.args,
            "saved_at": preset.saved_at.to_rfc3339(),
        }),
    )
}

fn not_found_item(name: &str) -> ResultItem {
    ResultItem::error(
        Tool::Preset,
        ToolError::new("PRESET_NOT_FOUND", format!("no preset named '{}'", name)),
    )
}

/// Run preset save: upsert by name
pub fn run_save(
    dir: &Path,
    name: &str,
    tool: &str,
    args_json: &str,
    config: RenderConfig,
    emit_opts: &EmitOptions,
) -> Result<()> {
    let args: serde_json::Value = match serde_json::from_str(args_json) {
        Ok(value) => value,
        Err(e) => bail!("--args is not valid JSON: {}", e),
    };

    let mut presets = load_presets(dir);
    let preset = Preset {
        name: name.to_string(),
        tool: tool.to_string(),
        args,
        saved_at: Utc::now(),
    };

    match presets.iter_mut().find(|p| p.name == name) {
        Some(existing) => *existing = preset.clone(),
        None => presets.push(preset.clone()),
    }

    save_presets(dir, &presets)?;

    let mut result_set = ResultSet::new();
    result_set.push(preset_item(&preset));
    emit(&result_set, config, emit_opts)
}

/// Run preset list
pub fn run_list(dir: &Path, config: RenderConfig, emit_opts: &EmitOptions) -> Result<()> {
    let mut result_set: ResultSet = load_presets(dir).iter().map(preset_item).collect();
    result_set.sort();
    emit(&result_set, config, emit_opts)
}

/// Run preset get
pub fn run_get(
    dir: &Path,
    name: &str,
    config: RenderConfig,
    emit_opts: &EmitOptions,
) -> Result<()> {
    let presets = load_presets(dir);
    let mut result_set = ResultSet::new();

    match presets.iter().find(|p| p.name == name) {
        Some(preset) => result_set.push(preset_item(preset)),
        None => result_set.push(not_found_item(name)),
    }

    emit(&result_set, config, emit_opts)
}

/// Run preset delete
pub fn run_delete(
    dir: &Path,
    name: &str,
    config: RenderConfig,
    emit_opts: &EmitOptions,
) -> Result<()> {
    let mut presets = load_presets(dir);
    let mut result_set = ResultSet::new();

    match presets.iter().position(|p| p.name == name) {
        Some(index) => {
            let removed = presets.remove(index);
            save_presets(dir, &presets)?;
            result_set.push(preset_item(&removed));
        }
        None => result_set.push(not_found_item(name)),
    }

    emit(&result_set, config, emit_opts)
}
