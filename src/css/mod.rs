//! CSS tooling - formatting, minification, validation, unit conversion

pub mod check;
pub mod format;
pub mod units;

use anyhow::{Context, Result};
use ignore::WalkBuilder;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Label used for stdin-sourced stylesheets
pub const STDIN_LABEL: &str = "<stdin>";

/// A stylesheet to process: display label plus content
#[derive(Debug, Clone)]
pub struct Source {
    pub label: String,
    pub content: String,
    /// Set when the source came from a real file (enables --write)
    pub path: Option<PathBuf>,
}

/// Gather stylesheet sources from the given paths, or stdin when none
///
/// Directories are walked for `*.css` files, respecting ignore rules the
/// same way the rest of the toolchain does.
pub fn collect_sources(paths: &[PathBuf]) -> Result<Vec<Source>> {
    if paths.is_empty() {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .context("Failed to read stylesheet from stdin")?;
        return Ok(vec![Source {
            label: STDIN_LABEL.to_string(),
            content,
            path: None,
        }]);
    }

    let mut sources = Vec::new();
    for path in paths {
        if path.is_dir() {
            for entry in WalkBuilder::new(path).build() {
                let entry = match entry {
                    Ok(e) => e,
                    Err(_) => continue,
                };
                let entry_path = entry.path();
                if is_css_file(entry_path) {
                    sources.push(read_source(entry_path)?);
                }
            }
        } else {
            sources.push(read_source(path)?);
        }
    }

    // Stable order regardless of walk order
    sources.sort_by(|a, b| a.label.cmp(&b.label));
    Ok(sources)
}

fn is_css_file(path: &Path) -> bool {
    path.is_file()
        && path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.eq_ignore_ascii_case("css"))
            .unwrap_or(false)
}

fn read_source(path: &Path) -> Result<Source> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read stylesheet: {:?}", path))?;
    Ok(Source {
        label: path.to_string_lossy().replace('\\', "/"),
        content,
        path: Some(path.to_path_buf()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_collect_sources_single_file() {
        let temp = tempdir().unwrap();
        let file = temp.path().join("a.css");
        fs::write(&file, "a{color:red}").unwrap();

        let sources = collect_sources(&[file.clone()]).unwrap();
        assert_eq!(sources.len(), 1);
        assert_eq!(sources[0].content, "a{color:red}");
        assert_eq!(sources[0].path, Some(file));
    }

    #[test]
    fn test_collect_sources_walks_directories_for_css() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("b.css"), "b{}").unwrap();
        fs::write(temp.path().join("a.css"), "a{}").unwrap();
        fs::write(temp.path().join("notes.txt"), "not css").unwrap();
        fs::create_dir(temp.path().join("sub")).unwrap();
        fs::write(temp.path().join("sub/c.CSS"), "c{}").unwrap();

        let sources = collect_sources(&[temp.path().to_path_buf()]).unwrap();
        assert_eq!(sources.len(), 3);
        // sorted by label
        assert!(sources[0].label.ends_with("a.css"));
    }

    #[test]
    fn test_collect_sources_missing_file_fails() {
        let temp = tempdir().unwrap();
        let missing = temp.path().join("nope.css");
        assert!(collect_sources(&[missing]).is_err());
    }
}
