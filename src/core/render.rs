//! Renderer module
//!
//! Renders ResultSet to different output formats: jsonl, json, md, raw.
//! Also owns the output sinks shared by every command: stdout, `--out`
//! file writing, and `--copy` clipboard forwarding.

use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::core::clipboard::{ClipboardSink, SystemClipboard};
use crate::core::model::{Kind, ResultItem, ResultSet};
use crate::core::util::{hash_bytes, HashAlgorithm};

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Jsonl,
    Json,
    Markdown,
    Raw,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "jsonl" => Ok(OutputFormat::Jsonl),
            "json" => Ok(OutputFormat::Json),
            "md" | "markdown" => Ok(OutputFormat::Markdown),
            "raw" => Ok(OutputFormat::Raw),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

/// Render configuration combining format and options
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderConfig {
    pub format: OutputFormat,
    pub pretty: bool,
}

impl RenderConfig {
    /// Create a new render config with default options
    #[allow(dead_code)]
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            pretty: false,
        }
    }

    /// Create a new render config with pretty option
    pub fn with_pretty(format: OutputFormat, pretty: bool) -> Self {
        Self { format, pretty }
    }
}

/// Where the primary output goes besides stdout
#[derive(Debug, Clone, Default)]
pub struct EmitOptions {
    /// Write the primary output (raw rendering) to this file
    pub out: Option<PathBuf>,
    /// Copy the primary output to the system clipboard
    pub copy: bool,
    /// Suppress non-essential stderr notes
    pub quiet: bool,
}

/// Renderer for result sets
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    #[allow(dead_code)]
    pub fn new(format: OutputFormat) -> Self {
        Self {
            config: RenderConfig::new(format),
        }
    }

    /// Create a new renderer with render config
    pub fn with_config(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Render a result set to a string
    pub fn render(&self, result_set: &ResultSet) -> String {
        match self.config.format {
            OutputFormat::Jsonl => self.render_jsonl(result_set),
            OutputFormat::Json => self.render_json(result_set),
            OutputFormat::Markdown => self.render_markdown(result_set),
            OutputFormat::Raw => render_raw(result_set),
        }
    }

    /// Render as JSON Lines (one JSON object per line)
    fn render_jsonl(&self, result_set: &ResultSet) -> String {
        result_set
            .items
            .iter()
            .filter_map(|item| {
                if self.config.pretty {
                    serde_json::to_string_pretty(item).ok()
                } else {
                    serde_json::to_string(item).ok()
                }
            })
            .collect::<Vec<_>>()
            .join(if self.config.pretty { "\n\n" } else { "\n" })
    }

    /// Render as a single JSON array
    fn render_json(&self, result_set: &ResultSet) -> String {
        if self.config.pretty {
            serde_json::to_string_pretty(&result_set.items).unwrap_or_else(|_| "[]".to_string())
        } else {
            serde_json::to_string(&result_set.items).unwrap_or_else(|_| "[]".to_string())
        }
    }

    /// Render as Markdown
    fn render_markdown(&self, result_set: &ResultSet) -> String {
        let mut output = String::new();

        let mut conversions = Vec::new();
        let mut bases = Vec::new();
        let mut texts = Vec::new();
        let mut checks = Vec::new();
        let mut presets = Vec::new();
        let mut errors = Vec::new();

        for item in &result_set.items {
            match item.kind {
                Kind::Conversion => conversions.push(item),
                Kind::Base => bases.push(item),
                Kind::Stylesheet | Kind::Snippet | Kind::Mock | Kind::Manifest => texts.push(item),
                Kind::Check => checks.push(item),
                Kind::Preset => presets.push(item),
                Kind::Error => errors.push(item),
            }
        }

        if !errors.is_empty() {
            output.push_str("## Errors\n\n");
            for item in errors {
                for error in &item.errors {
                    output.push_str(&format!("- **{}**: {}\n", error.code, error.message));
                }
            }
            output.push('\n');
        }

        if !conversions.is_empty() {
            output.push_str("## Conversions\n\n");
            for item in conversions {
                if let (Some(label), Some(content)) = (&item.label, &item.content) {
                    output.push_str(&format!("- **{}**: `{}`\n", label, content));
                }
            }
            output.push('\n');
        }

        if !bases.is_empty() {
            output.push_str("## Bases\n\n");
            for item in bases {
                if let Some(label) = &item.label {
                    output.push_str(&format!("- **{}**", label));
                    if let Some(data) = &item.data {
                        if let Some(alphabet) = data.get("alphabet").and_then(|a| a.as_str()) {
                            output.push_str(&format!(": `{}`", alphabet));
                        }
                    }
                    output.push('\n');
                }
            }
            output.push('\n');
        }

        for item in texts {
            render_text_item_md(&mut output, item);
        }

        if !checks.is_empty() {
            output.push_str("## Checks\n\n");
            for item in checks {
                let label = item.label.as_deref().unwrap_or("<stdin>");
                if item.errors.is_empty() {
                    output.push_str(&format!("- `{}`: ok\n", label));
                } else {
                    output.push_str(&format!("- `{}`:\n", label));
                    for error in &item.errors {
                        output.push_str(&format!("  - **{}**: {}\n", error.code, error.message));
                    }
                }
            }
            output.push('\n');
        }

        if !presets.is_empty() {
            output.push_str("## Presets\n\n");
            for item in presets {
                if let Some(label) = &item.label {
                    output.push_str(&format!("- **{}**", label));
                    if let Some(data) = &item.data {
                        if let Some(tool) = data.get("tool").and_then(|t| t.as_str()) {
                            output.push_str(&format!(" ({})", tool));
                        }
                    }
                    output.push('\n');
                }
            }
            output.push('\n');
        }

        output
    }
}

fn render_text_item_md(output: &mut String, item: &ResultItem) {
    if let Some(label) = &item.label {
        output.push_str(&format!("### `{}`\n", label));
    }

    if let Some(content) = &item.content {
        output.push_str(&format!("\n```{}\n", fence_language(item)));
        output.push_str(content);
        if !content.ends_with('\n') {
            output.push('\n');
        }
        output.push_str("```\n");
    }

    if item.meta.truncated {
        output.push_str("\n> Content was truncated\n");
    }

    output.push('\n');
}

/// Code-fence language hint for a text-bearing item
fn fence_language(item: &ResultItem) -> &'static str {
    match item.kind {
        Kind::Stylesheet => "css",
        Kind::Manifest => "yaml",
        Kind::Mock => "http",
        Kind::Snippet => match item.label.as_deref() {
            Some("curl") => "bash",
            Some("fetch") => "js",
            Some("python") => "python",
            _ => "",
        },
        _ => "",
    }
}

/// Render item contents only, separated when more than one item carries content
pub fn render_raw(result_set: &ResultSet) -> String {
    let contents: Vec<_> = result_set
        .items
        .iter()
        .filter_map(|item| item.content.clone())
        .collect();
    contents.join("\n---\n")
}

/// Render to stdout and forward the primary output to `--out` / `--copy`
pub fn emit(result_set: &ResultSet, config: RenderConfig, emit_opts: &EmitOptions) -> Result<()> {
    let renderer = Renderer::with_config(config);
    println!("{}", renderer.render(result_set));

    if emit_opts.out.is_none() && !emit_opts.copy {
        return Ok(());
    }

    let primary = render_raw(result_set);

    if let Some(path) = &emit_opts.out {
        std::fs::write(path, &primary)
            .with_context(|| format!("Failed to write output file: {:?}", path))?;
        if !emit_opts.quiet {
            eprintln!(
                "wrote {} bytes to {} (xxh3 {})",
                primary.len(),
                path.display(),
                hash_bytes(primary.as_bytes(), HashAlgorithm::Xxh3)
            );
        }
    }

    if emit_opts.copy {
        let clipboard = SystemClipboard::detect();
        // Clipboard failures are logged, never fatal
        if let Err(e) = clipboard.copy(&primary) {
            eprintln!("warning: clipboard write failed: {}", e);
        } else if !emit_opts.quiet {
            eprintln!("copied {} bytes to clipboard", primary.len());
        }
    }

    Ok(())
}
