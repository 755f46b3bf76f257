//! Unified Result Model
//!
//! All commands map their output to this unified Result Model before
//! rendering. One item per produced artifact: a per-base representation,
//! a formatted stylesheet, a request snippet, a manifest document.

use serde::{Deserialize, Serialize};

/// The kind of result item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Conversion,
    Base,
    Stylesheet,
    Check,
    Snippet,
    Mock,
    Manifest,
    Preset,
    Error,
}

/// The tool family that produced a result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    Radix,
    Unit,
    Css,
    Http,
    K8s,
    Preset,
    Doctor,
}

/// Metadata for a result item
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Meta {
    /// Size of the input in bytes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_bytes: Option<u64>,

    /// Size of the produced content in bytes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_bytes: Option<u64>,

    /// Content hash of the produced content (XXH3)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,

    /// Whether the content was truncated
    #[serde(default)]
    pub truncated: bool,
}

/// Error attached to a result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolError {
    pub code: String,
    pub message: String,
}

impl ToolError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

/// The unified result item that all commands must produce
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultItem {
    /// The kind of this result
    pub kind: Kind,

    /// Short label identifying the artifact (base name, target, file path, ...)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// The produced content (formatted text, snippet, manifest, ...)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    /// Structured data payload (per-base maps, unit tables, descriptors)
    /// Allows direct embedding without JSON-in-string escaping
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,

    /// The tool family that produced this result
    pub tool: Tool,

    /// Metadata
    pub meta: Meta,

    /// Errors (if any)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ToolError>,
}

impl ResultItem {
    fn new(kind: Kind, tool: Tool) -> Self {
        Self {
            kind,
            label: None,
            content: None,
            data: None,
            tool,
            meta: Meta::default(),
            errors: Vec::new(),
        }
    }

    /// Create a new conversion result (one representation of a value)
    pub fn conversion(tool: Tool, label: impl Into<String>, content: impl Into<String>) -> Self {
        let mut item = Self::new(Kind::Conversion, tool);
        item.label = Some(label.into());
        item.content = Some(content.into());
        item
    }

    /// Create a new base descriptor result
    pub fn base(label: impl Into<String>, data: serde_json::Value) -> Self {
        let mut item = Self::new(Kind::Base, Tool::Radix);
        item.label = Some(label.into());
        item.data = Some(data);
        item
    }

    /// Create a new stylesheet result
    pub fn stylesheet(label: impl Into<String>, content: impl Into<String>) -> Self {
        let mut item = Self::new(Kind::Stylesheet, Tool::Css);
        item.label = Some(label.into());
        item.content = Some(content.into());
        item
    }

    /// Create a new check result (diagnostics live in `errors`)
    pub fn check(label: impl Into<String>) -> Self {
        let mut item = Self::new(Kind::Check, Tool::Css);
        item.label = Some(label.into());
        item
    }

    /// Create a new snippet result
    pub fn snippet(label: impl Into<String>, content: impl Into<String>) -> Self {
        let mut item = Self::new(Kind::Snippet, Tool::Http);
        item.label = Some(label.into());
        item.content = Some(content.into());
        item
    }

    /// Create a new mock response result
    pub fn mock(label: impl Into<String>, content: impl Into<String>) -> Self {
        let mut item = Self::new(Kind::Mock, Tool::Http);
        item.label = Some(label.into());
        item.content = Some(content.into());
        item
    }

    /// Create a new manifest result
    pub fn manifest(label: impl Into<String>, content: impl Into<String>) -> Self {
        let mut item = Self::new(Kind::Manifest, Tool::K8s);
        item.label = Some(label.into());
        item.content = Some(content.into());
        item
    }

    /// Create a new preset result
    pub fn preset(label: impl Into<String>, data: serde_json::Value) -> Self {
        let mut item = Self::new(Kind::Preset, Tool::Preset);
        item.label = Some(label.into());
        item.data = Some(data);
        item
    }

    /// Create a new error result
    pub fn error(tool: Tool, error: ToolError) -> Self {
        let mut item = Self::new(Kind::Error, tool);
        item.errors.push(error);
        item
    }

    /// Set metadata
    pub fn with_meta(mut self, meta: Meta) -> Self {
        self.meta = meta;
        self
    }

    /// Set structured data payload
    pub fn with_data(mut self, data: serde_json::Value) -> Self {
        self.data = Some(data);
        self
    }

    /// Add an error
    pub fn with_error(mut self, error: ToolError) -> Self {
        self.errors.push(error);
        self
    }
}

/// Result set containing multiple result items
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResultSet {
    pub items: Vec<ResultItem>,
}

impl ResultSet {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn push(&mut self, item: ResultItem) {
        self.items.push(item);
    }

    #[allow(dead_code)]
    pub fn extend(&mut self, items: impl IntoIterator<Item = ResultItem>) {
        self.items.extend(items);
    }

    /// Sort items by label for stable output
    pub fn sort(&mut self) {
        self.items.sort_by(|a, b| match (&a.label, &b.label) {
            (Some(la), Some(lb)) => la.cmp(lb),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => std::cmp::Ordering::Equal,
        });
    }

    /// True if any item carries an error
    #[allow(dead_code)]
    pub fn has_errors(&self) -> bool {
        self.items.iter().any(|i| !i.errors.is_empty())
    }

    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl IntoIterator for ResultSet {
    type Item = ResultItem;
    type IntoIter = std::vec::IntoIter<ResultItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl FromIterator<ResultItem> for ResultSet {
    fn from_iter<T: IntoIterator<Item = ResultItem>>(iter: T) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}
