//! Stylesheet validation
//!
//! Structural checks (brace balance, empty rules, malformed
//! declarations) plus property-name checks against a known-property list
//! with a fixed typo lookup table for suggestions. Diagnostics are
//! emitted as check result items; nothing here is fatal.

use anyhow::Result;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::{HashMap, HashSet};
use std::path::PathBuf;

use crate::core::model::{ResultItem, ResultSet, ToolError};
use crate::core::render::{emit, EmitOptions, RenderConfig};
use crate::css::collect_sources;

/// Shape of a valid property name
static PROPERTY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^-?[a-zA-Z][a-zA-Z0-9-]*$").expect("Invalid PROPERTY_RE regex"));

/// Common CSS properties recognized by the checker
static KNOWN_PROPERTIES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "align-content",
        "align-items",
        "align-self",
        "animation",
        "animation-delay",
        "animation-direction",
        "animation-duration",
        "animation-fill-mode",
        "animation-iteration-count",
        "animation-name",
        "animation-play-state",
        "animation-timing-function",
        "appearance",
        "aspect-ratio",
        "backdrop-filter",
        "background",
        "background-attachment",
        "background-clip",
        "background-color",
        "background-image",
        "background-origin",
        "background-position",
        "background-repeat",
        "background-size",
        "border",
        "border-bottom",
        "border-bottom-color",
        "border-bottom-left-radius",
        "border-bottom-right-radius",
        "border-bottom-style",
        "border-bottom-width",
        "border-collapse",
        "border-color",
        "border-image",
        "border-left",
        "border-left-color",
        "border-left-style",
        "border-left-width",
        "border-radius",
        "border-right",
        "border-right-color",
        "border-right-style",
        "border-right-width",
        "border-spacing",
        "border-style",
        "border-top",
        "border-top-color",
        "border-top-left-radius",
        "border-top-right-radius",
        "border-top-style",
        "border-top-width",
        "border-width",
        "bottom",
        "box-shadow",
        "box-sizing",
        "caret-color",
        "clear",
        "clip",
        "clip-path",
        "color",
        "column-gap",
        "content",
        "cursor",
        "direction",
        "display",
        "filter",
        "flex",
        "flex-basis",
        "flex-direction",
        "flex-flow",
        "flex-grow",
        "flex-shrink",
        "flex-wrap",
        "float",
        "font",
        "font-family",
        "font-size",
        "font-style",
        "font-variant",
        "font-weight",
        "gap",
        "grid",
        "grid-area",
        "grid-auto-columns",
        "grid-auto-flow",
        "grid-auto-rows",
        "grid-column",
        "grid-gap",
        "grid-row",
        "grid-template",
        "grid-template-areas",
        "grid-template-columns",
        "grid-template-rows",
        "height",
        "inset",
        "justify-content",
        "justify-items",
        "justify-self",
        "left",
        "letter-spacing",
        "line-height",
        "list-style",
        "list-style-image",
        "list-style-position",
        "list-style-type",
        "margin",
        "margin-bottom",
        "margin-left",
        "margin-right",
        "margin-top",
        "max-height",
        "max-width",
        "min-height",
        "min-width",
        "object-fit",
        "object-position",
        "opacity",
        "order",
        "outline",
        "outline-color",
        "outline-offset",
        "outline-style",
        "outline-width",
        "overflow",
        "overflow-wrap",
        "overflow-x",
        "overflow-y",
        "padding",
        "padding-bottom",
        "padding-left",
        "padding-right",
        "padding-top",
        "perspective",
        "pointer-events",
        "position",
        "resize",
        "right",
        "row-gap",
        "scroll-behavior",
        "tab-size",
        "table-layout",
        "text-align",
        "text-decoration",
        "text-decoration-color",
        "text-decoration-line",
        "text-decoration-style",
        "text-indent",
        "text-overflow",
        "text-shadow",
        "text-transform",
        "top",
        "transform",
        "transform-origin",
        "transition",
        "transition-delay",
        "transition-duration",
        "transition-property",
        "transition-timing-function",
        "user-select",
        "vertical-align",
        "visibility",
        "white-space",
        "width",
        "word-break",
        "word-spacing",
        "word-wrap",
        "z-index",
    ]
    .into_iter()
    .collect()
});

/// Fixed lookup of frequent misspellings
static TYPO_MAP: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    [
        ("colour", "color"),
        ("pading", "padding"),
        ("paddin", "padding"),
        ("magin", "margin"),
        ("margn", "margin"),
        ("widht", "width"),
        ("wdith", "width"),
        ("heigth", "height"),
        ("hieght", "height"),
        ("fnt-size", "font-size"),
        ("font-szie", "font-size"),
        ("backgroud", "background"),
        ("bckground", "background"),
        ("bakground", "background"),
        ("boder", "border"),
        ("bordr", "border"),
        ("dispaly", "display"),
        ("postion", "position"),
        ("posiiton", "position"),
        ("text-aling", "text-align"),
        ("line-hieght", "line-height"),
        ("flaot", "float"),
        ("overflw", "overflow"),
        ("z-idx", "z-index"),
    ]
    .into_iter()
    .collect()
});

/// One diagnostic raised against a stylesheet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub code: &'static str,
    pub message: String,
}

impl Diagnostic {
    fn new(code: &'static str, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

/// Validate a stylesheet and return its diagnostics
pub fn check_stylesheet(src: &str) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    let chars: Vec<char> = src.chars().collect();

    // (selector, declaration-or-child count, opening line)
    let mut stack: Vec<(String, usize, usize)> = Vec::new();
    let mut pending = String::new();
    let mut paren_depth = 0usize;
    let mut line = 1usize;
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        if c == '\n' {
            line += 1;
            pending.push(c);
            i += 1;
            continue;
        }

        // Skip comments
        if c == '/' && chars.get(i + 1) == Some(&'*') {
            i += 2;
            while i < chars.len() {
                if chars[i] == '\n' {
                    line += 1;
                }
                if chars[i] == '*' && chars.get(i + 1) == Some(&'/') {
                    i += 2;
                    break;
                }
                i += 1;
            }
            continue;
        }

        // Skip strings
        if c == '"' || c == '\'' {
            let quote = c;
            pending.push(c);
            i += 1;
            while i < chars.len() {
                let sc = chars[i];
                if sc == '\n' {
                    line += 1;
                }
                pending.push(sc);
                if sc == '\\' {
                    if let Some(&escaped) = chars.get(i + 1) {
                        pending.push(escaped);
                        i += 2;
                        continue;
                    }
                } else if sc == quote {
                    i += 1;
                    break;
                }
                i += 1;
            }
            continue;
        }

        match c {
            '(' => {
                paren_depth += 1;
                pending.push(c);
            }
            ')' => {
                paren_depth = paren_depth.saturating_sub(1);
                pending.push(c);
            }
            '{' if paren_depth == 0 => {
                let selector = pending.split_whitespace().collect::<Vec<_>>().join(" ");
                pending.clear();
                if let Some(top) = stack.last_mut() {
                    // a nested rule counts as content for its parent
                    top.1 += 1;
                }
                stack.push((selector, 0, line));
            }
            '}' if paren_depth == 0 => {
                check_declaration(&pending, line, &mut diagnostics, &stack);
                let had_declaration = !pending.trim().is_empty();
                pending.clear();
                match stack.pop() {
                    Some((selector, count, opened_at)) => {
                        if count == 0 && !had_declaration {
                            let name = if selector.is_empty() {
                                "<anonymous>".to_string()
                            } else {
                                selector
                            };
                            diagnostics.push(Diagnostic::new(
                                "EMPTY_RULE",
                                format!("empty rule '{}' (line {})", name, opened_at),
                            ));
                        }
                    }
                    None => {
                        diagnostics.push(Diagnostic::new(
                            "UNBALANCED_BRACES",
                            format!("unexpected '}}' (line {})", line),
                        ));
                    }
                }
            }
            ';' if paren_depth == 0 => {
                check_declaration(&pending, line, &mut diagnostics, &stack);
                if !pending.trim().is_empty() {
                    if let Some(top) = stack.last_mut() {
                        top.1 += 1;
                    }
                }
                pending.clear();
            }
            _ => pending.push(c),
        }

        i += 1;
    }

    for (selector, _, opened_at) in &stack {
        let name = if selector.is_empty() {
            "<anonymous>"
        } else {
            selector.as_str()
        };
        diagnostics.push(Diagnostic::new(
            "UNBALANCED_BRACES",
            format!("unclosed rule '{}' (line {})", name, opened_at),
        ));
    }

    diagnostics
}

/// Inspect a single declaration for property problems
fn check_declaration(
    pending: &str,
    line: usize,
    diagnostics: &mut Vec<Diagnostic>,
    stack: &[(String, usize, usize)],
) {
    let text = pending.trim();
    if text.is_empty() || stack.is_empty() {
        // top-level text (@import and friends) is not a declaration
        return;
    }

    // Declarations only occur directly inside a rule; an at-rule wrapper
    // like @media contains rules, and its stray text is reported anyway
    let Some((prop, _value)) = text.split_once(':') else {
        diagnostics.push(Diagnostic::new(
            "MALFORMED_DECLARATION",
            format!("declaration without ':' near line {}: '{}'", line, text),
        ));
        return;
    };

    let prop = prop.trim().to_ascii_lowercase();

    // Custom properties and vendor prefixes are out of checker scope
    if prop.starts_with("--") || prop.starts_with('-') {
        return;
    }

    if !PROPERTY_RE.is_match(&prop) {
        diagnostics.push(Diagnostic::new(
            "MALFORMED_DECLARATION",
            format!("invalid property name near line {}: '{}'", line, prop),
        ));
        return;
    }

    if !KNOWN_PROPERTIES.contains(prop.as_str()) {
        let message = match TYPO_MAP.get(prop.as_str()) {
            Some(suggestion) => format!(
                "unknown property '{}' (line {}), did you mean '{}'?",
                prop, line, suggestion
            ),
            None => format!("unknown property '{}' (line {})", prop, line),
        };
        diagnostics.push(Diagnostic::new("UNKNOWN_PROPERTY", message));
    }
}

/// Run the css check command
pub fn run_check(paths: &[PathBuf], config: RenderConfig, emit_opts: &EmitOptions) -> Result<()> {
    let sources = collect_sources(paths)?;
    let mut result_set = ResultSet::new();

    for source in &sources {
        let mut item = ResultItem::check(&source.label);
        for diagnostic in check_stylesheet(&source.content) {
            item = item.with_error(ToolError::new(diagnostic.code, diagnostic.message));
        }
        result_set.push(item);
    }

    emit(&result_set, config, emit_opts)
}
