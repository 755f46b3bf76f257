//! Stylesheet formatter and minifier
//!
//! A small scanner tracks comment, string and paren state so that braces
//! and semicolons inside `url(...)`, `calc(...)` or quoted content never
//! act as structure. Formatting is total: malformed input still produces
//! best-effort output, with diagnostics left to `css check`.

use anyhow::Result;
use std::path::PathBuf;

use crate::core::model::{Meta, ResultItem, ResultSet};
use crate::core::render::{emit, EmitOptions, RenderConfig};
use crate::core::util::{hash_bytes, HashAlgorithm};
use crate::css::collect_sources;

/// Formatting options
#[derive(Debug, Clone, Copy)]
pub struct FormatOptions {
    /// Spaces per indent level
    pub indent: usize,
    /// Drop comments instead of preserving them
    pub strip_comments: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            indent: 2,
            strip_comments: false,
        }
    }
}

/// Re-indent a stylesheet: one selector and one declaration per line,
/// rules separated by a blank line
pub fn format_stylesheet(src: &str, opts: &FormatOptions) -> String {
    let chars: Vec<char> = src.chars().collect();
    let mut lines: Vec<String> = Vec::new();
    let mut pending = String::new();
    let mut depth: usize = 0;
    let mut paren_depth: usize = 0;
    let mut i = 0;

    let indent_at = |depth: usize| " ".repeat(depth * opts.indent);

    while i < chars.len() {
        let c = chars[i];

        // Comments
        if c == '/' && chars.get(i + 1) == Some(&'*') {
            let (comment, next) = read_comment(&chars, i);
            i = next;
            if opts.strip_comments {
                continue;
            }
            if pending.trim().is_empty() {
                lines.push(format!("{}{}", indent_at(depth), comment));
            } else {
                pending.push(' ');
                pending.push_str(&comment);
            }
            continue;
        }

        // Strings are copied verbatim
        if c == '"' || c == '\'' {
            let (literal, next) = read_string(&chars, i);
            pending.push_str(&literal);
            i = next;
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
                let selector = collapse_ws(pending.trim());
                pending.clear();
                let parts = split_top_level_commas(&selector);
                for (idx, part) in parts.iter().enumerate() {
                    if idx + 1 < parts.len() {
                        lines.push(format!("{}{},", indent_at(depth), part));
                    } else {
                        lines.push(format!("{}{} {{", indent_at(depth), part));
                    }
                }
                depth += 1;
            }
            '}' if paren_depth == 0 => {
                if !pending.trim().is_empty() {
                    let decl = normalize_declaration(pending.trim());
                    lines.push(format!("{}{};", indent_at(depth), decl));
                }
                pending.clear();
                depth = depth.saturating_sub(1);
                lines.push(format!("{}}}", indent_at(depth)));
                if depth == 0 {
                    lines.push(String::new());
                }
            }
            ';' if paren_depth == 0 => {
                if !pending.trim().is_empty() {
                    let decl = normalize_declaration(pending.trim());
                    lines.push(format!("{}{};", indent_at(depth), decl));
                }
                pending.clear();
            }
            _ => pending.push(c),
        }

        i += 1;
    }

    // Leftover text from malformed input
    if !pending.trim().is_empty() {
        lines.push(format!("{}{}", indent_at(depth), collapse_ws(pending.trim())));
    }

    while lines.last().map(|l| l.is_empty()).unwrap_or(false) {
        lines.pop();
    }

    if lines.is_empty() {
        String::new()
    } else {
        let mut out = lines.join("\n");
        out.push('\n');
        out
    }
}

/// Minify a stylesheet: strip comments, collapse whitespace, drop spaces
/// around separators and trailing semicolons before `}`
pub fn minify_stylesheet(src: &str) -> String {
    let stripped = strip_comments_text(src);
    let chars: Vec<char> = stripped.chars().collect();
    let mut out = String::new();
    let mut i = 0;

    // '+' and '-' stay spaced (calc() requires it); parens too, so
    // '@media (...)' keeps its space
    let is_separator = |c: char| matches!(c, '{' | '}' | ';' | ':' | ',' | '>' | '~');

    while i < chars.len() {
        let c = chars[i];

        if c == '"' || c == '\'' {
            let (literal, next) = read_string(&chars, i);
            out.push_str(&literal);
            i = next;
            continue;
        }

        if c.is_whitespace() {
            let mut j = i;
            while j < chars.len() && chars[j].is_whitespace() {
                j += 1;
            }
            let prev = out.chars().last();
            let next = chars.get(j).copied();
            let keep = match (prev, next) {
                (Some(p), Some(n)) => !is_separator(p) && !is_separator(n),
                _ => false,
            };
            if keep {
                out.push(' ');
            }
            i = j;
            continue;
        }

        if c == '}' && out.ends_with(';') {
            out.pop();
        }
        out.push(c);
        i += 1;
    }

    out
}

/// Consume a `/* ... */` comment starting at `start`; returns (text, next index)
fn read_comment(chars: &[char], start: usize) -> (String, usize) {
    let mut comment = String::from("/*");
    let mut i = start + 2;
    while i < chars.len() {
        if chars[i] == '*' && chars.get(i + 1) == Some(&'/') {
            comment.push_str("*/");
            return (comment, i + 2);
        }
        comment.push(chars[i]);
        i += 1;
    }
    // unterminated comment runs to EOF
    (comment, i)
}

/// Consume a quoted string starting at `start`; returns (literal, next index)
fn read_string(chars: &[char], start: usize) -> (String, usize) {
    let quote = chars[start];
    let mut literal = String::new();
    literal.push(quote);
    let mut i = start + 1;
    while i < chars.len() {
        let c = chars[i];
        literal.push(c);
        if c == '\\' {
            if let Some(&escaped) = chars.get(i + 1) {
                literal.push(escaped);
                i += 2;
                continue;
            }
        } else if c == quote {
            return (literal, i + 1);
        }
        i += 1;
    }
    (literal, i)
}

/// Collapse whitespace runs to single spaces, preserving quoted content
fn collapse_ws(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut out = String::new();
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        if c == '"' || c == '\'' {
            let (literal, next) = read_string(&chars, i);
            out.push_str(&literal);
            i = next;
        } else if c.is_whitespace() {
            while i < chars.len() && chars[i].is_whitespace() {
                i += 1;
            }
            if !out.is_empty() && i < chars.len() {
                out.push(' ');
            }
        } else {
            out.push(c);
            i += 1;
        }
    }
    out
}

/// Normalize a declaration to `property: value`
fn normalize_declaration(s: &str) -> String {
    let collapsed = collapse_ws(s);
    match split_first_colon(&collapsed) {
        Some((prop, value)) => format!("{}: {}", prop.trim_end(), value.trim_start()),
        None => collapsed,
    }
}

/// Split at the first colon outside quotes and parens
fn split_first_colon(s: &str) -> Option<(&str, &str)> {
    let mut paren_depth = 0usize;
    let mut quote: Option<char> = None;
    for (idx, c) in s.char_indices() {
        match quote {
            Some(q) => {
                if c == q {
                    quote = None;
                }
            }
            None => match c {
                '"' | '\'' => quote = Some(c),
                '(' => paren_depth += 1,
                ')' => paren_depth = paren_depth.saturating_sub(1),
                ':' if paren_depth == 0 => return Some((&s[..idx], &s[idx + 1..])),
                _ => {}
            },
        }
    }
    None
}

/// Split a selector list at top-level commas
fn split_top_level_commas(s: &str) -> Vec<String> {
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut paren_depth = 0usize;
    let mut bracket_depth = 0usize;
    let mut quote: Option<char> = None;

    for c in s.chars() {
        match quote {
            Some(q) => {
                current.push(c);
                if c == q {
                    quote = None;
                }
            }
            None => match c {
                '"' | '\'' => {
                    quote = Some(c);
                    current.push(c);
                }
                '(' => {
                    paren_depth += 1;
                    current.push(c);
                }
                ')' => {
                    paren_depth = paren_depth.saturating_sub(1);
                    current.push(c);
                }
                '[' => {
                    bracket_depth += 1;
                    current.push(c);
                }
                ']' => {
                    bracket_depth = bracket_depth.saturating_sub(1);
                    current.push(c);
                }
                ',' if paren_depth == 0 && bracket_depth == 0 => {
                    parts.push(current.trim().to_string());
                    current.clear();
                }
                _ => current.push(c),
            },
        }
    }

    if !current.trim().is_empty() || parts.is_empty() {
        parts.push(current.trim().to_string());
    }
    parts
}

/// Remove comments, respecting strings
fn strip_comments_text(src: &str) -> String {
    let chars: Vec<char> = src.chars().collect();
    let mut out = String::new();
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        if c == '"' || c == '\'' {
            let (literal, next) = read_string(&chars, i);
            out.push_str(&literal);
            i = next;
        } else if c == '/' && chars.get(i + 1) == Some(&'*') {
            let (_, next) = read_comment(&chars, i);
            i = next;
        } else {
            out.push(c);
            i += 1;
        }
    }
    out
}

fn stylesheet_item(label: &str, input: &str, output: String) -> ResultItem {
    let meta = Meta {
        input_bytes: Some(input.len() as u64),
        output_bytes: Some(output.len() as u64),
        hash: Some(hash_bytes(output.as_bytes(), HashAlgorithm::Xxh3)),
        truncated: false,
    };
    ResultItem::stylesheet(label, output).with_meta(meta)
}

/// Run the css fmt command
pub fn run_fmt(
    paths: &[PathBuf],
    write: bool,
    opts: &FormatOptions,
    config: RenderConfig,
    emit_opts: &EmitOptions,
) -> Result<()> {
    let sources = collect_sources(paths)?;
    let mut result_set = ResultSet::new();

    for source in &sources {
        let formatted = format_stylesheet(&source.content, opts);
        if write {
            if let Some(path) = &source.path {
                std::fs::write(path, &formatted)?;
            }
        }
        result_set.push(stylesheet_item(&source.label, &source.content, formatted));
    }

    emit(&result_set, config, emit_opts)
}

/// Run the css min command
pub fn run_min(
    paths: &[PathBuf],
    write: bool,
    config: RenderConfig,
    emit_opts: &EmitOptions,
) -> Result<()> {
    let sources = collect_sources(paths)?;
    let mut result_set = ResultSet::new();

    for source in &sources {
        let minified = minify_stylesheet(&source.content);
        if write {
            if let Some(path) = &source.path {
                std::fs::write(path, &minified)?;
            }
        }
        result_set.push(stylesheet_item(&source.label, &source.content, minified));
    }

    emit(&result_set, config, emit_opts)
}
