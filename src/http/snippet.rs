//! Snippet assembly
//!
//! Turns a validated request into ready-to-run cURL, fetch and Python
//! requests snippets. String content is escaped through JSON
//! serialization for the fetch/python targets and single-quote escaping
//! for the shell.

use anyhow::Result;

use crate::core::model::{ResultItem, ResultSet, Tool, ToolError};
use crate::core::render::{emit, EmitOptions, RenderConfig};
use crate::http::request::{HttpRequest, Method};
use crate::http::HttpError;

/// Snippet flavors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnippetTarget {
    Curl,
    Fetch,
    Python,
}

/// All flavors, in emission order
pub const ALL_TARGETS: &[SnippetTarget] = &[
    SnippetTarget::Curl,
    SnippetTarget::Fetch,
    SnippetTarget::Python,
];

impl SnippetTarget {
    pub fn as_str(&self) -> &'static str {
        match self {
            SnippetTarget::Curl => "curl",
            SnippetTarget::Fetch => "fetch",
            SnippetTarget::Python => "python",
        }
    }
}

impl std::str::FromStr for SnippetTarget {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "curl" => Ok(SnippetTarget::Curl),
            "fetch" | "js" => Ok(SnippetTarget::Fetch),
            "python" | "py" => Ok(SnippetTarget::Python),
            other => Err(format!("Unknown snippet target: {}", other)),
        }
    }
}

/// Render one snippet for the request
pub fn render_snippet(request: &HttpRequest, target: SnippetTarget) -> String {
    match target {
        SnippetTarget::Curl => render_curl(request),
        SnippetTarget::Fetch => render_fetch(request),
        SnippetTarget::Python => render_python(request),
    }
}

fn shell_quote(s: &str) -> String {
    format!("'{}'", s.replace('\'', r"'\''"))
}

/// JSON string literal, shared by the fetch and python templates
fn quoted(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| format!("\"{}\"", s))
}

fn render_curl(request: &HttpRequest) -> String {
    let mut parts = vec![format!(
        "curl -X {} {}",
        request.method,
        shell_quote(&request.url)
    )];

    for header in &request.headers {
        parts.push(format!(
            "  -H {}",
            shell_quote(&format!("{}: {}", header.name, header.value))
        ));
    }

    if let Some(body) = &request.body {
        parts.push(format!("  -d {}", shell_quote(body)));
    }

    parts.join(" \\\n")
}

fn render_fetch(request: &HttpRequest) -> String {
    let mut options = vec![format!("  method: {}", quoted(request.method.as_str()))];

    if !request.headers.is_empty() {
        let entries: Vec<String> = request
            .headers
            .iter()
            .map(|h| format!("    {}: {}", quoted(&h.name), quoted(&h.value)))
            .collect();
        options.push(format!("  headers: {{\n{}\n  }}", entries.join(",\n")));
    }

    if let Some(body) = &request.body {
        options.push(format!("  body: {}", quoted(body)));
    }

    format!(
        "fetch({}, {{\n{}\n}})\n  .then((response) => response.json())\n  .then((data) => console.log(data));",
        quoted(&request.url),
        options.join(",\n")
    )
}

fn render_python(request: &HttpRequest) -> String {
    let method_fn = request.method.as_str().to_lowercase();
    let mut args = vec![format!("    {}", quoted(&request.url))];

    if !request.headers.is_empty() {
        let entries: Vec<String> = request
            .headers
            .iter()
            .map(|h| format!("{}: {}", quoted(&h.name), quoted(&h.value)))
            .collect();
        args.push(format!("    headers={{{}}}", entries.join(", ")));
    }

    if let Some(body) = &request.body {
        args.push(format!("    data={}", quoted(body)));
    }

    format!(
        "import requests\n\nresponse = requests.{}(\n{},\n)\nprint(response.status_code)\nprint(response.text)",
        method_fn,
        args.join(",\n")
    )
}

/// Run the http snippet command
#[allow(clippy::too_many_arguments)]
pub fn run_snippet(
    method: Method,
    url: &str,
    raw_headers: &[String],
    body: Option<String>,
    target: Option<SnippetTarget>,
    config: RenderConfig,
    emit_opts: &EmitOptions,
) -> Result<()> {
    let mut result_set = ResultSet::new();

    match HttpRequest::new(method, url, raw_headers, body) {
        Ok(request) => {
            let targets: Vec<SnippetTarget> = match target {
                Some(t) => vec![t],
                None => ALL_TARGETS.to_vec(),
            };
            for t in targets {
                result_set.push(ResultItem::snippet(t.as_str(), render_snippet(&request, t)));
            }
        }
        Err(err) => {
            result_set.push(error_item(err));
        }
    }

    emit(&result_set, config, emit_opts)
}

pub(crate) fn error_item(err: HttpError) -> ResultItem {
    ResultItem::error(Tool::Http, ToolError::new(err.code(), err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_request() -> HttpRequest {
        HttpRequest::new(
            Method::Post,
            "https://api.example.com/items",
            &["Content-Type: application/json".to_string()],
            Some(r#"{"name":"belt"}"#.to_string()),
        )
        .unwrap()
    }

    #[test]
    fn test_curl_snippet() {
        let snippet = render_snippet(&sample_request(), SnippetTarget::Curl);
        assert!(snippet.starts_with("curl -X POST 'https://api.example.com/items'"));
        assert!(snippet.contains("-H 'Content-Type: application/json'"));
        assert!(snippet.contains(r#"-d '{"name":"belt"}'"#));
        assert!(snippet.contains(" \\\n"));
    }

    #[test]
    fn test_curl_escapes_single_quotes() {
        let request = HttpRequest::new(
            Method::Post,
            "https://example.com",
            &[],
            Some("it's".to_string()),
        )
        .unwrap();
        let snippet = render_snippet(&request, SnippetTarget::Curl);
        assert!(snippet.contains(r"'it'\''s'"));
    }

    #[test]
    fn test_fetch_snippet() {
        let snippet = render_snippet(&sample_request(), SnippetTarget::Fetch);
        assert!(snippet.starts_with("fetch(\"https://api.example.com/items\", {"));
        assert!(snippet.contains("method: \"POST\""));
        assert!(snippet.contains("\"Content-Type\": \"application/json\""));
        assert!(snippet.contains("body: \"{\\\"name\\\":\\\"belt\\\"}\""));
        assert!(snippet.contains(".then((response) => response.json())"));
    }

    #[test]
    fn test_fetch_snippet_minimal_get() {
        let request =
            HttpRequest::new(Method::Get, "https://example.com", &[], None).unwrap();
        let snippet = render_snippet(&request, SnippetTarget::Fetch);
        assert!(snippet.contains("method: \"GET\""));
        assert!(!snippet.contains("headers"));
        assert!(!snippet.contains("body"));
    }

    #[test]
    fn test_python_snippet() {
        let snippet = render_snippet(&sample_request(), SnippetTarget::Python);
        assert!(snippet.starts_with("import requests"));
        assert!(snippet.contains("requests.post("));
        assert!(snippet.contains("headers={\"Content-Type\": \"application/json\"}"));
        assert!(snippet.contains("print(response.status_code)"));
    }

    #[test]
    fn test_target_parse() {
        assert_eq!("curl".parse::<SnippetTarget>().unwrap(), SnippetTarget::Curl);
        assert_eq!("js".parse::<SnippetTarget>().unwrap(), SnippetTarget::Fetch);
        assert_eq!("py".parse::<SnippetTarget>().unwrap(), SnippetTarget::Python);
        assert!("ruby".parse::<SnippetTarget>().is_err());
    }
}
