//! Mock responses
//!
//! Produces a deterministic simulated response for a request: status
//! line, canned headers, and a JSON body echoing what was received.
//! Nothing is sent anywhere; the optional delay imitates the latency of
//! a real round trip.

use anyhow::Result;
use std::time::Duration;

use crate::core::model::{Meta, ResultItem, ResultSet};
use crate::core::render::{emit, EmitOptions, RenderConfig};
use crate::core::util::truncate_string;
use crate::http::request::{HttpRequest, Method};
use crate::http::snippet::error_item;

/// Echoed request bodies are capped at this size
const MAX_ECHO_BYTES: usize = 4096;

/// A simulated response
#[derive(Debug, Clone)]
pub struct MockResponse {
    pub status: u16,
    pub reason: &'static str,
    pub headers: Vec<(String, String)>,
    pub body: String,
    pub truncated: bool,
}

/// Reason phrase for the common status codes; "Unknown" otherwise
pub fn reason_phrase(status: u16) -> &'static str {
    match status {
        200 => "OK",
        201 => "Created",
        202 => "Accepted",
        204 => "No Content",
        301 => "Moved Permanently",
        302 => "Found",
        304 => "Not Modified",
        400 => "Bad Request",
        401 => "Unauthorized",
        403 => "Forbidden",
        404 => "Not Found",
        405 => "Method Not Allowed",
        409 => "Conflict",
        418 => "I'm a teapot",
        422 => "Unprocessable Entity",
        429 => "Too Many Requests",
        500 => "Internal Server Error",
        502 => "Bad Gateway",
        503 => "Service Unavailable",
        504 => "Gateway Timeout",
        _ => "Unknown",
    }
}

/// Build the simulated response for a request
pub fn build_mock(request: &HttpRequest, status: u16, delay_ms: u64) -> MockResponse {
    // Bodies on bodyless methods are dropped, like a real server would
    let (echoed_body, truncated) = match &request.body {
        Some(body) if request.method.allows_body() => {
            let (text, truncated) = truncate_string(body, MAX_ECHO_BYTES);
            (Some(text), truncated)
        }
        _ => (None, false),
    };

    let body_json = serde_json::json!({
        "mock": true,
        "method": request.method.as_str(),
        "url": request.url,
        "status": status,
        "receivedHeaders": request.headers.len(),
        "receivedBody": echoed_body,
    });
    let body = serde_json::to_string_pretty(&body_json).unwrap_or_else(|_| "{}".to_string());

    let headers = vec![
        ("content-type".to_string(), "application/json".to_string()),
        ("content-length".to_string(), body.len().to_string()),
        ("x-mock".to_string(), "true".to_string()),
        ("x-mock-delay-ms".to_string(), delay_ms.to_string()),
    ];

    MockResponse {
        status,
        reason: reason_phrase(status),
        headers,
        body,
        truncated,
    }
}

/// Render the response as wire-style text
pub fn render_response(response: &MockResponse) -> String {
    let mut out = format!("HTTP/1.1 {} {}\n", response.status, response.reason);
    for (name, value) in &response.headers {
        out.push_str(&format!("{}: {}\n", name, value));
    }
    out.push('\n');
    out.push_str(&response.body);
    out
}

/// Run the http mock command
#[allow(clippy::too_many_arguments)]
pub fn run_mock(
    method: Method,
    url: &str,
    raw_headers: &[String],
    body: Option<String>,
    status: u16,
    delay_ms: u64,
    config: RenderConfig,
    emit_opts: &EmitOptions,
) -> Result<()> {
    let mut result_set = ResultSet::new();

    match HttpRequest::new(method, url, raw_headers, body) {
        Ok(request) => {
            if delay_ms > 0 {
                std::thread::sleep(Duration::from_millis(delay_ms));
            }
            let response = build_mock(&request, status, delay_ms);
            let rendered = render_response(&response);
            let meta = Meta {
                output_bytes: Some(rendered.len() as u64),
                truncated: response.truncated,
                ..Default::default()
            };
            result_set.push(
                ResultItem::mock(format!("{} {}", request.method, request.url), rendered)
                    .with_meta(meta),
            );
        }
        Err(err) => {
            result_set.push(error_item(err));
        }
    }

    emit(&result_set, config, emit_opts)
}
