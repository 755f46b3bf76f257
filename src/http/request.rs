//! Request model
//!
//! The typed request every http subcommand builds from its flags.
//! Validation happens at construction so snippet and mock rendering can
//! assume a well-formed request.

use crate::http::HttpError;

/// Request methods the builder accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
    Head,
    Options,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
            Method::Head => "HEAD",
            Method::Options => "OPTIONS",
        }
    }

    /// True when a body is conventionally sent with this method
    pub fn allows_body(&self) -> bool {
        matches!(self, Method::Post | Method::Put | Method::Patch)
    }
}

impl std::str::FromStr for Method {
    type Err = HttpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "GET" => Ok(Method::Get),
            "POST" => Ok(Method::Post),
            "PUT" => Ok(Method::Put),
            "PATCH" => Ok(Method::Patch),
            "DELETE" => Ok(Method::Delete),
            "HEAD" => Ok(Method::Head),
            "OPTIONS" => Ok(Method::Options),
            other => Err(HttpError::UnknownMethod(other.to_string())),
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single request header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub name: String,
    pub value: String,
}

/// Parse a header argument of the form "Name: value"
pub fn parse_header(raw: &str) -> Result<Header, HttpError> {
    match raw.split_once(':') {
        Some((name, value)) if !name.trim().is_empty() => Ok(Header {
            name: name.trim().to_string(),
            value: value.trim().to_string(),
        }),
        _ => Err(HttpError::InvalidHeader(raw.to_string())),
    }
}

/// A validated request
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<Header>,
    pub body: Option<String>,
}

impl HttpRequest {
    pub fn new(
        method: Method,
        url: &str,
        raw_headers: &[String],
        body: Option<String>,
    ) -> Result<Self, HttpError> {
        validate_url(url)?;

        let headers = raw_headers
            .iter()
            .map(|raw| parse_header(raw))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            method,
            url: url.trim().to_string(),
            headers,
            body,
        })
    }

    /// Case-insensitive header lookup
    #[allow(dead_code)]
    pub fn has_header(&self, name: &str) -> bool {
        self.headers
            .iter()
            .any(|h| h.name.eq_ignore_ascii_case(name))
    }
}

fn validate_url(url: &str) -> Result<(), HttpError> {
    let trimmed = url.trim();
    let rest = trimmed
        .strip_prefix("https://")
        .or_else(|| trimmed.strip_prefix("http://"))
        .ok_or_else(|| HttpError::InvalidUrl(trimmed.to_string()))?;

    let host = rest.split(['/', '?', '#']).next().unwrap_or("");
    if host.is_empty() {
        return Err(HttpError::InvalidUrl(trimmed.to_string()));
    }

    Ok(())
}
