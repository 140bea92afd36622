//! Request/response adapter around the converter.
//!
//! The converter itself is a pure function; this module is the thin glue
//! a function host calls. It gates the request (method, content type,
//! payload), runs the conversion, and shapes a JSON response with an HTTP
//! status. All responses carry `Content-Type: application/json`.

use blockdown_core::{Block, BlockdownError};
use blockdown_parser::markdown_to_blocks;
use log::warn;
use serde::Deserialize;
use serde_json::{json, Value};

/// Incoming request envelope.
///
/// `method` and `content_type` are host-supplied metadata, not part of
/// the markdown payload; both are optional so the converter can also be
/// invoked directly.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Request {
    /// Markdown payload
    #[serde(default)]
    pub md: Option<String>,
    /// HTTP method, if the host supplies one
    #[serde(default)]
    pub method: Option<String>,
    /// Content type header, if the host supplies one
    #[serde(default)]
    pub content_type: Option<String>,
}

impl Request {
    /// Build a request carrying only a markdown payload.
    pub fn with_markdown(md: impl Into<String>) -> Self {
        Self {
            md: Some(md.into()),
            method: None,
            content_type: None,
        }
    }
}

/// Outgoing response: status, headers, and a JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    /// HTTP status code
    pub status: u16,
    /// Response headers as name/value pairs
    pub headers: Vec<(String, String)>,
    /// JSON body
    pub body: Value,
}

impl Response {
    fn json(status: u16, body: Value) -> Self {
        Self {
            status,
            headers: vec![(
                "Content-Type".to_string(),
                "application/json".to_string(),
            )],
            body,
        }
    }

    fn rejection(err: &BlockdownError) -> Self {
        let mut response = Self::json(err.status(), json!({ "error": err.to_string() }));
        if matches!(err, BlockdownError::MethodNotAllowed(_)) {
            response
                .headers
                .push(("Allow".to_string(), "POST".to_string()));
        }
        response
    }

    /// Look up a header value by case-insensitive name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Handle one conversion request.
///
/// Gating happens in a fixed order: method, content type, payload. A
/// missing method means a direct invocation and is allowed; a content
/// type is only checked when present. Success is a 200 with
/// `{ "children": [blocks] }`.
///
/// # Example
///
/// ```
/// use blockdown::{handle, Request};
///
/// let response = handle(&Request::with_markdown("# Hi"));
/// assert_eq!(response.status, 200);
/// assert_eq!(response.body["children"][0]["type"], "heading_1");
/// ```
pub fn handle(request: &Request) -> Response {
    match convert(request) {
        Ok(children) => Response::json(200, json!({ "children": children })),
        Err(err) => {
            warn!("rejecting request: {err}");
            Response::rejection(&err)
        }
    }
}

/// Handle a raw JSON request envelope.
///
/// A body that does not deserialize into [`Request`] is a 400.
pub fn handle_json(payload: &str) -> Response {
    match serde_json::from_str::<Request>(payload) {
        Ok(request) => handle(&request),
        Err(err) => Response::json(
            400,
            json!({ "error": format!("invalid request body: {err}") }),
        ),
    }
}

/// Gate the request and run the conversion.
fn convert(request: &Request) -> Result<Value, BlockdownError> {
    if let Some(method) = request.method.as_deref() {
        if !method.eq_ignore_ascii_case("POST") {
            return Err(BlockdownError::MethodNotAllowed(method.to_string()));
        }
    }

    if let Some(content_type) = request.content_type.as_deref() {
        if !content_type
            .to_ascii_lowercase()
            .contains("application/json")
        {
            return Err(BlockdownError::UnsupportedContentType(
                content_type.to_string(),
            ));
        }
    }

    let md = request
        .md
        .as_deref()
        .filter(|md| !md.trim().is_empty())
        .ok_or(BlockdownError::MissingMarkdown)?;

    let blocks: Vec<Block> = markdown_to_blocks(md);
    serde_json::to_value(&blocks).map_err(|err| BlockdownError::Convert(err.to_string()))
}
