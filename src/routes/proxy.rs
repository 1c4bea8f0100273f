//! `/api/*` forwarding to the external analysis backend.
//!
//! DESIGN
//! ======
//! The browser client only ever talks to its own origin. Requests under
//! `/api/{*path}` are replayed against `{API_UPSTREAM_URL}/{path}?{query}` with
//! the same method, body and end-to-end headers. `{path}` is taken from the
//! raw request URI, still percent-encoded, so encoded `?`, `#` or `/` stay
//! inside the path. Dot segments are refused with `400`. The upstream response is
//! returned as-is apart from hop-by-hop headers. Transport failures surface as
//! `502 Bad Gateway`.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use std::sync::Arc;
use std::time::Duration;

use axum::body::{Body, Bytes};
use axum::extract::State;
use axum::http::{HeaderMap, HeaderName, Method, StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};

/// Headers scoped to a single connection; never forwarded in either direction.
const HOP_BY_HOP_HEADERS: [&str; 8] = [
    "connection",
    "keep-alive",
    "proxy-authenticate",
    "proxy-authorization",
    "te",
    "trailer",
    "transfer-encoding",
    "upgrade",
];

/// Route prefix stripped before forwarding.
const API_PREFIX: &str = "/api/";

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("refusing to forward path {0:?}")]
    InvalidPath(String),
    #[error("failed to build upstream client: {0}")]
    Client(reqwest::Error),
    #[error("upstream request failed: {0}")]
    Upstream(reqwest::Error),
    #[error("upstream body read failed: {0}")]
    Body(reqwest::Error),
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        tracing::warn!(error = %self, "api proxy failure");
        match self {
            Self::InvalidPath(_) => (StatusCode::BAD_REQUEST, "invalid api path").into_response(),
            Self::Client(_) | Self::Upstream(_) | Self::Body(_) => {
                (StatusCode::BAD_GATEWAY, "upstream unavailable").into_response()
            }
        }
    }
}

/// Shared proxy state: one pooled HTTP client plus the upstream base URL.
#[derive(Clone)]
pub struct ApiProxy {
    inner: Arc<ProxyInner>,
}

struct ProxyInner {
    http: reqwest::Client,
    upstream: String,
}

impl ApiProxy {
    /// Create a proxy for `upstream` (no trailing slash) with a per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`ProxyError::Client`] if the HTTP client cannot be constructed.
    pub fn new(upstream: impl Into<String>, timeout: Duration) -> Result<Self, ProxyError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::none())
            .no_proxy()
            .build()
            .map_err(ProxyError::Client)?;
        Ok(Self { inner: Arc::new(ProxyInner { http, upstream: upstream.into() }) })
    }

    pub fn upstream(&self) -> &str {
        &self.inner.upstream
    }
}

/// Raw, still percent-encoded path after the `/api/` prefix.
///
/// Returns `None` for paths outside the prefix and for paths containing a `.`
/// or `..` segment in any spelling (`%2e`, `%2E%2e`, ...), which the upstream
/// URL parser would otherwise resolve against the base path.
pub(crate) fn forwarded_path(raw: &str) -> Option<&str> {
    let rest = raw.strip_prefix(API_PREFIX)?;
    let has_dot_segment = rest.split(['/', '\\']).any(|segment| {
        let decoded = segment.to_ascii_lowercase().replace("%2e", ".");
        decoded == "." || decoded == ".."
    });
    (!has_dot_segment).then_some(rest)
}

/// Build the upstream URL for a forwarded request.
pub(crate) fn upstream_url(base: &str, path: &str, query: Option<&str>) -> String {
    let path = path.trim_start_matches('/');
    match query.filter(|q| !q.is_empty()) {
        Some(q) => format!("{base}/{path}?{q}"),
        None => format!("{base}/{path}"),
    }
}

pub(crate) fn is_hop_by_hop(name: &HeaderName) -> bool {
    HOP_BY_HOP_HEADERS.contains(&name.as_str())
}

/// Copy end-to-end headers, dropping hop-by-hop ones, anything named in
/// `Connection`, and optionally `Host`.
pub(crate) fn end_to_end_headers(headers: &HeaderMap, strip_host: bool) -> HeaderMap {
    let listed: Vec<String> = headers
        .get_all(header::CONNECTION)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(','))
        .map(|token| token.trim().to_ascii_lowercase())
        .filter(|token| !token.is_empty())
        .collect();

    let mut out = HeaderMap::with_capacity(headers.len());
    for (name, value) in headers {
        if is_hop_by_hop(name) || listed.iter().any(|t| t == name.as_str()) {
            continue;
        }
        if strip_host && name == header::HOST {
            continue;
        }
        out.append(name.clone(), value.clone());
    }
    out
}

/// Forward one request under `/api/{*path}` to the upstream backend.
///
/// # Errors
///
/// Returns [`ProxyError::InvalidPath`] (rendered as `400`) for dot segments,
/// and a `502` [`ProxyError`] if the upstream cannot be reached or its body
/// cannot be read.
pub async fn forward(
    State(proxy): State<ApiProxy>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ProxyError> {
    let Some(path) = forwarded_path(uri.path()) else {
        return Err(ProxyError::InvalidPath(uri.path().to_owned()));
    };
    let url = upstream_url(proxy.upstream(), path, uri.query());
    tracing::debug!(%method, %url, "forwarding api request");

    let mut request_headers = end_to_end_headers(&headers, true);
    request_headers.remove(header::CONTENT_LENGTH);

    let upstream = proxy
        .inner
        .http
        .request(method, &url)
        .headers(request_headers)
        .body(body)
        .send()
        .await
        .map_err(ProxyError::Upstream)?;

    let status = upstream.status();
    let mut response_headers = end_to_end_headers(upstream.headers(), false);
    response_headers.remove(header::CONTENT_LENGTH);
    let bytes = upstream.bytes().await.map_err(ProxyError::Body)?;

    let mut response = Response::new(Body::from(bytes));
    *response.status_mut() = status;
    *response.headers_mut() = response_headers;
    Ok(response)
}
