//! Transport session seam between the engines and the backends

use async_trait::async_trait;
use reqwest::header::HeaderMap;
use reqwest::{Method, StatusCode};
use stockbridge_domain::Result;

/// Raw HTTP exchange result, uninterpreted.
///
/// The session hands this back verbatim; classification of the status
/// and body is the result-code interpreter's job.
#[derive(Debug)]
pub struct RawResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl RawResponse {
    /// Look up a response header as a UTF-8 string.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<String> {
        self.headers.get(name).and_then(|v| v.to_str().ok()).map(str::to_string)
    }
}

/// An authenticated backend connection the engines can dispatch through.
///
/// Implementations own one long-lived HTTP client per backend
/// connection and attach the current bearer credential to every
/// request, refreshing it first when stale. A request never goes out
/// with an absent or expired token.
#[async_trait]
pub trait Session: Send + Sync {
    /// Send one request and return the raw status, headers, and body.
    async fn dispatch(
        &self,
        method: Method,
        url: &str,
        body: Option<serde_json::Value>,
        extra_headers: &[(String, String)],
    ) -> Result<RawResponse>;
}
