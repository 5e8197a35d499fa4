//! Platform token lifecycle
//!
//! The platform issues access tokens valid for 30 minutes through a
//! refresh-token grant. The cached token is reused until it is 20
//! minutes old (a 10-minute safety margin before expiry), then
//! replaced. Refreshes are serialized per cache: the lock is held
//! across the token-endpoint round trip, so concurrent callers either
//! reuse the pre-refresh token or wait for the post-refresh one —
//! never two racing refreshes.

use std::time::{Duration, Instant};

use reqwest::Method;
use serde::Deserialize;
use stockbridge_domain::{BridgeError, PlatformCredentials, Result};
use tokio::sync::Mutex;
use tracing::{debug, info};
use url::Url;

use crate::http::HttpClient;

/// Refresh the token once it is older than this (validity is 30 min).
const REFRESH_AFTER: Duration = Duration::from_secs(20 * 60);

#[derive(Debug)]
struct CachedToken {
    token: String,
    issued_at: Instant,
}

/// Cached platform access token with single-flight refresh.
pub struct TokenCache {
    credentials: PlatformCredentials,
    refresh_after: Duration,
    state: Mutex<Option<CachedToken>>,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: Option<String>,
}

impl TokenCache {
    /// Create a cache with the production refresh policy.
    #[must_use]
    pub fn new(credentials: PlatformCredentials) -> Self {
        Self::with_policy(credentials, REFRESH_AFTER)
    }

    /// Create a cache with a custom staleness threshold.
    #[must_use]
    pub fn with_policy(credentials: PlatformCredentials, refresh_after: Duration) -> Self {
        Self { credentials, refresh_after, state: Mutex::new(None) }
    }

    /// Return a currently valid access token, refreshing first if the
    /// cached one is absent or past the staleness threshold.
    ///
    /// A failed refresh leaves the previously cached token untouched
    /// and surfaces as [`BridgeError::Auth`]; callers treat that as
    /// fatal for the in-flight operation.
    pub async fn ensure_fresh_token(&self, http: &HttpClient) -> Result<String> {
        let mut state = self.state.lock().await;

        if let Some(cached) = state.as_ref() {
            if cached.issued_at.elapsed() < self.refresh_after {
                debug!("reusing cached platform access token");
                return Ok(cached.token.clone());
            }
        }

        info!("refreshing platform access token");
        let token = self.refresh(http).await?;
        *state = Some(CachedToken { token: token.clone(), issued_at: Instant::now() });
        Ok(token)
    }

    async fn refresh(&self, http: &HttpClient) -> Result<String> {
        let mut url = Url::parse(&format!("{}/oauth/v2/token", self.credentials.accounts_url))
            .map_err(|err| BridgeError::Auth(format!("invalid accounts url: {err}")))?;

        // The platform takes the grant in the query string; the POST
        // body is an empty form.
        url.query_pairs_mut()
            .append_pair("refresh_token", &self.credentials.refresh_token)
            .append_pair("client_id", &self.credentials.client_id)
            .append_pair("client_secret", &self.credentials.client_secret)
            .append_pair("grant_type", "refresh_token");

        let empty_form: [(&str, &str); 0] = [];
        let response = http
            .send(http.request(Method::POST, url).form(&empty_form))
            .await
            .map_err(|err| BridgeError::Auth(format!("token endpoint unreachable: {err}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(BridgeError::Auth(format!(
                "Unable to generate access token (HTTP {status})"
            )));
        }

        let parsed: TokenResponse = response
            .json()
            .await
            .map_err(|_| BridgeError::Auth("Unable to generate access token".to_string()))?;

        match parsed.access_token {
            Some(token) if !token.is_empty() => Ok(token),
            _ => Err(BridgeError::Auth("Unable to generate access token".to_string())),
        }
    }

    /// Age the cached token as if it had been issued `by` earlier.
    #[cfg(test)]
    pub(crate) async fn backdate(&self, by: Duration) {
        if let Some(cached) = self.state.lock().await.as_mut() {
            cached.issued_at = cached.issued_at.checked_sub(by).unwrap_or(cached.issued_at);
        }
    }

    /// Peek at the cached token without touching the refresh policy.
    #[cfg(test)]
    pub(crate) async fn cached_token(&self) -> Option<String> {
        self.state.lock().await.as_ref().map(|c| c.token.clone())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn credentials(server: &MockServer) -> PlatformCredentials {
        PlatformCredentials::new(
            "client-id".to_string(),
            "client-secret".to_string(),
            "refresh-tok".to_string(),
        )
        .with_accounts_url(server.uri())
    }

    fn token_response(token: &str) -> ResponseTemplate {
        ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "access_token": token,
            "token_type": "bearer",
            "expires_in": 1800
        }))
    }

    #[tokio::test]
    async fn fresh_token_is_reused_without_network_call() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/oauth/v2/token"))
            .and(query_param("grant_type", "refresh_token"))
            .and(query_param("refresh_token", "refresh-tok"))
            .and(query_param("client_id", "client-id"))
            .respond_with(token_response("TOK"))
            .expect(1)
            .mount(&server)
            .await;

        let http = HttpClient::new().unwrap();
        let cache = TokenCache::new(credentials(&server));

        assert_eq!(cache.ensure_fresh_token(&http).await.unwrap(), "TOK");
        assert_eq!(cache.ensure_fresh_token(&http).await.unwrap(), "TOK");

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1);
    }

    #[tokio::test]
    async fn stale_token_triggers_exactly_one_refresh() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/oauth/v2/token"))
            .respond_with(token_response("TOK1"))
            .up_to_n_times(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/oauth/v2/token"))
            .respond_with(token_response("TOK2"))
            .mount(&server)
            .await;

        let http = HttpClient::new().unwrap();
        let cache = TokenCache::new(credentials(&server));

        assert_eq!(cache.ensure_fresh_token(&http).await.unwrap(), "TOK1");

        // Past the 20-minute staleness threshold.
        cache.backdate(Duration::from_secs(21 * 60)).await;

        assert_eq!(cache.ensure_fresh_token(&http).await.unwrap(), "TOK2");
        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 2);
    }

    #[tokio::test]
    async fn failed_refresh_preserves_cached_token() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/oauth/v2/token"))
            .respond_with(token_response("TOK1"))
            .up_to_n_times(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/oauth/v2/token"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let http = HttpClient::new().unwrap();
        let cache = TokenCache::new(credentials(&server));

        cache.ensure_fresh_token(&http).await.unwrap();
        cache.backdate(Duration::from_secs(21 * 60)).await;

        let result = cache.ensure_fresh_token(&http).await;
        assert!(matches!(result, Err(BridgeError::Auth(_))));

        // The previously cached (possibly still valid) token survives
        // the failed attempt.
        assert_eq!(cache.cached_token().await.as_deref(), Some("TOK1"));
    }

    #[tokio::test]
    async fn missing_access_token_is_an_auth_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/oauth/v2/token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "error": "invalid_client"
            })))
            .mount(&server)
            .await;

        let http = HttpClient::new().unwrap();
        let cache = TokenCache::new(credentials(&server));

        let result = cache.ensure_fresh_token(&http).await;
        match result {
            Err(BridgeError::Auth(msg)) => assert!(msg.contains("Unable to generate")),
            other => panic!("expected auth error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn concurrent_callers_share_a_single_refresh() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/oauth/v2/token"))
            .respond_with(token_response("TOK"))
            .expect(1)
            .mount(&server)
            .await;

        let http = HttpClient::new().unwrap();
        let cache = Arc::new(TokenCache::new(credentials(&server)));

        let (a, b) = tokio::join!(
            cache.ensure_fresh_token(&http),
            cache.ensure_fresh_token(&http)
        );

        assert_eq!(a.unwrap(), "TOK");
        assert_eq!(b.unwrap(), "TOK");
        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1);
    }
}
