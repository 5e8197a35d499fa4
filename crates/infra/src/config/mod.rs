//! Environment configuration loader
//!
//! Credentials come from environment variables, with `.env` support for
//! local development. Required variables:
//! - `ZOHO_API_CLIENT_ID`, `ZOHO_API_CLIENT_SECRET`,
//!   `ZOHO_API_REFRESH_TOKEN`: data-platform refresh-token grant.
//! - `CARTON_CLOUD_CLIENT_ID`, `CARTON_CLOUD_CLIENT_SECRET`: inbound
//!   webhook credential.
//!
//! Optional:
//! - `ZOHO_ACCOUNTS_URL`: overrides the default accounts endpoint.

use stockbridge_domain::{BridgeError, PlatformCredentials, Result, WebhookUser};

/// User name assigned to the single statically configured webhook caller.
const WEBHOOK_USER_NAME: &str = "CartonCloudAPIWebhook";

/// Load `.env` into the process environment if one is present.
///
/// Missing files are fine; call once at startup before the loaders.
pub fn load_dotenv() {
    if let Ok(path) = dotenvy::dotenv() {
        tracing::debug!(path = %path.display(), "loaded environment from .env");
    }
}

/// Load the data-platform refresh-grant credentials.
pub fn load_platform_credentials() -> Result<PlatformCredentials> {
    let credentials = PlatformCredentials::new(
        env_var("ZOHO_API_CLIENT_ID")?,
        env_var("ZOHO_API_CLIENT_SECRET")?,
        env_var("ZOHO_API_REFRESH_TOKEN")?,
    );

    Ok(match std::env::var("ZOHO_ACCOUNTS_URL") {
        Ok(url) if !url.is_empty() => credentials.with_accounts_url(url),
        _ => credentials,
    })
}

/// Load the static webhook user set.
pub fn load_webhook_users() -> Result<Vec<WebhookUser>> {
    Ok(vec![WebhookUser {
        user_name: WEBHOOK_USER_NAME.to_string(),
        client_id: env_var("CARTON_CLOUD_CLIENT_ID")?,
        client_secret: env_var("CARTON_CLOUD_CLIENT_SECRET")?,
        active: true,
    }])
}

/// Get required environment variable.
///
/// # Errors
/// Returns `BridgeError::Config` if the variable is not set.
fn env_var(key: &str) -> Result<String> {
    std::env::var(key)
        .map_err(|_| BridgeError::Config(format!("Missing required environment variable: {key}")))
}
