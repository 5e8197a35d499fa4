//! Per-backend credential types
//!
//! One immutable credentials value exists per backend connection. The
//! data-platform credentials are process-global; the warehouse
//! credentials are tenant-scoped and there may be one set per logical
//! warehouse connection.

use serde::{Deserialize, Serialize};

/// Default accounts host for the data-platform token endpoint.
pub const DEFAULT_PLATFORM_ACCOUNTS_URL: &str = "https://accounts.zoho.com";

/// Credentials for the data-platform (Zoho Creator style) backend.
///
/// Tokens are obtained with a refresh-token grant; the refresh token is
/// long-lived and issued out-of-band.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlatformCredentials {
    /// OAuth client id.
    pub client_id: String,
    /// OAuth client secret.
    pub client_secret: String,
    /// Long-lived refresh token for the refresh-token grant.
    pub refresh_token: String,
    /// Accounts host carrying the token endpoint.
    pub accounts_url: String,
}

impl PlatformCredentials {
    /// Create platform credentials against the default accounts host.
    #[must_use]
    pub fn new(client_id: String, client_secret: String, refresh_token: String) -> Self {
        Self {
            client_id,
            client_secret,
            refresh_token,
            accounts_url: DEFAULT_PLATFORM_ACCOUNTS_URL.to_string(),
        }
    }

    /// Override the accounts host (tests point this at a mock server).
    #[must_use]
    pub fn with_accounts_url(mut self, accounts_url: String) -> Self {
        self.accounts_url = accounts_url;
        self
    }
}

/// Credentials and scope identifiers for one warehouse (CartonCloud
/// style) backend connection.
///
/// In production these are fetched from the data platform's
/// configuration report, one record per warehouse.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WarehouseCredentials {
    /// OAuth client id for the client-credentials grant.
    pub client_id: String,
    /// OAuth client secret.
    pub client_secret: String,
    /// Base URL of the warehouse API.
    pub base_url: String,
    /// Tenant scope for all resource paths.
    pub tenant_id: String,
    /// Customer the bridge operates on behalf of.
    pub customer_id: String,
    /// Warehouse the bridge is bound to.
    pub warehouse_id: String,
}

/// A statically configured inbound webhook user.
///
/// Inbound webhook calls authenticate with a base64 `id:secret` bearer
/// credential checked against this list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebhookUser {
    /// Display name for logging.
    pub user_name: String,
    /// Expected client id.
    pub client_id: String,
    /// Expected client secret.
    pub client_secret: String,
    /// Inactive users never match.
    pub active: bool,
}
