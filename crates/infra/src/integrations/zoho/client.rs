//! Data-platform REST client
//!
//! One long-lived client per process. Every dispatched request carries
//! the platform's `Zoho-oauthtoken` Authorization scheme, with the
//! token refreshed through [`TokenCache`] whenever it goes stale.

use async_trait::async_trait;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use stockbridge_domain::{BridgeError, PlatformCredentials, Result};
use tracing::{debug, warn};

use super::auth::TokenCache;
use super::criteria::CriteriaString;
use super::records::{CartonCloudConfigurationRecord, InboundOutboundLog, WebhookRecord,
    WebhookRecordLine};
use crate::engine::{self, BulkWriteOutcome, FetchOutcome, Outcome, RawResponse, Session,
    CODE_SUCCESS};
use crate::http::HttpClient;

const CONFIGURATION_REPORT: &str = "CartonCloudConfiguration_Report";
const WEBHOOK_RECORDS_REPORT: &str = "AZURE_CartonCloud_Webhook_Records_Report";
const WEBHOOK_RECORDS_FORM: &str = "CartonCloudWebhookRecords";
const WEBHOOK_RECORD_LINES_FORM: &str = "CartonCloudWebhookRecordLines";
const LOG_FORM: &str = "Carton_Cloud_Inbound_Outbound_Log";

/// Page size requested from report endpoints.
const MAX_RECORDS: usize = 200;

/// Connection to the data-platform backend.
pub struct ZohoClient {
    http: HttpClient,
    tokens: TokenCache,
    /// Application base, e.g. `https://creator.example/api/v2.1/<owner>/<app>`.
    base_url: String,
}

/// Response body of a single-record form create.
#[derive(Debug, Deserialize)]
struct CreateResponse {
    code: i64,
    data: Option<CreatedId>,
}

#[derive(Debug, Deserialize)]
struct CreatedId {
    #[serde(rename = "ID")]
    id: String,
}

impl ZohoClient {
    /// Create a client. The first dispatched request acquires a token;
    /// construction itself does not touch the network.
    pub fn new(credentials: PlatformCredentials, base_url: String) -> Result<Self> {
        let http = HttpClient::new()?;
        Ok(Self { http, tokens: TokenCache::new(credentials), base_url })
    }

    fn report_url(&self, report: &str, criteria: &CriteriaString) -> String {
        if criteria.is_empty() {
            format!("{}/report/{report}?max_records={MAX_RECORDS}", self.base_url)
        } else {
            format!("{}/report/{report}?max_records={MAX_RECORDS}&{criteria}", self.base_url)
        }
    }

    fn form_url(&self, form: &str) -> String {
        format!("{}/form/{form}", self.base_url)
    }

    /// Fetch every page of a report URL. See [`engine::fetch_all`].
    pub async fn fetch_all<T: DeserializeOwned>(&self, url: &str) -> Result<FetchOutcome<T>> {
        engine::fetch_all(self, url).await
    }

    /// Bulk-create records against a form URL. See [`engine::write_all`].
    pub async fn write_all<T: Serialize + Sync>(
        &self,
        url: &str,
        items: &[T],
    ) -> Result<BulkWriteOutcome> {
        engine::write_all(self, url, items).await
    }

    /// Look up the warehouse backend configuration by warehouse record id.
    pub async fn carton_cloud_configuration_by_warehouse(
        &self,
        warehouse_zid: &str,
    ) -> Result<Option<CartonCloudConfigurationRecord>> {
        if warehouse_zid.is_empty() {
            return Ok(None);
        }

        let mut criteria = CriteriaString::new();
        criteria.add(&format!("Warehouse={warehouse_zid}"));
        self.first_configuration(&criteria).await
    }

    /// Look up the warehouse backend configuration by its API credentials.
    pub async fn carton_cloud_configuration_by_credentials(
        &self,
        client_id: &str,
        client_secret: &str,
    ) -> Result<Option<CartonCloudConfigurationRecord>> {
        if client_id.is_empty() || client_secret.is_empty() {
            return Ok(None);
        }

        let mut criteria = CriteriaString::new();
        criteria.add(&format!("client_id=\"{client_id}\""));
        criteria.add(&format!("client_secret=\"{client_secret}\""));
        self.first_configuration(&criteria).await
    }

    async fn first_configuration(
        &self,
        criteria: &CriteriaString,
    ) -> Result<Option<CartonCloudConfigurationRecord>> {
        let url = self.report_url(CONFIGURATION_REPORT, criteria);
        let outcome = self.fetch_all::<CartonCloudConfigurationRecord>(&url).await?;
        Ok(outcome.records.into_iter().next())
    }

    /// Fetch one webhook record by numeric id and status.
    ///
    /// Single-page lookup: the empty code means no matching record and
    /// returns `None`, never an error.
    pub async fn webhook_record(
        &self,
        numeric_id: &str,
        status: &str,
    ) -> Result<Option<WebhookRecord>> {
        let mut criteria = CriteriaString::new();
        criteria.add(&format!("NumericId=\"{numeric_id}\""));
        criteria.add(&format!("STATUS=\"{status}\""));
        let url = self.report_url(WEBHOOK_RECORDS_REPORT, &criteria);

        let response = self.dispatch(Method::GET, &url, None, &[]).await?;
        match engine::classify_page::<WebhookRecord>(response.status, &response.body) {
            Outcome::Success(records) => Ok(records.into_iter().next()),
            Outcome::Empty => Ok(None),
            Outcome::Error(err) => Err(err),
        }
    }

    /// Create one webhook record; returns the platform-assigned id.
    pub async fn post_webhook(&self, record: &WebhookRecord) -> Result<String> {
        let url = self.form_url(WEBHOOK_RECORDS_FORM);
        self.create_single(&url, record).await
    }

    /// Bulk-create webhook record lines through the chunked write engine.
    pub async fn post_webhook_lines(
        &self,
        lines: &[WebhookRecordLine],
    ) -> Result<BulkWriteOutcome> {
        let url = self.form_url(WEBHOOK_RECORD_LINES_FORM);
        self.write_all(&url, lines).await
    }

    /// Append a log record to the platform's inbound/outbound log form.
    ///
    /// Best-effort telemetry: failures are logged and swallowed so a
    /// broken log form can never take down the webhook it describes.
    pub async fn post_webhook_log(&self, log_type: &str, log: &str) -> bool {
        let url = self.form_url(LOG_FORM);
        let record =
            InboundOutboundLog { log_type: log_type.to_string(), log: log.to_string() };

        match self.create_single(&url, &record).await {
            Ok(_) => true,
            Err(err) => {
                warn!(log_type, error = %err, "unable to post webhook log");
                false
            }
        }
    }

    async fn create_single<T: Serialize + Sync>(&self, url: &str, record: &T) -> Result<String> {
        let body = serde_json::json!({ "data": record });
        let response = self.dispatch(Method::POST, url, Some(body), &[]).await?;

        if !response.status.is_success() {
            return Err(BridgeError::Transport(format!(
                "Non-OK response (HTTP {})",
                response.status
            )));
        }

        let parsed: CreateResponse = serde_json::from_str(&response.body)
            .map_err(|_| BridgeError::Format("no response data".to_string()))?;

        if parsed.code != CODE_SUCCESS {
            return Err(BridgeError::Format(format!("Bad response data (code {})", parsed.code)));
        }

        parsed
            .data
            .map(|d| d.id)
            .ok_or_else(|| BridgeError::Format("create response missing assigned id".to_string()))
    }
}

#[async_trait]
impl Session for ZohoClient {
    async fn dispatch(
        &self,
        method: Method,
        url: &str,
        body: Option<serde_json::Value>,
        extra_headers: &[(String, String)],
    ) -> Result<RawResponse> {
        // The freshness invariant lives here: no request leaves without
        // a token inside its validity window.
        let token = self.tokens.ensure_fresh_token(&self.http).await?;

        let mut request = self
            .http
            .request(method, url)
            .header("Authorization", format!("Zoho-oauthtoken {token}"));

        for (name, value) in extra_headers {
            request = request.header(name, value);
        }

        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = self.http.send(request).await?;
        let status = response.status();
        let headers = response.headers().clone();
        let body = response
            .text()
            .await
            .map_err(|_| BridgeError::Format("no response data".to_string()))?;

        debug!(%status, "platform response received");
        Ok(RawResponse { status, headers, body })
    }
}
