//! Warehouse API client
//!
//! A session is scoped to one tenant and authenticated at construction
//! through the client-credentials grant. The bearer token and the
//! version pin ride as default headers on every subsequent request, so
//! call sites never touch authentication.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use chrono::{DateTime, Duration, Utc};
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use stockbridge_domain::{BridgeError, Result, WarehouseCredentials};
use tracing::{debug, info, warn};

use super::types::{AuthResponse, IdRef, InboundOrder, OutboundOrder, SohReport, SohReportCreated,
    SohReportParameters, SohReportRequest, WarehouseProduct};
use crate::http::HttpClient;

/// Page size requested for stock-on-hand report runs.
const SOH_REPORT_PAGE_SIZE: i64 = 100;

/// Aggregation dimensions for stock-on-hand report runs. The backend
/// accepts only a fixed vocabulary here.
const SOH_AGGREGATE_BY: [&str; 4] =
    ["productType", "expiryDate", "unitOfMeasure", "productStatus"];

/// Authenticated connection to one warehouse tenant.
#[derive(Debug)]
pub struct CartonCloudClient {
    http: HttpClient,
    base_url: String,
    tenant_id: String,
    customer_id: String,
    warehouse_id: String,
    expires_at: DateTime<Utc>,
}

impl CartonCloudClient {
    /// Authenticate against the warehouse backend and build a session.
    ///
    /// Performs the client-credentials token grant up front; any
    /// failure along the way surfaces as [`BridgeError::Init`].
    pub async fn connect(credentials: &WarehouseCredentials) -> Result<Self> {
        let bootstrap = HttpClient::new()?;

        let token_url =
            format!("{}/uaa/oauth/token?grant_type=client_credentials", credentials.base_url);
        let basic =
            BASE64.encode(format!("{}:{}", credentials.client_id, credentials.client_secret));
        let request = bootstrap
            .request(Method::POST, &token_url)
            .header("Authorization", format!("Basic {basic}"))
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(urlencoding::encode("grant_type=client_credentials").into_owned());

        let response = bootstrap
            .send(request)
            .await
            .map_err(|err| BridgeError::Init(format!("token grant failed: {err}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(BridgeError::Init(format!(
                "token grant rejected (HTTP {status})"
            )));
        }

        let auth: AuthResponse = response
            .json()
            .await
            .map_err(|_| BridgeError::Init("token grant returned no usable body".to_string()))?;
        if auth.access_token.is_empty() {
            return Err(BridgeError::Init("token grant returned an empty token".to_string()));
        }

        let mut headers = HeaderMap::new();
        headers.insert("Accept-Version", HeaderValue::from_static("1"));
        let bearer = HeaderValue::from_str(&format!("Bearer {}", auth.access_token))
            .map_err(|_| BridgeError::Init("token is not a valid header value".to_string()))?;
        headers.insert("Authorization", bearer);

        let http = HttpClient::builder().default_headers(headers).build()?;
        let expires_at = Utc::now() + Duration::seconds(auth.expires_in);
        info!(tenant = %credentials.tenant_id, %expires_at, "warehouse session established");

        Ok(Self {
            http,
            base_url: credentials.base_url.clone(),
            tenant_id: credentials.tenant_id.clone(),
            customer_id: credentials.customer_id.clone(),
            warehouse_id: credentials.warehouse_id.clone(),
            expires_at,
        })
    }

    /// When the session token stops being accepted.
    pub fn token_expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }

    fn tenant_url(&self, resource: &str) -> String {
        format!("{}/tenants/{}/{resource}", self.base_url, self.tenant_id)
    }

    /// Fetch one resource by id. A non-success status means the id does
    /// not resolve and yields `None` rather than an error.
    async fn get_optional<T: DeserializeOwned>(&self, resource: String) -> Result<Option<T>> {
        let url = self.tenant_url(&resource);
        let response = self.http.send(self.http.request(Method::GET, &url)).await?;

        let status = response.status();
        if !status.is_success() {
            warn!(%url, %status, "warehouse lookup did not resolve");
            return Ok(None);
        }

        let body: T = response
            .json()
            .await
            .map_err(|_| BridgeError::Format("no response data".to_string()))?;
        Ok(Some(body))
    }

    /// Create one resource. Non-success statuses are hard failures.
    async fn post_json<B: Serialize + Sync, T: DeserializeOwned>(
        &self,
        resource: &str,
        body: &B,
        expected: StatusCode,
    ) -> Result<T> {
        let url = self.tenant_url(resource);
        let response =
            self.http.send(self.http.request(Method::POST, &url).json(body)).await?;

        let status = response.status();
        if status != expected {
            let detail = response.text().await.unwrap_or_default();
            debug!(%url, %status, %detail, "warehouse create rejected");
            return Err(BridgeError::Transport(format!("Non-OK response (HTTP {status})")));
        }

        response.json().await.map_err(|_| BridgeError::Format("no response data".to_string()))
    }

    /// Look up a warehouse product by its backend uuid.
    pub async fn product(&self, product_uuid: &str) -> Result<Option<WarehouseProduct>> {
        if product_uuid.is_empty() {
            return Ok(None);
        }
        self.get_optional(format!("warehouse-products/{product_uuid}")).await
    }

    /// Create a warehouse product; returns the stored representation.
    pub async fn create_product(&self, product: &WarehouseProduct) -> Result<WarehouseProduct> {
        self.post_json("warehouse-products", product, StatusCode::OK).await
    }

    /// Kick off an asynchronous stock-on-hand report run; returns the
    /// run id to poll with [`soh_report`](Self::soh_report).
    pub async fn request_soh_report(&self) -> Result<String> {
        let request = SohReportRequest {
            report_type: "STOCK_ON_HAND".to_string(),
            parameters: SohReportParameters {
                page_size: SOH_REPORT_PAGE_SIZE,
                warehouse: IdRef { id: self.warehouse_id.clone() },
                customer: IdRef { id: self.customer_id.clone() },
                aggregate_by: SOH_AGGREGATE_BY.iter().map(|s| s.to_string()).collect(),
            },
        };

        let created: SohReportCreated =
            self.post_json("report-runs", &request, StatusCode::CREATED).await?;
        Ok(created.id)
    }

    /// Poll a stock-on-hand report run.
    pub async fn soh_report(&self, report_uuid: &str) -> Result<Option<SohReport>> {
        if report_uuid.is_empty() {
            return Ok(None);
        }
        self.get_optional(format!("report-runs/{report_uuid}")).await
    }

    /// Look up an outbound (sales) order by its backend uuid.
    pub async fn sales_order(&self, order_uuid: &str) -> Result<Option<OutboundOrder>> {
        if order_uuid.is_empty() {
            return Ok(None);
        }
        self.get_optional(format!("outbound-orders/{order_uuid}")).await
    }

    /// Create an outbound (sales) order.
    pub async fn create_sales_order(&self, order: &OutboundOrder) -> Result<OutboundOrder> {
        self.post_json("outbound-orders", order, StatusCode::OK).await
    }

    /// Create an inbound (purchase) order.
    pub async fn create_purchase_order(&self, order: &InboundOrder) -> Result<InboundOrder> {
        self.post_json("inbound-orders", order, StatusCode::OK).await
    }
}
