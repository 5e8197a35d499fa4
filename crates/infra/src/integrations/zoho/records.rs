//! Platform wire records
//!
//! Field names match the platform's report/form schemas exactly; these
//! records exist for marshaling only.

use serde::{Deserialize, Serialize};
use stockbridge_domain::WarehouseCredentials;

/// Lookup-field shape shared by platform reports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LookupField {
    #[serde(rename = "ID", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zc_display_value: Option<String>,
}

/// A webhook record: one inbound receipt or pick slip awaiting
/// conversion on the platform side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebhookRecord {
    #[serde(rename = "ID", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "Type_field", skip_serializing_if = "Option::is_none")]
    pub record_type: Option<String>,
    #[serde(rename = "Date_field", skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(rename = "STATUS", skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(rename = "DeliveryInstructions", skip_serializing_if = "Option::is_none")]
    pub delivery_instructions: Option<String>,
    #[serde(rename = "Warehouse", skip_serializing_if = "Option::is_none")]
    pub warehouse: Option<String>,
    #[serde(rename = "NumericId", skip_serializing_if = "Option::is_none")]
    pub numeric_id: Option<String>,
    #[serde(rename = "Customer_Reference", skip_serializing_if = "Option::is_none")]
    pub customer_reference: Option<String>,
    #[serde(rename = "Lines", skip_serializing_if = "Option::is_none")]
    pub lines: Option<Vec<WebhookRecordLine>>,
}

/// One product line of a webhook record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebhookRecordLine {
    #[serde(rename = "ID", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Parent webhook record id.
    #[serde(rename = "Record", skip_serializing_if = "Option::is_none")]
    pub record: Option<String>,
    #[serde(rename = "ProductCode")]
    pub product_code: String,
    #[serde(rename = "Quantity")]
    pub quantity: i64,
    #[serde(rename = "Expiry_Date_String", skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<String>,
}

/// Telemetry record for the inbound/outbound log form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InboundOutboundLog {
    #[serde(rename = "LogType")]
    pub log_type: String,
    #[serde(rename = "Log")]
    pub log: String,
}

/// Warehouse lookup on the configuration report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigurationWarehouse {
    #[serde(rename = "ID", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zc_display_value: Option<String>,
    #[serde(rename = "Warehouse_Name", skip_serializing_if = "Option::is_none")]
    pub warehouse_name: Option<String>,
}

/// One warehouse backend connection's configuration, held on the
/// platform and fetched per webhook.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartonCloudConfigurationRecord {
    #[serde(rename = "ID", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "Warehouse", skip_serializing_if = "Option::is_none")]
    pub warehouse: Option<ConfigurationWarehouse>,
    pub client_id: String,
    pub client_secret: String,
    pub url: String,
    pub tenant_uuid: String,
    pub customer_uuid: String,
    pub warehouse_uuid: String,
}

impl From<CartonCloudConfigurationRecord> for WarehouseCredentials {
    fn from(record: CartonCloudConfigurationRecord) -> Self {
        Self {
            client_id: record.client_id,
            client_secret: record.client_secret,
            base_url: record.url,
            tenant_id: record.tenant_uuid,
            customer_id: record.customer_uuid,
            warehouse_id: record.warehouse_uuid,
        }
    }
}
