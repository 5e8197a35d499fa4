//! Warehouse API wire types
//!
//! The warehouse backend speaks camelCase JSON and ignores absent
//! fields, so optional fields skip serialization when unset. One struct
//! per resource covers both the create request and the fetched
//! representation; server-assigned fields are optional.

use serde::{Deserialize, Serialize};

/// Response of the client-credentials token grant.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
    pub expires_in: i64,
    #[serde(default)]
    pub scope: Option<String>,
}

/// Bare id wrapper used wherever the API selects a resource by id.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct IdRef {
    pub id: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct References {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracking: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternate_reference: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub references: Option<CustomerReferences>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CustomerReferences {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Warehouse {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address1: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address2: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suburb: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<State>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postcode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<Country>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct State {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Country {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iso2_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iso3_code: Option<String>,
}

/// `SHIPPING` or `PICKUP`, plus the requested service level.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryMethod {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub method_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requested_service: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UnitOfMeasure {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub unit_type: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Money {
    pub amount: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
}

// ---------------------------------------------------------------------
// Warehouse products

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WarehouseProduct {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub product_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_unit_of_measure: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub references: Option<ProductReferences>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer: Option<ProductCustomer>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<ProductDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_property_requirements: Option<ItemPropertyRequirements>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_of_measures: Option<ProductUnitOfMeasures>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notifications: Option<Vec<Notification>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductReferences {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductCustomer {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variable_weight: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage: Option<Storage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inbound: Option<Inbound>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock_selection: Option<StockSelection>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Storage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub charge_method: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Inbound {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_status: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockSelection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_method: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strict: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry_threshold_days: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItemPropertyRequirements {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub batch: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductUnitOfMeasures {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub units: Option<UnitSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cartons: Option<BaseQty>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pallets: Option<BaseQty>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitSpec {
    pub base_qty: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseQty {
    pub base_qty: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub notification_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threshold_days: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threshold_count: Option<i64>,
}

// ---------------------------------------------------------------------
// Stock-on-hand reports

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SohReportRequest {
    #[serde(rename = "type")]
    pub report_type: String,
    pub parameters: SohReportParameters,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SohReportParameters {
    pub page_size: i64,
    pub warehouse: IdRef,
    pub customer: IdRef,
    pub aggregate_by: Vec<String>,
}

/// Acknowledgement of a report-run create; the run itself is async.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SohReportCreated {
    pub id: String,
    #[serde(rename = "type", default)]
    pub report_type: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SohReport {
    pub id: String,
    #[serde(rename = "type", default)]
    pub report_type: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub report_time: Option<String>,
    #[serde(default)]
    pub parameters: Option<SohReportParameters>,
    #[serde(default)]
    pub items: Vec<SohItem>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SohItem {
    #[serde(rename = "type", default)]
    pub item_type: Option<String>,
    #[serde(default)]
    pub measures: SohItemMeasures,
    #[serde(default)]
    pub properties: SohItemProperties,
    #[serde(default)]
    pub details: SohItemDetails,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SohItemMeasures {
    #[serde(default)]
    pub quantity: i64,
    #[serde(default)]
    pub quantity_free: i64,
    #[serde(default)]
    pub quantity_incoming: i64,
    #[serde(default)]
    pub quantity_allocated: i64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SohItemProperties {
    #[serde(default)]
    pub product_type: Option<String>,
    #[serde(default)]
    pub product_status: Option<String>,
    #[serde(default)]
    pub expiry_date: Option<String>,
    #[serde(default)]
    pub inbound_order: Option<IdRef>,
    #[serde(default)]
    pub unit_of_measure: Option<UnitOfMeasure>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SohItemDetails {
    #[serde(default)]
    pub product: Option<Product>,
    #[serde(default)]
    pub unit_of_measure: Option<UnitOfMeasure>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Product {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub references: Option<ProductReferences>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer: Option<ProductCustomer>,
}

// ---------------------------------------------------------------------
// Outbound (sales) orders

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutboundOrder {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub order_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub references: Option<References>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer: Option<Customer>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warehouse: Option<Warehouse>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<OutboundOrderDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<OutboundOrderProperties>,
    #[serde(default)]
    pub items: Vec<OutboundOrderItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutboundOrderDetails {
    #[serde(default)]
    pub urgent: bool,
    #[serde(default)]
    pub instructions: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collect: Option<Collect>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deliver: Option<Deliver>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invoice_value: Option<Money>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<OrderError>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderError {
    pub message: String,
    #[serde(default)]
    pub is_resolved: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Collect {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_date: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deliver {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<DeliveryMethod>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cash_payment_amount: Option<Money>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutboundOrderProperties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transport_company: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutboundOrderItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<serde_json::Value>,
    pub details: OrderItemDetails,
    pub measures: OutboundOrderItemMeasures,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product: Option<Product>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_of_measure: Option<UnitOfMeasure>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutboundOrderItemMeasures {
    pub quantity: f64,
}

// ---------------------------------------------------------------------
// Inbound (purchase) orders

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InboundOrder {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub order_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub references: Option<References>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer: Option<Customer>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warehouse: Option<Warehouse>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<InboundOrderDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<InboundOrderProperties>,
    #[serde(default)]
    pub items: Vec<InboundOrderItem>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InboundOrderDetails {
    #[serde(default)]
    pub urgent: bool,
    #[serde(default)]
    pub instructions: String,
    #[serde(default)]
    pub arrival_date: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InboundOrderProperties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container_size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carrier: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InboundOrderItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<InboundOrderItemProperties>,
    pub details: OrderItemDetails,
    pub measures: InboundOrderItemMeasures,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InboundOrderItemProperties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub batch: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InboundOrderItemMeasures {
    pub quantity: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cubic: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outbound_order_serializes_with_camel_case_names() {
        let order = OutboundOrder {
            order_type: Some("OUTBOUND".to_string()),
            references: Some(References {
                customer: Some("SO-1001".to_string()),
                ..References::default()
            }),
            details: Some(OutboundOrderDetails {
                deliver: Some(Deliver {
                    required_date: Some("2026-09-01".to_string()),
                    ..Deliver::default()
                }),
                ..OutboundOrderDetails::default()
            }),
            ..OutboundOrder::default()
        };

        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(json["type"], "OUTBOUND");
        assert_eq!(json["references"]["customer"], "SO-1001");
        assert_eq!(json["details"]["deliver"]["requiredDate"], "2026-09-01");
        // Unset optional fields must not appear at all.
        assert!(json.get("id").is_none());
        assert!(json["details"].get("invoiceValue").is_none());
    }

    #[test]
    fn soh_report_tolerates_missing_measure_fields() {
        let report: SohReport = serde_json::from_str(
            r#"{
                "id": "run-1",
                "type": "STOCK_ON_HAND",
                "status": "Completed",
                "items": [{
                    "measures": { "quantity": 12 },
                    "properties": { "productType": "Frozen" },
                    "details": { "product": { "id": "p-1", "name": "72361" } }
                }]
            }"#,
        )
        .unwrap();

        let item = &report.items[0];
        assert_eq!(item.measures.quantity, 12);
        assert_eq!(item.measures.quantity_free, 0);
        assert_eq!(item.properties.product_type.as_deref(), Some("Frozen"));
        assert_eq!(item.details.product.as_ref().unwrap().name.as_deref(), Some("72361"));
    }

    #[test]
    fn inbound_order_round_trips_expiry_and_batch() {
        let json = r#"{
            "id": "in-1",
            "type": "INBOUND",
            "status": "DRAFT",
            "items": [{
                "properties": { "expiryDate": "2027-01-31", "batch": "B7" },
                "details": { "product": { "id": "p-9" } },
                "measures": { "quantity": 4.0, "cubic": 0.2 }
            }]
        }"#;

        let order: InboundOrder = serde_json::from_str(json).unwrap();
        let item = &order.items[0];
        assert_eq!(item.properties.as_ref().unwrap().expiry_date.as_deref(), Some("2027-01-31"));
        assert_eq!(item.measures.cubic, Some(0.2));
    }
}
