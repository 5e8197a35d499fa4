//! Warehouse-management backend integration.

pub mod client;
pub mod types;

pub use client::CartonCloudClient;
pub use types::{AuthResponse, InboundOrder, InboundOrderItem, OutboundOrder, OutboundOrderItem,
    SohReport, SohReportRequest, WarehouseProduct};
