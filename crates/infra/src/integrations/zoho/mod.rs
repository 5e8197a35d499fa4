//! Data-platform (Zoho Creator) integration
//!
//! One process-global connection to the low-code data platform holding
//! the bridge's webhook records, warehouse configuration, and logs.
//! Tokens come from a refresh-token grant against the accounts host and
//! are cached for the 30-minute validity window.

pub mod auth;
pub mod client;
pub mod criteria;
pub mod records;

pub use auth::TokenCache;
pub use client::ZohoClient;
pub use criteria::CriteriaString;
pub use records::{
    CartonCloudConfigurationRecord, InboundOutboundLog, WebhookRecord, WebhookRecordLine,
};
