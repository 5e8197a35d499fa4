//! # StockBridge Infrastructure
//!
//! REST synchronization plumbing for the StockBridge webhook bridge.
//!
//! This crate contains:
//! - A thin HTTP client wrapper over reqwest
//! - The generic paginated-fetch / chunked-write sync engines
//! - Backend integrations (data platform, warehouse)
//! - Inbound webhook bearer validation
//! - Environment configuration loading
//!
//! ## Architecture
//! - Depends on `stockbridge-domain` for errors and credential types
//! - Contains all "impure" code (network I/O, environment access)

pub mod config;
pub mod engine;
pub mod http;
pub mod integrations;
pub mod webhook;

// Re-export commonly used items
pub use engine::{fetch_all, write_all, FetchOutcome, BulkWriteOutcome, Outcome, WriteResult};
pub use http::HttpClient;
pub use integrations::cartoncloud::CartonCloudClient;
pub use integrations::zoho::ZohoClient;
