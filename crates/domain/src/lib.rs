//! # StockBridge Domain
//!
//! Shared domain types for the StockBridge synchronization bridge.
//!
//! This crate contains:
//! - The bridge error taxonomy and `Result` alias
//! - Per-backend credential types
//! - Inbound webhook user records
//!
//! ## Architecture
//! - No dependencies on other StockBridge crates
//! - Only external dependencies allowed
//! - Pure data structures; all I/O lives in `stockbridge-infra`

pub mod errors;
pub mod types;

// Re-export commonly used items
pub use errors::*;
pub use types::*;
