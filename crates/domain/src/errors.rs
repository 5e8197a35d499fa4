//! Error types used throughout the bridge

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for StockBridge
///
/// One variant per failure class of the sync core. Hitting a page or
/// chunk iteration cap is deliberately *not* represented here: the
/// engines report it as a `truncated` flag on their outcome types
/// because the legacy contract treats it as a successful stop.
#[derive(Error, Debug, Serialize, Deserialize)]
#[serde(tag = "type", content = "detail")]
pub enum BridgeError {
    /// Token endpoint returned a non-success status or an
    /// unparseable/empty token. Fatal for the in-flight operation;
    /// never retried at this layer.
    #[error("Authentication error: {0}")]
    Auth(String),

    /// Backend session construction failed (client build or initial
    /// token acquisition).
    #[error("Session init error: {0}")]
    Init(String),

    /// Non-success HTTP status not otherwise classified.
    #[error("Transport error: {0}")]
    Transport(String),

    /// Unparseable or absent response body on an otherwise successful
    /// HTTP exchange.
    #[error("Format error: {0}")]
    Format(String),

    /// Bulk write aborted mid-sequence. Chunks posted before `chunk`
    /// have already taken effect server-side and are not rolled back;
    /// `committed` is the number of records they covered.
    #[error("Bulk write aborted at chunk {chunk} ({committed} records already written): {detail}")]
    BulkWrite {
        /// Zero-based index of the chunk whose POST failed.
        chunk: usize,
        /// Records successfully written by the preceding chunks.
        committed: usize,
        /// Classification detail for the failing response.
        detail: String,
    },

    /// Configuration loading failure.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for StockBridge operations
pub type Result<T> = std::result::Result<T, BridgeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bulk_write_error_reports_committed_work() {
        let err = BridgeError::BulkWrite {
            chunk: 1,
            committed: 200,
            detail: "Non-OK response (HTTP 500)".to_string(),
        };

        let msg = err.to_string();
        assert!(msg.contains("chunk 1"));
        assert!(msg.contains("200 records already written"));
        assert!(msg.contains("HTTP 500"));
    }

    #[test]
    fn errors_serialize_with_type_tag() {
        let err = BridgeError::Auth("Unable to generate access token".to_string());
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["type"], "Auth");
        assert_eq!(json["detail"], "Unable to generate access token");
    }
}
