//! Result-code interpretation
//!
//! The data platform wraps every successful HTTP response in an
//! application-level result code: 3000 means success with data, 3100
//! means success with no data (end of a result set, never an error).
//! Anything else inside a 2xx response is a malformed or failed
//! operation.

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use stockbridge_domain::BridgeError;

/// Application result code: success, data present.
pub const CODE_SUCCESS: i64 = 3000;
/// Application result code: success, no data found.
pub const CODE_EMPTY: i64 = 3100;

/// Three-way classification of a backend response.
#[derive(Debug)]
pub enum Outcome<T> {
    /// Success with data.
    Success(T),
    /// Success, but the backend had nothing to return. Callers treat
    /// this as a normal end-of-data condition, never as a failure.
    Empty,
    /// Transport- or application-level failure.
    Error(BridgeError),
}

#[derive(Debug, Deserialize)]
struct PageBody<T> {
    code: i64,
    #[serde(default = "Vec::new")]
    data: Vec<T>,
}

#[derive(Debug, Deserialize)]
struct WriteBody {
    code: i64,
    #[serde(default)]
    result: Vec<WriteEntry>,
}

#[derive(Debug, Deserialize)]
struct WriteEntry {
    data: Option<WriteEntryData>,
}

#[derive(Debug, Deserialize)]
struct WriteEntryData {
    #[serde(rename = "ID")]
    id: String,
}

/// Classify one paginated GET response into records / empty / error.
pub fn classify_page<T: DeserializeOwned>(status: StatusCode, body: &str) -> Outcome<Vec<T>> {
    if !status.is_success() {
        return Outcome::Error(BridgeError::Transport(format!("Non-OK response (HTTP {status})")));
    }

    let parsed: PageBody<T> = match serde_json::from_str(body) {
        Ok(parsed) => parsed,
        Err(_) => return Outcome::Error(BridgeError::Format("no response data".to_string())),
    };

    match parsed.code {
        CODE_SUCCESS => Outcome::Success(parsed.data),
        CODE_EMPTY => Outcome::Empty,
        other => {
            Outcome::Error(BridgeError::Format(format!("Bad response data (code {other})")))
        }
    }
}

/// Classify one bulk POST response into assigned record ids or an error.
///
/// Ids come back one per written record, in request order.
pub fn classify_write(status: StatusCode, body: &str) -> Outcome<Vec<String>> {
    if !status.is_success() {
        return Outcome::Error(BridgeError::Transport(format!("Non-OK response (HTTP {status})")));
    }

    let parsed: WriteBody = match serde_json::from_str(body) {
        Ok(parsed) => parsed,
        Err(_) => return Outcome::Error(BridgeError::Format("no response data".to_string())),
    };

    if parsed.code != CODE_SUCCESS {
        return Outcome::Error(BridgeError::Format(format!(
            "Bad response data (code {})",
            parsed.code
        )));
    }

    let mut ids = Vec::with_capacity(parsed.result.len());
    for entry in parsed.result {
        match entry.data {
            Some(data) => ids.push(data.id),
            None => {
                return Outcome::Error(BridgeError::Format(
                    "write result entry missing assigned id".to_string(),
                ))
            }
        }
    }

    Outcome::Success(ids)
}
