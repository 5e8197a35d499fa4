//! Cursor-driven paginated fetch engine

use reqwest::Method;
use serde::de::DeserializeOwned;
use stockbridge_domain::Result;
use tracing::{debug, warn};

use super::outcome::{classify_page, Outcome};
use super::session::Session;

/// Runaway guard: maximum page fetches per call.
///
/// A server that keeps returning a live cursor would otherwise loop
/// forever. Reaching the cap is not an error; the call stops with
/// whatever was accumulated and flags the truncation.
pub const MAX_PAGE_FETCHES: usize = 200;

/// Header carrying the continuation cursor, on both request and
/// response. Presence on a response means more data remains; the body
/// never carries the cursor.
pub const CURSOR_HEADER: &str = "record_cursor";

/// Everything a completed paginated fetch produced.
#[derive(Debug)]
pub struct FetchOutcome<T> {
    /// Records in response order, pages concatenated. No re-sorting.
    pub records: Vec<T>,
    /// True when the page cap was hit while the server still offered a
    /// cursor. The records are a prefix of the full result set; callers
    /// that care should alarm on this rather than trust completeness.
    pub truncated: bool,
}

/// Fetch every page of `url`, following the continuation cursor.
///
/// Each page is classified through the result-code interpreter:
/// success appends records and notes the returned cursor, the empty
/// code ends the sequence normally, and any error aborts the whole
/// call — no partial result is returned on failure.
pub async fn fetch_all<T, S>(session: &S, url: &str) -> Result<FetchOutcome<T>>
where
    T: DeserializeOwned,
    S: Session + ?Sized,
{
    let mut records: Vec<T> = Vec::new();
    let mut cursor: Option<String> = None;
    let mut pages = 0usize;

    debug!(url, "GET all pages");

    loop {
        pages += 1;

        let extra_headers: Vec<(String, String)> = match cursor.as_ref() {
            Some(cursor) => vec![(CURSOR_HEADER.to_string(), cursor.clone())],
            None => Vec::new(),
        };

        let response = session.dispatch(Method::GET, url, None, &extra_headers).await?;

        // Cursor presence on the response decides whether another page
        // is requested; the previous cursor is always replaced.
        let next_cursor = response.header(CURSOR_HEADER);

        match classify_page::<T>(response.status, &response.body) {
            Outcome::Success(mut page) => {
                debug!(url, page = pages, fetched = page.len(), "page fetched");
                records.append(&mut page);
            }
            Outcome::Empty => {
                return Ok(FetchOutcome { records, truncated: false });
            }
            Outcome::Error(err) => {
                warn!(url, page = pages, error = %err, "aborting paginated fetch");
                return Err(err);
            }
        }

        cursor = next_cursor;
        if cursor.is_none() {
            return Ok(FetchOutcome { records, truncated: false });
        }

        if pages >= MAX_PAGE_FETCHES {
            warn!(url, pages, "page cap reached with live cursor; result truncated");
            return Ok(FetchOutcome { records, truncated: true });
        }
    }
}
