//! Size-bounded chunked bulk write engine

use reqwest::Method;
use serde::Serialize;
use stockbridge_domain::{BridgeError, Result};
use tracing::{debug, warn};

use super::outcome::{classify_write, Outcome};
use super::session::Session;

/// Maximum records per POST. The backend rejects larger payloads.
pub const MAX_CHUNK_RECORDS: usize = 200;

/// Runaway guard: maximum chunk POSTs per call. Same silent-truncation
/// contract as the fetch engine's page cap.
pub const MAX_CHUNK_POSTS: usize = 1000;

/// Identifier assigned by the backend to one written record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteResult {
    /// Server-assigned record id.
    pub assigned_id: String,
    /// Index of the source item in the caller's input, tying the id
    /// back to the original ordering.
    pub source_index: usize,
}

/// Everything a completed bulk write produced.
#[derive(Debug)]
pub struct BulkWriteOutcome {
    /// One entry per written item, in input order.
    pub results: Vec<WriteResult>,
    /// True when the chunk cap was hit with items remaining unsent.
    pub truncated: bool,
}

/// Write `items` to `url` in consecutive chunks of at most
/// [`MAX_CHUNK_RECORDS`], preserving the input order.
///
/// Chunks go out strictly one at a time. The write is non-transactional
/// and at-least-once: when a chunk fails, the call aborts immediately
/// with [`BridgeError::BulkWrite`] and the chunks already accepted by
/// the server stay applied — there is no rollback or compensating
/// action. The error reports how many records had been committed so
/// callers can reconcile out-of-band.
///
/// An empty `items` slice returns an empty outcome without touching the
/// network.
pub async fn write_all<T, S>(session: &S, url: &str, items: &[T]) -> Result<BulkWriteOutcome>
where
    T: Serialize + Sync,
    S: Session + ?Sized,
{
    if items.is_empty() {
        debug!(url, "no items to write");
        return Ok(BulkWriteOutcome { results: Vec::new(), truncated: false });
    }

    debug!(url, items = items.len(), "POST all chunks");

    let mut results: Vec<WriteResult> = Vec::with_capacity(items.len());
    let mut truncated = false;

    for (chunk_index, chunk) in items.chunks(MAX_CHUNK_RECORDS).enumerate() {
        if chunk_index >= MAX_CHUNK_POSTS {
            warn!(url, sent = results.len(), "chunk cap reached with items remaining");
            truncated = true;
            break;
        }

        let body = serde_json::json!({ "data": chunk });
        let response = session
            .dispatch(Method::POST, url, Some(body), &[])
            .await
            .map_err(|err| bulk_error(chunk_index, results.len(), err))?;

        match classify_write(response.status, &response.body) {
            Outcome::Success(ids) => {
                if ids.len() != chunk.len() {
                    let detail = BridgeError::Format(format!(
                        "expected {} assigned ids, server returned {}",
                        chunk.len(),
                        ids.len()
                    ));
                    return Err(bulk_error(chunk_index, results.len(), detail));
                }

                let base = chunk_index * MAX_CHUNK_RECORDS;
                for (offset, assigned_id) in ids.into_iter().enumerate() {
                    results.push(WriteResult { assigned_id, source_index: base + offset });
                }
                debug!(url, chunk = chunk_index, written = chunk.len(), "chunk written");
            }
            Outcome::Empty => {
                let detail =
                    BridgeError::Format("write response carried the empty code".to_string());
                return Err(bulk_error(chunk_index, results.len(), detail));
            }
            Outcome::Error(err) => {
                warn!(url, chunk = chunk_index, error = %err, "aborting bulk write");
                return Err(bulk_error(chunk_index, results.len(), err));
            }
        }
    }

    Ok(BulkWriteOutcome { results, truncated })
}

fn bulk_error(chunk: usize, committed: usize, detail: BridgeError) -> BridgeError {
    BridgeError::BulkWrite { chunk, committed, detail: detail.to_string() }
}

#[cfg(test)]
mod tests {
    use reqwest::StatusCode;
    use serde::Serialize;
    use stockbridge_domain::BridgeError;

    use super::*;
    use crate::engine::paginate::tests::{response, ScriptedSession};

    #[derive(Debug, Serialize)]
    struct Line {
        #[serde(rename = "ProductCode")]
        product_code: String,
        #[serde(rename = "Quantity")]
        quantity: i64,
    }

    fn lines(count: usize) -> Vec<Line> {
        (0..count).map(|i| Line { product_code: format!("P{i}"), quantity: 1 }).collect()
    }

    fn write_ok(count: usize, first_id: usize) -> crate::engine::RawResponse {
        let result: Vec<_> = (0..count)
            .map(|i| {
                serde_json::json!({ "code": 3000, "data": { "ID": format!("z{}", first_id + i) } })
            })
            .collect();
        let body = serde_json::json!({ "code": 3000, "result": result }).to_string();
        response(StatusCode::OK, &body, None)
    }

    #[tokio::test]
    async fn splits_450_items_into_three_ordered_chunks() {
        let session = ScriptedSession::new(vec![
            write_ok(200, 0),
            write_ok(200, 200),
            write_ok(50, 400),
        ]);

        let outcome = write_all(&session, "http://platform/form", &lines(450)).await.unwrap();

        assert!(!outcome.truncated);
        assert_eq!(outcome.results.len(), 450);
        // source_index runs 0..450 in input order; ids line up with it.
        for (i, result) in outcome.results.iter().enumerate() {
            assert_eq!(result.source_index, i);
            assert_eq!(result.assigned_id, format!("z{i}"));
        }

        let calls = session.calls();
        assert_eq!(calls.len(), 3);
        let chunk_sizes: Vec<usize> = calls
            .iter()
            .map(|c| c.body.as_ref().unwrap()["data"].as_array().unwrap().len())
            .collect();
        assert_eq!(chunk_sizes, vec![200, 200, 50]);
        assert!(calls.iter().all(|c| c.method == Method::POST));

        // Chunk boundaries preserve the original relative order.
        let second_chunk_first =
            calls[1].body.as_ref().unwrap()["data"][0]["ProductCode"].as_str().unwrap().to_string();
        assert_eq!(second_chunk_first, "P200");
    }

    #[tokio::test]
    async fn second_chunk_failure_aborts_and_reports_committed_work() {
        let session = ScriptedSession::new(vec![
            write_ok(200, 0),
            response(StatusCode::INTERNAL_SERVER_ERROR, "", None),
        ]);

        let result = write_all(&session, "http://platform/form", &lines(450)).await;

        match result {
            Err(BridgeError::BulkWrite { chunk, committed, detail }) => {
                assert_eq!(chunk, 1);
                // Chunk one's server-side write has already taken
                // effect and is not rolled back.
                assert_eq!(committed, 200);
                assert!(detail.contains("HTTP 500"));
            }
            other => panic!("expected bulk write error, got {other:?}"),
        }

        // Chunk three was never sent.
        assert_eq!(session.calls().len(), 2);
    }

    #[tokio::test]
    async fn empty_input_makes_no_network_call() {
        let session = ScriptedSession::new(vec![]);

        let outcome = write_all::<Line, _>(&session, "http://platform/form", &[]).await.unwrap();

        assert!(outcome.results.is_empty());
        assert!(!outcome.truncated);
        assert!(session.calls().is_empty());
    }

    #[tokio::test]
    async fn chunk_cap_truncates_with_items_remaining() {
        // One item more than the cap can carry: every capped chunk is
        // sent and acknowledged, the surplus item stays unsent, and the
        // outcome is flagged instead of erroring.
        let responses: Vec<_> = (0..MAX_CHUNK_POSTS)
            .map(|i| write_ok(MAX_CHUNK_RECORDS, i * MAX_CHUNK_RECORDS))
            .collect();
        let session = ScriptedSession::new(responses);
        let items = lines(MAX_CHUNK_POSTS * MAX_CHUNK_RECORDS + 1);

        let outcome = write_all(&session, "http://platform/form", &items).await.unwrap();

        assert!(outcome.truncated);
        assert_eq!(outcome.results.len(), MAX_CHUNK_POSTS * MAX_CHUNK_RECORDS);
        assert_eq!(session.calls().len(), MAX_CHUNK_POSTS);
        // The results are a prefix of the input in original order.
        let last = outcome.results.last().unwrap();
        assert_eq!(last.source_index, MAX_CHUNK_POSTS * MAX_CHUNK_RECORDS - 1);
        assert_eq!(last.assigned_id, format!("z{}", MAX_CHUNK_POSTS * MAX_CHUNK_RECORDS - 1));
    }

    #[tokio::test]
    async fn id_count_mismatch_fails_the_call() {
        // Server acknowledges fewer records than were sent.
        let session = ScriptedSession::new(vec![write_ok(2, 0)]);

        let result = write_all(&session, "http://platform/form", &lines(3)).await;

        match result {
            Err(BridgeError::BulkWrite { chunk, committed, detail }) => {
                assert_eq!(chunk, 0);
                assert_eq!(committed, 0);
                assert!(detail.contains("expected 3 assigned ids"));
            }
            other => panic!("expected bulk write error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn unparseable_write_response_fails_fast() {
        let session = ScriptedSession::new(vec![response(StatusCode::OK, "not json", None)]);

        let result = write_all(&session, "http://platform/form", &lines(1)).await;
        assert!(matches!(result, Err(BridgeError::BulkWrite { chunk: 0, committed: 0, .. })));
    }
}
