//! Generic REST synchronization engines
//!
//! The cursor-driven paginated fetch loop and the size-bounded chunked
//! bulk write loop shared by the backend integrations, plus the
//! result-code interpreter that turns raw responses into a three-way
//! success / empty / error outcome.
//!
//! Both engines run strictly sequentially within one call: each page
//! depends on the cursor of the previous response and each chunk on the
//! original item order, so there is never more than one request in
//! flight per call.

pub mod bulk;
pub mod outcome;
pub mod paginate;
pub mod session;

pub use bulk::{write_all, BulkWriteOutcome, WriteResult, MAX_CHUNK_POSTS, MAX_CHUNK_RECORDS};
pub use outcome::{classify_page, classify_write, Outcome, CODE_EMPTY, CODE_SUCCESS};
pub use paginate::{fetch_all, FetchOutcome, CURSOR_HEADER, MAX_PAGE_FETCHES};
pub use session::{RawResponse, Session};
