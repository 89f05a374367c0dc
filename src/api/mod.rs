//! Remote API boundary.
//!
//! The harvesting and deletion stages only talk to the platform through the
//! [`RemoteApi`] trait. Failures come back already classified as an [`ApiError`], so
//! retry and idempotency decisions never depend on error wording.
//!
//! [`SlackClient`] is the HTTP implementation; tests substitute an in-memory fake.

pub mod deserializers;
pub mod slack;

pub use slack::{DEFAULT_API_URL, SlackClient};

use crate::models::{File, Identity, Message, RawConversation};
use crate::timestamps::SlackTs;

/// Errors from the remote API, classified by how callers must react
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Request was rejected by rate limiting; safe to retry
    #[error("rate limited")]
    RateLimited,
    /// Target of a delete no longer exists
    #[error("not found: {code}")]
    NotFound { code: String },
    /// API answered with an error code
    #[error("API error: {code}")]
    Remote { code: String },
    /// Non-success HTTP status without a usable API error body
    #[error("API error ({status}): {message}")]
    Status { status: u16, message: String },
    /// HTTP transport error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    /// JSON deserialization error
    #[error("Deserialization error: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// Classify an API error code
    pub fn from_code(code: &str) -> Self {
        match code {
            "ratelimited" | "rate_limited" => ApiError::RateLimited,
            "message_not_found" | "file_not_found" | "file_deleted" => {
                ApiError::NotFound { code: code.to_string() }
            }
            _ => ApiError::Remote { code: code.to_string() },
        }
    }

    pub fn is_rate_limited(&self) -> bool {
        matches!(self, ApiError::RateLimited)
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound { .. })
    }
}

/// One page of a cursor-paginated listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Cursor for the following page, `None` on the last page
    pub next_cursor: Option<String>,
}

impl<T> Page<T> {
    /// Build a page; an empty cursor marks the last page
    pub fn new(items: Vec<T>, next_cursor: impl Into<String>) -> Self {
        let next_cursor = next_cursor.into();
        Self { items, next_cursor: if next_cursor.is_empty() { None } else { Some(next_cursor) } }
    }

    pub fn last(items: Vec<T>) -> Self {
        Self { items, next_cursor: None }
    }

    /// Build a page from listings that report `has_more` alongside the cursor
    pub fn with_has_more(items: Vec<T>, has_more: bool, next_cursor: impl Into<String>) -> Self {
        if has_more { Self::new(items, next_cursor) } else { Self::last(items) }
    }
}

/// Operations the sweep needs from the platform
///
/// Every listing takes the cursor returned by the previous page, empty for the first.
pub trait RemoteApi {
    fn list_identities(&self, cursor: &str) -> Result<Page<Identity>, ApiError>;

    fn list_conversations(
        &self,
        kinds: &[crate::models::ConversationKind],
        cursor: &str,
    ) -> Result<Page<RawConversation>, ApiError>;

    /// Files shared in a conversation, optionally only those owned by `author_id`
    fn list_files(
        &self,
        conversation_id: &str,
        author_id: Option<&str>,
        cursor: &str,
    ) -> Result<Page<File>, ApiError>;

    fn list_messages(&self, conversation_id: &str, cursor: &str)
    -> Result<Page<Message>, ApiError>;

    /// Messages of the thread started by `root`, the root itself included
    fn list_replies(
        &self,
        conversation_id: &str,
        root: &SlackTs,
        cursor: &str,
    ) -> Result<Page<Message>, ApiError>;

    fn delete_message(&self, conversation_id: &str, timestamp: &SlackTs) -> Result<(), ApiError>;

    fn delete_file(&self, file_id: &str) -> Result<(), ApiError>;
}
