//! Harvesting: cursor-driven listing of identities, conversations, files, messages and
//! thread replies.
//!
//! # Error Handling Strategy
//!
//! Harvesting is fail-fast. Every remote call goes through [`call_with_retry`], which
//! absorbs rate limiting by sleeping and retrying; any other failure aborts the run with
//! context naming the resource being listed. A partially harvested deletion set is never
//! acted on.
//!
//! Each harvester returns its results and counters as a value; nothing is accumulated in
//! shared state between calls.

pub mod conversations;
pub mod files;
pub mod identities;
pub mod messages;
pub mod pagination;
pub mod retry;
pub mod threads;

pub use conversations::{ConversationHarvest, classify, harvest_conversations};
pub use files::{FileHarvest, harvest_files};
pub use identities::{IdentityHarvest, harvest_identities};
pub use messages::{MessageHarvest, harvest_messages};
pub use pagination::harvest;
pub use retry::{RetryPolicy, call_with_retry};
pub use threads::expand_thread;
