//! Data models for the sweep.
//!
//! - [`Identity`] and [`IdentityDirectory`] - workspace members and the id to handle mapping
//! - [`RawConversation`] / [`Conversation`] - conversation records before and after
//!   classification into a [`ConversationKind`]
//! - [`Message`] and [`File`] - the two kinds of content that can be deleted
//! - [`DeletionSet`] and [`RunSummary`] - the accumulated work of one run
//!
//! Wire records deserialize straight into these types with serde; custom field
//! deserializers live in [`crate::api::deserializers`].

pub mod content;
pub mod conversation;
pub mod deletion;
pub mod identity;

pub use content::{File, Message};
pub use conversation::{Conversation, ConversationKind, RawConversation};
pub use deletion::{DeletionSet, RunSummary};
pub use identity::{Identity, IdentityDirectory};
