use std::cmp::Ordering;

use super::ChannelPattern;
use crate::models::{Conversation, File, Message};
use crate::timestamps::Cutoff;

/// Decides which conversations are swept and which content is deleted
///
/// Message rule, evaluated in order:
/// - When an author is set, messages by that author are kept (never deleted)
/// - Otherwise the message is deleted only if it is strictly before the cutoff
///
/// Files are deleted when created strictly before the cutoff. Restricting files to one
/// owner happens in the listing request, not here.
#[derive(Debug, Clone)]
pub struct SelectionFilter {
    pub pattern: ChannelPattern,
    pub cutoff: Cutoff,
    pub author_id: Option<String>,
}

impl SelectionFilter {
    pub fn new(pattern: ChannelPattern, cutoff: Cutoff, author_id: Option<String>) -> Self {
        Self { pattern, cutoff, author_id }
    }

    pub fn conversation_selected(&self, conversation: &Conversation) -> bool {
        self.pattern.matches(&conversation.name)
    }

    pub fn message_selected(&self, message: &Message) -> bool {
        if self.author_id.as_deref() == Some(message.author_id.as_str()) {
            return false;
        }
        message.timestamp.compare(&self.cutoff.ts) == Ordering::Less
    }

    pub fn file_selected(&self, file: &File) -> bool {
        file.created_at < self.cutoff.instant
    }
}
