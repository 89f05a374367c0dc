use super::{File, Message};

/// Content selected for deletion, in discovery order
///
/// Items are only ever appended; the executor consumes the set as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeletionSet {
    pub messages: Vec<Message>,
    pub files: Vec<File>,
}

impl DeletionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_message(&mut self, message: Message) {
        self.messages.push(message);
    }

    pub fn push_file(&mut self, file: File) {
        self.files.push(file);
    }

    pub fn extend(&mut self, other: DeletionSet) {
        self.messages.extend(other.messages);
        self.files.extend(other.files);
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty() && self.files.is_empty()
    }
}

/// Counters for one run, filled in by the harvest and deletion stages
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub identities: usize,
    pub conversations_seen: usize,
    pub conversations_selected: usize,
    pub messages_scanned: usize,
    pub messages_selected: usize,
    pub messages_kept: usize,
    pub thread_replies: usize,
    pub files_scanned: usize,
    pub files_selected: usize,
    pub files_kept: usize,
    pub messages_deleted: usize,
    pub messages_already_absent: usize,
    pub files_deleted: usize,
    pub files_already_absent: usize,
}
