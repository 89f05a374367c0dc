//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::time::Duration;

use chrono::DateTime;
use slack_sweeper::api::{ApiError, Page, RemoteApi};
use slack_sweeper::harvest::RetryPolicy;
use slack_sweeper::models::{ConversationKind, File, Identity, Message, RawConversation};
use slack_sweeper::sweep::SweepOptions;
use slack_sweeper::timestamps::{Cutoff, SlackTs};

/// 2020-05-01T00:00:00Z
pub const CUTOFF_SECONDS: i64 = 1588291200;
pub const DAY: i64 = 86_400;

/// Platform timestamp `offset` seconds from the cutoff
pub fn ts_at(offset: i64) -> String {
    format!("{}.000100", CUTOFF_SECONDS + offset)
}

/// Sweep options with the standard cutoff and no waiting
pub fn fast_options() -> SweepOptions {
    let mut options = SweepOptions::new(Cutoff::parse("20200501-0000").unwrap());
    options.retry = RetryPolicy::immediate();
    options.pacing = Duration::ZERO;
    options
}

pub fn identity(id: &str, handle: &str) -> Identity {
    Identity { id: id.to_string(), handle: handle.to_string(), display_name: handle.to_uppercase() }
}

pub fn public(id: &str, name: &str) -> RawConversation {
    RawConversation { id: id.to_string(), name: name.to_string(), ..Default::default() }
}

pub fn private(id: &str, name: &str) -> RawConversation {
    RawConversation { is_private: true, ..public(id, name) }
}

pub fn multi_party(id: &str, name: &str) -> RawConversation {
    RawConversation { is_mpim: true, is_private: true, ..public(id, name) }
}

pub fn direct(id: &str, peer: &str) -> RawConversation {
    RawConversation { is_im: true, user: Some(peer.to_string()), ..public(id, "") }
}

pub fn message(ts: &str, author: &str, text: &str) -> Message {
    Message {
        conversation_id: String::new(),
        timestamp: SlackTs::parse(ts).unwrap(),
        author_id: author.to_string(),
        text: text.to_string(),
        thread_root: None,
    }
}

pub fn thread_root(ts: &str, author: &str) -> Message {
    Message { thread_root: Some(SlackTs::parse(ts).unwrap()), ..message(ts, author, "thread start") }
}

pub fn reply(ts: &str, root: &str, author: &str) -> Message {
    Message { thread_root: Some(SlackTs::parse(root).unwrap()), ..message(ts, author, "reply") }
}

pub fn file(id: &str, created_offset: i64, owner: &str) -> File {
    File {
        id: id.to_string(),
        name: format!("{}.txt", id.to_lowercase()),
        created_at: DateTime::from_timestamp(CUTOFF_SECONDS + created_offset, 0).unwrap(),
        owner_id: owner.to_string(),
    }
}

#[derive(Default)]
struct State {
    identities: Vec<Identity>,
    conversations: Vec<RawConversation>,
    messages: HashMap<String, Vec<Message>>,
    replies: HashMap<(String, SlackTs), Vec<Message>>,
    files: HashMap<String, Vec<File>>,
    deleted_messages: Vec<(String, SlackTs)>,
    deleted_files: Vec<String>,
    delete_log: Vec<String>,
    rate_limits_remaining: usize,
    delete_error: Option<String>,
    calls: usize,
    reply_listings: usize,
    file_listings: Vec<(String, Option<String>)>,
}

impl State {
    fn message_exists(&self, conversation_id: &str, ts: &SlackTs) -> bool {
        let in_history = self
            .messages
            .get(conversation_id)
            .is_some_and(|messages| messages.iter().any(|m| m.timestamp == *ts));
        let in_thread = self.replies.iter().any(|((conversation, _), replies)| {
            conversation == conversation_id && replies.iter().any(|m| m.timestamp == *ts)
        });
        in_history || in_thread
    }

    fn is_deleted(&self, conversation_id: &str, ts: &SlackTs) -> bool {
        self.deleted_messages.iter().any(|(c, t)| c == conversation_id && t == ts)
    }
}

/// In-memory platform serving fixed data in pages of `page_size`
///
/// Cursors are item offsets. Deleted items disappear from listings, and deleting them
/// again answers not-found.
pub struct FakeSlack {
    state: RefCell<State>,
    page_size: usize,
}

impl FakeSlack {
    pub fn new() -> Self {
        Self { state: RefCell::new(State::default()), page_size: 2 }
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn with_identity(self, identity: Identity) -> Self {
        self.state.borrow_mut().identities.push(identity);
        self
    }

    pub fn with_conversation(self, conversation: RawConversation) -> Self {
        self.state.borrow_mut().conversations.push(conversation);
        self
    }

    pub fn with_messages(self, conversation_id: &str, messages: Vec<Message>) -> Self {
        self.state.borrow_mut().messages.entry(conversation_id.to_string()).or_default().extend(messages);
        self
    }

    /// Register a thread; the listing returns the root first, like the real API
    pub fn with_thread(self, conversation_id: &str, root: Message, replies: Vec<Message>) -> Self {
        let key = (conversation_id.to_string(), root.timestamp);
        let mut listing = vec![root];
        listing.extend(replies);
        self.state.borrow_mut().replies.insert(key, listing);
        self
    }

    pub fn with_files(self, conversation_id: &str, files: Vec<File>) -> Self {
        self.state.borrow_mut().files.entry(conversation_id.to_string()).or_default().extend(files);
        self
    }

    /// Answer the next `count` calls of any kind with a rate-limit rejection
    pub fn rate_limit_next(&self, count: usize) {
        self.state.borrow_mut().rate_limits_remaining = count;
    }

    /// Make every delete fail with the given API error code
    pub fn fail_deletes_with(&self, code: &str) {
        self.state.borrow_mut().delete_error = Some(code.to_string());
    }

    pub fn deleted_messages(&self) -> Vec<(String, String)> {
        self.state
            .borrow()
            .deleted_messages
            .iter()
            .map(|(conversation, ts)| (conversation.clone(), ts.to_string()))
            .collect()
    }

    pub fn deleted_files(&self) -> Vec<String> {
        self.state.borrow().deleted_files.clone()
    }

    /// Successful deletes in the order they happened, as `message:<ts>` or `file:<id>`
    pub fn delete_log(&self) -> Vec<String> {
        self.state.borrow().delete_log.clone()
    }

    pub fn calls(&self) -> usize {
        self.state.borrow().calls
    }

    pub fn reply_listings(&self) -> usize {
        self.state.borrow().reply_listings
    }

    pub fn file_listings(&self) -> Vec<(String, Option<String>)> {
        self.state.borrow().file_listings.clone()
    }

    fn begin_call(&self) -> Result<(), ApiError> {
        let mut state = self.state.borrow_mut();
        state.calls += 1;
        if state.rate_limits_remaining > 0 {
            state.rate_limits_remaining -= 1;
            return Err(ApiError::RateLimited);
        }
        Ok(())
    }

    fn page<T: Clone>(&self, items: &[T], cursor: &str) -> Page<T> {
        let start: usize = if cursor.is_empty() { 0 } else { cursor.parse().unwrap() };
        let end = (start + self.page_size).min(items.len());
        let next = if end < items.len() { end.to_string() } else { String::new() };
        Page::new(items[start..end].to_vec(), next)
    }
}

impl Default for FakeSlack {
    fn default() -> Self {
        Self::new()
    }
}

impl RemoteApi for FakeSlack {
    fn list_identities(&self, cursor: &str) -> Result<Page<Identity>, ApiError> {
        self.begin_call()?;
        Ok(self.page(&self.state.borrow().identities, cursor))
    }

    fn list_conversations(
        &self,
        kinds: &[ConversationKind],
        cursor: &str,
    ) -> Result<Page<RawConversation>, ApiError> {
        self.begin_call()?;
        assert_eq!(kinds.len(), 4, "all conversation kinds are requested");
        Ok(self.page(&self.state.borrow().conversations, cursor))
    }

    fn list_files(
        &self,
        conversation_id: &str,
        author_id: Option<&str>,
        cursor: &str,
    ) -> Result<Page<File>, ApiError> {
        self.begin_call()?;
        let mut state = self.state.borrow_mut();
        state.file_listings.push((conversation_id.to_string(), author_id.map(str::to_string)));
        let files: Vec<File> = state
            .files
            .get(conversation_id)
            .map(|files| {
                files
                    .iter()
                    .filter(|f| author_id.is_none_or(|author| f.owner_id == author))
                    .filter(|f| !state.deleted_files.contains(&f.id))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();
        Ok(self.page(&files, cursor))
    }

    fn list_messages(
        &self,
        conversation_id: &str,
        cursor: &str,
    ) -> Result<Page<Message>, ApiError> {
        self.begin_call()?;
        let state = self.state.borrow();
        let messages: Vec<Message> = state
            .messages
            .get(conversation_id)
            .map(|messages| {
                messages
                    .iter()
                    .filter(|m| !state.is_deleted(conversation_id, &m.timestamp))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();
        Ok(self.page(&messages, cursor))
    }

    fn list_replies(
        &self,
        conversation_id: &str,
        root: &SlackTs,
        cursor: &str,
    ) -> Result<Page<Message>, ApiError> {
        self.begin_call()?;
        let mut state = self.state.borrow_mut();
        state.reply_listings += 1;
        let replies = state
            .replies
            .get(&(conversation_id.to_string(), *root))
            .cloned()
            .unwrap_or_default();
        Ok(self.page(&replies, cursor))
    }

    fn delete_message(&self, conversation_id: &str, timestamp: &SlackTs) -> Result<(), ApiError> {
        self.begin_call()?;
        let mut state = self.state.borrow_mut();
        if let Some(code) = &state.delete_error {
            return Err(ApiError::from_code(code));
        }
        if state.is_deleted(conversation_id, timestamp)
            || !state.message_exists(conversation_id, timestamp)
        {
            return Err(ApiError::from_code("message_not_found"));
        }
        state.deleted_messages.push((conversation_id.to_string(), *timestamp));
        state.delete_log.push(format!("message:{timestamp}"));
        Ok(())
    }

    fn delete_file(&self, file_id: &str) -> Result<(), ApiError> {
        self.begin_call()?;
        let mut state = self.state.borrow_mut();
        if let Some(code) = &state.delete_error {
            return Err(ApiError::from_code(code));
        }
        let exists = state.files.values().flatten().any(|f| f.id == file_id);
        if !exists || state.deleted_files.iter().any(|id| id == file_id) {
            return Err(ApiError::from_code("file_not_found"));
        }
        state.deleted_files.push(file_id.to_string());
        state.delete_log.push(format!("file:{file_id}"));
        Ok(())
    }
}
