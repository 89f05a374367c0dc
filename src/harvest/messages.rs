use std::collections::HashSet;

use anyhow::{Context, Result};

use super::pagination::harvest;
use super::retry::RetryPolicy;
use super::threads::expand_thread;
use crate::api::RemoteApi;
use crate::filters::SelectionFilter;
use crate::models::{Conversation, Message};
use crate::timestamps::{SlackTs, pretty_ts};
use crate::utils::message_preview;

#[derive(Debug, Clone, Default)]
pub struct MessageHarvest {
    /// Messages listed, thread replies excluded
    pub scanned: usize,
    pub kept: usize,
    /// Replies pulled in by thread expansion; included in `selected`
    pub thread_replies: usize,
    /// Selected messages in discovery order, each thread root followed by its replies
    pub selected: Vec<Message>,
}

/// List messages in each conversation and select those the filter deletes
///
/// A selected message that starts a thread brings every reply of that thread along.
/// Replies also sent to the channel are listed both in the history and in their thread;
/// each message is selected at most once per conversation.
pub fn harvest_messages(
    api: &dyn RemoteApi,
    policy: &RetryPolicy,
    conversations: &[Conversation],
    filter: &SelectionFilter,
) -> Result<MessageHarvest> {
    let mut result = MessageHarvest::default();

    for (i, conversation) in conversations.iter().enumerate() {
        let name = conversation.display_name();
        println!("{:04}. Fetching messages for channel ID {} (name: {})", i + 1, conversation.id, name);

        let messages = harvest(policy, "messages", |cursor| {
            api.list_messages(&conversation.id, cursor)
        })
        .with_context(|| format!("Failed to list messages in channel {}", conversation.id))?;

        let mut seen: HashSet<SlackTs> = HashSet::new();
        for mut message in messages {
            result.scanned += 1;
            if seen.contains(&message.timestamp) {
                continue;
            }
            if !filter.message_selected(&message) {
                result.kept += 1;
                continue;
            }

            message.conversation_id = conversation.id.clone();
            report_message(result.selected.len() + 1, "channel", name, &message);
            let thread_root = message.is_thread_root().then_some(message.timestamp);
            seen.insert(message.timestamp);
            result.selected.push(message);

            if let Some(root) = thread_root {
                let replies = expand_thread(api, policy, &conversation.id, &root)
                    .with_context(|| {
                        format!("Failed to list replies to {} in channel {}", root, conversation.id)
                    })?;
                for reply in replies {
                    if !seen.insert(reply.timestamp) {
                        continue;
                    }
                    report_message(result.selected.len() + 1, "thread", name, &reply);
                    result.thread_replies += 1;
                    result.selected.push(reply);
                }
            }
        }
    }

    println!(
        "Fetched {} messages to delete (kept {} / {})",
        result.selected.len(),
        result.kept,
        result.scanned + result.thread_replies
    );
    Ok(result)
}

fn report_message(number: usize, marker: &str, conversation: &str, message: &Message) {
    println!(
        "{:04}. [{:<30}] [ts: {}]  --  {}",
        number,
        format!("{:<7} : {}", marker, conversation),
        pretty_ts(&message.timestamp),
        message_preview(&message.text)
    );
}
