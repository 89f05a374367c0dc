use anyhow::{Context, Result};

use super::pagination::harvest;
use super::retry::RetryPolicy;
use crate::api::RemoteApi;
use crate::filters::SelectionFilter;
use crate::models::{Conversation, ConversationKind, IdentityDirectory, RawConversation};

/// Conversations that passed the name pattern, plus how many were listed in total
#[derive(Debug, Clone, Default)]
pub struct ConversationHarvest {
    pub seen: usize,
    pub selected: Vec<Conversation>,
}

/// Decide a conversation's kind and the name filters match against
///
/// Flags are checked in order: multi-party, direct, private, else public. Direct
/// conversations have no name of their own and are named after the peer's handle, or
/// the raw peer id when the peer is not in the directory.
pub fn classify(raw: RawConversation, directory: &IdentityDirectory) -> Conversation {
    let RawConversation { id, name, is_mpim, is_im, is_private, user } = raw;

    if is_mpim {
        Conversation { id, name, kind: ConversationKind::MultiParty, peer_identity_id: None }
    } else if is_im {
        let name = user
            .as_deref()
            .map(|peer| directory.handle(peer).unwrap_or(peer).to_string())
            .unwrap_or_default();
        Conversation { id, name, kind: ConversationKind::Direct, peer_identity_id: user }
    } else if is_private {
        Conversation { id, name, kind: ConversationKind::Private, peer_identity_id: None }
    } else {
        Conversation { id, name, kind: ConversationKind::Public, peer_identity_id: None }
    }
}

/// List conversations of every kind, classify them and keep those matching the pattern
pub fn harvest_conversations(
    api: &dyn RemoteApi,
    policy: &RetryPolicy,
    directory: &IdentityDirectory,
    filter: &SelectionFilter,
) -> Result<ConversationHarvest> {
    if !filter.pattern.is_empty() {
        println!("Filtering channels using pattern: {}", filter.pattern);
    }

    let raw = harvest(policy, "conversations", |cursor| {
        api.list_conversations(&ConversationKind::ALL, cursor)
    })
    .context("Failed to list conversations")?;

    let seen = raw.len();
    let mut selected = Vec::new();
    for conversation in raw.into_iter().map(|raw| classify(raw, directory)) {
        if !filter.conversation_selected(&conversation) {
            continue;
        }
        println!(
            "{:04}. Found {} ID {} (name: {})",
            selected.len() + 1,
            conversation.kind,
            conversation.id,
            conversation.display_name()
        );
        selected.push(conversation);
    }

    println!("Fetched {} channels", selected.len());
    Ok(ConversationHarvest { seen, selected })
}
