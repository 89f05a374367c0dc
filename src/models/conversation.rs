use std::fmt;

use serde::{Deserialize, Serialize};

/// Conversation record as listed by the platform, before classification
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawConversation {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub is_mpim: bool,
    #[serde(default)]
    pub is_im: bool,
    #[serde(default)]
    pub is_private: bool,
    /// Peer identity id, present on direct conversations
    #[serde(default)]
    pub user: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConversationKind {
    Public,
    Private,
    MultiParty,
    Direct,
}

impl ConversationKind {
    pub const ALL: [ConversationKind; 4] = [
        ConversationKind::Public,
        ConversationKind::Private,
        ConversationKind::MultiParty,
        ConversationKind::Direct,
    ];

    /// Type name used by the listing endpoint's `types` parameter
    pub fn api_name(&self) -> &'static str {
        match self {
            ConversationKind::Public => "public_channel",
            ConversationKind::Private => "private_channel",
            ConversationKind::MultiParty => "mpim",
            ConversationKind::Direct => "im",
        }
    }
}

impl fmt::Display for ConversationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ConversationKind::Public => "public channel",
            ConversationKind::Private => "private channel",
            ConversationKind::MultiParty => "multiparty DM channel",
            ConversationKind::Direct => "DM channel",
        };
        f.write_str(label)
    }
}

/// Classified conversation
///
/// `name` is the name filters match against: the conversation's own name, or the
/// peer's handle for direct conversations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversation {
    pub id: String,
    pub name: String,
    pub kind: ConversationKind,
    pub peer_identity_id: Option<String>,
}

impl Conversation {
    /// Name used in reports, the id when the conversation has no name
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() { &self.id } else { &self.name }
    }
}
