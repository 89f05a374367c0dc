use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::timestamps::SlackTs;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Not part of the wire record; stamped when the message is harvested
    #[serde(skip)]
    pub conversation_id: String,
    #[serde(rename = "ts")]
    pub timestamp: SlackTs,
    /// Empty for messages without a human author (bots, integrations)
    #[serde(rename = "user", default)]
    pub author_id: String,
    #[serde(default)]
    pub text: String,
    #[serde(rename = "thread_ts", default)]
    pub thread_root: Option<SlackTs>,
}

impl Message {
    /// Whether this message started a reply thread
    pub fn is_thread_root(&self) -> bool {
        self.thread_root.as_ref() == Some(&self.timestamp)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct File {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(
        rename = "created",
        deserialize_with = "crate::api::deserializers::deserialize_unix_seconds"
    )]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "user", default)]
    pub owner_id: String,
}
