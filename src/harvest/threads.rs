use super::pagination::harvest;
use super::retry::RetryPolicy;
use crate::api::{ApiError, RemoteApi};
use crate::models::Message;
use crate::timestamps::SlackTs;

/// Every reply in the thread started by `root`, stamped with the conversation id
///
/// Replies are returned without any time or author filtering: once a root is deleted,
/// its whole thread goes with it. The root itself, which the listing repeats as its
/// first entry, is left out.
pub fn expand_thread(
    api: &dyn RemoteApi,
    policy: &RetryPolicy,
    conversation_id: &str,
    root: &SlackTs,
) -> Result<Vec<Message>, ApiError> {
    let replies =
        harvest(policy, "replies", |cursor| api.list_replies(conversation_id, root, cursor))?;

    Ok(replies
        .into_iter()
        .filter(|reply| reply.timestamp != *root)
        .map(|mut reply| {
            reply.conversation_id = conversation_id.to_string();
            reply
        })
        .collect())
}
