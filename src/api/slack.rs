use std::time::Duration;

use reqwest::StatusCode;
use reqwest::blocking::{Client, Response};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::json;
use tracing::debug;

use super::{ApiError, Page, RemoteApi};
use crate::models::{ConversationKind, File, Identity, Message, RawConversation};
use crate::timestamps::SlackTs;

pub const DEFAULT_API_URL: &str = "https://slack.com/api";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const IDENTITY_PAGE_LIMIT: u32 = 200;
const CONVERSATION_PAGE_LIMIT: u32 = 200;
const FILE_PAGE_LIMIT: u32 = 100;
const MESSAGE_PAGE_LIMIT: u32 = 1000;

/// Blocking HTTP client for the Slack Web API
pub struct SlackClient {
    base_url: String,
    token: String,
    http: Client,
}

impl SlackClient {
    /// Create a new client pointing at the given base URL with a user token
    pub fn new(base_url: &str, token: &str) -> Result<Self, ApiError> {
        let http = Client::builder()
            .user_agent(concat!("slack-sweeper/", env!("CARGO_PKG_VERSION")))
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
            http,
        })
    }

    fn method_url(&self, method: &str) -> String {
        format!("{}/{method}", self.base_url)
    }

    /// Call a read method with query parameters and decode the response
    fn get<T: DeserializeOwned>(&self, method: &str, query: &[(&str, String)]) -> Result<T, ApiError> {
        debug!(method, ?query, "GET");
        let resp =
            self.http.get(self.method_url(method)).bearer_auth(&self.token).query(query).send()?;
        handle_response(resp)
    }

    /// Call a write method with a JSON body and decode the response
    fn post<T: DeserializeOwned>(&self, method: &str, body: &serde_json::Value) -> Result<T, ApiError> {
        debug!(method, %body, "POST");
        let resp =
            self.http.post(self.method_url(method)).bearer_auth(&self.token).json(body).send()?;
        handle_response(resp)
    }
}

fn handle_response<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
    let status = resp.status();
    if status == StatusCode::TOO_MANY_REQUESTS {
        return Err(ApiError::RateLimited);
    }

    let body = resp.text()?;
    if !status.is_success() {
        return Err(ApiError::Status { status: status.as_u16(), message: body });
    }
    decode_envelope(&body)
}

#[derive(Debug, Deserialize)]
struct Envelope {
    ok: bool,
    #[serde(default)]
    error: Option<String>,
}

/// Decode a Web API body, turning `{"ok": false, "error": code}` into a classified error
pub(crate) fn decode_envelope<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    let envelope: Envelope = serde_json::from_str(body)?;
    if !envelope.ok {
        return Err(ApiError::from_code(envelope.error.as_deref().unwrap_or("unknown_error")));
    }
    Ok(serde_json::from_str(body)?)
}

#[derive(Debug, Default, Deserialize)]
struct ResponseMetadata {
    #[serde(default)]
    next_cursor: Option<String>,
}

/// Cursor for the next page; absent or null metadata means the last page
fn next_cursor(metadata: Option<ResponseMetadata>) -> String {
    metadata.and_then(|m| m.next_cursor).unwrap_or_default()
}

#[derive(Debug, Deserialize)]
struct MembersResponse {
    #[serde(default)]
    members: Vec<Identity>,
    #[serde(default)]
    response_metadata: Option<ResponseMetadata>,
}

#[derive(Debug, Deserialize)]
struct ChannelsResponse {
    #[serde(default)]
    channels: Vec<RawConversation>,
    #[serde(default)]
    response_metadata: Option<ResponseMetadata>,
}

#[derive(Debug, Deserialize)]
struct FilesResponse {
    #[serde(default)]
    files: Vec<File>,
    #[serde(default)]
    response_metadata: Option<ResponseMetadata>,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    messages: Vec<Message>,
    #[serde(default)]
    has_more: bool,
    #[serde(default)]
    response_metadata: Option<ResponseMetadata>,
}

#[derive(Debug, Deserialize)]
struct Acknowledged {}

fn with_cursor(mut query: Vec<(&'static str, String)>, cursor: &str) -> Vec<(&'static str, String)> {
    if !cursor.is_empty() {
        query.push(("cursor", cursor.to_string()));
    }
    query
}

impl RemoteApi for SlackClient {
    fn list_identities(&self, cursor: &str) -> Result<Page<Identity>, ApiError> {
        let query = with_cursor(vec![("limit", IDENTITY_PAGE_LIMIT.to_string())], cursor);
        let resp: MembersResponse = self.get("users.list", &query)?;
        Ok(Page::new(resp.members, next_cursor(resp.response_metadata)))
    }

    fn list_conversations(
        &self,
        kinds: &[ConversationKind],
        cursor: &str,
    ) -> Result<Page<RawConversation>, ApiError> {
        let types = kinds.iter().map(|k| k.api_name()).collect::<Vec<_>>().join(",");
        let query = with_cursor(
            vec![("types", types), ("limit", CONVERSATION_PAGE_LIMIT.to_string())],
            cursor,
        );
        let resp: ChannelsResponse = self.get("conversations.list", &query)?;
        Ok(Page::new(resp.channels, next_cursor(resp.response_metadata)))
    }

    fn list_files(
        &self,
        conversation_id: &str,
        author_id: Option<&str>,
        cursor: &str,
    ) -> Result<Page<File>, ApiError> {
        let mut query =
            vec![("channel", conversation_id.to_string()), ("limit", FILE_PAGE_LIMIT.to_string())];
        if let Some(author_id) = author_id {
            query.push(("user", author_id.to_string()));
        }
        let resp: FilesResponse = self.get("files.list", &with_cursor(query, cursor))?;
        Ok(Page::new(resp.files, next_cursor(resp.response_metadata)))
    }

    fn list_messages(
        &self,
        conversation_id: &str,
        cursor: &str,
    ) -> Result<Page<Message>, ApiError> {
        let query = with_cursor(
            vec![
                ("channel", conversation_id.to_string()),
                ("limit", MESSAGE_PAGE_LIMIT.to_string()),
            ],
            cursor,
        );
        let resp: MessagesResponse = self.get("conversations.history", &query)?;
        Ok(Page::with_has_more(resp.messages, resp.has_more, next_cursor(resp.response_metadata)))
    }

    fn list_replies(
        &self,
        conversation_id: &str,
        root: &SlackTs,
        cursor: &str,
    ) -> Result<Page<Message>, ApiError> {
        let query = with_cursor(
            vec![
                ("channel", conversation_id.to_string()),
                ("ts", root.to_string()),
                ("limit", MESSAGE_PAGE_LIMIT.to_string()),
            ],
            cursor,
        );
        let resp: MessagesResponse = self.get("conversations.replies", &query)?;
        Ok(Page::with_has_more(resp.messages, resp.has_more, next_cursor(resp.response_metadata)))
    }

    fn delete_message(&self, conversation_id: &str, timestamp: &SlackTs) -> Result<(), ApiError> {
        let body = json!({ "channel": conversation_id, "ts": timestamp.to_string() });
        let _: Acknowledged = self.post("chat.delete", &body)?;
        Ok(())
    }

    fn delete_file(&self, file_id: &str) -> Result<(), ApiError> {
        let _: Acknowledged = self.post("files.delete", &json!({ "file": file_id }))?;
        Ok(())
    }
}
