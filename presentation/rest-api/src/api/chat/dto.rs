use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::chat::model::ChatMessage;

#[derive(Debug, Clone, Object)]
pub struct SendChatMessageRequest {
    /// Message text (cannot be blank)
    pub text: String,
}

#[derive(Debug, Clone, Object)]
pub struct ChatMessageResponse {
    pub id: i64,
    pub text: String,
    pub is_bot: bool,
    pub timestamp: DateTime<Utc>,
    /// Quick replies offered under this message
    #[oai(skip_serializing_if_is_none)]
    pub suggestions: Option<Vec<String>>,
}

impl From<ChatMessage> for ChatMessageResponse {
    fn from(message: ChatMessage) -> Self {
        Self {
            id: message.id,
            text: message.text,
            is_bot: message.is_bot,
            timestamp: message.timestamp,
            suggestions: message.suggestions,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct QuickSuggestionsResponse {
    pub suggestions: Vec<String>,
}
