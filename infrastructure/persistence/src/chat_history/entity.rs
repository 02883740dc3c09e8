use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use business::domain::chat::model::ChatMessage;

/// Stored shape of one transcript entry.
#[derive(Debug, Serialize, Deserialize)]
pub struct ChatMessageEntity {
    pub id: i64,
    pub text: String,
    #[serde(rename = "isBot")]
    pub is_bot: bool,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestions: Option<Vec<String>>,
}

impl ChatMessageEntity {
    pub fn from_domain(message: &ChatMessage) -> Self {
        Self {
            id: message.id,
            text: message.text.clone(),
            is_bot: message.is_bot,
            timestamp: message.timestamp,
            suggestions: message.suggestions.clone(),
        }
    }

    pub fn into_domain(self) -> ChatMessage {
        ChatMessage {
            id: self.id,
            text: self.text,
            is_bot: self.is_bot,
            timestamp: self.timestamp,
            suggestions: self.suggestions,
        }
    }
}
