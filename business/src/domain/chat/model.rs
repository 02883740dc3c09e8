use chrono::{DateTime, Utc};

use super::errors::ChatError;

pub const QUICK_SUGGESTIONS: [&str; 6] = [
    "Suggest greener alternatives to shampoo",
    "Which item in my cart expires soon?",
    "How can I improve my green score?",
    "Find plastic-free packaging options",
    "Show me local sustainable brands",
    "What's the carbon footprint of my cart?",
];

const GREETING: &str = "Hi! I'm your Eco Assistant 🌱 I can help you make more sustainable shopping choices. What would you like to know?";
const UNREACHABLE: &str = "⚠️ Oops! I couldn't reach the server.";

/// One entry of the chat transcript.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub id: i64,
    pub text: String,
    pub is_bot: bool,
    pub timestamp: DateTime<Utc>,
    pub suggestions: Option<Vec<String>>,
}

impl ChatMessage {
    /// Message typed by the user. Blank text is rejected.
    pub fn from_user(text: &str, now: DateTime<Utc>) -> Result<Self, ChatError> {
        if text.trim().is_empty() {
            return Err(ChatError::EmptyMessage);
        }
        Ok(Self {
            id: now.timestamp_millis(),
            text: text.to_string(),
            is_bot: false,
            timestamp: now,
            suggestions: None,
        })
    }

    pub fn from_bot(text: String, now: DateTime<Utc>) -> Self {
        Self {
            id: now.timestamp_millis() + 1,
            text,
            is_bot: true,
            timestamp: now,
            suggestions: None,
        }
    }

    /// Shown in place of a reply when the agent could not be reached.
    pub fn unreachable(now: DateTime<Utc>) -> Self {
        Self {
            id: now.timestamp_millis() + 2,
            text: UNREACHABLE.to_string(),
            is_bot: true,
            timestamp: now,
            suggestions: None,
        }
    }

    pub fn greeting(now: DateTime<Utc>) -> Self {
        Self {
            id: 1,
            text: GREETING.to_string(),
            is_bot: true,
            timestamp: now,
            suggestions: Some(
                QUICK_SUGGESTIONS[..3]
                    .iter()
                    .map(|s| s.to_string())
                    .collect(),
            ),
        }
    }
}
