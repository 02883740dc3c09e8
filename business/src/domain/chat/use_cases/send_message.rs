use async_trait::async_trait;

use crate::domain::chat::errors::ChatError;
use crate::domain::chat::model::ChatMessage;

pub struct SendChatMessageParams {
    pub text: String,
}

#[async_trait]
pub trait SendChatMessageUseCase: Send + Sync {
    /// Returns the full transcript after the turn.
    async fn execute(&self, params: SendChatMessageParams) -> Result<Vec<ChatMessage>, ChatError>;
}
