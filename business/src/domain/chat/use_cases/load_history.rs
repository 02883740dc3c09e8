use async_trait::async_trait;

use crate::domain::chat::model::ChatMessage;

#[async_trait]
pub trait LoadChatHistoryUseCase: Send + Sync {
    async fn execute(&self) -> Vec<ChatMessage>;
}
