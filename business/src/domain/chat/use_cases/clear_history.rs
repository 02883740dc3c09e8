use async_trait::async_trait;

use crate::domain::chat::errors::ChatError;

#[async_trait]
pub trait ClearChatHistoryUseCase: Send + Sync {
    async fn execute(&self) -> Result<(), ChatError>;
}
