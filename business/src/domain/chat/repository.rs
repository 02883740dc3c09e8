use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::ChatMessage;

/// Local store for the chat transcript.
#[async_trait]
pub trait ChatHistoryRepository: Send + Sync {
    /// `Ok(None)` when nothing has been stored yet.
    async fn load(&self) -> Result<Option<Vec<ChatMessage>>, RepositoryError>;
    async fn save(&self, messages: &[ChatMessage]) -> Result<(), RepositoryError>;
    async fn clear(&self) -> Result<(), RepositoryError>;
}
