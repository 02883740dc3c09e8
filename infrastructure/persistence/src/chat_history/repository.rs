use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;

use business::domain::chat::model::ChatMessage;
use business::domain::chat::repository::ChatHistoryRepository;
use business::domain::errors::RepositoryError;

use super::entity::ChatMessageEntity;

const STORAGE_KEY: &str = "eco_chat_messages";

/// Keeps the transcript as a JSON array in a single file.
pub struct ChatHistoryRepositoryFile {
    path: PathBuf,
}

impl ChatHistoryRepositoryFile {
    pub fn new(directory: &Path) -> Self {
        Self {
            path: directory.join(format!("{STORAGE_KEY}.json")),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl ChatHistoryRepository for ChatHistoryRepositoryFile {
    async fn load(&self) -> Result<Option<Vec<ChatMessage>>, RepositoryError> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(_) => return Err(RepositoryError::persistence()),
        };

        let entities: Vec<ChatMessageEntity> =
            serde_json::from_str(&raw).map_err(|_| RepositoryError::corrupted())?;

        Ok(Some(entities.into_iter().map(|e| e.into_domain()).collect()))
    }

    async fn save(&self, messages: &[ChatMessage]) -> Result<(), RepositoryError> {
        let entities: Vec<ChatMessageEntity> =
            messages.iter().map(ChatMessageEntity::from_domain).collect();
        let body =
            serde_json::to_string(&entities).map_err(|_| RepositoryError::persistence())?;

        // Staged beside the target and renamed; readers never see a partial file.
        let staging = self.path.with_extension("json.tmp");
        tokio::fs::write(&staging, body)
            .await
            .map_err(|_| RepositoryError::persistence())?;
        tokio::fs::rename(&staging, &self.path)
            .await
            .map_err(|_| RepositoryError::persistence())?;

        Ok(())
    }

    async fn clear(&self) -> Result<(), RepositoryError> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(_) => Err(RepositoryError::persistence()),
        }
    }
}
