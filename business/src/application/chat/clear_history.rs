use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::chat::errors::ChatError;
use crate::domain::chat::repository::ChatHistoryRepository;
use crate::domain::chat::use_cases::clear_history::ClearChatHistoryUseCase;
use crate::domain::logger::Logger;

pub struct ClearChatHistoryUseCaseImpl {
    pub repository: Arc<dyn ChatHistoryRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ClearChatHistoryUseCase for ClearChatHistoryUseCaseImpl {
    async fn execute(&self) -> Result<(), ChatError> {
        self.logger.info("Clearing chat history");
        self.repository.clear().await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::mocks::{MockHistoryRepo, mock_logger};
    use crate::domain::errors::RepositoryError;

    #[tokio::test]
    async fn should_clear_stored_transcript() {
        let mut repo = MockHistoryRepo::new();
        repo.expect_clear().times(1).returning(|| Ok(()));
        let use_case = ClearChatHistoryUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        assert!(use_case.execute().await.is_ok());
    }

    #[tokio::test]
    async fn should_surface_repository_failure() {
        let mut repo = MockHistoryRepo::new();
        repo.expect_clear()
            .returning(|| Err(RepositoryError::Persistence));
        let use_case = ClearChatHistoryUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let result = use_case.execute().await;

        assert!(matches!(result.unwrap_err(), ChatError::Repository(_)));
    }
}
