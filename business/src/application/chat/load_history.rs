use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::chat::model::ChatMessage;
use crate::domain::chat::repository::ChatHistoryRepository;
use crate::domain::chat::use_cases::load_history::LoadChatHistoryUseCase;
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;

pub struct LoadChatHistoryUseCaseImpl {
    pub repository: Arc<dyn ChatHistoryRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl LoadChatHistoryUseCase for LoadChatHistoryUseCaseImpl {
    async fn execute(&self) -> Vec<ChatMessage> {
        match self.repository.load().await {
            Ok(Some(messages)) => {
                self.logger
                    .debug(&format!("Restored {} chat messages", messages.len()));
                messages
            }
            Ok(None) => vec![ChatMessage::greeting(Utc::now())],
            Err(RepositoryError::Corrupted) => {
                self.logger
                    .error("Failed to parse stored chat messages, discarding them");
                if let Err(err) = self.repository.clear().await {
                    self.logger
                        .warn(&format!("Could not discard stored chat messages: {}", err));
                }
                vec![ChatMessage::greeting(Utc::now())]
            }
            Err(err) => {
                self.logger
                    .warn(&format!("Could not read stored chat messages: {}", err));
                vec![ChatMessage::greeting(Utc::now())]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::mocks::{MockHistoryRepo, mock_logger};

    #[tokio::test]
    async fn should_return_stored_transcript() {
        let mut repo = MockHistoryRepo::new();
        repo.expect_load().returning(|| {
            Ok(Some(vec![
                ChatMessage::from_user("hello", Utc::now()).unwrap(),
                ChatMessage::from_bot("hi".to_string(), Utc::now()),
            ]))
        });
        let use_case = LoadChatHistoryUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let messages = use_case.execute().await;

        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].text, "hello");
    }

    #[tokio::test]
    async fn should_greet_when_nothing_stored() {
        let mut repo = MockHistoryRepo::new();
        repo.expect_load().returning(|| Ok(None));
        let use_case = LoadChatHistoryUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let messages = use_case.execute().await;

        assert_eq!(messages.len(), 1);
        assert!(messages[0].is_bot);
        assert!(messages[0].suggestions.is_some());
    }

    #[tokio::test]
    async fn should_discard_corrupted_transcript_and_greet() {
        let mut repo = MockHistoryRepo::new();
        repo.expect_load()
            .returning(|| Err(RepositoryError::Corrupted));
        repo.expect_clear().times(1).returning(|| Ok(()));
        let use_case = LoadChatHistoryUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let messages = use_case.execute().await;

        assert_eq!(messages.len(), 1);
        assert!(messages[0].is_bot);
    }

    #[tokio::test]
    async fn should_keep_stored_transcript_when_read_fails() {
        let mut repo = MockHistoryRepo::new();
        repo.expect_load()
            .returning(|| Err(RepositoryError::Persistence));
        repo.expect_clear().never();
        let use_case = LoadChatHistoryUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let messages = use_case.execute().await;

        assert_eq!(messages.len(), 1);
        assert!(messages[0].is_bot);
    }
}
