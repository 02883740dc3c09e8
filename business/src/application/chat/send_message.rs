use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;

use crate::domain::chat::errors::ChatError;
use crate::domain::chat::model::ChatMessage;
use crate::domain::chat::repository::ChatHistoryRepository;
use crate::domain::chat::services::AgentService;
use crate::domain::chat::use_cases::send_message::{
    SendChatMessageParams, SendChatMessageUseCase,
};
use crate::domain::logger::Logger;

pub struct SendChatMessageUseCaseImpl {
    agent: Arc<dyn AgentService>,
    repository: Arc<dyn ChatHistoryRepository>,
    logger: Arc<dyn Logger>,
    // One turn at a time, so two turns cannot overwrite each other's transcript.
    turn: Mutex<()>,
}

impl SendChatMessageUseCaseImpl {
    pub fn new(
        agent: Arc<dyn AgentService>,
        repository: Arc<dyn ChatHistoryRepository>,
        logger: Arc<dyn Logger>,
    ) -> Self {
        Self {
            agent,
            repository,
            logger,
            turn: Mutex::new(()),
        }
    }

    async fn current_transcript(&self) -> Vec<ChatMessage> {
        match self.repository.load().await {
            Ok(Some(messages)) => messages,
            Ok(None) => vec![ChatMessage::greeting(Utc::now())],
            Err(err) => {
                self.logger
                    .warn(&format!("Ignoring unreadable chat history: {}", err));
                vec![ChatMessage::greeting(Utc::now())]
            }
        }
    }

    async fn persist(&self, messages: &[ChatMessage]) {
        if let Err(err) = self.repository.save(messages).await {
            self.logger
                .warn(&format!("Failed to persist chat messages: {}", err));
        }
    }
}

#[async_trait]
impl SendChatMessageUseCase for SendChatMessageUseCaseImpl {
    async fn execute(&self, params: SendChatMessageParams) -> Result<Vec<ChatMessage>, ChatError> {
        let user_message = ChatMessage::from_user(&params.text, Utc::now())?;
        let _turn = self.turn.lock().await;

        let mut transcript = self.current_transcript().await;
        transcript.push(user_message);
        self.persist(&transcript).await;

        let reply = match self.agent.reply(&params.text).await {
            Ok(text) => ChatMessage::from_bot(text, Utc::now()),
            Err(err) => {
                self.logger
                    .error(&format!("Agent request failed: {}", err));
                ChatMessage::unreachable(Utc::now())
            }
        };
        transcript.push(reply);
        self.persist(&transcript).await;

        Ok(transcript)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::mocks::{MockAgent, MockHistoryRepo, mock_logger};
    use crate::domain::errors::{GatewayError, RepositoryError};

    fn repo_with_history(history: Option<Vec<ChatMessage>>) -> MockHistoryRepo {
        let mut repo = MockHistoryRepo::new();
        repo.expect_load().returning(move || Ok(history.clone()));
        repo.expect_save().returning(|_| Ok(()));
        repo
    }

    #[tokio::test]
    async fn should_append_user_message_and_agent_reply() {
        let mut agent = MockAgent::new();
        agent
            .expect_reply()
            .withf(|message| message == "How can I improve my green score?")
            .times(1)
            .returning(|_| Ok("Swap to local produce.".to_string()));
        let use_case = SendChatMessageUseCaseImpl::new(
            Arc::new(agent),
            Arc::new(repo_with_history(Some(vec![]))),
            mock_logger(),
        );

        let transcript = use_case
            .execute(SendChatMessageParams {
                text: "How can I improve my green score?".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(transcript.len(), 2);
        assert!(!transcript[0].is_bot);
        assert!(transcript[1].is_bot);
        assert_eq!(transcript[1].text, "Swap to local produce.");
    }

    #[tokio::test]
    async fn should_append_fallback_when_agent_unreachable() {
        let mut agent = MockAgent::new();
        agent
            .expect_reply()
            .returning(|_| Err(GatewayError::Transport));
        let use_case = SendChatMessageUseCaseImpl::new(
            Arc::new(agent),
            Arc::new(repo_with_history(None)),
            mock_logger(),
        );

        let transcript = use_case
            .execute(SendChatMessageParams {
                text: "hello".to_string(),
            })
            .await
            .unwrap();

        // greeting, user message, fallback
        assert_eq!(transcript.len(), 3);
        assert_eq!(transcript[2].text, "⚠️ Oops! I couldn't reach the server.");
    }

    #[tokio::test]
    async fn should_reject_blank_message_without_calling_agent() {
        let mut agent = MockAgent::new();
        agent.expect_reply().never();
        let mut repo = MockHistoryRepo::new();
        repo.expect_save().never();
        let use_case =
            SendChatMessageUseCaseImpl::new(Arc::new(agent), Arc::new(repo), mock_logger());

        let result = use_case
            .execute(SendChatMessageParams {
                text: "  ".to_string(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), ChatError::EmptyMessage));
    }

    #[tokio::test]
    async fn should_reply_even_when_transcript_cannot_be_saved() {
        let mut agent = MockAgent::new();
        agent.expect_reply().returning(|_| Ok("ok".to_string()));
        let mut repo = MockHistoryRepo::new();
        repo.expect_load().returning(|| Ok(Some(vec![])));
        repo.expect_save()
            .returning(|_| Err(RepositoryError::Persistence));
        let use_case =
            SendChatMessageUseCaseImpl::new(Arc::new(agent), Arc::new(repo), mock_logger());

        let transcript = use_case
            .execute(SendChatMessageParams {
                text: "hi".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(transcript.len(), 2);
    }
}
