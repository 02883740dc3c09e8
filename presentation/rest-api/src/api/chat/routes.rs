use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::chat::model::QUICK_SUGGESTIONS;
use business::domain::chat::use_cases::clear_history::ClearChatHistoryUseCase;
use business::domain::chat::use_cases::load_history::LoadChatHistoryUseCase;
use business::domain::chat::use_cases::send_message::{
    SendChatMessageParams, SendChatMessageUseCase,
};

use crate::api::chat::dto::{ChatMessageResponse, QuickSuggestionsResponse, SendChatMessageRequest};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

pub struct ChatApi {
    load_history_use_case: Arc<dyn LoadChatHistoryUseCase>,
    send_message_use_case: Arc<dyn SendChatMessageUseCase>,
    clear_history_use_case: Arc<dyn ClearChatHistoryUseCase>,
}

impl ChatApi {
    pub fn new(
        load_history_use_case: Arc<dyn LoadChatHistoryUseCase>,
        send_message_use_case: Arc<dyn SendChatMessageUseCase>,
        clear_history_use_case: Arc<dyn ClearChatHistoryUseCase>,
    ) -> Self {
        Self {
            load_history_use_case,
            send_message_use_case,
            clear_history_use_case,
        }
    }

    async fn transcript(&self) -> Vec<ChatMessageResponse> {
        self.load_history_use_case
            .execute()
            .await
            .into_iter()
            .map(Into::into)
            .collect()
    }
}

/// Eco assistant chat API
#[OpenApi]
impl ChatApi {
    /// Chat transcript
    ///
    /// Returns the stored transcript, or the greeting when nothing is stored.
    #[oai(path = "/chat/messages", method = "get", tag = "ApiTags::Chat")]
    async fn get_messages(&self) -> Json<Vec<ChatMessageResponse>> {
        Json(self.transcript().await)
    }

    /// Send a message to the assistant
    ///
    /// Answers with the whole transcript after the turn. When the assistant
    /// cannot be reached the reply is a fallback message, not an error.
    #[oai(path = "/chat/messages", method = "post", tag = "ApiTags::Chat")]
    async fn send_message(&self, body: Json<SendChatMessageRequest>) -> SendChatMessageResponse {
        let params = SendChatMessageParams { text: body.0.text };

        match self.send_message_use_case.execute(params).await {
            Ok(messages) => {
                SendChatMessageResponse::Ok(Json(messages.into_iter().map(Into::into).collect()))
            }
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => SendChatMessageResponse::BadRequest(json),
                    _ => SendChatMessageResponse::InternalError(json),
                }
            }
        }
    }

    /// Clear the transcript
    ///
    /// Returns the fresh transcript, which holds only the greeting.
    #[oai(path = "/chat/messages", method = "delete", tag = "ApiTags::Chat")]
    async fn clear_messages(&self) -> ClearChatHistoryResponse {
        match self.clear_history_use_case.execute().await {
            Ok(()) => ClearChatHistoryResponse::Ok(Json(self.transcript().await)),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                ClearChatHistoryResponse::InternalError(json)
            }
        }
    }

    /// Quick suggestions
    #[oai(path = "/chat/suggestions", method = "get", tag = "ApiTags::Chat")]
    async fn suggestions(&self) -> Json<QuickSuggestionsResponse> {
        Json(QuickSuggestionsResponse {
            suggestions: QUICK_SUGGESTIONS.iter().map(|s| s.to_string()).collect(),
        })
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum SendChatMessageResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ChatMessageResponse>>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum ClearChatHistoryResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ChatMessageResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use mockall::mock;
    use poem::Route;
    use poem::http::StatusCode;
    use poem::test::TestClient;
    use poem_openapi::OpenApiService;
    use serde_json::json;

    use business::application::chat::clear_history::ClearChatHistoryUseCaseImpl;
    use business::application::chat::load_history::LoadChatHistoryUseCaseImpl;
    use business::application::chat::send_message::SendChatMessageUseCaseImpl;
    use business::domain::chat::services::AgentService;
    use business::domain::errors::GatewayError;
    use logger::TracingLogger;
    use persistence::chat_history::repository::ChatHistoryRepositoryFile;

    use super::*;

    mock! {
        pub Agent {}
        #[async_trait]
        impl AgentService for Agent {
            async fn reply(&self, message: &str) -> Result<String, GatewayError>;
        }
    }

    fn client(agent: MockAgent, dir: &std::path::Path) -> TestClient<Route> {
        let repository = Arc::new(ChatHistoryRepositoryFile::new(dir));
        let logger = Arc::new(TracingLogger);
        let api = ChatApi::new(
            Arc::new(LoadChatHistoryUseCaseImpl {
                repository: repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(SendChatMessageUseCaseImpl::new(
                Arc::new(agent),
                repository.clone(),
                logger.clone(),
            )),
            Arc::new(ClearChatHistoryUseCaseImpl { repository, logger }),
        );
        TestClient::new(Route::new().nest("/", OpenApiService::new(api, "EcoCart", "test")))
    }

    #[tokio::test]
    async fn should_greet_when_no_transcript_stored() {
        let dir = tempfile::tempdir().unwrap();
        let client = client(MockAgent::new(), dir.path());

        let response = client.get("/chat/messages").send().await;

        response.assert_status_is_ok();
        let json = response.json().await;
        let messages = json.value().array();
        messages.assert_len(1);
        messages.get(0).object().get("is_bot").assert_bool(true);
        messages.get(0).object().get("suggestions").array().assert_len(3);
    }

    #[tokio::test]
    async fn should_append_user_message_and_reply() {
        let dir = tempfile::tempdir().unwrap();
        let mut agent = MockAgent::new();
        agent
            .expect_reply()
            .returning(|_| Ok("Try the oat milk.".to_string()));
        let client = client(agent, dir.path());

        let response = client
            .post("/chat/messages")
            .body_json(&json!({ "text": "Any greener milk?" }))
            .send()
            .await;

        response.assert_status_is_ok();
        let json = response.json().await;
        let messages = json.value().array();
        messages.assert_len(3);
        messages.get(1).object().get("text").assert_string("Any greener milk?");
        messages.get(2).object().get("text").assert_string("Try the oat milk.");
    }

    #[tokio::test]
    async fn should_reject_blank_message() {
        let dir = tempfile::tempdir().unwrap();
        let client = client(MockAgent::new(), dir.path());

        let response = client
            .post("/chat/messages")
            .body_json(&json!({ "text": "   " }))
            .send()
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn should_reset_to_greeting_after_clear() {
        let dir = tempfile::tempdir().unwrap();
        let mut agent = MockAgent::new();
        agent
            .expect_reply()
            .returning(|_| Err(GatewayError::Transport));
        let client = client(agent, dir.path());
        client
            .post("/chat/messages")
            .body_json(&json!({ "text": "hello" }))
            .send()
            .await
            .assert_status_is_ok();

        let response = client.delete("/chat/messages").send().await;

        response.assert_status_is_ok();
        response.json().await.value().array().assert_len(1);
    }

    #[tokio::test]
    async fn should_list_six_quick_suggestions() {
        let dir = tempfile::tempdir().unwrap();
        let client = client(MockAgent::new(), dir.path());

        let response = client.get("/chat/suggestions").send().await;

        response.assert_status_is_ok();
        response
            .json()
            .await
            .value()
            .object()
            .get("suggestions")
            .array()
            .assert_len(6);
    }
}
