use async_trait::async_trait;

use business::domain::chat::services::AgentService;
use business::domain::errors::GatewayError;

use crate::client::{BackendClient, ensure_success};
use crate::dto::{AgentRequestDto, AgentResponseDto};

pub struct AgentServiceHttp {
    client: BackendClient,
}

impl AgentServiceHttp {
    pub fn new(client: BackendClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AgentService for AgentServiceHttp {
    async fn reply(&self, message: &str) -> Result<String, GatewayError> {
        let response = ensure_success(
            self.client
                .client
                .post(self.client.agent_url())
                .json(&AgentRequestDto { message })
                .send()
                .await,
        )?;

        let body: AgentResponseDto = response
            .json()
            .await
            .map_err(|_| GatewayError::malformed_response())?;
        Ok(body.response.final_message)
    }
}
