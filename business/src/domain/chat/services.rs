use async_trait::async_trait;

use crate::domain::errors::GatewayError;

/// Service port for the remote conversational agent.
#[async_trait]
pub trait AgentService: Send + Sync {
    /// Sends one user turn and returns the agent's final message.
    async fn reply(&self, message: &str) -> Result<String, GatewayError>;
}
