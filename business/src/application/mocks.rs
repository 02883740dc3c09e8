use std::sync::Arc;

use async_trait::async_trait;
use mockall::mock;

use crate::domain::cart::gateway::CartGateway;
use crate::domain::cart::model::{CartItemId, CartLineItem};
use crate::domain::chat::model::ChatMessage;
use crate::domain::chat::repository::ChatHistoryRepository;
use crate::domain::chat::services::AgentService;
use crate::domain::errors::{GatewayError, RepositoryError};
use crate::domain::logger::Logger;

mock! {
    pub Gateway {}

    #[async_trait]
    impl CartGateway for Gateway {
        async fn fetch_cart(&self) -> Result<Vec<CartLineItem>, GatewayError>;
        async fn delete_item(&self, cart_item_id: CartItemId) -> Result<(), GatewayError>;
        async fn swap_item(&self, cart_item_id: CartItemId, alternative: &str) -> Result<CartLineItem, GatewayError>;
    }
}

mock! {
    pub Agent {}

    #[async_trait]
    impl AgentService for Agent {
        async fn reply(&self, message: &str) -> Result<String, GatewayError>;
    }
}

mock! {
    pub HistoryRepo {}

    #[async_trait]
    impl ChatHistoryRepository for HistoryRepo {
        async fn load(&self) -> Result<Option<Vec<ChatMessage>>, RepositoryError>;
        async fn save(&self, messages: &[ChatMessage]) -> Result<(), RepositoryError>;
        async fn clear(&self) -> Result<(), RepositoryError>;
    }
}

mock! {
    pub Log {}

    impl Logger for Log {
        fn info(&self, message: &str);
        fn warn(&self, message: &str);
        fn error(&self, message: &str);
        fn debug(&self, message: &str);
    }
}

pub fn mock_logger() -> Arc<dyn Logger> {
    let mut logger = MockLog::new();
    logger.expect_info().returning(|_| ());
    logger.expect_warn().returning(|_| ());
    logger.expect_error().returning(|_| ());
    logger.expect_debug().returning(|_| ());
    Arc::new(logger)
}
