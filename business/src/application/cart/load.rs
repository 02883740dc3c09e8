use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::gateway::CartGateway;
use crate::domain::cart::outcome::CartOutcome;
use crate::domain::cart::state::CartStore;
use crate::domain::cart::use_cases::load::LoadCartUseCase;
use crate::domain::logger::Logger;
use crate::domain::notification::Notification;

pub struct LoadCartUseCaseImpl {
    pub gateway: Arc<dyn CartGateway>,
    pub store: Arc<CartStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl LoadCartUseCase for LoadCartUseCaseImpl {
    async fn execute(&self) -> CartOutcome {
        self.logger.info("Fetching cart");
        self.store.apply(|s| s.loading());

        match self.gateway.fetch_cart().await {
            Ok(items) => {
                self.logger.info(&format!("Cart loaded with {} items", items.len()));
                CartOutcome::silent(self.store.apply(|s| s.loaded(items)))
            }
            Err(err) => {
                self.logger.error(&format!("Failed to fetch cart: {}", err));
                let snapshot = self.store.apply(|s| s.load_failed());
                CartOutcome::notify(
                    snapshot,
                    Notification::failure("Failed to fetch cart", err.to_string()),
                )
            }
        }
    }
}
