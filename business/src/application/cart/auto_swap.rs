use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::gateway::CartGateway;
use crate::domain::cart::outcome::CartOutcome;
use crate::domain::cart::state::CartStore;
use crate::domain::cart::use_cases::auto_swap::{AutoSwapParams, AutoSwapUseCase};
use crate::domain::errors::GatewayError;
use crate::domain::logger::Logger;
use crate::domain::notification::Notification;

pub struct AutoSwapUseCaseImpl {
    pub gateway: Arc<dyn CartGateway>,
    pub store: Arc<CartStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AutoSwapUseCase for AutoSwapUseCaseImpl {
    async fn execute(&self, params: AutoSwapParams) -> CartOutcome {
        let id = params.cart_item_id;
        self.logger.info(&format!("Auto-swapping cart item: {}", id));

        let ticket = match self.store.try_apply(|s| s.begin_swap(id)) {
            Ok((_, ticket)) => ticket,
            Err(err) => {
                self.logger
                    .warn(&format!("Swap rejected for cart item {}: {}", id, err));
                return CartOutcome::rejected(self.store.snapshot(), &err);
            }
        };
        let alternative = ticket.alternative.name.clone();

        let result = self
            .gateway
            .swap_item(id, &alternative)
            .await
            .and_then(|updated| {
                if updated.cart_item_id == id {
                    Ok(updated)
                } else {
                    Err(GatewayError::MalformedResponse)
                }
            });

        match result {
            Ok(updated) => {
                self.logger.info(&format!(
                    "Cart item {} swapped for {}",
                    id, alternative
                ));
                let snapshot = self.store.apply(|s| s.confirm_swap(ticket, updated));
                CartOutcome::notify(
                    snapshot,
                    Notification::success(
                        "Item optimized!",
                        format!("{} has replaced the original item.", alternative),
                    ),
                )
            }
            Err(err) => {
                self.logger
                    .error(&format!("Swap failed for cart item {}: {}", id, err));
                let snapshot = self.store.apply(|s| s.revert_swap(ticket));
                CartOutcome::notify(
                    snapshot,
                    Notification::failure(
                        "Auto-swap failed",
                        "We couldn't swap this item. Please try again later.",
                    ),
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::mocks::{MockGateway, mock_logger};
    use crate::domain::cart::model::fixtures::*;
    use crate::domain::cart::model::CartLineItem;

    fn store_with(items: Vec<CartLineItem>) -> Arc<CartStore> {
        let store = Arc::new(CartStore::new());
        store.apply(|s| s.loading().loaded(items));
        store
    }

    fn use_case(gateway: MockGateway, store: Arc<CartStore>) -> AutoSwapUseCaseImpl {
        AutoSwapUseCaseImpl {
            gateway: Arc::new(gateway),
            store,
            logger: mock_logger(),
        }
    }

    #[tokio::test]
    async fn should_install_backend_item_when_swap_succeeds() {
        let store = store_with(vec![
            line(1, 100.0, 1),
            swappable_line(2, green_alternative("EcoBrand", 90)),
        ]);
        let mut gateway = MockGateway::new();
        gateway
            .expect_swap_item()
            .withf(|id, alternative| *id == 2 && alternative == "EcoBrand")
            .times(1)
            .returning(|_, _| {
                let mut updated = line(2, 120.0, 1);
                updated.product.name = "EcoBrand".to_string();
                updated.green_score = Some(90);
                Ok(updated)
            });

        let outcome = use_case(gateway, store.clone())
            .execute(AutoSwapParams { cart_item_id: 2 })
            .await;

        let item = outcome.snapshot.item(2).unwrap();
        assert!(item.swapped);
        assert_eq!(item.green_score, Some(90));
        assert_eq!(item.product.name, "EcoBrand");
        assert_eq!(outcome.snapshot.items.len(), 2);
        let untouched = outcome.snapshot.item(1).unwrap();
        assert!(!untouched.swapped);
        assert_eq!(untouched.product.price, 100.0);
        assert_eq!(store.snapshot().items, outcome.snapshot.items);
        assert!(!outcome.notification.unwrap().is_failure());
    }

    #[tokio::test]
    async fn should_roll_back_flag_when_swap_fails() {
        let original = vec![
            line(1, 100.0, 1),
            swappable_line(2, green_alternative("EcoBrand", 90)),
        ];
        let store = store_with(original.clone());
        let mut gateway = MockGateway::new();
        gateway
            .expect_swap_item()
            .returning(|_, _| Err(GatewayError::UnexpectedStatus(404)));

        let outcome = use_case(gateway, store.clone())
            .execute(AutoSwapParams { cart_item_id: 2 })
            .await;

        assert_eq!(outcome.snapshot.items, original);
        assert!(outcome.snapshot.swaps_in_flight.is_empty());
        let notification = outcome.notification.unwrap();
        assert!(notification.is_failure());
        assert_eq!(notification.title, "Auto-swap failed");
    }

    #[tokio::test]
    async fn should_roll_back_when_backend_returns_other_item() {
        let store = store_with(vec![swappable_line(2, green_alternative("EcoBrand", 90))]);
        let mut gateway = MockGateway::new();
        gateway
            .expect_swap_item()
            .returning(|_, _| Ok(line(7, 1.0, 1)));

        let outcome = use_case(gateway, store)
            .execute(AutoSwapParams { cart_item_id: 2 })
            .await;

        assert!(!outcome.snapshot.item(2).unwrap().swapped);
        assert!(outcome.snapshot.item(7).is_none());
    }

    #[tokio::test]
    async fn should_reject_without_network_call_when_no_green_alternative() {
        let store = store_with(vec![line(1, 100.0, 1)]);
        let mut gateway = MockGateway::new();
        gateway.expect_swap_item().never();

        let outcome = use_case(gateway, store)
            .execute(AutoSwapParams { cart_item_id: 1 })
            .await;

        assert!(!outcome.snapshot.item(1).unwrap().swapped);
        assert_eq!(
            outcome.notification.unwrap().title,
            "No alternative available"
        );
    }

    #[tokio::test]
    async fn should_reject_swap_of_already_swapped_item() {
        let mut item = swappable_line(3, green_alternative("EcoBrand", 90));
        item.swapped = true;
        let store = store_with(vec![item]);
        let mut gateway = MockGateway::new();
        gateway.expect_swap_item().never();

        let outcome = use_case(gateway, store)
            .execute(AutoSwapParams { cart_item_id: 3 })
            .await;

        assert_eq!(outcome.notification.unwrap().title, "Already optimized");
    }
}
