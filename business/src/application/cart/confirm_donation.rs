use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::gateway::CartGateway;
use crate::domain::cart::outcome::CartOutcome;
use crate::domain::cart::state::CartStore;
use crate::domain::cart::use_cases::confirm_donation::ConfirmDonationUseCase;
use crate::domain::logger::Logger;
use crate::domain::notification::Notification;

pub struct ConfirmDonationUseCaseImpl {
    pub gateway: Arc<dyn CartGateway>,
    pub store: Arc<CartStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ConfirmDonationUseCase for ConfirmDonationUseCaseImpl {
    async fn execute(&self) -> CartOutcome {
        let Some(candidate) = self.store.snapshot().pending_donation.clone() else {
            return CartOutcome::rejected(self.store.snapshot(), &CartError::NoPendingDonation);
        };
        let id = candidate.cart_item_id;
        self.logger.info(&format!("Donating cart item: {}", id));

        match self.gateway.delete_item(id).await {
            Ok(()) => {
                self.logger.info(&format!("Cart item {} donated", id));
                let snapshot = self.store.apply(|s| s.donation_confirmed(id));
                CartOutcome::notify(
                    snapshot,
                    Notification::success(
                        "Item donated!",
                        format!("{} will help reduce food waste.", candidate.product.name),
                    ),
                )
            }
            Err(err) => {
                self.logger
                    .error(&format!("Donation failed for cart item {}: {}", id, err));
                let snapshot = self.store.apply(|s| s.donation_settled(id));
                CartOutcome::notify(
                    snapshot,
                    Notification::failure(
                        "Donation failed",
                        "There was a problem removing the item from your cart.",
                    ),
                )
            }
        }
    }
}
