use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::outcome::CartOutcome;
use crate::domain::cart::state::CartStore;
use crate::domain::cart::use_cases::request_donation::{
    RequestDonationParams, RequestDonationUseCase,
};
use crate::domain::logger::Logger;

pub struct RequestDonationUseCaseImpl {
    pub store: Arc<CartStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RequestDonationUseCase for RequestDonationUseCaseImpl {
    async fn execute(&self, params: RequestDonationParams) -> CartOutcome {
        let id = params.cart_item_id;
        match self
            .store
            .try_apply(|s| s.request_donation(id).map(|next| (next, ())))
        {
            Ok((snapshot, ())) => {
                self.logger
                    .debug(&format!("Donation staged for cart item {}", id));
                CartOutcome::silent(snapshot)
            }
            Err(err) => {
                self.logger
                    .warn(&format!("Cannot stage donation for cart item {}: {}", id, err));
                CartOutcome::rejected(self.store.snapshot(), &err)
            }
        }
    }
}
