use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::outcome::CartOutcome;
use crate::domain::cart::state::CartStore;
use crate::domain::cart::use_cases::cancel_donation::CancelDonationUseCase;
use crate::domain::logger::Logger;

pub struct CancelDonationUseCaseImpl {
    pub store: Arc<CartStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CancelDonationUseCase for CancelDonationUseCaseImpl {
    async fn execute(&self) -> CartOutcome {
        self.logger.debug("Donation prompt cancelled");
        CartOutcome::silent(self.store.apply(|s| s.cancel_donation()))
    }
}
