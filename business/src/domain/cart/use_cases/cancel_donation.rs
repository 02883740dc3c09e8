use async_trait::async_trait;

use crate::domain::cart::outcome::CartOutcome;

#[async_trait]
pub trait CancelDonationUseCase: Send + Sync {
    async fn execute(&self) -> CartOutcome;
}
