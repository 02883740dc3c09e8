use async_trait::async_trait;

use crate::domain::cart::model::CartItemId;
use crate::domain::cart::outcome::CartOutcome;

pub struct AutoSwapParams {
    pub cart_item_id: CartItemId,
}

#[async_trait]
pub trait AutoSwapUseCase: Send + Sync {
    async fn execute(&self, params: AutoSwapParams) -> CartOutcome;
}
