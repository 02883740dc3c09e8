use async_trait::async_trait;

use crate::domain::errors::GatewayError;

use super::model::{CartItemId, CartLineItem};

/// Port to the remote shopping backend, the source of truth for the cart.
#[async_trait]
pub trait CartGateway: Send + Sync {
    async fn fetch_cart(&self) -> Result<Vec<CartLineItem>, GatewayError>;
    async fn delete_item(&self, cart_item_id: CartItemId) -> Result<(), GatewayError>;
    async fn swap_item(
        &self,
        cart_item_id: CartItemId,
        alternative: &str,
    ) -> Result<CartLineItem, GatewayError>;
}
