use async_trait::async_trait;
use chrono::Utc;

use business::domain::cart::gateway::CartGateway;
use business::domain::cart::model::{CartItemId, CartLineItem};
use business::domain::errors::GatewayError;

use crate::client::{BackendClient, ensure_success};
use crate::dto::{CartLineItemDto, SwapRequestDto};

pub struct CartGatewayHttp {
    client: BackendClient,
}

impl CartGatewayHttp {
    pub fn new(client: BackendClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CartGateway for CartGatewayHttp {
    async fn fetch_cart(&self) -> Result<Vec<CartLineItem>, GatewayError> {
        let response = ensure_success(
            self.client
                .client
                .get(self.client.cart_url())
                .send()
                .await,
        )?;

        let lines: Vec<CartLineItemDto> = response
            .json()
            .await
            .map_err(|_| GatewayError::malformed_response())?;

        let now = Utc::now();
        lines.into_iter().map(|line| line.into_domain(now)).collect()
    }

    async fn delete_item(&self, cart_item_id: CartItemId) -> Result<(), GatewayError> {
        ensure_success(
            self.client
                .client
                .delete(self.client.cart_item_url(cart_item_id))
                .send()
                .await,
        )?;
        Ok(())
    }

    async fn swap_item(
        &self,
        cart_item_id: CartItemId,
        alternative: &str,
    ) -> Result<CartLineItem, GatewayError> {
        let body = SwapRequestDto {
            cart_item_id,
            alternative,
        };
        let response = ensure_success(
            self.client
                .client
                .post(self.client.swap_url())
                .json(&body)
                .send()
                .await,
        )?;

        let line: CartLineItemDto = response
            .json()
            .await
            .map_err(|_| GatewayError::malformed_response())?;
        line.into_domain(Utc::now())
    }
}
