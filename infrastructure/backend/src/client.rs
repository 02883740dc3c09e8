use std::time::Duration;

use reqwest::{Client, Response};

use business::domain::cart::model::CartItemId;
use business::domain::errors::GatewayError;

/// Shared HTTP client for the shopping backend.
pub struct BackendClient {
    pub client: Client,
    pub base_url: String,
}

impl BackendClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_default();

        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Returns the cart collection URL.
    pub fn cart_url(&self) -> String {
        format!("{}/cart", self.base_url)
    }

    pub fn cart_item_url(&self, cart_item_id: CartItemId) -> String {
        format!("{}/cart/{}", self.base_url, cart_item_id)
    }

    pub fn swap_url(&self) -> String {
        format!("{}/cart/swap", self.base_url)
    }

    pub fn agent_url(&self) -> String {
        format!("{}/agent", self.base_url)
    }
}

/// Maps a sent request to a response with a 2xx status.
pub fn ensure_success(
    result: Result<Response, reqwest::Error>,
) -> Result<Response, GatewayError> {
    let response = result.map_err(|_| GatewayError::Transport)?;
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(GatewayError::UnexpectedStatus(status.as_u16()))
    }
}
