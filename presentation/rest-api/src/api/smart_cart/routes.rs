use std::sync::Arc;

use chrono::Utc;
use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::cart::metrics::ImpactSummary;
use business::domain::cart::model::CartItemId;
use business::domain::cart::state::CartStore;
use business::domain::cart::use_cases::auto_swap::{AutoSwapParams, AutoSwapUseCase};
use business::domain::cart::use_cases::cancel_donation::CancelDonationUseCase;
use business::domain::cart::use_cases::confirm_donation::ConfirmDonationUseCase;
use business::domain::cart::use_cases::load::LoadCartUseCase;
use business::domain::cart::use_cases::request_donation::{
    RequestDonationParams, RequestDonationUseCase,
};

use crate::api::error::ErrorResponse;
use crate::api::smart_cart::dto::{CartActionResponse, CartViewResponse, ImpactSummaryResponse};
use crate::api::tags::ApiTags;

pub struct SmartCartApi {
    store: Arc<CartStore>,
    load_use_case: Arc<dyn LoadCartUseCase>,
    auto_swap_use_case: Arc<dyn AutoSwapUseCase>,
    request_donation_use_case: Arc<dyn RequestDonationUseCase>,
    confirm_donation_use_case: Arc<dyn ConfirmDonationUseCase>,
    cancel_donation_use_case: Arc<dyn CancelDonationUseCase>,
}

impl SmartCartApi {
    pub fn new(
        store: Arc<CartStore>,
        load_use_case: Arc<dyn LoadCartUseCase>,
        auto_swap_use_case: Arc<dyn AutoSwapUseCase>,
        request_donation_use_case: Arc<dyn RequestDonationUseCase>,
        confirm_donation_use_case: Arc<dyn ConfirmDonationUseCase>,
        cancel_donation_use_case: Arc<dyn CancelDonationUseCase>,
    ) -> Self {
        Self {
            store,
            load_use_case,
            auto_swap_use_case,
            request_donation_use_case,
            confirm_donation_use_case,
            cancel_donation_use_case,
        }
    }
}

fn parse_item_id(raw: &str) -> Result<CartItemId, Json<ErrorResponse>> {
    raw.parse::<CartItemId>()
        .map_err(|_| ErrorResponse::validation("smart_cart.invalid_item_id"))
}

/// Smart cart API
///
/// Every action answers with the cart as it stands afterwards. Failures are
/// reported through the `notification` field, never as an HTTP error.
#[OpenApi]
impl SmartCartApi {
    /// Load the cart from the shopping backend
    ///
    /// Replaces the local cart with the backend's. On failure the previous
    /// items stay and a destructive notification is returned.
    #[oai(path = "/smart-cart/load", method = "post", tag = "ApiTags::SmartCart")]
    async fn load(&self) -> Json<CartActionResponse> {
        Json(self.load_use_case.execute().await.into())
    }

    /// Current cart with derived metrics
    #[oai(path = "/smart-cart", method = "get", tag = "ApiTags::SmartCart")]
    async fn get_cart(&self) -> Json<CartViewResponse> {
        let snapshot = self.store.snapshot();
        Json(CartViewResponse::from_snapshot(&snapshot, Utc::now()))
    }

    /// Swap an item for its greener alternative
    ///
    /// The item is shown as swapped immediately and rolled back if the
    /// backend rejects the swap.
    #[oai(
        path = "/smart-cart/items/:id/swap",
        method = "post",
        tag = "ApiTags::SmartCart"
    )]
    async fn auto_swap(&self, id: Path<String>) -> CartActionApiResponse {
        let cart_item_id = match parse_item_id(&id.0) {
            Ok(cart_item_id) => cart_item_id,
            Err(json) => return CartActionApiResponse::BadRequest(json),
        };

        let outcome = self
            .auto_swap_use_case
            .execute(AutoSwapParams { cart_item_id })
            .await;
        CartActionApiResponse::Ok(Json(outcome.into()))
    }

    /// Stage an item for donation
    ///
    /// Nothing is sent to the backend until the donation is confirmed.
    #[oai(
        path = "/smart-cart/items/:id/donation",
        method = "post",
        tag = "ApiTags::SmartCart"
    )]
    async fn request_donation(&self, id: Path<String>) -> CartActionApiResponse {
        let cart_item_id = match parse_item_id(&id.0) {
            Ok(cart_item_id) => cart_item_id,
            Err(json) => return CartActionApiResponse::BadRequest(json),
        };

        let outcome = self
            .request_donation_use_case
            .execute(RequestDonationParams { cart_item_id })
            .await;
        CartActionApiResponse::Ok(Json(outcome.into()))
    }

    /// Confirm the staged donation
    ///
    /// Removes the item from the backend cart and moves it to the donated list.
    #[oai(
        path = "/smart-cart/donation/confirm",
        method = "post",
        tag = "ApiTags::SmartCart"
    )]
    async fn confirm_donation(&self) -> Json<CartActionResponse> {
        Json(self.confirm_donation_use_case.execute().await.into())
    }

    /// Dismiss the staged donation
    #[oai(path = "/smart-cart/donation", method = "delete", tag = "ApiTags::SmartCart")]
    async fn cancel_donation(&self) -> Json<CartActionResponse> {
        Json(self.cancel_donation_use_case.execute().await.into())
    }

    /// Environmental impact of the session
    #[oai(path = "/smart-cart/impact", method = "get", tag = "ApiTags::SmartCart")]
    async fn impact(&self) -> Json<ImpactSummaryResponse> {
        let snapshot = self.store.snapshot();
        Json(ImpactSummary::compute(&snapshot).into())
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CartActionApiResponse {
    #[oai(status = 200)]
    Ok(Json<CartActionResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
}
