use crate::domain::errors::GatewayError;
use crate::domain::notification::Notification;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CartError {
    #[error("cart.item_not_found")]
    ItemNotFound,
    #[error("cart.no_green_alternative")]
    NoGreenAlternative,
    #[error("cart.already_swapped")]
    AlreadySwapped,
    #[error("cart.swap_in_flight")]
    SwapInFlight,
    #[error("cart.no_pending_donation")]
    NoPendingDonation,
    #[error("cart.invalid_quantity")]
    InvalidQuantity,
    #[error("cart.score_out_of_range")]
    ScoreOutOfRange,
    #[error("cart.negative_price")]
    NegativePrice,
    #[error("cart.name_empty")]
    NameEmpty,
    #[error("gateway.failure")]
    Gateway(#[from] GatewayError),
}

impl CartError {
    /// Destructive notification shown when this error ends a cart action.
    pub fn notification(&self) -> Notification {
        match self {
            CartError::ItemNotFound => Notification::failure(
                "Item not found",
                "This item is no longer in your cart.",
            ),
            CartError::NoGreenAlternative => Notification::failure(
                "No alternative available",
                "This item does not have a greener option yet.",
            ),
            CartError::AlreadySwapped => Notification::failure(
                "Already optimized",
                "This item has already been swapped.",
            ),
            CartError::SwapInFlight => Notification::failure(
                "Swap in progress",
                "Please wait for the current swap to finish.",
            ),
            CartError::NoPendingDonation => Notification::failure(
                "Nothing to donate",
                "Choose an item to donate first.",
            ),
            CartError::InvalidQuantity
            | CartError::ScoreOutOfRange
            | CartError::NegativePrice
            | CartError::NameEmpty
            | CartError::Gateway(_) => Notification::failure(
                "Something went wrong",
                "The shopping service could not complete the request.",
            ),
        }
    }
}
