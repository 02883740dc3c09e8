use chrono::{DateTime, Utc};

use super::errors::CartError;

/// Identifier assigned by the backend to a cart line.
pub type CartItemId = i64;

const MAX_SCORE: u8 = 100;

/// Cheaper product suggested in place of the current one.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceAlternative {
    pub name: String,
    pub price: f64,
    pub savings: f64,
    pub image: Option<String>,
}

/// Product with a longer shelf life.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpiryAlternative {
    pub name: String,
    pub expiry_date: Option<DateTime<Utc>>,
    pub extra_days: i64,
    pub image: Option<String>,
}

/// Greener product; the only suggestion that can be auto-swapped.
#[derive(Debug, Clone, PartialEq)]
pub struct GreenAlternative {
    pub name: String,
    pub green_score: u8,
    pub improvement: i32,
    pub reason: String,
    pub image: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Alternatives {
    pub price: Option<PriceAlternative>,
    pub expiry: Option<ExpiryAlternative>,
    pub green: Option<GreenAlternative>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: Option<i64>,
    pub name: String,
    pub price: f64,
    pub image: Option<String>,
    pub expiry_date: DateTime<Utc>,
    pub green_score: Option<u8>,
    pub packaging_score: Option<u8>,
    pub local_sourcing_score: Option<u8>,
    pub carbon_footprint_score: Option<u8>,
    pub alternative_price_diff: Option<f64>,
    pub alternatives: Option<Alternatives>,
}

impl Product {
    /// Validates a product received from the backend.
    pub fn validate(&self) -> Result<(), CartError> {
        if self.name.trim().is_empty() {
            return Err(CartError::NameEmpty);
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(CartError::NegativePrice);
        }
        let scores = [
            self.green_score,
            self.packaging_score,
            self.local_sourcing_score,
            self.carbon_footprint_score,
        ];
        if scores.iter().flatten().any(|score| *score > MAX_SCORE) {
            return Err(CartError::ScoreOutOfRange);
        }
        if let Some(green) = self.green_alternative()
            && green.green_score > MAX_SCORE
        {
            return Err(CartError::ScoreOutOfRange);
        }
        Ok(())
    }

    pub fn green_alternative(&self) -> Option<&GreenAlternative> {
        self.alternatives.as_ref().and_then(|alt| alt.green.as_ref())
    }
}

/// One product instance in the cart.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLineItem {
    pub cart_item_id: CartItemId,
    pub quantity: u32,
    pub swapped: bool,
    pub green_score: Option<u8>,
    pub product: Product,
}

pub struct NewCartLineItemProps {
    pub cart_item_id: CartItemId,
    pub quantity: u32,
    pub swapped: bool,
    pub green_score: Option<u8>,
    pub product: Product,
}

impl CartLineItem {
    pub fn new(props: NewCartLineItemProps) -> Result<Self, CartError> {
        if props.quantity == 0 {
            return Err(CartError::InvalidQuantity);
        }
        if props.green_score.is_some_and(|score| score > MAX_SCORE) {
            return Err(CartError::ScoreOutOfRange);
        }
        props.product.validate()?;

        Ok(Self {
            cart_item_id: props.cart_item_id,
            quantity: props.quantity,
            swapped: props.swapped,
            green_score: props.green_score,
            product: props.product,
        })
    }

    /// Line-level score when the backend sent one, otherwise the product's.
    pub fn effective_green_score(&self) -> u8 {
        self.green_score
            .or(self.product.green_score)
            .unwrap_or_default()
    }

    pub fn line_cost(&self) -> f64 {
        self.product.price * f64::from(self.quantity)
    }

    pub fn can_auto_swap(&self) -> bool {
        !self.swapped && self.product.green_alternative().is_some()
    }
}
