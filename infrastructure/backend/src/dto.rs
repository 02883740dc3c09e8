use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use business::domain::cart::model::{
    Alternatives, CartItemId, CartLineItem, ExpiryAlternative, GreenAlternative,
    NewCartLineItemProps, PriceAlternative, Product,
};
use business::domain::errors::GatewayError;

/// Accepts RFC 3339 timestamps and naive ISO dates, the latter read as UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

#[derive(Debug, Deserialize)]
pub struct PriceAlternativeDto {
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub savings: f64,
    #[serde(default)]
    pub image: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ExpiryAlternativeDto {
    pub name: String,
    #[serde(default, rename = "expiryDate")]
    pub expiry_date: Option<String>,
    #[serde(default)]
    pub expiry_days: Option<i64>,
    #[serde(default, rename = "extraDays")]
    pub extra_days: i64,
    #[serde(default)]
    pub image: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct GreenAlternativeDto {
    pub name: String,
    #[serde(rename = "greenScore")]
    pub green_score: u8,
    #[serde(default)]
    pub improvement: i32,
    #[serde(default)]
    pub reason: String,
    #[serde(default)]
    pub image: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AlternativesDto {
    #[serde(default)]
    pub price: Option<PriceAlternativeDto>,
    #[serde(default)]
    pub expiry: Option<ExpiryAlternativeDto>,
    #[serde(default)]
    pub green: Option<GreenAlternativeDto>,
}

#[derive(Debug, Deserialize)]
pub struct ProductDto {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub image: Option<String>,
    pub expiry_date: String,
    #[serde(default)]
    pub green_score: Option<u8>,
    #[serde(default)]
    pub packaging_score: Option<u8>,
    #[serde(default)]
    pub local_sourcing_score: Option<u8>,
    #[serde(default)]
    pub carbon_footprint_score: Option<u8>,
    #[serde(default)]
    pub alternative_price_diff: Option<f64>,
    #[serde(default)]
    pub alternatives: Option<AlternativesDto>,
}

/// Cart line as served by `GET /cart` and `POST /cart/swap`.
#[derive(Debug, Deserialize)]
pub struct CartLineItemDto {
    pub cart_item_id: CartItemId,
    pub quantity: u32,
    #[serde(default)]
    pub swapped: bool,
    #[serde(default, rename = "greenScore")]
    pub green_score: Option<u8>,
    pub product: ProductDto,
}

impl ExpiryAlternativeDto {
    fn into_domain(self, now: DateTime<Utc>) -> ExpiryAlternative {
        let expiry_date = match (self.expiry_date, self.expiry_days) {
            (Some(raw), _) => parse_timestamp(&raw),
            (None, Some(days)) => Some(now + Duration::days(days)),
            (None, None) => None,
        };
        ExpiryAlternative {
            name: self.name,
            expiry_date,
            extra_days: self.extra_days,
            image: self.image,
        }
    }
}

impl AlternativesDto {
    fn into_domain(self, now: DateTime<Utc>) -> Alternatives {
        Alternatives {
            price: self.price.map(|alt| PriceAlternative {
                name: alt.name,
                price: alt.price,
                savings: alt.savings,
                image: alt.image,
            }),
            expiry: self.expiry.map(|alt| alt.into_domain(now)),
            green: self.green.map(|alt| GreenAlternative {
                name: alt.name,
                green_score: alt.green_score,
                improvement: alt.improvement,
                reason: alt.reason,
                image: alt.image,
            }),
        }
    }
}

impl ProductDto {
    fn into_domain(self, now: DateTime<Utc>) -> Result<Product, GatewayError> {
        let expiry_date =
            parse_timestamp(&self.expiry_date).ok_or(GatewayError::MalformedResponse)?;
        Ok(Product {
            id: self.id,
            name: self.name,
            price: self.price,
            image: self.image,
            expiry_date,
            green_score: self.green_score,
            packaging_score: self.packaging_score,
            local_sourcing_score: self.local_sourcing_score,
            carbon_footprint_score: self.carbon_footprint_score,
            alternative_price_diff: self.alternative_price_diff,
            alternatives: self.alternatives.map(|alt| alt.into_domain(now)),
        })
    }
}

impl CartLineItemDto {
    /// Converts and validates a wire line; any rejected field makes the payload malformed.
    pub fn into_domain(self, now: DateTime<Utc>) -> Result<CartLineItem, GatewayError> {
        let product = self.product.into_domain(now)?;
        CartLineItem::new(NewCartLineItemProps {
            cart_item_id: self.cart_item_id,
            quantity: self.quantity,
            swapped: self.swapped,
            green_score: self.green_score,
            product,
        })
        .map_err(|_| GatewayError::MalformedResponse)
    }
}

#[derive(Debug, Serialize)]
pub struct SwapRequestDto<'a> {
    pub cart_item_id: CartItemId,
    pub alternative: &'a str,
}

#[derive(Debug, Serialize)]
pub struct AgentRequestDto<'a> {
    pub message: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct AgentResultDto {
    pub final_message: String,
}

#[derive(Debug, Deserialize)]
pub struct AgentResponseDto {
    pub response: AgentResultDto,
}
