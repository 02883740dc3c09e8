use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::cart::expiry::{days_until_expiry, expiry_progress, is_expiring_soon};
use business::domain::cart::metrics::{CartMetrics, ImpactSummary};
use business::domain::cart::model::{
    Alternatives, CartLineItem, ExpiryAlternative, GreenAlternative, PriceAlternative, Product,
};
use business::domain::cart::outcome::CartOutcome;
use business::domain::cart::state::CartSnapshot;
use business::domain::notification::Notification;

#[derive(Debug, Clone, Object)]
pub struct NotificationResponse {
    /// Short headline
    pub title: String,
    /// One-sentence explanation
    pub description: String,
    /// "default" or "destructive"
    pub variant: String,
}

impl From<Notification> for NotificationResponse {
    fn from(notification: Notification) -> Self {
        Self {
            title: notification.title,
            description: notification.description,
            variant: notification.variant.to_string(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct PriceAlternativeResponse {
    pub name: String,
    pub price: f64,
    pub savings: f64,
    #[oai(skip_serializing_if_is_none)]
    pub image: Option<String>,
}

#[derive(Debug, Clone, Object)]
pub struct ExpiryAlternativeResponse {
    pub name: String,
    #[oai(skip_serializing_if_is_none)]
    pub expiry_date: Option<DateTime<Utc>>,
    pub extra_days: i64,
    #[oai(skip_serializing_if_is_none)]
    pub image: Option<String>,
}

#[derive(Debug, Clone, Object)]
pub struct GreenAlternativeResponse {
    pub name: String,
    pub green_score: u8,
    pub improvement: i32,
    pub reason: String,
    #[oai(skip_serializing_if_is_none)]
    pub image: Option<String>,
}

#[derive(Debug, Clone, Object)]
pub struct AlternativesResponse {
    #[oai(skip_serializing_if_is_none)]
    pub price: Option<PriceAlternativeResponse>,
    #[oai(skip_serializing_if_is_none)]
    pub expiry: Option<ExpiryAlternativeResponse>,
    #[oai(skip_serializing_if_is_none)]
    pub green: Option<GreenAlternativeResponse>,
}

impl From<PriceAlternative> for PriceAlternativeResponse {
    fn from(alt: PriceAlternative) -> Self {
        Self {
            name: alt.name,
            price: alt.price,
            savings: alt.savings,
            image: alt.image,
        }
    }
}

impl From<ExpiryAlternative> for ExpiryAlternativeResponse {
    fn from(alt: ExpiryAlternative) -> Self {
        Self {
            name: alt.name,
            expiry_date: alt.expiry_date,
            extra_days: alt.extra_days,
            image: alt.image,
        }
    }
}

impl From<GreenAlternative> for GreenAlternativeResponse {
    fn from(alt: GreenAlternative) -> Self {
        Self {
            name: alt.name,
            green_score: alt.green_score,
            improvement: alt.improvement,
            reason: alt.reason,
            image: alt.image,
        }
    }
}

impl From<Alternatives> for AlternativesResponse {
    fn from(alternatives: Alternatives) -> Self {
        Self {
            price: alternatives.price.map(Into::into),
            expiry: alternatives.expiry.map(Into::into),
            green: alternatives.green.map(Into::into),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ProductResponse {
    #[oai(skip_serializing_if_is_none)]
    pub id: Option<i64>,
    pub name: String,
    pub price: f64,
    #[oai(skip_serializing_if_is_none)]
    pub image: Option<String>,
    pub expiry_date: DateTime<Utc>,
    #[oai(skip_serializing_if_is_none)]
    pub packaging_score: Option<u8>,
    #[oai(skip_serializing_if_is_none)]
    pub local_sourcing_score: Option<u8>,
    #[oai(skip_serializing_if_is_none)]
    pub carbon_footprint_score: Option<u8>,
    #[oai(skip_serializing_if_is_none)]
    pub alternative_price_diff: Option<f64>,
    #[oai(skip_serializing_if_is_none)]
    pub alternatives: Option<AlternativesResponse>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            price: product.price,
            image: product.image,
            expiry_date: product.expiry_date,
            packaging_score: product.packaging_score,
            local_sourcing_score: product.local_sourcing_score,
            carbon_footprint_score: product.carbon_footprint_score,
            alternative_price_diff: product.alternative_price_diff,
            alternatives: product.alternatives.map(Into::into),
        }
    }
}

/// A cart line with everything the view needs to render its card.
#[derive(Debug, Clone, Object)]
pub struct CartItemResponse {
    pub cart_item_id: i64,
    pub quantity: u32,
    pub swapped: bool,
    /// Line score, falling back to the product's, 0 when neither is known
    pub green_score: u8,
    pub product: ProductResponse,
    /// Whole days left, rounded up; zero or negative once expired
    pub days_until_expiry: i64,
    pub expiring_soon: bool,
    /// Remaining shelf life over one week, 0-100
    pub expiry_progress: u8,
    pub can_auto_swap: bool,
    pub can_donate: bool,
    /// A swap request for this line is awaiting the backend
    pub swap_in_flight: bool,
}

impl CartItemResponse {
    pub fn from_line(item: &CartLineItem, snapshot: &CartSnapshot, now: DateTime<Utc>) -> Self {
        let days = days_until_expiry(item.product.expiry_date, now);
        let swap_in_flight = snapshot.swaps_in_flight.contains(&item.cart_item_id);
        Self {
            cart_item_id: item.cart_item_id,
            quantity: item.quantity,
            swapped: item.swapped,
            green_score: item.effective_green_score(),
            product: item.product.clone().into(),
            days_until_expiry: days,
            expiring_soon: is_expiring_soon(item.product.expiry_date, now),
            expiry_progress: expiry_progress(days),
            can_auto_swap: item.can_auto_swap() && !swap_in_flight,
            can_donate: snapshot.pending_donation.is_none(),
            swap_in_flight,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CartMetricsResponse {
    pub total_items: u64,
    pub average_green_score: u8,
    pub average_packaging_score: u8,
    pub average_local_sourcing_score: u8,
    pub average_carbon_footprint_score: u8,
    /// "Excellent", "Good" or "Needs Improvement"
    pub green_score_rating: String,
    pub total_cost: f64,
    pub total_savings: f64,
    pub items_expiring_soon: u64,
    pub items_donated: u64,
    pub eco_badge_progress: u8,
    pub points_to_next_badge: u8,
}

impl From<CartMetrics> for CartMetricsResponse {
    fn from(metrics: CartMetrics) -> Self {
        Self {
            total_items: metrics.total_items as u64,
            average_green_score: metrics.average_green_score,
            average_packaging_score: metrics.average_packaging_score,
            average_local_sourcing_score: metrics.average_local_sourcing_score,
            average_carbon_footprint_score: metrics.average_carbon_footprint_score,
            green_score_rating: metrics.green_score_rating.to_string(),
            total_cost: metrics.total_cost,
            total_savings: metrics.total_savings,
            items_expiring_soon: metrics.items_expiring_soon as u64,
            items_donated: metrics.items_donated as u64,
            eco_badge_progress: metrics.eco_badge_progress,
            points_to_next_badge: metrics.points_to_next_badge,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CartViewResponse {
    /// "idle", "loading" or "settled"
    pub load_state: String,
    pub items: Vec<CartItemResponse>,
    pub donated: Vec<CartItemResponse>,
    #[oai(skip_serializing_if_is_none)]
    pub pending_donation: Option<CartItemResponse>,
    pub metrics: CartMetricsResponse,
}

impl CartViewResponse {
    pub fn from_snapshot(snapshot: &CartSnapshot, now: DateTime<Utc>) -> Self {
        let render = |item: &CartLineItem| CartItemResponse::from_line(item, snapshot, now);
        Self {
            load_state: snapshot.load_state.to_string(),
            items: snapshot.items.iter().map(render).collect(),
            donated: snapshot.donated.iter().map(render).collect(),
            pending_donation: snapshot.pending_donation.as_ref().map(render),
            metrics: CartMetrics::compute(snapshot, now).into(),
        }
    }
}

/// Cart state after an action, plus the notification to show for it.
#[derive(Debug, Clone, Object)]
pub struct CartActionResponse {
    pub cart: CartViewResponse,
    #[oai(skip_serializing_if_is_none)]
    pub notification: Option<NotificationResponse>,
}

impl From<CartOutcome> for CartActionResponse {
    fn from(outcome: CartOutcome) -> Self {
        Self {
            cart: CartViewResponse::from_snapshot(&outcome.snapshot, Utc::now()),
            notification: outcome.notification.map(Into::into),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ImpactSummaryResponse {
    pub co2_saved_kg: f64,
    pub packaging_reduced: u32,
    pub items_donated: u64,
    pub final_green_score: u8,
}

impl From<ImpactSummary> for ImpactSummaryResponse {
    fn from(impact: ImpactSummary) -> Self {
        Self {
            co2_saved_kg: impact.co2_saved_kg,
            packaging_reduced: impact.packaging_reduced,
            items_donated: impact.items_donated as u64,
            final_green_score: impact.final_green_score,
        }
    }
}
