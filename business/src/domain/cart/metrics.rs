use chrono::{DateTime, Utc};
use serde::Serialize;

use super::expiry::is_expiring_soon;
use super::model::CartLineItem;
use super::state::CartSnapshot;

const CO2_SAVED_KG_PER_ITEM: f64 = 0.2;
const PACKAGING_REDUCED_PER_ITEM: f64 = 1.5;

/// Per-item score averaged across the cart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScoreField {
    Green,
    Packaging,
    LocalSourcing,
    CarbonFootprint,
}

impl ScoreField {
    fn read(self, item: &CartLineItem) -> u8 {
        let product = &item.product;
        match self {
            ScoreField::Green => item.effective_green_score(),
            ScoreField::Packaging => product.packaging_score.unwrap_or_default(),
            ScoreField::LocalSourcing => product.local_sourcing_score.unwrap_or_default(),
            ScoreField::CarbonFootprint => product.carbon_footprint_score.unwrap_or_default(),
        }
    }
}

/// Qualitative band for a 0-100 score.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreRating {
    Excellent,
    Good,
    NeedsImprovement,
}

impl ScoreRating {
    pub fn from_score(score: u8) -> Self {
        match score {
            80.. => ScoreRating::Excellent,
            60..=79 => ScoreRating::Good,
            _ => ScoreRating::NeedsImprovement,
        }
    }
}

impl std::fmt::Display for ScoreRating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScoreRating::Excellent => write!(f, "Excellent"),
            ScoreRating::Good => write!(f, "Good"),
            ScoreRating::NeedsImprovement => write!(f, "Needs Improvement"),
        }
    }
}

/// Mean of `field` rounded to the nearest integer; 0 for an empty cart.
pub fn average(items: &[CartLineItem], field: ScoreField) -> u8 {
    if items.is_empty() {
        return 0;
    }
    let sum: u64 = items.iter().map(|item| u64::from(field.read(item))).sum();
    (sum as f64 / items.len() as f64).round() as u8
}

/// Cost of everything bought, donated lines included.
pub fn total_cost(items: &[CartLineItem], donated: &[CartLineItem]) -> f64 {
    items
        .iter()
        .chain(donated.iter())
        .map(CartLineItem::line_cost)
        .sum()
}

/// Sum of positive price differences; negative or missing diffs add nothing.
pub fn total_savings(items: &[CartLineItem]) -> f64 {
    items
        .iter()
        .filter_map(|item| item.product.alternative_price_diff)
        .filter(|diff| *diff > 0.0)
        .sum()
}

pub fn items_expiring_soon(items: &[CartLineItem], now: DateTime<Utc>) -> usize {
    items
        .iter()
        .filter(|item| is_expiring_soon(item.product.expiry_date, now))
        .count()
}

pub fn eco_badge_progress(average_green_score: u8) -> u8 {
    average_green_score.min(100)
}

/// Aggregates recomputed from a snapshot on every read.
#[derive(Debug, Clone, PartialEq)]
pub struct CartMetrics {
    pub total_items: usize,
    pub average_green_score: u8,
    pub average_packaging_score: u8,
    pub average_local_sourcing_score: u8,
    pub average_carbon_footprint_score: u8,
    pub green_score_rating: ScoreRating,
    pub total_cost: f64,
    pub total_savings: f64,
    pub items_expiring_soon: usize,
    pub items_donated: usize,
    pub eco_badge_progress: u8,
    pub points_to_next_badge: u8,
}

impl CartMetrics {
    pub fn compute(snapshot: &CartSnapshot, now: DateTime<Utc>) -> Self {
        let items = &snapshot.items;
        let average_green_score = average(items, ScoreField::Green);
        let progress = eco_badge_progress(average_green_score);

        Self {
            total_items: items.len(),
            average_green_score,
            average_packaging_score: average(items, ScoreField::Packaging),
            average_local_sourcing_score: average(items, ScoreField::LocalSourcing),
            average_carbon_footprint_score: average(items, ScoreField::CarbonFootprint),
            green_score_rating: ScoreRating::from_score(average_green_score),
            total_cost: total_cost(items, &snapshot.donated),
            total_savings: total_savings(items),
            items_expiring_soon: items_expiring_soon(items, now),
            items_donated: snapshot.donated.len(),
            eco_badge_progress: progress,
            points_to_next_badge: 100 - progress,
        }
    }
}

/// Environmental impact of the current session.
#[derive(Debug, Clone, PartialEq)]
pub struct ImpactSummary {
    pub co2_saved_kg: f64,
    pub packaging_reduced: u32,
    pub items_donated: usize,
    pub final_green_score: u8,
}

impl ImpactSummary {
    pub fn compute(snapshot: &CartSnapshot) -> Self {
        let live = snapshot.items.len() as f64;
        Self {
            co2_saved_kg: (live * CO2_SAVED_KG_PER_ITEM * 100.0).round() / 100.0,
            packaging_reduced: (live * PACKAGING_REDUCED_PER_ITEM).round() as u32,
            items_donated: snapshot.donated.len(),
            final_green_score: average(&snapshot.items, ScoreField::Green),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cart::model::fixtures::*;
    use chrono::Duration;
    use proptest::prelude::*;

    fn with_diff(cart_item_id: i64, price: f64, quantity: u32, diff: Option<f64>) -> CartLineItem {
        let mut item = line(cart_item_id, price, quantity);
        item.product.alternative_price_diff = diff;
        item
    }

    #[test]
    fn should_return_zero_averages_for_empty_cart() {
        for field in [
            ScoreField::Green,
            ScoreField::Packaging,
            ScoreField::LocalSourcing,
            ScoreField::CarbonFootprint,
        ] {
            assert_eq!(average(&[], field), 0);
        }
    }

    #[test]
    fn should_round_average_to_nearest_integer() {
        let mut a = line(1, 1.0, 1);
        let mut b = line(2, 1.0, 1);
        a.product.packaging_score = Some(70);
        b.product.packaging_score = Some(81);

        assert_eq!(average(&[a, b], ScoreField::Packaging), 76);
    }

    #[test]
    fn should_count_missing_sub_scores_as_zero() {
        let mut a = line(1, 1.0, 1);
        a.product.carbon_footprint_score = Some(90);
        let b = line(2, 1.0, 1);

        assert_eq!(average(&[a, b], ScoreField::CarbonFootprint), 45);
    }

    #[test]
    fn should_compute_savings_and_cost_for_reference_cart() {
        let items = vec![
            with_diff(1, 100.0, 1, Some(20.0)),
            with_diff(2, 50.0, 2, Some(-5.0)),
        ];

        assert_eq!(total_savings(&items), 20.0);
        assert_eq!(total_cost(&items, &[]), 200.0);
    }

    #[test]
    fn should_include_donated_items_in_total_cost() {
        let live = vec![line(1, 100.0, 1)];
        let donated = vec![line(2, 30.0, 2)];

        assert_eq!(total_cost(&live, &donated), 160.0);
    }

    #[test]
    fn should_count_items_expiring_within_three_days() {
        let now = Utc::now();
        let mut soon = line(1, 1.0, 1);
        soon.product.expiry_date = now + Duration::days(3);
        let mut later = line(2, 1.0, 1);
        later.product.expiry_date = now + Duration::days(4);
        let mut expired = line(3, 1.0, 1);
        expired.product.expiry_date = now - Duration::days(1);

        assert_eq!(items_expiring_soon(&[soon, later, expired], now), 2);
    }

    #[test]
    fn should_rate_scores_by_band() {
        assert_eq!(ScoreRating::from_score(80), ScoreRating::Excellent);
        assert_eq!(ScoreRating::from_score(79), ScoreRating::Good);
        assert_eq!(ScoreRating::from_score(60), ScoreRating::Good);
        assert_eq!(ScoreRating::from_score(59), ScoreRating::NeedsImprovement);
    }

    #[test]
    fn should_compute_cart_metrics_from_snapshot() {
        let mut a = line(1, 100.0, 1);
        a.green_score = Some(90);
        let mut b = line(2, 50.0, 2);
        b.product.green_score = Some(70);
        let snapshot = CartSnapshot::default()
            .loaded(vec![a, b, line(3, 10.0, 1)])
            .request_donation(3)
            .unwrap()
            .donation_confirmed(3);

        let metrics = CartMetrics::compute(&snapshot, Utc::now());

        assert_eq!(metrics.total_items, 2);
        assert_eq!(metrics.average_green_score, 80);
        assert_eq!(metrics.green_score_rating, ScoreRating::Excellent);
        assert_eq!(metrics.total_cost, 210.0);
        assert_eq!(metrics.items_donated, 1);
        assert_eq!(metrics.eco_badge_progress, 80);
        assert_eq!(metrics.points_to_next_badge, 20);
    }

    #[test]
    fn should_derive_impact_summary_from_live_and_donated_items() {
        let snapshot = CartSnapshot::default()
            .loaded(vec![line(1, 1.0, 1), line(2, 1.0, 1), line(3, 1.0, 1)])
            .request_donation(1)
            .unwrap()
            .donation_confirmed(1);

        let impact = ImpactSummary::compute(&snapshot);

        assert_eq!(impact.co2_saved_kg, 0.4);
        assert_eq!(impact.packaging_reduced, 3);
        assert_eq!(impact.items_donated, 1);
    }

    proptest! {
        #[test]
        fn should_never_report_negative_savings(diffs in proptest::collection::vec(proptest::option::of(-1000.0f64..1000.0), 0..20)) {
            let items: Vec<_> = diffs
                .into_iter()
                .enumerate()
                .map(|(i, diff)| with_diff(i as i64, 1.0, 1, diff))
                .collect();

            prop_assert!(total_savings(&items) >= 0.0);
        }

        #[test]
        fn should_match_arithmetic_mean(scores in proptest::collection::vec(0u8..=100, 1..30)) {
            let items: Vec<_> = scores
                .iter()
                .enumerate()
                .map(|(i, score)| {
                    let mut item = line(i as i64, 1.0, 1);
                    item.green_score = Some(*score);
                    item
                })
                .collect();
            let mean = scores.iter().map(|s| f64::from(*s)).sum::<f64>() / scores.len() as f64;

            prop_assert_eq!(average(&items, ScoreField::Green), mean.round() as u8);
        }
    }
}
