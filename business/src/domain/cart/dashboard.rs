use chrono::{DateTime, Utc};

use super::metrics::{CartMetrics, ImpactSummary};
use super::state::CartSnapshot;

const GREEN_SCORE_GOAL: f64 = 85.0;
const ITEMS_DONATED_GOAL: f64 = 30.0;
const CO2_SAVED_GOAL_KG: f64 = 20.0;

/// Monthly target tracked on the dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct Goal {
    pub name: &'static str,
    pub current: f64,
    pub target: f64,
}

impl Goal {
    pub fn progress(&self) -> u8 {
        (self.current / self.target * 100.0).clamp(0.0, 100.0).round() as u8
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Badge {
    pub name: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
    pub unlocked: bool,
}

struct BadgeRule {
    name: &'static str,
    icon: &'static str,
    description: &'static str,
    unlocked: fn(&SessionFacts) -> bool,
}

struct SessionFacts {
    swapped_items: usize,
    items_donated: usize,
    co2_saved_kg: f64,
    average_green_score: u8,
}

const BADGE_RULES: [BadgeRule; 4] = [
    BadgeRule {
        name: "Eco Warrior",
        icon: "🏆",
        description: "Made 50+ sustainable choices",
        unlocked: |facts| facts.swapped_items >= 50,
    },
    BadgeRule {
        name: "Waste Reducer",
        icon: "♻️",
        description: "Donated 20+ items",
        unlocked: |facts| facts.items_donated >= 20,
    },
    BadgeRule {
        name: "Carbon Saver",
        icon: "🌱",
        description: "Saved 10kg+ CO₂",
        unlocked: |facts| facts.co2_saved_kg >= 10.0,
    },
    BadgeRule {
        name: "Zero Waste",
        icon: "🎯",
        description: "Achieve 90+ green score",
        unlocked: |facts| facts.average_green_score >= 90,
    },
];

/// Headline numbers, goals and badges for the dashboard view.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardStats {
    pub total_savings: f64,
    pub green_score: u8,
    pub items_donated: usize,
    pub co2_saved_kg: f64,
    pub goals: Vec<Goal>,
    pub badges: Vec<Badge>,
    pub badges_earned: usize,
}

impl DashboardStats {
    pub fn compute(snapshot: &CartSnapshot, now: DateTime<Utc>) -> Self {
        let metrics = CartMetrics::compute(snapshot, now);
        let impact = ImpactSummary::compute(snapshot);
        let facts = SessionFacts {
            swapped_items: snapshot.items.iter().filter(|item| item.swapped).count(),
            items_donated: metrics.items_donated,
            co2_saved_kg: impact.co2_saved_kg,
            average_green_score: metrics.average_green_score,
        };

        let badges: Vec<Badge> = BADGE_RULES
            .iter()
            .map(|rule| Badge {
                name: rule.name,
                icon: rule.icon,
                description: rule.description,
                unlocked: (rule.unlocked)(&facts),
            })
            .collect();
        let badges_earned = badges.iter().filter(|badge| badge.unlocked).count();

        let goals = vec![
            Goal {
                name: "Green Score",
                current: f64::from(metrics.average_green_score),
                target: GREEN_SCORE_GOAL,
            },
            Goal {
                name: "Items Donated",
                current: metrics.items_donated as f64,
                target: ITEMS_DONATED_GOAL,
            },
            Goal {
                name: "CO₂ Saved",
                current: impact.co2_saved_kg,
                target: CO2_SAVED_GOAL_KG,
            },
        ];

        Self {
            total_savings: metrics.total_savings,
            green_score: metrics.average_green_score,
            items_donated: metrics.items_donated,
            co2_saved_kg: impact.co2_saved_kg,
            goals,
            badges,
            badges_earned,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cart::model::fixtures::*;

    #[test]
    fn should_report_empty_dashboard_without_badges() {
        let stats = DashboardStats::compute(&CartSnapshot::default(), Utc::now());

        assert_eq!(stats.green_score, 0);
        assert_eq!(stats.items_donated, 0);
        assert_eq!(stats.badges_earned, 0);
        assert_eq!(stats.badges.len(), 4);
        assert!(stats.goals.iter().all(|goal| goal.progress() == 0));
    }

    #[test]
    fn should_unlock_zero_waste_badge_at_ninety_green_score() {
        let mut item = line(1, 10.0, 1);
        item.green_score = Some(92);
        let snapshot = CartSnapshot::default().loaded(vec![item]);

        let stats = DashboardStats::compute(&snapshot, Utc::now());

        let zero_waste = stats.badges.iter().find(|b| b.name == "Zero Waste").unwrap();
        assert!(zero_waste.unlocked);
        assert_eq!(stats.badges_earned, 1);
    }

    #[test]
    fn should_cap_goal_progress_at_hundred() {
        let goal = Goal {
            name: "Green Score",
            current: 95.0,
            target: GREEN_SCORE_GOAL,
        };

        assert_eq!(goal.progress(), 100);
    }
}
