use poem_openapi::Object;

use business::domain::cart::dashboard::{Badge, DashboardStats, Goal};

#[derive(Debug, Clone, Object)]
pub struct GoalResponse {
    pub name: String,
    pub current: f64,
    pub target: f64,
    /// Percent of target reached, capped at 100
    pub progress: u8,
}

impl From<Goal> for GoalResponse {
    fn from(goal: Goal) -> Self {
        Self {
            name: goal.name.to_string(),
            current: goal.current,
            target: goal.target,
            progress: goal.progress(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct BadgeResponse {
    pub name: String,
    pub icon: String,
    pub description: String,
    pub unlocked: bool,
}

impl From<Badge> for BadgeResponse {
    fn from(badge: Badge) -> Self {
        Self {
            name: badge.name.to_string(),
            icon: badge.icon.to_string(),
            description: badge.description.to_string(),
            unlocked: badge.unlocked,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct DashboardResponse {
    pub total_savings: f64,
    pub green_score: u8,
    pub items_donated: u64,
    pub co2_saved_kg: f64,
    pub goals: Vec<GoalResponse>,
    pub badges: Vec<BadgeResponse>,
    pub badges_earned: u64,
}

impl From<DashboardStats> for DashboardResponse {
    fn from(stats: DashboardStats) -> Self {
        Self {
            total_savings: stats.total_savings,
            green_score: stats.green_score,
            items_donated: stats.items_donated as u64,
            co2_saved_kg: stats.co2_saved_kg,
            goals: stats.goals.into_iter().map(Into::into).collect(),
            badges: stats.badges.into_iter().map(Into::into).collect(),
            badges_earned: stats.badges_earned as u64,
        }
    }
}
