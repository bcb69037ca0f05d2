//! Product-facing derived values
//!
//! The engines return ranked numbers; this module shapes them the way the
//! host UI consumes them: a signed partition of the correlation ranking,
//! and achievement tiers earned from a streak score.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::correlation::ActivityCorrelation;

/// Weeks of streak required for the "habit" tier
pub const HABIT_WEEKS: u32 = 4;

/// Weeks of streak required for the "lifestyle" tier
pub const LIFESTYLE_WEEKS: u32 = 12;

/// A ranked correlation list split by sign
///
/// Order within each side preserves the engine's strongest-first ranking.
/// Coefficients of exactly zero appear on neither side.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CorrelationSummary {
    /// Activities that associate with higher ratings
    pub positive: Vec<ActivityCorrelation>,
    /// Activities that associate with lower ratings
    pub negative: Vec<ActivityCorrelation>,
}

/// Split a ranked correlation list into positive and negative sides
pub fn partition(ranked: Vec<ActivityCorrelation>) -> CorrelationSummary {
    let mut summary = CorrelationSummary::default();
    for correlation in ranked {
        if correlation.is_positive() {
            summary.positive.push(correlation);
        } else if correlation.is_negative() {
            summary.negative.push(correlation);
        }
    }
    summary
}

/// Achievement thresholds, in weeks of accumulated streak
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AchievementConfig {
    /// Streak score at which a plan counts as a habit
    #[serde(default = "default_habit_weeks")]
    pub habit_weeks: u32,

    /// Streak score at which a plan counts as a lifestyle
    #[serde(default = "default_lifestyle_weeks")]
    pub lifestyle_weeks: u32,
}

fn default_habit_weeks() -> u32 {
    HABIT_WEEKS
}

fn default_lifestyle_weeks() -> u32 {
    LIFESTYLE_WEEKS
}

impl Default for AchievementConfig {
    fn default() -> Self {
        Self {
            habit_weeks: default_habit_weeks(),
            lifestyle_weeks: default_lifestyle_weeks(),
        }
    }
}

/// Badge tier earned by a streak score
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AchievementTier {
    /// Below every threshold
    None,
    /// Sustained for `habit_weeks` or more
    Habit,
    /// Sustained for `lifestyle_weeks` or more
    Lifestyle,
}

impl AchievementTier {
    /// The tier a streak score has earned
    pub fn for_score(score: u32, config: &AchievementConfig) -> Self {
        if score >= config.lifestyle_weeks {
            AchievementTier::Lifestyle
        } else if score >= config.habit_weeks {
            AchievementTier::Habit
        } else {
            AchievementTier::None
        }
    }
}

impl fmt::Display for AchievementTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AchievementTier::None => write!(f, "none"),
            AchievementTier::Habit => write!(f, "habit"),
            AchievementTier::Lifestyle => write!(f, "lifestyle"),
        }
    }
}
