//! Activity-to-metric correlation scan

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::calendar::in_lookback_window;
use crate::correlation::pearson;
use crate::model::{Activity, ActivityEntry, MetricEntry};

/// Minimum ratings a metric needs before correlations are computed
pub const MINIMUM_ENTRIES: usize = 7;

/// Default lookback window: an activity counts as preceding a rating when
/// it occurred on the same day
pub const ACTIVITY_WINDOW_DAYS: u32 = 1;

/// Correlation engine configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CorrelationConfig {
    /// Ratings required per metric before any correlation is surfaced
    #[serde(default = "default_minimum_entries")]
    pub minimum_entries: usize,

    /// Lookback window (days) in which an activity occurrence counts as
    /// preceding a rating
    #[serde(default = "default_window_days")]
    pub window_days: u32,
}

fn default_minimum_entries() -> usize {
    MINIMUM_ENTRIES
}

fn default_window_days() -> u32 {
    ACTIVITY_WINDOW_DAYS
}

impl Default for CorrelationConfig {
    fn default() -> Self {
        Self {
            minimum_entries: default_minimum_entries(),
            window_days: default_window_days(),
        }
    }
}

/// How strongly an activity associates with a metric's ratings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActivityCorrelation {
    /// The activity the coefficient describes
    pub activity: Activity,
    /// Pearson correlation coefficient (-1 to 1)
    pub coefficient: f64,
}

impl ActivityCorrelation {
    /// Whether the activity associates with higher ratings
    pub fn is_positive(&self) -> bool {
        self.coefficient > 0.0
    }

    /// Whether the activity associates with lower ratings
    pub fn is_negative(&self) -> bool {
        self.coefficient < 0.0
    }

    /// Bucket the coefficient into a human-readable strength
    pub fn strength(&self) -> Strength {
        Strength::from_coefficient(self.coefficient)
    }

    /// Display label: `"{emoji} {title}"`
    pub fn label(&self) -> String {
        format!("{} {}", self.activity.emoji, self.activity.title)
    }
}

/// Human-readable strength bucket for a correlation coefficient
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Strength {
    /// |r| > 0.7
    Strong,
    /// 0.5 < |r| <= 0.7
    Moderate,
    /// 0.3 < |r| <= 0.5
    Weak,
    /// |r| <= 0.3
    Negligible,
}

impl Strength {
    /// Bucket a coefficient by absolute value
    pub fn from_coefficient(r: f64) -> Self {
        let abs_r = r.abs();
        if abs_r > 0.7 {
            Strength::Strong
        } else if abs_r > 0.5 {
            Strength::Moderate
        } else if abs_r > 0.3 {
            Strength::Weak
        } else {
            Strength::Negligible
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strength::Strong => write!(f, "strong"),
            Strength::Moderate => write!(f, "moderate"),
            Strength::Weak => write!(f, "weak"),
            Strength::Negligible => write!(f, "negligible"),
        }
    }
}

/// Ranks activities by how strongly they associate with a metric's ratings
///
/// Pure computation: reads the supplied arrays, returns a new ranked list,
/// touches nothing else. Calling it twice with the same input yields the
/// same output.
pub struct CorrelationEngine {
    config: CorrelationConfig,
}

impl CorrelationEngine {
    /// Create an engine with the given configuration
    pub fn new(config: CorrelationConfig) -> Self {
        Self { config }
    }

    /// Rank every activity by its correlation with one metric's ratings
    ///
    /// For each rating of `metric_id`, an activity scores `1` when any of
    /// its entries falls in the lookback window ending on the rating's day,
    /// else `0`. The Pearson coefficient between that binary vector and the
    /// ratings is computed per activity, and results are sorted by absolute
    /// coefficient, strongest first.
    ///
    /// Returns an empty list when the metric has fewer than
    /// `minimum_entries` ratings: correlations over too few points are not
    /// computed at all. Activities that never occurred in any window are
    /// excluded rather than reported as zero.
    pub fn correlations_for_metric(
        &self,
        metric_id: u32,
        metric_entries: &[MetricEntry],
        activities: &[Activity],
        activity_entries: &[ActivityEntry],
    ) -> Vec<ActivityCorrelation> {
        let mut ratings: Vec<&MetricEntry> = metric_entries
            .iter()
            .filter(|e| e.metric_id == metric_id)
            .collect();

        if ratings.len() < self.config.minimum_entries {
            tracing::debug!(
                metric_id,
                entries = ratings.len(),
                required = self.config.minimum_entries,
                "Too few ratings for correlation"
            );
            return Vec::new();
        }

        ratings.sort_by_key(|e| e.date);
        let rating_values: Vec<f64> = ratings.iter().map(|e| f64::from(e.rating)).collect();

        let mut correlations = Vec::new();

        for activity in activities {
            let dates: Vec<_> = activity_entries
                .iter()
                .filter(|e| e.activity_id == activity.id)
                .map(|e| e.date)
                .collect();

            let occurrences: Vec<f64> = ratings
                .iter()
                .map(|entry| {
                    let occurred = dates
                        .iter()
                        .any(|&d| in_lookback_window(d, entry.date, self.config.window_days));
                    if occurred {
                        1.0
                    } else {
                        0.0
                    }
                })
                .collect();

            // An activity that never occurred in any window carries no
            // signal; it is excluded rather than reported as zero
            if occurrences.iter().all(|&v| v == 0.0) {
                tracing::trace!(
                    metric_id,
                    activity_id = activity.id,
                    "Activity absent from all windows, skipping"
                );
                continue;
            }

            let coefficient = pearson(&rating_values, &occurrences);

            correlations.push(ActivityCorrelation {
                activity: activity.clone(),
                coefficient,
            });
        }

        // Strongest relationship first, regardless of sign
        correlations.sort_by(|a, b| {
            b.coefficient
                .abs()
                .partial_cmp(&a.coefficient.abs())
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        correlations
    }
}
