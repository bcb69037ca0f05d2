//! Metrics and their dated ratings

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Lowest valid rating on the subjective scale
pub const RATING_MIN: u8 = 1;

/// Highest valid rating on the subjective scale
pub const RATING_MAX: u8 = 5;

/// A user-defined subjective scale to track (e.g. "Energy", "Mood")
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Metric {
    /// Unique identifier
    pub id: u32,
    /// Human-readable title (e.g. "Energy")
    pub title: String,
    /// Display emoji
    pub emoji: String,
}

impl Metric {
    /// Create a new metric
    pub fn new(id: u32, title: impl Into<String>, emoji: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            emoji: emoji.into(),
        }
    }
}

/// One dated rating for a metric
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MetricEntry {
    /// Unique identifier
    pub id: u32,
    /// Reference to the metric this entry rates
    pub metric_id: u32,
    /// Calendar day of the rating (ISO-8601 date)
    pub date: NaiveDate,
    /// Rating on the 1-5 scale
    pub rating: u8,
}

impl MetricEntry {
    /// Create a new rating entry
    pub fn new(id: u32, metric_id: u32, date: NaiveDate, rating: u8) -> Self {
        Self {
            id,
            metric_id,
            date,
            rating,
        }
    }
}

/// Check that a rating falls on the 1-5 scale
///
/// The input collaborator is responsible for validation; the engines assume
/// ratings are already in range.
pub fn rating_valid(rating: u8) -> bool {
    (RATING_MIN..=RATING_MAX).contains(&rating)
}
