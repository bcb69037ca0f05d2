//! Activities and their logged occurrences

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A user-defined trackable thing (e.g. "Running", "Meditation")
///
/// Created and edited by the host application; the analytics core only
/// references activities read-only.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Activity {
    /// Unique identifier
    pub id: u32,
    /// Human-readable title (e.g. "Running")
    pub title: String,
    /// Display emoji
    pub emoji: String,
    /// Unit-of-measure label (e.g. "km", "minutes", "sessions")
    pub unit: String,
}

impl Activity {
    /// Create a new activity
    pub fn new(
        id: u32,
        title: impl Into<String>,
        emoji: impl Into<String>,
        unit: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            emoji: emoji.into(),
            unit: unit.into(),
        }
    }
}

/// One dated occurrence of an activity
///
/// The date is a calendar day; time-of-day is not significant to the
/// analytics core. Quantity is in the activity's unit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActivityEntry {
    /// Unique identifier
    pub id: u32,
    /// Reference to the activity this entry logs
    pub activity_id: u32,
    /// Calendar day the activity occurred (ISO-8601 date)
    pub date: NaiveDate,
    /// Amount, in the activity's unit
    pub quantity: f64,
}

impl ActivityEntry {
    /// Create a new entry for an activity on a given day
    pub fn new(id: u32, activity_id: u32, date: NaiveDate, quantity: f64) -> Self {
        Self {
            id,
            activity_id,
            date,
            quantity,
        }
    }
}
