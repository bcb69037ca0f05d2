//! Plans: recurring weekly commitments

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::ActivityEntry;

/// The shape of a plan's weekly commitment
///
/// Modeled as a tagged union so the week-completion predicate can match
/// exhaustively instead of null-checking optional fields.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlanOutline {
    /// Hit the target number of distinct activity days each week
    TimesPerWeek {
        /// Distinct qualifying days required per week; 0 means no target
        target: u32,
    },
    /// Complete every scheduled session on its scheduled day
    Sessions {
        /// Scheduled session days
        dates: Vec<NaiveDate>,
    },
}

/// A recurring commitment tying activities to a weekly target
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Plan {
    /// Unique identifier
    pub id: u32,
    /// Human-readable title (e.g. "Run 3x a week")
    pub title: String,
    /// Display emoji, rendered in the streak badge
    pub emoji: String,
    /// Weekly commitment shape
    pub outline: PlanOutline,
    /// Activities whose entries count toward this plan
    pub activity_ids: Vec<u32>,
    /// Explicit start day; when absent the earliest covered entry is used
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
}

impl Plan {
    /// Create a new plan
    pub fn new(
        id: u32,
        title: impl Into<String>,
        emoji: impl Into<String>,
        outline: PlanOutline,
        activity_ids: Vec<u32>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            emoji: emoji.into(),
            outline,
            activity_ids,
            start_date: None,
        }
    }

    /// Builder: set an explicit start day
    pub fn start_date(mut self, date: NaiveDate) -> Self {
        self.start_date = Some(date);
        self
    }

    /// Check whether an entry belongs to one of this plan's activities
    pub fn covers(&self, entry: &ActivityEntry) -> bool {
        self.activity_ids.contains(&entry.activity_id)
    }

    /// The day this plan's history starts
    ///
    /// Explicit start date when set, otherwise the earliest covered entry.
    /// `None` when the plan has neither.
    pub fn start_reference(&self, entries: &[ActivityEntry]) -> Option<NaiveDate> {
        if self.start_date.is_some() {
            return self.start_date;
        }
        entries
            .iter()
            .filter(|e| self.covers(e))
            .map(|e| e.date)
            .min()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_covers() {
        let plan = Plan::new(
            1,
            "Run 3x a week",
            "🏃",
            PlanOutline::TimesPerWeek { target: 3 },
            vec![10, 11],
        );

        let covered = ActivityEntry::new(1, 10, day(2024, 1, 8), 5.0);
        let other = ActivityEntry::new(2, 99, day(2024, 1, 8), 5.0);

        assert!(plan.covers(&covered));
        assert!(!plan.covers(&other));
    }

    #[test]
    fn test_start_reference_prefers_explicit_date() {
        let plan = Plan::new(
            1,
            "Lift",
            "🏋️",
            PlanOutline::TimesPerWeek { target: 2 },
            vec![10],
        )
        .start_date(day(2024, 1, 1));

        let entries = vec![ActivityEntry::new(1, 10, day(2023, 12, 1), 1.0)];
        assert_eq!(plan.start_reference(&entries), Some(day(2024, 1, 1)));
    }

    #[test]
    fn test_start_reference_falls_back_to_earliest_entry() {
        let plan = Plan::new(
            1,
            "Lift",
            "🏋️",
            PlanOutline::TimesPerWeek { target: 2 },
            vec![10],
        );

        let entries = vec![
            ActivityEntry::new(1, 10, day(2024, 2, 5), 1.0),
            ActivityEntry::new(2, 10, day(2024, 1, 20), 1.0),
            ActivityEntry::new(3, 99, day(2024, 1, 1), 1.0), // not covered
        ];
        assert_eq!(plan.start_reference(&entries), Some(day(2024, 1, 20)));

        let empty: Vec<ActivityEntry> = vec![];
        assert_eq!(plan.start_reference(&empty), None);
    }

    #[test]
    fn test_outline_serializes_tagged() {
        let outline = PlanOutline::TimesPerWeek { target: 3 };
        let json = serde_json::to_string(&outline).unwrap();
        assert!(json.contains("\"type\":\"TIMES_PER_WEEK\""));

        let sessions = PlanOutline::Sessions {
            dates: vec![day(2024, 1, 8), day(2024, 1, 10)],
        };
        let json = serde_json::to_string(&sessions).unwrap();
        assert!(json.contains("\"type\":\"SESSIONS\""));

        let restored: PlanOutline = serde_json::from_str(&json).unwrap();
        assert_eq!(sessions, restored);
    }
}
