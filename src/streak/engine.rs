//! Streak scoring: the per-week fold and the history walk

use std::fmt;

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::calendar::{week_start, week_starts};
use crate::model::{ActivityEntry, Plan};
use crate::streak::{week_outcome, WeekOutcome};

/// Default history window for the streak walk, in days
pub const TIME_RANGE_DAYS: u32 = 60;

/// Streak engine configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StreakConfig {
    /// How far back (days) the weekly walk may start
    #[serde(default = "default_time_range_days")]
    pub time_range_days: u32,
}

fn default_time_range_days() -> u32 {
    TIME_RANGE_DAYS
}

impl Default for StreakConfig {
    fn default() -> Self {
        Self {
            time_range_days: default_time_range_days(),
        }
    }
}

/// The streak fold, stepped once per elapsed week
///
/// Completed weeks increment the score. The first miss in a run is free;
/// from the second consecutive miss on, each miss decrements. The score is
/// unsigned, so the `>= 0` clamp is structural. Untargeted weeks change
/// nothing and do not interrupt a run of misses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StreakState {
    score: u32,
    consecutive_misses: u32,
}

impl StreakState {
    /// Fresh state: no score, no misses
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one week's outcome
    pub fn advance(&mut self, outcome: WeekOutcome) {
        match outcome {
            WeekOutcome::Completed => {
                self.score += 1;
                self.consecutive_misses = 0;
            }
            WeekOutcome::Missed => {
                self.consecutive_misses += 1;
                if self.consecutive_misses > 1 {
                    self.score = self.score.saturating_sub(1);
                }
            }
            WeekOutcome::Untargeted => {}
        }
    }

    /// Current score
    pub fn score(&self) -> u32 {
        self.score
    }
}

/// A plan's streak, ready for badge display
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Streak {
    /// Accumulated score, never negative
    pub score: u32,
    /// The plan's emoji
    pub emoji: String,
}

impl fmt::Display for Streak {
    /// The product badge: `x{score} {emoji}`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x{} {}", self.score, self.emoji)
    }
}

/// Scores a plan's weekly adherence into a streak
///
/// Pure computation: `today` is an explicit argument, so identical inputs
/// always produce identical output.
pub struct StreakEngine {
    config: StreakConfig,
}

impl StreakEngine {
    /// Create an engine with the given configuration
    pub fn new(config: StreakConfig) -> Self {
        Self { config }
    }

    /// Compute a plan's streak as of `today`
    ///
    /// Walks week by week from the later of the plan's start reference and
    /// `today - time_range_days`, up to but excluding the week containing
    /// `today` — the in-progress week is never scored. A plan with no
    /// start reference and no covered entries scores 0.
    pub fn streak_for_plan(
        &self,
        plan: &Plan,
        activity_entries: &[ActivityEntry],
        today: NaiveDate,
    ) -> Streak {
        let covered: Vec<ActivityEntry> = activity_entries
            .iter()
            .filter(|e| plan.covers(e))
            .cloned()
            .collect();

        let Some(start) = plan.start_reference(&covered) else {
            return Streak {
                score: 0,
                emoji: plan.emoji.clone(),
            };
        };

        let floor = today
            .checked_sub_days(Days::new(self.config.time_range_days as u64))
            .unwrap_or(today);
        let from = week_start(start).max(week_start(floor));

        let mut state = StreakState::new();
        for week in week_starts(from, today) {
            let outcome = week_outcome(week, plan, &covered);
            tracing::trace!(plan_id = plan.id, %week, ?outcome, "Scored week");
            state.advance(outcome);
        }

        tracing::debug!(plan_id = plan.id, score = state.score(), "Computed streak");

        Streak {
            score: state.score(),
            emoji: plan.emoji.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PlanOutline;

    fn day(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, m, d).unwrap()
    }

    fn plan(target: u32) -> Plan {
        Plan::new(
            1,
            "Run",
            "🏃",
            PlanOutline::TimesPerWeek { target },
            vec![10],
        )
    }

    fn entry(id: u32, date: NaiveDate) -> ActivityEntry {
        ActivityEntry::new(id, 10, date, 1.0)
    }

    fn engine() -> StreakEngine {
        StreakEngine::new(StreakConfig::default())
    }

    /// Step a state through outcomes, collecting the score after each week
    fn scores(outcomes: &[WeekOutcome]) -> Vec<u32> {
        let mut state = StreakState::new();
        outcomes
            .iter()
            .map(|&o| {
                state.advance(o);
                state.score()
            })
            .collect()
    }

    #[test]
    fn test_grace_buffer_single_miss_is_free() {
        use WeekOutcome::*;
        assert_eq!(
            scores(&[Completed, Completed, Missed, Completed]),
            vec![1, 2, 2, 3]
        );
    }

    #[test]
    fn test_second_consecutive_miss_decrements() {
        use WeekOutcome::*;
        assert_eq!(scores(&[Completed, Missed, Missed]), vec![1, 1, 0]);
    }

    #[test]
    fn test_score_clamped_at_zero() {
        use WeekOutcome::*;
        assert_eq!(
            scores(&[Missed, Missed, Missed, Missed]),
            vec![0, 0, 0, 0]
        );
    }

    #[test]
    fn test_completion_resets_miss_run() {
        use WeekOutcome::*;
        // The completion in week 3 starts a fresh run, so week 4's miss is
        // free again
        assert_eq!(
            scores(&[Completed, Missed, Completed, Missed, Completed]),
            vec![1, 1, 2, 2, 3]
        );
    }

    #[test]
    fn test_untargeted_weeks_are_invisible() {
        use WeekOutcome::*;
        // The untargeted week neither decrements nor interrupts the miss
        // run: the miss after it is still the second consecutive miss
        assert_eq!(
            scores(&[Completed, Missed, Untargeted, Missed]),
            vec![1, 1, 1, 0]
        );
    }

    #[test]
    fn test_two_complete_weeks() {
        // Weeks of Jan 1 and Jan 8 complete (2 distinct days each);
        // today is Wednesday Jan 17, so the in-progress week is not scored
        let entries = vec![
            entry(1, day(1, 1)),
            entry(2, day(1, 3)),
            entry(3, day(1, 8)),
            entry(4, day(1, 10)),
            entry(5, day(1, 15)), // in-progress week, ignored
        ];

        let streak = engine().streak_for_plan(&plan(2), &entries, day(1, 17));
        assert_eq!(streak.score, 2);
    }

    #[test]
    fn test_in_progress_week_never_scored() {
        // A perfect current week contributes nothing yet
        let entries = vec![entry(1, day(1, 15)), entry(2, day(1, 16))];
        let streak = engine().streak_for_plan(&plan(2), &entries, day(1, 17));
        assert_eq!(streak.score, 0);
    }

    #[test]
    fn test_missed_week_between_completions() {
        // Jan 1: complete. Jan 8: nothing (first miss, free).
        // Jan 15: complete. Today Jan 24.
        let entries = vec![
            entry(1, day(1, 1)),
            entry(2, day(1, 2)),
            entry(3, day(1, 15)),
            entry(4, day(1, 16)),
        ];
        let streak = engine().streak_for_plan(&plan(2), &entries, day(1, 24));
        assert_eq!(streak.score, 2);
    }

    #[test]
    fn test_no_entries_scores_zero() {
        let streak = engine().streak_for_plan(&plan(2), &[], day(1, 17));
        assert_eq!(streak.score, 0);
        assert_eq!(streak.emoji, "🏃");
    }

    #[test]
    fn test_zero_target_plan_scores_zero() {
        let entries = vec![entry(1, day(1, 1)), entry(2, day(1, 8))];
        let streak = engine().streak_for_plan(&plan(0), &entries, day(1, 17));
        assert_eq!(streak.score, 0);
    }

    #[test]
    fn test_walk_floored_by_time_range() {
        // One entry every Monday for ~17 months. Without the window the
        // walk would score dozens of weeks; the 60-day floor limits it.
        let mut entries = Vec::new();
        let mut current = NaiveDate::from_ymd_opt(2023, 1, 2).unwrap(); // a Monday
        let mut id = 0;
        while current < day(6, 1) {
            entries.push(entry(id, current));
            id += 1;
            current = current.checked_add_days(Days::new(7)).unwrap();
        }

        // Today is Saturday 2024-06-01; the floor lands on 2024-04-02,
        // so the walk covers the 8 full weeks of Apr 1 .. May 20.
        let streak = engine().streak_for_plan(&plan(1), &entries, day(6, 1));
        assert_eq!(streak.score, 8);
    }

    #[test]
    fn test_explicit_start_date_respected() {
        // Plan starts Jan 8; the empty week of Jan 1 is not walked
        let p = plan(1).start_date(day(1, 8));
        let entries = vec![entry(1, day(1, 9))];
        let streak = engine().streak_for_plan(&p, &entries, day(1, 17));
        assert_eq!(streak.score, 1);
    }

    #[test]
    fn test_idempotent() {
        let entries = vec![entry(1, day(1, 1)), entry(2, day(1, 3))];
        let first = engine().streak_for_plan(&plan(2), &entries, day(1, 17));
        let second = engine().streak_for_plan(&plan(2), &entries, day(1, 17));
        assert_eq!(first, second);
    }

    #[test]
    fn test_badge_display() {
        let streak = Streak {
            score: 4,
            emoji: "🏃".to_string(),
        };
        assert_eq!(streak.to_string(), "x4 🏃");
    }
}
