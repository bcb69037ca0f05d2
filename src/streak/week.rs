//! Per-week completion predicate

use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::calendar::week_contains;
use crate::model::{ActivityEntry, Plan, PlanOutline};

/// What one fully elapsed week contributed to a plan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeekOutcome {
    /// The weekly target was met
    Completed,
    /// A target existed and was not met
    Missed,
    /// The week carried no target: a `TimesPerWeek` plan with target 0, or
    /// a `Sessions` plan with nothing scheduled that week. Invisible to the
    /// streak fold.
    Untargeted,
}

/// Evaluate one week of a plan against its covered entries
///
/// `week` is the Monday of the week under evaluation, as produced by
/// [`crate::calendar::week_start`]. `entries` should already be filtered to
/// the plan's activities; entries for other activities are ignored here as
/// well, so passing the full array is merely slower, not wrong.
///
/// - `TimesPerWeek { target }`: counts distinct days in the week with at
///   least one covered entry; completed when that count reaches the target.
///   Two entries on the same day count once.
/// - `Sessions { dates }`: completed when every session scheduled inside
///   the week has a covered entry on its exact day.
pub fn week_outcome(week: NaiveDate, plan: &Plan, entries: &[ActivityEntry]) -> WeekOutcome {
    match &plan.outline {
        PlanOutline::TimesPerWeek { target: 0 } => WeekOutcome::Untargeted,
        PlanOutline::TimesPerWeek { target } => {
            let distinct_days: BTreeSet<NaiveDate> = entries
                .iter()
                .filter(|e| plan.covers(e) && week_contains(week, e.date))
                .map(|e| e.date)
                .collect();

            if distinct_days.len() as u32 >= *target {
                WeekOutcome::Completed
            } else {
                WeekOutcome::Missed
            }
        }
        PlanOutline::Sessions { dates } => {
            let scheduled: Vec<NaiveDate> = dates
                .iter()
                .copied()
                .filter(|&d| week_contains(week, d))
                .collect();

            if scheduled.is_empty() {
                return WeekOutcome::Untargeted;
            }

            let all_met = scheduled.iter().all(|&session| {
                entries
                    .iter()
                    .any(|e| plan.covers(e) && e.date == session)
            });

            if all_met {
                WeekOutcome::Completed
            } else {
                WeekOutcome::Missed
            }
        }
    }
}
