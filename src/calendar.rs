//! Calendar math for week framing and lookback windows
//!
//! Everything downstream depends on one consistent week convention:
//! weeks start on Monday (ISO-8601). [`week_start`] is the single source
//! of truth for that alignment.

use chrono::{Datelike, Days, NaiveDate};

/// Days in a calendar week
pub const DAYS_PER_WEEK: u64 = 7;

/// The Monday of the week containing `date`
pub fn week_start(date: NaiveDate) -> NaiveDate {
    let offset = date.weekday().num_days_from_monday() as u64;
    // num_days_from_monday is 0..=6, so the subtraction cannot underflow
    // within chrono's representable range
    date.checked_sub_days(Days::new(offset)).unwrap_or(date)
}

/// Check whether `date` falls inside the week starting at `week`
///
/// The week is the half-open interval `[week, week + 7 days)`. `week` is
/// expected to be a Monday as produced by [`week_start`].
pub fn week_contains(week: NaiveDate, date: NaiveDate) -> bool {
    let delta = date.signed_duration_since(week).num_days();
    (0..DAYS_PER_WEEK as i64).contains(&delta)
}

/// Check whether `occurred` falls inside the lookback window ending at
/// `reference`
///
/// The window is the half-open day interval `(reference - window_days,
/// reference]`: the occurrence must land on the reference day or up to
/// `window_days - 1` days before it, never after. With the default window
/// of 1 this admits same-day occurrences only. The direction matters: an
/// occurrence after the reference never qualifies, so the correlation it
/// feeds stays a plausible cause-then-effect signal.
pub fn in_lookback_window(occurred: NaiveDate, reference: NaiveDate, window_days: u32) -> bool {
    let delta = reference.signed_duration_since(occurred).num_days();
    delta >= 0 && delta < window_days as i64
}

/// Iterate the Mondays of every full week from `from` up to `until`
///
/// Yields `week_start(from)` first and stops before `week_start(until)`,
/// so the week containing `until` (the in-progress week) is never yielded.
/// Empty when both dates fall in the same week.
pub fn week_starts(from: NaiveDate, until: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    let first = week_start(from);
    let last = week_start(until);
    std::iter::successors(Some(first), |week| {
        week.checked_add_days(Days::new(DAYS_PER_WEEK))
    })
    .take_while(move |week| *week < last)
}
