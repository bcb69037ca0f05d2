//! Streak / Progress Engine
//!
//! Walks a plan's history week by week, decides per week whether the
//! commitment was met, and folds that sequence into a bounded streak score
//! with a one-week grace buffer.
//!
//! ## Architecture
//!
//! - [`week_outcome`]: the per-week completion predicate
//! - [`StreakState`]: the fold, one explicit state-machine step per week
//! - [`StreakEngine`]: the walk from the plan's start to the current week

mod engine;
mod week;

pub use engine::{Streak, StreakConfig, StreakEngine, StreakState, TIME_RANGE_DAYS};
pub use week::{week_outcome, WeekOutcome};
