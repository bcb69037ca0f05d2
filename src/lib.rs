//! # Cadence
//!
//! Habit & Metric Analytics - the pure computation core of a social
//! habit-tracking product. Given arrays of dated records already fetched
//! by the host application, it derives two things:
//!
//! - **Correlations**: how strongly each logged activity associates with a
//!   subjective metric's 1-5 ratings (Pearson, ranked by absolute strength)
//! - **Streaks**: a bounded weekly adherence score per plan, with a
//!   one-week grace buffer before a miss costs anything
//!
//! ## Design
//!
//! - **Pure functions**: no I/O, no clock reads, no shared state - both
//!   engines take every input as an explicit argument and are safe to
//!   recompute on every render or refresh
//! - **Total over well-typed input**: degenerate data degrades to empty or
//!   zero results, never to errors or `NaN`
//! - **Fixed week framing**: weeks start on Monday everywhere
//!
//! ## Modules
//!
//! - [`model`]: the read-only domain records (activities, metrics, plans)
//! - [`calendar`]: week and lookback-window math
//! - [`correlation`]: the activity-to-metric correlation engine
//! - [`streak`]: the week-walk streak engine
//! - [`insights`]: display partitions, labels, and achievement tiers
//! - [`config`]: TOML/env configuration of the analytics constants
//!
//! ## Quick Start
//!
//! ```rust
//! use cadence::{
//!     Activity, ActivityEntry, CorrelationConfig, CorrelationEngine, MetricEntry, Plan,
//!     PlanOutline, StreakConfig, StreakEngine,
//! };
//! use chrono::NaiveDate;
//!
//! fn day(d: u32) -> NaiveDate {
//!     NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
//! }
//!
//! // A week of energy ratings, with runs logged on the good days
//! let ratings: Vec<MetricEntry> = [2u8, 3, 2, 4, 5, 4, 5]
//!     .iter()
//!     .enumerate()
//!     .map(|(i, &r)| MetricEntry::new(i as u32, 1, day(i as u32 + 1), r))
//!     .collect();
//! let runs: Vec<ActivityEntry> = [4u32, 5, 6, 7]
//!     .iter()
//!     .map(|&d| ActivityEntry::new(d, 10, day(d), 5.0))
//!     .collect();
//! let activities = vec![Activity::new(10, "Running", "🏃", "km")];
//!
//! let engine = CorrelationEngine::new(CorrelationConfig::default());
//! let ranked = engine.correlations_for_metric(1, &ratings, &activities, &runs);
//! assert!(ranked[0].coefficient > 0.0);
//!
//! // The same entries, scored against a twice-a-week plan
//! let plan = Plan::new(2, "Run 2x a week", "🏃", PlanOutline::TimesPerWeek { target: 2 }, vec![10]);
//! let streaks = StreakEngine::new(StreakConfig::default());
//! let streak = streaks.streak_for_plan(&plan, &runs, day(17));
//! println!("{streak}"); // e.g. "x1 🏃"
//! ```

pub mod calendar;
pub mod config;
pub mod correlation;
pub mod insights;
pub mod model;
pub mod streak;

// Re-export top-level types for convenience
pub use model::{
    rating_valid, Activity, ActivityEntry, Metric, MetricEntry, Plan, PlanOutline, RATING_MAX,
    RATING_MIN,
};

pub use calendar::{in_lookback_window, week_contains, week_start, week_starts, DAYS_PER_WEEK};

pub use correlation::{
    pearson, ActivityCorrelation, CorrelationConfig, CorrelationEngine, Strength,
    ACTIVITY_WINDOW_DAYS, MINIMUM_ENTRIES,
};

pub use streak::{
    week_outcome, Streak, StreakConfig, StreakEngine, StreakState, WeekOutcome, TIME_RANGE_DAYS,
};

pub use insights::{
    partition, AchievementConfig, AchievementTier, CorrelationSummary, HABIT_WEEKS,
    LIFESTYLE_WEEKS,
};

pub use config::{generate_default_config, Config, ConfigError};
