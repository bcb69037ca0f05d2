//! Correlation Engine
//!
//! Ranks how strongly each logged activity associates with a metric's
//! ratings.
//!
//! ## Data flow
//!
//! 1. The host supplies a metric's dated ratings and all activity entries
//! 2. Each activity becomes a binary occurred-in-window vector aligned to
//!    the metric's entries
//! 3. A Pearson coefficient is computed per activity and the results are
//!    ranked by absolute strength

mod engine;
mod pearson;

pub use engine::{
    ActivityCorrelation, CorrelationConfig, CorrelationEngine, Strength, ACTIVITY_WINDOW_DAYS,
    MINIMUM_ENTRIES,
};
pub use pearson::pearson;
