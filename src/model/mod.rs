//! Domain records for the analytics core
//!
//! These are the read-only arrays the host application's data layer
//! materializes (from its HTTP/JSON backend) and hands to the engines:
//!
//! - [`Activity`] / [`ActivityEntry`]: trackable things and their dated logs
//! - [`Metric`] / [`MetricEntry`]: subjective 1-5 scales and their ratings
//! - [`Plan`] / [`PlanOutline`]: recurring weekly commitments
//!
//! The engines never mutate these; they only read them and return new
//! derived values.

mod activity;
mod metric;
mod plan;

pub use activity::{Activity, ActivityEntry};
pub use metric::{rating_valid, Metric, MetricEntry, RATING_MAX, RATING_MIN};
pub use plan::{Plan, PlanOutline};
