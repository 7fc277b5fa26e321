//! Analytics calculators
//!
//! Pure functions of plan, completion log and profile. Nothing here reads the
//! clock; "today" is always passed in.

pub mod config;
pub mod nutrients;
pub mod snapshot;
pub mod streak;
pub mod weight_goal;

pub use config::AnalyticsConfig;
pub use nutrients::aggregate;
pub use snapshot::{compute_analytics_snapshot, AnalyticsEngine};
pub use streak::{streak, week_completion};
pub use weight_goal::project;
