//! Nutrilytics Library
//!
//! Nutrition adherence, weight-goal progress and meal-completion streaks,
//! computed from a weekly meal plan, a completed-meal log and a body profile.

pub mod analytics;
pub mod build_info;
pub mod error;
pub mod input;
pub mod metrics;
pub mod models;
pub mod report;

pub use analytics::{compute_analytics_snapshot, AnalyticsConfig, AnalyticsEngine};
pub use error::{AnalyticsError, AnalyticsResult};
pub use input::AnalyticsInput;
pub use models::AnalyticsSnapshot;
