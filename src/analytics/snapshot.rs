//! Analytics snapshot facade
//!
//! Composes BMI, nutrient aggregation, weight-goal projection and streaks into
//! one immutable snapshot. Missing data never fails here; it resolves to null
//! or zero fields.

use chrono::{Datelike, NaiveDate};

use super::config::AnalyticsConfig;
use super::{nutrients, streak, weight_goal};
use crate::input::AnalyticsInput;
use crate::metrics::{classify_bmi, compute_bmi};
use crate::models::{AnalyticsSnapshot, BodyProfile, CompletedMealEvent, DayName, WeeklyPlan};

/// Snapshot calculator carrying its configuration
///
/// Holds no state between calls; the same inputs always give the same snapshot.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnalyticsEngine {
    config: AnalyticsConfig,
}

impl AnalyticsEngine {
    pub fn new(config: AnalyticsConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AnalyticsConfig {
        &self.config
    }

    /// Compute the snapshot for `today`
    ///
    /// Today's plan day is looked up by weekday name, so a plan from an
    /// earlier week is read against the current weekday.
    pub fn snapshot(
        &self,
        plan: &WeeklyPlan,
        events: &[CompletedMealEvent],
        profile: &BodyProfile,
        today: NaiveDate,
    ) -> AnalyticsSnapshot {
        let bmi = match (profile.current_weight, profile.height) {
            (Some(weight), Some(height)) => compute_bmi(weight, height),
            _ => None,
        };

        let today_name = DayName::from_weekday(today.weekday());
        let plan_day = plan.day(today_name);
        if plan_day.is_none() && !plan.is_empty() {
            tracing::debug!(day = %today_name, "today is not in the plan, targets are zero");
        }

        let snapshot = AnalyticsSnapshot {
            bmi,
            bmi_class: classify_bmi(bmi),
            nutrients: nutrients::aggregate(plan_day, events, today),
            weight_goal: weight_goal::project(profile, events, &self.config),
            streak: streak::streak(plan, events),
            week_completion: streak::week_completion(plan, events),
        };

        tracing::debug!(
            %today,
            plan_days = plan.days().len(),
            events = events.len(),
            progress = snapshot.weight_goal.progress_percent,
            streak = snapshot.streak.current,
            "analytics snapshot computed"
        );

        snapshot
    }

    /// Snapshot for a parsed input bundle; `fallback_today` is used when the
    /// bundle carries no date of its own
    pub fn snapshot_from_input(
        &self,
        input: &AnalyticsInput,
        fallback_today: NaiveDate,
    ) -> AnalyticsSnapshot {
        let today = input.today.unwrap_or(fallback_today);
        self.snapshot(&input.plan, &input.completed_meals, &input.profile, today)
    }
}

/// Snapshot with the default configuration
pub fn compute_analytics_snapshot(
    plan: &WeeklyPlan,
    events: &[CompletedMealEvent],
    profile: &BodyProfile,
    today: NaiveDate,
) -> AnalyticsSnapshot {
    AnalyticsEngine::default().snapshot(plan, events, profile, today)
}
