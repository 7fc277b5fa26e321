//! Analytics snapshot model
//!
//! The immutable output handed to presentation and reporting layers.

use serde::{Deserialize, Serialize};

use crate::metrics::{round1, BmiClass};

/// A current/target pair for one macro-nutrient
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NutrientProgress {
    pub current: f64,
    pub target: f64,
}

impl NutrientProgress {
    pub fn new(current: f64, target: f64) -> Self {
        Self { current, target }
    }

    /// Share of the target reached, in percent (one decimal)
    ///
    /// `None` when nothing is targeted.
    pub fn percent(&self) -> Option<f64> {
        if self.target <= 0.0 {
            return None;
        }
        let pct = self.current / self.target * 100.0;
        pct.is_finite().then(|| round1(pct))
    }
}

/// Today's macro-nutrients, consumed versus planned
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NutrientSummary {
    pub calories: NutrientProgress,
    pub protein: NutrientProgress,
    pub fat: NutrientProgress,
    pub carbs: NutrientProgress,
}

/// Direction of the weight goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GoalKind {
    Loss,
    Gain,
    Unset,
}

impl GoalKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            GoalKind::Loss => "Loss",
            GoalKind::Gain => "Gain",
            GoalKind::Unset => "Unset",
        }
    }
}

/// Weight-goal projection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightGoal {
    pub kind: GoalKind,
    /// Always within [0, 100]
    pub progress_percent: f64,
    pub remaining_kg: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_days: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days_elapsed: Option<u32>,
}

/// Consecutive fully-completed plan days
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Streak {
    pub current: u32,
    pub longest: u32,
}

/// Planned meals versus planned meals actually logged, across the week
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekCompletion {
    pub planned_meals: u32,
    pub completed_meals: u32,
    pub rate_percent: f64,
}

/// Everything the dashboard needs, computed in one pass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSnapshot {
    pub bmi: Option<f64>,
    pub bmi_class: Option<BmiClass>,
    pub nutrients: NutrientSummary,
    pub weight_goal: WeightGoal,
    pub streak: Streak,
    pub week_completion: WeekCompletion,
}
