//! Data models
//!
//! Plain records for the engine's inputs and its snapshot output.

mod completed_meal;
mod nutrition;
mod plan;
mod profile;
mod snapshot;

pub use completed_meal::CompletedMealEvent;
pub use nutrition::Nutrition;
pub use plan::{DayName, MealSlot, PlanDay, PlannedMeal, WeeklyPlan};
pub use profile::BodyProfile;
pub use snapshot::{
    AnalyticsSnapshot, GoalKind, NutrientProgress, NutrientSummary, Streak, WeekCompletion,
    WeightGoal,
};
