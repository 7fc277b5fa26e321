//! Nutrient aggregation
//!
//! Turns today's plan day into macro targets and today's completed meals into
//! macro actuals.

use chrono::NaiveDate;

use crate::models::{CompletedMealEvent, NutrientProgress, NutrientSummary, Nutrition, PlanDay};

/// Planned macros for a day; an absent day targets nothing
pub fn planned_targets(plan_day: Option<&PlanDay>) -> Nutrition {
    plan_day
        .map(|day| day.planned_nutrition().sanitized().floor_at_zero())
        .unwrap_or_default()
}

/// Sum of every event logged on `today`, whatever slot it claims
///
/// Events are matched on calendar day, not on full timestamp. Repeated
/// events for the same slot all count.
pub fn consumed_on(events: &[CompletedMealEvent], today: NaiveDate) -> Nutrition {
    let total: Nutrition = events
        .iter()
        .filter(|event| event.calendar_date() == today)
        .map(|event| event.nutrition().sanitized())
        .sum();

    // the sum itself can overflow even when every event is finite
    total.sanitized().floor_at_zero()
}

/// Pair today's actuals with today's targets
pub fn aggregate(
    plan_day: Option<&PlanDay>,
    events: &[CompletedMealEvent],
    today: NaiveDate,
) -> NutrientSummary {
    let target = planned_targets(plan_day);
    let current = consumed_on(events, today);

    NutrientSummary {
        calories: NutrientProgress::new(current.calories, target.calories),
        protein: NutrientProgress::new(current.protein, target.protein),
        fat: NutrientProgress::new(current.fat, target.fat),
        carbs: NutrientProgress::new(current.carbs, target.carbs),
    }
}
