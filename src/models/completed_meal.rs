//! Completed meal model
//!
//! A logged record that the user actually ate a planned meal.

use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::Serialize;

use super::{DayName, MealSlot, Nutrition};

/// A logged, consumed meal
///
/// Several events may reference the same `(day, meal_type)`; they are summed
/// by every consumer, never collapsed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletedMealEvent {
    /// Plan weekday this meal was logged against
    pub day: DayName,
    pub meal_type: MealSlot,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
    /// When the meal was logged, in the user's own offset
    pub date: DateTime<FixedOffset>,
}

impl CompletedMealEvent {
    pub fn nutrition(&self) -> Nutrition {
        Nutrition {
            calories: self.calories,
            protein: self.protein,
            carbs: self.carbs,
            fat: self.fats,
        }
    }

    /// Calendar day of the timestamp, in the timestamp's own offset
    pub fn calendar_date(&self) -> NaiveDate {
        self.date.date_naive()
    }

    /// Key used to match against plan slots
    pub fn slot_key(&self) -> (DayName, MealSlot) {
        (self.day, self.meal_type)
    }
}
