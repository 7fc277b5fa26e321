//! Weekly meal plan model
//!
//! A plan is a sequence of up to seven weekday records, each holding up to
//! three planned meals. Days are identified by weekday name only; the plan has
//! no absolute-date anchoring.

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::error::{AnalyticsError, AnalyticsResult};
use super::Nutrition;

/// Lower-cased English weekday name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayName {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl DayName {
    pub const ALL: [DayName; 7] = [
        DayName::Monday,
        DayName::Tuesday,
        DayName::Wednesday,
        DayName::Thursday,
        DayName::Friday,
        DayName::Saturday,
        DayName::Sunday,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DayName::Monday => "monday",
            DayName::Tuesday => "tuesday",
            DayName::Wednesday => "wednesday",
            DayName::Thursday => "thursday",
            DayName::Friday => "friday",
            DayName::Saturday => "saturday",
            DayName::Sunday => "sunday",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "monday" => Some(DayName::Monday),
            "tuesday" => Some(DayName::Tuesday),
            "wednesday" => Some(DayName::Wednesday),
            "thursday" => Some(DayName::Thursday),
            "friday" => Some(DayName::Friday),
            "saturday" => Some(DayName::Saturday),
            "sunday" => Some(DayName::Sunday),
            _ => None,
        }
    }

    pub fn from_weekday(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Mon => DayName::Monday,
            Weekday::Tue => DayName::Tuesday,
            Weekday::Wed => DayName::Wednesday,
            Weekday::Thu => DayName::Thursday,
            Weekday::Fri => DayName::Friday,
            Weekday::Sat => DayName::Saturday,
            Weekday::Sun => DayName::Sunday,
        }
    }
}

impl std::fmt::Display for DayName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Meal slot; exactly three per day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Dinner,
}

impl MealSlot {
    pub const ALL: [MealSlot; 3] = [MealSlot::Breakfast, MealSlot::Lunch, MealSlot::Dinner];

    pub fn as_str(&self) -> &'static str {
        match self {
            MealSlot::Breakfast => "breakfast",
            MealSlot::Lunch => "lunch",
            MealSlot::Dinner => "dinner",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "breakfast" => Some(MealSlot::Breakfast),
            "lunch" => Some(MealSlot::Lunch),
            "dinner" => Some(MealSlot::Dinner),
            _ => None,
        }
    }
}

impl std::fmt::Display for MealSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A meal prescribed by the plan
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PlannedMeal {
    pub dish: String,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
}

impl PlannedMeal {
    pub fn nutrition(&self) -> Nutrition {
        Nutrition {
            calories: self.calories,
            protein: self.protein,
            carbs: self.carbs,
            fat: self.fats,
        }
    }
}

/// The prescribed meals for one weekday
///
/// An absent slot means "no meal planned", which is different from a
/// planned meal with zero calories.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanDay {
    pub day: DayName,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breakfast: Option<PlannedMeal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lunch: Option<PlannedMeal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dinner: Option<PlannedMeal>,
}

impl PlanDay {
    /// A day with nothing planned yet
    pub fn new(day: DayName) -> Self {
        Self {
            day,
            breakfast: None,
            lunch: None,
            dinner: None,
        }
    }

    /// Builder-style slot assignment
    pub fn with_meal(mut self, slot: MealSlot, meal: PlannedMeal) -> Self {
        match slot {
            MealSlot::Breakfast => self.breakfast = Some(meal),
            MealSlot::Lunch => self.lunch = Some(meal),
            MealSlot::Dinner => self.dinner = Some(meal),
        }
        self
    }

    pub fn meal(&self, slot: MealSlot) -> Option<&PlannedMeal> {
        match slot {
            MealSlot::Breakfast => self.breakfast.as_ref(),
            MealSlot::Lunch => self.lunch.as_ref(),
            MealSlot::Dinner => self.dinner.as_ref(),
        }
    }

    /// Slots that actually carry a planned meal, in breakfast-lunch-dinner order
    pub fn planned_slots(&self) -> impl Iterator<Item = MealSlot> + '_ {
        MealSlot::ALL
            .into_iter()
            .filter(move |slot| self.meal(*slot).is_some())
    }

    /// Sum of the populated slots; absent slots contribute zero
    pub fn planned_nutrition(&self) -> Nutrition {
        MealSlot::ALL
            .iter()
            .filter_map(|slot| self.meal(*slot))
            .map(PlannedMeal::nutrition)
            .sum()
    }
}

/// An ordered week of plan days (0 to 7 entries, no repeated weekday)
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(into = "Vec<PlanDay>")]
pub struct WeeklyPlan {
    days: Vec<PlanDay>,
}

impl WeeklyPlan {
    /// Build a plan, rejecting more than seven days or a repeated weekday
    pub fn new(days: Vec<PlanDay>) -> AnalyticsResult<Self> {
        if days.len() > DayName::ALL.len() {
            return Err(AnalyticsError::malformed(format!(
                "weekly plan has {} days, at most 7 allowed",
                days.len()
            )));
        }

        let mut seen = Vec::with_capacity(days.len());
        for plan_day in &days {
            if seen.contains(&plan_day.day) {
                return Err(AnalyticsError::malformed(format!(
                    "weekly plan lists {} more than once",
                    plan_day.day
                )));
            }
            seen.push(plan_day.day);
        }

        Ok(Self { days })
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Days in the plan's own order
    pub fn days(&self) -> &[PlanDay] {
        &self.days
    }

    /// Look up a day by weekday name
    pub fn day(&self, name: DayName) -> Option<&PlanDay> {
        self.days.iter().find(|d| d.day == name)
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Total number of populated slots across the week
    pub fn planned_meal_count(&self) -> usize {
        self.days.iter().map(|d| d.planned_slots().count()).sum()
    }
}

impl From<WeeklyPlan> for Vec<PlanDay> {
    fn from(plan: WeeklyPlan) -> Self {
        plan.days
    }
}
