//! JSON input boundary
//!
//! Parses the records handed over by the plan, completion-log and profile
//! providers. Missing values are defaulted; wrong shapes are rejected with a
//! typed error, since the calculators cannot guess what was meant.

use std::path::Path;

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, NaiveDateTime};
use serde_json::{Map, Value};

use crate::error::{AnalyticsError, AnalyticsResult};
use crate::metrics::{safe_number, NumericInput};
use crate::models::{
    BodyProfile, CompletedMealEvent, DayName, MealSlot, PlanDay, PlannedMeal, WeeklyPlan,
};

/// Keys that look like meal slots but are not supported
const UNSUPPORTED_SLOT_KEYS: [&str; 3] = ["snack", "snacks", "brunch"];

/// Everything one snapshot needs, as received from the providers
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyticsInput {
    pub plan: WeeklyPlan,
    pub completed_meals: Vec<CompletedMealEvent>,
    pub profile: BodyProfile,
    /// Date to evaluate "today" against, if the caller pinned one
    pub today: Option<NaiveDate>,
}

impl AnalyticsInput {
    /// Read and parse a bundle file
    pub fn from_path(path: impl AsRef<Path>) -> AnalyticsResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    /// Parse a bundle from JSON text
    pub fn from_json_str(json: &str) -> AnalyticsResult<Self> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(&value)
    }

    /// Parse a bundle object: `{ plan, completedMeals, profile, today }`
    ///
    /// Every key is optional; absent or null values mean "no data".
    pub fn from_value(value: &Value) -> AnalyticsResult<Self> {
        let obj = value
            .as_object()
            .ok_or_else(|| AnalyticsError::malformed("input bundle must be a JSON object"))?;

        let plan = match present(obj, &["plan"]) {
            Some(v) => parse_weekly_plan(v)?,
            None => WeeklyPlan::empty(),
        };

        let completed_meals = match present(obj, &["completedMeals", "completed_meals"]) {
            Some(v) => parse_completed_events(v)?,
            None => Vec::new(),
        };

        let profile = match present(obj, &["profile"]) {
            Some(v) => parse_profile(v)?,
            None => BodyProfile::default(),
        };

        let today = match present(obj, &["today"]) {
            Some(v) => Some(parse_date(v)?),
            None => None,
        };

        Ok(Self {
            plan,
            completed_meals,
            profile,
            today,
        })
    }
}

/// First non-null value among `keys`
fn present<'a>(obj: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .filter_map(|k| obj.get(*k))
        .find(|v| !v.is_null())
}

fn expect_object<'a>(value: &'a Value, what: &str) -> AnalyticsResult<&'a Map<String, Value>> {
    value
        .as_object()
        .ok_or_else(|| AnalyticsError::malformed(format!("{} must be an object, got {}", what, kind_of(value))))
}

fn expect_array<'a>(value: &'a Value, what: &str) -> AnalyticsResult<&'a Vec<Value>> {
    value
        .as_array()
        .ok_or_else(|| AnalyticsError::malformed(format!("{} must be an array, got {}", what, kind_of(value))))
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn parse_day_name(value: Option<&Value>, what: &str) -> AnalyticsResult<DayName> {
    let raw = value
        .and_then(Value::as_str)
        .ok_or_else(|| AnalyticsError::malformed(format!("{} is missing a day name", what)))?;
    DayName::from_str(raw).ok_or_else(|| AnalyticsError::InvalidDay(raw.to_string()))
}

// ============================================================================
// Weekly Plan
// ============================================================================

/// Parse an ordered array of plan days
pub fn parse_weekly_plan(value: &Value) -> AnalyticsResult<WeeklyPlan> {
    let items = expect_array(value, "weekly plan")?;

    let days = items
        .iter()
        .enumerate()
        .map(|(i, item)| parse_plan_day(item, i))
        .collect::<AnalyticsResult<Vec<_>>>()?;

    WeeklyPlan::new(days)
}

fn parse_plan_day(value: &Value, index: usize) -> AnalyticsResult<PlanDay> {
    let what = format!("plan day #{}", index);
    let obj = expect_object(value, &what)?;
    let day = parse_day_name(obj.get("day"), &what)?;

    let mut plan_day = PlanDay::new(day);
    for slot in MealSlot::ALL {
        match obj.get(slot.as_str()) {
            None | Some(Value::Null) => {}
            Some(Value::Object(meal)) => {
                plan_day = plan_day.with_meal(slot, parse_planned_meal(meal));
            }
            Some(other) => {
                return Err(AnalyticsError::malformed(format!(
                    "{} {} must be an object or null, got {}",
                    what,
                    slot,
                    kind_of(other)
                )));
            }
        }
    }

    for key in UNSUPPORTED_SLOT_KEYS {
        if obj.get(key).is_some_and(|v| !v.is_null()) {
            tracing::warn!(day = %day, key, "ignoring unsupported meal slot in plan");
        }
    }

    Ok(plan_day)
}

fn parse_planned_meal(obj: &Map<String, Value>) -> PlannedMeal {
    PlannedMeal {
        dish: obj
            .get("dish")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
        calories: safe_number(&obj.get("calories"), 0.0),
        protein: safe_number(&obj.get("protein"), 0.0),
        carbs: safe_number(&obj.get("carbs"), 0.0),
        fats: safe_number(&obj.get("fats"), 0.0),
    }
}

// ============================================================================
// Completed Meals
// ============================================================================

/// Parse the completed-meal log
pub fn parse_completed_events(value: &Value) -> AnalyticsResult<Vec<CompletedMealEvent>> {
    let items = expect_array(value, "completed meals")?;

    items
        .iter()
        .enumerate()
        .map(|(i, item)| parse_completed_event(item, i))
        .collect()
}

fn parse_completed_event(value: &Value, index: usize) -> AnalyticsResult<CompletedMealEvent> {
    let what = format!("completed meal #{}", index);
    let obj = expect_object(value, &what)?;

    let day = parse_day_name(obj.get("day"), &what)?;

    let slot_raw = obj
        .get("mealType")
        .or_else(|| obj.get("meal_type"))
        .and_then(Value::as_str)
        .ok_or_else(|| AnalyticsError::malformed(format!("{} is missing mealType", what)))?;
    let meal_type =
        MealSlot::from_str(slot_raw).ok_or_else(|| AnalyticsError::InvalidSlot(slot_raw.to_string()))?;

    let date = match obj.get("date") {
        Some(v) if !v.is_null() => parse_timestamp(v)?,
        _ => return Err(AnalyticsError::malformed(format!("{} is missing date", what))),
    };

    let dated_as = DayName::from_weekday(date.weekday());
    if dated_as != day {
        tracing::warn!(%day, %dated_as, index, "completed meal weekday disagrees with its date");
    }

    Ok(CompletedMealEvent {
        day,
        meal_type,
        calories: safe_number(&obj.get("calories"), 0.0),
        protein: safe_number(&obj.get("protein"), 0.0),
        carbs: safe_number(&obj.get("carbs"), 0.0),
        fats: safe_number(&obj.get("fats"), 0.0),
        date,
    })
}

/// Parse a timestamp
///
/// Accepts RFC 3339, an offset-less date-time or bare date (read as UTC), or
/// epoch milliseconds.
pub fn parse_timestamp(value: &Value) -> AnalyticsResult<DateTime<FixedOffset>> {
    let invalid = |reason: &str| AnalyticsError::InvalidTimestamp {
        value: value.to_string(),
        reason: reason.to_string(),
    };

    match value {
        Value::String(s) => {
            let s = s.trim();
            if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
                return Ok(dt);
            }
            if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
                return Ok(naive.and_utc().fixed_offset());
            }
            if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
                let midnight = date
                    .and_hms_opt(0, 0, 0)
                    .ok_or_else(|| invalid("date has no midnight"))?;
                return Ok(midnight.and_utc().fixed_offset());
            }
            Err(invalid("expected RFC 3339, YYYY-MM-DDTHH:MM:SS or YYYY-MM-DD"))
        }
        Value::Number(_) => {
            let millis = value
                .as_finite_f64()
                .ok_or_else(|| invalid("not a finite number"))?;
            DateTime::from_timestamp_millis(millis as i64)
                .map(|dt| dt.fixed_offset())
                .ok_or_else(|| invalid("epoch milliseconds out of range"))
        }
        _ => Err(invalid("expected a string or epoch milliseconds")),
    }
}

fn parse_date(value: &Value) -> AnalyticsResult<NaiveDate> {
    let raw = value.as_str().ok_or_else(|| AnalyticsError::InvalidTimestamp {
        value: value.to_string(),
        reason: "today must be a YYYY-MM-DD string".to_string(),
    })?;

    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|e| AnalyticsError::InvalidTimestamp {
        value: raw.to_string(),
        reason: e.to_string(),
    })
}

// ============================================================================
// Profile
// ============================================================================

/// Parse body metrics; non-numeric fields count as absent
pub fn parse_profile(value: &Value) -> AnalyticsResult<BodyProfile> {
    let obj = expect_object(value, "profile")?;

    let field = |keys: &[&str]| present(obj, keys).and_then(|v| v.as_finite_f64());

    Ok(BodyProfile::new(
        field(&["currentWeight", "current_weight"]),
        field(&["goalWeight", "goal_weight"]),
        field(&["height"]),
    ))
}
