//! Weight-goal projection
//!
//! Estimates how far along a user is toward their goal weight. The time
//! horizon is a step function of the weight delta (slower for gains than for
//! losses); progress is the share of that horizon covered by fully completed
//! days, plus a small bonus for strong adherence.

use std::collections::{BTreeMap, HashSet};

use chrono::NaiveDate;

use super::config::AnalyticsConfig;
use crate::metrics::{clamp_percent, round1, safe_number};
use crate::models::{BodyProfile, CompletedMealEvent, GoalKind, MealSlot, WeightGoal};

// ============================================================================
// Projection Constants
// ============================================================================

pub const DAYS_PER_WEEK: u32 = 7;
pub const MEALS_PER_DAY: u32 = 3;

/// Meal count the effort proxy is measured against when no goal is set
const UNSET_WINDOW_MEALS: f64 = (DAYS_PER_WEEK * MEALS_PER_DAY) as f64;

/// Weight of the completion rate in the combined adherence score
const COMPLETION_WEIGHT: f64 = 0.6;
/// Weight of calorie adherence in the combined adherence score
const CALORIE_WEIGHT: f64 = 0.4;
/// Combined adherence (percent) above which a bonus is earned
const BONUS_THRESHOLD: f64 = 80.0;
/// Bonus points per adherence point above the threshold
const BONUS_RATE: f64 = 0.1;
/// Bonus cap, in progress percentage points
const MAX_BONUS: f64 = 5.0;

/// Delta upper bounds (kg) of the first three timeframe buckets
const DELTA_BUCKETS: [f64; 3] = [2.0, 5.0, 10.0];
/// Weeks per bucket at roughly 0.5-1 kg per week
const LOSS_WEEKS: [u32; 4] = [2, 4, 8, 12];
/// Weeks per bucket at roughly 0.25-0.5 kg per week
const GAIN_WEEKS: [u32; 4] = [4, 8, 16, 24];

/// Realistic number of weeks to cover `delta_kg`
pub fn timeframe_weeks(delta_kg: f64, is_loss: bool) -> u32 {
    let table = if is_loss { &LOSS_WEEKS } else { &GAIN_WEEKS };
    let bucket = DELTA_BUCKETS
        .iter()
        .position(|bound| delta_kg <= *bound)
        .unwrap_or(DELTA_BUCKETS.len());
    table[bucket]
}

/// Distinct calendar dates on which breakfast, lunch and dinner were all logged
pub fn fully_completed_days(events: &[CompletedMealEvent]) -> u32 {
    let mut slots_by_date: BTreeMap<NaiveDate, HashSet<MealSlot>> = BTreeMap::new();
    for event in events {
        slots_by_date
            .entry(event.calendar_date())
            .or_default()
            .insert(event.meal_type);
    }

    slots_by_date
        .values()
        .filter(|slots| slots.len() == MealSlot::ALL.len())
        .count() as u32
}

/// Mean calories per calendar date that has any logged meal
pub fn average_daily_calories(events: &[CompletedMealEvent]) -> f64 {
    let mut calories_by_date: BTreeMap<NaiveDate, f64> = BTreeMap::new();
    for event in events {
        *calories_by_date.entry(event.calendar_date()).or_insert(0.0) +=
            safe_number(&event.calories, 0.0);
    }

    if calories_by_date.is_empty() {
        return 0.0;
    }
    calories_by_date.values().sum::<f64>() / calories_by_date.len() as f64
}

/// Bonus points for adherence above the threshold, capped
///
/// Zero whenever no day was fully completed.
pub fn adherence_bonus(
    events: &[CompletedMealEvent],
    total_days: u32,
    days_elapsed: u32,
    target_calories: f64,
) -> f64 {
    if days_elapsed == 0 || total_days == 0 || target_calories <= 0.0 {
        return 0.0;
    }

    let possible_meals = (total_days * MEALS_PER_DAY) as f64;
    let completion_rate = events.len() as f64 / possible_meals * 100.0;
    let calorie_adherence = (average_daily_calories(events) / target_calories * 100.0).min(100.0);

    let combined = COMPLETION_WEIGHT * completion_rate + CALORIE_WEIGHT * calorie_adherence;
    let bonus = ((combined - BONUS_THRESHOLD) * BONUS_RATE).clamp(0.0, MAX_BONUS);

    tracing::debug!(completion_rate, calorie_adherence, combined, bonus, "adherence bonus");

    // a NaN from degenerate input earns nothing
    safe_number(&bonus, 0.0)
}

/// Project progress toward the profile's goal weight
pub fn project(
    profile: &BodyProfile,
    events: &[CompletedMealEvent],
    config: &AnalyticsConfig,
) -> WeightGoal {
    let Some((current, goal)) = profile.weight_pair() else {
        return unset_goal(events);
    };

    let is_loss = current > goal;
    let kind = if is_loss { GoalKind::Loss } else { GoalKind::Gain };
    let delta = (current - goal).abs();

    let weeks = timeframe_weeks(delta, is_loss);
    let total_days = weeks * DAYS_PER_WEEK;
    let days_elapsed = fully_completed_days(events);

    if delta == 0.0 {
        return WeightGoal {
            kind,
            progress_percent: 100.0,
            remaining_kg: 0.0,
            total_days: Some(total_days),
            days_elapsed: Some(days_elapsed),
        };
    }

    let time_progress = (days_elapsed as f64 / total_days as f64 * 100.0).min(100.0);
    let bonus = adherence_bonus(
        events,
        total_days,
        days_elapsed,
        config.target_calories(is_loss),
    );

    let progress_percent = clamp_percent(time_progress + bonus);
    let remaining_kg = round1(delta * (1.0 - time_progress / 100.0));

    tracing::debug!(
        kind = kind.as_str(),
        delta,
        total_days,
        days_elapsed,
        time_progress,
        progress_percent,
        "weight goal projected"
    );

    WeightGoal {
        kind,
        progress_percent,
        remaining_kg,
        total_days: Some(total_days),
        days_elapsed: Some(days_elapsed),
    }
}

/// No goal to measure against: report logged effort over a 21-meal week
fn unset_goal(events: &[CompletedMealEvent]) -> WeightGoal {
    WeightGoal {
        kind: GoalKind::Unset,
        progress_percent: clamp_percent(events.len() as f64 / UNSET_WINDOW_MEALS * 100.0),
        remaining_kg: 0.0,
        total_days: None,
        days_elapsed: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DayName;
    use chrono::{DateTime, Duration, FixedOffset};

    fn base_time() -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339("2025-03-03T08:00:00+00:00").unwrap()
    }

    fn logged(day_offset: i64, slot: MealSlot, calories: f64) -> CompletedMealEvent {
        CompletedMealEvent {
            day: DayName::Monday,
            meal_type: slot,
            calories,
            protein: 0.0,
            carbs: 0.0,
            fats: 0.0,
            date: base_time() + Duration::days(day_offset),
        }
    }

    /// `days` fully logged days, each meal at `calories`
    fn full_days(days: i64, calories: f64) -> Vec<CompletedMealEvent> {
        (0..days)
            .flat_map(|d| MealSlot::ALL.into_iter().map(move |s| logged(d, s, calories)))
            .collect()
    }

    fn profile(current: f64, goal: f64) -> BodyProfile {
        BodyProfile::new(Some(current), Some(goal), None)
    }

    #[test]
    fn test_timeframe_buckets() {
        assert_eq!(timeframe_weeks(2.0, true), 2);
        assert_eq!(timeframe_weeks(2.1, true), 4);
        assert_eq!(timeframe_weeks(5.0, true), 4);
        assert_eq!(timeframe_weeks(10.0, true), 8);
        assert_eq!(timeframe_weeks(10.5, true), 12);

        assert_eq!(timeframe_weeks(1.0, false), 4);
        assert_eq!(timeframe_weeks(4.0, false), 8);
        assert_eq!(timeframe_weeks(9.0, false), 16);
        assert_eq!(timeframe_weeks(30.0, false), 24);
    }

    #[test]
    fn test_partial_days_do_not_count() {
        let mut events = full_days(2, 500.0);
        events.push(logged(5, MealSlot::Breakfast, 400.0));
        events.push(logged(5, MealSlot::Lunch, 400.0));
        // repeated slots on one date are still one slot
        events.push(logged(6, MealSlot::Dinner, 400.0));
        events.push(logged(6, MealSlot::Dinner, 400.0));
        events.push(logged(6, MealSlot::Dinner, 400.0));

        assert_eq!(fully_completed_days(&events), 2);
    }

    #[test]
    fn test_unset_goal_uses_effort_proxy() {
        let events: Vec<_> = (0..6).map(|d| logged(d, MealSlot::Lunch, 500.0)).collect();
        let goal = project(&BodyProfile::default(), &events, &AnalyticsConfig::default());

        assert_eq!(goal.kind, GoalKind::Unset);
        assert!((goal.progress_percent - 28.571).abs() < 0.001);
        assert_eq!(goal.remaining_kg, 0.0);
        assert_eq!(goal.total_days, None);
    }

    #[test]
    fn test_unset_goal_is_capped() {
        let events = full_days(10, 500.0);
        let goal = project(&profile(80.0, 0.0), &events, &AnalyticsConfig::default());
        assert_eq!(goal.kind, GoalKind::Unset);
        assert_eq!(goal.progress_percent, 100.0);
    }

    #[test]
    fn test_zero_delta_is_complete() {
        for events in [Vec::new(), full_days(3, 700.0)] {
            let goal = project(&profile(70.0, 70.0), &events, &AnalyticsConfig::default());
            assert_eq!(goal.progress_percent, 100.0);
            assert_eq!(goal.remaining_kg, 0.0);
        }
    }

    #[test]
    fn test_loss_progress_without_bonus() {
        // 8 kg loss -> 8 weeks -> 56 days; 14 full days = 25%
        // 42 meals / 168 possible = 25% completion, low adherence, no bonus
        let events = full_days(14, 500.0);
        let goal = project(&profile(88.0, 80.0), &events, &AnalyticsConfig::default());

        assert_eq!(goal.kind, GoalKind::Loss);
        assert_eq!(goal.total_days, Some(56));
        assert_eq!(goal.days_elapsed, Some(14));
        assert!((goal.progress_percent - 25.0).abs() < 0.001);
        assert_eq!(goal.remaining_kg, 6.0);
    }

    #[test]
    fn test_gain_progress() {
        // 3 kg gain -> 8 weeks -> 56 days
        let events = full_days(7, 800.0);
        let goal = project(&profile(60.0, 63.0), &events, &AnalyticsConfig::default());

        assert_eq!(goal.kind, GoalKind::Gain);
        assert_eq!(goal.total_days, Some(56));
        assert!((goal.progress_percent - 12.5).abs() < 0.001);
        assert_eq!(goal.remaining_kg, 2.6);
    }

    #[test]
    fn test_bonus_for_strong_adherence() {
        // 2 kg loss -> 14 days; 14 full days at 1500 kcal/day
        // completion 100%, calories 100% -> combined 100 -> bonus (100 - 80) * 0.1 = 2
        let events = full_days(14, 500.0);
        let goal = project(&profile(72.0, 70.0), &events, &AnalyticsConfig::default());

        assert_eq!(goal.total_days, Some(14));
        assert_eq!(goal.progress_percent, 100.0);
        assert_eq!(goal.remaining_kg, 0.0);

        let bonus = adherence_bonus(&events, 14, 14, 1500.0);
        assert!((bonus - 2.0).abs() < 0.001);
    }

    #[test]
    fn test_bonus_is_capped() {
        // completion far above 100% pushes combined well past 130
        let events = full_days(14, 500.0);
        let doubled: Vec<_> = events.iter().chain(events.iter()).cloned().collect();
        assert_eq!(adherence_bonus(&doubled, 14, 14, 1500.0), 5.0);
    }

    #[test]
    fn test_no_bonus_without_completed_days() {
        // plenty of breakfasts on distinct dates, but no complete day
        let events: Vec<_> = (0..60).map(|d| logged(d, MealSlot::Breakfast, 2000.0)).collect();
        assert_eq!(adherence_bonus(&events, 14, 0, 1500.0), 0.0);

        let goal = project(&profile(72.0, 70.0), &events, &AnalyticsConfig::default());
        assert_eq!(goal.days_elapsed, Some(0));
        assert_eq!(goal.progress_percent, 0.0);
        assert_eq!(goal.remaining_kg, 2.0);
    }

    #[test]
    fn test_configured_target_changes_bonus() {
        // 2 kg loss -> 14 days; 10 full days at 1500 kcal/day
        let events = full_days(10, 500.0);
        let lenient = project(&profile(72.0, 70.0), &events, &AnalyticsConfig::default());

        // completion 71.4, calories 50 -> combined 62.9 -> no bonus
        let strict_config = AnalyticsConfig { loss_target_calories: 3000.0, ..AnalyticsConfig::default() };
        let strict = project(&profile(72.0, 70.0), &events, &strict_config);

        assert!((strict.progress_percent - 71.428).abs() < 0.001);
        assert!(lenient.progress_percent > strict.progress_percent);
        assert_eq!(lenient.remaining_kg, strict.remaining_kg);
    }

    #[test]
    fn test_huge_weights_stay_finite() {
        let events = full_days(14, 500.0);
        for (current, goal) in [(1e308, 70.0), (70.0, f64::MAX)] {
            let g = project(&profile(current, goal), &events, &AnalyticsConfig::default());
            assert!(g.remaining_kg.is_finite());
            assert!(g.remaining_kg > 0.0);
            assert!((0.0..=100.0).contains(&g.progress_percent));
        }
    }

    #[test]
    fn test_progress_stays_bounded() {
        let events = full_days(400, 5000.0);
        for (current, goal) in [(200.0, 40.0), (40.0, 200.0), (70.5, 70.0)] {
            let g = project(&profile(current, goal), &events, &AnalyticsConfig::default());
            assert!((0.0..=100.0).contains(&g.progress_percent));
            assert!(g.remaining_kg >= 0.0);
        }
    }
}
