//! Completion streaks
//!
//! Walks the plan in its own day order and counts consecutive days on which
//! every planned slot was logged.

use std::collections::HashSet;

use crate::metrics::{clamp_percent, round1};
use crate::models::{
    CompletedMealEvent, DayName, MealSlot, PlanDay, Streak, WeekCompletion, WeeklyPlan,
};

type SlotKey = (DayName, MealSlot);

/// Set of `(day, slot)` pairs that have at least one completed event
fn completed_slot_keys(events: &[CompletedMealEvent]) -> HashSet<SlotKey> {
    events.iter().map(CompletedMealEvent::slot_key).collect()
}

/// Whether every planned slot of `plan_day` is logged
///
/// `None` for a day with nothing planned: it neither extends nor breaks a streak.
fn day_completion(plan_day: &PlanDay, completed: &HashSet<SlotKey>) -> Option<bool> {
    let mut required = plan_day.planned_slots().peekable();
    required.peek()?;
    Some(required.all(|slot| completed.contains(&(plan_day.day, slot))))
}

/// Current and longest run of fully completed plan days
///
/// `current` is the run still open after the last plan day, which may be
/// shorter than `longest`.
pub fn streak(plan: &WeeklyPlan, events: &[CompletedMealEvent]) -> Streak {
    let completed = completed_slot_keys(events);

    let mut running: u32 = 0;
    let mut longest: u32 = 0;

    for plan_day in plan.days() {
        match day_completion(plan_day, &completed) {
            Some(true) => {
                running += 1;
                longest = longest.max(running);
            }
            Some(false) => running = 0,
            None => {
                tracing::debug!(day = %plan_day.day, "no meals planned, skipped for streak");
            }
        }
    }

    Streak {
        current: running,
        longest,
    }
}

/// Planned slots across the week versus those with a completed event
pub fn week_completion(plan: &WeeklyPlan, events: &[CompletedMealEvent]) -> WeekCompletion {
    let completed = completed_slot_keys(events);

    let mut planned_meals: u32 = 0;
    let mut completed_meals: u32 = 0;
    for plan_day in plan.days() {
        for slot in plan_day.planned_slots() {
            planned_meals += 1;
            if completed.contains(&(plan_day.day, slot)) {
                completed_meals += 1;
            }
        }
    }

    let rate_percent = if planned_meals == 0 {
        0.0
    } else {
        round1(clamp_percent(completed_meals as f64 / planned_meals as f64 * 100.0))
    };

    WeekCompletion {
        planned_meals,
        completed_meals,
        rate_percent,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PlannedMeal;
    use chrono::DateTime;

    fn full_day(day: DayName) -> PlanDay {
        MealSlot::ALL.iter().fold(PlanDay::new(day), |d, slot| {
            d.with_meal(*slot, PlannedMeal { dish: "x".to_string(), calories: 500.0, ..Default::default() })
        })
    }

    fn full_week() -> WeeklyPlan {
        WeeklyPlan::new(DayName::ALL.iter().map(|d| full_day(*d)).collect()).unwrap()
    }

    fn logged(day: DayName, slot: MealSlot) -> CompletedMealEvent {
        CompletedMealEvent {
            day,
            meal_type: slot,
            calories: 500.0,
            protein: 0.0,
            carbs: 0.0,
            fats: 0.0,
            date: DateTime::parse_from_rfc3339("2025-03-03T12:00:00Z").unwrap(),
        }
    }

    fn log_all(days: &[DayName]) -> Vec<CompletedMealEvent> {
        days.iter()
            .flat_map(|d| MealSlot::ALL.into_iter().map(move |s| logged(*d, s)))
            .collect()
    }

    #[test]
    fn test_empty_plan_has_no_streak() {
        let s = streak(&WeeklyPlan::empty(), &log_all(&DayName::ALL));
        assert_eq!(s, Streak { current: 0, longest: 0 });
    }

    #[test]
    fn test_full_week_streak() {
        let s = streak(&full_week(), &log_all(&DayName::ALL));
        assert_eq!(s, Streak { current: 7, longest: 7 });
    }

    #[test]
    fn test_partial_day_breaks_streak() {
        let mut events = log_all(&[
            DayName::Monday,
            DayName::Tuesday,
            DayName::Wednesday,
            DayName::Friday,
            DayName::Saturday,
            DayName::Sunday,
        ]);
        events.push(logged(DayName::Thursday, MealSlot::Breakfast));
        events.push(logged(DayName::Thursday, MealSlot::Lunch));

        let s = streak(&full_week(), &events);
        assert_eq!(s.longest, 3);
        assert_eq!(s.current, 3);
    }

    #[test]
    fn test_current_can_trail_longest() {
        let events = log_all(&[
            DayName::Monday,
            DayName::Tuesday,
            DayName::Wednesday,
            DayName::Thursday,
            DayName::Saturday,
        ]);
        let s = streak(&full_week(), &events);
        assert_eq!(s.longest, 4);
        assert_eq!(s.current, 0);
    }

    #[test]
    fn test_required_slots_follow_the_plan() {
        let plan = WeeklyPlan::new(vec![
            PlanDay::new(DayName::Monday)
                .with_meal(MealSlot::Breakfast, PlannedMeal::default()),
            full_day(DayName::Tuesday),
        ])
        .unwrap();
        let mut events = vec![logged(DayName::Monday, MealSlot::Breakfast)];
        events.extend(log_all(&[DayName::Tuesday]));

        assert_eq!(streak(&plan, &events), Streak { current: 2, longest: 2 });
    }

    #[test]
    fn test_follows_plan_order_and_skips_empty_days() {
        let plan = WeeklyPlan::new(vec![
            full_day(DayName::Sunday),
            PlanDay::new(DayName::Monday),
            full_day(DayName::Tuesday),
        ])
        .unwrap();
        let events = log_all(&[DayName::Sunday, DayName::Tuesday]);

        assert_eq!(streak(&plan, &events), Streak { current: 2, longest: 2 });
    }

    #[test]
    fn test_week_completion() {
        let plan = WeeklyPlan::new(vec![full_day(DayName::Monday), full_day(DayName::Tuesday)]).unwrap();
        let mut events = log_all(&[DayName::Monday]);
        // duplicates and off-plan days do not inflate the count
        events.push(logged(DayName::Monday, MealSlot::Lunch));
        events.push(logged(DayName::Friday, MealSlot::Lunch));

        let wc = week_completion(&plan, &events);
        assert_eq!(wc.planned_meals, 6);
        assert_eq!(wc.completed_meals, 3);
        assert_eq!(wc.rate_percent, 50.0);

        assert_eq!(week_completion(&WeeklyPlan::empty(), &events), WeekCompletion::default());
    }
}
