//! Plain-text snapshot summary
//!
//! Human-readable rendering used by the CLI's `--format text`.

use chrono::NaiveDate;

use crate::models::{AnalyticsSnapshot, GoalKind, NutrientProgress};

fn nutrient_line(label: &str, unit: &str, progress: &NutrientProgress) -> String {
    let pct = progress
        .percent()
        .map(|p| format!("{:.1}%", p))
        .unwrap_or_else(|| "-".to_string());
    format!(
        "  {:<9} {:>8.1} / {:>8.1} {:<4} {:>7}\n",
        label, progress.current, progress.target, unit, pct
    )
}

/// Render a snapshot as a short multi-line report
pub fn render_text(snapshot: &AnalyticsSnapshot, today: NaiveDate) -> String {
    let mut out = format!("Nutrition analytics for {}\n\n", today.format("%A %Y-%m-%d"));

    match (snapshot.bmi, snapshot.bmi_class) {
        (Some(bmi), Some(class)) => out.push_str(&format!("BMI: {:.1} ({})\n\n", bmi, class)),
        _ => out.push_str("BMI: n/a\n\n"),
    }

    out.push_str("Today (eaten / planned):\n");
    let n = &snapshot.nutrients;
    out.push_str(&nutrient_line("Calories", "kcal", &n.calories));
    out.push_str(&nutrient_line("Protein", "g", &n.protein));
    out.push_str(&nutrient_line("Fat", "g", &n.fat));
    out.push_str(&nutrient_line("Carbs", "g", &n.carbs));
    out.push('\n');

    let goal = &snapshot.weight_goal;
    match goal.kind {
        GoalKind::Unset => out.push_str(&format!(
            "Weight goal: not set (logged effort {:.1}%)\n",
            goal.progress_percent
        )),
        GoalKind::Loss | GoalKind::Gain => {
            out.push_str(&format!(
                "Weight goal: {} {:.1}% complete, {:.1} kg to go\n",
                goal.kind.as_str(),
                goal.progress_percent,
                goal.remaining_kg
            ));
            if let (Some(elapsed), Some(total)) = (goal.days_elapsed, goal.total_days) {
                out.push_str(&format!("  {} of {} days fully completed\n", elapsed, total));
            }
        }
    }

    let wc = &snapshot.week_completion;
    out.push_str(&format!(
        "Week: {}/{} planned meals logged ({:.1}%)\n",
        wc.completed_meals, wc.planned_meals, wc.rate_percent
    ));
    out.push_str(&format!(
        "Streak: {} day(s), best {}\n",
        snapshot.streak.current, snapshot.streak.longest
    ));

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::compute_analytics_snapshot;
    use crate::models::{BodyProfile, WeeklyPlan};

    #[test]
    fn test_render_unset_goal() {
        let today = NaiveDate::from_ymd_opt(2025, 3, 5).unwrap();
        let snap = compute_analytics_snapshot(&WeeklyPlan::empty(), &[], &BodyProfile::default(), today);
        let text = render_text(&snap, today);

        assert!(text.contains("Wednesday 2025-03-05"));
        assert!(text.contains("BMI: n/a"));
        assert!(text.contains("Weight goal: not set"));
        assert!(text.contains("Streak: 0 day(s), best 0"));
    }

    #[test]
    fn test_render_goal_and_bmi() {
        let today = NaiveDate::from_ymd_opt(2025, 3, 5).unwrap();
        let profile = BodyProfile::new(Some(67.3), Some(65.0), Some(170.0));
        let snap = compute_analytics_snapshot(&WeeklyPlan::empty(), &[], &profile, today);
        let text = render_text(&snap, today);

        assert!(text.contains("BMI: 23.3 (Fit)"));
        assert!(text.contains("Weight goal: Loss 0.0% complete, 2.3 kg to go"));
        assert!(text.contains("0 of 28 days fully completed"));
    }
}
