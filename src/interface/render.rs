use std::fmt;

use crate::models::PlanResult;

/// Plain-text view of a plan, one block per weekday.
pub struct PlanText<'a>(pub &'a PlanResult);

impl fmt::Display for PlanText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let plan = self.0;

        writeln!(f, "=== Your Weekly Meal Plan ===")?;
        writeln!(f)?;
        writeln!(f, "Estimated daily calories: {} kcal", plan.daily_calories)?;
        writeln!(
            f,
            "Daily water target: {} ml ({:.1} L)",
            plan.water_intake_ml,
            plan.water_intake_litres()
        )?;

        let label_width = plan
            .summary
            .meals()
            .map(|(slot, _)| slot.label().len())
            .max()
            .unwrap_or(10);

        for (day, meals) in plan.weekly_plan.days() {
            writeln!(f)?;
            writeln!(f, "--- {} ---", day)?;
            for (slot, meal) in meals.meals() {
                writeln!(
                    f,
                    "  {:<width$} ({}) ~{:>4} kcal | {}",
                    slot.label(),
                    meal.time,
                    meal.calories,
                    meal.suggestion,
                    width = label_width
                )?;
            }
        }

        Ok(())
    }
}

/// Format a plan as plain text.
pub fn format_plan(plan: &PlanResult) -> String {
    PlanText(plan).to_string()
}

/// Print a plan to stdout.
pub fn display_plan(plan: &PlanResult) {
    println!();
    print!("{}", format_plan(plan));
    println!();
}
