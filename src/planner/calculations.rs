use crate::models::{ActivityLevel, Goal, MealSlot};
use crate::planner::constants::*;

/// Round half-up, so `-2.5` becomes `-2` rather than `-3`.
///
/// `None` when the result is not finite or lies beyond [`MAX_EXACT_INTEGER`].
#[inline]
pub fn round_half_up(value: f64) -> Option<i64> {
    let rounded = (value + 0.5).floor();
    if rounded.is_finite() && rounded.abs() <= MAX_EXACT_INTEGER {
        Some(rounded as i64)
    } else {
        None
    }
}

/// Basal metabolic rate (kcal/day) from the sex-averaged Mifflin–St Jeor formula.
///
/// `BMR = 10·weight + 6.25·height − 5·age − 78`
pub fn basal_metabolic_rate(weight_kg: f64, height_cm: f64, age_years: u32) -> f64 {
    BMR_WEIGHT_COEF * weight_kg + BMR_HEIGHT_COEF * height_cm
        - BMR_AGE_COEF * f64::from(age_years)
        + BMR_AVERAGED_OFFSET
}

/// Multiplier for an activity level. Unset or unrecognised counts as sedentary.
pub fn activity_multiplier(level: Option<ActivityLevel>) -> f64 {
    match level {
        Some(ActivityLevel::LightlyActive) => LIGHTLY_ACTIVE_MULT,
        Some(ActivityLevel::Active) => ACTIVE_MULT,
        Some(ActivityLevel::VeryActive) => VERY_ACTIVE_MULT,
        Some(ActivityLevel::Sedentary) | None => SEDENTARY_MULT,
    }
}

/// Total daily energy expenditure.
pub fn activity_adjusted_calories(bmr: f64, level: Option<ActivityLevel>) -> f64 {
    bmr * activity_multiplier(level)
}

/// Flat calorie offset for a goal. Unset or unrecognised means no adjustment.
pub fn goal_adjustment(goal: Option<Goal>) -> f64 {
    match goal {
        Some(Goal::LoseWeight) => WEIGHT_LOSS_DEFICIT,
        Some(Goal::GainMuscle) | Some(Goal::GainWeight) => WEIGHT_GAIN_SURPLUS,
        Some(Goal::Maintain) | None => 0.0,
    }
}

/// Rounded daily calorie target, `None` when it is out of range.
pub fn daily_calories(
    weight_kg: f64,
    height_cm: f64,
    age_years: u32,
    level: Option<ActivityLevel>,
    goal: Option<Goal>,
) -> Option<i64> {
    let bmr = basal_metabolic_rate(weight_kg, height_cm, age_years);
    let active = activity_adjusted_calories(bmr, level);
    let target = active + goal_adjustment(goal);

    log::debug!(
        "bmr={:.2} active={:.4} target={:.4} (activity={}, goal={})",
        bmr,
        active,
        target,
        level.map_or("unset", ActivityLevel::as_str),
        goal.map_or("unset", Goal::as_str)
    );

    round_half_up(target)
}

/// Daily water intake in millilitres, `None` when it is out of range.
pub fn water_intake_ml(weight_kg: f64) -> Option<i64> {
    round_half_up(weight_kg * WATER_ML_PER_KG)
}

/// Calories served at one meal.
///
/// A daily total produced by [`daily_calories`] is within the exact range,
/// so its shares are too.
pub fn slot_calories(daily_calories: i64, slot: MealSlot) -> i64 {
    let share = (daily_calories as f64 * slot.proportion() + 0.5).floor();
    share as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(2.5), Some(3));
        assert_eq!(round_half_up(2.49), Some(2));
        assert_eq!(round_half_up(-2.5), Some(-2));
        assert_eq!(round_half_up(-2.51), Some(-3));
    }

    #[test]
    fn test_round_half_up_rejects_inexact_range() {
        assert_eq!(round_half_up(MAX_EXACT_INTEGER), Some(9_007_199_254_740_992));
        assert_eq!(round_half_up(1e20), None);
        assert_eq!(round_half_up(-1e20), None);
        assert_eq!(round_half_up(f64::INFINITY), None);
        assert_eq!(round_half_up(f64::NAN), None);
    }

    #[test]
    fn test_water_for_huge_weight_is_out_of_range() {
        assert_eq!(water_intake_ml(1e20), None);
        assert_eq!(daily_calories(1e20, 175.0, 30, None, None), None);
    }

    #[test]
    fn test_bmr_uses_flat_offset() {
        let bmr = basal_metabolic_rate(70.0, 175.0, 30);
        assert!((bmr - 1565.75).abs() < 1e-9);
    }

    #[test]
    fn test_unknown_activity_defaults_to_sedentary() {
        assert_eq!(activity_multiplier(None), SEDENTARY_MULT);
        assert_eq!(activity_multiplier(Some(ActivityLevel::VeryActive)), 1.725);
    }

    #[test]
    fn test_goal_adjustment() {
        assert_eq!(goal_adjustment(Some(Goal::LoseWeight)), -500.0);
        assert_eq!(goal_adjustment(Some(Goal::GainMuscle)), 300.0);
        assert_eq!(goal_adjustment(Some(Goal::GainWeight)), 300.0);
        assert_eq!(goal_adjustment(Some(Goal::Maintain)), 0.0);
        assert_eq!(goal_adjustment(None), 0.0);
    }

    #[test]
    fn test_slot_calories_for_2000() {
        assert_eq!(slot_calories(2000, MealSlot::Breakfast), 500);
        assert_eq!(slot_calories(2000, MealSlot::Lunch), 700);
        assert_eq!(slot_calories(2000, MealSlot::AfternoonSnack), 300);
        assert_eq!(slot_calories(2000, MealSlot::Dinner), 500);
    }
}
