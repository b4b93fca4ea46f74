use crate::error::ValidationError;
use crate::models::answers::{NumberProblem, parse_positive_decimal, parse_positive_integer};
use crate::models::{
    ActivityLevel, AnswerRecord, DayPlan, Field, Goal, MealDetail, PlanResult, Weekday, WeeklyPlan,
};
use crate::planner::calculations::{daily_calories, slot_calories, water_intake_ml};
use crate::planner::constants::{BMR_HEIGHT_COEF, BMR_WEIGHT_COEF};
use crate::planner::suggestions::{
    SuggestionSource, choose_suggestion, indispensable_note, restriction_note, with_advisories,
};

/// The parsed, required part of an [`AnswerRecord`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyProfile {
    pub weight_kg: f64,
    pub height_cm: f64,
    pub age_years: u32,

    /// `None` when the answer was given but not recognised.
    pub activity_level: Option<ActivityLevel>,
    pub goal: Option<Goal>,
}

/// Check that every required answer is present and numerically valid.
///
/// Fields are checked in the order the wizard asks for them; the first
/// problem is reported.
pub fn validate_answers(answers: &AnswerRecord) -> Result<BodyProfile, ValidationError> {
    require_present(answers, Field::Goal)?;
    require_present(answers, Field::ActivityLevel)?;

    let weight_kg = parse_positive_decimal(answers.get(Field::WeightKg))
        .map_err(|p| number_error(answers, Field::WeightKg, p))?;
    let height_cm = parse_positive_decimal(answers.get(Field::HeightCm))
        .map_err(|p| number_error(answers, Field::HeightCm, p))?;
    let age_years = parse_positive_integer(answers.get(Field::AgeYears))
        .map_err(|p| number_error(answers, Field::AgeYears, p))?;

    Ok(BodyProfile {
        weight_kg,
        height_cm,
        age_years,
        activity_level: answers.activity_level(),
        goal: answers.goal(),
    })
}

fn require_present(answers: &AnswerRecord, field: Field) -> Result<(), ValidationError> {
    match answers.get(field).map(str::trim) {
        Some(v) if !v.is_empty() => Ok(()),
        _ => Err(ValidationError::MissingField(field)),
    }
}

fn number_error(answers: &AnswerRecord, field: Field, problem: NumberProblem) -> ValidationError {
    match problem {
        NumberProblem::Missing => ValidationError::MissingField(field),
        NumberProblem::Invalid => ValidationError::InvalidNumber {
            field,
            value: answers.get(field).unwrap_or_default().to_string(),
        },
    }
}

/// Reported when an answer parses but pushes a result past the exact range.
fn out_of_range(answers: &AnswerRecord, field: Field) -> ValidationError {
    log::warn!("{} is too large to build a plan from", field);
    number_error(answers, field, NumberProblem::Invalid)
}

/// The measurement contributing most to the calorie formula. Age is a `u32`
/// and cannot push the result out of range on its own.
fn dominant_body_field(profile: &BodyProfile) -> Field {
    if BMR_HEIGHT_COEF * profile.height_cm > BMR_WEIGHT_COEF * profile.weight_kg {
        Field::HeightCm
    } else {
        Field::WeightKg
    }
}

/// Build a week of meals from the answers.
///
/// Pure apart from `source`, which is asked for one suggestion per meal
/// (28 calls, Monday breakfast first). On a validation failure, including
/// answers so large the totals can no longer be rounded exactly, the source
/// is never touched.
pub fn generate_plan(
    answers: &AnswerRecord,
    source: &mut dyn SuggestionSource,
) -> Result<PlanResult, ValidationError> {
    let profile = validate_answers(answers)?;

    let daily = daily_calories(
        profile.weight_kg,
        profile.height_cm,
        profile.age_years,
        profile.activity_level,
        profile.goal,
    )
    .ok_or_else(|| out_of_range(answers, dominant_body_field(&profile)))?;
    let water = water_intake_ml(profile.weight_kg)
        .ok_or_else(|| out_of_range(answers, Field::WeightKg))?;

    let restriction = restriction_note(answers);
    let indispensable = indispensable_note(answers);

    let weekly_plan = WeeklyPlan::from_fn(|_day| {
        DayPlan::from_fn(|slot| {
            let dish = choose_suggestion(&mut *source, slot);
            MealDetail {
                calories: slot_calories(daily, slot),
                suggestion: with_advisories(
                    dish,
                    restriction.as_deref(),
                    indispensable.as_deref(),
                ),
                time: slot.time(),
            }
        })
    });
    let summary = weekly_plan.day(Weekday::Monday).clone();

    log::debug!("generated plan: {} kcal/day, {} ml water", daily, water);

    Ok(PlanResult {
        daily_calories: daily,
        water_intake_ml: water,
        weekly_plan,
        summary,
        answers: answers.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MealSlot;
    use crate::planner::suggestions::RandomSuggestions;

    fn complete_answers() -> AnswerRecord {
        let mut answers = AnswerRecord::new();
        answers.set(Field::Goal, "lose_weight");
        answers.set(Field::ActivityLevel, "active");
        answers.set(Field::WeightKg, "70");
        answers.set(Field::HeightCm, "175");
        answers.set(Field::AgeYears, "30");
        answers
    }

    #[test]
    fn test_validate_reports_first_missing_field() {
        let mut answers = complete_answers();
        answers.goal = None;
        answers.weight_kg = None;

        let err = validate_answers(&answers).unwrap_err();
        assert_eq!(err, ValidationError::MissingField(Field::Goal));
    }

    #[test]
    fn test_validate_rejects_non_numeric_weight() {
        let mut answers = complete_answers();
        answers.set(Field::WeightKg, "seventy");

        let err = validate_answers(&answers).unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidNumber {
                field: Field::WeightKg,
                value: "seventy".to_string()
            }
        );
    }

    #[test]
    fn test_validation_message_asks_to_complete_fields() {
        let mut answers = complete_answers();
        answers.age_years = None;

        let err = validate_answers(&answers).unwrap_err();
        assert!(err.to_string().starts_with("please complete all required fields"));

        answers.set(Field::AgeYears, "old");
        let err = validate_answers(&answers).unwrap_err();
        assert!(err.to_string().starts_with("please complete all required fields"));
    }

    #[test]
    fn test_huge_height_blames_height() {
        let mut answers = complete_answers();
        answers.set(Field::HeightCm, "1e300");

        let err = generate_plan(&answers, &mut RandomSuggestions::seeded(1)).unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidNumber {
                field: Field::HeightCm,
                value: "1e300".to_string()
            }
        );
    }

    #[test]
    fn test_blank_counts_as_missing() {
        let mut answers = complete_answers();
        answers.set(Field::HeightCm, "   ");

        let err = validate_answers(&answers).unwrap_err();
        assert_eq!(err, ValidationError::MissingField(Field::HeightCm));
    }

    #[test]
    fn test_unrecognised_goal_passes_validation() {
        let mut answers = complete_answers();
        answers.set(Field::Goal, "be_happy");

        let profile = validate_answers(&answers).unwrap();
        assert_eq!(profile.goal, None);
    }

    #[test]
    fn test_generate_example_plan() {
        let mut source = RandomSuggestions::seeded(1);
        let plan = generate_plan(&complete_answers(), &mut source).unwrap();

        assert_eq!(plan.daily_calories, 1927);
        assert_eq!(plan.water_intake_ml, 2450);
        assert_eq!(plan.summary, *plan.weekly_plan.day(Weekday::Monday));
        assert_eq!(plan.answers, complete_answers());
    }

    #[test]
    fn test_meal_times_are_fixed() {
        let mut source = RandomSuggestions::seeded(9);
        let plan = generate_plan(&complete_answers(), &mut source).unwrap();

        for (_, day) in plan.weekly_plan.days() {
            for (slot, meal) in day.meals() {
                assert_eq!(meal.time, slot.time());
            }
        }
        assert_eq!(plan.summary.meal(MealSlot::Lunch).time, "12:30");
    }
}
