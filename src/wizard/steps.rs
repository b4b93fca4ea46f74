//! Declarative description of every wizard step.
//!
//! The prompt layer walks this list instead of branching on step numbers, so
//! adding a question means adding a descriptor.

use strsim::jaro_winkler;

use crate::error::ValidationError;
use crate::models::Field;
use crate::models::answers::{
    NumberProblem, normalize_choice, parse_positive_decimal, parse_positive_integer,
};
use crate::planner::constants::{CHOICE_HINT_THRESHOLD, TOTAL_STEPS};

/// A selectable answer: stored `value` and the `label` shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChoiceOption {
    pub value: &'static str,
    pub label: &'static str,
}

impl ChoiceOption {
    pub const fn new(value: &'static str, label: &'static str) -> Self {
        Self { value, label }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Choice(&'static [ChoiceOption]),
    Decimal { placeholder: &'static str },
    Integer { placeholder: &'static str },
    Text { placeholder: &'static str },
}

/// An extra question asked when the step's answer equals `when`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FollowUp {
    pub when: &'static str,
    pub field: Field,
    pub prompt: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepDescriptor {
    /// 1-based position in the wizard.
    pub number: u8,
    pub field: Field,
    pub prompt: &'static str,
    pub input: InputKind,
    pub required: bool,
    pub follow_up: Option<FollowUp>,
}

const GOAL_OPTIONS: &[ChoiceOption] = &[
    ChoiceOption::new("lose_weight", "Lose weight"),
    ChoiceOption::new("gain_muscle", "Gain muscle mass"),
    ChoiceOption::new("gain_weight", "Gain weight"),
    ChoiceOption::new("maintain", "Maintain current shape"),
];

const ACTIVITY_OPTIONS: &[ChoiceOption] = &[
    ChoiceOption::new("sedentary", "Sedentary"),
    ChoiceOption::new("lightly_active", "Lightly active"),
    ChoiceOption::new("active", "Active"),
    ChoiceOption::new("very_active", "Very active"),
];

const RESTRICTION_OPTIONS: &[ChoiceOption] = &[
    ChoiceOption::new("none", "None"),
    ChoiceOption::new("lactose", "Lactose"),
    ChoiceOption::new("gluten", "Gluten"),
    ChoiceOption::new("vegan", "Vegan"),
    ChoiceOption::new("other", "Other"),
];

pub static STEPS: [StepDescriptor; TOTAL_STEPS as usize] = [
    StepDescriptor {
        number: 1,
        field: Field::Goal,
        prompt: "What is your main goal?",
        input: InputKind::Choice(GOAL_OPTIONS),
        required: true,
        follow_up: None,
    },
    StepDescriptor {
        number: 2,
        field: Field::ActivityLevel,
        prompt: "How physically active are you?",
        input: InputKind::Choice(ACTIVITY_OPTIONS),
        required: true,
        follow_up: None,
    },
    StepDescriptor {
        number: 3,
        field: Field::WeightKg,
        prompt: "What is your current weight? (kg)",
        input: InputKind::Decimal { placeholder: "70" },
        required: true,
        follow_up: None,
    },
    StepDescriptor {
        number: 4,
        field: Field::HeightCm,
        prompt: "How tall are you? (cm)",
        input: InputKind::Decimal { placeholder: "175" },
        required: true,
        follow_up: None,
    },
    StepDescriptor {
        number: 5,
        field: Field::AgeYears,
        prompt: "How old are you?",
        input: InputKind::Integer { placeholder: "30" },
        required: true,
        follow_up: None,
    },
    StepDescriptor {
        number: 6,
        field: Field::DietaryRestriction,
        prompt: "Do you have any dietary restriction?",
        input: InputKind::Choice(RESTRICTION_OPTIONS),
        required: false,
        follow_up: Some(FollowUp {
            when: "other",
            field: Field::OtherRestrictionText,
            prompt: "Describe your restriction",
        }),
    },
    StepDescriptor {
        number: 7,
        field: Field::IndispensableFood,
        prompt: "Is there a food you can't do without?",
        input: InputKind::Text {
            placeholder: "Coffee in the morning, a particular fruit...",
        },
        required: false,
        follow_up: None,
    },
];

/// Descriptor for a 1-based step number.
pub fn step(number: u8) -> Option<&'static StepDescriptor> {
    STEPS.iter().find(|s| s.number == number)
}

/// The step that asks for `field`, including follow-up fields.
pub fn step_for_field(field: Field) -> Option<&'static StepDescriptor> {
    STEPS
        .iter()
        .find(|s| s.field == field || s.follow_up.is_some_and(|f| f.field == field))
}

impl StepDescriptor {
    pub fn options(&self) -> &'static [ChoiceOption] {
        match self.input {
            InputKind::Choice(options) => options,
            _ => &[],
        }
    }

    /// Position of `value` among the choice options.
    pub fn option_index(&self, value: &str) -> Option<usize> {
        let wanted = normalize_choice(value);
        self.options().iter().position(|o| o.value == wanted)
    }

    /// Closest choice option to an unrecognised value.
    pub fn closest_option(&self, value: &str) -> Option<&'static ChoiceOption> {
        let wanted = normalize_choice(value);
        self.options()
            .iter()
            .map(|o| (o, jaro_winkler(o.value, &wanted)))
            .filter(|(_, score)| *score > CHOICE_HINT_THRESHOLD)
            .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
            .map(|(o, _)| o)
    }

    /// Whether the follow-up question should be asked for this answer.
    pub fn follow_up_for(&self, value: &str) -> Option<&FollowUp> {
        self.follow_up
            .as_ref()
            .filter(|f| normalize_choice(value) == f.when)
    }

    /// Validation rule for this step's answer.
    ///
    /// Uses the same parsers as plan generation. Choice answers outside the
    /// option list are accepted.
    pub fn check(&self, value: Option<&str>) -> Result<(), ValidationError> {
        let problem = match self.input {
            InputKind::Decimal { .. } => parse_positive_decimal(value).err(),
            InputKind::Integer { .. } => parse_positive_integer(value).err(),
            InputKind::Choice(_) | InputKind::Text { .. } => match value.map(str::trim) {
                Some(v) if !v.is_empty() => None,
                _ => Some(NumberProblem::Missing),
            },
        };

        match problem {
            None => Ok(()),
            Some(NumberProblem::Missing) if !self.required => Ok(()),
            Some(NumberProblem::Missing) => Err(ValidationError::MissingField(self.field)),
            Some(NumberProblem::Invalid) => Err(ValidationError::InvalidNumber {
                field: self.field,
                value: value.unwrap_or_default().to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steps_are_numbered_in_order() {
        for (i, s) in STEPS.iter().enumerate() {
            assert_eq!(s.number as usize, i + 1);
        }
        assert!(step(0).is_none());
        assert!(step(TOTAL_STEPS + 1).is_none());
    }

    #[test]
    fn test_step_for_follow_up_field() {
        let s = step_for_field(Field::OtherRestrictionText).unwrap();
        assert_eq!(s.field, Field::DietaryRestriction);
        assert_eq!(step_for_field(Field::AgeYears).unwrap().number, 5);
    }

    #[test]
    fn test_check_numeric_steps() {
        let weight = step(3).unwrap();
        assert!(weight.check(Some("70.5")).is_ok());
        assert!(matches!(
            weight.check(Some("heavy")),
            Err(ValidationError::InvalidNumber { .. })
        ));
        assert_eq!(
            weight.check(None),
            Err(ValidationError::MissingField(Field::WeightKg))
        );

        let age = step(5).unwrap();
        assert!(age.check(Some("30")).is_ok());
        assert!(age.check(Some("30.5")).is_err());
    }

    #[test]
    fn test_optional_steps_accept_blank() {
        assert!(step(6).unwrap().check(None).is_ok());
        assert!(step(7).unwrap().check(Some("")).is_ok());
    }

    #[test]
    fn test_closest_option() {
        let goal = step(1).unwrap();
        assert_eq!(goal.option_index("maintain"), Some(3));
        assert_eq!(goal.option_index("Lose weight"), Some(0));
        assert_eq!(goal.closest_option("loose_weight").unwrap().value, "lose_weight");
        assert!(goal.closest_option("xyz").is_none());
    }

    #[test]
    fn test_follow_up_only_for_other() {
        let restriction = step(6).unwrap();
        assert!(restriction.follow_up_for("Other").is_some());
        assert!(restriction.follow_up_for("gluten").is_none());
    }
}
