use crate::error::{Result, ValidationError};
use crate::models::{AnswerRecord, Field, PlanResult};
use crate::planner::constants::TOTAL_STEPS;
use crate::planner::generate_plan;
use crate::planner::suggestions::SuggestionSource;
use crate::wizard::steps::{self, InputKind, StepDescriptor};

/// Outcome of [`Wizard::advance`].
#[derive(Debug, Clone, PartialEq)]
pub enum Transition {
    /// Moved on to the given step.
    Advanced(u8),
    /// A plan was generated; the wizard now shows results.
    Completed,
    /// Generation failed validation; still on the last step.
    Blocked(ValidationError),
    /// Already showing results.
    Unchanged,
}

/// Linear question-by-question wizard ending in a generated plan.
///
/// Starts on step 1 with no answers. Every transition is a complete,
/// synchronous update of the session.
#[derive(Debug)]
pub struct Wizard<S> {
    step: u8,
    answers: AnswerRecord,
    plan: Option<PlanResult>,
    suggestions: S,
}

impl<S: SuggestionSource> Wizard<S> {
    pub fn new(suggestions: S) -> Self {
        Self {
            step: 1,
            answers: AnswerRecord::new(),
            plan: None,
            suggestions,
        }
    }

    /// Current step number, 1..=TOTAL_STEPS.
    pub fn step(&self) -> u8 {
        self.step
    }

    pub fn current_step(&self) -> &'static StepDescriptor {
        // Always in range: `step` only moves within 1..=TOTAL_STEPS.
        &steps::STEPS[usize::from(self.step - 1)]
    }

    pub fn answers(&self) -> &AnswerRecord {
        &self.answers
    }

    pub fn plan(&self) -> Option<&PlanResult> {
        self.plan.as_ref()
    }

    pub fn is_showing_results(&self) -> bool {
        self.plan.is_some()
    }

    pub fn is_last_step(&self) -> bool {
        self.step == TOTAL_STEPS
    }

    pub fn suggestions(&self) -> &S {
        &self.suggestions
    }

    /// Completion percentage for a progress bar.
    pub fn progress_percent(&self) -> f64 {
        if self.is_showing_results() {
            return 100.0;
        }
        f64::from(self.step) / f64::from(TOTAL_STEPS) * 100.0
    }

    /// Label for the forward button on the current step.
    pub fn next_action_label(&self) -> &'static str {
        if self.is_last_step() {
            "Generate meal plan"
        } else {
            "Next step"
        }
    }

    /// Record an answer. Never changes the step.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        warn_on_unknown_choice(field, &value);
        self.answers.set(field, value);
    }

    /// Record an answer given the field's UI name.
    pub fn set_field_by_name(&mut self, name: &str, value: impl Into<String>) -> Result<()> {
        let field = name.parse::<Field>()?;
        self.set_field(field, value);
        Ok(())
    }

    /// Move forward, generating the plan when leaving the last step.
    pub fn advance(&mut self) -> Transition {
        if self.is_showing_results() {
            return Transition::Unchanged;
        }

        if self.step < TOTAL_STEPS {
            self.step += 1;
            log::info!("wizard advanced to step {}", self.step);
            return Transition::Advanced(self.step);
        }

        match generate_plan(&self.answers, &mut self.suggestions) {
            Ok(plan) => {
                log::info!("meal plan generated ({} kcal/day)", plan.daily_calories);
                self.plan = Some(plan);
                Transition::Completed
            }
            Err(e) => {
                log::warn!("plan generation blocked: {}", e);
                Transition::Blocked(e)
            }
        }
    }

    /// Move back one step. Returns whether the step changed.
    pub fn retreat(&mut self) -> bool {
        if self.is_showing_results() || self.step <= 1 {
            return false;
        }
        self.step -= 1;
        log::info!("wizard went back to step {}", self.step);
        true
    }

    /// Discard answers and plan and start again from step 1.
    pub fn reset(&mut self) {
        self.step = 1;
        self.answers = AnswerRecord::new();
        self.plan = None;
        log::info!("wizard reset");
    }
}

fn warn_on_unknown_choice(field: Field, value: &str) {
    let Some(descriptor) = steps::step_for_field(field) else {
        return;
    };
    if descriptor.field != field
        || !matches!(descriptor.input, InputKind::Choice(_))
        || value.trim().is_empty()
        || descriptor.option_index(value).is_some()
    {
        return;
    }

    match descriptor.closest_option(value) {
        Some(option) => log::warn!(
            "unrecognised {} '{}' (did you mean '{}'?); using the default",
            field,
            value,
            option.value
        ),
        None => log::warn!("unrecognised {} '{}'; using the default", field, value),
    }
}
