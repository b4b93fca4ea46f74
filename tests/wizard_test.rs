use diet_wizard_rs::error::ValidationError;
use diet_wizard_rs::models::{Field, MealSlot};
use diet_wizard_rs::planner::{SuggestionSource, TOTAL_STEPS};
use diet_wizard_rs::wizard::{Transition, Wizard};

#[derive(Default)]
struct CountingSource {
    calls: usize,
}

impl SuggestionSource for CountingSource {
    fn pick(&mut self, _slot: MealSlot, _candidates: usize) -> usize {
        self.calls += 1;
        0
    }
}

fn fill_required(wizard: &mut Wizard<CountingSource>) {
    wizard.set_field(Field::Goal, "maintain");
    wizard.set_field(Field::ActivityLevel, "active");
    wizard.set_field(Field::WeightKg, "70");
    wizard.set_field(Field::HeightCm, "175");
    wizard.set_field(Field::AgeYears, "30");
}

#[test]
fn test_advance_reaches_last_step_without_generating() {
    let mut wizard = Wizard::new(CountingSource::default());
    fill_required(&mut wizard);

    for expected in 2..=TOTAL_STEPS {
        assert_eq!(wizard.advance(), Transition::Advanced(expected));
        assert_eq!(wizard.suggestions().calls, 0);
    }
    assert_eq!(wizard.step(), TOTAL_STEPS);
    assert!(wizard.plan().is_none());

    assert_eq!(wizard.advance(), Transition::Completed);
    // One generation asks for one suggestion per meal of the week.
    assert_eq!(wizard.suggestions().calls, 28);
    assert_eq!(wizard.plan().unwrap().daily_calories, 2427);
}

#[test]
fn test_results_state_ignores_navigation() {
    let mut wizard = Wizard::new(CountingSource::default());
    fill_required(&mut wizard);
    while wizard.advance() != Transition::Completed {}

    assert!(wizard.is_showing_results());
    assert_eq!(wizard.advance(), Transition::Unchanged);
    assert!(!wizard.retreat());
    assert_eq!(wizard.suggestions().calls, 28);
}

#[test]
fn test_blocked_generation_leaves_state_untouched() {
    let mut wizard = Wizard::new(CountingSource::default());
    fill_required(&mut wizard);
    wizard.set_field(Field::AgeYears, "");

    for _ in 1..TOTAL_STEPS {
        wizard.advance();
    }
    let before = wizard.answers().clone();

    let transition = wizard.advance();
    assert_eq!(
        transition,
        Transition::Blocked(ValidationError::MissingField(Field::AgeYears))
    );
    assert_eq!(wizard.step(), TOTAL_STEPS);
    assert!(wizard.plan().is_none());
    assert_eq!(wizard.answers(), &before);
    assert_eq!(wizard.suggestions().calls, 0);

    // Fixing the answer lets the same step complete.
    wizard.set_field(Field::AgeYears, "30");
    assert_eq!(wizard.advance(), Transition::Completed);
}

#[test]
fn test_reset_from_results_returns_to_start() {
    let mut wizard = Wizard::new(CountingSource::default());
    fill_required(&mut wizard);
    wizard.set_field(Field::IndispensableFood, "rice");
    while wizard.advance() != Transition::Completed {}

    wizard.reset();
    assert_eq!(wizard.step(), 1);
    assert!(wizard.answers().is_empty());
    assert!(wizard.plan().is_none());
    assert!(!wizard.is_showing_results());
}

#[test]
fn test_reset_mid_wizard() {
    let mut wizard = Wizard::new(CountingSource::default());
    wizard.set_field(Field::Goal, "gain_muscle");
    wizard.advance();
    wizard.advance();

    wizard.reset();
    assert_eq!(wizard.step(), 1);
    assert!(wizard.answers().is_empty());
}

#[test]
fn test_wizard_can_run_again_after_reset() {
    let mut wizard = Wizard::new(CountingSource::default());
    for _ in 0..2 {
        fill_required(&mut wizard);
        while wizard.advance() != Transition::Completed {}
        assert!(wizard.plan().is_some());
        wizard.reset();
    }
    assert_eq!(wizard.suggestions().calls, 56);
}

#[test]
fn test_retreat_walks_back_to_first_step() {
    let mut wizard = Wizard::new(CountingSource::default());
    for _ in 1..TOTAL_STEPS {
        wizard.advance();
    }

    let mut moves = 0;
    while wizard.retreat() {
        moves += 1;
    }
    assert_eq!(moves, TOTAL_STEPS - 1);
    assert_eq!(wizard.step(), 1);
}

#[test]
fn test_current_step_follows_the_counter() {
    let mut wizard = Wizard::new(CountingSource::default());
    assert_eq!(wizard.current_step().field, Field::Goal);
    wizard.advance();
    wizard.advance();
    assert_eq!(wizard.current_step().field, Field::WeightKg);
}
