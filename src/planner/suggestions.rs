use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::models::{AnswerRecord, DietaryRestriction, MealSlot};
use crate::planner::constants::{
    AFTERNOON_SNACK_SUGGESTIONS, BREAKFAST_SUGGESTIONS, DINNER_SUGGESTIONS, LUNCH_SUGGESTIONS,
};

/// Chooses which candidate dish to suggest for a meal.
pub trait SuggestionSource {
    /// Return an index in `0..candidates`. `candidates` is never zero.
    fn pick(&mut self, slot: MealSlot, candidates: usize) -> usize;
}

/// Uniform random selection backed by any `rand` generator.
#[derive(Debug, Clone)]
pub struct RandomSuggestions<R> {
    rng: R,
}

impl<R: Rng> RandomSuggestions<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomSuggestions<StdRng> {
    /// Reproducible selection for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> SuggestionSource for RandomSuggestions<R> {
    fn pick(&mut self, _slot: MealSlot, candidates: usize) -> usize {
        self.rng.gen_range(0..candidates)
    }
}

/// Candidate dishes for a meal.
pub fn candidates(slot: MealSlot) -> &'static [&'static str] {
    match slot {
        MealSlot::Breakfast => &BREAKFAST_SUGGESTIONS,
        MealSlot::Lunch => &LUNCH_SUGGESTIONS,
        MealSlot::AfternoonSnack => &AFTERNOON_SNACK_SUGGESTIONS,
        MealSlot::Dinner => &DINNER_SUGGESTIONS,
    }
}

/// Pick a dish for `slot`. Indices past the end wrap around.
pub fn choose_suggestion(source: &mut dyn SuggestionSource, slot: MealSlot) -> &'static str {
    let options = candidates(slot);
    let idx = source.pick(slot, options.len()) % options.len();
    options[idx]
}

/// Restriction text to warn about, if any.
pub fn restriction_note(answers: &AnswerRecord) -> Option<String> {
    let raw = answers
        .dietary_restriction
        .as_deref()
        .map(str::trim)
        .filter(|r| !r.is_empty())?;

    match answers.dietary_restriction() {
        Some(DietaryRestriction::None) => None,
        Some(DietaryRestriction::Other) => answers
            .other_restriction_text
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string),
        Some(known) => Some(known.as_str().to_string()),
        None => Some(raw.to_string()),
    }
}

/// Food the user asked never to leave out, if any.
pub fn indispensable_note(answers: &AnswerRecord) -> Option<String> {
    answers
        .indispensable_food
        .as_deref()
        .map(str::trim)
        .filter(|f| !f.is_empty())
        .map(str::to_string)
}

/// Append the advisory notes to a dish.
pub fn with_advisories(dish: &str, restriction: Option<&str>, indispensable: Option<&str>) -> String {
    let mut text = dish.to_string();
    if let Some(restriction) = restriction {
        text.push_str(&format!(" (Attention: {})", restriction));
    }
    if let Some(food) = indispensable {
        text.push_str(&format!(" (Remember: {})", food));
    }
    text
}
