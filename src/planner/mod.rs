pub mod calculations;
pub mod constants;
pub mod generator;
pub mod suggestions;

pub use calculations::{
    activity_adjusted_calories, activity_multiplier, basal_metabolic_rate, daily_calories,
    goal_adjustment, round_half_up, slot_calories, water_intake_ml,
};
pub use constants::*;
pub use generator::{BodyProfile, generate_plan, validate_answers};
pub use suggestions::{RandomSuggestions, SuggestionSource};
