pub mod answers;
pub mod plan;

pub use answers::{ActivityLevel, AnswerRecord, DietaryRestriction, Field, Goal};
pub use plan::{DayPlan, MealDetail, MealSlot, PlanResult, Weekday, WeeklyPlan};
