use std::fmt;

use serde::Serialize;

use crate::models::AnswerRecord;
use crate::planner::constants::{
    AFTERNOON_SNACK_SHARE, AFTERNOON_SNACK_TIME, BREAKFAST_SHARE, BREAKFAST_TIME, DINNER_SHARE,
    DINNER_TIME, LUNCH_SHARE, LUNCH_TIME,
};

/// One of the four meals served each day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MealSlot {
    Breakfast,
    Lunch,
    AfternoonSnack,
    Dinner,
}

impl MealSlot {
    pub const ALL: [MealSlot; 4] = [
        MealSlot::Breakfast,
        MealSlot::Lunch,
        MealSlot::AfternoonSnack,
        MealSlot::Dinner,
    ];

    /// Share of the daily calories served at this meal.
    pub fn proportion(self) -> f64 {
        match self {
            MealSlot::Breakfast => BREAKFAST_SHARE,
            MealSlot::Lunch => LUNCH_SHARE,
            MealSlot::AfternoonSnack => AFTERNOON_SNACK_SHARE,
            MealSlot::Dinner => DINNER_SHARE,
        }
    }

    pub fn time(self) -> &'static str {
        match self {
            MealSlot::Breakfast => BREAKFAST_TIME,
            MealSlot::Lunch => LUNCH_TIME,
            MealSlot::AfternoonSnack => AFTERNOON_SNACK_TIME,
            MealSlot::Dinner => DINNER_TIME,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MealSlot::Breakfast => "Breakfast",
            MealSlot::Lunch => "Lunch",
            MealSlot::AfternoonSnack => "Afternoon Snack",
            MealSlot::Dinner => "Dinner",
        }
    }
}

impl fmt::Display for MealSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single planned meal.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MealDetail {
    /// Calories for this meal, rounded.
    pub calories: i64,

    /// Suggested dish, including any advisory notes.
    pub suggestion: String,

    /// Serving time, `HH:MM`.
    pub time: &'static str,
}

/// The four meals of one day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayPlan {
    pub breakfast: MealDetail,
    pub lunch: MealDetail,
    pub afternoon_snack: MealDetail,
    pub dinner: MealDetail,
}

impl DayPlan {
    /// Build a day from a per-slot constructor, called in `MealSlot::ALL` order.
    pub fn from_fn(mut meal: impl FnMut(MealSlot) -> MealDetail) -> Self {
        Self {
            breakfast: meal(MealSlot::Breakfast),
            lunch: meal(MealSlot::Lunch),
            afternoon_snack: meal(MealSlot::AfternoonSnack),
            dinner: meal(MealSlot::Dinner),
        }
    }

    pub fn meal(&self, slot: MealSlot) -> &MealDetail {
        match slot {
            MealSlot::Breakfast => &self.breakfast,
            MealSlot::Lunch => &self.lunch,
            MealSlot::AfternoonSnack => &self.afternoon_snack,
            MealSlot::Dinner => &self.dinner,
        }
    }

    pub fn meals(&self) -> impl Iterator<Item = (MealSlot, &MealDetail)> {
        MealSlot::ALL.into_iter().map(move |slot| (slot, self.meal(slot)))
    }

    pub fn total_calories(&self) -> i64 {
        self.meals().map(|(_, m)| m.calories).sum()
    }
}

/// Seven days of meals, Monday first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeeklyPlan {
    pub monday: DayPlan,
    pub tuesday: DayPlan,
    pub wednesday: DayPlan,
    pub thursday: DayPlan,
    pub friday: DayPlan,
    pub saturday: DayPlan,
    pub sunday: DayPlan,
}

impl WeeklyPlan {
    /// Build a week from a per-day constructor, called in `Weekday::ALL` order.
    pub fn from_fn(mut day: impl FnMut(Weekday) -> DayPlan) -> Self {
        Self {
            monday: day(Weekday::Monday),
            tuesday: day(Weekday::Tuesday),
            wednesday: day(Weekday::Wednesday),
            thursday: day(Weekday::Thursday),
            friday: day(Weekday::Friday),
            saturday: day(Weekday::Saturday),
            sunday: day(Weekday::Sunday),
        }
    }

    pub fn day(&self, weekday: Weekday) -> &DayPlan {
        match weekday {
            Weekday::Monday => &self.monday,
            Weekday::Tuesday => &self.tuesday,
            Weekday::Wednesday => &self.wednesday,
            Weekday::Thursday => &self.thursday,
            Weekday::Friday => &self.friday,
            Weekday::Saturday => &self.saturday,
            Weekday::Sunday => &self.sunday,
        }
    }

    pub fn days(&self) -> impl Iterator<Item = (Weekday, &DayPlan)> {
        Weekday::ALL.into_iter().map(move |d| (d, self.day(d)))
    }
}

/// A generated plan. Never mutated after generation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanResult {
    pub daily_calories: i64,
    pub water_intake_ml: i64,
    pub weekly_plan: WeeklyPlan,

    /// Monday's meals, repeated for quick display.
    pub summary: DayPlan,

    /// The answers this plan was built from.
    pub answers: AnswerRecord,
}

impl PlanResult {
    pub fn water_intake_litres(&self) -> f64 {
        self.water_intake_ml as f64 / 1000.0
    }
}
