use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::PlannerError;

/// The answer fields collected by the wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Goal,
    ActivityLevel,
    WeightKg,
    HeightCm,
    AgeYears,
    DietaryRestriction,
    OtherRestrictionText,
    IndispensableFood,
}

impl Field {
    pub const ALL: [Field; 8] = [
        Field::Goal,
        Field::ActivityLevel,
        Field::WeightKg,
        Field::HeightCm,
        Field::AgeYears,
        Field::DietaryRestriction,
        Field::OtherRestrictionText,
        Field::IndispensableFood,
    ];

    /// camelCase name used at the UI boundary.
    pub fn name(self) -> &'static str {
        match self {
            Field::Goal => "goal",
            Field::ActivityLevel => "activityLevel",
            Field::WeightKg => "weightKg",
            Field::HeightCm => "heightCm",
            Field::AgeYears => "ageYears",
            Field::DietaryRestriction => "dietaryRestriction",
            Field::OtherRestrictionText => "otherRestrictionText",
            Field::IndispensableFood => "indispensableFood",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Field {
    type Err = PlannerError;

    /// Accepts both `weightKg` and `weight_kg` spellings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s.trim().chars().filter(|c| *c != '_').collect();
        Field::ALL
            .into_iter()
            .find(|f| f.name().eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| PlannerError::UnknownField(s.to_string()))
    }
}

/// Lowercase, trim, and fold `-` and spaces into `_`.
pub fn normalize_choice(value: &str) -> String {
    value
        .trim()
        .to_lowercase()
        .chars()
        .map(|c| if c == '-' || c == ' ' { '_' } else { c })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    LoseWeight,
    GainMuscle,
    GainWeight,
    Maintain,
}

impl Goal {
    pub fn from_answer(value: &str) -> Option<Self> {
        match normalize_choice(value).as_str() {
            "lose_weight" => Some(Goal::LoseWeight),
            "gain_muscle" => Some(Goal::GainMuscle),
            "gain_weight" => Some(Goal::GainWeight),
            "maintain" => Some(Goal::Maintain),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Goal::LoseWeight => "lose_weight",
            Goal::GainMuscle => "gain_muscle",
            Goal::GainWeight => "gain_weight",
            Goal::Maintain => "maintain",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Sedentary,
    LightlyActive,
    Active,
    VeryActive,
}

impl ActivityLevel {
    pub fn from_answer(value: &str) -> Option<Self> {
        match normalize_choice(value).as_str() {
            "sedentary" => Some(ActivityLevel::Sedentary),
            "lightly_active" => Some(ActivityLevel::LightlyActive),
            "active" => Some(ActivityLevel::Active),
            "very_active" => Some(ActivityLevel::VeryActive),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::LightlyActive => "lightly_active",
            ActivityLevel::Active => "active",
            ActivityLevel::VeryActive => "very_active",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DietaryRestriction {
    None,
    Lactose,
    Gluten,
    Vegan,
    Other,
}

impl DietaryRestriction {
    pub fn from_answer(value: &str) -> Option<Self> {
        match normalize_choice(value).as_str() {
            "none" => Some(DietaryRestriction::None),
            "lactose" => Some(DietaryRestriction::Lactose),
            "gluten" => Some(DietaryRestriction::Gluten),
            "vegan" => Some(DietaryRestriction::Vegan),
            "other" => Some(DietaryRestriction::Other),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DietaryRestriction::None => "none",
            DietaryRestriction::Lactose => "lactose",
            DietaryRestriction::Gluten => "gluten",
            DietaryRestriction::Vegan => "vegan",
            DietaryRestriction::Other => "other",
        }
    }
}

/// Why a numeric answer was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberProblem {
    Missing,
    Invalid,
}

/// Parse a finite decimal strictly greater than zero.
pub fn parse_positive_decimal(value: Option<&str>) -> Result<f64, NumberProblem> {
    let raw = non_blank(value).ok_or(NumberProblem::Missing)?;
    match raw.parse::<f64>() {
        Ok(n) if n.is_finite() && n > 0.0 => Ok(n),
        _ => Err(NumberProblem::Invalid),
    }
}

/// Parse a whole number strictly greater than zero.
pub fn parse_positive_integer(value: Option<&str>) -> Result<u32, NumberProblem> {
    let raw = non_blank(value).ok_or(NumberProblem::Missing)?;
    match raw.parse::<u32>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(NumberProblem::Invalid),
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Everything the user has answered so far, kept as raw text.
///
/// Nothing is parsed when a field is set; parsing happens when a plan is
/// generated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnswerRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity_level: Option<String>,

    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "text_or_number"
    )]
    pub weight_kg: Option<String>,

    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "text_or_number"
    )]
    pub height_cm: Option<String>,

    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "text_or_number"
    )]
    pub age_years: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dietary_restriction: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub other_restriction_text: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub indispensable_food: Option<String>,
}

impl AnswerRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge one value into the record. Never fails.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        *self.slot_mut(field) = Some(value.into());
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        let value = match field {
            Field::Goal => &self.goal,
            Field::ActivityLevel => &self.activity_level,
            Field::WeightKg => &self.weight_kg,
            Field::HeightCm => &self.height_cm,
            Field::AgeYears => &self.age_years,
            Field::DietaryRestriction => &self.dietary_restriction,
            Field::OtherRestrictionText => &self.other_restriction_text,
            Field::IndispensableFood => &self.indispensable_food,
        };
        value.as_deref()
    }

    fn slot_mut(&mut self, field: Field) -> &mut Option<String> {
        match field {
            Field::Goal => &mut self.goal,
            Field::ActivityLevel => &mut self.activity_level,
            Field::WeightKg => &mut self.weight_kg,
            Field::HeightCm => &mut self.height_cm,
            Field::AgeYears => &mut self.age_years,
            Field::DietaryRestriction => &mut self.dietary_restriction,
            Field::OtherRestrictionText => &mut self.other_restriction_text,
            Field::IndispensableFood => &mut self.indispensable_food,
        }
    }

    pub fn is_empty(&self) -> bool {
        Field::ALL.into_iter().all(|f| self.get(f).is_none())
    }

    pub fn goal(&self) -> Option<Goal> {
        self.goal.as_deref().and_then(Goal::from_answer)
    }

    pub fn activity_level(&self) -> Option<ActivityLevel> {
        self.activity_level.as_deref().and_then(ActivityLevel::from_answer)
    }

    pub fn dietary_restriction(&self) -> Option<DietaryRestriction> {
        self.dietary_restriction
            .as_deref()
            .and_then(DietaryRestriction::from_answer)
    }
}

/// Answers files may carry numbers either quoted or bare.
fn text_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(Option::<Raw>::deserialize(deserializer)?.map(|raw| match raw {
        Raw::Text(s) => s,
        Raw::Number(n) => n.to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_names_parse_both_spellings() {
        assert_eq!("weightKg".parse::<Field>().unwrap(), Field::WeightKg);
        assert_eq!("weight_kg".parse::<Field>().unwrap(), Field::WeightKg);
        assert_eq!(
            "other_restriction_text".parse::<Field>().unwrap(),
            Field::OtherRestrictionText
        );
        assert!("shoe_size".parse::<Field>().is_err());
    }

    #[test]
    fn test_choice_parsing_is_lenient_about_case_and_separators() {
        assert_eq!(Goal::from_answer(" Lose-Weight "), Some(Goal::LoseWeight));
        assert_eq!(
            ActivityLevel::from_answer("very active"),
            Some(ActivityLevel::VeryActive)
        );
        assert_eq!(Goal::from_answer("bulk"), None);
    }

    #[test]
    fn test_choice_names_match_answers() {
        for goal in [Goal::LoseWeight, Goal::GainMuscle, Goal::GainWeight, Goal::Maintain] {
            assert_eq!(Goal::from_answer(goal.as_str()), Some(goal));
        }
        assert_eq!(ActivityLevel::LightlyActive.as_str(), "lightly_active");
        assert_eq!(ActivityLevel::from_answer("Very Active"), Some(ActivityLevel::VeryActive));

        let mut answers = AnswerRecord::new();
        answers.set(Field::DietaryRestriction, " Gluten ");
        assert_eq!(answers.dietary_restriction(), Some(DietaryRestriction::Gluten));
    }

    #[test]
    fn test_parse_positive_decimal() {
        assert_eq!(parse_positive_decimal(Some("70.5")), Ok(70.5));
        assert_eq!(parse_positive_decimal(Some("  ")), Err(NumberProblem::Missing));
        assert_eq!(parse_positive_decimal(None), Err(NumberProblem::Missing));
        assert_eq!(parse_positive_decimal(Some("abc")), Err(NumberProblem::Invalid));
        assert_eq!(parse_positive_decimal(Some("0")), Err(NumberProblem::Invalid));
        assert_eq!(parse_positive_decimal(Some("-3")), Err(NumberProblem::Invalid));
        assert_eq!(parse_positive_decimal(Some("inf")), Err(NumberProblem::Invalid));
    }

    #[test]
    fn test_parse_positive_integer_rejects_fractions() {
        assert_eq!(parse_positive_integer(Some("30")), Ok(30));
        assert_eq!(parse_positive_integer(Some("30.5")), Err(NumberProblem::Invalid));
        assert_eq!(parse_positive_integer(Some("0")), Err(NumberProblem::Invalid));
    }

    #[test]
    fn test_set_and_is_empty() {
        let mut answers = AnswerRecord::new();
        assert!(answers.is_empty());

        answers.set(Field::WeightKg, "70");
        assert_eq!(answers.get(Field::WeightKg), Some("70"));
        assert!(!answers.is_empty());
    }

    #[test]
    fn test_deserialize_accepts_numbers_and_strings() {
        let json = r#"{"goal": "maintain", "weightKg": 70, "heightCm": "175", "ageYears": 30}"#;
        let answers: AnswerRecord = serde_json::from_str(json).unwrap();

        assert_eq!(answers.weight_kg.as_deref(), Some("70"));
        assert_eq!(answers.height_cm.as_deref(), Some("175"));
        assert_eq!(answers.age_years.as_deref(), Some("30"));
        assert_eq!(answers.goal(), Some(Goal::Maintain));
        assert!(answers.activity_level.is_none());
    }
}
