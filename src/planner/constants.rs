// ─────────────────────────────────────────────────────────────────────────────
// Energy expenditure
// ─────────────────────────────────────────────────────────────────────────────

/// Mifflin–St Jeor coefficients.
pub const BMR_WEIGHT_COEF: f64 = 10.0;
pub const BMR_HEIGHT_COEF: f64 = 6.25;
pub const BMR_AGE_COEF: f64 = 5.0;

/// Flat offset averaging the male (+5) and female (-161) constants.
pub const BMR_AVERAGED_OFFSET: f64 = -78.0;

/// Activity multipliers applied to BMR.
pub const SEDENTARY_MULT: f64 = 1.2;
pub const LIGHTLY_ACTIVE_MULT: f64 = 1.375;
pub const ACTIVE_MULT: f64 = 1.55;
pub const VERY_ACTIVE_MULT: f64 = 1.725;

/// Daily calorie offset when the goal is losing weight.
pub const WEIGHT_LOSS_DEFICIT: f64 = -500.0;

/// Daily calorie offset when the goal is gaining muscle or weight.
pub const WEIGHT_GAIN_SURPLUS: f64 = 300.0;

/// Millilitres of water per kilogram of body weight.
pub const WATER_ML_PER_KG: f64 = 35.0;

/// Largest magnitude a rounded result may reach (2^53). Beyond it `f64`
/// no longer holds every integer, so rounding stops being exact.
pub const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

// ─────────────────────────────────────────────────────────────────────────────
// Meal distribution
// ─────────────────────────────────────────────────────────────────────────────

pub const BREAKFAST_SHARE: f64 = 0.25;
pub const LUNCH_SHARE: f64 = 0.35;
pub const AFTERNOON_SNACK_SHARE: f64 = 0.15;
pub const DINNER_SHARE: f64 = 0.25;

pub const BREAKFAST_TIME: &str = "08:00";
pub const LUNCH_TIME: &str = "12:30";
pub const AFTERNOON_SNACK_TIME: &str = "16:00";
pub const DINNER_TIME: &str = "19:30";

// ─────────────────────────────────────────────────────────────────────────────
// Suggestions
// ─────────────────────────────────────────────────────────────────────────────

pub const BREAKFAST_SUGGESTIONS: [&str; 5] = [
    "Plain yogurt with fruit and granola",
    "Scrambled eggs with wholegrain bread and a piece of fruit",
    "Fruit smoothie with oats and chia seeds",
    "Tapioca crepe with white cheese and tomato",
    "Banana oat pancakes with cinnamon",
];

pub const LUNCH_SUGGESTIONS: [&str; 5] = [
    "Colourful salad with grilled chicken and quinoa",
    "Baked fish with sweet potato and steamed vegetables",
    "Lentils with brown rice and a green leaf salad",
    "Minced beef with parsnip mash and broccoli",
    "Wholegrain wrap with tuna, vegetables and hummus",
];

pub const AFTERNOON_SNACK_SUGGESTIONS: [&str; 5] = [
    "Mixed nuts and a piece of fruit",
    "Yogurt with honey and walnuts",
    "Carrot and cucumber sticks with peanut butter",
    "Rice cakes with avocado and cherry tomatoes",
    "A handful of dried fruit (apricots, prunes)",
];

pub const DINNER_SUGGESTIONS: [&str; 5] = [
    "Vegetable soup with wholegrain croutons",
    "Mushroom omelette with salad",
    "Grilled salmon with asparagus and wild rice",
    "Shredded chicken with sautéed vegetables",
    "Pumpkin and ginger soup with sunflower seeds",
];

// ─────────────────────────────────────────────────────────────────────────────
// Wizard
// ─────────────────────────────────────────────────────────────────────────────

/// Number of questions asked before a plan is generated.
pub const TOTAL_STEPS: u8 = 7;

/// Minimum jaro-winkler score for a "did you mean" hint.
pub const CHOICE_HINT_THRESHOLD: f64 = 0.7;
