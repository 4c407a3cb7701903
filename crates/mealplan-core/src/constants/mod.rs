// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Keyword lists, extraction defaults, goal targets, and recommendation thresholds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Pure data constants for meal plan analytics, grouped by the stage of the
//! pipeline that consumes them.

/// Keyword lists used by the cultural tag and ingredient rules
pub mod keywords {
    /// Tag added when any Nigerian cuisine keyword is present
    pub const NIGERIAN_TAG: &str = "Nigerian";

    /// Tag added when any international staple keyword is present
    pub const INTERNATIONAL_TAG: &str = "International";

    /// Nigerian cuisine keywords, matched as lowercase substrings
    pub const NIGERIAN_KEYWORDS: &[&str] = &[
        "jollof",
        "egusi",
        "ogbono",
        "akara",
        "moi moi",
        "suya",
        "plantain",
        "yam",
        "cassava",
        "palm oil",
        "coconut",
        "pepper soup",
        "banga soup",
        "efo riro",
        "fufu",
        "garri",
        "amala",
        "ofada",
    ];

    /// International staple keywords, matched as lowercase substrings
    pub const INTERNATIONAL_KEYWORDS: &[&str] = &["quinoa", "avocado"];

    /// Bullet lines containing any of these are not ingredients
    pub const INGREDIENT_EXCLUSIONS: &[&str] = &["calories", "tip", "prep"];

    /// Ingredient candidates must be longer than this many characters
    pub const MIN_INGREDIENT_CHARS: usize = 2;
}

/// Defaults for the metric extractor
pub mod extraction {
    /// Meals per day assumed when estimating days from meal-type lines
    pub const MEALS_PER_DAY: u32 = 4;

    /// Daily calories injected when a batch has no calorie data yet
    pub const FALLBACK_DAILY_CALORIES: f64 = 2000.0;

    /// Plan length assumed by the calorie fallback when `totalDays` is absent
    pub const FALLBACK_PLAN_DAYS: u32 = 3;
}

/// Daily calorie targets per fitness goal
pub mod goal_targets {
    /// `weight_loss` target (kcal/day)
    pub const WEIGHT_LOSS_CALORIES: f64 = 1800.0;

    /// `muscle_gain` target (kcal/day)
    pub const MUSCLE_GAIN_CALORIES: f64 = 2500.0;

    /// `maintenance` target (kcal/day)
    pub const MAINTENANCE_CALORIES: f64 = 2000.0;

    /// Upper bound for reported progress
    pub const MAX_PROGRESS_PERCENT: u8 = 100;

    /// Progress shown for any non-zero average that would round to zero
    pub const MIN_VISIBLE_PROGRESS_PERCENT: u8 = 1;
}

/// Thresholds that trigger recommendations
pub mod recommendation_thresholds {
    /// Below this many distinct ingredients, suggest more variety
    pub const MIN_INGREDIENT_DIVERSITY: usize = 20;

    /// Below this many distinct meal types, suggest new meal types
    pub const MIN_MEAL_DIVERSITY: usize = 15;

    /// Below this goal progress, suggest adjusting calorie intake
    pub const MIN_GOAL_PROGRESS_PERCENT: u8 = 80;

    /// At or above this many plans, send positive reinforcement
    pub const CONSISTENCY_PLAN_COUNT: usize = 5;
}
