// ABOUTME: Heuristic metric extraction from canonical meal plans
// ABOUTME: Calorie, ingredient, meal-type, day-count, and cultural-tag rules over structured or raw plans
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Metric extraction
//!
//! Structured plans are read field by field. Raw text plans go through a set
//! of independent pattern rules that may all fire on the same text:
//!
//! - calories: every `<n> calorie(s)` mention, and again every `(<n> calorie(s))`
//!   mention, so parenthesized mentions count twice
//! - ingredients: bullet lines, minus tips, prep notes, and calorie lines
//! - shopping list: bullet lines under "Grocery Shopping List:", unfiltered
//! - meal types: `Breakfast:` / `Lunch:` / `Dinner:` / `Snack:` labels as written
//! - days: `Day <n>` lines, else meal-type lines divided by meals per day
//! - cultural tags: keyword presence, one tag per keyword family

use crate::config::ExtractionConfig;
use mealplan_core::constants::keywords::{
    INGREDIENT_EXCLUSIONS, INTERNATIONAL_KEYWORDS, INTERNATIONAL_TAG, MIN_INGREDIENT_CHARS,
    NIGERIAN_KEYWORDS, NIGERIAN_TAG,
};
use mealplan_core::errors::ExtractionError;
use mealplan_core::models::{DayEntry, PlanRecord};
use regex::Regex;
use std::collections::BTreeSet;
use std::sync::LazyLock;

use super::plan_normalizer::{normalize_plan, CanonicalPlan};

// Stored as Option so a pattern that fails to compile disables its rule instead of panicking

static CALORIE_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    // Matches: 300 calories, 450calorie, 1200 Calories
    Regex::new(r"(?i)(\d+)\s*calories?").ok()
});

static PARENTHESIZED_CALORIE_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    // Matches: (300 calories), (450 Calorie)
    Regex::new(r"(?i)\((\d+)\s*calories?\)").ok()
});

static BULLET_LINE_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    // Matches: "- rice", "-rice", "  * 2 eggs", "*beans"; not "**Day 1**"
    Regex::new(r"(?m)^[ \t]*(?:-[ \t]*(\S.*)|\*[ \t]+(\S.*)|\*([^*\s].*))$").ok()
});

static SHOPPING_LIST_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    // Section body runs to the next bold marker or end of text
    Regex::new(r"(?is)grocery shopping list:\**(.*?)(?:\*\*|\z)").ok()
});

static MEAL_TYPE_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    // Matches: "Breakfast:", "  lunch:", "DINNER:"
    Regex::new(r"(?im)^[ \t]*(breakfast|lunch|dinner|snack):").ok()
});

static DAY_MARKER_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    // Matches: "Day 1", "**Day 12**"
    Regex::new(r"\bDay\s+\d+\b").ok()
});

/// Metrics found in a single plan
///
/// Written into the batch accumulator, never kept per plan.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtractedMetrics {
    /// Calories found in the plan
    pub calories_found: f64,
    /// Days found in the plan
    pub days_found: u64,
    /// Lowercased ingredient names
    pub ingredient_mentions: BTreeSet<String>,
    /// Meal type labels, as written
    pub meal_type_mentions: BTreeSet<String>,
    /// Cultural tags
    pub cultural_tags: BTreeSet<String>,
}

/// Everything one record contributes to the batch
#[derive(Debug, Clone, PartialEq)]
pub struct RecordExtraction {
    /// Plan metrics with the record's metadata overrides already added
    pub metrics: ExtractedMetrics,
    /// Calories to inject if the batch still has no calorie data
    ///
    /// `None` when the record had no plan content to estimate from.
    pub fallback_calories: Option<f64>,
}

/// Applies the extraction rules with the configured estimates
#[derive(Debug, Clone, Default)]
pub struct MetricExtractor {
    config: ExtractionConfig,
}

impl MetricExtractor {
    /// Create an extractor with the given estimates
    #[must_use]
    pub const fn new(config: ExtractionConfig) -> Self {
        Self { config }
    }

    /// Normalize and extract one record, including its metadata overrides
    ///
    /// # Errors
    ///
    /// Returns an error if the record's payload has an unexpected shape; the
    /// record then contributes nothing to the batch
    pub fn extract_record(
        &self,
        record: &PlanRecord,
    ) -> Result<RecordExtraction, ExtractionError> {
        let plan = normalize_plan(&record.data)?;
        let mut metrics = self.extract(&plan);

        if let Some(calories) = record.positive_estimated_calories() {
            metrics.calories_found += calories;
        }
        let declared_days = record.positive_total_days();
        if let Some(days) = declared_days {
            metrics.days_found = metrics.days_found.saturating_add(days);
        }

        let fallback_calories = plan.has_content().then(|| {
            let days = declared_days.unwrap_or_else(|| u64::from(self.config.fallback_plan_days));
            self.config.fallback_daily_calories * days as f64
        });

        Ok(RecordExtraction {
            metrics,
            fallback_calories,
        })
    }

    /// Extract metrics from a canonical plan
    #[must_use]
    pub fn extract(&self, plan: &CanonicalPlan) -> ExtractedMetrics {
        match plan {
            CanonicalPlan::Structured(days) => extract_structured(days),
            CanonicalPlan::RawText(text) => self.extract_raw_text(text),
        }
    }

    fn extract_raw_text(&self, text: &str) -> ExtractedMetrics {
        let mut ingredient_mentions = extract_ingredients(text);
        ingredient_mentions.extend(extract_shopping_list(text));

        let meal_type_lines = extract_meal_type_lines(text);
        let day_markers = count_day_markers(text);
        let days_found = if day_markers > 0 {
            day_markers
        } else {
            estimate_days(meal_type_lines.len() as u64, self.config.meals_per_day)
        };

        ExtractedMetrics {
            calories_found: extract_calories(text),
            days_found,
            ingredient_mentions,
            meal_type_mentions: meal_type_lines.into_iter().collect(),
            cultural_tags: detect_cultural_tags(text),
        }
    }
}

fn extract_structured(days: &[DayEntry]) -> ExtractedMetrics {
    let mut metrics = ExtractedMetrics::default();

    for day in days {
        if let Some(total) = non_negative(day.total_calories) {
            metrics.calories_found += total;
        }
        metrics.days_found = metrics.days_found.saturating_add(1);

        for meal in day.meals.iter().flatten() {
            if let Some(calories) = non_negative(meal.calories) {
                metrics.calories_found += calories;
            }
            metrics.ingredient_mentions.extend(
                meal.ingredients
                    .iter()
                    .flatten()
                    .map(|ingredient| ingredient.to_lowercase()),
            );
            if let Some(name) = &meal.name {
                metrics.meal_type_mentions.insert(name.clone());
            }
            if let Some(context) = &meal.cultural_context {
                metrics.cultural_tags.insert(context.clone());
            }
        }
    }

    metrics
}

/// Negative calorie fields are ignored
fn non_negative(calories: Option<f64>) -> Option<f64> {
    calories.filter(|value| *value >= 0.0)
}

/// Sum of every calorie mention, parenthesized mentions counted twice
#[must_use]
pub fn extract_calories(text: &str) -> f64 {
    sum_captured_numbers(CALORIE_PATTERN.as_ref(), text)
        + sum_captured_numbers(PARENTHESIZED_CALORIE_PATTERN.as_ref(), text)
}

fn sum_captured_numbers(pattern: Option<&Regex>, text: &str) -> f64 {
    pattern.map_or(0.0, |re| {
        re.captures_iter(text)
            .filter_map(|caps| caps.get(1))
            .filter_map(|number| number.as_str().parse::<f64>().ok())
            .sum()
    })
}

/// Bullet-line ingredients, excluding tips, prep notes, and calorie lines
#[must_use]
pub fn extract_ingredients(text: &str) -> BTreeSet<String> {
    bullet_items(text)
        .filter(|item| {
            let lower = item.to_lowercase();
            !INGREDIENT_EXCLUSIONS
                .iter()
                .any(|excluded| lower.contains(excluded))
        })
        .map(str::to_lowercase)
        .collect()
}

/// Bullet-line items of the grocery shopping list section, unfiltered
#[must_use]
pub fn extract_shopping_list(text: &str) -> BTreeSet<String> {
    SHOPPING_LIST_PATTERN
        .as_ref()
        .and_then(|re| re.captures(text))
        .and_then(|caps| caps.get(1))
        .map(|section| bullet_items(section.as_str()).map(str::to_lowercase).collect())
        .unwrap_or_default()
}

/// Trimmed bullet contents long enough to be an ingredient
fn bullet_items(text: &str) -> impl Iterator<Item = &str> {
    BULLET_LINE_PATTERN
        .as_ref()
        .into_iter()
        .flat_map(move |re| re.captures_iter(text))
        .filter_map(|caps| caps.iter().skip(1).flatten().next())
        .map(|item| item.as_str().trim())
        .filter(|item| item.chars().count() > MIN_INGREDIENT_CHARS)
}

/// Meal type labels in order of appearance, case preserved, duplicates kept
#[must_use]
pub fn extract_meal_type_lines(text: &str) -> Vec<String> {
    MEAL_TYPE_PATTERN.as_ref().map_or_else(Vec::new, |re| {
        re.captures_iter(text)
            .filter_map(|caps| caps.get(1))
            .map(|label| label.as_str().trim().to_owned())
            .collect()
    })
}

/// Number of lines carrying a `Day <n>` marker
#[must_use]
pub fn count_day_markers(text: &str) -> u64 {
    DAY_MARKER_PATTERN.as_ref().map_or(0, |re| {
        text.lines().filter(|line| re.is_match(line)).count() as u64
    })
}

/// Days implied by a number of meal lines, rounding up
#[must_use]
pub fn estimate_days(meal_lines: u64, meals_per_day: u32) -> u64 {
    if meals_per_day == 0 {
        return 0;
    }
    meal_lines.div_ceil(u64::from(meals_per_day))
}

/// Cultural tags implied by keyword presence
#[must_use]
pub fn detect_cultural_tags(text: &str) -> BTreeSet<String> {
    let lower = text.to_lowercase();
    let mut tags = BTreeSet::new();

    if NIGERIAN_KEYWORDS.iter().any(|keyword| lower.contains(keyword)) {
        tags.insert(NIGERIAN_TAG.to_owned());
    }
    if INTERNATIONAL_KEYWORDS
        .iter()
        .any(|keyword| lower.contains(keyword))
    {
        tags.insert(INTERNATIONAL_TAG.to_owned());
    }

    tags
}
