// ABOUTME: Batch accumulator folding per-record plan metrics into summary analytics
// ABOUTME: Owns the global ingredient, meal-type, and cultural sets plus calorie and day totals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::metric_extractor::RecordExtraction;

/// Summary statistics for one batch of meal plans
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregatedAnalytics {
    /// Calories per day across the batch (0 when no days were found)
    pub avg_calories: f64,
    /// Distinct ingredients across all plans
    pub ingredient_diversity: usize,
    /// Distinct meal type labels across all plans
    pub meal_diversity: usize,
    /// Distinct cultural tags across all plans
    pub cultural_diversity_score: usize,
    /// Records in the batch, faulty ones included
    pub total_plans: usize,
    /// Days found across all plans
    pub total_days: u64,
    /// Calories found across all plans
    pub total_calories: f64,
}

/// Running totals for one batch
///
/// Created fresh per analysis call; every record is first counted with
/// [`PlanAccumulator::record_plan`] and, if extraction succeeded, absorbed.
#[derive(Debug, Clone, Default)]
pub struct PlanAccumulator {
    total_plans: usize,
    total_calories: f64,
    total_days: u64,
    ingredients: BTreeSet<String>,
    meal_types: BTreeSet<String>,
    cultural_tags: BTreeSet<String>,
}

impl PlanAccumulator {
    /// Create an empty accumulator
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one input record, whether or not it extracts cleanly
    pub fn record_plan(&mut self) {
        self.total_plans += 1;
    }

    /// Fold one record's metrics into the batch
    ///
    /// When the batch has no calorie data after this record, the record's
    /// fallback estimate is added instead. Returns the calories this record
    /// contributed.
    pub fn absorb(&mut self, extraction: RecordExtraction) -> f64 {
        let RecordExtraction {
            metrics,
            fallback_calories,
        } = extraction;

        let before = self.total_calories;
        self.total_calories += metrics.calories_found;
        self.total_days = self.total_days.saturating_add(metrics.days_found);
        self.ingredients.extend(metrics.ingredient_mentions);
        self.meal_types.extend(metrics.meal_type_mentions);
        self.cultural_tags.extend(metrics.cultural_tags);

        if self.total_calories.abs() < f64::EPSILON {
            if let Some(fallback) = fallback_calories {
                self.total_calories += fallback;
            }
        }

        self.total_calories - before
    }

    /// Records counted so far
    #[must_use]
    pub const fn total_plans(&self) -> usize {
        self.total_plans
    }

    /// Snapshot the batch; `None` when no records were counted
    #[must_use]
    pub fn finish(&self) -> Option<AggregatedAnalytics> {
        if self.total_plans == 0 {
            return None;
        }

        let avg_calories = if self.total_days > 0 {
            self.total_calories / self.total_days as f64
        } else {
            0.0
        };

        Some(AggregatedAnalytics {
            avg_calories,
            ingredient_diversity: self.ingredients.len(),
            meal_diversity: self.meal_types.len(),
            cultural_diversity_score: self.cultural_tags.len(),
            total_plans: self.total_plans,
            total_days: self.total_days,
            total_calories: self.total_calories,
        })
    }
}
