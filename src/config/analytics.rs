// ABOUTME: Analytics configuration for plan extraction, goal targets, and recommendation thresholds
// ABOUTME: Defaults come from mealplan-core constants and can be overridden through MEALPLAN_* variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Meal Plan Analytics Configuration
//!
//! One configuration value per tunable number in the pipeline. The pipeline
//! itself never reads the environment; hosts call [`AnalyticsConfig::load`]
//! (or use the defaults) and pass the result in.

use mealplan_core::constants::{extraction, goal_targets, recommendation_thresholds};
use mealplan_core::errors::ConfigError;
use mealplan_core::models::FitnessGoal;
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;

/// Meal plan analytics configuration container
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsConfig {
    /// Metric extractor estimates and fallbacks
    pub extraction: ExtractionConfig,
    /// Daily calorie target per fitness goal
    pub goal_targets: GoalTargetsConfig,
    /// Thresholds that trigger recommendations
    pub recommendations: RecommendationThresholds,
}

/// Metric extractor configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionConfig {
    /// Meals per day used to estimate days from meal-type lines
    pub meals_per_day: u32,
    /// Daily calories injected while the batch has no calorie data
    pub fallback_daily_calories: f64,
    /// Plan length used by the fallback when a record has no `totalDays`
    pub fallback_plan_days: u32,
}

/// Daily calorie targets per goal (kcal/day)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalTargetsConfig {
    /// `weight_loss` target
    pub weight_loss: f64,
    /// `muscle_gain` target
    pub muscle_gain: f64,
    /// `maintenance` target
    pub maintenance: f64,
}

/// Thresholds for the recommendation generator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationThresholds {
    /// Ingredient diversity below this suggests more variety
    pub min_ingredient_diversity: usize,
    /// Meal diversity below this suggests new meal types
    pub min_meal_diversity: usize,
    /// Goal progress below this suggests adjusting calorie intake
    pub min_goal_progress_percent: u8,
    /// Plan count at or above this earns positive reinforcement
    pub consistency_plan_count: usize,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            meals_per_day: extraction::MEALS_PER_DAY,
            fallback_daily_calories: extraction::FALLBACK_DAILY_CALORIES,
            fallback_plan_days: extraction::FALLBACK_PLAN_DAYS,
        }
    }
}

impl Default for GoalTargetsConfig {
    fn default() -> Self {
        Self {
            weight_loss: goal_targets::WEIGHT_LOSS_CALORIES,
            muscle_gain: goal_targets::MUSCLE_GAIN_CALORIES,
            maintenance: goal_targets::MAINTENANCE_CALORIES,
        }
    }
}

impl Default for RecommendationThresholds {
    fn default() -> Self {
        Self {
            min_ingredient_diversity: recommendation_thresholds::MIN_INGREDIENT_DIVERSITY,
            min_meal_diversity: recommendation_thresholds::MIN_MEAL_DIVERSITY,
            min_goal_progress_percent: recommendation_thresholds::MIN_GOAL_PROGRESS_PERCENT,
            consistency_plan_count: recommendation_thresholds::CONSISTENCY_PLAN_COUNT,
        }
    }
}

impl GoalTargetsConfig {
    /// Daily calorie target for a goal; `None` for goals without a target
    #[must_use]
    pub fn target_for(&self, goal: &FitnessGoal) -> Option<f64> {
        match goal {
            FitnessGoal::WeightLoss => Some(self.weight_loss),
            FitnessGoal::MuscleGain => Some(self.muscle_gain),
            FitnessGoal::Maintenance => Some(self.maintenance),
            FitnessGoal::Other(_) => None,
        }
    }
}

impl AnalyticsConfig {
    /// Load configuration: defaults, then environment overrides, then validation
    ///
    /// # Errors
    ///
    /// Returns an error if an environment variable holds an unparsable value
    /// or the resulting configuration fails validation
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        Self::apply_env_var("MEALPLAN_MEALS_PER_DAY", &mut self.extraction.meals_per_day)?;
        Self::apply_env_var(
            "MEALPLAN_FALLBACK_DAILY_CALORIES",
            &mut self.extraction.fallback_daily_calories,
        )?;
        Self::apply_env_var(
            "MEALPLAN_FALLBACK_PLAN_DAYS",
            &mut self.extraction.fallback_plan_days,
        )?;

        Self::apply_env_var(
            "MEALPLAN_TARGET_WEIGHT_LOSS",
            &mut self.goal_targets.weight_loss,
        )?;
        Self::apply_env_var(
            "MEALPLAN_TARGET_MUSCLE_GAIN",
            &mut self.goal_targets.muscle_gain,
        )?;
        Self::apply_env_var(
            "MEALPLAN_TARGET_MAINTENANCE",
            &mut self.goal_targets.maintenance,
        )?;

        Self::apply_env_var(
            "MEALPLAN_MIN_INGREDIENT_DIVERSITY",
            &mut self.recommendations.min_ingredient_diversity,
        )?;
        Self::apply_env_var(
            "MEALPLAN_MIN_MEAL_DIVERSITY",
            &mut self.recommendations.min_meal_diversity,
        )?;
        Self::apply_env_var(
            "MEALPLAN_MIN_GOAL_PROGRESS",
            &mut self.recommendations.min_goal_progress_percent,
        )?;
        Self::apply_env_var(
            "MEALPLAN_CONSISTENCY_PLAN_COUNT",
            &mut self.recommendations.consistency_plan_count,
        )?;

        Ok(self)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any estimate or target is non-positive, or the
    /// progress threshold exceeds 100%
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.extraction.meals_per_day == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "meals_per_day must be at least 1",
            ));
        }
        if self.extraction.fallback_plan_days == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "fallback_plan_days must be at least 1",
            ));
        }
        if !(self.extraction.fallback_daily_calories.is_finite()
            && self.extraction.fallback_daily_calories > 0.0)
        {
            return Err(ConfigError::ValueOutOfRange(
                "fallback_daily_calories must be positive",
            ));
        }

        let targets = [
            self.goal_targets.weight_loss,
            self.goal_targets.muscle_gain,
            self.goal_targets.maintenance,
        ];
        if targets.iter().any(|target| !(target.is_finite() && *target > 0.0)) {
            return Err(ConfigError::ValueOutOfRange(
                "goal calorie targets must be positive",
            ));
        }

        if self.recommendations.min_goal_progress_percent > goal_targets::MAX_PROGRESS_PERCENT {
            return Err(ConfigError::InvalidRange(
                "min_goal_progress_percent must be between 0 and 100",
            ));
        }

        Ok(())
    }
}
