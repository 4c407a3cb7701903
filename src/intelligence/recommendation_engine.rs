// ABOUTME: Threshold-based recommendations over aggregated meal plan analytics
// ABOUTME: Independent rules for ingredient variety, meal variety, calorie progress, and consistency
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Recommendation engine for meal plan insights

use crate::config::RecommendationThresholds;

use super::aggregator::AggregatedAnalytics;
use super::goal_scorer::GoalProgress;

/// Generates guidance from batch analytics using fixed thresholds
#[derive(Debug, Clone, Default)]
pub struct RecommendationEngine {
    thresholds: RecommendationThresholds,
}

impl RecommendationEngine {
    /// Create an engine with the given thresholds
    #[must_use]
    pub const fn new(thresholds: RecommendationThresholds) -> Self {
        Self { thresholds }
    }

    /// Every recommendation that applies, in a fixed order
    #[must_use]
    pub fn generate(
        &self,
        analytics: &AggregatedAnalytics,
        goal_progress: Option<&GoalProgress>,
    ) -> Vec<String> {
        let mut recommendations = Vec::new();

        if analytics.ingredient_diversity < self.thresholds.min_ingredient_diversity {
            recommendations.push(format!(
                "Try adding more variety to your ingredients: your plans use {} distinct ingredients. \
                 Mixing in new vegetables, grains, and proteins broadens your nutrient intake.",
                analytics.ingredient_diversity
            ));
        }

        if analytics.meal_diversity < self.thresholds.min_meal_diversity {
            recommendations.push(format!(
                "Explore new meal types: your plans cover {} distinct meals. \
                 Rotating breakfasts, lunches, dinners, and snacks keeps your plan interesting.",
                analytics.meal_diversity
            ));
        }

        if let Some(progress) = goal_progress {
            if progress.progress_percent < self.thresholds.min_goal_progress_percent {
                let goal_name = progress.goal.as_str().replace('_', " ");
                recommendations.push(format!(
                    "Consider adjusting your calorie intake: your plans reach {}% of the daily target for your {goal_name} goal.",
                    progress.progress_percent
                ));
            }
        }

        if analytics.total_plans >= self.thresholds.consistency_plan_count {
            recommendations.push(format!(
                "Great consistency! You have created {} meal plans. Keep it up.",
                analytics.total_plans
            ));
        }

        recommendations
    }
}
