// ABOUTME: Configuration module for meal plan analytics settings
// ABOUTME: Re-exports analytics configuration types and their environment loader
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Extraction estimates, goal targets, and recommendation thresholds
pub mod analytics;

pub use analytics::{
    AnalyticsConfig, ExtractionConfig, GoalTargetsConfig, RecommendationThresholds,
};
pub use mealplan_core::errors::ConfigError;
