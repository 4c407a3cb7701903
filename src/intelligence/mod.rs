// ABOUTME: Meal plan intelligence pipeline: normalization, extraction, aggregation, scoring, guidance
// ABOUTME: Re-exports the pipeline entry points and result types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Intelligence Module
//!
//! Turns stored meal plan records into batch analytics. Each record is
//! normalized into a [`CanonicalPlan`], mined for metrics, and folded into a
//! [`PlanAccumulator`]; the finished [`AggregatedAnalytics`] then feed goal
//! scoring and the recommendation rules.

/// Batch accumulator and summary statistics
pub mod aggregator;
/// Goal progress against per-goal calorie targets
pub mod goal_scorer;
/// Calorie, ingredient, meal-type, day, and cultural-tag rules
pub mod metric_extractor;
/// End-to-end batch analysis
pub mod pipeline;
/// Record payload normalization
pub mod plan_normalizer;
/// Threshold-based guidance
pub mod recommendation_engine;

pub use aggregator::{AggregatedAnalytics, PlanAccumulator};
pub use goal_scorer::{progress_percent, score_goal, GoalProgress};
pub use metric_extractor::{ExtractedMetrics, MetricExtractor, RecordExtraction};
pub use pipeline::{analyze_plans, AnalyticsReport, PlanAnalyzer, RecordOutcome};
pub use plan_normalizer::{normalize_plan, CanonicalPlan};
pub use recommendation_engine::RecommendationEngine;
