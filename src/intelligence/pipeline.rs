// ABOUTME: End-to-end meal plan analysis from stored records to analytics, goal progress, and guidance
// ABOUTME: Folds records through normalization and extraction into a fresh accumulator per call
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Plan Analysis Pipeline
//!
//! [`PlanAnalyzer::analyze`] never fails. A record whose payload cannot be
//! understood is logged, reported in [`AnalyticsReport::record_outcomes`],
//! and left out of the totals while still counting toward `totalPlans`.

use crate::config::AnalyticsConfig;
use mealplan_core::errors::ExtractionError;
use mealplan_core::models::{PlanRecord, UserProfile};
use serde::{Serialize, Serializer};
use std::fmt::Display;
use std::sync::Arc;
use tracing::{debug, info, warn};

use super::aggregator::{AggregatedAnalytics, PlanAccumulator};
use super::goal_scorer::{score_goal, GoalProgress};
use super::metric_extractor::MetricExtractor;
use super::recommendation_engine::RecommendationEngine;

/// Result of analyzing one batch of plan records
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsReport {
    /// Batch summary; `None` for an empty batch
    pub analytics: Option<AggregatedAnalytics>,
    /// Progress toward the profile's goal, when it has a target
    pub goal_progress: Option<GoalProgress>,
    /// Guidance derived from the analytics (possibly empty)
    pub recommendations: Vec<String>,
    /// What happened to each input record, in input order
    pub record_outcomes: Vec<RecordOutcome>,
}

impl AnalyticsReport {
    /// Records that could not be analyzed
    pub fn failures(&self) -> impl Iterator<Item = &RecordOutcome> {
        self.record_outcomes
            .iter()
            .filter(|outcome| matches!(outcome, RecordOutcome::Failed { .. }))
    }
}

/// Per-record outcome
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum RecordOutcome {
    /// Record contributed to the batch
    Extracted {
        /// Position in the input
        index: usize,
        /// Calories the record added to the batch total
        calories: f64,
        /// Days the record added to the batch total
        days: u64,
    },
    /// Record was skipped
    Failed {
        /// Position in the input
        index: usize,
        /// Why the record was skipped
        #[serde(serialize_with = "serialize_display")]
        error: ExtractionErrorRef,
    },
}

/// Shared handle to an extraction error so outcomes stay cloneable
pub type ExtractionErrorRef = Arc<ExtractionError>;

fn serialize_display<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    T: Display,
    S: Serializer,
{
    serializer.collect_str(value)
}

/// Runs the full analysis with one configuration
#[derive(Debug, Clone, Default)]
pub struct PlanAnalyzer {
    config: AnalyticsConfig,
    extractor: MetricExtractor,
    recommendations: RecommendationEngine,
}

impl PlanAnalyzer {
    /// Create an analyzer from configuration
    #[must_use]
    pub fn new(config: AnalyticsConfig) -> Self {
        Self {
            extractor: MetricExtractor::new(config.extraction.clone()),
            recommendations: RecommendationEngine::new(config.recommendations.clone()),
            config,
        }
    }

    /// Configuration in use
    #[must_use]
    pub const fn config(&self) -> &AnalyticsConfig {
        &self.config
    }

    /// Analyze a batch of records for an optional user profile
    #[must_use]
    pub fn analyze(
        &self,
        records: &[PlanRecord],
        profile: Option<&UserProfile>,
    ) -> AnalyticsReport {
        let mut accumulator = PlanAccumulator::new();
        let mut record_outcomes = Vec::with_capacity(records.len());

        for (index, record) in records.iter().enumerate() {
            accumulator.record_plan();

            match self.extractor.extract_record(record) {
                Ok(extraction) => {
                    let days = extraction.metrics.days_found;
                    let calories = accumulator.absorb(extraction);
                    debug!(index, calories, days, "extracted plan record");
                    record_outcomes.push(RecordOutcome::Extracted {
                        index,
                        calories,
                        days,
                    });
                }
                Err(error) => {
                    warn!(index, error = %error, "skipping unreadable plan record");
                    record_outcomes.push(RecordOutcome::Failed {
                        index,
                        error: ExtractionErrorRef::new(error),
                    });
                }
            }
        }

        let analytics = accumulator.finish();
        let goal_progress = analytics.as_ref().and_then(|summary| {
            score_goal(profile, summary.avg_calories, &self.config.goal_targets)
        });
        let recommendations = analytics
            .as_ref()
            .map(|summary| self.recommendations.generate(summary, goal_progress.as_ref()))
            .unwrap_or_default();

        let failed = record_outcomes
            .iter()
            .filter(|outcome| matches!(outcome, RecordOutcome::Failed { .. }))
            .count();
        info!(
            total_plans = accumulator.total_plans(),
            failed,
            avg_calories = analytics.as_ref().map(|summary| summary.avg_calories),
            progress_percent = goal_progress.as_ref().map(|progress| progress.progress_percent),
            recommendations = recommendations.len(),
            "analyzed meal plan batch"
        );

        AnalyticsReport {
            analytics,
            goal_progress,
            recommendations,
            record_outcomes,
        }
    }
}

/// Analyze a batch with the default configuration
#[must_use]
pub fn analyze_plans(records: &[PlanRecord], profile: Option<&UserProfile>) -> AnalyticsReport {
    PlanAnalyzer::default().analyze(records, profile)
}
