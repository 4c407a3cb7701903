// ABOUTME: Main library entry point for meal plan insights analytics
// ABOUTME: Derives calorie, diversity, goal progress, and recommendation insights from stored meal plans
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

// Crate-level attributes:
// - deny(unsafe_code): Zero-tolerance unsafe policy
#![deny(unsafe_code)]

//! # Meal Plan Insights
//!
//! Turns a batch of stored meal plans into comparable statistics. Records may
//! hold generated free text, JSON encoded as text, or structured day-by-day
//! plans; malformed records are isolated and never fail the batch.
//!
//! ## Pipeline
//!
//! - **Plan normalizer**: each record's payload becomes a structured or raw text plan
//! - **Metric extractor**: calories, days, ingredients, meal types, and cultural tags
//! - **Aggregator**: global sets and totals folded across the batch
//! - **Goal scorer**: average calories against the profile's goal target
//! - **Recommendation engine**: guidance from fixed thresholds
//!
//! ## Example Usage
//!
//! ```rust
//! use mealplan_insights::intelligence::analyze_plans;
//! use mealplan_insights::models::{PlanRecord, UserProfile};
//!
//! let records = vec![PlanRecord::from_text(
//!     "Day 1\nBreakfast: Akara with pap (350 calories)\n- bean cakes",
//! )];
//! let profile = UserProfile::with_goal("weight_loss");
//!
//! let report = analyze_plans(&records, Some(&profile));
//! assert_eq!(report.analytics.map(|a| a.total_plans), Some(1));
//! ```

/// Analytics configuration with environment overrides
pub mod config;

/// Normalization, extraction, aggregation, scoring, and recommendations
pub mod intelligence;

/// Structured logging configuration
pub mod logging;

/// Keyword lists and default thresholds
pub use mealplan_core::constants;

/// Typed errors for extraction and configuration
pub use mealplan_core::errors;

/// Plan record and user profile models
pub use mealplan_core::models;
