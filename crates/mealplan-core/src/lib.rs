// ABOUTME: Core types and constants for the meal plan insights engine
// ABOUTME: Foundation crate with plan/profile models, error handling, and keyword lists
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Meal Plan Core
//!
//! Foundation crate providing the shared types for meal plan analytics. The
//! analytics crate depends on these models and constants and this crate is
//! expected to change rarely.
//!
//! ## Modules
//!
//! - **errors**: `ExtractionError` for isolated per-record faults and `ConfigError`
//! - **constants**: Keyword lists, default estimates, goal targets, thresholds
//! - **models**: `PlanRecord`, structured day/meal entries, `UserProfile`, `FitnessGoal`

/// Error types for per-record extraction faults and configuration validation
pub mod errors;

/// Analytics constants organized by domain
pub mod constants;

/// Plan records and user profile models
pub mod models;
