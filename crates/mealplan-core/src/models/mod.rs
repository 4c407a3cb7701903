// ABOUTME: Core data models for meal plan analytics
// ABOUTME: Re-exports plan records, structured day/meal entries, and user profile types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! - `PlanRecord`: one stored meal plan as handed over by the plan store
//! - `DayEntry` / `MealEntry`: the structured plan layout
//! - `UserProfile` / `FitnessGoal`: the declared goal used for progress scoring

mod plan;
mod profile;

pub use plan::{DayEntry, MealEntry, PlanRecord};
pub use profile::{FitnessGoal, UserProfile};
