// ABOUTME: Meal plan record models as supplied by the plan storage collaborator
// ABOUTME: PlanRecord carries a loosely-typed payload plus optional metadata estimates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One stored meal plan
///
/// `data` is whatever the plan store kept: generated text, a JSON document
/// encoded as text, or an already-decoded JSON object.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlanRecord {
    /// Plan payload (text, JSON text, or JSON object)
    #[serde(default)]
    pub data: Value,
    /// Calorie estimate stored alongside the plan
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_calories: Option<f64>,
    /// Plan length stored alongside the plan
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_days: Option<i64>,
}

impl PlanRecord {
    /// Record holding a text payload (plain text or JSON text)
    #[must_use]
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            data: Value::String(text.into()),
            ..Self::default()
        }
    }

    /// Record holding an already-decoded payload
    #[must_use]
    pub fn from_value(data: Value) -> Self {
        Self {
            data,
            ..Self::default()
        }
    }

    /// Attach a stored calorie estimate
    #[must_use]
    pub const fn with_estimated_calories(mut self, calories: f64) -> Self {
        self.estimated_calories = Some(calories);
        self
    }

    /// Attach a stored plan length
    #[must_use]
    pub const fn with_total_days(mut self, days: i64) -> Self {
        self.total_days = Some(days);
        self
    }

    /// Stored calorie estimate, if positive
    #[must_use]
    pub fn positive_estimated_calories(&self) -> Option<f64> {
        self.estimated_calories.filter(|calories| *calories > 0.0)
    }

    /// Stored plan length, if positive
    #[must_use]
    pub fn positive_total_days(&self) -> Option<u64> {
        self.total_days
            .and_then(|days| u64::try_from(days).ok())
            .filter(|days| *days > 0)
    }
}

/// One day of a structured plan
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DayEntry {
    /// Calories for the whole day
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_calories: Option<f64>,
    /// Meals planned for the day
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meals: Option<Vec<MealEntry>>,
}

/// One meal within a structured plan day
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MealEntry {
    /// Meal name, used as its meal type (e.g. "Breakfast")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Calories for this meal
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calories: Option<f64>,
    /// Ingredient names
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<Vec<String>>,
    /// Cultural context label (e.g. "Nigerian")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cultural_context: Option<String>,
}
