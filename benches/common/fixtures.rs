// ABOUTME: Benchmark fixtures for generating realistic meal plan records
// ABOUTME: Provides deterministic raw text and structured plans for reproducible measurements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Benchmark fixtures for generating realistic meal plan records.

use mealplan_insights::models::PlanRecord;
use serde_json::json;

/// Predefined batch sizes for benchmark scenarios
#[derive(Debug, Clone, Copy)]
pub enum PlanBatchSize {
    /// Small batch (10 plans) - a new user
    Small,
    /// Medium batch (100 plans) - a long-time user
    Medium,
}

impl PlanBatchSize {
    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            Self::Small => 10,
            Self::Medium => 100,
        }
    }
}

const DISHES: [(&str, &str); 6] = [
    ("Jollof rice with chicken", "long grain rice"),
    ("Egusi soup with pounded yam", "ground melon seeds"),
    ("Quinoa salad", "quinoa"),
    ("Akara and pap", "black-eyed peas"),
    ("Avocado toast", "sourdough bread"),
    ("Grilled fish with plantain", "tilapia"),
];

/// Generated-text plan for the given seed, three days long
#[must_use]
pub fn raw_text_plan(seed: usize) -> String {
    let mut text = String::new();
    for day in 1..=3 {
        text.push_str(&format!("**Day {day}**\n"));
        for (offset, meal) in ["Breakfast", "Lunch", "Dinner", "Snack"].iter().enumerate() {
            let (dish, ingredient) = DISHES[(seed + day + offset) % DISHES.len()];
            let calories = 250 + ((seed * 37 + offset * 91) % 400);
            text.push_str(&format!("{meal}: {dish} ({calories} calories)\n"));
            text.push_str(&format!("- {ingredient}\n- seasoning blend {}\n", seed % 7));
        }
        text.push_str("- Tip: prepare the night before\n");
    }
    text.push_str("**Grocery Shopping List:**\n- onions\n- tomatoes\n- palm oil\n");
    text
}

/// Structured plan for the given seed, three days long
#[must_use]
pub fn structured_plan(seed: usize) -> serde_json::Value {
    let days: Vec<_> = (0..3)
        .map(|day| {
            let meals: Vec<_> = ["Breakfast", "Lunch", "Dinner"]
                .iter()
                .enumerate()
                .map(|(offset, name)| {
                    let (dish, ingredient) = DISHES[(seed + day + offset) % DISHES.len()];
                    json!({
                        "name": name,
                        "calories": 300 + ((seed * 13 + offset * 71) % 500),
                        "ingredients": [ingredient, dish],
                        "culturalContext": if offset % 2 == 0 { "Nigerian" } else { "International" }
                    })
                })
                .collect();
            json!({ "meals": meals })
        })
        .collect();
    json!({ "days": days })
}

/// Mixed batch alternating raw text, JSON text, and structured records
#[must_use]
pub fn generate_plans(size: PlanBatchSize) -> Vec<PlanRecord> {
    (0..size.count())
        .map(|seed| match seed % 3 {
            0 => PlanRecord::from_text(raw_text_plan(seed)),
            1 => PlanRecord::from_text(structured_plan(seed).to_string()),
            _ => PlanRecord::from_value(structured_plan(seed)),
        })
        .collect()
}
