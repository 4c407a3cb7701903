// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging setup and sample meal plan records
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `mealplan_insights`

use mealplan_insights::models::PlanRecord;
use serde_json::{json, Value};
use std::env;
use std::sync::Once;
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // TEST_LOG controls the test logging level
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Generated-text plan with markers, bullets, and a shopping list
pub const NIGERIAN_TEXT_PLAN: &str = "\
**Day 1**
Breakfast: Akara with pap (350 calories)
- black-eyed peas
- pap
Lunch: Jollof rice with chicken (600 calories)
- long grain rice
- chicken thighs
Dinner: Egusi soup with fufu
- ground egusi
- spinach
- Tip: cook the soup in advance
Snack: Roasted plantain
**Day 2**
Breakfast: Moi moi
Lunch: Ofada rice and stew 700 calories
Dinner: Pepper soup
Snack: Groundnuts
**Grocery Shopping List:**
- onions
- scotch bonnet
- prep bowls
";

/// Generated-text plan with international dishes and no day markers
pub const INTERNATIONAL_TEXT_PLAN: &str = "\
Breakfast: Avocado toast
* sourdough bread
* avocado
Lunch: Quinoa salad
* quinoa
* cherry tomatoes
Dinner: Salmon with greens
* salmon fillet
* kale
Snack: Greek yogurt
* greek yogurt
* Prep time: 5 mins
";

/// Structured plan object: two days, calories per meal
pub fn structured_plan_value() -> Value {
    json!({
        "days": [
            {
                "meals": [
                    { "name": "Breakfast", "calories": 400, "ingredients": ["Oats", "Banana"], "culturalContext": "International" },
                    { "name": "Lunch", "calories": 700, "ingredients": ["Rice", "Beans"], "culturalContext": "Nigerian" },
                    { "name": "Dinner", "calories": 600, "ingredients": ["Yam", "Egg Sauce"], "culturalContext": "Nigerian" }
                ]
            },
            {
                "meals": [
                    { "name": "Breakfast", "calories": 350, "ingredients": ["oats", "Milk"] },
                    { "name": "Dinner", "calories": 750, "ingredients": ["Chicken", "Plantain"] }
                ]
            }
        ]
    })
}

/// A representative mixed batch: raw text, JSON text, and structured records
pub fn sample_batch() -> Vec<PlanRecord> {
    vec![
        PlanRecord::from_text(NIGERIAN_TEXT_PLAN),
        PlanRecord::from_text(INTERNATIONAL_TEXT_PLAN),
        PlanRecord::from_text(structured_plan_value().to_string()),
        PlanRecord::from_value(structured_plan_value()),
    ]
}
