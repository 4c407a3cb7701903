// ABOUTME: Integration tests for plan normalization and metric extraction
// ABOUTME: Covers raw text, JSON text, and structured plans including extraction edge cases
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]
#![allow(
    clippy::float_cmp,
    clippy::cast_precision_loss,
    clippy::missing_panics_doc,
    clippy::too_many_lines
)]

mod common;

use common::{
    init_test_logging, structured_plan_value, INTERNATIONAL_TEXT_PLAN, NIGERIAN_TEXT_PLAN,
};
use mealplan_insights::config::ExtractionConfig;
use mealplan_insights::errors::ExtractionError;
use mealplan_insights::intelligence::{
    normalize_plan, CanonicalPlan, ExtractedMetrics, MetricExtractor,
};
use mealplan_insights::models::PlanRecord;
use serde_json::json;

fn extract(record: &PlanRecord) -> ExtractedMetrics {
    init_test_logging();
    MetricExtractor::default()
        .extract_record(record)
        .unwrap()
        .metrics
}

#[test]
fn test_nigerian_text_plan_metrics() {
    let metrics = extract(&PlanRecord::from_text(NIGERIAN_TEXT_PLAN));

    // 350 + 600 + 700, plus 350 + 600 again for the parenthesized mentions
    assert_eq!(metrics.calories_found, 2600.0);
    assert_eq!(metrics.days_found, 2);
    assert_eq!(metrics.ingredient_mentions.len(), 9);
    assert!(metrics.ingredient_mentions.contains("black-eyed peas"));
    assert!(metrics.ingredient_mentions.contains("scotch bonnet"));
    // Shopping list items bypass the exclusion filter
    assert!(metrics.ingredient_mentions.contains("prep bowls"));
    assert!(!metrics
        .ingredient_mentions
        .iter()
        .any(|item| item.starts_with("tip")));
    assert_eq!(
        metrics.meal_type_mentions.iter().collect::<Vec<_>>(),
        vec!["Breakfast", "Dinner", "Lunch", "Snack"]
    );
    assert_eq!(
        metrics.cultural_tags.iter().collect::<Vec<_>>(),
        vec!["Nigerian"]
    );
}

#[test]
fn test_international_text_plan_metrics() {
    let metrics = extract(&PlanRecord::from_text(INTERNATIONAL_TEXT_PLAN));

    assert_eq!(metrics.calories_found, 0.0);
    // Four meal lines and no day markers
    assert_eq!(metrics.days_found, 1);
    assert_eq!(metrics.ingredient_mentions.len(), 7);
    assert!(!metrics
        .ingredient_mentions
        .iter()
        .any(|item| item.contains("prep")));
    assert_eq!(
        metrics.cultural_tags.iter().collect::<Vec<_>>(),
        vec!["International"]
    );
}

#[test]
fn test_json_text_and_object_extract_identically() {
    let from_text = extract(&PlanRecord::from_text(structured_plan_value().to_string()));
    let from_object = extract(&PlanRecord::from_value(structured_plan_value()));

    assert_eq!(from_text, from_object);
    assert_eq!(from_object.calories_found, 2800.0);
    assert_eq!(from_object.days_found, 2);
    assert_eq!(from_object.ingredient_mentions.len(), 9);
    assert!(from_object.ingredient_mentions.contains("egg sauce"));
    assert_eq!(from_object.meal_type_mentions.len(), 3);
    assert_eq!(from_object.cultural_tags.len(), 2);
}

#[test]
fn test_raw_field_is_analyzed_as_text() {
    let record = PlanRecord::from_value(json!({
        "raw": "Breakfast: Oatmeal (300 calories)\n- rolled oats"
    }));
    let metrics = extract(&record);
    assert_eq!(metrics.calories_found, 600.0);
    assert!(metrics.ingredient_mentions.contains("rolled oats"));
}

#[test]
fn test_structured_day_totals_add_to_meal_calories() {
    let record = PlanRecord::from_value(json!({
        "days": [{ "totalCalories": 1500, "meals": [{ "name": "Lunch", "calories": 500 }] }]
    }));
    assert_eq!(extract(&record).calories_found, 2000.0);
}

#[test]
fn test_text_that_is_not_json_stays_raw() {
    let plan = normalize_plan(&json!("{ not json at all")).unwrap();
    assert_eq!(plan, CanonicalPlan::RawText("{ not json at all".to_owned()));
}

#[test]
fn test_json_text_without_plan_fields_stays_raw() {
    let text = r#"{"title": "Weekly plan", "note": "Lunch: rice"}"#;
    let plan = normalize_plan(&json!(text)).unwrap();
    assert_eq!(plan, CanonicalPlan::RawText(text.to_owned()));
}

#[test]
fn test_json_scalar_text_stays_raw() {
    assert_eq!(
        normalize_plan(&json!("42")).unwrap(),
        CanonicalPlan::RawText("42".to_owned())
    );
}

#[test]
fn test_unexpected_shapes_are_errors() {
    assert!(matches!(
        normalize_plan(&json!(null)),
        Err(ExtractionError::MissingData)
    ));
    assert!(matches!(
        normalize_plan(&json!([1, 2, 3])),
        Err(ExtractionError::UnexpectedShape { .. })
    ));
    assert!(matches!(
        normalize_plan(&json!({ "title": "plan" })),
        Err(ExtractionError::UnexpectedShape { .. })
    ));
    assert!(matches!(
        normalize_plan(&json!({ "days": [{ "meals": "none" }] })),
        Err(ExtractionError::MalformedDays(_))
    ));
}

#[test]
fn test_meals_per_day_is_configurable() {
    let extractor = MetricExtractor::new(ExtractionConfig {
        meals_per_day: 3,
        ..ExtractionConfig::default()
    });
    let metrics = extractor
        .extract_record(&PlanRecord::from_text(INTERNATIONAL_TEXT_PLAN))
        .unwrap()
        .metrics;
    assert_eq!(metrics.days_found, 2);
}
