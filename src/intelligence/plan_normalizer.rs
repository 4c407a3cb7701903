// ABOUTME: Plan normalizer turning loosely-typed plan payloads into a canonical plan shape
// ABOUTME: Dispatches JSON text and objects on `days`/`raw`; undecodable text stays raw text
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Plan normalization
//!
//! A stored plan may be free text, JSON encoded as text, or a decoded JSON
//! object. Everything downstream works on [`CanonicalPlan`] instead.
//!
//! Text that fails to decode as JSON is not a fault: it is the common case for
//! generated plans and becomes [`CanonicalPlan::RawText`].

use mealplan_core::errors::ExtractionError;
use mealplan_core::models::DayEntry;
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::debug;

/// Normalized plan, exactly one shape per record
#[derive(Debug, Clone, PartialEq)]
pub enum CanonicalPlan {
    /// Day-by-day structured plan
    Structured(Vec<DayEntry>),
    /// Single unstructured text blob
    RawText(String),
}

impl CanonicalPlan {
    /// Whether the plan carries anything to analyze
    #[must_use]
    pub fn has_content(&self) -> bool {
        match self {
            Self::Structured(days) => !days.is_empty(),
            Self::RawText(text) => !text.trim().is_empty(),
        }
    }
}

/// Normalize one record's `data` payload
///
/// # Errors
///
/// Returns an error when the payload is missing, is a JSON value that cannot
/// hold a plan, or holds a `days`/`raw` field of the wrong type
pub fn normalize_plan(data: &Value) -> Result<CanonicalPlan, ExtractionError> {
    match data {
        Value::Null => Err(ExtractionError::MissingData),
        Value::String(text) => normalize_text(text),
        Value::Object(fields) => dispatch_fields(fields)?.ok_or_else(|| {
            ExtractionError::unexpected_shape("object has neither `days` nor `raw`")
        }),
        Value::Array(_) => Err(ExtractionError::unexpected_shape(
            "payload is an array, expected text or an object",
        )),
        Value::Bool(_) | Value::Number(_) => Err(ExtractionError::unexpected_shape(
            "payload is a scalar, expected text or an object",
        )),
    }
}

fn normalize_text(text: &str) -> Result<CanonicalPlan, ExtractionError> {
    match serde_json::from_str::<Value>(text) {
        Ok(Value::Object(fields)) => Ok(dispatch_fields(&fields)?
            .unwrap_or_else(|| CanonicalPlan::RawText(text.to_owned()))),
        Ok(_) => Ok(CanonicalPlan::RawText(text.to_owned())),
        Err(e) => {
            debug!(error = %e, "Plan text is not JSON, treating as raw text");
            Ok(CanonicalPlan::RawText(text.to_owned()))
        }
    }
}

/// `days` wins over `raw`; `Ok(None)` when neither is present
fn dispatch_fields(
    fields: &Map<String, Value>,
) -> Result<Option<CanonicalPlan>, ExtractionError> {
    match fields.get("days") {
        None | Some(Value::Null) => {}
        Some(days @ Value::Array(_)) => {
            let days = Vec::<DayEntry>::deserialize(days)?;
            return Ok(Some(CanonicalPlan::Structured(days)));
        }
        Some(_) => return Err(ExtractionError::unexpected_shape("`days` is not an array")),
    }

    match fields.get("raw") {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(raw)) => Ok(Some(CanonicalPlan::RawText(raw.clone()))),
        Some(_) => Err(ExtractionError::unexpected_shape("`raw` is not a string")),
    }
}
