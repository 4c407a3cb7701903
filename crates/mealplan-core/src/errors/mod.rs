// ABOUTME: Error types for meal plan extraction and analytics configuration
// ABOUTME: Per-record extraction faults are isolated values, never propagated to callers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Error Types
//!
//! - `ExtractionError` - a single plan record could not be turned into metrics.
//!   The analytics pipeline records it against the record and moves on.
//! - `ConfigError` - analytics configuration failed validation.

use thiserror::Error;

/// Why a single plan record contributed nothing to the batch
#[derive(Debug, Error)]
pub enum ExtractionError {
    /// Record has no `data` payload at all
    #[error("plan record has no data")]
    MissingData,

    /// Payload decoded, but is neither a `days` plan nor a `raw` text plan
    #[error("unexpected plan shape: {reason}")]
    UnexpectedShape {
        /// What was wrong with the shape
        reason: String,
    },

    /// The `days` array holds entries of the wrong type
    #[error("malformed plan days: {0}")]
    MalformedDays(#[from] serde_json::Error),
}

impl ExtractionError {
    /// Create an "unexpected shape" error
    #[must_use]
    pub fn unexpected_shape(reason: impl Into<String>) -> Self {
        Self::UnexpectedShape {
            reason: reason.into(),
        }
    }
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Value outside acceptable range (e.g., percentage not between 0-100)
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// Numeric value outside valid range for parameter
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),

    /// Failed to parse configuration value
    #[error("Parse error: {0}")]
    Parse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unexpected_shape_message() {
        let err = ExtractionError::unexpected_shape("`days` is not an array");
        assert_eq!(
            err.to_string(),
            "unexpected plan shape: `days` is not an array"
        );
    }

    #[test]
    fn test_malformed_days_from_serde() {
        let serde_err = serde_json::from_str::<Vec<u32>>("[\"x\"]").unwrap_err();
        let err: ExtractionError = serde_err.into();
        assert!(err.to_string().starts_with("malformed plan days"));
    }
}
