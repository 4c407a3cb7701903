// ABOUTME: User profile and fitness goal models for goal progress scoring
// ABOUTME: FitnessGoal keeps unknown goal strings so they can be reported unchanged
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;

/// Declared fitness goal
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FitnessGoal {
    /// `weight_loss`
    WeightLoss,
    /// `muscle_gain`
    MuscleGain,
    /// `maintenance`
    Maintenance,
    /// Any other goal string, kept verbatim
    Other(String),
}

impl FitnessGoal {
    /// Parse a goal string; unknown values become `Other`
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s {
            "weight_loss" => Self::WeightLoss,
            "muscle_gain" => Self::MuscleGain,
            "maintenance" => Self::Maintenance,
            other => Self::Other(other.to_owned()),
        }
    }

    /// Goal name as stored on the profile
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::WeightLoss => "weight_loss",
            Self::MuscleGain => "muscle_gain",
            Self::Maintenance => "maintenance",
            Self::Other(name) => name,
        }
    }
}

impl From<String> for FitnessGoal {
    fn from(value: String) -> Self {
        Self::from_str_lossy(&value)
    }
}

impl From<FitnessGoal> for String {
    fn from(goal: FitnessGoal) -> Self {
        goal.as_str().to_owned()
    }
}

impl fmt::Display for FitnessGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The slice of the user profile analytics cares about
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Declared fitness goal, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fitness_goal: Option<FitnessGoal>,
}

impl UserProfile {
    /// Profile with the given goal string
    #[must_use]
    pub fn with_goal(goal: &str) -> Self {
        Self {
            fitness_goal: Some(FitnessGoal::from_str_lossy(goal)),
        }
    }
}
