// ABOUTME: Goal progress scoring against per-goal daily calorie targets
// ABOUTME: Maps a profile's fitness goal and batch average calories to a bounded percentage
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::GoalTargetsConfig;
use mealplan_core::constants::goal_targets::{MAX_PROGRESS_PERCENT, MIN_VISIBLE_PROGRESS_PERCENT};
use mealplan_core::models::{FitnessGoal, UserProfile};
use serde::{Deserialize, Serialize};

/// Progress of the batch average toward the user's goal target
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalProgress {
    /// Daily calorie target for the goal
    pub target_calories: f64,
    /// Average calories as a share of the target, 0 to 100
    pub progress_percent: u8,
    /// Goal being scored
    pub goal: FitnessGoal,
}

/// Score the profile's goal against the batch average
///
/// Returns `None` when there is no profile, no goal, or the goal has no
/// calorie target.
#[must_use]
pub fn score_goal(
    profile: Option<&UserProfile>,
    avg_calories: f64,
    targets: &GoalTargetsConfig,
) -> Option<GoalProgress> {
    let goal = profile?.fitness_goal.as_ref()?;
    let target_calories = targets.target_for(goal)?;

    Some(GoalProgress {
        target_calories,
        progress_percent: progress_percent(avg_calories, target_calories),
        goal: goal.clone(),
    })
}

/// Average as a rounded percentage of the target, clamped to 0..=100
///
/// A positive average never rounds down to 0; it reports at least 1. An
/// unbounded average reports 100. Without a positive target there is no
/// progress to report.
#[must_use]
pub fn progress_percent(avg_calories: f64, target_calories: f64) -> u8 {
    if target_calories.is_nan() || target_calories <= 0.0 {
        return 0;
    }
    let ratio = avg_calories / target_calories * 100.0;
    if ratio.is_nan() {
        return 0;
    }

    let percent = ratio
        .clamp(0.0, f64::from(MAX_PROGRESS_PERCENT))
        .round() as u8;

    if percent == 0 && avg_calories > 0.0 {
        MIN_VISIBLE_PROGRESS_PERCENT
    } else {
        percent
    }
}
