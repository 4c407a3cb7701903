// ABOUTME: Command-line host for meal plan analytics over a JSON file of plan records
// ABOUTME: Prints the analytics report with goal progress, recommendations, and per-record outcomes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Analyze an array of plan records
//! mealplan-insights plans.json
//!
//! # Analyze with a goal, overriding any profile in the file
//! mealplan-insights plans.json --goal weight_loss --format pretty
//!
//! # Debug logging for each record
//! mealplan-insights plans.json -v
//! ```

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use mealplan_insights::config::AnalyticsConfig;
use mealplan_insights::intelligence::PlanAnalyzer;
use mealplan_insights::logging::LoggingConfig;
use mealplan_insights::models::{PlanRecord, UserProfile};
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "mealplan-insights",
    about = "Meal plan analytics",
    long_about = "Derives calorie, diversity, and goal progress insights from a JSON file of stored meal plans."
)]
struct Cli {
    /// JSON file: an array of plan records, or { "plans": [...], "profile": {...} }
    input: PathBuf,

    /// Fitness goal override (e.g. `weight_loss`, `muscle_gain`, `maintenance`)
    #[arg(long)]
    goal: Option<String>,

    /// Report output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,

    /// Enable debug logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Single-line JSON
    Json,
    /// Indented JSON
    Pretty,
}

/// Accepted input file shapes
#[derive(Deserialize)]
#[serde(untagged)]
enum PlanInput {
    Batch(Vec<PlanRecord>),
    Document {
        plans: Vec<PlanRecord>,
        #[serde(default)]
        profile: Option<UserProfile>,
    },
}

impl PlanInput {
    fn into_parts(self) -> (Vec<PlanRecord>, Option<UserProfile>) {
        match self {
            Self::Batch(plans) => (plans, None),
            Self::Document { plans, profile } => (plans, profile),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.with_level("debug");
    }
    logging.init()?;

    let config = AnalyticsConfig::load().context("invalid analytics configuration")?;

    let raw = fs::read_to_string(&cli.input)
        .with_context(|| format!("failed to read {}", cli.input.display()))?;
    let input: PlanInput = serde_json::from_str(&raw)
        .with_context(|| format!("{} is not a plan array or plan document", cli.input.display()))?;
    let (plans, file_profile) = input.into_parts();

    let profile = cli
        .goal
        .as_deref()
        .map(UserProfile::with_goal)
        .or(file_profile);

    info!(
        input = %cli.input.display(),
        plans = plans.len(),
        goal = ?profile.as_ref().and_then(|p| p.fitness_goal.as_ref()),
        "analyzing meal plans"
    );

    let report = PlanAnalyzer::new(config).analyze(&plans, profile.as_ref());

    let rendered = match cli.format {
        OutputFormat::Json => serde_json::to_string(&report)?,
        OutputFormat::Pretty => serde_json::to_string_pretty(&report)?,
    };
    println!("{rendered}");

    Ok(())
}
