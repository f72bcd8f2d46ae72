//! Command-line parsing for the household energy planner.
//!
//! Numeric inputs are taken as text and validated by the domain parsers, so
//! a bad value reports the same message whether it came from a flag or a CSV.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

use crate::domain::LocationCode;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "eco", version, about = "Household energy, carbon and renewable planner")]
pub struct Cli {
    /// Print JSON instead of text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Raise log verbosity (-v info, -vv debug). `RUST_LOG` overrides this.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Analyse a household: footprint, savings, action plan, renewables, tips.
    Analyze(AnalyzeArgs),
    /// Estimate a rooftop solar installation.
    Solar(SolarArgs),
    /// Estimate a small wind turbine.
    Wind(WindArgs),
    /// Estimate a micro-hydro system.
    Hydro(HydroArgs),
    /// Show the carbon price per tonne.
    CarbonPrice(LocationArg),
    /// Show current weather for a location.
    Weather(LocationArg),
    /// Analyse every household in a CSV file.
    Batch(BatchArgs),
    /// Browse Indian states, cities and regional towns.
    Regions(RegionArgs),
    /// List the quick-start example profiles.
    Examples,
}

#[derive(Debug, Args, Clone)]
pub struct LocationArg {
    /// Two-letter location code (US, IN, DE, ...).
    #[arg(short = 'l', long, value_enum, ignore_case = true, default_value_t = LocationCode::Us)]
    pub location: LocationCode,
}

#[derive(Debug, Args, Clone)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub location: LocationArg,

    /// Hours per day of active use. Blank counts as zero.
    #[arg(long, default_value = "12")]
    pub hours: String,

    /// Free-text description of household habits.
    #[arg(long, default_value = "")]
    pub habits: String,

    /// Indian state (informational).
    #[arg(long)]
    pub state: Option<String>,

    /// Indian city (informational).
    #[arg(long)]
    pub city: Option<String>,

    /// Town; a Bidar-district town unlocks regional advice for IN.
    #[arg(long)]
    pub town: Option<String>,

    /// Start from quick-start profile N (see `eco examples`).
    #[arg(long, value_name = "N")]
    pub example: Option<usize>,
}

#[derive(Debug, Args, Clone)]
pub struct SolarArgs {
    #[command(flatten)]
    pub location: LocationArg,

    /// Usable roof area in square feet.
    #[arg(long, default_value = "500")]
    pub roof_sqft: String,
}

#[derive(Debug, Args, Clone)]
pub struct WindArgs {
    #[command(flatten)]
    pub location: LocationArg,

    /// Turbine rating in kW.
    #[arg(long, default_value = "5")]
    pub turbine_kw: String,
}

#[derive(Debug, Args, Clone)]
pub struct HydroArgs {
    #[command(flatten)]
    pub location: LocationArg,

    /// Water flow in litres per second.
    #[arg(long, default_value = "20")]
    pub flow_lps: String,

    /// Head height in metres.
    #[arg(long, default_value = "5")]
    pub head_m: String,
}

#[derive(Debug, Args, Clone)]
pub struct BatchArgs {
    /// Household CSV (location, daily_hours; optional id, habits, state, city, town).
    #[arg(short = 'f', long)]
    pub file: PathBuf,

    /// Export per-household results to CSV.
    #[arg(long)]
    pub export: Option<PathBuf>,
}

#[derive(Debug, Args, Clone)]
pub struct RegionArgs {
    /// List cities for this state.
    #[arg(long, conflicts_with = "city")]
    pub state: Option<String>,

    /// List regional towns for this city.
    #[arg(long)]
    pub city: Option<String>,
}
