//! Domain types used throughout the planner.
//!
//! This module defines:
//!
//! - the closed set of supported locations (`LocationCode`)
//! - analysis inputs and derived outputs (`AnalysisRequest`, `Profile`)
//! - estimator outputs (`SolarEstimate`, `WindEstimate`, `HydroEstimate`)
//! - currency amounts for display (`Money`)
//! - validation of numeric user input (`parse_non_negative`)

pub mod money;
pub mod quantity;
pub mod types;

pub use money::*;
pub use quantity::*;
pub use types::*;
