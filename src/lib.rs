//! `eco-plan` library crate.
//!
//! The binary (`eco`) is a thin wrapper around this library so that:
//!
//! - the profile engine and estimators are testable without spawning processes
//! - batch and single-household runs share one workflow
//! - lookup tables stay separate from the logic that reads them

pub mod app;
pub mod cli;
pub mod config;
pub mod data;
pub mod domain;
pub mod engine;
pub mod error;
pub mod estimate;
pub mod io;
pub mod logging;
pub mod report;
