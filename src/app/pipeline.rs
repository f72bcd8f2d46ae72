//! Shared analysis workflow used by the single-household and batch commands.
//!
//! Request in, `Profile` out; the batch path fans rows out over rayon and
//! keeps row-level failures alongside the successes.

use std::path::Path;

use rayon::prelude::*;
use tracing::{info, warn};

use crate::domain::{AnalysisRequest, Profile};
use crate::engine::compute_profile;
use crate::error::AppError;
use crate::io::ingest::{HouseholdRow, RowError, load_households};
use crate::report::BatchResult;

/// All computed outputs of one `eco batch` run.
#[derive(Debug, Clone)]
pub struct BatchRun {
    pub results: Vec<BatchResult>,
    pub row_errors: Vec<RowError>,
    pub rows_read: usize,
}

/// Analyse one household.
pub fn analyze(request: &AnalysisRequest) -> Result<Profile, AppError> {
    let profile = compute_profile(request)?;
    info!(
        location = %profile.location,
        monthly_kwh = profile.monthly_kwh,
        carbon_kg = profile.carbon_kg,
        "household analysed"
    );
    Ok(profile)
}

/// Analyse rows in parallel. Output order matches input order.
///
/// Each row samples tips from its own RNG, so no state is shared between
/// workers.
pub fn analyze_batch(rows: &[HouseholdRow]) -> (Vec<BatchResult>, Vec<RowError>) {
    let outcomes: Vec<Result<BatchResult, RowError>> = rows
        .par_iter()
        .map(|row| {
            compute_profile(&row.request)
                .map(|profile| BatchResult {
                    id: row.id.clone(),
                    profile,
                })
                .map_err(|e| RowError {
                    line: row.line,
                    id: Some(row.id.clone()),
                    message: e.message().to_string(),
                })
        })
        .collect();

    let mut results = Vec::with_capacity(outcomes.len());
    let mut errors = Vec::new();
    for outcome in outcomes {
        match outcome {
            Ok(r) => results.push(r),
            Err(e) => errors.push(e),
        }
    }
    (results, errors)
}

/// Load a household CSV and analyse every valid row.
pub fn run_batch(path: &Path) -> Result<BatchRun, AppError> {
    let ingest = load_households(path)?;
    info!(
        path = %path.display(),
        rows_read = ingest.rows_read,
        rows_valid = ingest.rows.len(),
        "household file loaded"
    );

    let (results, analysis_errors) = analyze_batch(&ingest.rows);

    let mut row_errors = ingest.row_errors;
    row_errors.extend(analysis_errors);
    row_errors.sort_by_key(|e| e.line);
    for e in &row_errors {
        warn!(line = e.line, id = e.id.as_deref().unwrap_or(""), "skipped row: {}", e.message);
    }

    Ok(BatchRun {
        results,
        row_errors,
        rows_read: ingest.rows_read,
    })
}
