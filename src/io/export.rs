//! Export batch results to CSV.
//!
//! Amounts are written as plain numbers in local currency so the file loads
//! cleanly into spreadsheets; the currency symbol gets its own column.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::AppError;
use crate::report::BatchResult;

const HEADER: [&str; 10] = [
    "id",
    "location",
    "load_kw",
    "monthly_kwh",
    "carbon_kg",
    "trees_to_offset",
    "currency",
    "annual_cost",
    "potential_savings",
    "payback_years",
];

/// Write per-household results to a CSV file.
pub fn write_batch_csv(path: &Path, results: &[BatchResult]) -> Result<(), AppError> {
    let mut file = File::create(path)
        .map_err(|e| AppError::io(format!("Failed to create export CSV '{}': {e}", path.display())))?;
    write_batch_rows(&mut file, results)
}

pub fn write_batch_rows<W: Write>(out: &mut W, results: &[BatchResult]) -> Result<(), AppError> {
    let mut writer = csv::Writer::from_writer(out);

    writer
        .write_record(HEADER)
        .map_err(|e| AppError::io(format!("Failed to write export CSV header: {e}")))?;

    for r in results {
        let p = &r.profile;
        writer
            .write_record([
                r.id.clone(),
                p.location.code().to_string(),
                format!("{:.2}", p.load_kw),
                format!("{:.2}", p.monthly_kwh),
                format!("{:.2}", p.carbon_kg),
                p.trees_to_offset.to_string(),
                p.annual_cost.symbol.to_string(),
                format!("{:.2}", p.annual_cost.amount),
                format!("{:.2}", p.potential_savings.amount),
                p.payback.label().to_string(),
            ])
            .map_err(|e| AppError::io(format!("Failed to write export CSV row: {e}")))?;
    }

    writer
        .flush()
        .map_err(|e| AppError::io(format!("Failed to flush export CSV: {e}")))
}
