//! Household CSV ingest for batch analysis.
//!
//! Required columns: `location`, `daily_hours`. Optional: `id`, `habits`,
//! `state`, `city`, `town`. Bad rows are skipped and reported; a file with no
//! usable rows is an error.

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::StringRecord;

use crate::domain::{AnalysisRequest, LocationCode};
use crate::engine::parse_daily_hours;
use crate::error::{AppError, ErrorKind};

const REQUIRED_COLUMNS: [&str; 2] = ["location", "daily_hours"];

/// One parsed household row.
#[derive(Debug, Clone)]
pub struct HouseholdRow {
    /// 1-based line number in the source file.
    pub line: usize,
    pub id: String,
    pub request: AnalysisRequest,
}

/// A row-level error encountered during ingest.
#[derive(Debug, Clone)]
pub struct RowError {
    pub line: usize,
    pub id: Option<String>,
    pub message: String,
}

/// Ingest output: parsed rows plus the rows that were rejected.
#[derive(Debug, Clone)]
pub struct IngestedHouseholds {
    pub rows: Vec<HouseholdRow>,
    pub row_errors: Vec<RowError>,
    pub rows_read: usize,
}

pub fn load_households(path: &Path) -> Result<IngestedHouseholds, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::io(format!("Failed to open CSV '{}': {e}", path.display())))?;
    load_households_from_reader(file)
}

pub fn load_households_from_reader<R: Read>(input: R) -> Result<IngestedHouseholds, AppError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(input);

    let headers = reader
        .headers()
        .map_err(|e| AppError::invalid_input(format!("Failed to read CSV headers: {e}")))?
        .clone();

    let header_map = build_header_map(&headers);
    for name in REQUIRED_COLUMNS {
        if !header_map.contains_key(name) {
            return Err(AppError::invalid_input(format!("Missing required column: `{name}`")));
        }
    }

    let mut rows = Vec::new();
    let mut row_errors = Vec::new();
    let mut rows_read = 0usize;

    for (idx, result) in reader.records().enumerate() {
        // Header is line 1.
        let line = idx + 2;
        rows_read += 1;

        let record = match result {
            Ok(r) => r,
            Err(e) => {
                row_errors.push(RowError {
                    line,
                    id: None,
                    message: format!("CSV parse error: {e}"),
                });
                continue;
            }
        };

        let id = get_optional(&record, &header_map, "id").map(str::to_string);
        match parse_row(&record, &header_map) {
            Ok(request) => rows.push(HouseholdRow {
                line,
                id: id.unwrap_or_else(|| format!("row-{line}")),
                request,
            }),
            Err(message) => row_errors.push(RowError { line, id, message }),
        }
    }

    if rows.is_empty() {
        return Err(AppError::new(
            ErrorKind::NoData,
            format!("No valid household rows ({rows_read} read, {} rejected).", row_errors.len()),
        ));
    }

    Ok(IngestedHouseholds {
        rows,
        row_errors,
        rows_read,
    })
}

fn build_header_map(headers: &StringRecord) -> HashMap<String, usize> {
    headers
        .iter()
        .enumerate()
        .map(|(idx, name)| (normalize_header_name(name), idx))
        .collect()
}

fn normalize_header_name(name: &str) -> String {
    // Spreadsheet exports often prefix the first header with a UTF-8 BOM.
    let name = name.trim().trim_start_matches('\u{feff}');
    name.to_ascii_lowercase()
}

fn parse_row(record: &StringRecord, header_map: &HashMap<String, usize>) -> Result<AnalysisRequest, String> {
    let location: LocationCode = get_required(record, header_map, "location")?.parse()?;
    let daily_hours = parse_daily_hours(get_required(record, header_map, "daily_hours")?)
        .map_err(|e| e.message().to_string())?;

    let mut request = AnalysisRequest::new(
        location,
        daily_hours,
        get_optional(record, header_map, "habits").unwrap_or_default(),
    );
    request.state = get_optional(record, header_map, "state").map(str::to_string);
    request.city = get_optional(record, header_map, "city").map(str::to_string);
    request.town = get_optional(record, header_map, "town").map(str::to_string);
    Ok(request)
}

fn get_required<'a>(
    record: &'a StringRecord,
    header_map: &HashMap<String, usize>,
    name: &str,
) -> Result<&'a str, String> {
    let idx = header_map
        .get(name)
        .ok_or_else(|| format!("Missing required column: `{name}`"))?;
    record
        .get(*idx)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| format!("Missing required value: `{name}`"))
}

fn get_optional<'a>(record: &'a StringRecord, header_map: &HashMap<String, usize>, name: &str) -> Option<&'a str> {
    let idx = header_map.get(name)?;
    record.get(*idx).map(str::trim).filter(|s| !s.is_empty())
}
