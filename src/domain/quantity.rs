//! Validation of user-supplied numeric quantities.

use crate::error::AppError;

/// Parse `raw` as a finite, non-negative number.
///
/// Blank input is treated as absent and yields `None`, so callers can apply
/// their own default.
pub fn parse_non_negative(field: &str, raw: &str) -> Result<Option<f64>, AppError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let value = trimmed
        .parse::<f64>()
        .map_err(|_| AppError::invalid_input(format!("Invalid {field}: '{trimmed}' is not a number.")))?;
    ensure_non_negative(field, value).map(Some)
}

pub fn ensure_non_negative(field: &str, value: f64) -> Result<f64, AppError> {
    if !value.is_finite() {
        return Err(AppError::invalid_input(format!("Invalid {field}: must be a finite number.")));
    }
    if value < 0.0 {
        return Err(AppError::invalid_input(format!("Invalid {field}: must not be negative.")));
    }
    Ok(value)
}
