//! Coercion of text form fields into their semantic types.
//!
//! Every form value arrives as a string. These helpers run at the service boundary so that
//! only typed values reach persistence; anything malformed becomes `AppError::InvalidInput`
//! naming the offending field.

use chrono::NaiveDate;

use crate::server::error::AppError;

/// Parses a row id such as `bookingId`.
///
/// Surrounding whitespace is ignored. Ids are positive.
///
/// # Returns
/// - `Ok(i32)` - The parsed id
/// - `Err(AppError::InvalidInput)` - The value is not a positive integer
pub fn parse_id(field: &str, value: &str) -> Result<i32, AppError> {
    parse_positive(field, value)
}

/// Parses a strictly positive count such as `numGuests` or `numNights`.
pub fn parse_positive(field: &str, value: &str) -> Result<i32, AppError> {
    let parsed = parse_integer(field, value)?;

    if parsed < 1 {
        return Err(AppError::InvalidInput(format!(
            "{} must be at least 1",
            field
        )));
    }

    Ok(parsed)
}

/// Parses an amount that may be zero, such as `cabinPrice`.
pub fn parse_non_negative(field: &str, value: &str) -> Result<i32, AppError> {
    let parsed = parse_integer(field, value)?;

    if parsed < 0 {
        return Err(AppError::InvalidInput(format!(
            "{} must not be negative",
            field
        )));
    }

    Ok(parsed)
}

/// Parses a calendar date in `YYYY-MM-DD` form.
pub fn parse_date(field: &str, value: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| AppError::InvalidInput(format!("{} must be a date (YYYY-MM-DD)", field)))
}

fn parse_integer(field: &str, value: &str) -> Result<i32, AppError> {
    value
        .trim()
        .parse::<i32>()
        .map_err(|_| AppError::InvalidInput(format!("{} must be a whole number", field)))
}
