//! Field rules for guest-submitted data.

use std::sync::LazyLock;

use regex::Regex;

use crate::server::error::AppError;

/// Maximum number of characters kept from a booking's observations.
pub const MAX_OBSERVATIONS_LENGTH: usize = 1_000;

/// Regex pattern a national ID must match in full.
pub const NATIONAL_ID_PATTERN: &str = r"^[a-zA-Z0-9]{6,12}$";

static NATIONAL_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(NATIONAL_ID_PATTERN).expect("valid regex"));

/// Separator between country name and flag code in the nationality field.
const NATIONALITY_SEPARATOR: char = '%';

/// Checks a national ID: 6 to 12 ASCII letters or digits.
///
/// # Returns
/// - `Ok(())` - The value is acceptable as-is
/// - `Err(AppError::InvalidInput)` - The value does not match the pattern
pub fn validate_national_id(national_id: &str) -> Result<(), AppError> {
    if !NATIONAL_ID_RE.is_match(national_id) {
        return Err(AppError::InvalidInput("Invalid National ID".to_string()));
    }

    Ok(())
}

/// Splits the combined `"{name}%{flag}"` nationality field.
///
/// Splits on the first `%`. A value without a separator yields an empty flag.
pub fn split_nationality(value: &str) -> (String, String) {
    match value.split_once(NATIONALITY_SEPARATOR) {
        Some((nationality, flag)) => (nationality.to_string(), flag.to_string()),
        None => (value.to_string(), String::new()),
    }
}

/// Keeps the first `MAX_OBSERVATIONS_LENGTH` characters of the observations.
///
/// Longer input is cut silently; this is normalization, not a validation failure.
pub fn truncate_observations(observations: &str) -> String {
    observations.chars().take(MAX_OBSERVATIONS_LENGTH).collect()
}
