use once_cell::sync::Lazy;
use regex::Regex;
use validator::ValidationError;

use crate::constants::{MAX_OPTION_NAME_LENGTH, MAX_WEIGHT, MIN_WEIGHT};

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Trims the name and collapses internal whitespace runs to a single space.
pub fn normalize_option_name(name: &str) -> String {
    WHITESPACE_RUN.replace_all(name.trim(), " ").into_owned()
}

pub fn validate_option_name(name: &str) -> Result<(), ValidationError> {
    if name.is_empty() {
        return Err(ValidationError::new("empty_option_name"));
    }
    if name.chars().count() > MAX_OPTION_NAME_LENGTH {
        return Err(ValidationError::new("option_name_too_long"));
    }
    Ok(())
}

/// Turns raw user input into a usable weight. Anything unparseable,
/// non-finite or non-positive becomes 1.
pub fn parse_weight(raw: &str) -> u32 {
    match raw.trim().parse::<f64>() {
        Ok(value) => weight_from_f64(value),
        Err(_) => MIN_WEIGHT,
    }
}

pub fn weight_from_f64(value: f64) -> u32 {
    if value.is_finite() && value > 0.0 {
        coerce_weight(value.round() as i64)
    } else {
        MIN_WEIGHT
    }
}

pub fn coerce_weight(weight: i64) -> u32 {
    if weight < MIN_WEIGHT as i64 {
        MIN_WEIGHT
    } else if weight > MAX_WEIGHT as i64 {
        MAX_WEIGHT
    } else {
        weight as u32
    }
}
