//! # Validator
//!
//! Turns raw `FormFields` into a `RecommendRequest`, or reports the first
//! field that fails. Checks run in form order and stop at the first failure.
//!
//! Pure: no I/O, no logging.

use std::fmt;

use crate::core::form::{FormField, FormFields};
use crate::recommend::RecommendRequest;

pub const MIN_CROP_YEAR: f64 = 1900.0;
pub const MAX_CROP_YEAR: f64 = 2100.0;

/// A rejected form, naming the first offending field.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    pub field: FormField,
    pub message: &'static str,
}

impl ValidationError {
    fn new(field: FormField) -> Self {
        let message = match field {
            FormField::CropYear => "Please enter a valid Crop Year (1900-2100).",
            FormField::Season => "Please select a Season.",
            FormField::State => "Please select a State.",
            FormField::Area => "Please enter a valid Area (greater than 0).",
            FormField::Fertilizer => "Please enter a valid Fertilizer amount (non-negative).",
            FormField::Pesticide => "Please enter a valid Pesticide amount (non-negative).",
            FormField::AnnualRainfall => "Annual Rainfall must be non-negative.",
        };
        Self { field, message }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Parses a trimmed field as a finite number.
fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Parses a required numeric field and checks it against `accept`.
fn number_field(
    fields: &FormFields,
    field: FormField,
    accept: impl Fn(f64) -> bool,
) -> Result<f64, ValidationError> {
    parse_number(fields.get(field))
        .filter(|n| accept(*n))
        .ok_or_else(|| ValidationError::new(field))
}

fn choice_field(fields: &FormFields, field: FormField) -> Result<String, ValidationError> {
    let value = fields.get(field).trim();
    if value.is_empty() {
        return Err(ValidationError::new(field));
    }
    Ok(value.to_string())
}

/// Validates and normalizes the form.
///
/// Zero is accepted for fertilizer and pesticide. An empty rainfall field
/// becomes `None`.
pub fn validate(fields: &FormFields) -> Result<RecommendRequest, ValidationError> {
    let crop_year = number_field(fields, FormField::CropYear, |y| {
        (MIN_CROP_YEAR..=MAX_CROP_YEAR).contains(&y)
    })?;
    let season = choice_field(fields, FormField::Season)?;
    let state = choice_field(fields, FormField::State)?;
    let area = number_field(fields, FormField::Area, |a| a > 0.0)?;
    let fertilizer = number_field(fields, FormField::Fertilizer, |f| f >= 0.0)?;
    let pesticide = number_field(fields, FormField::Pesticide, |p| p >= 0.0)?;

    let rainfall_raw = fields.annual_rainfall.trim();
    let annual_rainfall = if rainfall_raw.is_empty() {
        None
    } else {
        Some(number_field(fields, FormField::AnnualRainfall, |r| r >= 0.0)?)
    };

    Ok(RecommendRequest {
        // Range-checked above, so the truncating cast cannot overflow.
        crop_year: crop_year.trunc() as i32,
        season,
        state,
        area,
        fertilizer,
        pesticide,
        annual_rainfall,
    })
}
