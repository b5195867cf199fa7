//! Input validation and normalization helpers
//!
//! The advisor core is total: numeric input outside its domain is clamped,
//! not rejected. Only values that are not numbers at all (NaN, infinity)
//! are reported, and only by callers that choose to validate first.

use crate::errors::AdvisorError;

/// Clamp a percentage to [0, 100], mapping non-finite values to 0
pub fn clamp_percent(value: f64) -> f64 {
    clamp_finite(value, 0.0, 100.0)
}

/// Clamp a 0-10 score, mapping non-finite values to 0
pub fn clamp_score(value: f64) -> f64 {
    clamp_finite(value, 0.0, 10.0)
}

/// Floor a value at zero, mapping non-finite values to 0
pub fn non_negative(value: f64) -> f64 {
    if value.is_finite() {
        value.max(0.0)
    } else {
        0.0
    }
}

/// Replace a non-finite value with 0 and leave everything else untouched
pub fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Clamp into `[min, max]`, mapping non-finite values to 0 before clamping
pub fn clamp_finite(value: f64, min: f64, max: f64) -> f64 {
    finite_or_zero(value).clamp(min, max)
}

/// Round to two decimal places
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Reject NaN and infinite values for a named field
pub fn validate_finite(field: &'static str, value: f64) -> Result<(), AdvisorError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(AdvisorError::NonFinite { field })
    }
}

/// Validate a plant name supplied by a caller
pub fn validate_plant_name(name: &str) -> Result<(), AdvisorError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(AdvisorError::Validation(
            "Plant name cannot be empty".to_string(),
        ));
    }
    if trimmed.chars().count() > 100 {
        return Err(AdvisorError::Validation("Plant name too long".to_string()));
    }
    Ok(())
}

// ============================================================================
// User-Friendly Field Labels
// ============================================================================

/// Map technical field names to form labels
pub fn get_field_display_label(field_name: &str) -> &str {
    match field_name {
        "plant_type" | "plantType" => "Plant Type",
        "plant_name" | "plantName" => "Plant Name",
        "soil_moisture_percent" | "soilMoisturePercent" => "Soil Moisture (%)",
        "temperature_c" | "temperatureC" => "Temperature (°C)",
        "humidity_percent" | "humidityPercent" => "Humidity (%)",
        "rainfall_mm" | "rainfallMm" => "Rainfall (mm)",
        "sunlight_hours" | "sunlightHours" => "Sunlight Hours",
        "days_since_irrigation" | "daysSinceIrrigation" => "Days Since Last Irrigation",
        _ => field_name,
    }
}
