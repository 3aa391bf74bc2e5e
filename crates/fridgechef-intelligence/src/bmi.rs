// ABOUTME: Body-mass-index calculation and weight/height validation
// ABOUTME: Mirrors the backend formula so the profile screen can preview the result
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fridgechef Contributors

use crate::display::round_for_display;
use fridgechef_core::constants::bmi::CM_PER_M;
use fridgechef_core::errors::ValidationError;
use fridgechef_core::models::{BmiCategory, MeasurementsUpdate, UserProfile};
use serde::Serialize;

/// A computed BMI value and its category
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BmiReading {
    /// BMI rounded to two decimals
    pub value: f64,
    /// Category of the unrounded value
    pub category: BmiCategory,
}

/// Check that both measurements are present and strictly positive
///
/// # Errors
///
/// Returns [`ValidationError::InvalidMeasurements`] otherwise.
pub fn validate_measurements(
    weight_kg: Option<f64>,
    height_cm: Option<f64>,
) -> Result<MeasurementsUpdate, ValidationError> {
    let is_valid = |value: f64| value.is_finite() && value > 0.0;
    match (weight_kg, height_cm) {
        (Some(weight), Some(height)) if is_valid(weight) && is_valid(height) => {
            Ok(MeasurementsUpdate { weight, height })
        }
        _ => Err(ValidationError::InvalidMeasurements),
    }
}

/// `weight_kg / (height_cm / 100)^2`
///
/// # Errors
///
/// Returns [`ValidationError::InvalidMeasurements`] for missing, zero,
/// negative, or non-finite input.
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> Result<BmiReading, ValidationError> {
    let measurements = validate_measurements(Some(weight_kg), Some(height_cm))?;
    let height_m = measurements.height / CM_PER_M;
    let bmi = measurements.weight / (height_m * height_m);
    Ok(BmiReading {
        value: round_for_display(bmi),
        category: BmiCategory::from_bmi(bmi),
    })
}

/// BMI for a stored profile.
///
/// The backend's `imc` wins when present. Otherwise the value is computed
/// from the stored weight and height. `None` when neither is available.
#[must_use]
pub fn profile_bmi(profile: &UserProfile) -> Option<BmiReading> {
    if let Some(imc) = profile.imc.filter(|value| value.is_finite()) {
        return Some(BmiReading {
            value: round_for_display(imc),
            category: profile
                .imc_category
                .unwrap_or_else(|| BmiCategory::from_bmi(imc)),
        });
    }
    let (weight, height) = profile.weight.zip(profile.height)?;
    calculate_bmi(weight, height).ok()
}
