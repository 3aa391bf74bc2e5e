// ABOUTME: Presentation-only rounding of quantities and BMI values
// ABOUTME: Rounded values are for display and never written back into state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fridgechef Contributors

use fridgechef_core::constants::display::DECIMAL_PLACES;

/// Round a value to the display precision (two decimals)
#[must_use]
pub fn round_for_display(value: f64) -> f64 {
    let factor = 10_f64.powi(DECIMAL_PLACES);
    (value * factor).round() / factor
}

/// Format a value with exactly two decimals
#[must_use]
pub fn format_amount(value: f64) -> String {
    format!("{value:.2}")
}
