// ABOUTME: Validation errors raised on user input before any remote call
// ABOUTME: Converts into AppError so stores and notifications share one taxonomy
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fridgechef Contributors

use super::{AppError, ErrorCode};
use thiserror::Error;

/// Errors produced by input validation.
///
/// These never reach the backend: the action that raised them returns early
/// and leaves store state untouched so the user can correct the input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// Product identifier is empty or blank
    #[error("Please enter a valid product")]
    EmptyProduct,
    /// Product is already in the inventory
    #[error("Product {product_id} is already in your list")]
    DuplicateProduct {
        /// Identifier of the duplicated product
        product_id: String,
    },
    /// Quantity is zero, negative, or not a finite number
    #[error("Quantity must be greater than zero (got {quantity})")]
    NonPositiveQuantity {
        /// The rejected quantity
        quantity: f64,
    },
    /// Weight or height missing or not strictly positive
    #[error("Please enter valid values for weight and height")]
    InvalidMeasurements,
    /// No authenticated user id was supplied
    #[error("User ID is not available")]
    MissingUserId,
}

impl ValidationError {
    /// Short notification title for this validation failure
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::DuplicateProduct { .. } => "Duplicate product",
            Self::EmptyProduct
            | Self::NonPositiveQuantity { .. }
            | Self::InvalidMeasurements
            | Self::MissingUserId => "Error",
        }
    }

    /// Error code used when this validation error is converted into an `AppError`
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::EmptyProduct => ErrorCode::MissingRequiredField,
            Self::DuplicateProduct { .. } => ErrorCode::ResourceAlreadyExists,
            Self::NonPositiveQuantity { .. } | Self::InvalidMeasurements => {
                ErrorCode::ValueOutOfRange
            }
            Self::MissingUserId => ErrorCode::AuthRequired,
        }
    }
}

impl From<ValidationError> for AppError {
    fn from(error: ValidationError) -> Self {
        let code = error.code();
        let message = error.to_string();
        let app_error = Self::new(code, message);
        match error {
            ValidationError::DuplicateProduct { product_id } => {
                app_error.with_resource_id(product_id)
            }
            _ => app_error,
        }
    }
}
