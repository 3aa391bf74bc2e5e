// ABOUTME: Transient user-facing notifications derived from validation and remote errors
// ABOUTME: Title/description pairs with a destructive variant for failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fridgechef Contributors

use crate::errors::{AppError, ErrorCode, ValidationError};
use serde::Serialize;
use std::fmt;

/// Visual weight of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationVariant {
    /// Informational or success message
    Default,
    /// Failure the user should act on
    Destructive,
}

/// A transient message shown to the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    /// Short headline
    pub title: String,
    /// Explanation
    pub description: String,
    /// Visual weight
    pub variant: NotificationVariant,
}

impl Notification {
    /// Informational notification
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: NotificationVariant::Default,
        }
    }

    /// Destructive notification for a rejected input
    #[must_use]
    pub fn from_validation(error: &ValidationError) -> Self {
        Self {
            title: error.title().to_owned(),
            description: error.to_string(),
            variant: NotificationVariant::Destructive,
        }
    }

    /// Destructive notification for any application error
    #[must_use]
    pub fn from_error(error: &AppError) -> Self {
        let title = match error.code {
            ErrorCode::ResourceAlreadyExists => "Duplicate product",
            ErrorCode::ResourceNotFound => "Not found",
            ErrorCode::AuthRequired | ErrorCode::AuthInvalid => "Authentication required",
            ErrorCode::ExternalServiceError
            | ErrorCode::ExternalServiceUnavailable
            | ErrorCode::ExternalRateLimited => "Service unavailable",
            _ => "Error",
        };
        Self {
            title: title.to_owned(),
            description: error.message.clone(),
            variant: NotificationVariant::Destructive,
        }
    }

    /// Whether this notification reports a failure
    #[must_use]
    pub fn is_destructive(&self) -> bool {
        self.variant == NotificationVariant::Destructive
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title, self.description)
    }
}

impl From<&AppError> for Notification {
    fn from(error: &AppError) -> Self {
        Self::from_error(error)
    }
}
