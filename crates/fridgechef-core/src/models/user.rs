// ABOUTME: User, physical profile, and BMI category models
// ABOUTME: Also the request bodies for login and measurement updates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fridgechef Contributors

use super::{null_as_default, InventoryItem};
use crate::constants::bmi::{NORMAL_UPPER, OVERWEIGHT_UPPER, UNDERWEIGHT_UPPER};
use serde::{Deserialize, Serialize};
use std::fmt;

/// BMI category as reported by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    /// BMI below 18.5
    #[serde(alias = "Bajo peso")]
    Underweight,
    /// BMI from 18.5 up to 25
    #[serde(alias = "Peso normal")]
    Normal,
    /// BMI from 25 up to 30
    #[serde(alias = "Sobrepeso")]
    Overweight,
    /// BMI of 30 or more
    #[serde(alias = "Obesidad")]
    Obese,
}

impl BmiCategory {
    /// Classify a BMI value
    #[must_use]
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < UNDERWEIGHT_UPPER {
            Self::Underweight
        } else if bmi < NORMAL_UPPER {
            Self::Normal
        } else if bmi < OVERWEIGHT_UPPER {
            Self::Overweight
        } else {
            Self::Obese
        }
    }

    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Underweight => "Underweight",
            Self::Normal => "Normal weight",
            Self::Overweight => "Overweight",
            Self::Obese => "Obese",
        }
    }

    /// Human-readable range for legends
    #[must_use]
    pub const fn range(self) -> &'static str {
        match self {
            Self::Underweight => "< 18.5",
            Self::Normal => "18.5 - 24.9",
            Self::Overweight => "25.0 - 29.9",
            Self::Obese => ">= 30.0",
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Physical profile stored by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Height in centimeters
    #[serde(default)]
    pub height: Option<f64>,
    /// Weight in kilograms
    #[serde(default)]
    pub weight: Option<f64>,
    /// BMI computed by the backend
    #[serde(default)]
    pub imc: Option<f64>,
    /// Preferred food type
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub food_type: Option<String>,
    /// BMI category computed by the backend
    #[serde(default, rename = "imc_category")]
    pub imc_category: Option<BmiCategory>,
}

/// Authenticated user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// User identifier, absent on partially loaded users
    #[serde(default)]
    pub id: Option<String>,
    /// Account name
    #[serde(default)]
    pub username: String,
    /// Account email
    #[serde(default)]
    pub email: String,
    /// Physical profile
    #[serde(default, rename = "userProfiles")]
    pub profile: Option<UserProfile>,
    /// Inventory embedded in the session status response
    #[serde(default, deserialize_with = "null_as_default")]
    pub user_products: Vec<InventoryItem>,
}

/// Body of `GET /auth/status`
#[derive(Debug, Clone, Deserialize)]
pub struct AuthStatus {
    /// The session's user
    pub user: User,
}

/// Body of `POST /auth/login`
#[derive(Clone, Serialize)]
pub struct Credentials {
    /// Account email
    pub email: String,
    /// Account password
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Body of `PATCH /users/{id}`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MeasurementsUpdate {
    /// Weight in kilograms
    pub weight: f64,
    /// Height in centimeters
    pub height: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_category_boundaries() {
        assert_eq!(BmiCategory::from_bmi(18.49), BmiCategory::Underweight);
        assert_eq!(BmiCategory::from_bmi(18.5), BmiCategory::Normal);
        assert_eq!(BmiCategory::from_bmi(24.99), BmiCategory::Normal);
        assert_eq!(BmiCategory::from_bmi(25.0), BmiCategory::Overweight);
        assert_eq!(BmiCategory::from_bmi(30.0), BmiCategory::Obese);
    }

    #[test]
    fn test_user_decodes_backend_labels() {
        let user: User = serde_json::from_value(json!({
            "id": "u-1",
            "username": "ana",
            "email": "ana@example.com",
            "userProfiles": { "height": 165, "weight": 60, "imc": 22.04, "imc_category": "Peso normal" },
            "userProducts": null
        }))
        .unwrap();
        let profile = user.profile.unwrap();
        assert_eq!(profile.imc_category, Some(BmiCategory::Normal));
        assert!(user.user_products.is_empty());
    }

    #[test]
    fn test_credentials_debug_redacts_password() {
        let credentials = Credentials {
            email: "ana@example.com".to_owned(),
            password: "secret".to_owned(),
        };
        assert!(!format!("{credentials:?}").contains("secret"));
    }
}
