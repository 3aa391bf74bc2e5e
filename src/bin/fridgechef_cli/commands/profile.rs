// ABOUTME: Profile commands for fridgechef-cli
// ABOUTME: Records weight and height remotely and shows the BMI the backend computed
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fridgechef Contributors

use anyhow::Result;
use fridgechef::errors::ValidationError;
use fridgechef::intelligence::{calculate_bmi, profile_bmi};
use fridgechef::notifications::Notification;

use super::Session;
use crate::helpers::display::{print_bmi, print_notification};

/// Send new measurements and show the BMI the backend returned
pub async fn update(session: &Session, weight: Option<f64>, height: Option<f64>) -> Result<()> {
    let user_id = session.user_id().await?;
    let user = session
        .auth
        .update_measurements(&user_id, weight, height)
        .await?;

    print_notification(&Notification::success(
        "Profile updated",
        "Your measurements were saved",
    ));
    if let Some(reading) = user.profile.as_ref().and_then(profile_bmi) {
        print_bmi(&reading);
    }
    Ok(())
}

/// BMI from the arguments, falling back to the stored profile for missing values
pub async fn bmi(session: &Session, weight: Option<f64>, height: Option<f64>) {
    let profile = session
        .auth
        .snapshot()
        .await
        .user
        .and_then(|user| user.profile);
    let weight = weight.or_else(|| profile.as_ref().and_then(|p| p.weight));
    let height = height.or_else(|| profile.as_ref().and_then(|p| p.height));

    let (Some(weight), Some(height)) = (weight, height) else {
        print_notification(&Notification::from_validation(
            &ValidationError::InvalidMeasurements,
        ));
        return;
    };
    match calculate_bmi(weight, height) {
        Ok(reading) => print_bmi(&reading),
        Err(error) => print_notification(&Notification::from_validation(&error)),
    }
}
