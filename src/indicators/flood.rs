//! INDICATOR: PRECIPITATION INTENSITY (FLOOD)
//!
//! Two sub-risks computed independently: a "flash" risk from the rolling
//! 3h sum and a "daily" risk from the rolling 24h sum, each with the same
//! below-threshold-zero / linear / clamp-above ramp as drought. The
//! combined risk is the maximum of the two: a short violent burst or a
//! sustained daily total is each sufficient on its own, they are not
//! additive. When fewer than 3 hourly samples exist the 3h sum is absent
//! and the combined risk is the daily sub-risk alone.

use crate::error::RiskError;
use crate::profile::ClimateProfile;
use crate::readings::FloodReading;
use crate::utils::threshold_ramp;

/// Result of the flood normalizer
#[derive(Debug, Clone, Copy)]
pub struct FloodResult {
    /// Observed precipitation over the last hour (mm)
    pub last_hour_mm: f64,
    /// Observed 3h sum (mm), if defined
    pub sum_3h_mm: Option<f64>,
    /// Observed 24h sum (mm)
    pub sum_24h_mm: f64,

    /// Flash sub-risk from the 3h sum, if defined
    pub flash_risk: Option<f64>,
    /// Daily sub-risk from the 24h sum
    pub daily_risk: f64,
    /// Combined risk: max of the available sub-risks
    pub risk: f64,
}

/// Calculate flood risk for one precipitation triple
///
/// Requires `moderate < severe` for both windows (profile invariants,
/// checked at configuration time).
pub fn calculate_flood(
    reading: &FloodReading,
    profile: &ClimateProfile,
) -> Result<FloodResult, RiskError> {
    reading.validate()?;

    let flash_risk = reading
        .sum_3h_mm
        .map(|p3h| threshold_ramp(p3h, profile.flood_3h_moderate, profile.flood_3h_severe));

    let daily_risk = threshold_ramp(
        reading.sum_24h_mm,
        profile.flood_24h_moderate,
        profile.flood_24h_severe,
    );

    let risk = match flash_risk {
        Some(flash) => flash.max(daily_risk),
        None => daily_risk,
    };

    Ok(FloodResult {
        last_hour_mm: reading.last_hour_mm,
        sum_3h_mm: reading.sum_3h_mm,
        sum_24h_mm: reading.sum_24h_mm,
        flash_risk,
        daily_risk,
        risk,
    })
}
