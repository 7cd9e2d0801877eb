//! INDICATOR: WATER-BALANCE DEFICIT (DROUGHT)
//!
//! Normalizes the daily water-balance deficit (reference evapotranspiration
//! minus precipitation, mm/day) against the zone's low/high thresholds.
//! The index only signals risk in the deficit direction: net-wet or mildly
//! negative deficits are zero risk.

use crate::error::RiskError;
use crate::indicators::Indicator;
use crate::profile::ClimateProfile;
use crate::utils::threshold_ramp;

/// Result of the drought normalizer
#[derive(Debug, Clone, Copy)]
pub struct DroughtResult {
    /// Observed deficit (mm/day); may be negative
    pub deficit_mm: f64,
    /// Normalized risk (0 at/below drought_low, 1 at/above drought_high)
    pub risk: f64,
}

/// Calculate drought risk for one reading
///
/// Requires `drought_low < drought_high` (profile invariant, checked at
/// configuration time).
pub fn calculate_drought(
    deficit_mm: f64,
    profile: &ClimateProfile,
) -> Result<DroughtResult, RiskError> {
    if !deficit_mm.is_finite() {
        return Err(RiskError::OutOfDomain {
            indicator: Indicator::Drought,
            value: deficit_mm,
        });
    }

    let risk = threshold_ramp(deficit_mm, profile.drought_low, profile.drought_high);

    Ok(DroughtResult { deficit_mm, risk })
}
