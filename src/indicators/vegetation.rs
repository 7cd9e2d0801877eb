//! INDICATOR: VEGETATION VITALITY
//!
//! Normalizes an NDVI-like vegetation index against the zone's optimum and
//! floor thresholds. Risk rises linearly as the reading falls from the
//! zone's optimum toward its floor: readings at or above the optimum carry
//! zero risk, readings at or below the floor saturate at maximum risk.

use crate::error::RiskError;
use crate::indicators::Indicator;
use crate::profile::ClimateProfile;
use crate::utils::clamp01;

/// Result of the vegetation normalizer
#[derive(Debug, Clone, Copy)]
pub struct VegetationResult {
    /// Observed vegetation index
    pub ndvi: f64,
    /// Normalized risk (0 = at/above optimum, 1 = at/below floor)
    pub risk: f64,
}

/// Calculate vegetation risk for one reading
///
/// The index's natural range is [-1, 1]; anything outside is an upstream
/// data defect and is rejected rather than clamped. Requires
/// `vegetation_optimum > vegetation_floor` (profile invariant, checked at
/// configuration time).
pub fn calculate_vegetation(
    ndvi: f64,
    profile: &ClimateProfile,
) -> Result<VegetationResult, RiskError> {
    if !ndvi.is_finite() || !(-1.0..=1.0).contains(&ndvi) {
        return Err(RiskError::OutOfDomain {
            indicator: Indicator::Vegetation,
            value: ndvi,
        });
    }

    let span = profile.vegetation_optimum - profile.vegetation_floor;
    debug_assert!(span > 0.0, "profile invariant: optimum > floor");

    let risk = clamp01((profile.vegetation_optimum - ndvi) / span);

    Ok(VegetationResult { ndvi, risk })
}
