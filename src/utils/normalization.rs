//! Normalization Utilities
//!
//! Shared clamp and linear-ramp helpers used by all three indicator
//! normalizers. Every normalized risk is a value in [0, 1] that is
//! monotonically non-decreasing in "badness".

/// Clamp a value to the [0, 1] risk scale.
pub fn clamp01(x: f64) -> f64 {
    x.clamp(0.0, 1.0)
}

/// Below-threshold-is-zero, linear-between-thresholds, clamp-above ramp.
///
/// Returns 0.0 for `raw <= low`, rises linearly to 1.0 at `raw == high`,
/// and saturates at 1.0 beyond. Requires `low < high` (a profile invariant
/// checked at configuration time, not here).
pub fn threshold_ramp(raw: f64, low: f64, high: f64) -> f64 {
    debug_assert!(low < high, "ramp thresholds must satisfy low < high");

    if raw <= low {
        return 0.0;
    }
    clamp01((raw - low) / (high - low))
}
