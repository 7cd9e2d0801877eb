//! Error taxonomy for the risk scoring engine.
//!
//! Configuration problems (unknown locations or zones, invalid profiles,
//! bad weights) are fatal and never silently corrected. Out-of-domain
//! readings indicate an upstream data defect and are rejected rather than
//! clamped. A reading that is simply unavailable is NOT an error here; it
//! is carried as an explicit `Option` through the readings and handled by
//! the composite's missing-data policy.

use crate::indicators::Indicator;
use thiserror::Error;

/// Errors produced by registry resolution, configuration validation and
/// reading validation.
#[derive(Debug, Error)]
pub enum RiskError {
    /// Location identifier not present in the closed location registry.
    #[error("unknown location '{0}': not in the location registry")]
    UnknownLocation(String),

    /// Climate zone key not recognized, or no profile registered for it.
    #[error("unknown climate zone '{0}'")]
    UnknownZone(String),

    /// A climate profile violates one of its threshold invariants.
    #[error("invalid climate profile for zone '{zone}': {reason}")]
    InvalidProfile { zone: String, reason: String },

    /// Composite weights must be non-negative and sum to 1.0 (± 1e-9).
    #[error("composite weights must sum to 1.0, got {sum}")]
    InvalidWeights { sum: f64 },

    /// A raw reading lies outside its physically valid range.
    #[error("{indicator} reading out of domain: {value}")]
    OutOfDomain { indicator: Indicator, value: f64 },

    /// Every indicator reading was unavailable; there is nothing to score.
    #[error("no indicator readings available")]
    NoReadings,
}
