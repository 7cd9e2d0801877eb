//! Environmental Composite Risk Scoring Engine
//!
//! Converts three independently-sourced environmental signals for a
//! geographic point - vegetation vitality (NDVI-like), a water-balance
//! deficit ("drought") index, and short/medium-term precipitation
//! intensity - into normalized, climate-zone-aware risk scores, then
//! combines them into a single composite assessment with a
//! human-readable label.
//!
//! - `climate`: location -> climate zone resolution (closed registry)
//! - `profile`: per-zone calibration thresholds
//! - `readings`: raw inputs from the external data collaborators
//! - `indicators/`: the three pure normalizers
//! - `aggregate`: weighted-continuous and ordinal-max composite policies
//! - `label`: score -> category mappings
//! - `scorer`: the single in-process entry point
//!
//! The engine performs no I/O: fetching, parsing and unit conversion of
//! the upstream payloads belong to external collaborators, which supply
//! readings in physical units and receive the composite back.

pub mod aggregate;
pub mod climate;
pub mod error;
pub mod indicators;
pub mod label;
pub mod profile;
pub mod readings;
pub mod scorer;
pub mod utils;

// Re-export commonly used types
pub use aggregate::{
    AggregationPolicy, CompositeAssessment, CompositeRisk, CompositeWeights, IndicatorBreakdown,
    MissingPolicy, ObservedReading,
};
pub use climate::{ClimateZone, LocationRegistry};
pub use error::RiskError;
pub use indicators::{
    calculate_drought, calculate_flood, calculate_vegetation, DroughtResult, FloodResult,
    Indicator, VegetationResult,
};
pub use label::{OrdinalGrade, RiskLabel};
pub use profile::{ClimateProfile, ProfileRegistry};
pub use readings::{FloodReading, IndicatorReadings};
pub use scorer::RiskScorer;
