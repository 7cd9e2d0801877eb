//! Indicator normalizer modules
//!
//! Each indicator is implemented in its own module as a pure function
//! `(raw reading, profile) -> risk in [0, 1]`, clamped at both ends.

pub mod drought;
pub mod flood;
pub mod vegetation;

// Re-export normalizer functions
pub use drought::{calculate_drought, DroughtResult};
pub use flood::{calculate_flood, FloodResult};
pub use vegetation::{calculate_vegetation, VegetationResult};

use serde::{Deserialize, Serialize};
use std::fmt;

/// The three environmental indicators feeding the composite
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Indicator {
    Vegetation,
    Drought,
    Flood,
}

impl Indicator {
    /// Friendly name for display
    pub fn display_name(&self) -> &'static str {
        match self {
            Indicator::Vegetation => "Vegetation",
            Indicator::Drought => "Drought",
            Indicator::Flood => "Flood",
        }
    }

    /// Get all indicators
    pub fn all() -> &'static [Indicator] {
        &[Indicator::Vegetation, Indicator::Drought, Indicator::Flood]
    }
}

impl fmt::Display for Indicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
