//! Climate Zone Resolution
//!
//! Closed set of climate zones plus the location→zone registry used to
//! select a threshold profile. This is a static lookup over known
//! locations, not a geocoding service: an unknown identifier is a
//! configuration error and fails fast, since an unrecognized zone would
//! produce arbitrary risk skew.

use crate::error::RiskError;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Climate zone groupings used for threshold calibration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClimateZone {
    /// Mild temperatures, adequate rainfall year-round
    Temperate,

    /// Low rainfall, high evaporation, sparse vegetation baseline
    SemiArid,

    /// Year-round warmth and rainfall, dense vegetation baseline
    TropicalHumid,

    /// Year-round warmth with pronounced wet/dry seasons
    TropicalMonsoon,
}

impl ClimateZone {
    /// Parse a zone key as used in configuration files
    pub fn from_key(key: &str) -> Result<Self, RiskError> {
        match key.trim() {
            "temperate" => Ok(ClimateZone::Temperate),
            "semi_arid" => Ok(ClimateZone::SemiArid),
            "tropical_humid" => Ok(ClimateZone::TropicalHumid),
            "tropical_monsoon" => Ok(ClimateZone::TropicalMonsoon),
            other => Err(RiskError::UnknownZone(other.to_string())),
        }
    }

    /// The key used in configuration files
    pub fn key(&self) -> &'static str {
        match self {
            ClimateZone::Temperate => "temperate",
            ClimateZone::SemiArid => "semi_arid",
            ClimateZone::TropicalHumid => "tropical_humid",
            ClimateZone::TropicalMonsoon => "tropical_monsoon",
        }
    }

    /// Friendly name for display
    pub fn display_name(&self) -> &'static str {
        match self {
            ClimateZone::Temperate => "Temperate",
            ClimateZone::SemiArid => "Semi-arid",
            ClimateZone::TropicalHumid => "Tropical Humid",
            ClimateZone::TropicalMonsoon => "Tropical Monsoon",
        }
    }

    /// Get all zones
    pub fn all() -> &'static [ClimateZone] {
        &[
            ClimateZone::Temperate,
            ClimateZone::SemiArid,
            ClimateZone::TropicalHumid,
            ClimateZone::TropicalMonsoon,
        ]
    }
}

/// Closed registry mapping location identifiers to climate zones
#[derive(Debug, Clone)]
pub struct LocationRegistry {
    zones: FxHashMap<String, ClimateZone>,
}

impl LocationRegistry {
    /// Registry seeded with the built-in monitored locations
    pub fn builtin() -> Self {
        let mut registry = Self::empty();
        registry.insert("Darmstadt, Deutschland", ClimateZone::Temperate);
        registry.insert("Tucson, USA", ClimateZone::SemiArid);
        registry.insert("Fortaleza, Brasilien", ClimateZone::TropicalHumid);
        registry.insert("Malolos, Philippinen", ClimateZone::TropicalMonsoon);
        registry
    }

    /// Empty registry, for callers supplying their own location set
    pub fn empty() -> Self {
        Self {
            zones: FxHashMap::default(),
        }
    }

    /// Register a location
    pub fn insert(&mut self, location_id: &str, zone: ClimateZone) {
        self.zones.insert(location_id.to_string(), zone);
    }

    /// Resolve a location identifier to its climate zone
    ///
    /// Unknown identifiers fail fast; there is no silent default zone.
    pub fn resolve(&self, location_id: &str) -> Result<ClimateZone, RiskError> {
        self.zones
            .get(location_id)
            .copied()
            .ok_or_else(|| RiskError::UnknownLocation(location_id.to_string()))
    }

    /// Registered location identifiers
    pub fn locations(&self) -> impl Iterator<Item = &str> {
        self.zones.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }
}

impl Default for LocationRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
