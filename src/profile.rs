//! Climate Profiles
//!
//! Per-zone calibration thresholds for the three indicator normalizers.
//! A profile is loaded once at process start and is read-only thereafter;
//! no evaluation ever mutates a shared profile. Invariant violations are
//! configuration errors and are never silently corrected.

use crate::climate::ClimateZone;
use crate::error::RiskError;
use anyhow::{Context, Result};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Threshold set for a single climate zone
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClimateProfile {
    /// Vegetation index at or above which vegetation risk is zero
    pub vegetation_optimum: f64,
    /// Vegetation index at or below which vegetation risk saturates at 1
    pub vegetation_floor: f64,

    /// Water-balance deficit (mm/day) below which drought risk is zero
    pub drought_low: f64,
    /// Water-balance deficit (mm/day) at which drought risk saturates at 1
    pub drought_high: f64,

    /// 3h precipitation sum (mm) where flash flood risk starts
    pub flood_3h_moderate: f64,
    /// 3h precipitation sum (mm) where flash flood risk saturates at 1
    pub flood_3h_severe: f64,

    /// 24h precipitation sum (mm) where daily flood risk starts
    pub flood_24h_moderate: f64,
    /// 24h precipitation sum (mm) where daily flood risk saturates at 1
    pub flood_24h_severe: f64,
}

impl ClimateProfile {
    /// Hand-authored thresholds for a built-in climate zone
    pub fn builtin(zone: ClimateZone) -> Self {
        match zone {
            ClimateZone::Temperate => Self {
                vegetation_optimum: 0.60,
                vegetation_floor: 0.20,
                drought_low: 0.5,
                drought_high: 3.0,
                flood_3h_moderate: 10.0,
                flood_3h_severe: 25.0,
                flood_24h_moderate: 20.0,
                flood_24h_severe: 50.0,
            },
            ClimateZone::SemiArid => Self {
                vegetation_optimum: 0.40,
                vegetation_floor: 0.10,
                drought_low: 2.0,
                drought_high: 6.0,
                flood_3h_moderate: 5.0,
                flood_3h_severe: 15.0,
                flood_24h_moderate: 10.0,
                flood_24h_severe: 30.0,
            },
            ClimateZone::TropicalHumid => Self {
                vegetation_optimum: 0.80,
                vegetation_floor: 0.40,
                drought_low: 1.0,
                drought_high: 5.0,
                flood_3h_moderate: 10.0,
                flood_3h_severe: 30.0,
                flood_24h_moderate: 25.0,
                flood_24h_severe: 80.0,
            },
            ClimateZone::TropicalMonsoon => Self {
                vegetation_optimum: 0.75,
                vegetation_floor: 0.35,
                drought_low: 1.0,
                drought_high: 5.0,
                flood_3h_moderate: 8.0,
                flood_3h_severe: 25.0,
                flood_24h_moderate: 20.0,
                flood_24h_severe: 70.0,
            },
        }
    }

    /// Check the profile's threshold invariants
    pub fn validate(&self, zone: &str) -> Result<(), RiskError> {
        let invalid = |reason: &str| RiskError::InvalidProfile {
            zone: zone.to_string(),
            reason: reason.to_string(),
        };

        let fields = [
            self.vegetation_optimum,
            self.vegetation_floor,
            self.drought_low,
            self.drought_high,
            self.flood_3h_moderate,
            self.flood_3h_severe,
            self.flood_24h_moderate,
            self.flood_24h_severe,
        ];
        if fields.iter().any(|v| !v.is_finite()) {
            return Err(invalid("thresholds must be finite"));
        }

        if self.vegetation_optimum <= self.vegetation_floor {
            return Err(invalid("vegetation_optimum must exceed vegetation_floor"));
        }
        if self.drought_low >= self.drought_high {
            return Err(invalid("drought_low must be below drought_high"));
        }
        if self.flood_3h_moderate >= self.flood_3h_severe {
            return Err(invalid("flood_3h_moderate must be below flood_3h_severe"));
        }
        if self.flood_24h_moderate >= self.flood_24h_severe {
            return Err(invalid("flood_24h_moderate must be below flood_24h_severe"));
        }
        if self.flood_3h_moderate < 0.0 || self.flood_24h_moderate < 0.0 {
            return Err(invalid("flood thresholds must be non-negative"));
        }

        Ok(())
    }
}

/// Registry of validated profiles, one per climate zone
#[derive(Debug, Clone)]
pub struct ProfileRegistry {
    profiles: FxHashMap<ClimateZone, ClimateProfile>,
}

impl ProfileRegistry {
    /// Registry holding the built-in profile for every zone
    pub fn builtin() -> Self {
        let mut profiles = FxHashMap::default();
        for zone in ClimateZone::all() {
            profiles.insert(*zone, ClimateProfile::builtin(*zone));
        }
        Self { profiles }
    }

    /// Build a registry from caller-supplied profiles, validating each
    pub fn with_profiles(
        entries: impl IntoIterator<Item = (ClimateZone, ClimateProfile)>,
    ) -> Result<Self, RiskError> {
        let mut profiles = FxHashMap::default();
        for (zone, profile) in entries {
            profile.validate(zone.key())?;
            profiles.insert(zone, profile);
        }
        Ok(Self { profiles })
    }

    /// Load profiles from a JSON file keyed by zone key
    ///
    /// Every profile is validated before the registry is returned; a zone
    /// key or threshold problem aborts the load.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read profile file: {:?}", path))?;

        let raw: FxHashMap<String, ClimateProfile> =
            serde_json::from_str(&contents).with_context(|| "Failed to parse profile JSON")?;

        let mut profiles = FxHashMap::default();
        for (key, profile) in raw {
            let zone = ClimateZone::from_key(&key)
                .with_context(|| format!("Unknown zone key in profile file: '{}'", key))?;
            profile
                .validate(&key)
                .with_context(|| format!("Invalid profile for zone '{}'", key))?;
            profiles.insert(zone, profile);
        }

        tracing::info!(path = %path.display(), zones = profiles.len(), "loaded climate profiles");
        Ok(Self { profiles })
    }

    /// Profile for a zone; a missing zone is a configuration error
    pub fn get(&self, zone: ClimateZone) -> Result<&ClimateProfile, RiskError> {
        self.profiles
            .get(&zone)
            .ok_or_else(|| RiskError::UnknownZone(zone.key().to_string()))
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

impl Default for ProfileRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
