//! Raw Indicator Readings
//!
//! Input structures supplied by the external data-fetching collaborators.
//! Parsing and unit conversion happen upstream; readings arrive here in
//! physical units (vegetation index, mm/day, mm). An unavailable reading
//! is an explicit `None`, never a substituted estimate: a data outage must
//! reach the composite as a missing indicator, not masquerade as
//! worst-case (or best-case) conditions.

use crate::error::RiskError;
use crate::indicators::Indicator;
use serde::{Deserialize, Serialize};

/// Precipitation intensity triple for the flood indicator
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FloodReading {
    /// Precipitation over the last hour (mm)
    pub last_hour_mm: f64,

    /// Rolling 3h precipitation sum (mm); undefined until at least
    /// 3 consecutive hourly samples exist
    pub sum_3h_mm: Option<f64>,

    /// Rolling 24h precipitation sum (mm)
    pub sum_24h_mm: f64,
}

impl FloodReading {
    /// Reject physically impossible precipitation figures
    pub fn validate(&self) -> Result<(), RiskError> {
        let out_of_domain = |value: f64| RiskError::OutOfDomain {
            indicator: Indicator::Flood,
            value,
        };

        for value in [self.last_hour_mm, self.sum_24h_mm]
            .into_iter()
            .chain(self.sum_3h_mm)
        {
            if !value.is_finite() || value < 0.0 {
                return Err(out_of_domain(value));
            }
        }
        Ok(())
    }
}

/// One evaluation's worth of raw readings, one slot per indicator
///
/// `None` marks an indicator whose upstream fetch produced no data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct IndicatorReadings {
    /// Vegetation index, natural range [-1, 1]
    pub vegetation: Option<f64>,

    /// Water-balance deficit (mm/day); negative means net wet conditions
    pub drought: Option<f64>,

    /// Precipitation intensity triple
    pub flood: Option<FloodReading>,
}

impl IndicatorReadings {
    /// Validate the domain of every available reading
    pub fn validate(&self) -> Result<(), RiskError> {
        if let Some(ndvi) = self.vegetation {
            if !ndvi.is_finite() || !(-1.0..=1.0).contains(&ndvi) {
                return Err(RiskError::OutOfDomain {
                    indicator: Indicator::Vegetation,
                    value: ndvi,
                });
            }
        }
        if let Some(deficit) = self.drought {
            if !deficit.is_finite() {
                return Err(RiskError::OutOfDomain {
                    indicator: Indicator::Drought,
                    value: deficit,
                });
            }
        }
        if let Some(flood) = self.flood {
            flood.validate()?;
        }
        Ok(())
    }

    /// True when no indicator has a reading
    pub fn is_empty(&self) -> bool {
        self.vegetation.is_none() && self.drought.is_none() && self.flood.is_none()
    }
}
