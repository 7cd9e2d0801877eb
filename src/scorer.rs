//! Risk Scorer - Main coordinator for composite risk evaluation
//!
//! Holds the location and profile registries plus the aggregation and
//! missing-data policies, and exposes the single in-process entry point:
//! resolve the zone, validate the readings, run the available normalizers,
//! aggregate, label. The scorer performs no I/O and keeps no mutable
//! state between invocations; evaluating one location is fully
//! independent of any other, so concurrent callers need no coordination.

use crate::aggregate::{
    aggregate, AggregationPolicy, CompositeRisk, IndicatorBreakdown, MissingPolicy,
    ObservedReading,
};
use crate::climate::LocationRegistry;
use crate::error::RiskError;
use crate::indicators::{calculate_drought, calculate_flood, calculate_vegetation, Indicator};
use crate::label::{OrdinalGrade, RiskLabel};
use crate::profile::ProfileRegistry;
use crate::readings::IndicatorReadings;
use smallvec::SmallVec;
use tracing::debug;

/// Main composite risk scorer
#[derive(Debug, Clone)]
pub struct RiskScorer {
    locations: LocationRegistry,
    profiles: ProfileRegistry,
    aggregation: AggregationPolicy,
    missing_policy: MissingPolicy,
}

impl RiskScorer {
    /// Scorer over the built-in registries with default policies
    /// (weighted continuous blend, degraded marking on missing data)
    pub fn new() -> Result<Self, RiskError> {
        Self::with_policies(AggregationPolicy::default(), MissingPolicy::default())
    }

    /// Scorer over the built-in registries with explicit policies
    pub fn with_policies(
        aggregation: AggregationPolicy,
        missing_policy: MissingPolicy,
    ) -> Result<Self, RiskError> {
        Self::with_registries(
            LocationRegistry::builtin(),
            ProfileRegistry::builtin(),
            aggregation,
            missing_policy,
        )
    }

    /// Scorer over caller-supplied registries
    ///
    /// Policy configuration is validated here, at construction, so a bad
    /// weight set fails fast instead of surfacing mid-evaluation.
    pub fn with_registries(
        locations: LocationRegistry,
        profiles: ProfileRegistry,
        aggregation: AggregationPolicy,
        missing_policy: MissingPolicy,
    ) -> Result<Self, RiskError> {
        aggregation.validate()?;
        Ok(Self {
            locations,
            profiles,
            aggregation,
            missing_policy,
        })
    }

    /// Evaluate one location against one set of raw readings
    pub fn evaluate(
        &self,
        location_id: &str,
        readings: &IndicatorReadings,
    ) -> Result<CompositeRisk, RiskError> {
        let zone = self.locations.resolve(location_id)?;
        let profile = self.profiles.get(zone)?;
        readings.validate()?;

        let mut breakdown: SmallVec<[IndicatorBreakdown; 3]> = SmallVec::new();
        let mut missing: SmallVec<[Indicator; 3]> = SmallVec::new();

        match readings.vegetation {
            Some(ndvi) => {
                let result = calculate_vegetation(ndvi, profile)?;
                let score = (result.risk * 100.0).round() as u32;
                breakdown.push(IndicatorBreakdown {
                    indicator: Indicator::Vegetation,
                    observed: ObservedReading::Vegetation { ndvi: result.ndvi },
                    risk: result.risk,
                    score,
                    label: RiskLabel::from_score(score),
                    grade: OrdinalGrade::for_vegetation(result.ndvi),
                });
            }
            None => missing.push(Indicator::Vegetation),
        }

        match readings.drought {
            Some(deficit_mm) => {
                let result = calculate_drought(deficit_mm, profile)?;
                let score = (result.risk * 100.0).round() as u32;
                breakdown.push(IndicatorBreakdown {
                    indicator: Indicator::Drought,
                    observed: ObservedReading::Drought {
                        deficit_mm: result.deficit_mm,
                    },
                    risk: result.risk,
                    score,
                    label: RiskLabel::from_score(score),
                    grade: OrdinalGrade::for_drought(result.deficit_mm),
                });
            }
            None => missing.push(Indicator::Drought),
        }

        match readings.flood {
            Some(flood) => {
                let result = calculate_flood(&flood, profile)?;
                let score = (result.risk * 100.0).round() as u32;
                breakdown.push(IndicatorBreakdown {
                    indicator: Indicator::Flood,
                    observed: ObservedReading::Flood {
                        last_hour_mm: result.last_hour_mm,
                        sum_3h_mm: result.sum_3h_mm,
                        sum_24h_mm: result.sum_24h_mm,
                        flash_risk: result.flash_risk,
                        daily_risk: result.daily_risk,
                    },
                    risk: result.risk,
                    score,
                    label: RiskLabel::from_score(score),
                    grade: OrdinalGrade::for_flood(result.sum_3h_mm, result.sum_24h_mm),
                });
            }
            None => missing.push(Indicator::Flood),
        }

        let composite = aggregate(
            self.aggregation,
            self.missing_policy,
            breakdown,
            missing,
        )?;

        debug!(
            location = location_id,
            zone = zone.key(),
            summary = %composite.summary(),
            degraded = composite.degraded,
            "evaluated composite risk"
        );

        Ok(composite)
    }

    /// The location registry backing this scorer
    pub fn locations(&self) -> &LocationRegistry {
        &self.locations
    }

    /// The profile registry backing this scorer
    pub fn profiles(&self) -> &ProfileRegistry {
        &self.profiles
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::CompositeWeights;

    #[test]
    fn test_invalid_weights_fail_at_construction() {
        let weights = CompositeWeights {
            vegetation: 0.5,
            drought: 0.5,
            flood: 0.5,
        };
        let result = RiskScorer::with_policies(
            AggregationPolicy::WeightedContinuous(weights),
            MissingPolicy::default(),
        );
        assert!(matches!(result, Err(RiskError::InvalidWeights { .. })));
    }

    #[test]
    fn test_unknown_location_fails_fast() {
        let scorer = RiskScorer::new().unwrap();
        let err = scorer
            .evaluate("Nowhere", &IndicatorReadings::default())
            .unwrap_err();
        assert!(matches!(err, RiskError::UnknownLocation(_)));
    }

    #[test]
    fn test_empty_readings_are_rejected() {
        let scorer = RiskScorer::new().unwrap();
        let err = scorer
            .evaluate("Tucson, USA", &IndicatorReadings::default())
            .unwrap_err();
        assert!(matches!(err, RiskError::NoReadings));
    }
}
