//! Composite Risk Aggregation
//!
//! Combines the three normalized indicator risks into one assessment.
//! Two aggregation policies exist and are not interchangeable: a weighted
//! continuous blend on a 0-100 scale, and a max-of-ordinal-grades rule
//! where the worst single indicator dominates. Both are first-class
//! variants of one tagged enum; callers pick one explicitly.
//!
//! Missing indicators are handled by an explicit policy rather than an
//! implicit default: remaining weights are renormalized either way, and
//! the policy decides whether the composite is presented as a normal or a
//! degraded assessment.

use crate::error::RiskError;
use crate::indicators::Indicator;
use crate::label::{OrdinalGrade, RiskLabel};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Weights for the continuous blend; must be non-negative and sum to 1.0
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompositeWeights {
    pub vegetation: f64,
    pub drought: f64,
    pub flood: f64,
}

impl Default for CompositeWeights {
    fn default() -> Self {
        Self {
            vegetation: 0.35,
            drought: 0.40,
            flood: 0.25,
        }
    }
}

impl CompositeWeights {
    const SUM_TOLERANCE: f64 = 1e-9;

    /// Check the weight invariants at configuration time
    pub fn validate(&self) -> Result<(), RiskError> {
        let sum = self.vegetation + self.drought + self.flood;
        let each_valid = [self.vegetation, self.drought, self.flood]
            .iter()
            .all(|w| w.is_finite() && *w >= 0.0);

        if !each_valid || (sum - 1.0).abs() > Self::SUM_TOLERANCE {
            return Err(RiskError::InvalidWeights { sum });
        }
        Ok(())
    }

    /// Weight assigned to a single indicator
    pub fn weight(&self, indicator: Indicator) -> f64 {
        match indicator {
            Indicator::Vegetation => self.vegetation,
            Indicator::Drought => self.drought,
            Indicator::Flood => self.flood,
        }
    }
}

/// How to combine the normalized risks into one assessment
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AggregationPolicy {
    /// Weighted linear blend mapped to a 0-100 score
    WeightedContinuous(CompositeWeights),

    /// Maximum of the three per-indicator 0-3 grades; the worst single
    /// indicator dominates regardless of the other two
    OrdinalMax,
}

impl Default for AggregationPolicy {
    fn default() -> Self {
        AggregationPolicy::WeightedContinuous(CompositeWeights::default())
    }
}

impl AggregationPolicy {
    /// Validate any configuration the policy carries
    pub fn validate(&self) -> Result<(), RiskError> {
        match self {
            AggregationPolicy::WeightedContinuous(weights) => weights.validate(),
            AggregationPolicy::OrdinalMax => Ok(()),
        }
    }
}

/// How the composite treats indicators whose reading was unavailable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingPolicy {
    /// Exclude the indicator, renormalize remaining weights, and present
    /// the result as a normal assessment
    ReweightRemaining,

    /// Same numeric handling, but flag the composite as degraded so
    /// consumers can surface the data outage
    #[default]
    MarkDegraded,
}

/// Echo of the raw observation behind one breakdown entry
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ObservedReading {
    Vegetation {
        ndvi: f64,
    },
    Drought {
        deficit_mm: f64,
    },
    Flood {
        last_hour_mm: f64,
        sum_3h_mm: Option<f64>,
        sum_24h_mm: f64,
        flash_risk: Option<f64>,
        daily_risk: f64,
    },
}

/// Per-indicator transparency record carried by every composite
#[derive(Debug, Clone, Serialize)]
pub struct IndicatorBreakdown {
    pub indicator: Indicator,
    pub observed: ObservedReading,
    /// Normalized risk in [0, 1]
    pub risk: f64,
    /// Risk on the 0-100 scale
    pub score: u32,
    pub label: RiskLabel,
    pub grade: OrdinalGrade,
}

/// The headline assessment, tagged by the policy that produced it
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CompositeAssessment {
    Weighted { score: u32, label: RiskLabel },
    Ordinal { grade: OrdinalGrade },
}

impl CompositeAssessment {
    /// Label text for the headline
    pub fn display_text(&self) -> &'static str {
        match self {
            CompositeAssessment::Weighted { label, .. } => label.display_text(),
            CompositeAssessment::Ordinal { grade } => grade.display_text(),
        }
    }
}

/// Full composite output: headline, per-indicator breakdown, missing list
#[derive(Debug, Clone, Serialize)]
pub struct CompositeRisk {
    pub assessment: CompositeAssessment,
    pub breakdown: SmallVec<[IndicatorBreakdown; 3]>,
    /// Indicators whose reading was unavailable
    pub missing: SmallVec<[Indicator; 3]>,
    /// True when readings were missing and the policy marks partial data
    pub degraded: bool,
}

impl CompositeRisk {
    /// One-line summary, e.g. "59/100 (Elevated)" or "grade 2 (Medium)"
    pub fn summary(&self) -> String {
        match self.assessment {
            CompositeAssessment::Weighted { score, label } => {
                format!("{}/100 ({})", score, label.display_text())
            }
            CompositeAssessment::Ordinal { grade } => {
                format!("grade {} ({})", grade.value(), grade.display_text())
            }
        }
    }
}

/// Combine available indicator breakdowns into a composite
///
/// `breakdown` holds one entry per available indicator; `missing` names
/// the rest. An empty breakdown means there is nothing to score. For the
/// weighted policy the weights of the available indicators are
/// renormalized; if they carry zero total weight the composite is
/// undefined and treated as having no usable readings.
pub fn aggregate(
    policy: AggregationPolicy,
    missing_policy: MissingPolicy,
    breakdown: SmallVec<[IndicatorBreakdown; 3]>,
    missing: SmallVec<[Indicator; 3]>,
) -> Result<CompositeRisk, RiskError> {
    if breakdown.is_empty() {
        return Err(RiskError::NoReadings);
    }

    let assessment = match policy {
        AggregationPolicy::WeightedContinuous(weights) => {
            weights.validate()?;

            let weight_sum: f64 = breakdown
                .iter()
                .map(|entry| weights.weight(entry.indicator))
                .sum();
            if weight_sum <= 0.0 {
                return Err(RiskError::NoReadings);
            }

            let blended: f64 = breakdown
                .iter()
                .map(|entry| weights.weight(entry.indicator) * entry.risk)
                .sum::<f64>()
                / weight_sum;

            let score = (blended * 100.0).round() as u32;
            CompositeAssessment::Weighted {
                score,
                label: RiskLabel::from_score(score),
            }
        }
        AggregationPolicy::OrdinalMax => {
            let grade = breakdown
                .iter()
                .map(|entry| entry.grade)
                .max()
                .unwrap_or(OrdinalGrade::Low);
            CompositeAssessment::Ordinal { grade }
        }
    };

    let degraded = !missing.is_empty() && missing_policy == MissingPolicy::MarkDegraded;

    Ok(CompositeRisk {
        assessment,
        breakdown,
        missing,
        degraded,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    fn entry(indicator: Indicator, risk: f64, grade: OrdinalGrade) -> IndicatorBreakdown {
        let score = (risk * 100.0).round() as u32;
        IndicatorBreakdown {
            indicator,
            observed: match indicator {
                Indicator::Vegetation => ObservedReading::Vegetation { ndvi: 0.0 },
                Indicator::Drought => ObservedReading::Drought { deficit_mm: 0.0 },
                Indicator::Flood => ObservedReading::Flood {
                    last_hour_mm: 0.0,
                    sum_3h_mm: None,
                    sum_24h_mm: 0.0,
                    flash_risk: None,
                    daily_risk: 0.0,
                },
            },
            risk,
            score,
            label: RiskLabel::from_score(score),
            grade,
        }
    }

    fn full_breakdown() -> SmallVec<[IndicatorBreakdown; 3]> {
        // veg 0.5, drought 1.0, flood 0.667
        smallvec![
            entry(Indicator::Vegetation, 0.5, OrdinalGrade::Slight),
            entry(Indicator::Drought, 1.0, OrdinalGrade::High),
            entry(Indicator::Flood, 2.0 / 3.0, OrdinalGrade::Medium),
        ]
    }

    #[test]
    fn test_weights_must_sum_to_one() {
        let bad = CompositeWeights {
            vegetation: 0.5,
            drought: 0.4,
            flood: 0.25,
        };
        assert!(matches!(
            bad.validate(),
            Err(RiskError::InvalidWeights { .. })
        ));
        CompositeWeights::default().validate().unwrap();
    }

    #[test]
    fn test_negative_weight_rejected() {
        let bad = CompositeWeights {
            vegetation: -0.1,
            drought: 0.6,
            flood: 0.5,
        };
        assert!(bad.validate().is_err());
    }

    #[test]
    fn test_weighted_blend() {
        // round(100 * (0.35*0.5 + 0.40*1.0 + 0.25*0.667)) = 74 -> High
        let result = aggregate(
            AggregationPolicy::default(),
            MissingPolicy::MarkDegraded,
            full_breakdown(),
            smallvec![],
        )
        .unwrap();

        assert_eq!(
            result.assessment,
            CompositeAssessment::Weighted {
                score: 74,
                label: RiskLabel::High,
            }
        );
        assert!(!result.degraded);
        assert_eq!(result.summary(), "74/100 (High)");
    }

    #[test]
    fn test_weighted_invariant_under_reordering() {
        let mut reordered = full_breakdown();
        reordered.swap(0, 2);

        let a = aggregate(
            AggregationPolicy::default(),
            MissingPolicy::MarkDegraded,
            full_breakdown(),
            smallvec![],
        )
        .unwrap();
        let b = aggregate(
            AggregationPolicy::default(),
            MissingPolicy::MarkDegraded,
            reordered,
            smallvec![],
        )
        .unwrap();

        assert_eq!(a.assessment, b.assessment);
    }

    #[test]
    fn test_ordinal_max_worst_indicator_dominates() {
        let result = aggregate(
            AggregationPolicy::OrdinalMax,
            MissingPolicy::MarkDegraded,
            full_breakdown(),
            smallvec![],
        )
        .unwrap();

        assert_eq!(
            result.assessment,
            CompositeAssessment::Ordinal {
                grade: OrdinalGrade::High
            }
        );
        assert_eq!(result.summary(), "grade 3 (High)");
    }

    #[test]
    fn test_missing_indicator_reweights() {
        // Drought missing: score = 100 * (0.35*0.5 + 0.25*0.8) / 0.60 = 62.5 -> 63
        let breakdown: SmallVec<[IndicatorBreakdown; 3]> = smallvec![
            entry(Indicator::Vegetation, 0.5, OrdinalGrade::Slight),
            entry(Indicator::Flood, 0.8, OrdinalGrade::Medium),
        ];

        let result = aggregate(
            AggregationPolicy::default(),
            MissingPolicy::ReweightRemaining,
            breakdown,
            smallvec![Indicator::Drought],
        )
        .unwrap();

        assert_eq!(
            result.assessment,
            CompositeAssessment::Weighted {
                score: 63,
                label: RiskLabel::Elevated,
            }
        );
        assert!(!result.degraded);
        assert_eq!(result.missing.as_slice(), &[Indicator::Drought]);
    }

    #[test]
    fn test_missing_indicator_marks_degraded() {
        let breakdown: SmallVec<[IndicatorBreakdown; 3]> =
            smallvec![entry(Indicator::Drought, 0.4, OrdinalGrade::Slight)];

        let result = aggregate(
            AggregationPolicy::default(),
            MissingPolicy::MarkDegraded,
            breakdown,
            smallvec![Indicator::Vegetation, Indicator::Flood],
        )
        .unwrap();

        assert!(result.degraded);
        // Only drought available: renormalized score is its own risk
        assert_eq!(
            result.assessment,
            CompositeAssessment::Weighted {
                score: 40,
                label: RiskLabel::Elevated,
            }
        );
    }

    #[test]
    fn test_all_missing_is_an_error() {
        let result = aggregate(
            AggregationPolicy::default(),
            MissingPolicy::MarkDegraded,
            smallvec![],
            smallvec![Indicator::Vegetation, Indicator::Drought, Indicator::Flood],
        );
        assert!(matches!(result, Err(RiskError::NoReadings)));
    }

    #[test]
    fn test_zero_weight_remainder_is_an_error() {
        let weights = CompositeWeights {
            vegetation: 1.0,
            drought: 0.0,
            flood: 0.0,
        };
        let breakdown: SmallVec<[IndicatorBreakdown; 3]> =
            smallvec![entry(Indicator::Drought, 0.9, OrdinalGrade::High)];

        let result = aggregate(
            AggregationPolicy::WeightedContinuous(weights),
            MissingPolicy::ReweightRemaining,
            breakdown,
            smallvec![Indicator::Vegetation, Indicator::Flood],
        );
        assert!(matches!(result, Err(RiskError::NoReadings)));
    }
}
