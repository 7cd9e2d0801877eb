//! Risk Labeling
//!
//! Pure mappings from numeric scores to ordered categorical labels, one
//! set per aggregation scale. Both mappings are monotonic: a strictly
//! higher score never yields a lower-severity label.

use serde::{Deserialize, Serialize};

/// Label for the continuous 0-100 risk scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiskLabel {
    Low,
    SlightlyElevated,
    Elevated,
    High,
    Extreme,
}

impl RiskLabel {
    /// Map a 0-100 score to its label
    pub fn from_score(score_0_100: u32) -> Self {
        match score_0_100 {
            0..=19 => RiskLabel::Low,
            20..=39 => RiskLabel::SlightlyElevated,
            40..=64 => RiskLabel::Elevated,
            65..=84 => RiskLabel::High,
            _ => RiskLabel::Extreme,
        }
    }

    /// Friendly name for display
    pub fn display_text(&self) -> &'static str {
        match self {
            RiskLabel::Low => "Low",
            RiskLabel::SlightlyElevated => "Slightly elevated",
            RiskLabel::Elevated => "Elevated",
            RiskLabel::High => "High",
            RiskLabel::Extreme => "Extreme",
        }
    }
}

/// Coarse 0-3 grade for the ordinal-max aggregation policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum OrdinalGrade {
    Low,
    Slight,
    Medium,
    High,
}

impl OrdinalGrade {
    /// Numeric grade value (0-3)
    pub fn value(&self) -> u8 {
        match self {
            OrdinalGrade::Low => 0,
            OrdinalGrade::Slight => 1,
            OrdinalGrade::Medium => 2,
            OrdinalGrade::High => 3,
        }
    }

    /// Friendly name for display
    pub fn display_text(&self) -> &'static str {
        match self {
            OrdinalGrade::Low => "Low",
            OrdinalGrade::Slight => "Slight",
            OrdinalGrade::Medium => "Medium",
            OrdinalGrade::High => "High",
        }
    }

    /// Grade a vegetation index on fixed cutoffs (0.2 / 0.4 / 0.6)
    pub fn for_vegetation(ndvi: f64) -> Self {
        if ndvi >= 0.6 {
            OrdinalGrade::Low
        } else if ndvi >= 0.4 {
            OrdinalGrade::Slight
        } else if ndvi >= 0.2 {
            OrdinalGrade::Medium
        } else {
            OrdinalGrade::High
        }
    }

    /// Grade a water-balance deficit on fixed cutoffs (1.5 / 3 / 6 mm/day)
    pub fn for_drought(deficit_mm: f64) -> Self {
        if deficit_mm < 1.5 {
            OrdinalGrade::Low
        } else if deficit_mm < 3.0 {
            OrdinalGrade::Slight
        } else if deficit_mm < 6.0 {
            OrdinalGrade::Medium
        } else {
            OrdinalGrade::High
        }
    }

    /// Grade precipitation intensity: worst of the flash (3h) and daily
    /// (24h) windows, each on its own fixed cutoffs
    pub fn for_flood(sum_3h_mm: Option<f64>, sum_24h_mm: f64) -> Self {
        let flash = sum_3h_mm.map(|p3h| {
            if p3h < 10.0 {
                OrdinalGrade::Low
            } else if p3h < 20.0 {
                OrdinalGrade::Slight
            } else if p3h < 40.0 {
                OrdinalGrade::Medium
            } else {
                OrdinalGrade::High
            }
        });

        let daily = if sum_24h_mm < 20.0 {
            OrdinalGrade::Low
        } else if sum_24h_mm < 50.0 {
            OrdinalGrade::Slight
        } else if sum_24h_mm < 100.0 {
            OrdinalGrade::Medium
        } else {
            OrdinalGrade::High
        };

        match flash {
            Some(flash) => flash.max(daily),
            None => daily,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_label_thresholds() {
        assert_eq!(RiskLabel::from_score(0), RiskLabel::Low);
        assert_eq!(RiskLabel::from_score(19), RiskLabel::Low);
        assert_eq!(RiskLabel::from_score(20), RiskLabel::SlightlyElevated);
        assert_eq!(RiskLabel::from_score(39), RiskLabel::SlightlyElevated);
        assert_eq!(RiskLabel::from_score(40), RiskLabel::Elevated);
        assert_eq!(RiskLabel::from_score(59), RiskLabel::Elevated);
        assert_eq!(RiskLabel::from_score(64), RiskLabel::Elevated);
        assert_eq!(RiskLabel::from_score(65), RiskLabel::High);
        assert_eq!(RiskLabel::from_score(84), RiskLabel::High);
        assert_eq!(RiskLabel::from_score(85), RiskLabel::Extreme);
        assert_eq!(RiskLabel::from_score(100), RiskLabel::Extreme);
    }

    #[test]
    fn test_score_label_monotonic() {
        let mut prev = RiskLabel::Low;
        for score in 0..=100 {
            let label = RiskLabel::from_score(score);
            assert!(label >= prev, "label severity must not decrease");
            prev = label;
        }
    }

    #[test]
    fn test_vegetation_grades() {
        assert_eq!(OrdinalGrade::for_vegetation(0.75), OrdinalGrade::Low);
        assert_eq!(OrdinalGrade::for_vegetation(0.6), OrdinalGrade::Low);
        assert_eq!(OrdinalGrade::for_vegetation(0.45), OrdinalGrade::Slight);
        assert_eq!(OrdinalGrade::for_vegetation(0.25), OrdinalGrade::Medium);
        assert_eq!(OrdinalGrade::for_vegetation(0.1), OrdinalGrade::High);
    }

    #[test]
    fn test_drought_grades() {
        assert_eq!(OrdinalGrade::for_drought(-0.5), OrdinalGrade::Low);
        assert_eq!(OrdinalGrade::for_drought(1.0), OrdinalGrade::Low);
        assert_eq!(OrdinalGrade::for_drought(2.0), OrdinalGrade::Slight);
        assert_eq!(OrdinalGrade::for_drought(4.5), OrdinalGrade::Medium);
        assert_eq!(OrdinalGrade::for_drought(7.0), OrdinalGrade::High);
    }

    #[test]
    fn test_flood_grade_is_worst_window() {
        // Flash severe, daily quiet
        assert_eq!(OrdinalGrade::for_flood(Some(45.0), 5.0), OrdinalGrade::High);
        // Daily heavy, flash quiet
        assert_eq!(
            OrdinalGrade::for_flood(Some(2.0), 60.0),
            OrdinalGrade::Medium
        );
        // No 3h window yet: daily alone decides
        assert_eq!(OrdinalGrade::for_flood(None, 30.0), OrdinalGrade::Slight);
        assert_eq!(OrdinalGrade::for_flood(None, 5.0), OrdinalGrade::Low);
    }

    #[test]
    fn test_grade_ordering() {
        assert!(OrdinalGrade::High > OrdinalGrade::Medium);
        assert!(OrdinalGrade::Medium > OrdinalGrade::Slight);
        assert!(OrdinalGrade::Slight > OrdinalGrade::Low);
        assert_eq!(OrdinalGrade::High.value(), 3);
        assert_eq!(OrdinalGrade::Low.value(), 0);
    }
}
