//! Utility modules for risk scoring
//!
//! Contains shared functionality used across the indicator normalizers:
//! - Normalization: clamp and linear threshold ramps

pub mod normalization;

// Re-export commonly used helpers
pub use normalization::{clamp01, threshold_ramp};
