//! Risk scoring from reliability estimates.
//!
//! Maps a point reliability to a qualitative severity × probability risk
//! assessment on the 5 × 5 matrix the maintenance dashboard displays.
//!
//! Severity is a fixed constant in the recording system that produced
//! this data — every failure mode is scored at severity 3 ("Medium").
//! That is a documented simplification of the source system, not a
//! derived quantity, and it is preserved here. Callers extending the
//! system can supply their own severity via [`assess_with_severity`].

use serde::Serialize;

/// The severity level the recording system assigns every failure mode.
pub const DEFAULT_SEVERITY: u8 = 3;

/// Qualitative risk classification derived from the risk score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RiskLevel {
    /// Score 1-5.
    Low,
    /// Score 6-10.
    Medium,
    /// Score 11-15.
    High,
    /// Score 16-25.
    VeryHigh,
}

/// A severity × probability risk assessment for one failure mode.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RiskAssessment {
    /// Failure probability at unit time: 1 - reliability.
    pub probability: f64,
    /// Probability bucket, 1 (rare) to 5 (frequent).
    pub probability_level: u8,
    /// Severity level, 1 to 5. [`DEFAULT_SEVERITY`] unless overridden.
    pub severity: u8,
    /// severity × probability_level, 1 to 25.
    pub score: u8,
    /// Classification of the score.
    pub level: RiskLevel,
}

/// Buckets a failure probability into a level from 1 to 5.
///
/// Thresholds are strict upper bounds, so a probability exactly at a
/// boundary lands in the higher bucket:
///
/// ```text
/// p < 0.0001 -> 1    p < 0.001 -> 2    p < 0.01 -> 3
/// p < 0.1    -> 4    otherwise -> 5
/// ```
///
/// # Examples
///
/// ```
/// use failure_analytics::risk::probability_level;
///
/// assert_eq!(probability_level(0.00005), 1);
/// assert_eq!(probability_level(0.0001), 2);
/// assert_eq!(probability_level(0.5), 5);
/// ```
pub fn probability_level(probability: f64) -> u8 {
    if probability < 0.0001 {
        1
    } else if probability < 0.001 {
        2
    } else if probability < 0.01 {
        3
    } else if probability < 0.1 {
        4
    } else {
        5
    }
}

/// Classifies a risk score (1-25) into a [`RiskLevel`].
pub fn classify(score: u8) -> RiskLevel {
    match score {
        0..=5 => RiskLevel::Low,
        6..=10 => RiskLevel::Medium,
        11..=15 => RiskLevel::High,
        _ => RiskLevel::VeryHigh,
    }
}

/// Assesses risk from a unit-time reliability at [`DEFAULT_SEVERITY`].
///
/// Returns `None` when `reliability` is not a finite value in [0, 1];
/// a NaN reliability is a caller defect, not a scoreable input.
///
/// # Examples
///
/// ```
/// use failure_analytics::risk::{assess, RiskLevel};
///
/// let assessment = assess(0.95).unwrap();
/// assert_eq!(assessment.probability_level, 4);
/// assert_eq!(assessment.score, 12);
/// assert_eq!(assessment.level, RiskLevel::High);
///
/// assert!(assess(f64::NAN).is_none());
/// ```
pub fn assess(reliability: f64) -> Option<RiskAssessment> {
    assess_with_severity(reliability, DEFAULT_SEVERITY)
}

/// Assesses risk from a unit-time reliability at the given severity.
///
/// `severity` is clamped to the matrix range 1-5. Returns `None` when
/// `reliability` is not a finite value in [0, 1].
pub fn assess_with_severity(reliability: f64, severity: u8) -> Option<RiskAssessment> {
    if !reliability.is_finite() || !(0.0..=1.0).contains(&reliability) {
        return None;
    }
    let severity = severity.clamp(1, 5);
    let probability = 1.0 - reliability;
    let probability_level = probability_level(probability);
    let score = severity * probability_level;
    Some(RiskAssessment {
        probability,
        probability_level,
        severity,
        score,
        level: classify(score),
    })
}
