//! Per-group reliability estimation pipeline.
//!
//! A failure group is the set of recorded incidents sharing the same
//! component name, sub-component, and failure mode. The data-access layer
//! fetches groups; this module turns each one into the estimate + risk
//! tuple the dashboard renders, applying the upstream filtering policy:
//! non-positive observations are dropped, and a group left with nothing
//! usable is excluded from output rather than reported as an error.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::risk::{self, RiskAssessment};
use crate::weibull::{weibull_moments, CurveSampler, ReliabilityModel};

/// Error surfaced when the estimator produces a value that must not be
/// displayed.
///
/// Per the dashboard's error policy a NaN or infinite estimate is a
/// defect to surface, never a value to render; missing or unusable data
/// is not an error (the group is simply excluded).
#[derive(Debug, Error)]
pub enum EstimateError {
    /// The fit or a derived value came out non-finite.
    #[error("non-finite {quantity} estimated for failure group {group}")]
    NonFinite {
        /// Group identity, `component/sub_component/failure_mode`.
        group: String,
        /// Which derived quantity was non-finite.
        quantity: &'static str,
    },
}

/// One failure-mode group as fetched by the data-access collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FailureGroup {
    /// Component name (machine-level identity).
    pub component_name: String,
    /// Sub-component the failures were recorded against.
    pub sub_component: String,
    /// Failure mode shared by all observations in the group.
    pub failure_mode: String,
    /// Recorded hours-to-failure, one per incident.
    pub failure_hours: Vec<f64>,
    /// User-entered override hours. When present and non-empty this
    /// supersedes `failure_hours` entirely.
    #[serde(default)]
    pub manual_hours: Option<Vec<f64>>,
}

/// The derived estimate for one group: Weibull parameters, MTBF,
/// unit-time reliability, and the risk assessment built from it.
///
/// Ephemeral by design — recomputed on every read, never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct GroupEstimate {
    /// Weibull shape parameter (beta).
    pub shape: f64,
    /// Weibull scale parameter (eta).
    pub scale: f64,
    /// Mean time between failures: arithmetic mean of the observations.
    pub mt_hours: f64,
    /// Reliability at unit time, R(1).
    pub reliability: f64,
    /// Risk assessment at the recording system's fixed severity.
    pub risk: RiskAssessment,
}

impl FailureGroup {
    /// Group identity for log and error messages.
    fn label(&self) -> String {
        format!(
            "{}/{}/{}",
            self.component_name, self.sub_component, self.failure_mode
        )
    }

    /// Selects the observation set: the manual override when present and
    /// non-empty, otherwise the recorded hours. Non-finite and
    /// non-positive values are dropped either way.
    fn observations(&self) -> Vec<f64> {
        let (source, name): (&[f64], &str) = match &self.manual_hours {
            Some(manual) if !manual.is_empty() => (manual, "manual"),
            _ => (&self.failure_hours, "recorded"),
        };

        let usable: Vec<f64> = source
            .iter()
            .copied()
            .filter(|&h| h.is_finite() && h > 0.0)
            .collect();

        if usable.len() < source.len() {
            debug!(
                group = %self.label(),
                source = name,
                dropped = source.len() - usable.len(),
                "dropped unusable failure-hour observations"
            );
        }
        usable
    }

    /// Computes the estimate and risk assessment for this group.
    ///
    /// Returns `Ok(None)` when the group has no positive observations
    /// left after filtering — such groups are excluded from the
    /// dashboard's output by policy, not reported as failures.
    ///
    /// # Errors
    ///
    /// [`EstimateError::NonFinite`] if the fit or a derived value comes
    /// out NaN or infinite.
    ///
    /// # Examples
    ///
    /// ```
    /// use failure_analytics::group::FailureGroup;
    ///
    /// let group = FailureGroup {
    ///     component_name: "conveyor-3".into(),
    ///     sub_component: "drive belt".into(),
    ///     failure_mode: "tension loss".into(),
    ///     failure_hours: vec![80.0, 120.0, 95.0],
    ///     manual_hours: None,
    /// };
    /// let estimate = group.estimate().unwrap().unwrap();
    /// assert!(estimate.shape > 0.0);
    /// assert!(estimate.reliability > 0.0 && estimate.reliability < 1.0);
    /// ```
    pub fn estimate(&self) -> Result<Option<GroupEstimate>, EstimateError> {
        let observations = self.observations();
        if observations.is_empty() {
            debug!(group = %self.label(), "no positive observations, group excluded");
            return Ok(None);
        }

        // Filtered input is positive and finite, so the fit cannot be
        // rejected for bad data; a None here would itself be non-finite
        // intermediate math.
        let fit = weibull_moments(&observations).ok_or_else(|| EstimateError::NonFinite {
            group: self.label(),
            quantity: "weibull fit",
        })?;

        let model =
            ReliabilityModel::new(fit.shape, fit.scale).ok_or_else(|| EstimateError::NonFinite {
                group: self.label(),
                quantity: "weibull parameters",
            })?;

        let reliability = model.unit_reliability();
        let risk = risk::assess(reliability).ok_or_else(|| EstimateError::NonFinite {
            group: self.label(),
            quantity: "reliability",
        })?;

        Ok(Some(GroupEstimate {
            shape: fit.shape,
            scale: fit.scale,
            mt_hours: fit.mean_hours,
            reliability,
            risk,
        }))
    }

    /// Samples this group's reliability curve for charting.
    ///
    /// `Ok(None)` follows the same exclusion policy as [`estimate`].
    ///
    /// [`estimate`]: FailureGroup::estimate
    pub fn reliability_curve(&self) -> Result<Option<CurveSampler>, EstimateError> {
        let observations = self.observations();
        if observations.is_empty() {
            return Ok(None);
        }
        let fit = weibull_moments(&observations).ok_or_else(|| EstimateError::NonFinite {
            group: self.label(),
            quantity: "weibull fit",
        })?;
        let model =
            ReliabilityModel::new(fit.shape, fit.scale).ok_or_else(|| EstimateError::NonFinite {
                group: self.label(),
                quantity: "weibull parameters",
            })?;
        Ok(Some(model.curve()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::risk::RiskLevel;

    fn group(failure_hours: Vec<f64>, manual_hours: Option<Vec<f64>>) -> FailureGroup {
        FailureGroup {
            component_name: "press-1".into(),
            sub_component: "hydraulic pump".into(),
            failure_mode: "seal leak".into(),
            failure_hours,
            manual_hours,
        }
    }

    #[test]
    fn test_estimate_basic() {
        let estimate = group(vec![80.0, 120.0], None)
            .estimate()
            .expect("finite estimate")
            .expect("usable observations");

        let expected_shape = 0.2_f64.powf(-1.086);
        assert!((estimate.shape - expected_shape).abs() < 1e-12);
        assert!((estimate.mt_hours - 100.0).abs() < 1e-12);
        assert!(estimate.reliability > 0.0 && estimate.reliability < 1.0);
        assert_eq!(estimate.risk.severity, 3);
    }

    #[test]
    fn test_estimate_single_observation_fallback() {
        let estimate = group(vec![100.0], None)
            .estimate()
            .expect("finite estimate")
            .expect("usable observations");

        assert_eq!(estimate.shape, 1.0);
        assert_eq!(estimate.scale, 100.0);
        assert_eq!(estimate.mt_hours, 100.0);
        let expected_r = (-0.01_f64).exp();
        assert!((estimate.reliability - expected_r).abs() < 1e-15);
    }

    #[test]
    fn test_estimate_filters_non_positive() {
        // Zeros and negatives are dropped, not errors.
        let with_noise = group(vec![0.0, -10.0, 80.0, 120.0], None)
            .estimate()
            .expect("finite estimate")
            .expect("two usable observations remain");
        let clean = group(vec![80.0, 120.0], None)
            .estimate()
            .expect("finite estimate")
            .expect("usable observations");

        assert!((with_noise.shape - clean.shape).abs() < 1e-15);
        assert!((with_noise.scale - clean.scale).abs() < 1e-15);
    }

    #[test]
    fn test_estimate_excludes_empty_group() {
        assert!(group(vec![], None).estimate().expect("no error").is_none());
        assert!(group(vec![0.0, -5.0], None)
            .estimate()
            .expect("exclusion is not an error")
            .is_none());
    }

    #[test]
    fn test_manual_override_supersedes() {
        // Recorded hours would give a moment-matched fit; the single
        // manual value forces the exponential fallback instead.
        let estimate = group(vec![80.0, 120.0, 95.0], Some(vec![500.0]))
            .estimate()
            .expect("finite estimate")
            .expect("usable observations");

        assert_eq!(estimate.shape, 1.0);
        assert_eq!(estimate.scale, 500.0);
        assert_eq!(estimate.mt_hours, 500.0);
    }

    #[test]
    fn test_empty_manual_override_ignored() {
        let with_empty = group(vec![80.0, 120.0], Some(vec![]))
            .estimate()
            .expect("finite estimate")
            .expect("recorded hours used");
        let without = group(vec![80.0, 120.0], None)
            .estimate()
            .expect("finite estimate")
            .expect("usable observations");
        assert!((with_empty.shape - without.shape).abs() < 1e-15);
    }

    #[test]
    fn test_manual_override_all_unusable_excludes() {
        // A present override supersedes entirely; if nothing in it is
        // usable the group is excluded, not silently re-fit from records.
        assert!(group(vec![80.0, 120.0], Some(vec![-1.0]))
            .estimate()
            .expect("no error")
            .is_none());
    }

    #[test]
    fn test_estimate_deterministic() {
        let g = group(vec![31.79, 67.43, 250.0], None);
        let a = g.estimate().expect("finite").expect("usable");
        let b = g.estimate().expect("finite").expect("usable");
        assert_eq!(a.shape, b.shape);
        assert_eq!(a.scale, b.scale);
        assert_eq!(a.reliability, b.reliability);
        assert_eq!(a.risk, b.risk);
    }

    #[test]
    fn test_risk_level_reachable_set() {
        // At the fixed severity only Low/Medium/High are reachable.
        let low = group(vec![5000.0, 5000.0], None)
            .estimate()
            .expect("finite")
            .expect("usable");
        assert!(matches!(
            low.risk.level,
            RiskLevel::Low | RiskLevel::Medium | RiskLevel::High
        ));

        let high = group(vec![2.0, 3.0], None)
            .estimate()
            .expect("finite")
            .expect("usable");
        assert_ne!(high.risk.level, RiskLevel::VeryHigh);
    }

    #[test]
    fn test_reliability_curve_matches_estimate() {
        let g = group(vec![80.0, 120.0], None);
        let estimate = g.estimate().expect("finite").expect("usable");
        let points: Vec<_> = g
            .reliability_curve()
            .expect("finite")
            .expect("usable")
            .collect();

        assert_eq!(points.len(), 101);
        let last = points.last().expect("101 points");
        assert!((last.time - 2.5 * estimate.scale).abs() < 1e-9);
    }

    #[test]
    fn test_reliability_curve_excluded_group() {
        assert!(group(vec![], None)
            .reliability_curve()
            .expect("no error")
            .is_none());
    }

    #[test]
    fn test_group_deserializes_without_manual_hours() {
        let json = r#"{
            "component_name": "press-1",
            "sub_component": "hydraulic pump",
            "failure_mode": "seal leak",
            "failure_hours": [80.0, 120.0]
        }"#;
        let g: FailureGroup = serde_json::from_str(json).expect("valid payload");
        assert!(g.manual_hours.is_none());
        assert!(g.estimate().expect("finite").is_some());
    }

    #[test]
    fn test_estimate_serializes() {
        let estimate = group(vec![80.0, 120.0], None)
            .estimate()
            .expect("finite")
            .expect("usable");
        let json = serde_json::to_string(&estimate).expect("serializable");
        assert!(json.contains("\"mt_hours\":100.0"));
        assert!(json.contains("\"risk\""));
    }
}
