//! Moment-matching estimation of Weibull parameters.
//!
//! Matches the sample mean and standard deviation to the Weibull moment
//! relations via the empirical coefficient-of-variation approximation
//! `shape = cv^(-1.086)`, then derives the scale analytically from
//! `mean = scale * Gamma(1 + 1/shape)`.

use crate::special::gamma;
use crate::stats;

/// Result of a moment-matching Weibull fit.
#[derive(Debug, Clone, PartialEq)]
pub struct WeibullMomentsResult {
    /// Shape parameter (beta; alpha in some maintenance-system naming).
    pub shape: f64,
    /// Scale parameter (eta).
    pub scale: f64,
    /// Sample mean of the observations (MTBF, in hours).
    pub mean_hours: f64,
}

/// Exponent of the empirical CV-shape relation `shape = cv^(-1.086)`.
///
/// Reference: Justus et al. (1978), *Journal of Applied Meteorology* 17(3).
const CV_SHAPE_EXPONENT: f64 = -1.086;

/// Fit a Weibull distribution to failure-hour data by moment matching.
///
/// Given observations t_1, ..., t_n (all positive), computes the sample
/// mean and the population standard deviation, then:
///
/// ```text
/// cv    = sd / mean
/// shape = cv^(-1.086)
/// scale = mean / Gamma(1 + 1/shape)
/// ```
///
/// # Fallback
///
/// Zero-variance input (a single observation, identical values, or a
/// single manually entered override hour) cannot drive the CV relation.
/// Such input takes the exponential fallback uniformly:
///
/// ```text
/// shape = 1.0, scale = mean
/// ```
///
/// # Arguments
/// * `failure_hours` - Positive failure hours (at least 1 value)
///
/// # Returns
/// `None` if the slice is empty or any value is non-positive or
/// non-finite. Callers are expected to filter raw records first; see
/// [`crate::group`].
///
/// # Examples
///
/// ```
/// use failure_analytics::weibull::weibull_moments;
///
/// // Single observation: exponential fallback
/// let fit = weibull_moments(&[100.0]).unwrap();
/// assert_eq!(fit.shape, 1.0);
/// assert_eq!(fit.scale, 100.0);
///
/// // mean 100, population sd 20 => shape = 0.2^(-1.086)
/// let fit = weibull_moments(&[80.0, 120.0]).unwrap();
/// assert!((fit.shape - 0.2_f64.powf(-1.086)).abs() < 1e-12);
/// ```
///
/// # Reference
/// Johnson, Kotz & Balakrishnan (1994), *Continuous Univariate
/// Distributions*, Vol. 1, Chapter 21.
pub fn weibull_moments(failure_hours: &[f64]) -> Option<WeibullMomentsResult> {
    if failure_hours.is_empty() {
        return None;
    }
    if !failure_hours.iter().all(|&t| t.is_finite() && t > 0.0) {
        return None;
    }

    // Positive finite input guarantees both exist and mean > 0.
    let mean = stats::mean(failure_hours)?;
    let sd = stats::std_dev_population(failure_hours)?;

    if sd == 0.0 {
        return Some(WeibullMomentsResult {
            shape: 1.0,
            scale: mean,
            mean_hours: mean,
        });
    }

    let cv = sd / mean;
    let shape = cv.powf(CV_SHAPE_EXPONENT);
    let scale = mean / gamma(1.0 + 1.0 / shape);

    if !shape.is_finite() || shape <= 0.0 || !scale.is_finite() || scale <= 0.0 {
        return None;
    }

    Some(WeibullMomentsResult {
        shape,
        scale,
        mean_hours: mean,
    })
}
