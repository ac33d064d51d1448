//! Descriptive statistics for failure-hour observations.
//!
//! The moment-matching estimator needs the sample mean and the
//! **population** (not sample-corrected) standard deviation; both are
//! provided here over raw `&[f64]` slices.

/// Arithmetic mean.
///
/// Returns `None` for an empty slice or when any value is non-finite.
///
/// # Examples
///
/// ```
/// use failure_analytics::stats::mean;
///
/// assert_eq!(mean(&[80.0, 120.0]), Some(100.0));
/// assert!(mean(&[]).is_none());
/// assert!(mean(&[1.0, f64::NAN]).is_none());
/// ```
pub fn mean(data: &[f64]) -> Option<f64> {
    if data.is_empty() || !data.iter().all(|v| v.is_finite()) {
        return None;
    }
    Some(data.iter().sum::<f64>() / data.len() as f64)
}

/// Population standard deviation (divisor n, not n - 1).
///
/// Returns `None` for an empty slice or when any value is non-finite.
/// A single observation has zero variance by definition.
///
/// # Examples
///
/// ```
/// use failure_analytics::stats::std_dev_population;
///
/// // mean 100, squared deviations 400 each => sd = 20
/// assert_eq!(std_dev_population(&[80.0, 120.0]), Some(20.0));
/// assert_eq!(std_dev_population(&[42.0]), Some(0.0));
/// ```
pub fn std_dev_population(data: &[f64]) -> Option<f64> {
    let m = mean(data)?;
    let variance = data.iter().map(|v| (v - m) * (v - m)).sum::<f64>() / data.len() as f64;
    Some(variance.sqrt())
}

/// Coefficient of variation: population SD divided by mean.
///
/// Returns `None` for empty/non-finite input or when the mean is zero
/// (the ratio is undefined there, not infinite by policy).
pub fn coefficient_of_variation(data: &[f64]) -> Option<f64> {
    let m = mean(data)?;
    if m == 0.0 {
        return None;
    }
    let sd = std_dev_population(data)?;
    Some(sd / m)
}
