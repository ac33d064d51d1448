//! Reliability evaluation from fitted Weibull parameters.

use super::curve::CurveSampler;
use super::moments::WeibullMomentsResult;

/// A fitted Weibull reliability model.
///
/// Holds validated shape (beta) and scale (eta) parameters and evaluates
/// the survival function:
///
/// ```text
/// R(t) = exp(-(t/eta)^beta)
/// ```
///
/// # Examples
///
/// ```
/// use failure_analytics::weibull::ReliabilityModel;
///
/// let model = ReliabilityModel::new(2.0, 100.0).unwrap();
/// assert!((model.reliability(0.0) - 1.0).abs() < 1e-12);
/// assert!(model.unit_reliability() > 0.99);
/// ```
///
/// # Reference
/// Weibull (1951), *Journal of Applied Mechanics* 18(3), pp. 293-297.
#[derive(Debug, Clone)]
pub struct ReliabilityModel {
    /// Shape parameter (beta).
    shape: f64,
    /// Scale parameter (eta).
    scale: f64,
}

impl ReliabilityModel {
    /// Creates a reliability model from Weibull parameters.
    ///
    /// Returns `None` if either parameter is non-positive or non-finite.
    ///
    /// # Examples
    ///
    /// ```
    /// use failure_analytics::weibull::ReliabilityModel;
    ///
    /// assert!(ReliabilityModel::new(2.0, 100.0).is_some());
    /// assert!(ReliabilityModel::new(-1.0, 100.0).is_none());
    /// assert!(ReliabilityModel::new(2.0, 0.0).is_none());
    /// ```
    pub fn new(shape: f64, scale: f64) -> Option<Self> {
        if !shape.is_finite() || !scale.is_finite() || shape <= 0.0 || scale <= 0.0 {
            return None;
        }
        Some(Self { shape, scale })
    }

    /// Creates a reliability model from a moment-matching fit.
    ///
    /// Moment fits always carry valid parameters, so this cannot fail.
    pub fn from_moments(fit: &WeibullMomentsResult) -> Self {
        Self {
            shape: fit.shape,
            scale: fit.scale,
        }
    }

    /// Returns the shape parameter (beta).
    pub fn shape(&self) -> f64 {
        self.shape
    }

    /// Returns the scale parameter (eta).
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Reliability (survival) function at time t.
    ///
    /// For t <= 0, returns 1.0 (no failure before time zero).
    pub fn reliability(&self, t: f64) -> f64 {
        if t <= 0.0 {
            return 1.0;
        }
        let z = t / self.scale;
        (-z.powf(self.shape)).exp()
    }

    /// Reliability at unit time, R(1).
    ///
    /// The point estimate the maintenance dashboard reports per failure
    /// mode and feeds into risk scoring.
    pub fn unit_reliability(&self) -> f64 {
        self.reliability(1.0)
    }

    /// Samples the reliability curve for charting.
    ///
    /// Returns a lazy iterator over 101 evenly spaced `(time, reliability)`
    /// points covering `[0, 2.5 * scale]`. Each call starts a fresh pass
    /// over the curve.
    ///
    /// # Examples
    ///
    /// ```
    /// use failure_analytics::weibull::ReliabilityModel;
    ///
    /// let model = ReliabilityModel::new(1.5, 100.0).unwrap();
    /// let points: Vec<_> = model.curve().collect();
    /// assert_eq!(points.len(), 101);
    /// assert!((points[0].reliability - 1.0).abs() < 1e-12);
    /// ```
    pub fn curve(&self) -> CurveSampler {
        CurveSampler::new(self.shape, self.scale)
    }
}
