//! Reliability curve sampling for charting.
//!
//! Produces a finite, evenly spaced walk along `R(t) = exp(-(t/eta)^beta)`
//! so the presentation layer can plot the curve without knowing the
//! Weibull math.

use serde::Serialize;

/// Number of steps along the curve; the sampler yields `CURVE_STEPS + 1`
/// points (both endpoints inclusive).
pub const CURVE_STEPS: usize = 100;

/// The sampled time span, as a multiple of the scale parameter.
///
/// 2.5 eta covers the knee of the curve for every shape the estimator
/// produces; R(2.5 eta) is below 8.3% for shape >= 1.
pub const CURVE_SPAN_SCALE_MULTIPLE: f64 = 2.5;

/// One sampled point on the reliability curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CurvePoint {
    /// Time, in the same unit as the scale parameter (hours).
    pub time: f64,
    /// Reliability R(time), in [0, 1].
    pub reliability: f64,
}

/// Lazy sampler over the reliability curve of a fitted Weibull model.
///
/// Yields exactly [`CURVE_STEPS`]` + 1` points with `time` spanning
/// `[0, CURVE_SPAN_SCALE_MULTIPLE * scale]`. Cloning the sampler (or
/// asking the model for a new one) restarts the walk; nothing is
/// precomputed or retained.
///
/// # Examples
///
/// ```
/// use failure_analytics::weibull::{ReliabilityModel, CURVE_STEPS};
///
/// let model = ReliabilityModel::new(1.5, 100.0).unwrap();
/// let sampler = model.curve();
/// assert_eq!(sampler.len(), CURVE_STEPS + 1);
///
/// let points: Vec<_> = sampler.collect();
/// assert!((points[0].time - 0.0).abs() < 1e-12);
/// assert!((points[100].time - 250.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone)]
pub struct CurveSampler {
    shape: f64,
    scale: f64,
    /// Next step index in 0..=CURVE_STEPS.
    index: usize,
}

impl CurveSampler {
    /// Creates a sampler for the given Weibull parameters.
    ///
    /// Parameters are assumed already validated (see
    /// [`ReliabilityModel`](super::ReliabilityModel), the intended
    /// entry point).
    pub(crate) fn new(shape: f64, scale: f64) -> Self {
        Self {
            shape,
            scale,
            index: 0,
        }
    }

    fn point_at(&self, index: usize) -> CurvePoint {
        // Fraction-based so the last point hits the span end exactly.
        let fraction = index as f64 / CURVE_STEPS as f64;
        let time = CURVE_SPAN_SCALE_MULTIPLE * self.scale * fraction;
        let reliability = if time <= 0.0 {
            1.0
        } else {
            (-(time / self.scale).powf(self.shape)).exp()
        };
        CurvePoint { time, reliability }
    }
}

impl Iterator for CurveSampler {
    type Item = CurvePoint;

    fn next(&mut self) -> Option<CurvePoint> {
        if self.index > CURVE_STEPS {
            return None;
        }
        let point = self.point_at(self.index);
        self.index += 1;
        Some(point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = CURVE_STEPS + 1 - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for CurveSampler {}
