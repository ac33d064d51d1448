//! Weibull parameter estimation and reliability evaluation.
//!
//! Fits a two-parameter Weibull distribution to failure-hour data by
//! moment matching and evaluates the resulting reliability function.
//!
//! # Modules
//!
//! - [`weibull_moments`] — CV-based moment-matching fit with exponential fallback
//! - [`ReliabilityModel`] — R(t) and unit-time reliability from fitted parameters
//! - [`CurveSampler`] — lazy (time, reliability) samples for charting
//!
//! # References
//!
//! - Abernethy, R.B. (2006). *The New Weibull Handbook*, 5th ed.
//! - Justus et al. (1978). "Methods for Estimating Wind Speed Frequency
//!   Distributions", *Journal of Applied Meteorology* 17(3), pp. 350-353.

mod curve;
mod moments;
mod reliability;

pub use curve::{CurvePoint, CurveSampler, CURVE_SPAN_SCALE_MULTIPLE, CURVE_STEPS};
pub use moments::{weibull_moments, WeibullMomentsResult};
pub use reliability::ReliabilityModel;
