//! Special mathematical functions.
//!
//! Currently only the gamma function, needed by the moment-matching
//! Weibull estimator for the scale relation `eta = mean / Gamma(1 + 1/beta)`.
//!
//! # Reference
//!
//! Lanczos, C. (1964). "A Precision Approximation of the Gamma Function",
//! *SIAM Journal on Numerical Analysis* 1(1), pp. 86-96.

use std::f64::consts::PI;

/// Lanczos parameter g = 7 with the matching 9-term coefficient series.
///
/// This pairing gives ~15 significant digits over the positive reals,
/// far beyond what the CV-shape approximation feeding it warrants.
const LANCZOS_G: f64 = 7.0;

const LANCZOS_COEFFICIENTS: [f64; 9] = [
    0.999_999_999_999_809_93,
    676.520_368_121_885_1,
    -1_259.139_216_722_402_8,
    771.323_428_777_653_13,
    -176.615_029_162_140_6,
    12.507_343_278_686_905,
    -0.138_571_095_265_720_12,
    9.984_369_578_019_572e-6,
    1.505_632_735_149_311_6e-7,
];

/// Gamma function via the Lanczos approximation.
///
/// For `z < 0.5` the reflection formula is applied first:
///
/// ```text
/// Gamma(z) = pi / (sin(pi * z) * Gamma(1 - z))
/// ```
///
/// Accurate over the positive reals; integer-pole behavior (z = 0, -1, ...)
/// follows from the reflection formula (sin term vanishes, result is
/// non-finite) and is not a supported input.
///
/// # Examples
///
/// ```
/// use failure_analytics::special::gamma;
///
/// // Gamma(n) = (n - 1)! for positive integers
/// assert!((gamma(5.0) - 24.0).abs() < 1e-9);
///
/// // Gamma(0.5) = sqrt(pi)
/// assert!((gamma(0.5) - std::f64::consts::PI.sqrt()).abs() < 1e-10);
/// ```
pub fn gamma(z: f64) -> f64 {
    if z < 0.5 {
        return PI / ((PI * z).sin() * gamma(1.0 - z));
    }

    let z = z - 1.0;
    let mut series = LANCZOS_COEFFICIENTS[0];
    for (i, &c) in LANCZOS_COEFFICIENTS.iter().enumerate().skip(1) {
        series += c / (z + i as f64);
    }

    let t = z + LANCZOS_G + 0.5;
    (2.0 * PI).sqrt() * t.powf(z + 0.5) * (-t).exp() * series
}
