//! Standard-normal CDF approximation shared by the Z-score batteries.
//!
//! Percentiles published alongside the parametric norm tables were produced
//! with the Abramowitz & Stegun rational approximation of erf (formula
//! 7.1.26). The constants below must stay bit-for-bit identical to keep
//! percentile parity with those tables; swapping in another CDF would shift
//! rounded percentiles at the band edges.

/// Abramowitz & Stegun 7.1.26 coefficients.
const A1: f64 = 0.254829592;
const A2: f64 = -0.284496736;
const A3: f64 = 1.421413741;
const A4: f64 = -1.453152027;
const A5: f64 = 1.061405429;
const P: f64 = 0.3275911;

/// Z values beyond this magnitude are saturated before conversion.
const Z_CLAMP: f64 = 4.0;

/// Error function via the Abramowitz & Stegun rational approximation.
///
/// Maximum absolute error 1.5e-7, well below the half-percentile
/// resolution that matters for classification.
fn erf(x: f64) -> f64 {
    let sign = if x < 0.0 { -1.0 } else { 1.0 };
    let x = x.abs();

    let t = 1.0 / (1.0 + P * x);
    let poly = ((((A5 * t + A4) * t + A3) * t + A2) * t + A1) * t;
    let y = 1.0 - poly * (-x * x).exp();

    sign * y
}

/// Cumulative distribution function of the standard normal.
pub fn standard_normal_cdf(z: f64) -> f64 {
    0.5 * (1.0 + erf(z / std::f64::consts::SQRT_2))
}

/// Convert a Z score to an integer percentile in `[1, 99]`.
///
/// Z is clamped to ±4 before conversion; the rounded percentile is clamped
/// so that extreme scores saturate at 1 or 99, never 0 or 100.
pub fn z_to_percentile(z: f64) -> u8 {
    let z = z.clamp(-Z_CLAMP, Z_CLAMP);
    let percentile = (standard_normal_cdf(z) * 100.0).round();
    percentile.clamp(1.0, 99.0) as u8
}

/// Percentile conversion for measures where a lower raw score is better.
///
/// Response times and error counts sit below the normative mean when
/// performance is good; negating Z maps a below-mean raw value to a high
/// percentile.
pub fn z_to_percentile_inverted(z: f64) -> u8 {
    z_to_percentile(-z)
}
