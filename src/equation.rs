//! Kepler Equation residuals for the three eccentricity regimes, plus the
//! true-anomaly transform.
//!
//! These are pure formula evaluations with no error returns; callers are
//! expected to pre-validate their inputs (see [`crate::domain`]).

/// Residual of the elliptic Kepler Equation: `x - ecc*sin(x) - ma`.
///
/// `x` is the elliptic eccentric anomaly in radians; the residual is zero
/// when `x` solves the equation for mean anomaly `ma`.
#[inline]
#[must_use]
pub fn eval_elliptic(ecc: f64, ma: f64, x: f64) -> f64 {
    x - ecc * x.sin() - ma
}

/// Residual of the hyperbolic Kepler Equation: `ecc*sinh(x) - x - ma`.
#[inline]
#[must_use]
pub fn eval_hyperbolic(ecc: f64, ma: f64, x: f64) -> f64 {
    ecc * x.sinh() - x - ma
}

/// Residual of the parabolic Kepler Equation (Barker's Equation):
/// `s + s^3/3 - ma` with `s = tan(x/2)`.
///
/// Here `x` is the *true* anomaly; the eccentricity is fixed at 1 and does
/// not appear.
#[inline]
#[must_use]
pub fn eval_parabolic(ma: f64, x: f64) -> f64 {
    let s = (0.5 * x).tan();

    s + s * s * s / 3.0 - ma
}

/// True anomaly from the eccentric anomaly `x`, elliptic or hyperbolic case.
///
/// Elliptic   (`ecc < 1`): `2*atan( sqrt((1+e)/(1-e)) * tan(x/2) )`,
/// Stumpff (1958) eq. (II; 14).
/// Hyperbolic (`ecc >= 1`): `2*atan( sqrt((e+1)/(e-1)) * tanh(x/2) )`,
/// Stumpff (1958) eq. (III; 50).
#[inline]
#[must_use]
pub fn true_anomaly(ecc: f64, x: f64) -> f64 {
    if ecc < 1.0 {
        2.0 * (((1.0 + ecc) / (1.0 - ecc)).sqrt() * (0.5 * x).tan()).atan()
    } else {
        2.0 * (((ecc + 1.0) / (ecc - 1.0)).sqrt() * (0.5 * x).tanh()).atan()
    }
}
