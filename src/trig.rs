//! Trigonometric helpers shared by the starters, kernels, and solvers.
//!
//! - `sincos`        : `(sin x, cos x)` from a single `tan(x/2)` call
//! - `scaled_sincos` : `(e*sin x, e*cos x)`, same half-angle trick
//! - `reduce`        : mean anomaly reduction into `(-pi, pi]`

use std::f64::consts::{PI, TAU};

/// Computes `(sin x, cos x)` from one evaluation of `tan(x/2)`.
///
/// Uses the half-angle identities
/// `sin x = 2t / (1 + t^2)`, `cos x = (1 - t^2) / (1 + t^2)` with
/// `t = tan(x/2)`, saving one trigonometric call per solver iteration.
#[inline]
#[must_use]
pub fn sincos(x: f64) -> (f64, f64) {
    let t = (0.5 * x).tan();
    let d = 1.0 / (1.0 + t * t);

    (2.0 * t * d, (1.0 - t * t) * d)
}

/// Computes `(ecc*sin x, ecc*cos x)` from one evaluation of `tan(x/2)`.
///
/// Same as [`sincos`] with both values scaled by the eccentricity; this is
/// the form every iteration kernel consumes.
#[inline]
#[must_use]
pub fn scaled_sincos(x: f64, ecc: f64) -> (f64, f64) {
    let (sx, cx) = sincos(x);

    (ecc * sx, ecc * cx)
}

/// Reduces an angle to the interval `(-pi, pi]`.
///
/// `x mod 2*pi` via `x - floor(x / 2pi) * 2pi`, then one fold at each end.
/// Idempotent up to a final rounding of one ulp; non-finite input is
/// passed through unchanged (callers validate first).
#[inline]
#[must_use]
pub fn reduce(x: f64) -> f64 {
    if !x.is_finite() {
        return x;
    }

    let mut x = x - (x / TAU).floor() * TAU;
    if x > PI {
        x -= TAU;
    }
    if x < -PI {
        x += TAU;
    }

    x
}
