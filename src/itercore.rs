//! Polynomial correction kernels of order 2 through 5.
//!
//! All four kernels share the same nested Danby-Burkardt form (Danby &
//! Burkardt (1983), Celestial Mechanics 31, p.95-107): evaluate the
//! residual `f0` and the scaled Taylor derivatives `f1..f4`, then refine a
//! correction `dx` one order at a time, each order reusing the previous
//! `dx` in a continued-fraction-style denominator.
//!
//! These are single-step building blocks, not solvers: each returns one
//! refined value `x0 + dx`. The convergence loops live in
//! [`crate::solver`].

use crate::trig::scaled_sincos;

/// Tiny increment added to the first derivative; fixes the division by
/// zero from the vanishing derivative at `(x0, e) = (0, 1)`.
const ADD_ZERO: f64 = 1e-19;

/// Order-2 correction (Newton-Raphson step), quadratic convergence.
#[inline]
#[must_use]
pub fn refine_order2(ecc: f64, ma: f64, x0: f64) -> f64 {
    let (esin, ecos) = scaled_sincos(x0, ecc);

    let f0 = ma - x0 + esin;
    let f1 = 1.0 - ecos + ADD_ZERO;

    // delta1: eq. (16)
    let dx = f0 / f1;

    x0 + dx
}

/// Order-3 correction (Halley step), cubic convergence.
#[inline]
#[must_use]
pub fn refine_order3(ecc: f64, ma: f64, x0: f64) -> f64 {
    let (esin, ecos) = scaled_sincos(x0, ecc);

    let f0 = ma - x0 + esin;
    let f1 = 1.0 - ecos + ADD_ZERO;
    let f2 = esin / 2.0;

    // delta1: eq. (16)
    let mut dx = f0 / f1;

    // delta2: eq. (17)
    dx = f0 / (f1 + f2 * dx);

    x0 + dx
}

/// Order-4 correction (Danby-Burkardt), quartic convergence.
#[inline]
#[must_use]
pub fn refine_order4(ecc: f64, ma: f64, x0: f64) -> f64 {
    let (esin, ecos) = scaled_sincos(x0, ecc);

    let f0 = ma - x0 + esin;
    let f1 = 1.0 - ecos + ADD_ZERO;
    let f2 = esin / 2.0;
    let f3 = ecos / 6.0;

    // delta1: eq. (16)
    let mut dx = f0 / f1;

    // delta2: eq. (17)
    dx = f0 / (f1 + f2 * dx);

    // delta3: eq. (18)
    dx = f0 / (f1 + f2 * dx + f3 * dx * dx);

    x0 + dx
}

/// Order-5 correction (Danby-Burkardt), quintic convergence.
///
/// Uses fused multiply-add grouping for the nested denominators to reduce
/// rounding error; the lower orders keep the naive expansion.
#[inline]
#[must_use]
pub fn refine_order5(ecc: f64, ma: f64, x0: f64) -> f64 {
    let (esin, ecos) = scaled_sincos(x0, ecc);

    let f0 = ma - x0 + esin;
    let f1 = 1.0 - ecos + ADD_ZERO;
    let f2 = esin / 2.0;
    let f3 = ecos / 6.0;
    let f4 = -esin / 24.0;

    // delta1: eq. (16)
    let mut dx = f0 / f1;

    // delta2: eq. (17)
    dx = f0 / dx.mul_add(f2, f1);

    // delta3: eq. (18)
    dx = f0 / dx.mul_add(dx.mul_add(f3, f2), f1);

    // delta4: eq. (19)
    dx = f0 / dx.mul_add(dx.mul_add(dx.mul_add(f4, f3), f2), f1);

    x0 + dx
}
