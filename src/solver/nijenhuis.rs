//! Nijenhuis' two-region method (Nijenhuis (1991), Celest. Mech. Dyn.
//! Astron. 51, p.319-330).

use std::f64::consts::{FRAC_PI_2, PI};

use log::trace;

use crate::equation::eval_elliptic;
use crate::params::IterationParameters;
use crate::solver::residual_scale;
use crate::trig::scaled_sincos;

/// Depth of the continued-fraction correction in the final step.
const MAX_STAGE: usize = 3;

/// Low-order minimax approximation of `sin(x)` on `[0, pi]`, used only to
/// refine the rough starter.
fn snx(x: f64) -> f64 {
    // Taylor-like coefficients, O(x^3) and O(x^5)
    const A: f64 = -0.16605;
    const B: f64 = 0.00761;

    if x > FRAC_PI_2 {
        snx(PI - x)
    } else {
        let x2 = x * x;
        x * (1.0 + x2 * (A + B * x2))
    }
}

/// Derivative of [`snx`], approximating `cos(x)` on `[0, pi]`.
fn snxd(x: f64) -> f64 {
    const A: f64 = -0.49815;
    const B: f64 = 0.03805;

    if x > FRAC_PI_2 {
        -snxd(PI - x)
    } else {
        let x2 = x * x;
        1.0 + x2 * (A + B * x2)
    }
}

/// Nijenhuis' composite solve: region-dependent rough starter, one cheap
/// refinement using approximate trig, then a single high-order correction
/// built from a continued-fraction recurrence with exact trig. Always
/// reports a count of 1.
///
/// In region D (`M < 0.4` and `e > 0.6`, ad hoc boundaries) the starter
/// comes from Mikkola's cubic; everywhere else the dispatched starter is
/// expected to be the composite bound S7 and is refined with one Halley
/// step on the modified equation.
pub(crate) fn solve(
    ecc: f64,
    ma: f64,
    starter: f64,
    params: &mut IterationParameters,
) -> usize {
    let e1 = 1.0 - ecc;
    let corr = residual_scale(ecc);

    trace!("nijenhuis: e = {ecc}, M = {ma}, x0 = {starter}");

    let mut f = [0.0_f64; MAX_STAGE + 1];
    let mut h = [0.0_f64; MAX_STAGE + 1];

    let mut x;
    if ma < 0.4 && ecc > 0.6 {
        // region D: cubic starter s^3 + 3*p*s - 2*q = 0
        let frac = 1.0 / (0.5 + 4.0 * ecc);
        let p = e1 * frac;
        let q = 0.5 * ma * frac;
        let mut z = ((p * p * p + q * q).sqrt() + q).cbrt();
        z *= z;

        let mut s = if z > 0.0 {
            2.0 * q / (z + p + p * p / z)
        } else {
            0.0
        };

        // one Newton step on g(s) = (3/40)s^5 + ((4e+1/2)/3)s^3 + (1-e)s - M/3
        let mut s2 = s * s;
        if s > 0.0 {
            s -= 0.075 * s * s2 * s2 / (e1 + s2 * (1.0 / frac + 0.375 * s2));
        }
        s2 = s * s;

        x = ma + ecc * s * (3.0 - 4.0 * s2);
    } else {
        // regions A, B, C: refine the dispatched starter (expected S7)
        // with one Halley step on the modified equation using cheap trig
        x = starter;

        f[2] = ecc * snx(x);
        f[0] = x - f[2] - ma;
        f[1] = 1.0 - ecc * snxd(x);

        x -= f[0] / (f[1] - 0.5 * f[0] * f[2] / f[1]);
    }

    params.starter = x;

    // final correction: continued-fraction recurrence on the exact equation
    let (esin, ecos) = scaled_sincos(x, ecc);
    params.sin_evals += 1;
    params.cos_evals += 1;

    f[0] = ma - x + esin;
    f[1] = 1.0 - ecos;
    f[2] = 0.5 * esin;
    f[3] = ecos / 6.0;

    for i in 1..=MAX_STAGE {
        let mut d = f[i];
        for j in 1..i {
            d = d * h[j] + f[i - j];
        }
        h[i] = f[0] / d;
    }

    if x > 0.0 {
        x += h[MAX_STAGE];
    }

    let deltax = (x - params.starter).abs();
    let deltaf = eval_elliptic(ecc, ma, x).abs() * corr;
    params.sin_evals += 1;
    params.fn_evals += 1;

    params.result = x;
    params.residual_error = deltaf;
    params.step_error = deltax;

    1
}
