//! Markley's non-iterative method (Markley (1995), Cel. Mech. Dyn.
//! Astron. 63, p.101-111).

use std::f64::consts::PI;

use log::trace;

use crate::equation::eval_elliptic;
use crate::itercore::refine_order5;
use crate::params::IterationParameters;
use crate::solver::residual_scale;

const PI_SQ: f64 = PI * PI;

/// Two-phase closed-form solve: a Pade-based cubic starter followed by a
/// single order-5 correction. Always reports a count of 1 and ignores the
/// dispatched starter.
///
/// Accurate to about 1e-12 over the whole elliptic domain except close to
/// the corner `(e, M) = (1, 0)`.
pub(crate) fn solve(
    ecc: f64,
    ma: f64,
    starter: f64,
    params: &mut IterationParameters,
) -> usize {
    let corr = residual_scale(ecc);

    trace!("markley: e = {ecc}, M = {ma}, x0 = {starter} (ignored)");

    let mut ad = 1.0 / (PI_SQ - 6.0);
    let ak = 1.6 * PI * ad;
    ad *= 3.0 * PI_SQ;

    // alpha(e,M): eq. (20)
    let a = ad + ak * (PI - ma) / (1.0 + ecc);

    // d: eq. (5)
    let d = 3.0 * (1.0 - ecc) + a * ecc;

    // q: eq. (9)
    let q = 2.0 * a * d * (1.0 - ecc) - ma * ma;

    // r: eq. (10)
    let r = 3.0 * a * d * (d - 1.0 + ecc) * ma + ma * ma * ma;

    // w^(2/3): eq. (14)
    let mut w = (r.abs() + (q * q * q + r * r).sqrt()).cbrt();
    w *= w;

    // cubic starter, eq. (15)
    let mut x = 0.0;
    if w > 0.0 {
        x = (2.0 * r * w / (w * w + q * w + q * q) + ma) / d;
    }
    params.starter = x;

    // single fifth-order correction
    x = refine_order5(ecc, ma, x);
    params.sin_evals += 1;
    params.cos_evals += 1;
    params.fn_evals += 1;

    let deltax = (x - params.starter).abs();
    let deltaf = eval_elliptic(ecc, ma, x).abs() * corr;
    params.sin_evals += 1;
    params.fn_evals += 1;

    params.result = x;
    params.residual_error = deltaf;
    params.step_error = deltax;

    1
}
