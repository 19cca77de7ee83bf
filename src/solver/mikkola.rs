//! Mikkola's cubic-approximation method (Mikkola (1987), Celest. Mech.
//! 40, p.329-334).

use log::trace;

use crate::equation::eval_elliptic;
use crate::itercore::refine_order5;
use crate::params::IterationParameters;
use crate::solver::residual_scale;

/// Two-phase closed-form solve: the auxiliary cubic
/// `s^3 + 3*a*s - 2*b = 0` with a quintic correction term, then a single
/// order-5 refinement. Always reports a count of 1 and ignores the
/// dispatched starter.
pub(crate) fn solve(
    ecc: f64,
    ma: f64,
    starter: f64,
    params: &mut IterationParameters,
) -> usize {
    let corr = residual_scale(ecc);

    trace!("mikkola: e = {ecc}, M = {ma}, x0 = {starter} (ignored)");

    // solve the cubic s^3 + 3*a*s - 2*b = 0
    let mut a = 1.0 / (0.5 + 4.0 * ecc);
    let b = 0.5 * ma * a;
    a *= 1.0 - ecc;
    let c = ((a * a * a + b * b).sqrt() + b).cbrt();

    let mut s = if c > 0.0 { c - a / c } else { 0.0 };
    let mut s2 = s * s;

    // correction term O(s^5)
    s += -0.078 * s * s2 * s2 / (1.0 + ecc);
    s2 = s * s;

    let mut x = ma + ecc * s * (3.0 - 4.0 * s2);
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
