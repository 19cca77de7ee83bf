//! Newton-Raphson, Halley, and Danby-Burkardt loops.
//!
//! All four methods are the same convergence loop wrapped around a
//! different correction kernel from [`crate::itercore`]; only the kernel
//! order (and so the per-step cost and convergence rate) differs.

use log::trace;

use crate::equation::eval_elliptic;
use crate::itercore::{refine_order2, refine_order3, refine_order4, refine_order5};
use crate::params::IterationParameters;
use crate::solver::residual_scale;

/// Order-2 kernel: classic Newton-Raphson.
pub(crate) fn newton_raphson(
    ecc: f64,
    ma: f64,
    starter: f64,
    params: &mut IterationParameters,
) -> usize {
    trace!("newton_raphson: e = {ecc}, M = {ma}, x0 = {starter}");
    kernel_loop(refine_order2, ecc, ma, starter, params)
}

/// Order-3 kernel: Halley's method.
pub(crate) fn halley(
    ecc: f64,
    ma: f64,
    starter: f64,
    params: &mut IterationParameters,
) -> usize {
    trace!("halley: e = {ecc}, M = {ma}, x0 = {starter}");
    kernel_loop(refine_order3, ecc, ma, starter, params)
}

/// Order-4 kernel: Danby-Burkardt quartic refinement.
pub(crate) fn danby4(
    ecc: f64,
    ma: f64,
    starter: f64,
    params: &mut IterationParameters,
) -> usize {
    trace!("danby4: e = {ecc}, M = {ma}, x0 = {starter}");
    kernel_loop(refine_order4, ecc, ma, starter, params)
}

/// Order-5 kernel: Danby-Burkardt quintic refinement.
pub(crate) fn danby5(
    ecc: f64,
    ma: f64,
    starter: f64,
    params: &mut IterationParameters,
) -> usize {
    trace!("danby5: e = {ecc}, M = {ma}, x0 = {starter}");
    kernel_loop(refine_order5, ecc, ma, starter, params)
}

/// Shared convergence loop: apply `kernel` once per step, then evaluate the
/// residual at the refined point for the termination test.
fn kernel_loop(
    kernel: fn(f64, f64, f64) -> f64,
    ecc: f64,
    ma: f64,
    starter: f64,
    params: &mut IterationParameters,
) -> usize {
    let corr = residual_scale(ecc);
    let mut count = 0;

    let mut xnew = starter;
    let mut deltax;
    let mut deltaf;

    loop {
        let xold = xnew;

        xnew = kernel(ecc, ma, xold);
        params.sin_evals += 1;
        params.cos_evals += 1;
        params.fn_evals += 1;

        let fx = eval_elliptic(ecc, ma, xnew);
        params.sin_evals += 1;
        params.fn_evals += 1;

        count += 1;

        deltax = (xnew - xold).abs();
        deltaf = fx.abs() * corr;

        if deltax <= params.tol_x() || deltaf <= params.tol_f() || count >= params.max_iter() {
            break;
        }
    }

    params.result = xnew;
    params.residual_error = deltaf;
    params.step_error = deltax;

    count
}
