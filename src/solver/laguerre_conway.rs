//! Laguerre-Conway iteration (Conway (1986), Celest. Mech. 39, p.199-211).

use log::trace;

use crate::params::IterationParameters;
use crate::solver::residual_scale;
use crate::trig::scaled_sincos;

/// Laguerre's method specialized to a polynomial degree of 5.
///
/// The absolute value under the square root makes the step well defined
/// even when the Laguerre discriminant goes negative, which is what gives
/// the method its global convergence in practice.
pub(crate) fn solve(
    ecc: f64,
    ma: f64,
    starter: f64,
    params: &mut IterationParameters,
) -> usize {
    let corr = residual_scale(ecc);
    let mut count = 0;

    trace!("laguerre_conway: e = {ecc}, M = {ma}, x0 = {starter}");

    let mut x = starter;
    let mut deltax;
    let mut deltaf;

    loop {
        let (esin, ecos) = scaled_sincos(x, ecc);

        let f0 = x - esin - ma;
        let f1 = 1.0 - ecos;
        params.sin_evals += 1;
        params.cos_evals += 1;
        params.fn_evals += 1;

        let dx = 5.0 * f0 / (f1 + (16.0 * f1 * f1 - 20.0 * f0 * esin).abs().sqrt());

        x -= dx;

        count += 1;

        deltax = dx.abs();
        deltaf = f0.abs() * corr;

        if deltax <= params.tol_x() || deltaf <= params.tol_f() || count >= params.max_iter() {
            break;
        }
    }

    params.result = x;
    params.residual_error = deltaf;
    params.step_error = deltax;

    count
}
