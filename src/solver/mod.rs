//! Solver bank: twelve independent root-finding schemes for the elliptic
//! Kepler Equation.
//!
//! Every algorithm shares one contract: consume `(ecc, ma, starter)`,
//! iterate on the caller's [`IterationParameters`], and return the number
//! of refinement steps performed. `result`, `residual_error`, and
//! `step_error` are written into the parameters; the residual error is the
//! raw `|f(x)|` scaled by `e/(1-e)`, translating function-value error into
//! an equivalent angular error (the slope of `f` is about `1-e` near
//! `x = 0`).
//!
//! Loops run until both `step_error <= tol_x` and `residual_error <= tol_f`
//! hold, or the iteration cap is reached; bisection and the classic secant
//! also short-circuit when a bracket endpoint is already a root. The
//! fixed-point loop checks `tol_f` only (its step error lags one iteration
//! behind by construction).

pub(crate) mod bisection;
pub(crate) mod fixed_point;
pub(crate) mod laguerre_conway;
pub(crate) mod markley;
pub(crate) mod mikkola;
pub(crate) mod newton_family;
pub(crate) mod nijenhuis;
pub(crate) mod secant;
pub(crate) mod wegstein;

use crate::errors::ErrorCode;
use crate::params::IterationParameters;

/// Solver-method selector.
///
/// The set is closed and known at compile time, so dispatch is a plain
/// `match` rather than a function-pointer table. [`SolverMethod::None`] is
/// the void method and always fails with [`ErrorCode::BadSolverMethod`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverMethod {
    None,
    Bisection,
    Danby4,
    Danby5,
    FixedPoint,
    Halley,
    LaguerreConway,
    Markley,
    Mikkola,
    NewtonRaphson,
    Nijenhuis,
    Secant,
    Wegstein,
}

impl SolverMethod {
    /// One-line description of the iteration scheme.
    pub const fn description(self) -> &'static str {
        match self {
            SolverMethod::None           => "invalid solver method",
            SolverMethod::Bisection      => "Bisection method (interval halving)",
            SolverMethod::Danby4         => "Danby-Burkardt method of order 4",
            SolverMethod::Danby5         => "Danby-Burkardt method of order 5",
            SolverMethod::FixedPoint     => "Fixed-point iteration",
            SolverMethod::Halley         => "Halley method",
            SolverMethod::LaguerreConway => "Laguerre-Conway method",
            SolverMethod::Markley        => "Markley method",
            SolverMethod::Mikkola        => "Mikkola method",
            SolverMethod::NewtonRaphson  => "Newton-Raphson method",
            SolverMethod::Nijenhuis      => "Nijenhuis method",
            SolverMethod::Secant         => "Secant method",
            SolverMethod::Wegstein       => "Wegstein's secant modification",
        }
    }

    /// Runs the selected algorithm on a reduced mean anomaly in `[0, pi]`.
    ///
    /// # Errors
    /// [`ErrorCode::BadSolverMethod`] for [`SolverMethod::None`]; no result
    /// is computed in that case.
    pub(crate) fn run(
        self,
        ecc: f64,
        ma: f64,
        starter: f64,
        params: &mut IterationParameters,
    ) -> Result<usize, ErrorCode> {
        let count = match self {
            SolverMethod::None           => return Err(ErrorCode::BadSolverMethod),
            SolverMethod::Bisection      => bisection::solve(ecc, ma, starter, params),
            SolverMethod::Danby4         => newton_family::danby4(ecc, ma, starter, params),
            SolverMethod::Danby5         => newton_family::danby5(ecc, ma, starter, params),
            SolverMethod::FixedPoint     => fixed_point::solve(ecc, ma, starter, params),
            SolverMethod::Halley         => newton_family::halley(ecc, ma, starter, params),
            SolverMethod::LaguerreConway => laguerre_conway::solve(ecc, ma, starter, params),
            SolverMethod::Markley        => markley::solve(ecc, ma, starter, params),
            SolverMethod::Mikkola        => mikkola::solve(ecc, ma, starter, params),
            SolverMethod::NewtonRaphson  => newton_family::newton_raphson(ecc, ma, starter, params),
            SolverMethod::Nijenhuis      => nijenhuis::solve(ecc, ma, starter, params),
            SolverMethod::Secant         => secant::solve(ecc, ma, starter, params),
            SolverMethod::Wegstein       => wegstein::solve(ecc, ma, starter, params),
        };

        Ok(count)
    }
}

impl std::fmt::Display for SolverMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// Correction factor translating `|f(x)|` into an equivalent angular
/// error; shared by every solver in the bank.
#[inline]
pub(crate) fn residual_scale(ecc: f64) -> f64 {
    ecc / (1.0 - ecc)
}
