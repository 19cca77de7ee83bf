//! Iteration parameters: caller-owned tolerances and the per-call outputs.
//!
//! [`IterationParameters`] is the single interface between a caller and the
//! solver bank. The caller sets the convergence contract (`tol_f`, `tol_x`,
//! `max_iter`), the solve call writes every output field in place.
//!
//! # Construction
//! ┌ [`IterationParameters::new`]  : library defaults
//! ├ `with_*` builder setters      : raw overrides, clamped at solve time
//! └ `set_*` setters               : validated, reject out-of-range values
//!
//! # Output fields
//! ┌ `result`         : converged (or best-effort) eccentric anomaly
//! ├ `starter`        : initial guess actually used (solvers with an
//! │                    internal starter overwrite the dispatched one)
//! ├ `residual_error` : final `|f(x)| * e/(1-e)` at termination
//! ├ `step_error`     : final `|x(n+1) - x(n)|` at termination
//! ├ `iterations`     : refinement steps performed (closed-form two-phase
//! │                    methods report a fixed count of 1)
//! └ `sin/cos/fn` evaluation counters, diagnostic only

use crate::errors::ErrorCode;

/// Smallest accepted convergence tolerance, also the default for both
/// `tol_f` and `tol_x`.
pub const MIN_TOLERANCE: f64 = 1e-15;

/// Default iteration cap. Values up to `10 * DEFAULT_MAX_ITER` (exclusive)
/// are accepted by [`IterationParameters::set_max_iter`].
pub const DEFAULT_MAX_ITER: usize = 100;

/// Tolerances, iteration cap, and solve outputs for one call.
#[derive(Debug, Clone, Copy)]
pub struct IterationParameters {
    tol_f:    f64,
    tol_x:    f64,
    max_iter: usize,

    pub(crate) result:         f64,
    pub(crate) starter:        f64,
    pub(crate) residual_error: f64,
    pub(crate) step_error:     f64,
    pub(crate) iterations:     usize,

    pub(crate) sin_evals: usize,
    pub(crate) cos_evals: usize,
    pub(crate) fn_evals:  usize,
}

impl Default for IterationParameters {
    fn default() -> Self {
        Self {
            tol_f:    MIN_TOLERANCE,
            tol_x:    MIN_TOLERANCE,
            max_iter: DEFAULT_MAX_ITER,

            result:         0.0,
            starter:        0.0,
            residual_error: 0.0,
            step_error:     0.0,
            iterations:     0,

            sin_evals: 0,
            cos_evals: 0,
            fn_evals:  0,
        }
    }
}

impl IterationParameters {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw builder overrides. Not validated here: values below the library
    /// minimums are silently replaced by [`Self::sanitize`] when a solve
    /// call begins.
    #[must_use]
    pub fn with_tol_f(mut self, v: f64) -> Self { self.tol_f = v; self }
    #[must_use]
    pub fn with_tol_x(mut self, v: f64) -> Self { self.tol_x = v; self }
    #[must_use]
    pub fn with_max_iter(mut self, v: usize) -> Self { self.max_iter = v; self }

    /// Sets a new residual tolerance `tol_f`.
    ///
    /// # Errors
    /// [`ErrorCode::BadTolerance`] unless `v` is finite and inside
    /// `(MIN_TOLERANCE, 1.0)`; the stored value is left unchanged.
    pub fn set_tol_f(&mut self, v: f64) -> Result<(), ErrorCode> {
        if v.is_finite() && v > MIN_TOLERANCE && v < 1.0 {
            self.tol_f = v;
            Ok(())
        } else {
            Err(ErrorCode::BadTolerance)
        }
    }

    /// Sets a new step tolerance `tol_x`.
    ///
    /// # Errors
    /// [`ErrorCode::BadTolerance`] unless `v` is finite and inside
    /// `(MIN_TOLERANCE, 1.0)`; the stored value is left unchanged.
    pub fn set_tol_x(&mut self, v: f64) -> Result<(), ErrorCode> {
        if v.is_finite() && v > MIN_TOLERANCE && v < 1.0 {
            self.tol_x = v;
            Ok(())
        } else {
            Err(ErrorCode::BadTolerance)
        }
    }

    /// Sets a new iteration cap.
    ///
    /// # Errors
    /// [`ErrorCode::BadValue`] unless `0 < v < 10 * DEFAULT_MAX_ITER`; the
    /// stored value is left unchanged.
    pub fn set_max_iter(&mut self, v: usize) -> Result<(), ErrorCode> {
        if v > 0 && v < 10 * DEFAULT_MAX_ITER {
            self.max_iter = v;
            Ok(())
        } else {
            Err(ErrorCode::BadValue)
        }
    }

    #[inline] #[must_use] pub fn tol_f(&self) -> f64 { self.tol_f }
    #[inline] #[must_use] pub fn tol_x(&self) -> f64 { self.tol_x }
    #[inline] #[must_use] pub fn max_iter(&self) -> usize { self.max_iter }

    #[inline] #[must_use] pub fn result(&self) -> f64 { self.result }
    #[inline] #[must_use] pub fn starter(&self) -> f64 { self.starter }
    #[inline] #[must_use] pub fn residual_error(&self) -> f64 { self.residual_error }
    #[inline] #[must_use] pub fn step_error(&self) -> f64 { self.step_error }
    #[inline] #[must_use] pub fn iterations(&self) -> usize { self.iterations }

    #[inline] #[must_use] pub fn sin_evals(&self) -> usize { self.sin_evals }
    #[inline] #[must_use] pub fn cos_evals(&self) -> usize { self.cos_evals }
    #[inline] #[must_use] pub fn fn_evals(&self) -> usize { self.fn_evals }

    /// Replaces useless settings with library defaults, silently: both
    /// tolerances are raised to [`MIN_TOLERANCE`], a zero iteration cap
    /// becomes [`DEFAULT_MAX_ITER`]. Called once per solve.
    pub(crate) fn sanitize(&mut self) {
        if self.tol_f < MIN_TOLERANCE {
            self.tol_f = MIN_TOLERANCE;
        }
        if self.tol_x < MIN_TOLERANCE {
            self.tol_x = MIN_TOLERANCE;
        }
        if self.max_iter == 0 {
            self.max_iter = DEFAULT_MAX_ITER;
        }
    }

    /// Zeroes every output field and counter before a new solve.
    pub(crate) fn reset_outputs(&mut self) {
        self.result         = 0.0;
        self.starter        = 0.0;
        self.residual_error = 0.0;
        self.step_error     = 0.0;
        self.iterations     = 0;

        self.sin_evals = 0;
        self.cos_evals = 0;
        self.fn_evals  = 0;
    }
}
