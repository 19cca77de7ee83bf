//! Error codes shared by every component of the solver.
//!
//! The taxonomy is flat and total: every call path produces exactly one
//! [`ErrorCode`], never a panic. A numeric result returned together with a
//! non-[`ErrorCode::None`] code is not meaningful on its own (fatal codes
//! come with a placeholder `0.0`), so callers must check the code first.
//!
//! One exception is [`ErrorCode::BadStarterMethod`]: the dispatch layer
//! recovers from a failed starter internally (fallback `|M| + e`) and still
//! solves, surfacing the code only for visibility. "Succeeded with a
//! degraded starter" is a valid terminal state.

use thiserror::Error;

/// Closed set of failure kinds for the whole library.
///
/// ┌ [`ErrorCode::None`]             : successful return
/// ├ [`ErrorCode::BadEccentricity`]  : negative, or outside the elliptic domain
/// ├ [`ErrorCode::BadValue`]         : non-finite scalar input (NaN or ±inf)
/// ├ [`ErrorCode::BadStarterMethod`] : void starter method (non-fatal, see module docs)
/// ├ [`ErrorCode::BadSolverMethod`]  : void solver method
/// └ [`ErrorCode::BadTolerance`]     : tolerance outside `(MIN_TOLERANCE, 1.0)`
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    #[error("no error occurred")]
    None,

    #[error("bad value for eccentricity")]
    BadEccentricity,

    #[error("bad value for parameter (inf or NaN)")]
    BadValue,

    #[error("bad starter method")]
    BadStarterMethod,

    #[error("bad solver method")]
    BadSolverMethod,

    #[error("bad value for error tolerance")]
    BadTolerance,
}

/// Human-readable message for an error code.
///
/// Single lookup point for the fixed message table; the messages are the
/// `Display` strings of [`ErrorCode`].
pub fn describe_error(code: ErrorCode) -> String {
    code.to_string()
}
