//! Kepler's Equation solver library.
//!
//! Solves the elliptic Kepler Equation `M = E - e*sin(E)` for the
//! eccentric anomaly `E`, given a mean anomaly `M` (radians) and an
//! eccentricity `e`. Twelve root-finding methods and fifteen starting-value
//! estimators are available; the top-level entry point is
//! [`solve_kepler_equation`].
//!
//! ```
//! use kestrel::{
//!     solve_kepler_equation, ErrorCode, IterationParameters, SolverMethod,
//!     StarterMethod,
//! };
//!
//! let mut params = IterationParameters::new();
//! let (ea, status) = solve_kepler_equation(
//!     0.567,
//!     1.234,
//!     StarterMethod::S1,
//!     SolverMethod::NewtonRaphson,
//!     &mut params,
//! );
//!
//! assert_eq!(status, ErrorCode::None);
//! assert!((ea - 0.567 * ea.sin() - 1.234).abs() < 1e-12);
//! ```

// core components
pub mod domain;
pub mod equation;
pub mod errors;
pub mod itercore;
pub mod params;
pub mod starter;
pub mod trig;

// solver bank and dispatch
pub mod solver;

mod dispatch;

pub use dispatch::solve_kepler_equation;
pub use domain::{classify, EccentricityDomain, ECC_EPSILON};
pub use equation::true_anomaly;
pub use errors::{describe_error, ErrorCode};
pub use params::{IterationParameters, DEFAULT_MAX_ITER, MIN_TOLERANCE};
pub use solver::SolverMethod;
pub use starter::StarterMethod;
