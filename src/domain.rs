//! Eccentricity-domain classification and scalar input validation.

use crate::errors::ErrorCode;

/// Threshold band for discriminating eccentricity domains around 0 and 1.
pub const ECC_EPSILON: f64 = 1e-10;

/// Orbit regime derived from an eccentricity value.
///
/// Derived, never stored: exactly one variant holds for any `f64` at the
/// time of classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EccentricityDomain {
    /// `e < 0`, or non-finite input.
    Invalid,
    /// `0 <= e <= ECC_EPSILON`.
    Circular,
    /// `ECC_EPSILON < e < 1 - ECC_EPSILON`.
    Elliptic,
    /// `1 - ECC_EPSILON <= e <= 1 + ECC_EPSILON`.
    Parabolic,
    /// `e > 1 + ECC_EPSILON`.
    Hyperbolic,
}

impl EccentricityDomain {
    pub const fn name(self) -> &'static str {
        match self {
            EccentricityDomain::Invalid    => "invalid",
            EccentricityDomain::Circular   => "circular",
            EccentricityDomain::Elliptic   => "elliptic",
            EccentricityDomain::Parabolic  => "parabolic",
            EccentricityDomain::Hyperbolic => "hyperbolic",
        }
    }
}

impl std::fmt::Display for EccentricityDomain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Checks a scalar to be a valid finite number (not NaN, not ±inf).
#[inline]
pub fn check_value(x: f64) -> Result<(), ErrorCode> {
    if x.is_finite() {
        Ok(())
    } else {
        Err(ErrorCode::BadValue)
    }
}

/// Classifies an eccentricity value into its orbit regime.
///
/// Total over all `f64` inputs. The elliptic band is tested before the
/// parabolic band, so the parabolic case is everything left between
/// `1 - ECC_EPSILON` and `1 + ECC_EPSILON`. `-0.0` counts as non-negative
/// and classifies as circular.
#[must_use]
pub fn classify(ecc: f64) -> EccentricityDomain {
    if check_value(ecc).is_err() {
        return EccentricityDomain::Invalid;
    }

    if ecc > ECC_EPSILON {
        if ecc < 1.0 - ECC_EPSILON {
            EccentricityDomain::Elliptic
        } else if ecc > 1.0 + ECC_EPSILON {
            EccentricityDomain::Hyperbolic
        } else {
            EccentricityDomain::Parabolic
        }
    } else if ecc < 0.0 {
        EccentricityDomain::Invalid
    } else {
        EccentricityDomain::Circular
    }
}
