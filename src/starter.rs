//! Starting-value estimators for the iterative solvers.
//!
//! Fifteen closed-form approximations of the elliptic eccentric anomaly,
//! each with a known asymptotic error order in the eccentricity. S0-S12
//! follow Odell & Gooding (1986), Celestial Mechanics 38, p.307-334
//! ("OG86"); S13 is Encke (1850); S14 is Charles & Tatum (1998).
//!
//! All formulas assume a mean anomaly already reduced to `[0, pi]` by the
//! dispatch layer.

use std::f64::consts::PI;

use crate::errors::ErrorCode;
use crate::trig::{scaled_sincos, sincos};

const PI_SQ: f64 = PI * PI;

/// Starter-method selector.
///
/// [`StarterMethod::None`] is the void method: it always fails with
/// [`ErrorCode::BadStarterMethod`], and the dispatch layer substitutes the
/// safe fallback `M + e` instead of propagating a placeholder value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StarterMethod {
    None,
    S0,
    S1,
    S2,
    S3,
    S4,
    S5,
    S6,
    S7,
    S8,
    S9,
    S10,
    S11,
    S12,
    S13,
    S14,
}

impl StarterMethod {
    /// Evaluates the chosen starter formula.
    ///
    /// # Errors
    /// [`ErrorCode::BadStarterMethod`] for [`StarterMethod::None`].
    pub fn estimate(self, ecc: f64, ma: f64) -> Result<f64, ErrorCode> {
        let x0 = match self {
            StarterMethod::None => return Err(ErrorCode::BadStarterMethod),
            StarterMethod::S0   => s0(ecc, ma),
            StarterMethod::S1   => s1(ecc, ma),
            StarterMethod::S2   => s2(ecc, ma),
            StarterMethod::S3   => s3(ecc, ma),
            StarterMethod::S4   => s4(ecc, ma),
            StarterMethod::S5   => s5(ecc, ma),
            StarterMethod::S6   => s6(ecc, ma),
            StarterMethod::S7   => s7(ecc, ma),
            StarterMethod::S8   => s8(ecc, ma),
            StarterMethod::S9   => s9(ecc, ma),
            StarterMethod::S10  => s10(ecc, ma),
            StarterMethod::S11  => s11(ecc, ma),
            StarterMethod::S12  => s12(ecc, ma),
            StarterMethod::S13  => s13(ecc, ma),
            StarterMethod::S14  => s14(ecc, ma),
        };

        Ok(x0)
    }
}

/// S0, O(e^0): `E0 = pi`.
#[inline]
fn s0(_ecc: f64, _ma: f64) -> f64 {
    PI
}

/// S1, O(e^1): `E0 = M` (OG86).
#[inline]
fn s1(_ecc: f64, ma: f64) -> f64 {
    ma
}

/// S2, O(e^2): `E0 = M + e*sin(M)` (OG86).
#[inline]
fn s2(ecc: f64, ma: f64) -> f64 {
    ma + ecc * ma.sin()
}

/// S3, O(e^3): `E0 = M + e*sin(M) * (1 + e*cos(M))` (OG86).
#[inline]
fn s3(ecc: f64, ma: f64) -> f64 {
    let (esin, ecos) = scaled_sincos(ma, ecc);

    ma + esin * (1.0 + ecos)
}

/// S4, O(e^1): `E0 = M + e` (OG86).
#[inline]
fn s4(ecc: f64, ma: f64) -> f64 {
    ma + ecc
}

/// S5, O(e^3): `E0 = M + e*sin(M) / (1 - sin(M + e) + sin(M))`,
/// Smith (1979), Celestial Mechanics 19, p.163-166.
#[inline]
fn s5(ecc: f64, ma: f64) -> f64 {
    let sin_ma = ma.sin();

    ma + ecc * sin_ma / (1.0 - (ma + ecc).sin() + sin_ma)
}

/// S6, O(e^1): `E0 = (M + e*pi) / (1 + e)` (OG86).
#[inline]
fn s6(ecc: f64, ma: f64) -> f64 {
    (ma + ecc * PI) / (1.0 + ecc)
}

/// S7, O(e^1): `E0 = min{ M/(1-e), S4, S6 }` (OG86).
///
/// Composition of S4 and S6, not a re-derivation.
#[inline]
fn s7(ecc: f64, ma: f64) -> f64 {
    let tmp = ma / (1.0 - ecc);

    tmp.min(s4(ecc, ma)).min(s6(ecc, ma))
}

/// S8, O(e^3): `E0 = S3 + lambda * e^4 * (pi - S3)` with
/// `lambda = 1/(20*pi)` (OG86).
#[inline]
fn s8(ecc: f64, ma: f64) -> f64 {
    const LAMBDA: f64 = 0.05 * std::f64::consts::FRAC_1_PI;
    let x = s3(ecc, ma);

    x + LAMBDA * ecc * ecc * ecc * ecc * (PI - x)
}

/// S9, O(e^4): `E0 = M + e*sin(M) / sqrt(1 - 2*e*cos(M) + e^2)` (OG86).
///
/// Falls back to plain `M` at the singularity corner `(e, M) = (1, 0)`.
#[inline]
fn s9(ecc: f64, ma: f64) -> f64 {
    if ecc < 1.0 && ma > 0.0 {
        let (esin, ecos) = scaled_sincos(ma, ecc);

        ma + esin / (1.0 - 2.0 * ecos + ecc * ecc).sqrt()
    } else {
        ma
    }
}

/// S10, O(e^0): cube-root starter of Ng (1979), Celestial Mechanics 20,
/// p.243-249: `E0 = s - q/s` with `q = 2*(1-e)/e`, `r = 3*M/e`,
/// `s = cbrt(sqrt(r^2 + q^3) + r)`.
///
/// Falls back to plain `M` for `e = 0` (division by zero).
#[inline]
fn s10(ecc: f64, ma: f64) -> f64 {
    if ecc > 0.0 {
        let q = 2.0 * (1.0 - ecc) / ecc;
        let r = 3.0 * ma / ecc;
        let s = ((q * q * q + r * r).sqrt() + r).cbrt();

        s - q / s
    } else {
        ma
    }
}

/// S11, O(e^4): rational/cube-root starter of OG86 with the exact
/// third-order coefficients `(a, b, c) = -(3^(1/3) - 8/9)/6 * (1, -9, 2)`.
///
/// Falls back to plain `M` for `e >= 1` (singular denominator).
#[inline]
fn s11(ecc: f64, ma: f64) -> f64 {
    const A: f64 = -0.092_226_780_236_419_915_572_1;
    const B: f64 =  0.830_041_022_127_779_240_149; // = -9*A
    const C: f64 = -0.184_453_560_472_839_831_144; // =  2*A

    if ecc < 1.0 {
        let (sin_ma, cos_ma) = sincos(ma);

        let e1     = 1.0 - ecc;
        let cos2ma = 2.0 * cos_ma * cos_ma - 1.0;
        let ecos   = ecc * cos_ma;
        let esin   = ecc * sin_ma;

        ma + esin
            * (1.0
                + ecos * 2.0 / 3.0
                + ecc * ecc * (1.0 - 48.0 * cos_ma + 19.0 * cos2ma) / 36.0
                + ecc * ecc * ecc * (A + B * cos_ma + C * cos2ma))
            / (1.0 - (1.0 + ecc * e1 * (1.0 + e1) * (1.0 + e1)) * ecos).cbrt()
    } else {
        ma
    }
}

/// S12, O(e^1): `E0 = e * E(M, e=1) + (1 - e) * M`, interpolating the
/// rational approximation of the `e = 1` solution (OG86).
#[inline]
fn s12(ecc: f64, ma: f64) -> f64 {
    const A: f64 = (PI - 1.0) * (PI - 1.0) / (PI + 2.0 / 3.0);
    const B: f64 = 2.0 * (PI - 1.0 / 6.0) * (PI - 1.0 / 6.0) / (PI + 2.0 / 3.0);
    let w = PI - ma;

    ecc * (PI - A * w / (B - w)) + (1.0 - ecc) * ma
}

/// S13, O(e^6): Encke (1850), Astron. Nachr. 30, p.277-292; see also
/// Neutsch & Scherer (1992).
///
/// `E0 = atan2(sin y, cos y - e)` with `y = M + sin x - x` and
/// `x = atan2(e*sin M, 1 - e*cos M)`. Two half-angle trig passes plus the
/// `atan2` reconstruction keep the quadrant handling branch-free; this is
/// the most delicate starter numerically.
#[inline]
fn s13(ecc: f64, ma: f64) -> f64 {
    let (esin, ecos) = scaled_sincos(ma, ecc);
    let x = esin.atan2(1.0 - ecos);
    let y = ma + x.sin() - x;
    let (sin_y, cos_y) = sincos(y);

    sin_y.atan2(cos_y - ecc)
}

/// S14, O(e^1): Charles & Tatum (1998), Cel. Mech. Dyn. Astron. 69,
/// p.357-372: `E0 = M + e * (cbrt(pi^2 * M) - pi*sin(M)/15 - M)`.
#[inline]
fn s14(ecc: f64, ma: f64) -> f64 {
    ma + ecc * ((PI_SQ * ma).cbrt() - PI * ma.sin() / 15.0 - ma)
}
