use crate::SfError;

/// Floating point type used throughout system
pub type Real = f64;

/// One tolerance for everything
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, SfError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(SfError::NonFinite { what, value: v })
    }
}

/// Finite and strictly greater than zero.
pub fn ensure_positive(v: Real, what: &'static str) -> Result<Real, SfError> {
    let v = ensure_finite(v, what)?;
    if v > 0.0 {
        Ok(v)
    } else {
        Err(SfError::NonPositive { what, value: v })
    }
}

/// Finite and within the closed interval `[min, max]`.
pub fn ensure_in_range(v: Real, min: Real, max: Real, what: &'static str) -> Result<Real, SfError> {
    let v = ensure_finite(v, what)?;
    if (min..=max).contains(&v) {
        Ok(v)
    } else {
        Err(SfError::OutOfRange {
            what,
            value: v,
            min,
            max,
        })
    }
}

/// Round the stored value of `v` to `decimals` places (`decimals >= 0`).
///
/// Exact ties round away from zero, so 40.25 becomes 40.3. Scaling can
/// itself land on a half (24.1499.. x 10 == 241.5); the exact residual of
/// the product then picks the side the stored value is really on.
pub fn round_to(v: Real, decimals: i32) -> Real {
    let scale = 10f64.powi(decimals);
    let scaled = v * scale;
    let mut rounded = scaled.round();
    if (rounded - scaled).abs() == 0.5 {
        let residual = v.mul_add(scale, -scaled);
        if residual < 0.0 {
            rounded = scaled.floor();
        } else if residual > 0.0 {
            rounded = scaled.ceil();
        }
    }
    rounded / scale
}

/// Number of whole units needed to cover `demand`.
///
/// Zero or negative demand needs no units. Positive demand always needs at
/// least one, even if the ceiling underflows to zero.
pub fn units_to_cover(demand: Real, unit_size: Real) -> u32 {
    if demand <= 0.0 {
        return 0;
    }
    let count = (demand / unit_size).ceil();
    if count >= 1.0 { count as u32 } else { 1 }
}

/// `numerator / denominator`, or zero when the denominator is zero.
pub fn ratio_or_zero(numerator: Real, denominator: Real) -> Real {
    if denominator > 0.0 {
        numerator / denominator
    } else {
        0.0
    }
}
