//! The exact number type shared by every predicate and construction.
//!
//! Coordinates are arbitrary-precision rationals. Sums, differences,
//! products and quotients of rationals stay rational, so orientation tests,
//! segment intersections and areas are computed without rounding. The type
//! is chosen once here; nothing else in the crate names it directly.

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::ToPrimitive;

/// Exact coordinate type.
pub type ExactNumber = BigRational;

/// Converts an integer to an exact number.
#[inline]
pub fn exact(value: i64) -> ExactNumber {
    BigRational::from_integer(BigInt::from(value))
}

/// Builds the exact fraction `numer / denom`.
///
/// Returns `None` when `denom` is zero.
pub fn exact_ratio(numer: i64, denom: i64) -> Option<ExactNumber> {
    if denom == 0 {
        return None;
    }
    Some(BigRational::new(BigInt::from(numer), BigInt::from(denom)))
}

/// Converts a finite `f64` to the exact rational it encodes.
///
/// Every finite double is a dyadic rational, so the conversion is lossless.
/// Returns `None` for NaN and infinities.
pub fn exact_from_f64(value: f64) -> Option<ExactNumber> {
    if !value.is_finite() {
        return None;
    }
    BigRational::from_float(value)
}

/// Rounds an exact number to the nearest representable `f64`.
///
/// Intended for handing results to renderers; never feed the result back
/// into a predicate.
pub fn to_f64(value: &ExactNumber) -> f64 {
    match (value.numer().to_f64(), value.denom().to_f64()) {
        (Some(n), Some(d)) => n / d,
        _ => f64::NAN,
    }
}

/// The exact value one half.
#[inline]
pub(crate) fn half() -> ExactNumber {
    BigRational::new(BigInt::from(1), BigInt::from(2))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_exact_integers() {
        assert_eq!(exact(3) + exact(4), exact(7));
        assert_eq!(exact(-2) * exact(5), exact(-10));
    }

    #[test]
    fn test_exact_ratio() {
        let third = exact_ratio(1, 3).unwrap();
        assert_eq!(&third * exact(3), exact(1));
        assert!(exact_ratio(1, 0).is_none());
    }

    #[test]
    fn test_from_f64_is_lossless() {
        let value = exact_from_f64(0.1).unwrap();
        // 0.1 is not a dyadic rational, so the stored value differs from 1/10.
        assert_ne!(value, exact_ratio(1, 10).unwrap());
        assert_eq!(to_f64(&value), 0.1);
    }

    #[test]
    fn test_from_f64_rejects_non_finite() {
        assert!(exact_from_f64(f64::NAN).is_none());
        assert!(exact_from_f64(f64::INFINITY).is_none());
    }

    #[test]
    fn test_half() {
        assert_eq!(half() + half(), exact(1));
        assert_relative_eq!(to_f64(&half()), 0.5);
    }
}
