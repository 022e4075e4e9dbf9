// Copyright 2013 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Decimal rounding applied to every stored component.

/// Number of fractional decimal digits kept by [`normalize`].
pub const PRECISION: i32 = 10;

const SCALE: f64 = 1e10;

// From 2^19 on the spacing of `f64` values exceeds 1e-10, so there is no
// tenth decimal left to round to.
const EXACT_LIMIT: f64 = (1u64 << 19) as f64;

/// Rounds `value` to [`PRECISION`] fractional decimal digits, half away
/// from zero.
///
/// The result is the `f64` closest to the rounded decimal. Only the
/// fractional part is scaled; the whole part and the rounded digits are
/// recombined as an integer below 2^53, so the final division is the only
/// inexact step.
///
/// Non-finite values and values of magnitude 2^19 (524288) or more are
/// returned unchanged. Negative zero comes back as `+0.0`.
///
/// ```
/// use num_decimal_complex::round::normalize;
///
/// assert_eq!(normalize(0.1 + 0.2), 0.3);
/// assert_eq!(normalize(1.0 / 3.0), 0.3333333333);
/// assert_eq!(normalize(0.00000000005), 0.0000000001);
/// assert_eq!(normalize(250000.1 + 0.2), 250000.3);
/// ```
#[inline]
pub fn normalize(value: f64) -> f64 {
    if !value.is_finite() || value.abs() >= EXACT_LIMIT {
        return value;
    }
    let whole = value.trunc();
    let digits = ((value - whole) * SCALE).round();
    let rounded = (whole * SCALE + digits) / SCALE;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

#[cfg(test)]
mod test {
    use super::normalize;
    use std::f64;

    #[test]
    fn test_rounds_noise_away() {
        assert_eq!(normalize(0.1 + 0.2), 0.3);
        assert_eq!(normalize(1.0 - 0.9), 0.1);
        assert_eq!(normalize(f64::consts::FRAC_PI_2.cos()), 0.0);
    }

    #[test]
    fn test_half_away_from_zero() {
        assert_eq!(normalize(0.00000000005), 0.0000000001);
        assert_eq!(normalize(-0.00000000005), -0.0000000001);
        assert_eq!(normalize(0.00000000004), 0.0);
    }

    #[test]
    fn test_negative_zero() {
        let z = normalize(-0.00000000001);
        assert_eq!(z, 0.0);
        assert!(z.is_sign_positive());
        assert!(normalize(-0.0).is_sign_positive());
    }

    #[test]
    fn test_idempotent() {
        for &x in [1.0 / 3.0, -2.0 / 7.0, 123.456789012345, 1e-12, 98765.4321012345, 300000.0 / 7.0 * 5.0].iter() {
            assert_eq!(normalize(normalize(x)), normalize(x));
        }
    }

    #[test]
    fn test_rounds_large_values() {
        assert_eq!(normalize(250000.1 + 0.2), 250000.3);
        assert_eq!(normalize(-250000.1 - 0.2), -250000.3);
        assert_eq!(normalize(450000.7 + 0.1), 450000.8);
        assert_eq!(normalize(524287.123456789012), 524287.123456789);
        for &x in [225180.123456789012, 262144.00000000004, 400000.33333333333].iter() {
            assert_eq!(normalize(normalize(x)), normalize(x));
        }
    }

    #[test]
    fn test_passthrough() {
        assert!(normalize(f64::NAN).is_nan());
        assert_eq!(normalize(f64::INFINITY), f64::INFINITY);
        assert_eq!(normalize(f64::NEG_INFINITY), f64::NEG_INFINITY);
        assert_eq!(normalize(1e300), 1e300);
        assert_eq!(normalize(-4.5e15), -4.5e15);
        assert_eq!(normalize(524288.00000000006), 524288.00000000006);
    }
}
