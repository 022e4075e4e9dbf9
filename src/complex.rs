// Copyright 2013 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The decimal-rounded complex number type.

use std::f64::consts::PI;
use std::fmt;
use std::iter::{Product, Sum};
use std::ops::{Add, Mul, Neg, Sub};

use log::trace;
use num_complex::Complex64;
use num_traits::{One, Zero};

use crate::error::{Error, Result};
use crate::round::normalize;

/// A complex number in Cartesian form, `re + im·i`.
///
/// Both parts are rounded to ten decimal places whenever a value is built,
/// so chains of arithmetic do not accumulate binary floating point noise
/// and equality is exact:
///
/// ```
/// use num_decimal_complex::Complex;
///
/// let z = Complex::new(0.1, 0.0) + 0.2;
/// assert_eq!(z, Complex::new(0.3, 0.0));
/// assert_eq!(z.to_string(), "0.3");
/// ```
///
/// Values are never mutated after construction; every operation returns a
/// new, independently rounded value.
#[derive(PartialEq, Copy, Clone, Debug, Default)]
pub struct Complex {
    re: f64,
    im: f64,
}

impl Complex {
    /// `0 + 0i`
    pub const ZERO: Complex = Complex { re: 0.0, im: 0.0 };
    /// `1 + 0i`
    pub const ONE: Complex = Complex { re: 1.0, im: 0.0 };
    /// The imaginary unit, `0 + 1i`.
    pub const I: Complex = Complex { re: 0.0, im: 1.0 };

    /// Create a new Complex, rounding both parts.
    #[inline]
    pub fn new(re: f64, im: f64) -> Complex {
        Complex {
            re: normalize(re),
            im: normalize(im),
        }
    }

    /// Real portion of the complex number
    #[inline]
    pub fn re(&self) -> f64 {
        self.re
    }

    /// Imaginary portion of the complex number
    #[inline]
    pub fn im(&self) -> f64 {
        self.im
    }

    /// Calculate |self|, i.e. `sqrt(re^2 + im^2)`.
    #[inline]
    pub fn magnitude(&self) -> f64 {
        (self.re * self.re + self.im * self.im).sqrt()
    }

    /// Calculate the angle between the positive real axis and `self`, in
    /// radians.
    ///
    /// The quadrant is resolved case by case from the signs of both parts
    /// rather than with `atan2`:
    ///
    /// * `0` for zero and for the positive real axis,
    /// * `π` for the negative real axis,
    /// * `±π/2` for the imaginary axis,
    /// * otherwise `a = atan(|im| / |re|)` gives `a`, `π - a`, `π + a` or
    ///   `-a` for the first to fourth quadrant.
    ///
    /// Note the third quadrant yields angles in `(π, 3π/2)`.
    pub fn argument(&self) -> f64 {
        if *self == Complex::ZERO {
            0.0
        } else if self.re == 0.0 {
            if self.im > 0.0 {
                PI / 2.0
            } else {
                -PI / 2.0
            }
        } else if self.im == 0.0 {
            if self.re > 0.0 {
                0.0
            } else {
                PI
            }
        } else {
            let angle = (self.im.abs() / self.re.abs()).atan();
            match (self.re > 0.0, self.im > 0.0) {
                (true, true) => angle,
                (false, true) => PI - angle,
                (false, false) => PI + angle,
                (true, false) => -angle,
            }
        }
    }

    /// Convert to polar form `(r, theta)`, such that
    /// `self = r * exp(i * theta)`.
    #[inline]
    pub fn to_polar(&self) -> (f64, f64) {
        (self.magnitude(), self.argument())
    }

    /// Convert a polar representation into a complex number.
    #[inline]
    pub fn from_polar(r: f64, theta: f64) -> Complex {
        Complex::new(r * theta.cos(), r * theta.sin())
    }

    /// Returns the complex conjugate. i.e. `re - i im`
    #[inline]
    pub fn conjugate(&self) -> Complex {
        Complex::new(self.re, -self.im)
    }

    /// Divides `self` by `divisor`, which may be a `Complex` or an `f64`.
    ///
    /// The quotient is `(self * conj(d)) / (d * conj(d))`, the denominator
    /// being real. Fails with [`Error::DivisionByZero`] when the divisor is
    /// zero, or so small that its squared magnitude rounds to zero.
    ///
    /// ```
    /// use num_decimal_complex::{Complex, Error};
    ///
    /// let q = Complex::new(-1.0, 1.0).divide(Complex::I).unwrap();
    /// assert_eq!(q, Complex::new(1.0, 1.0));
    /// assert_eq!(Complex::new(4.0, 2.0).divide(0.5), Ok(Complex::new(8.0, 4.0)));
    /// assert_eq!(Complex::ONE.divide(0.0), Err(Error::DivisionByZero));
    /// ```
    pub fn divide<T: Into<Complex>>(&self, divisor: T) -> Result<Complex> {
        let divisor: Complex = divisor.into();
        if divisor == Complex::ZERO {
            trace!("division of {} by zero", self);
            return Err(Error::DivisionByZero);
        }
        let conj = divisor.conjugate();
        let dividend = *self * conj;
        let norm_sqr = (divisor * conj).re;
        if norm_sqr == 0.0 {
            trace!("division of {} by {}: squared magnitude rounds to zero", self, divisor);
            return Err(Error::DivisionByZero);
        }
        Ok(Complex::new(dividend.re / norm_sqr, dividend.im / norm_sqr))
    }

    /// Returns `1/self`, computed as `conj(self) / (self * conj(self))`.
    #[inline]
    pub fn inverse(&self) -> Result<Complex> {
        let conj = self.conjugate();
        conj.divide(*self * conj)
    }

    /// Raises `self` to an integer power.
    ///
    /// A negative exponent raises the inverse, so it fails for zero.
    /// `power(0)` is always `ONE`, for zero as well.
    ///
    /// ```
    /// use num_decimal_complex::Complex;
    ///
    /// assert_eq!(Complex::I.power(2), Ok(Complex::new(-1.0, 0.0)));
    /// assert_eq!(Complex::new(2.0, 0.0).power(-2), Ok(Complex::new(0.25, 0.0)));
    /// assert_eq!(Complex::ZERO.power(0), Ok(Complex::ONE));
    /// ```
    pub fn power(&self, exponent: i32) -> Result<Complex> {
        if exponent < 0 {
            Ok(self.inverse()?.powu(exponent.unsigned_abs()))
        } else {
            Ok(self.powu(exponent.unsigned_abs()))
        }
    }

    // self * (self * (... * (self * self))), rounding after every product.
    fn powu(&self, exponent: u32) -> Complex {
        match exponent {
            0 => Complex::ONE,
            1 => *self,
            2 => *self * *self,
            _ => (2..exponent).fold(*self * *self, |acc, _| *self * acc),
        }
    }

    /// Returns the `n` nth roots of `self`, in order of increasing angle
    /// offset from `arg(self) / n`.
    ///
    /// Root `k` is `from_polar(|self|^(1/n), arg(self)/n + 2πk/n)`. A
    /// negative `n` takes the roots of the inverse, which fails for zero;
    /// `n == 0` fails as well. Zero has `n` roots, all zero.
    ///
    /// ```
    /// use num_decimal_complex::Complex;
    ///
    /// let roots = Complex::new(8.0, 0.0).nth_roots(3).unwrap();
    /// assert_eq!(roots.len(), 3);
    /// assert_eq!(roots[0], Complex::new(2.0, 0.0));
    /// assert_eq!(roots[1], Complex::new(-1.0, 1.7320508076));
    /// ```
    pub fn nth_roots(&self, n: i32) -> Result<Vec<Complex>> {
        if n == 0 {
            trace!("zeroth root of {}", self);
            return Err(Error::DivisionByZero);
        }
        if n < 0 {
            Ok(self.inverse()?.roots(n.unsigned_abs()))
        } else {
            Ok(self.roots(n.unsigned_abs()))
        }
    }

    fn roots(&self, n: u32) -> Vec<Complex> {
        let order = f64::from(n);
        let modulus = self.magnitude().powf(1.0 / order);
        let theta = self.argument() / order;
        (0..n)
            .map(|k| Complex::from_polar(modulus, theta + (2.0 * f64::from(k) * PI) / order))
            .collect()
    }

    /// Returns both square roots of `self`; the same as `nth_roots(2)`.
    #[inline]
    pub fn square_root(&self) -> Result<Vec<Complex>> {
        self.nth_roots(2)
    }
}

impl From<f64> for Complex {
    #[inline]
    fn from(re: f64) -> Complex {
        Complex::new(re, 0.0)
    }
}

impl<'a> From<&'a f64> for Complex {
    #[inline]
    fn from(re: &f64) -> Complex {
        From::from(*re)
    }
}

impl From<(f64, f64)> for Complex {
    #[inline]
    fn from((re, im): (f64, f64)) -> Complex {
        Complex::new(re, im)
    }
}

impl From<Complex> for (f64, f64) {
    #[inline]
    fn from(c: Complex) -> (f64, f64) {
        (c.re, c.im)
    }
}

impl From<Complex64> for Complex {
    #[inline]
    fn from(c: Complex64) -> Complex {
        Complex::new(c.re, c.im)
    }
}

impl From<Complex> for Complex64 {
    #[inline]
    fn from(c: Complex) -> Complex64 {
        Complex64::new(c.re, c.im)
    }
}

macro_rules! forward_ref_ref_binop {
    (impl $imp:ident, $method:ident, $rhs:ty) => {
        impl<'a, 'b> $imp<&'b $rhs> for &'a Complex {
            type Output = Complex;

            #[inline]
            fn $method(self, other: &$rhs) -> Complex {
                (*self).$method(*other)
            }
        }
    };
}

macro_rules! forward_ref_val_binop {
    (impl $imp:ident, $method:ident, $rhs:ty) => {
        impl<'a> $imp<$rhs> for &'a Complex {
            type Output = Complex;

            #[inline]
            fn $method(self, other: $rhs) -> Complex {
                (*self).$method(other)
            }
        }
    };
}

macro_rules! forward_val_ref_binop {
    (impl $imp:ident, $method:ident, $rhs:ty) => {
        impl<'a> $imp<&'a $rhs> for Complex {
            type Output = Complex;

            #[inline]
            fn $method(self, other: &$rhs) -> Complex {
                self.$method(*other)
            }
        }
    };
}

// `f64 op Complex`, promoting the real operand.
macro_rules! forward_real_lhs_binop {
    (impl $imp:ident, $method:ident) => {
        impl $imp<Complex> for f64 {
            type Output = Complex;

            #[inline]
            fn $method(self, other: Complex) -> Complex {
                Complex::from(self).$method(other)
            }
        }

        impl<'a> $imp<&'a Complex> for f64 {
            type Output = Complex;

            #[inline]
            fn $method(self, other: &Complex) -> Complex {
                Complex::from(self).$method(*other)
            }
        }

        impl<'a> $imp<Complex> for &'a f64 {
            type Output = Complex;

            #[inline]
            fn $method(self, other: Complex) -> Complex {
                Complex::from(*self).$method(other)
            }
        }
    };
}

macro_rules! forward_all_binop {
    (impl $imp:ident, $method:ident) => {
        forward_ref_ref_binop!(impl $imp, $method, Complex);
        forward_ref_val_binop!(impl $imp, $method, Complex);
        forward_val_ref_binop!(impl $imp, $method, Complex);
        forward_ref_ref_binop!(impl $imp, $method, f64);
        forward_ref_val_binop!(impl $imp, $method, f64);
        forward_val_ref_binop!(impl $imp, $method, f64);
        forward_real_lhs_binop!(impl $imp, $method);
    };
}

/* arithmetic */
forward_all_binop!(impl Add, add);

// (a + i b) + (c + i d) == (a + c) + i (b + d)
impl Add<Complex> for Complex {
    type Output = Complex;

    #[inline]
    fn add(self, other: Complex) -> Complex {
        Complex::new(self.re + other.re, self.im + other.im)
    }
}

impl Add<f64> for Complex {
    type Output = Complex;

    #[inline]
    fn add(self, other: f64) -> Complex {
        Complex::new(self.re + other, self.im)
    }
}

forward_all_binop!(impl Sub, sub);

// (a + i b) - (c + i d) == (a - c) + i (b - d)
impl Sub<Complex> for Complex {
    type Output = Complex;

    #[inline]
    fn sub(self, other: Complex) -> Complex {
        Complex::new(self.re - other.re, self.im - other.im)
    }
}

impl Sub<f64> for Complex {
    type Output = Complex;

    #[inline]
    fn sub(self, other: f64) -> Complex {
        Complex::new(self.re - other, self.im)
    }
}

forward_all_binop!(impl Mul, mul);

// (a + i b) * (c + i d) == (a*c - b*d) + i (a*d + b*c)
impl Mul<Complex> for Complex {
    type Output = Complex;

    #[inline]
    fn mul(self, other: Complex) -> Complex {
        let re = self.re * other.re - self.im * other.im;
        let im = self.re * other.im + self.im * other.re;
        Complex::new(re, im)
    }
}

impl Mul<f64> for Complex {
    type Output = Complex;

    #[inline]
    fn mul(self, other: f64) -> Complex {
        Complex::new(self.re * other, self.im * other)
    }
}

// Op Assign

mod opassign {
    use std::ops::{AddAssign, MulAssign, SubAssign};

    use super::Complex;

    macro_rules! op_assign {
        (impl $imp:ident, $method:ident, $op:tt) => {
            impl $imp<Complex> for Complex {
                #[inline]
                fn $method(&mut self, other: Complex) {
                    *self = *self $op other;
                }
            }

            impl $imp<f64> for Complex {
                #[inline]
                fn $method(&mut self, other: f64) {
                    *self = *self $op other;
                }
            }

            impl<'a> $imp<&'a Complex> for Complex {
                #[inline]
                fn $method(&mut self, other: &Complex) {
                    *self = *self $op *other;
                }
            }

            impl<'a> $imp<&'a f64> for Complex {
                #[inline]
                fn $method(&mut self, other: &f64) {
                    *self = *self $op *other;
                }
            }
        };
    }

    op_assign!(impl AddAssign, add_assign, +);
    op_assign!(impl SubAssign, sub_assign, -);
    op_assign!(impl MulAssign, mul_assign, *);
}

impl Neg for Complex {
    type Output = Complex;

    #[inline]
    fn neg(self) -> Complex {
        Complex::new(-self.re, -self.im)
    }
}

impl<'a> Neg for &'a Complex {
    type Output = Complex;

    #[inline]
    fn neg(self) -> Complex {
        -*self
    }
}

impl Sum for Complex {
    fn sum<I: Iterator<Item = Complex>>(iter: I) -> Complex {
        iter.fold(Complex::ZERO, |acc, c| acc + c)
    }
}

impl<'a> Sum<&'a Complex> for Complex {
    fn sum<I: Iterator<Item = &'a Complex>>(iter: I) -> Complex {
        iter.fold(Complex::ZERO, |acc, c| acc + c)
    }
}

impl Product for Complex {
    fn product<I: Iterator<Item = Complex>>(iter: I) -> Complex {
        iter.fold(Complex::ONE, |acc, c| acc * c)
    }
}

impl<'a> Product<&'a Complex> for Complex {
    fn product<I: Iterator<Item = &'a Complex>>(iter: I) -> Complex {
        iter.fold(Complex::ONE, |acc, c| acc * c)
    }
}

/* constants */
impl Zero for Complex {
    #[inline]
    fn zero() -> Complex {
        Complex::ZERO
    }

    #[inline]
    fn is_zero(&self) -> bool {
        *self == Complex::ZERO
    }
}

impl One for Complex {
    #[inline]
    fn one() -> Complex {
        Complex::ONE
    }
}

// Renders the shortest `a+bi` form: "0" for zero, no zero parts, a bare
// "i" for a unit imaginary part, and no leading '+' when the real part is
// zero. Precision applies to each numeral and the zero and unit rules are
// judged on the numerals as printed; width applies to the whole rendering.
macro_rules! write_complex {
    ($f:ident, $t:expr, $re:expr, $im:expr) => {{
        let precision = $f.precision();
        let numeral = |value: f64| -> String {
            match precision {
                Some(prec) => format!(concat!("{:.1$", $t, "}"), value, prec),
                None => format!(concat!("{:", $t, "}"), value),
            }
        };
        let reads_as = |s: &str, v: f64| s.parse::<f64>().map_or(false, |p| p == v);

        let real = numeral($re);
        let imag = numeral($im.abs());
        let re_zero = reads_as(&real, 0.0);
        let im_zero = reads_as(&imag, 0.0);

        let complex = if re_zero && im_zero {
            String::from("0")
        } else {
            let mut s = if re_zero { String::new() } else { real };
            if !im_zero {
                s.push(if $im < 0.0 { '-' } else { '+' });
                if !reads_as(&imag, 1.0) {
                    s.push_str(&imag);
                }
                s.push('i');
            }
            if re_zero && s.starts_with('+') {
                s.remove(0);
            }
            s
        };

        if let Some(width) = $f.width() {
            write!($f, "{0: >1$}", complex, width)
        } else {
            write!($f, "{}", complex)
        }
    }};
}

/* string conversions */
impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_complex!(f, "", self.re, self.im)
    }
}

impl fmt::LowerExp for Complex {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_complex!(f, "e", self.re, self.im)
    }
}

impl fmt::UpperExp for Complex {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_complex!(f, "E", self.re, self.im)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Complex {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serde::Serialize::serialize(&(self.re, self.im), serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Complex {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let (re, im) = serde::Deserialize::deserialize(deserializer)?;
        Ok(Complex::new(re, im))
    }
}
