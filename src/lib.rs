// Copyright 2014-2016 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Complex numbers with decimal-rounded parts.
//!
//! Every [`Complex`] stores its real and imaginary parts rounded to ten
//! decimal places, so results compare exactly and print without binary
//! floating point artifacts. Division, inversion, negative powers and roots
//! are fallible and report [`Error::DivisionByZero`] instead of producing
//! infinities.
//!
//! ## Example
//!
//! ```
//! use num_decimal_complex::{Complex, Error};
//!
//! # fn main() -> Result<(), Error> {
//! let z = Complex::new(3.0, -4.0);
//! assert_eq!(z.magnitude(), 5.0);
//! assert_eq!(z.to_string(), "3-4i");
//!
//! let w = z.divide(Complex::I)?;
//! assert_eq!(w.to_string(), "-4-3i");
//!
//! let roots = Complex::new(-1.0, 0.0).square_root()?;
//! assert_eq!(roots, vec![Complex::I, Complex::new(0.0, -1.0)]);
//!
//! assert_eq!(Complex::ZERO.inverse(), Err(Error::DivisionByZero));
//! # Ok(())
//! # }
//! ```
//!
//! The free functions in this crate mirror the methods of [`Complex`] for
//! callers that prefer `divide(a, b)` over `a.divide(b)`.
#![doc(html_logo_url = "https://rust-num.github.io/num/rust-logo-128x128-blk-v2.png",
       html_favicon_url = "https://rust-num.github.io/num/favicon.ico",
       html_playground_url = "http://play.integer32.com/")]

pub use crate::complex::Complex;
pub use crate::error::{Error, Result};

pub mod complex;
pub mod error;
pub mod round;

#[cfg(feature = "quickcheck")]
mod quickcheck_impls;

/// Returns `number + value`; `value` may be a `Complex` or an `f64`.
#[inline]
pub fn add<T: Into<Complex>>(number: Complex, value: T) -> Complex {
    let value: Complex = value.into();
    number + value
}

/// Returns `number - value`; `value` may be a `Complex` or an `f64`.
#[inline]
pub fn subtract<T: Into<Complex>>(number: Complex, value: T) -> Complex {
    let value: Complex = value.into();
    number - value
}

/// Returns `number * value`; `value` may be a `Complex` or an `f64`.
#[inline]
pub fn multiply<T: Into<Complex>>(number: Complex, value: T) -> Complex {
    let value: Complex = value.into();
    number * value
}

/// Divides `number` by `value`. See [`Complex::divide`].
#[inline]
pub fn divide<T: Into<Complex>>(number: Complex, value: T) -> Result<Complex> {
    number.divide(value)
}

/// See [`Complex::inverse`].
#[inline]
pub fn inverse(number: Complex) -> Result<Complex> {
    number.inverse()
}

/// Raises `number` to an integer power. See [`Complex::power`].
///
/// ```
/// use num_decimal_complex::{power, Complex};
///
/// assert_eq!(power(Complex::new(1.0, 1.0), 3), Ok(Complex::new(-2.0, 2.0)));
/// ```
#[inline]
pub fn power(number: Complex, exponent: i32) -> Result<Complex> {
    number.power(exponent)
}

/// See [`Complex::nth_roots`].
#[inline]
pub fn nth_roots(number: Complex, n: i32) -> Result<Vec<Complex>> {
    number.nth_roots(n)
}

/// See [`Complex::square_root`].
#[inline]
pub fn square_root(number: Complex) -> Result<Vec<Complex>> {
    number.square_root()
}
