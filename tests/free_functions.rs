use num_decimal_complex::{
    add, divide, inverse, multiply, nth_roots, power, square_root, subtract, Complex, Error,
};
use std::f64::consts::PI;

#[test]
fn add_and_subtract_accept_real_operands() {
    let z = Complex::new(1.5, -2.0);
    assert_eq!(add(z, Complex::new(0.5, 2.0)), Complex::new(2.0, 0.0));
    assert_eq!(add(z, 0.25), Complex::new(1.75, -2.0));
    assert_eq!(subtract(z, z), Complex::ZERO);
    assert_eq!(subtract(z, 1.5), Complex::new(0.0, -2.0));
}

#[test]
fn multiply_matches_operator() {
    let a = Complex::new(2.0, 3.0);
    let b = Complex::new(-1.0, 0.5);
    assert_eq!(multiply(a, b), a * b);
    assert_eq!(multiply(a, b), Complex::new(-3.5, -2.0));
    assert_eq!(multiply(a, 2.0), Complex::new(4.0, 6.0));
}

#[test]
fn divide_mirrors_method_including_failures() {
    let a = Complex::new(2.0, 3.0);
    let b = Complex::new(-1.0, 0.5);
    assert_eq!(divide(a, b), a.divide(b));
    assert_eq!(divide(a, 2.0), Ok(Complex::new(1.0, 1.5)));
    assert_eq!(divide(Complex::ONE, Complex::ZERO), Err(Error::DivisionByZero));
    assert_eq!(divide(a, 0.0), Err(Error::DivisionByZero));
}

#[test]
fn inverse_of_zero_fails() {
    assert_eq!(inverse(Complex::ZERO), Err(Error::DivisionByZero));
    assert_eq!(inverse(Complex::new(0.0, 2.0)), Ok(Complex::new(0.0, -0.5)));
}

#[test]
fn power_edge_cases() {
    let z = Complex::new(0.5, -1.5);
    assert_eq!(power(Complex::ZERO, 0), Ok(Complex::ONE));
    assert_eq!(power(z, 1), Ok(z));
    assert_eq!(power(z, 2), Ok(z * z));
    assert_eq!(power(z, -1), z.inverse());
    assert_eq!(power(Complex::ZERO, -2), Err(Error::DivisionByZero));
}

#[test]
fn roots_mirror_methods() {
    let z = Complex::new(-1.0, 0.0);
    assert_eq!(square_root(z), Ok(vec![Complex::I, Complex::new(0.0, -1.0)]));
    assert_eq!(nth_roots(z, 4), z.nth_roots(4));
    assert_eq!(nth_roots(z, 0), Err(Error::DivisionByZero));
    assert_eq!(nth_roots(Complex::ZERO, -3), Err(Error::DivisionByZero));
}

#[test]
fn fourth_roots_of_unity_are_ordered() {
    let roots = Complex::ONE.nth_roots(4).unwrap();
    assert_eq!(
        roots,
        vec![
            Complex::ONE,
            Complex::I,
            Complex::new(-1.0, 0.0),
            Complex::new(0.0, -1.0),
        ]
    );
}

#[test]
fn argument_of_canonical_values() {
    assert!((Complex::new(-1.0, 1.0).argument() - 3.0 * PI / 4.0).abs() < 1e-10);
    assert_eq!(Complex::new(1.0, 0.0).argument(), 0.0);
    assert_eq!(Complex::new(-1.0, 0.0).argument(), PI);
    assert_eq!(Complex::ZERO.argument(), 0.0);
}

#[test]
fn canonical_strings() {
    assert_eq!(Complex::new(0.0, 0.0).to_string(), "0");
    assert_eq!(Complex::new(0.0, 1.0).to_string(), "i");
    assert_eq!(Complex::new(0.0, -1.0).to_string(), "-i");
    assert_eq!(Complex::new(2.0, -1.0).to_string(), "2-i");
    assert_eq!(Complex::new(2.0, 1.0).to_string(), "2+i");
    assert_eq!(Complex::new(-2.5, 0.75).to_string(), "-2.5+0.75i");
    assert_eq!(Complex::new(0.1 + 0.2, 0.0).to_string(), "0.3");
}

#[test]
fn error_message() {
    assert_eq!(Error::DivisionByZero.to_string(), "division by zero");
}
