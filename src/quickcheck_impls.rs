use crate::Complex;
use quickcheck::{Arbitrary, Gen};

// Non-finite parts are replaced by zero; every generated value is a
// normalized `Complex`.
fn finite_part(g: &mut Gen) -> f64 {
    let value = f64::arbitrary(g);
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

impl Arbitrary for Complex {
    fn arbitrary(g: &mut Gen) -> Self {
        Complex::new(finite_part(g), finite_part(g))
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        Box::new(Shrinker::new(self.re(), self.im()))
    }
}

struct Shrinker {
    mode: bool,
    re: f64,
    im: f64,
    re_iter: Option<Box<dyn Iterator<Item = f64>>>,
    im_iter: Option<Box<dyn Iterator<Item = f64>>>,
}

impl Shrinker {
    fn new(re: f64, im: f64) -> Self {
        Shrinker {
            mode: true,
            re,
            im,
            re_iter: Some(re.shrink()),
            im_iter: None,
        }
    }
}

impl Iterator for Shrinker {
    type Item = Complex;

    fn next(&mut self) -> Option<Complex> {
        if self.mode {
            if let Some(re) = self.re_iter.as_mut().and_then(|it| it.next()) {
                return Some(Complex::new(re, self.im));
            }
            self.mode = false;
            self.re_iter = Some(self.re.shrink());
            self.im_iter = Some(self.im.shrink());
        }
        loop {
            if let Some(im) = self.im_iter.as_mut().and_then(|it| it.next()) {
                return Some(Complex::new(self.re, im));
            }
            // imaginary shrinks exhausted: move on to the next smaller real part
            self.re = self.re_iter.as_mut().and_then(|it| it.next())?;
            self.im_iter = Some(self.im.shrink());
        }
    }
}

#[cfg(test)]
mod test {
    use crate::Complex;
    use quickcheck::Arbitrary;

    #[test]
    fn test_shrink_reaches_both_parts() {
        let c = Complex::new(4.0, 2.0);
        let shrunk: Vec<Complex> = c.shrink().take(10_000).collect();
        assert!(shrunk.iter().any(|s| s.im() == 2.0 && s.re() != 4.0));
        assert!(shrunk.iter().any(|s| s.re() == 4.0 && s.im() != 2.0));
        assert!(shrunk.iter().any(|s| s.re() != 4.0 && s.im() != 2.0));
        assert!(shrunk.iter().all(|s| Complex::new(s.re(), s.im()) == *s));
    }

    #[test]
    fn test_arbitrary_is_finite_and_normalized() {
        let mut g = quickcheck::Gen::new(100);
        for _ in 0..200 {
            let c = Complex::arbitrary(&mut g);
            assert!(c.re().is_finite() && c.im().is_finite());
            assert_eq!(Complex::new(c.re(), c.im()), c);
        }
    }
}
