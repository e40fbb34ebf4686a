use statrs::distribution::{ChiSquared, ContinuousCDF};

use crate::util::Error;

/// Upper tail of the reference distribution: P(X >= statistic) for a
/// chi-square variable with `degrees_of_freedom` degrees of freedom.
pub trait RightTail {
    fn right_tail_probability(&self, statistic: f64, degrees_of_freedom: u64) -> Result<f64, Error>;
}

// Any plain function of (statistic, df) will do, handy for pinning a p-value in tests
impl<F: Fn(f64, u64) -> f64> RightTail for F {
    fn right_tail_probability(&self, statistic: f64, degrees_of_freedom: u64) -> Result<f64, Error> {
        Ok(self(statistic, degrees_of_freedom))
    }
}

/// The `statrs` chi-square distribution.
///
/// Zero degrees of freedom is the point mass at 0: the tail is 1 when the
/// statistic is 0 and 0 otherwise. statrs is never asked for that case.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChiSquaredTail;

impl RightTail for ChiSquaredTail {
    fn right_tail_probability(&self, statistic: f64, degrees_of_freedom: u64) -> Result<f64, Error> {
        if degrees_of_freedom == 0 {
            return Ok(if statistic == 0f64 { 1f64 } else { 0f64 });
        }
        let dist = ChiSquared::new(degrees_of_freedom as f64)
            .map_err(|e| Error::Distribution {
                degrees_of_freedom,
                reason: e.to_string(),
            })?;
        Ok(1f64 - dist.cdf(statistic))
    }
}

#[test]
fn test_chi_squared_tail() {
    let tail = ChiSquaredTail;

    // df = 2 has the closed form exp(-x/2)
    let p = tail.right_tail_probability(3f64, 2).unwrap();
    assert!((p - (-1.5f64).exp()).abs() < 1e-10);

    // df = 4: exp(-x/2) * (1 + x/2)
    let x = 5.004329004329004;
    let p = tail.right_tail_probability(x, 4).unwrap();
    assert!((p - 0.28685360065170423).abs() < 1e-9);

    assert_eq!(1f64, tail.right_tail_probability(0f64, 3).unwrap());
}

#[test]
fn test_chi_squared_tail_zero_degrees_of_freedom() {
    let tail = ChiSquaredTail;
    assert_eq!(Ok(1f64), tail.right_tail_probability(0f64, 0));
    assert_eq!(Ok(0f64), tail.right_tail_probability(0.25f64, 0));
    assert_eq!(Ok(0f64), tail.right_tail_probability(1e6f64, 0));
}

#[test]
fn test_closure_tail() {
    let fixed = |_: f64, _: u64| 0.05f64;
    assert_eq!(Ok(0.05f64), fixed.right_tail_probability(12f64, 3));
}
