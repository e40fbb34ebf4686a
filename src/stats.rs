pub mod distribution;

// A single category's share of Pearson's statistic. `expected` must be non-zero.
pub fn contribution(observed: f64, expected: f64) -> f64 {
    (observed - expected).powi(2) / expected
}

// Categories are paired positionally, (observed, expected)
pub fn chi_sq<I: IntoIterator<Item = (f64, f64)>>(pairs: I) -> f64 {
    pairs
        .into_iter()
        .fold(0f64, |a, (o, e)| a + contribution(o, e))
}

#[test]
fn test_contribution() {
    assert_eq!(100f64 / 60f64, contribution(50f64, 60f64));
    assert_eq!(contribution(70f64, 60f64), contribution(50f64, 60f64));
    assert_eq!(0f64, contribution(60f64, 60f64));
}

#[test]
fn test_chi_sq() {
    let observed = [50f64, 80f64, 120f64, 90f64, 60f64];
    let expected = [60f64, 70f64, 110f64, 100f64, 60f64];
    let statistic = chi_sq(observed.into_iter().zip(expected));
    assert!((statistic - 5.004329004329004).abs() < 1e-12);

    assert_eq!(0f64, chi_sq(expected.into_iter().zip(expected)));
    assert_eq!(0f64, chi_sq(std::iter::empty()));
}
