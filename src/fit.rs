use itertools::Itertools;
use serde::Serialize;
use snafu::ensure;
use tracing::{debug, trace};

use crate::stats;
use crate::stats::distribution::{ChiSquaredTail, RightTail};
use crate::util::{self, Error, LengthMismatchSnafu, EmptyInputSnafu, InvalidSignificanceSnafu, DistributionSnafu};

pub mod report;

pub const DEFAULT_ALPHA: f64 = 0.05;

/// Counts per category, in category order. Never empty once inside a `TestInput`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencySample(Vec<u64>);

impl FrequencySample {
    pub fn counts(&self) -> &[u64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A validated pair of samples plus the significance level to test at.
///
/// The samples have equal, non-zero length, every expected count is positive
/// and `alpha` lies in (0, 1).
#[derive(Debug, Clone, PartialEq)]
pub struct TestInput {
    observed: FrequencySample,
    expected: FrequencySample,
    alpha: f64,
}

impl TestInput {
    pub fn new(observed: &[i64], expected: &[i64], alpha: f64) -> Result<TestInput, Error> {
        ensure!(!observed.is_empty(), EmptyInputSnafu { which: "observed" });
        ensure!(!expected.is_empty(), EmptyInputSnafu { which: "expected" });
        ensure!(observed.len() == expected.len(), LengthMismatchSnafu {
            observed: observed.len(),
            expected: expected.len(),
        });

        let expected = expected
            .iter()
            .enumerate()
            .map(|(index, &value)| match u64::try_from(value) {
                Ok(count) if count > 0 => Ok(count),
                _ => Err(Error::NonPositiveExpected { index, value }),
            })
            .collect::<Result<Vec<u64>, Error>>()?;
        let observed = observed
            .iter()
            .enumerate()
            .map(|(index, &value)| u64::try_from(value)
                .map_err(|_| Error::NegativeObserved { index, value }))
            .collect::<Result<Vec<u64>, Error>>()?;

        TestInput {
            observed: FrequencySample(observed),
            expected: FrequencySample(expected),
            alpha: DEFAULT_ALPHA,
        }.with_alpha(alpha)
    }

    pub fn with_alpha(self, alpha: f64) -> Result<TestInput, Error> {
        ensure!(alpha.is_finite() && alpha > 0f64 && alpha < 1f64,
            InvalidSignificanceSnafu { alpha });
        Ok(TestInput { alpha, ..self })
    }

    pub fn observed(&self) -> &FrequencySample {
        &self.observed
    }

    pub fn expected(&self) -> &FrequencySample {
        &self.expected
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryContribution {
    /// 1-based, as shown to the user
    pub group: usize,
    pub observed: u64,
    pub expected: u64,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TestResult {
    pub alpha: f64,
    pub statistic: f64,
    pub degrees_of_freedom: u64,
    pub p_value: f64,
    pub reject_null: bool,
    pub contributions: Vec<CategoryContribution>,
}

// Text straight from the two form fields. The significance level starts at
// DEFAULT_ALPHA; use `with_alpha` to change it.
pub fn parse_samples(observed_text: &str, expected_text: &str) -> Result<TestInput, Error> {
    let observed = util::parse_counts(observed_text, "observed")?;
    let expected = util::parse_counts(expected_text, "expected")?;
    TestInput::new(&observed, &expected, DEFAULT_ALPHA)
}

pub fn compute(input: &TestInput) -> Result<TestResult, Error> {
    compute_with(input, &ChiSquaredTail)
}

pub fn compute_with<D: RightTail + ?Sized>(input: &TestInput, dist: &D) -> Result<TestResult, Error> {
    let contributions: Vec<CategoryContribution> = input.observed.counts()
        .iter()
        .zip_eq(input.expected.counts())
        .enumerate()
        .map(|(i, (&o, &e))| {
            let value = stats::contribution(o as f64, e as f64);
            trace!(group = i + 1, observed = o, expected = e, value, "contribution");
            CategoryContribution { group: i + 1, observed: o, expected: e, value }
        })
        .collect();

    let statistic = stats::chi_sq(contributions
        .iter()
        .map(|c| (c.observed as f64, c.expected as f64)));
    let degrees_of_freedom = (contributions.len() - 1) as u64;

    let p_value = dist.right_tail_probability(statistic, degrees_of_freedom)?;
    ensure!(p_value.is_finite(), DistributionSnafu {
        degrees_of_freedom,
        reason: format!("tail probability {p_value} for statistic {statistic}"),
    });
    let p_value = p_value.clamp(0f64, 1f64);
    let reject_null = p_value < input.alpha;

    debug!(statistic, degrees_of_freedom, p_value, alpha = input.alpha, reject_null,
        "goodness of fit computed");

    Ok(TestResult {
        alpha: input.alpha,
        statistic,
        degrees_of_freedom,
        p_value,
        reject_null,
        contributions,
    })
}

pub fn run_goodness_of_fit(observed: &[i64], expected: &[i64], alpha: f64) -> Result<TestResult, Error> {
    let input = TestInput::new(observed, expected, alpha)?;
    compute(&input)
}
