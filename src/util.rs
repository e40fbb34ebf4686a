use std::num::ParseIntError;
use snafu::{ensure, ResultExt, Snafu};

#[derive(Debug, Clone, PartialEq, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display("`{token}` is not an integer count"))]
    NonNumeric { token: String, source: ParseIntError },

    #[snafu(display("{observed} observed values but {expected} expected values"))]
    LengthMismatch { observed: usize, expected: usize },

    #[snafu(display("no {which} values given"))]
    EmptyInput { which: &'static str },

    #[snafu(display("expected value {value} for group {} must be positive", index + 1))]
    NonPositiveExpected { index: usize, value: i64 },

    #[snafu(display("observed value {value} for group {} is negative", index + 1))]
    NegativeObserved { index: usize, value: i64 },

    #[snafu(display("significance level {alpha} is outside (0, 1)"))]
    InvalidSignificance { alpha: f64 },

    #[snafu(display("chi-square tail with {degrees_of_freedom} degrees of freedom: {reason}"))]
    Distribution { degrees_of_freedom: u64, reason: String },
}

impl Error {
    // Text fit for showing to whoever typed the input. Parse failures share one
    // warning, the rest keep their own wording.
    pub fn user_message(&self) -> &'static str {
        match self {
            Error::LengthMismatch { .. } =>
                "Observed and Expected values must have the same number of elements.",
            Error::InvalidSignificance { .. } =>
                "Significance level must lie strictly between 0 and 1.",
            Error::Distribution { .. } =>
                "The p-value could not be computed for these values.",
            Error::NonNumeric { .. }
            | Error::EmptyInput { .. }
            | Error::NonPositiveExpected { .. }
            | Error::NegativeObserved { .. } =>
                "Please enter valid numeric values separated by commas (e.g., 50,80,120,90,60).",
        }
    }
}

#[test]
fn test_user_message() {
    let mismatch = Error::LengthMismatch { observed: 3, expected: 2 };
    assert_eq!(
        "Observed and Expected values must have the same number of elements.",
        mismatch.user_message());

    let empty = Error::EmptyInput { which: "observed" };
    let zero = Error::NonPositiveExpected { index: 0, value: 0 };
    assert_eq!(empty.user_message(), zero.user_message());
    assert!(empty.user_message().contains("valid numeric values"));
}

// Comma-separated integer counts, as typed into a form field. `which` names the
// field in errors.
pub fn parse_counts(text: &str, which: &'static str) -> Result<Vec<i64>, Error> {
    ensure!(!text.trim().is_empty(), EmptyInputSnafu { which });
    text.split(',')
        .map(str::trim)
        .map(|token| token.parse::<i64>().context(NonNumericSnafu { token }))
        .collect()
}

#[test]
fn test_parse_counts() {
    assert_eq!(Ok(vec![50, 80, 120, 90, 60]), parse_counts("50,80,120,90,60", "observed"));
    assert_eq!(Ok(vec![1, 2, -3]), parse_counts(" 1 ,2,  -3 ", "observed"));
    assert_eq!(Ok(vec![7]), parse_counts("+7", "observed"));
}

#[test]
fn test_parse_counts_rejects() {
    assert_eq!(Err(Error::EmptyInput { which: "expected" }), parse_counts("", "expected"));
    assert_eq!(Err(Error::EmptyInput { which: "expected" }), parse_counts("   ", "expected"));

    for (case, bad) in [("50,abc,120", "abc"), ("1,2.5", "2.5"), ("1,,2", ""), ("1,2,", "")] {
        match parse_counts(case, "observed") {
            Err(Error::NonNumeric { token, .. }) => assert_eq!(bad, token),
            other => panic!("{case:?} parsed as {other:?}"),
        }
    }
}
