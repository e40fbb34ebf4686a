use std::fmt;
use itertools::Itertools;

use crate::fit::TestResult;

/// Step-by-step walk through a finished test, the way it is shown to the user.
pub struct Explanation<'a> {
    result: &'a TestResult,
}

impl<'a> Explanation<'a> {
    pub fn new(result: &'a TestResult) -> Self {
        Self { result }
    }
}

impl fmt::Display for Explanation<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let result = self.result;

        writeln!(f, "Hypotheses")?;
        writeln!(f, "- Null Hypothesis (H₀): The observed data fits the expected distribution.")?;
        writeln!(f, "- Alternative Hypothesis (H₁): The observed data does not fit the expected distribution.")?;
        writeln!(f)?;
        writeln!(f, "Observed: {}", result.contributions.iter().map(|c| c.observed).join(", "))?;
        writeln!(f, "Expected: {}", result.contributions.iter().map(|c| c.expected).join(", "))?;
        writeln!(f)?;

        writeln!(f, "Step 1: Step-by-Step Calculation of Chi-Square Contributions")?;
        for c in &result.contributions {
            writeln!(f, "Group {}: ((Observed - Expected)² / Expected) = (({}-{})² / {}) = {:.4}",
                c.group, c.observed, c.expected, c.expected, c.value)?;
        }
        writeln!(f)?;

        writeln!(f, "Step 2: Chi-Square Statistic & P-Value")?;
        writeln!(f, "Chi-Square Statistic = Σ((O-E)²/E) = {:.4}", result.statistic)?;
        writeln!(f, "Degrees of Freedom = {}", result.degrees_of_freedom)?;
        writeln!(f, "P-Value = {:.4}", result.p_value)?;
        writeln!(f)?;

        writeln!(f, "Step 3: Hypothesis Decision")?;
        writeln!(f, "Significance Level (α) = {}", result.alpha)?;
        if result.reject_null {
            writeln!(f, "Reject Null Hypothesis (H₀): Observed data does NOT fit the expected distribution.")?;
            write!(f, "Therefore, we accept the Alternative Hypothesis (H₁).")
        } else {
            writeln!(f, "Fail to Reject Null Hypothesis (H₀): Observed data fits the expected distribution.")?;
            write!(f, "Therefore, the Null Hypothesis (H₀) is accepted.")
        }
    }
}

// Machine-readable rendering of the same result
pub fn to_json(result: &TestResult) -> serde_json::Result<String> {
    serde_json::to_string_pretty(result)
}

#[test]
fn test_explanation_fit() {
    let result = crate::fit::run_goodness_of_fit(&[50, 80, 120, 90, 60], &[60, 70, 110, 100, 60], 0.05).unwrap();
    let text = Explanation::new(&result).to_string();

    assert!(text.contains("Observed: 50, 80, 120, 90, 60\nExpected: 60, 70, 110, 100, 60\n"));
    assert!(text.contains("Group 1: ((Observed - Expected)² / Expected) = ((50-60)² / 60) = 1.6667\n"));
    assert!(text.contains("Group 5: ((Observed - Expected)² / Expected) = ((60-60)² / 60) = 0.0000\n"));
    assert!(text.contains("Chi-Square Statistic = Σ((O-E)²/E) = 5.0043\n"));
    assert!(text.contains("Degrees of Freedom = 4\n"));
    assert!(text.contains("P-Value = 0.2869\n"));
    assert!(text.contains("Significance Level (α) = 0.05\n"));
    assert!(text.ends_with("Therefore, the Null Hypothesis (H₀) is accepted."));
    assert!(!text.contains("does NOT fit"));
}

#[test]
fn test_explanation_reject() {
    let result = crate::fit::run_goodness_of_fit(&[10, 90], &[50, 50], 0.1).unwrap();
    let text = Explanation::new(&result).to_string();

    assert!(text.contains("Group 2: ((Observed - Expected)² / Expected) = ((90-50)² / 50) = 32.0000\n"));
    assert!(text.contains("Significance Level (α) = 0.1\n"));
    assert!(text.contains("Reject Null Hypothesis (H₀): Observed data does NOT fit the expected distribution.\n"));
    assert!(text.ends_with("Therefore, we accept the Alternative Hypothesis (H₁)."));
}

#[test]
fn test_to_json() {
    let result = crate::fit::run_goodness_of_fit(&[3, 5, 7], &[5, 5, 5], 0.05).unwrap();
    let json: serde_json::Value = serde_json::from_str(&to_json(&result).unwrap()).unwrap();

    assert_eq!(2, json["degrees_of_freedom"]);
    assert_eq!(false, json["reject_null"]);
    assert_eq!(0.05, json["alpha"]);
    assert_eq!(3, json["contributions"].as_array().unwrap().len());
    assert_eq!(7, json["contributions"][2]["observed"]);
    assert_eq!(3, json["contributions"][2]["group"]);
}
