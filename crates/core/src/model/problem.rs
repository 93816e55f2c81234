use serde::{Deserialize, Serialize};
use std::fmt;

use crate::model::Operator;

/// A single practice problem inside a batch.
///
/// Solve metadata is recorded exactly once, on the first correct answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Problem {
    left: i64,
    right: i64,
    operator: Operator,
    passed: bool,
    solved_at_ms: Option<u64>,
    step_ms: Option<u64>,
}

impl Problem {
    #[must_use]
    pub fn new(left: i64, right: i64, operator: Operator) -> Self {
        Self {
            left,
            right,
            operator,
            passed: false,
            solved_at_ms: None,
            step_ms: None,
        }
    }

    #[must_use]
    pub fn left(&self) -> i64 {
        self.left
    }

    #[must_use]
    pub fn right(&self) -> i64 {
        self.right
    }

    #[must_use]
    pub fn operator(&self) -> Operator {
        self.operator
    }

    #[must_use]
    pub fn passed(&self) -> bool {
        self.passed
    }

    /// Stopwatch reading at the moment this problem was solved.
    #[must_use]
    pub fn solved_at_ms(&self) -> Option<u64> {
        self.solved_at_ms
    }

    /// Time spent since the previous solve (or since the batch started).
    #[must_use]
    pub fn step_ms(&self) -> Option<u64> {
        self.step_ms
    }

    /// The exact expected result.
    #[must_use]
    pub fn expected(&self) -> f64 {
        self.operator.apply(self.left, self.right)
    }

    /// False when the expected result is non-finite (division by zero).
    #[must_use]
    pub fn is_solvable(&self) -> bool {
        self.expected().is_finite()
    }

    /// Judges a submitted value against the expected result.
    ///
    /// Both sides are compared by magnitude at two decimal places; typed
    /// answers carry no sign, so `2 - 5` accepts `3`.
    #[must_use]
    pub fn check(&self, value: f64) -> bool {
        let expected = self.expected();
        if !expected.is_finite() || !value.is_finite() {
            return false;
        }
        // Rounded in f64 so huge values never collapse onto a saturated integer.
        (value.abs() * 100.0).round() == (expected.abs() * 100.0).round()
    }

    /// Display form of the answer, with the sign restored for negative
    /// results and two decimals for non-integral quotients.
    #[must_use]
    pub fn answer_label(&self) -> String {
        let expected = self.expected();
        if !expected.is_finite() {
            return "-".to_string();
        }
        let cents = hundredths(expected);
        let sign = if cents < 0 { "-" } else { "" };
        let (whole, frac) = (cents.abs() / 100, cents.abs() % 100);
        if frac == 0 {
            format!("{sign}{whole}")
        } else {
            format!("{sign}{whole}.{frac:02}")
        }
    }

    /// Marks the problem as solved with its timing metadata.
    pub fn record_solve(&mut self, solved_at_ms: u64, step_ms: u64) {
        self.passed = true;
        self.solved_at_ms = Some(solved_at_ms);
        self.step_ms = Some(step_ms);
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} =", self.left, self.operator, self.right)
    }
}

#[allow(clippy::cast_possible_truncation)]
fn hundredths(value: f64) -> i64 {
    (value * 100.0).round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_operators_accept_expected_value() {
        for op in [Operator::Add, Operator::Subtract, Operator::Multiply] {
            for (l, r) in [(0, 0), (3, 9), (12, 4), (-7, 2)] {
                let problem = Problem::new(l, r, op);
                assert!(problem.check(problem.expected()), "{problem}");
            }
        }
    }

    #[test]
    fn division_tolerates_two_decimals() {
        let problem = Problem::new(1, 3, Operator::Divide);
        assert!(problem.check(0.33));
        assert!(!problem.check(0.3));
        assert!(!problem.check(0.34));

        let problem = Problem::new(2, 3, Operator::Divide);
        assert!(problem.check(0.67));
    }

    #[test]
    fn negative_results_match_by_magnitude() {
        let problem = Problem::new(2, 5, Operator::Subtract);
        assert!(problem.check(3.0));
        assert!(problem.check(-3.0));
        assert_eq!(problem.answer_label(), "-3");
    }

    #[test]
    fn large_results_still_distinguish_wrong_answers() {
        let problem = Problem::new(4_000_000_000_000_000_000, 1, Operator::Add);
        assert!(!problem.check(1e17));
        assert!(problem.check(problem.expected()));

        let problem = Problem::new(999_999, 999_999, Operator::Multiply);
        assert!(problem.check(999_998_000_001.0));
        assert!(!problem.check(999_998_000_002.0));
    }

    #[test]
    fn division_by_zero_never_matches() {
        let problem = Problem::new(4, 0, Operator::Divide);
        assert!(!problem.is_solvable());
        assert!(!problem.check(0.0));
        assert!(!problem.check(f64::INFINITY));
    }

    #[test]
    fn display_uses_readable_glyphs() {
        assert_eq!(Problem::new(6, 3, Operator::Divide).to_string(), "6 ÷ 3 =");
        assert_eq!(Problem::new(6, 3, Operator::Multiply).to_string(), "6 × 3 =");
        assert_eq!(Problem::new(1, 3, Operator::Divide).answer_label(), "0.33");
        assert_eq!(Problem::new(5, 8, Operator::Divide).answer_label(), "0.63");
        assert_eq!(Problem::new(-9, 2, Operator::Divide).answer_label(), "-4.50");
    }

    #[test]
    fn record_solve_sets_metadata() {
        let mut problem = Problem::new(1, 1, Operator::Add);
        problem.record_solve(120, 40);
        assert!(problem.passed());
        assert_eq!(problem.solved_at_ms(), Some(120));
        assert_eq!(problem.step_ms(), Some(40));
    }
}
