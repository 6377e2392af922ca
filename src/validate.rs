//! Repair pass over generated test cases
//!
//! Every case leaving the generator should be executable as written. This
//! pass fills in what a template may have left empty and lengthens titles
//! too short to be meaningful in a report.

use crate::testcase::TestCase;
use serde::Serialize;

/// Titles shorter than this (in characters) are prefixed
pub const DEFAULT_MIN_TITLE_LENGTH: usize = 10;

pub const DEFAULT_STEPS: [&str; 2] = ["Execute test scenario", "Verify results"];
pub const DEFAULT_EXPECTED_RESULT: &str = "System behaves as expected";
pub const SHORT_TITLE_PREFIX: &str = "Test Case: ";

/// A problem found on a single test case
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Issue {
    MissingSteps,
    MissingExpectedResult,
    TitleTooShort,
}

/// Result of a validation pass
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationOutcome {
    /// Cases inspected
    pub checked: usize,
    /// Cases with at least one repair
    pub repaired: usize,
    /// (test case id, issue) in the order found
    pub issues: Vec<(String, Issue)>,
}

impl ValidationOutcome {
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Validate and repair test cases in place
pub fn validate_test_cases(cases: &mut [TestCase], min_title_length: usize) -> ValidationOutcome {
    let mut outcome = ValidationOutcome {
        checked: cases.len(),
        ..Default::default()
    };

    for case in cases.iter_mut() {
        let found = find_issues(case, min_title_length);
        if found.is_empty() {
            continue;
        }

        for issue in &found {
            repair(case, *issue);
            tracing::debug!(test_case = %case.id, issue = ?issue, "repaired test case");
            outcome.issues.push((case.id.clone(), *issue));
        }
        outcome.repaired += 1;
    }

    outcome
}

fn find_issues(case: &TestCase, min_title_length: usize) -> Vec<Issue> {
    let mut issues = Vec::new();
    if case.test_steps.is_empty() {
        issues.push(Issue::MissingSteps);
    }
    if case.expected_result.trim().is_empty() {
        issues.push(Issue::MissingExpectedResult);
    }
    if case.title.chars().count() < min_title_length {
        issues.push(Issue::TitleTooShort);
    }
    issues
}

fn repair(case: &mut TestCase, issue: Issue) {
    match issue {
        Issue::MissingSteps => {
            case.test_steps = DEFAULT_STEPS.iter().map(|s| s.to_string()).collect();
        }
        Issue::MissingExpectedResult => {
            case.expected_result = DEFAULT_EXPECTED_RESULT.to_string();
        }
        Issue::TitleTooShort => {
            case.title = format!("{}{}", SHORT_TITLE_PREFIX, case.title);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn case(id: &str, title: &str) -> TestCase {
        TestCase {
            id: id.into(),
            title: title.into(),
            test_steps: vec!["Do the thing".into()],
            expected_result: "It works".into(),
            ..TestCase::default()
        }
    }

    #[test]
    fn test_complete_case_is_untouched() {
        let mut cases = vec![case("T1", "Verify REQ001 - Valid scenario execution")];
        let before = cases.clone();

        let outcome = validate_test_cases(&mut cases, DEFAULT_MIN_TITLE_LENGTH);

        assert!(outcome.is_clean());
        assert_eq!(outcome.checked, 1);
        assert_eq!(cases, before);
    }

    #[test]
    fn test_repairs_every_issue() {
        let mut broken = case("T2", "Login");
        broken.test_steps.clear();
        broken.expected_result = "  ".into();
        let mut cases = vec![broken];

        let outcome = validate_test_cases(&mut cases, DEFAULT_MIN_TITLE_LENGTH);

        assert_eq!(outcome.repaired, 1);
        assert_eq!(
            outcome.issues,
            vec![
                ("T2".to_string(), Issue::MissingSteps),
                ("T2".to_string(), Issue::MissingExpectedResult),
                ("T2".to_string(), Issue::TitleTooShort),
            ]
        );
        assert_eq!(cases[0].test_steps, vec!["Execute test scenario", "Verify results"]);
        assert_eq!(cases[0].expected_result, "System behaves as expected");
        assert_eq!(cases[0].title, "Test Case: Login");
    }

    #[test]
    fn test_min_title_length_is_configurable() {
        let mut cases = vec![case("T3", "Short title")];
        validate_test_cases(&mut cases, 40);
        assert_eq!(cases[0].title, "Test Case: Short title");
    }

    #[test]
    fn test_repair_is_idempotent() {
        let mut cases = vec![case("T4", "Tiny")];
        validate_test_cases(&mut cases, DEFAULT_MIN_TITLE_LENGTH);
        let second = validate_test_cases(&mut cases, DEFAULT_MIN_TITLE_LENGTH);
        assert!(second.is_clean());
    }
}
