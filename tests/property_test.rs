//! Property-based tests for the generation pipeline
//!
//! Uses proptest to generate requirement text from keyword fragments

use proptest::prelude::*;
use reqgen::*;

const FRAGMENTS: &[&str] = &[
    "users",
    "login",
    "password",
    "email",
    "search",
    "upload a file",
    "database",
    "payment api",
    "fast response time",
    "under load",
    "mobile layout",
    "approval workflow",
    "at most 20",
    "max 5 attempts",
    "simple list",
    "length",
    "notification",
    "secure session token",
];

fn requirement_text() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(FRAGMENTS), 1..6).prop_map(|parts| parts.join(" "))
}

fn requirements() -> impl Strategy<Value = Vec<Requirement>> {
    prop::collection::vec(requirement_text(), 0..5).prop_map(|texts| {
        texts
            .into_iter()
            .enumerate()
            .map(|(i, text)| {
                Requirement::new(format!("REQ{:03}", i + 1), text).expect("non-empty text")
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn test_analysis_is_deterministic(text in requirement_text()) {
        let req = Requirement::new("R1", text).unwrap();
        prop_assert_eq!(analyze(&req), analyze(&req));
    }

    #[test]
    fn test_at_least_three_testing_approaches(text in requirement_text()) {
        let req = Requirement::new("R1", text).unwrap();
        let analysis = analyze(&req);
        prop_assert!(analysis.testing_approaches.len() >= 3);
    }

    #[test]
    fn test_security_keywords_win(text in requirement_text()) {
        let text = format!("{} password", text);
        prop_assert_eq!(
            analysis::determine_requirement_type(&text),
            RequirementType::Security
        );
    }

    #[test]
    fn test_dedup_is_idempotent(reqs in requirements()) {
        let cases = Pipeline::default().run(&reqs).test_cases;
        let again = deduplicate(cases.clone());
        prop_assert_eq!(again, cases);
    }

    #[test]
    fn test_prioritize_is_sorted(reqs in requirements()) {
        let cases = Pipeline::default().run(&reqs).test_cases;
        for pair in cases.windows(2) {
            let a = (pair[0].priority.rank(), pair[0].test_type.rank());
            let b = (pair[1].priority.rank(), pair[1].test_type.rank());
            prop_assert!(a <= b);
        }
    }

    #[test]
    fn test_every_case_is_complete(reqs in requirements()) {
        let suite = Pipeline::default().run(&reqs);
        for case in &suite.test_cases {
            prop_assert!(!case.test_steps.is_empty());
            prop_assert!(!case.expected_result.trim().is_empty());
            prop_assert!(case.estimated_time >= testcase::MIN_ESTIMATED_MINUTES);
            let trace = format!("traces_to_{}", case.requirement_id);
            prop_assert_eq!(case.tags.iter().filter(|t| **t == trace).count(), 1);
        }
    }

    #[test]
    fn test_id_sequence_never_repeats(reqs in requirements()) {
        let cases = Pipeline::default().run(&reqs).test_cases;
        let mut ids: Vec<_> = cases.iter().map(|c| c.id.clone()).collect();
        let total = ids.len();
        ids.sort();
        ids.dedup();
        prop_assert_eq!(ids.len(), total);
    }
}
