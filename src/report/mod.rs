//! Text reports
//!
//! The suite summary is rendered through an embedded MiniJinja template.
//! Per-case listings are plain `format!` output.

pub mod context;
pub mod filters;

use crate::error::Result;
use crate::pipeline::TestSuite;
use crate::testcase::TestCase;
use minijinja::Environment;
use std::sync::OnceLock;

const SUMMARY_TEMPLATE: &str = "summary.jinja";

// Embedded templates (compiled into binary)
mod embedded {
    pub const SUMMARY: &str = include_str!("../../templates/summary.jinja");
}

/// Template engine singleton
static ENGINE: OnceLock<Environment<'static>> = OnceLock::new();

fn init_engine() -> Environment<'static> {
    let mut env = Environment::new();
    filters::register_filters(&mut env);
    env.add_template(SUMMARY_TEMPLATE, embedded::SUMMARY)
        .expect("Failed to load summary template");
    env
}

/// Get the global template engine
pub fn engine() -> &'static Environment<'static> {
    ENGINE.get_or_init(init_engine)
}

/// Render the suite summary
pub fn render_summary(suite: &TestSuite) -> Result<String> {
    let template = engine().get_template(SUMMARY_TEMPLATE)?;
    let ctx = context::SummaryContext::from_suite(suite);
    Ok(template.render(&ctx)?)
}

/// Summary followed by every test case
pub fn render_full(suite: &TestSuite) -> Result<String> {
    let mut out = render_summary(suite)?;
    if !suite.test_cases.is_empty() {
        out.push_str("\nTest cases\n");
        out.push_str(&"-".repeat(60));
        out.push('\n');
        for case in &suite.test_cases {
            out.push_str(&case_to_report(case));
            out.push('\n');
        }
    }
    Ok(out)
}

/// One test case as indented text
pub fn case_to_report(case: &TestCase) -> String {
    let mut out = format!(
        "[{}] {}\n  type: {}  priority: {}  risk: {}  est: {} min\n",
        case.id, case.title, case.test_type, case.priority, case.risk_level, case.estimated_time
    );

    if !case.preconditions.is_empty() {
        out.push_str("  preconditions:\n");
        for p in &case.preconditions {
            out.push_str(&format!("    - {}\n", p));
        }
    }

    out.push_str("  steps:\n");
    for (i, step) in case.test_steps.iter().enumerate() {
        out.push_str(&format!("    {}. {}\n", i + 1, step));
    }
    out.push_str(&format!("  expected: {}\n", case.expected_result));

    if !case.test_data.is_empty() {
        out.push_str(&format!("  data: {}\n", case.test_data.join(", ")));
    }
    if !case.tags.is_empty() {
        out.push_str(&format!("  tags: {}\n", case.tags.join(", ")));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::Pipeline;
    use crate::requirement::Requirement;

    #[test]
    fn test_summary_for_empty_suite() {
        let out = render_summary(&Pipeline::default().run(&[])).unwrap();
        assert!(out.contains("Test Case Generation Summary"));
        assert!(out.contains("Requirements analyzed: 0"));
        assert!(out.contains("Average per requirement: 0.00"));
        assert!(!out.contains("Requirements:\n"));
    }

    #[test]
    fn test_summary_lists_requirements_and_breakdowns() {
        let reqs = vec![
            Requirement::new("REQ001", "Users can login with a password").unwrap(),
            Requirement::new("REQ002", "Show a simple list of orders").unwrap(),
        ];
        let suite = Pipeline::default().run(&reqs);
        let out = render_summary(&suite).unwrap();

        assert!(out.contains("Requirements analyzed: 2"));
        assert!(out.contains("Test types:"));
        assert!(out.contains("REQ001"));
        assert!(out.contains("security"));
        assert!(out.contains("REQ002"));
    }

    #[test]
    fn test_full_report_lists_steps() {
        let suite =
            Pipeline::default().run(&[Requirement::new("R1", "Search orders by customer").unwrap()]);
        let out = render_full(&suite).unwrap();
        assert!(out.contains("[R1_POS_001] Verify R1 - Valid scenario execution"));
        assert!(out.contains("    1. Navigate to the relevant functionality"));
        assert!(out.contains("traces_to_R1"));
    }
}
