//! Fixed-template security, performance, usability and integration cases

use super::{strings, RequirementScope};
use crate::requirement::Level;
use crate::testcase::{IdSequence, TestCase, TestType};

pub(super) fn security_cases(scope: &RequirementScope<'_>, ids: &mut IdSequence) -> Vec<TestCase> {
    let needs = scope.analysis.security_considerations;
    let mut cases = Vec::new();

    if needs.authentication_testing {
        cases.push(TestCase {
            title: scope.title("Authentication security"),
            description: "Test authentication security mechanisms".into(),
            preconditions: strings(&["System is accessible", "Test accounts are available"]),
            test_steps: strings(&[
                "Attempt login with valid credentials",
                "Verify secure session establishment",
                "Test session timeout behavior",
                "Verify logout functionality",
            ]),
            expected_result:
                "Authentication mechanisms work securely without exposing sensitive data".into(),
            priority: Level::High,
            tags: strings(&["security", "authentication"]),
            risk_level: Level::High,
            estimated_time: 45,
            ..scope.draft(ids, TestType::Security)
        });
    }

    if needs.injection_testing {
        cases.push(TestCase {
            title: scope.title("Input validation security"),
            description: "Test protection against injection attacks".into(),
            preconditions: strings(&["Application is accessible", "Input fields are available"]),
            test_steps: strings(&[
                "Enter SQL injection payloads in input fields",
                "Submit malicious script tags",
                "Test with special characters and escape sequences",
                "Verify input sanitization",
            ]),
            expected_result: "System properly validates and sanitizes all inputs, preventing injection attacks".into(),
            priority: Level::High,
            tags: strings(&["security", "injection", "validation"]),
            risk_level: Level::High,
            estimated_time: 60,
            test_data: strings(&[
                "' OR '1'='1",
                "<script>alert('xss')</script>",
                "'; DROP TABLE users; --",
            ]),
            ..scope.draft(ids, TestType::Security)
        });
    }

    cases
}

pub(super) fn performance_cases(
    scope: &RequirementScope<'_>,
    ids: &mut IdSequence,
) -> Vec<TestCase> {
    let needs = scope.analysis.performance_considerations;
    let mut cases = Vec::new();

    if needs.response_time_testing {
        cases.push(TestCase {
            title: scope.title("Response time performance"),
            description: "Test system response time under normal conditions".into(),
            preconditions: strings(&["System is running", "Performance monitoring tools available"]),
            test_steps: strings(&[
                "Execute the functionality with standard input",
                "Measure response time",
                "Record performance metrics",
                "Compare against performance requirements",
            ]),
            expected_result: "System responds within acceptable time limits".into(),
            priority: Level::High,
            tags: strings(&["performance", "response_time"]),
            risk_level: Level::Medium,
            estimated_time: 30,
            ..scope.draft(ids, TestType::Performance)
        });
    }

    if needs.load_testing {
        cases.push(TestCase {
            title: scope.title("Load performance"),
            description: "Test system behavior under expected load".into(),
            preconditions: strings(&[
                "Load testing environment set up",
                "Performance baseline established",
            ]),
            test_steps: strings(&[
                "Configure load testing parameters",
                "Execute functionality with multiple concurrent users",
                "Monitor system resources and response times",
                "Analyze performance degradation",
            ]),
            expected_result: "System maintains acceptable performance under expected load".into(),
            priority: Level::High,
            tags: strings(&["performance", "load_testing", "scalability"]),
            risk_level: Level::Medium,
            estimated_time: 90,
            ..scope.draft(ids, TestType::Performance)
        });
    }

    cases
}

pub(super) fn usability_cases(scope: &RequirementScope<'_>, ids: &mut IdSequence) -> Vec<TestCase> {
    vec![TestCase {
        title: scope.title("User interface usability"),
        description: "Test user interface for usability and user experience".into(),
        preconditions: strings(&["Application is accessible", "Different user roles available"]),
        test_steps: strings(&[
            "Navigate to the relevant interface",
            "Test interface responsiveness",
            "Verify accessibility compliance",
            "Test with different screen resolutions",
            "Evaluate user experience flow",
        ]),
        expected_result: "Interface is intuitive, accessible, and provides good user experience"
            .into(),
        priority: Level::Medium,
        tags: strings(&["usability", "ui", "ux", "accessibility"]),
        risk_level: Level::Low,
        estimated_time: 45,
        ..scope.draft(ids, TestType::Usability)
    }]
}

pub(super) fn integration_cases(
    scope: &RequirementScope<'_>,
    ids: &mut IdSequence,
) -> Vec<TestCase> {
    scope
        .analysis
        .integration_points
        .iter()
        .map(|point| TestCase {
            title: scope.title(&format!("{} integration", point)),
            description: format!("Test integration with {}", point),
            preconditions: vec![
                format!("{} is available and accessible", point),
                "Integration credentials configured".into(),
            ],
            test_steps: vec![
                format!("Initiate connection to {}", point),
                "Send test data/request".into(),
                "Verify successful communication".into(),
                "Validate response/data exchange".into(),
                "Test error handling for integration failures".into(),
            ],
            expected_result: format!(
                "Successful integration with {}, proper data exchange and error handling",
                point
            ),
            priority: Level::High,
            tags: vec![
                "integration".into(),
                point.to_lowercase().replace(' ', "_"),
            ],
            risk_level: Level::High,
            estimated_time: 60,
            ..scope.draft(ids, TestType::Integration)
        })
        .collect()
}
