//! Test generation: expand a requirement analysis into test cases
//!
//! For each requirement, in fixed order:
//! - Positive cases (one base case plus domain scenario sets)
//! - Negative cases (one per error scenario, or generic fallbacks)
//! - Boundary cases (one per boundary condition)
//! - Security, performance and usability cases when the analysis calls for them
//! - Integration cases (one per integration point)
//!
//! Test ids come from an [`IdSequence`] owned by the caller, so a batch
//! stays collision-free without any generator state.

mod categories;
mod domain;

use crate::analysis::{RequirementAnalysis, RequirementType};
use crate::requirement::{Level, Requirement};
use crate::testcase::{assess_risk_level, estimate_test_time, IdSequence, TestCase, TestType};

/// Generic negative scenarios used when the analysis found none
pub const FALLBACK_NEGATIVE_SCENARIOS: [&str; 3] = [
    "Invalid input data provided",
    "Required fields left empty",
    "Unauthorized access attempted",
];

const DESCRIPTION_EXCERPT_CHARS: usize = 100;

/// Generate the test cases for one requirement
pub fn generate_test_cases(
    requirement: &Requirement,
    analysis: &RequirementAnalysis,
    ids: &mut IdSequence,
) -> Vec<TestCase> {
    TestCaseGenerator::new().generate(requirement, analysis, ids)
}

/// Template-driven test case generator
#[derive(Debug, Clone, Copy, Default)]
pub struct TestCaseGenerator;

impl TestCaseGenerator {
    pub fn new() -> Self {
        Self
    }

    pub fn generate(
        &self,
        requirement: &Requirement,
        analysis: &RequirementAnalysis,
        ids: &mut IdSequence,
    ) -> Vec<TestCase> {
        let scope = RequirementScope::new(requirement, analysis);
        let mut cases = Vec::new();

        cases.extend(scope.positive_cases(ids));
        cases.extend(scope.negative_cases(ids));
        cases.extend(scope.boundary_cases(ids));
        cases.extend(categories::security_cases(&scope, ids));
        cases.extend(categories::performance_cases(&scope, ids));
        if analysis.requirement_type == RequirementType::Usability {
            cases.extend(categories::usability_cases(&scope, ids));
        }
        cases.extend(categories::integration_cases(&scope, ids));

        tracing::debug!(
            requirement = %requirement.id,
            cases = cases.len(),
            "generated test cases"
        );

        cases
    }
}

/// Requirement plus its analysis, with the shared template helpers
pub(crate) struct RequirementScope<'a> {
    pub req: &'a Requirement,
    pub analysis: &'a RequirementAnalysis,
    text_lower: String,
}

impl<'a> RequirementScope<'a> {
    fn new(req: &'a Requirement, analysis: &'a RequirementAnalysis) -> Self {
        Self {
            req,
            analysis,
            text_lower: req.text.to_lowercase(),
        }
    }

    pub fn mentions(&self, keyword: &str) -> bool {
        self.text_lower.contains(keyword)
    }

    pub fn mentions_any(&self, keywords: &[&str]) -> bool {
        keywords.iter().any(|k| self.mentions(k))
    }

    pub fn title(&self, suffix: &str) -> String {
        format!("Verify {} - {}", self.req.id, suffix)
    }

    /// Skeleton case carrying the requirement back-reference and a fresh id
    pub fn draft(&self, ids: &mut IdSequence, test_type: TestType) -> TestCase {
        TestCase {
            id: ids.next_id(&self.req.id, test_type),
            test_type,
            requirement_id: self.req.id.clone(),
            priority: self.req.priority,
            risk_level: assess_risk_level(self.analysis),
            estimated_time: self.estimate(test_type),
            ..TestCase::default()
        }
    }

    pub fn estimate(&self, test_type: TestType) -> u32 {
        estimate_test_time(
            self.analysis.complexity,
            test_type,
            self.analysis.has_integration_points(),
        )
    }

    pub fn preconditions(&self, test_type: TestType) -> Vec<String> {
        let mut preconditions = vec!["System is operational and accessible".to_string()];

        if self.mentions_any(&["user", "login"]) {
            preconditions.push("Valid user account is available".into());
        }
        if self.mentions_any(&["database", "data"]) {
            preconditions.push("Database is accessible and contains test data".into());
        }
        if self.analysis.has_integration_points() {
            preconditions.push("External systems/integrations are available".into());
        }
        match test_type {
            TestType::Negative => {
                preconditions.push("Error handling mechanisms are in place".into())
            }
            TestType::Performance => {
                preconditions.push("Performance monitoring tools are configured".into())
            }
            _ => {}
        }

        preconditions
    }

    pub fn tags(&self, test_type: TestType) -> Vec<String> {
        let mut tags = Vec::new();
        push_unique(&mut tags, self.req.id.to_lowercase());
        push_unique(&mut tags, test_type.as_str());
        push_unique(&mut tags, self.analysis.requirement_type.as_str());

        if self.analysis.has_integration_points() {
            push_unique(&mut tags, "integration");
        }
        match self.analysis.requirement_type {
            RequirementType::Security => push_unique(&mut tags, "security"),
            RequirementType::Performance => push_unique(&mut tags, "performance"),
            _ => {}
        }

        tags
    }

    fn positive_steps(&self) -> Vec<String> {
        let mut steps: Vec<String> = [
            "Navigate to the relevant functionality",
            "Prepare valid test data",
            "Execute the required operation",
            "Verify system response",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();

        // Extra checks go in just before the final verification step
        if self.mentions("validation") {
            let at = steps.len() - 1;
            steps.insert(at, "Validate input data format and constraints".into());
        }
        if self.analysis.has_integration_points() {
            let at = steps.len() - 1;
            steps.insert(at, "Verify integration with external systems".into());
        }

        steps
    }

    // ------------------------------------------------------------------------
    // Positive
    // ------------------------------------------------------------------------

    fn positive_cases(&self, ids: &mut IdSequence) -> Vec<TestCase> {
        let mut cases = vec![TestCase {
            title: self.title("Valid scenario execution"),
            description: format!(
                "Test successful execution of requirement: {}",
                excerpt(&self.req.text, DESCRIPTION_EXCERPT_CHARS)
            ),
            preconditions: self.preconditions(TestType::Positive),
            test_steps: self.positive_steps(),
            expected_result: format!(
                "System successfully executes the functionality as specified in {} without errors",
                self.req.id
            ),
            tags: self.tags(TestType::Positive),
            test_data: self.analysis.test_data_needs.clone(),
            ..self.draft(ids, TestType::Positive)
        }];

        cases.extend(domain::domain_cases(self, ids));
        cases
    }

    // ------------------------------------------------------------------------
    // Negative
    // ------------------------------------------------------------------------

    fn negative_cases(&self, ids: &mut IdSequence) -> Vec<TestCase> {
        if self.analysis.error_scenarios.is_empty() {
            return FALLBACK_NEGATIVE_SCENARIOS
                .iter()
                .map(|scenario| TestCase {
                    priority: Level::Medium,
                    risk_level: Level::Medium,
                    estimated_time: 20,
                    test_data: Vec::new(),
                    ..self.negative_case(ids, scenario)
                })
                .collect();
        }

        self.analysis
            .error_scenarios
            .iter()
            .map(|scenario| self.negative_case(ids, scenario))
            .collect()
    }

    fn negative_case(&self, ids: &mut IdSequence, scenario: &str) -> TestCase {
        let lower = scenario.to_lowercase();
        TestCase {
            title: self.title(scenario),
            description: format!("Test system behavior when {}", lower),
            preconditions: self.preconditions(TestType::Negative),
            test_steps: vec![
                "Navigate to the relevant functionality".into(),
                format!("Prepare test data to trigger: {}", scenario),
                "Execute the operation with invalid/error conditions".into(),
                "Observe system behavior and error handling".into(),
            ],
            expected_result: format!(
                "System properly handles {} with appropriate error message and graceful degradation",
                lower
            ),
            tags: self.tags(TestType::Negative),
            test_data: error_test_data(scenario),
            ..self.draft(ids, TestType::Negative)
        }
    }

    // ------------------------------------------------------------------------
    // Boundary
    // ------------------------------------------------------------------------

    fn boundary_cases(&self, ids: &mut IdSequence) -> Vec<TestCase> {
        self.analysis
            .boundary_conditions
            .iter()
            .map(|boundary| TestCase {
                title: self.title(boundary),
                description: format!("Test boundary condition: {}", boundary),
                preconditions: self.preconditions(TestType::Boundary),
                test_steps: vec![
                    "Navigate to the relevant functionality".into(),
                    format!("Prepare test data for boundary condition: {}", boundary),
                    "Execute the operation with boundary values".into(),
                    "Verify system behavior at the boundary".into(),
                    "Check for proper validation and handling".into(),
                ],
                expected_result: format!(
                    "System properly handles boundary condition ({}) with correct validation and behavior",
                    boundary
                ),
                tags: self.tags(TestType::Boundary),
                ..self.draft(ids, TestType::Boundary)
            })
            .collect()
    }
}

/// Concrete inputs for an error scenario
pub fn error_test_data(scenario: &str) -> Vec<String> {
    let lower = scenario.to_lowercase();
    let data: &[&str] = if lower.contains("invalid credentials") {
        &["wrong_username", "incorrect_password"]
    } else if lower.contains("invalid email") {
        &["invalid@", "@domain.com", "not-an-email"]
    } else if lower.contains("file too large") {
        &["large_file.zip (>10MB)"]
    } else {
        &["invalid_input", "malformed_data"]
    };
    data.iter().map(|s| s.to_string()).collect()
}

/// First `max_chars` characters, with an ellipsis when cut
fn excerpt(text: &str, max_chars: usize) -> String {
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(max_chars).collect();
    if chars.next().is_some() {
        format!("{}...", head)
    } else {
        head
    }
}

fn push_unique(tags: &mut Vec<String>, tag: impl Into<String>) {
    let tag = tag.into();
    if !tags.contains(&tag) {
        tags.push(tag);
    }
}

pub(crate) fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyze;

    fn cases_for(id: &str, text: &str) -> Vec<TestCase> {
        let req = Requirement::new(id, text).unwrap();
        let analysis = analyze(&req);
        generate_test_cases(&req, &analysis, &mut IdSequence::new())
    }

    #[test]
    fn test_plain_requirement_gets_positive_and_fallback_negatives() {
        let cases = cases_for("REQ100", "Shopping cart keeps items between visits");

        assert_eq!(cases.len(), 4);
        assert_eq!(cases[0].test_type, TestType::Positive);
        assert_eq!(cases[0].id, "REQ100_POS_001");
        assert_eq!(cases[0].title, "Verify REQ100 - Valid scenario execution");

        let negatives: Vec<_> = cases
            .iter()
            .filter(|c| c.test_type == TestType::Negative)
            .collect();
        assert_eq!(negatives.len(), 3);
        assert_eq!(negatives[0].title, "Verify REQ100 - Invalid input data provided");
        assert_eq!(negatives[0].estimated_time, 20);
        assert_eq!(negatives[0].priority, Level::Medium);
        assert_eq!(negatives[2].id, "REQ100_NEG_004");
    }

    #[test]
    fn test_negative_case_per_error_scenario() {
        let cases = cases_for("REQ101", "Users upload a profile picture file");
        let negatives: Vec<_> = cases
            .iter()
            .filter(|c| c.test_type == TestType::Negative)
            .collect();

        assert_eq!(negatives.len(), 4);
        assert_eq!(negatives[0].title, "Verify REQ101 - File too large");
        assert_eq!(negatives[0].test_data, vec!["large_file.zip (>10MB)"]);
        assert!(negatives[0]
            .preconditions
            .contains(&"Error handling mechanisms are in place".to_string()));
    }

    #[test]
    fn test_boundary_case_per_condition() {
        let cases = cases_for("REQ102", "Show at most 20 items");
        let titles: Vec<_> = cases
            .iter()
            .filter(|c| c.test_type == TestType::Boundary)
            .map(|c| c.title.as_str())
            .collect();

        assert_eq!(
            titles,
            vec![
                "Verify REQ102 - Test with value 19 (below limit)",
                "Verify REQ102 - Test with value 20 (at limit)",
                "Verify REQ102 - Test with value 21 (above limit)",
            ]
        );
    }

    #[test]
    fn test_positive_steps_insert_before_final_verification() {
        let cases = cases_for("REQ103", "Form validation calls the address service");
        let steps = &cases[0].test_steps;

        assert_eq!(steps.len(), 6);
        assert_eq!(steps[3], "Validate input data format and constraints");
        assert_eq!(steps[4], "Verify integration with external systems");
        assert_eq!(steps[5], "Verify system response");
    }

    #[test]
    fn test_usability_case_only_for_usability_requirements() {
        let ui = cases_for("REQ104", "The layout adapts to mobile screens");
        assert!(ui.iter().any(|c| c.test_type == TestType::Usability));

        let other = cases_for("REQ105", "Shopping cart keeps items between visits");
        assert!(!other.iter().any(|c| c.test_type == TestType::Usability));
    }

    #[test]
    fn test_ids_continue_across_requirements() {
        let mut ids = IdSequence::new();
        let a = Requirement::new("A1", "Shopping cart keeps items").unwrap();
        let b = Requirement::new("B1", "Shopping cart keeps items").unwrap();

        let first = generate_test_cases(&a, &analyze(&a), &mut ids);
        let second = generate_test_cases(&b, &analyze(&b), &mut ids);

        assert_eq!(first[0].id, "A1_POS_001");
        assert_eq!(second[0].id, format!("B1_POS_{:03}", first.len() + 1));
    }

    #[test]
    fn test_tags_have_no_duplicates() {
        let cases = cases_for("REQ106", "Password security rules");
        for case in &cases {
            let mut seen = std::collections::HashSet::new();
            assert!(case.tags.iter().all(|t| seen.insert(t)), "{:?}", case.tags);
        }
    }

    #[test]
    fn test_excerpt() {
        assert_eq!(excerpt("short", 10), "short");
        assert_eq!(excerpt("abcdef", 3), "abc...");
        assert_eq!(excerpt("héllo wörld", 5), "héllo...");
    }

    #[test]
    fn test_error_test_data_fallback() {
        assert_eq!(
            error_test_data("Session expired"),
            vec!["invalid_input", "malformed_data"]
        );
        assert_eq!(
            error_test_data("Invalid credentials"),
            vec!["wrong_username", "incorrect_password"]
        );
    }
}
