//! Test case types: the output data model

use crate::analysis::RequirementAnalysis;
use crate::requirement::Level;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Minimum estimated execution time in minutes
pub const MIN_ESTIMATED_MINUTES: u32 = 15;

/// Category of a generated test case
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum TestType {
    Positive,
    Negative,
    Boundary,
    EdgeCase,
    Integration,
    Security,
    Performance,
    Usability,
}

impl TestType {
    pub const ALL: [TestType; 8] = [
        TestType::Positive,
        TestType::Negative,
        TestType::Boundary,
        TestType::EdgeCase,
        TestType::Integration,
        TestType::Security,
        TestType::Performance,
        TestType::Usability,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TestType::Positive => "positive",
            TestType::Negative => "negative",
            TestType::Boundary => "boundary",
            TestType::EdgeCase => "edge_case",
            TestType::Integration => "integration",
            TestType::Security => "security",
            TestType::Performance => "performance",
            TestType::Usability => "usability",
        }
    }

    /// Segment used in generated test ids
    pub fn id_code(self) -> &'static str {
        match self {
            TestType::Positive => "POS",
            TestType::Negative => "NEG",
            TestType::Boundary => "BND",
            TestType::EdgeCase => "EDGE",
            TestType::Integration => "INT",
            TestType::Security => "SEC",
            TestType::Performance => "PERF",
            TestType::Usability => "USA",
        }
    }

    /// Execution order within a priority band
    pub fn rank(self) -> u8 {
        match self {
            TestType::Positive => 1,
            TestType::Security => 2,
            TestType::Negative => 3,
            TestType::Boundary => 4,
            TestType::Performance => 5,
            TestType::Integration => 6,
            TestType::Usability => 7,
            TestType::EdgeCase => 8,
        }
    }
}

impl fmt::Display for TestType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A generated test case
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[schemars(title = "Test Case", description = "A generated, traceable test specification")]
pub struct TestCase {
    /// `{requirement_id}_{CATEGORY}_{sequence:03}`
    pub id: String,
    pub title: String,
    pub description: String,
    pub test_type: TestType,
    /// Ordered preconditions
    pub preconditions: Vec<String>,
    /// Ordered steps
    pub test_steps: Vec<String>,
    pub expected_result: String,
    pub priority: Level,
    pub tags: Vec<String>,
    pub risk_level: Level,
    /// Originating requirement (lookup only)
    pub requirement_id: String,
    /// Stored as given; nothing derives it
    pub automation_feasible: bool,
    /// Minutes
    pub estimated_time: u32,
    pub test_data: Vec<String>,
}

impl Default for TestCase {
    fn default() -> Self {
        Self {
            id: String::new(),
            title: String::new(),
            description: String::new(),
            test_type: TestType::Positive,
            preconditions: Vec::new(),
            test_steps: Vec::new(),
            expected_result: String::new(),
            priority: Level::Medium,
            tags: Vec::new(),
            risk_level: Level::Medium,
            requirement_id: String::new(),
            automation_feasible: true,
            estimated_time: 30,
            test_data: Vec::new(),
        }
    }
}

impl TestCase {
    /// Add a tag unless it is already present
    pub fn add_tag(&mut self, tag: impl Into<String>) {
        let tag = tag.into();
        if !self.tags.contains(&tag) {
            self.tags.push(tag);
        }
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    pub fn set_automation_feasible(&mut self, feasible: bool) {
        self.automation_feasible = feasible;
    }

    /// Title key used for duplicate detection
    pub fn normalized_title(&self) -> String {
        normalize_title(&self.title)
    }
}

/// Lower-case and drop all whitespace
pub fn normalize_title(title: &str) -> String {
    title
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Monotonic id sequence for one batch
#[derive(Debug, Clone)]
pub struct IdSequence {
    next: u32,
}

impl Default for IdSequence {
    fn default() -> Self {
        Self { next: 1 }
    }
}

impl IdSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Produce the next id for a requirement and test type
    pub fn next_id(&mut self, requirement_id: &str, test_type: TestType) -> String {
        let id = format!(
            "{}_{}_{:03}",
            requirement_id,
            test_type.id_code(),
            self.next
        );
        self.next += 1;
        id
    }

    /// Number of ids handed out so far
    pub fn issued(&self) -> u32 {
        self.next - 1
    }
}

/// Estimated execution time in minutes.
///
/// Base 30, +20 for high complexity, -10 for low, +30 for performance,
/// +15 for security, +20 when integration points exist, floored at 15.
pub fn estimate_test_time(complexity: Level, test_type: TestType, has_integration_points: bool) -> u32 {
    let mut minutes: i32 = 30;

    minutes += match complexity {
        Level::High => 20,
        Level::Medium => 0,
        Level::Low => -10,
    };

    minutes += match test_type {
        TestType::Performance => 30,
        TestType::Security => 15,
        _ => 0,
    };

    if has_integration_points {
        minutes += 20;
    }

    minutes.max(MIN_ESTIMATED_MINUTES as i32) as u32
}

/// Risk from the number of identified risk factors
pub fn assess_risk_level(analysis: &RequirementAnalysis) -> Level {
    risk_level_for(analysis.risk_factors.len())
}

pub(crate) fn risk_level_for(risk_factor_count: usize) -> Level {
    match risk_factor_count {
        0 => Level::Low,
        1 | 2 => Level::Medium,
        _ => Level::High,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Level::Medium, TestType::Positive, false, 30)]
    #[case(Level::High, TestType::Positive, false, 50)]
    #[case(Level::Low, TestType::Negative, false, 20)]
    #[case(Level::High, TestType::Performance, true, 100)]
    #[case(Level::Low, TestType::Security, false, 35)]
    #[case(Level::Medium, TestType::Boundary, true, 50)]
    fn test_estimate_test_time(
        #[case] complexity: Level,
        #[case] test_type: TestType,
        #[case] integration: bool,
        #[case] expected: u32,
    ) {
        assert_eq!(estimate_test_time(complexity, test_type, integration), expected);
    }

    #[test]
    fn test_estimate_never_below_floor() {
        for complexity in [Level::High, Level::Medium, Level::Low] {
            for test_type in TestType::ALL {
                for integration in [true, false] {
                    assert!(
                        estimate_test_time(complexity, test_type, integration)
                            >= MIN_ESTIMATED_MINUTES
                    );
                }
            }
        }
    }

    #[rstest]
    #[case(0, Level::Low)]
    #[case(1, Level::Medium)]
    #[case(2, Level::Medium)]
    #[case(3, Level::High)]
    #[case(5, Level::High)]
    fn test_risk_level_thresholds(#[case] count: usize, #[case] expected: Level) {
        assert_eq!(risk_level_for(count), expected);
    }

    #[test]
    fn test_id_sequence_is_monotonic() {
        let mut seq = IdSequence::new();
        assert_eq!(seq.next_id("REQ001", TestType::Positive), "REQ001_POS_001");
        assert_eq!(seq.next_id("REQ001", TestType::Negative), "REQ001_NEG_002");
        assert_eq!(seq.next_id("REQ002", TestType::Performance), "REQ002_PERF_003");
        assert_eq!(seq.issued(), 3);
    }

    #[test]
    fn test_add_tag_ignores_duplicates() {
        let mut tc = TestCase::default();
        tc.add_tag("security");
        tc.add_tag("security");
        assert_eq!(tc.tags, vec!["security"]);
    }

    #[test]
    fn test_normalize_title() {
        assert_eq!(normalize_title("Verify REQ1 - Valid  Input"), "verifyreq1-validinput");
    }

    #[test]
    fn test_test_type_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&TestType::EdgeCase).unwrap(),
            "\"edge_case\""
        );
        assert_eq!(TestType::Usability.id_code(), "USA");
    }

    #[test]
    fn test_automation_feasible_defaults_true() {
        let mut tc = TestCase::default();
        assert!(tc.automation_feasible);
        tc.set_automation_feasible(false);
        assert!(!tc.automation_feasible);
    }
}
