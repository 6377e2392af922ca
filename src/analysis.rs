//! Requirement analysis: keyword classification and risk extraction
//!
//! Maps a requirement's text to a [`RequirementAnalysis`] using static
//! keyword tables and one regex. Matching is case-insensitive substring
//! matching, so `"logins"` matches `"login"` and `"format"` matches `"form"`.
//! The analysis is deterministic: identical text always yields an identical
//! analysis.

use crate::requirement::{Level, Requirement, RequirementSource};
use indexmap::IndexSet;
use regex::Regex;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

/// Analyze a requirement
pub fn analyze(requirement: &Requirement) -> RequirementAnalysis {
    RequirementAnalyzer::new().analyze(requirement)
}

/// Requirement classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum RequirementType {
    Functional,
    Security,
    Performance,
    Usability,
    Business,
    Technical,
}

impl RequirementType {
    pub fn as_str(self) -> &'static str {
        match self {
            RequirementType::Functional => "functional",
            RequirementType::Security => "security",
            RequirementType::Performance => "performance",
            RequirementType::Usability => "usability",
            RequirementType::Business => "business",
            RequirementType::Technical => "technical",
        }
    }
}

impl fmt::Display for RequirementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Performance testing needs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PerformanceNeeds {
    pub load_testing: bool,
    pub stress_testing: bool,
    pub volume_testing: bool,
    pub response_time_testing: bool,
}

/// Security testing needs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SecurityNeeds {
    pub authentication_testing: bool,
    pub authorization_testing: bool,
    pub injection_testing: bool,
    pub encryption_testing: bool,
    pub session_testing: bool,
}

/// Derived analysis of one requirement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RequirementAnalysis {
    pub requirement_id: String,
    pub original_text: String,
    pub priority: Level,
    pub category: String,
    pub source: RequirementSource,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_number: Option<usize>,
    pub requirement_type: RequirementType,
    pub complexity: Level,
    pub testing_approaches: Vec<String>,
    pub risk_factors: Vec<String>,
    pub test_data_needs: Vec<String>,
    pub integration_points: Vec<String>,
    pub performance_considerations: PerformanceNeeds,
    pub security_considerations: SecurityNeeds,
    pub boundary_conditions: Vec<String>,
    pub error_scenarios: Vec<String>,
}

impl RequirementAnalysis {
    pub fn has_integration_points(&self) -> bool {
        !self.integration_points.is_empty()
    }
}

// ============================================================================
// Keyword tables
// ============================================================================

const SECURITY_KEYWORDS: &[&str] = &[
    "password",
    "encrypt",
    "authentication",
    "authorization",
    "security",
    "access control",
    "permission",
    "role",
    "token",
    "session",
    "login",
    "logout",
    "brute force",
    "rate limit",
    "ssl",
    "tls",
    "certificate",
    "vulnerability",
    "attack",
    "malicious",
    "injection",
    "xss",
    "csrf",
];

const PERFORMANCE_KEYWORDS: &[&str] = &[
    "performance",
    "speed",
    "response time",
    "latency",
    "throughput",
    "concurrent",
    "load",
    "stress",
    "scalability",
    "memory",
    "cpu",
    "database",
    "query",
    "cache",
    "optimization",
    "benchmark",
];

const USABILITY_KEYWORDS: &[&str] = &[
    "user interface",
    "ui",
    "ux",
    "usability",
    "accessibility",
    "user experience",
    "navigation",
    "layout",
    "design",
    "intuitive",
    "user-friendly",
    "responsive",
    "mobile",
    "browser",
    "display",
];

const BUSINESS_KEYWORDS: &[&str] = &[
    "business rule",
    "workflow",
    "process",
    "approval",
    "notification",
    "report",
    "dashboard",
    "integration",
    "api",
    "third party",
    "compliance",
    "regulation",
    "audit",
    "logging",
];

const DATA_KEYWORDS: &[&str] = &[
    "data",
    "database",
    "storage",
    "backup",
    "recovery",
    "migration",
    "import",
    "export",
    "sync",
    "replication",
    "validation",
    "format",
    "field",
    "record",
    "table",
    "query",
];

/// Classification precedence. The first table with a hit wins.
const TYPE_PRECEDENCE: &[(RequirementType, &[&str])] = &[
    (RequirementType::Security, SECURITY_KEYWORDS),
    (RequirementType::Performance, PERFORMANCE_KEYWORDS),
    (RequirementType::Usability, USABILITY_KEYWORDS),
    (RequirementType::Business, BUSINESS_KEYWORDS),
    (RequirementType::Technical, DATA_KEYWORDS),
];

const HIGH_COMPLEXITY: &[&str] = &[
    "complex",
    "multiple",
    "integration",
    "workflow",
    "algorithm",
    "calculation",
    "real-time",
    "concurrent",
    "distributed",
];

const LOW_COMPLEXITY: &[&str] = &["simple", "basic", "single", "display", "show", "list"];

const BASE_APPROACHES: &[&str] = &["Positive Testing", "Negative Testing", "Boundary Testing"];

const APPROACH_RULES: &[(&[&str], &[&str])] = &[
    (
        &["password", "login", "authentication"],
        &["Security Testing", "Negative Testing", "Boundary Testing"],
    ),
    (
        &["performance", "speed", "load"],
        &["Performance Testing", "Load Testing", "Stress Testing"],
    ),
    (
        &["user interface", "ui", "display"],
        &["UI Testing", "Cross-browser Testing", "Responsive Testing"],
    ),
    (
        &["api", "integration", "service"],
        &["Integration Testing", "API Testing"],
    ),
    (
        &["database", "data", "storage"],
        &["Data Testing", "Database Testing"],
    ),
];

const RISK_RULES: &[(&[&str], &str)] = &[
    (
        &["security", "password", "authentication"],
        "Security breach risk",
    ),
    (&["data", "database", "storage"], "Data loss/corruption risk"),
    (
        &["performance", "speed", "load"],
        "Performance degradation risk",
    ),
    (
        &["integration", "api", "third party"],
        "Integration failure risk",
    ),
    (&["user interface", "ui", "display"], "Usability/UX risk"),
];

const TEST_DATA_RULES: &[(&[&str], &[&str])] = &[
    (&["email"], &["Valid email addresses", "Invalid email formats"]),
    (
        &["password"],
        &["Strong passwords", "Weak passwords", "Special characters"],
    ),
    (&["user"], &["Valid user accounts", "Invalid user accounts"]),
    (
        &["number", "numeric", "integer"],
        &["Valid numbers", "Invalid numbers", "Boundary values"],
    ),
    (
        &["date", "time", "datetime"],
        &["Valid dates", "Invalid dates", "Future/past dates"],
    ),
];

const INTEGRATION_RULES: &[(&[&str], &str)] = &[
    (&["api", "service", "endpoint"], "External API"),
    (&["database", "db", "storage"], "Database"),
    (&["email", "notification", "message"], "Messaging Service"),
    (&["payment", "transaction", "billing"], "Payment Gateway"),
    (&["file", "upload", "download"], "File System"),
];

const ERROR_RULES: &[(&[&str], &[&str])] = &[
    (
        &["login", "authentication"],
        &[
            "Invalid credentials",
            "Account locked",
            "Session expired",
            "Network timeout",
        ],
    ),
    (
        &["file", "upload"],
        &[
            "File too large",
            "Invalid file format",
            "Corrupted file",
            "No file selected",
        ],
    ),
    (
        &["database", "data"],
        &[
            "Database connection failure",
            "Data validation error",
            "Duplicate data entry",
            "Missing required data",
        ],
    ),
];

fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| text.contains(k))
}

fn digit_runs() -> &'static Regex {
    static DIGITS: OnceLock<Regex> = OnceLock::new();
    DIGITS.get_or_init(|| Regex::new(r"\d+").expect("valid digit regex"))
}

// ============================================================================
// Analyzer
// ============================================================================

/// Keyword-driven requirement analyzer
#[derive(Debug, Clone, Copy, Default)]
pub struct RequirementAnalyzer;

impl RequirementAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Build the full analysis record for a requirement
    pub fn analyze(&self, requirement: &Requirement) -> RequirementAnalysis {
        let text = requirement.text.as_str();

        let analysis = RequirementAnalysis {
            requirement_id: requirement.id.clone(),
            original_text: requirement.text.clone(),
            priority: requirement.priority,
            category: requirement.category.clone(),
            source: requirement.source,
            line_number: requirement.line_number,
            requirement_type: determine_requirement_type(text),
            complexity: assess_complexity(text),
            testing_approaches: suggest_testing_approaches(text),
            risk_factors: identify_risk_factors(text),
            test_data_needs: identify_test_data_needs(text),
            integration_points: find_integration_points(text),
            performance_considerations: assess_performance_needs(text),
            security_considerations: assess_security_needs(text),
            boundary_conditions: identify_boundary_conditions(text),
            error_scenarios: identify_error_scenarios(text),
        };

        tracing::debug!(
            requirement = %requirement.id,
            requirement_type = %analysis.requirement_type,
            complexity = %analysis.complexity,
            risks = analysis.risk_factors.len(),
            boundaries = analysis.boundary_conditions.len(),
            "analyzed requirement"
        );

        analysis
    }
}

/// Classify the requirement. Security beats performance beats usability
/// beats business beats technical; anything else is functional.
pub fn determine_requirement_type(text: &str) -> RequirementType {
    let text = text.to_lowercase();
    TYPE_PRECEDENCE
        .iter()
        .find(|(_, keywords)| contains_any(&text, keywords))
        .map(|(typ, _)| *typ)
        .unwrap_or(RequirementType::Functional)
}

/// High-complexity indicators win over low-complexity ones
pub fn assess_complexity(text: &str) -> Level {
    let text = text.to_lowercase();
    if contains_any(&text, HIGH_COMPLEXITY) {
        Level::High
    } else if contains_any(&text, LOW_COMPLEXITY) {
        Level::Low
    } else {
        Level::Medium
    }
}

/// Suggested testing approaches, first occurrence order
pub fn suggest_testing_approaches(text: &str) -> Vec<String> {
    let text = text.to_lowercase();
    let mut approaches: IndexSet<&'static str> = IndexSet::new();

    for (keywords, labels) in APPROACH_RULES {
        if contains_any(&text, keywords) {
            approaches.extend(labels.iter().copied());
        }
    }
    approaches.extend(BASE_APPROACHES.iter().copied());

    approaches.into_iter().map(String::from).collect()
}

pub fn identify_risk_factors(text: &str) -> Vec<String> {
    let text = text.to_lowercase();
    RISK_RULES
        .iter()
        .filter(|(keywords, _)| contains_any(&text, keywords))
        .map(|(_, risk)| risk.to_string())
        .collect()
}

pub fn identify_test_data_needs(text: &str) -> Vec<String> {
    let text = text.to_lowercase();
    TEST_DATA_RULES
        .iter()
        .filter(|(keywords, _)| contains_any(&text, keywords))
        .flat_map(|(_, needs)| needs.iter().map(|n| n.to_string()))
        .collect()
}

pub fn find_integration_points(text: &str) -> Vec<String> {
    let text = text.to_lowercase();
    INTEGRATION_RULES
        .iter()
        .filter(|(keywords, _)| contains_any(&text, keywords))
        .map(|(_, point)| point.to_string())
        .collect()
}

pub fn assess_performance_needs(text: &str) -> PerformanceNeeds {
    let text = text.to_lowercase();
    PerformanceNeeds {
        load_testing: contains_any(&text, &["concurrent", "multiple users", "load"]),
        stress_testing: contains_any(&text, &["limit", "maximum", "capacity"]),
        volume_testing: contains_any(&text, &["large", "bulk", "volume", "massive"]),
        response_time_testing: contains_any(
            &text,
            &["performance", "speed", "fast", "response time"],
        ),
    }
}

pub fn assess_security_needs(text: &str) -> SecurityNeeds {
    let text = text.to_lowercase();
    SecurityNeeds {
        authentication_testing: contains_any(&text, &["login", "authentication", "password"]),
        authorization_testing: contains_any(
            &text,
            &["permission", "access", "role", "authorization"],
        ),
        injection_testing: contains_any(&text, &["input", "form", "data entry"]),
        encryption_testing: contains_any(&text, &["encrypt", "secure", "protection"]),
        session_testing: contains_any(&text, &["session", "token", "cookie"]),
    }
}

/// Boundary prompts for every number in the text (n-1, n, n+1), followed
/// by generic length and file-size boundaries.
pub fn identify_boundary_conditions(text: &str) -> Vec<String> {
    let text = text.to_lowercase();
    let mut boundaries = Vec::new();

    for m in digit_runs().find_iter(&text) {
        let Some((n, above)) = m
            .as_str()
            .parse::<u128>()
            .ok()
            .and_then(|n| Some((n, n.checked_add(1)?)))
        else {
            tracing::debug!(value = m.as_str(), "skipping numeric token");
            continue;
        };
        let below = match n.checked_sub(1) {
            Some(below) => below.to_string(),
            None => "-1".to_string(),
        };
        boundaries.push(format!("Test with value {} (below limit)", below));
        boundaries.push(format!("Test with value {} (at limit)", n));
        boundaries.push(format!("Test with value {} (above limit)", above));
    }

    if text.contains("length") || text.contains("character") {
        boundaries.extend(
            ["Minimum length", "Maximum length", "Empty string"]
                .iter()
                .map(|s| s.to_string()),
        );
    }

    if text.contains("size") || text.contains("file") {
        boundaries.extend(
            ["Minimum file size", "Maximum file size", "Zero size file"]
                .iter()
                .map(|s| s.to_string()),
        );
    }

    boundaries
}

pub fn identify_error_scenarios(text: &str) -> Vec<String> {
    let text = text.to_lowercase();
    ERROR_RULES
        .iter()
        .filter(|(keywords, _)| contains_any(&text, keywords))
        .flat_map(|(_, scenarios)| scenarios.iter().map(|s| s.to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Secure login performance under load", RequirementType::Security)]
    #[case("Pages must render at high speed", RequirementType::Performance)]
    #[case("The layout adapts to mobile screens", RequirementType::Usability)]
    #[case("Managers must give approval for every purchase", RequirementType::Business)]
    #[case("Nightly backup of all records", RequirementType::Technical)]
    #[case("Shopping cart keeps items between visits", RequirementType::Functional)]
    fn test_requirement_type_precedence(#[case] text: &str, #[case] expected: RequirementType) {
        assert_eq!(determine_requirement_type(text), expected);
    }

    #[test]
    fn test_type_matching_is_case_insensitive() {
        assert_eq!(
            determine_requirement_type("PASSWORD RESET"),
            RequirementType::Security
        );
    }

    #[rstest]
    #[case("A complex approval chain", Level::High)]
    #[case("Show a simple list", Level::Low)]
    #[case("Simple but concurrent edits", Level::High)]
    #[case("Users can rename their avatar", Level::Medium)]
    fn test_assess_complexity(#[case] text: &str, #[case] expected: Level) {
        assert_eq!(assess_complexity(text), expected);
    }

    #[test]
    fn test_approaches_always_include_base_set() {
        let approaches = suggest_testing_approaches("Nothing special here");
        assert_eq!(
            approaches,
            vec!["Positive Testing", "Negative Testing", "Boundary Testing"]
        );
    }

    #[test]
    fn test_approaches_are_deduplicated_in_first_seen_order() {
        let approaches = suggest_testing_approaches("password login under load");
        assert_eq!(
            approaches,
            vec![
                "Security Testing",
                "Negative Testing",
                "Boundary Testing",
                "Performance Testing",
                "Load Testing",
                "Stress Testing",
                "Positive Testing",
            ]
        );
    }

    #[test]
    fn test_boundary_off_by_one() {
        let boundaries = identify_boundary_conditions("max 5 attempts");
        assert_eq!(
            boundaries,
            vec![
                "Test with value 4 (below limit)",
                "Test with value 5 (at limit)",
                "Test with value 6 (above limit)",
            ]
        );
    }

    #[test]
    fn test_boundary_zero_goes_negative() {
        let boundaries = identify_boundary_conditions("retry 0 times");
        assert_eq!(boundaries[0], "Test with value -1 (below limit)");
    }

    #[test]
    fn test_boundary_handles_numbers_wider_than_u64() {
        let boundaries = identify_boundary_conditions("id 99999999999999999999999 is reserved");
        assert_eq!(
            boundaries,
            vec![
                "Test with value 99999999999999999999998 (below limit)",
                "Test with value 99999999999999999999999 (at limit)",
                "Test with value 100000000000000000000000 (above limit)",
            ]
        );
    }

    #[test]
    fn test_boundary_skips_numbers_past_u128() {
        let boundaries =
            identify_boundary_conditions("token 340282366920938463463374607431768211455 expires");
        assert!(boundaries.is_empty());
    }

    #[test]
    fn test_boundary_generic_length_and_file() {
        let boundaries = identify_boundary_conditions("Name length is checked on file upload");
        assert_eq!(
            boundaries,
            vec![
                "Minimum length",
                "Maximum length",
                "Empty string",
                "Minimum file size",
                "Maximum file size",
                "Zero size file",
            ]
        );
    }

    #[test]
    fn test_error_scenarios_concatenate() {
        let scenarios = identify_error_scenarios("login then upload a data file");
        assert_eq!(scenarios.len(), 12);
        assert_eq!(scenarios[0], "Invalid credentials");
        assert_eq!(scenarios[4], "File too large");
        assert_eq!(scenarios[8], "Database connection failure");
    }

    #[test]
    fn test_integration_points() {
        let points = find_integration_points("Send a notification email after payment via the API");
        assert_eq!(
            points,
            vec!["External API", "Messaging Service", "Payment Gateway"]
        );
    }

    #[test]
    fn test_flag_structs_are_fully_shaped() {
        let perf = assess_performance_needs("plain text");
        assert_eq!(perf, PerformanceNeeds::default());

        let sec = assess_security_needs("login with a session token");
        assert!(sec.authentication_testing);
        assert!(sec.session_testing);
        assert!(!sec.encryption_testing);
    }

    #[test]
    fn test_analyze_populates_every_field() {
        let req = Requirement::new("REQ009", "Profile data shall be encrypted in the database")
            .unwrap()
            .with_priority(Level::High);
        let analysis = analyze(&req);

        assert_eq!(analysis.requirement_id, "REQ009");
        assert_eq!(analysis.priority, Level::High);
        assert_eq!(analysis.requirement_type, RequirementType::Security);
        assert!(analysis.security_considerations.encryption_testing);
        assert!(analysis.has_integration_points());
        assert!(analysis.risk_factors.contains(&"Data loss/corruption risk".to_string()));
    }
}
