//! Suite statistics

use crate::analysis::RequirementAnalysis;
use crate::testcase::{TestCase, TestType};
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// Requirements covered by each specialised test category
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CoverageAnalysis {
    pub requirements_with_security_tests: usize,
    pub requirements_with_performance_tests: usize,
    pub requirements_with_integration_tests: usize,
}

/// Aggregate numbers for a generated suite
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SuiteStatistics {
    pub total_requirements: usize,
    pub total_test_cases: usize,
    /// Rounded to 2 decimals; 0 without requirements
    pub average_tests_per_requirement: f64,
    pub requirement_types: BTreeMap<String, usize>,
    pub test_types: BTreeMap<String, usize>,
    pub priority_distribution: BTreeMap<String, usize>,
    pub risk_distribution: BTreeMap<String, usize>,
    pub total_estimated_minutes: u64,
    /// Rounded to 2 decimals
    pub total_estimated_hours: f64,
    pub coverage: CoverageAnalysis,
    /// Requirements per source file, when the suite came from files
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub by_file: BTreeMap<String, usize>,
    pub generated_at: DateTime<Utc>,
}

impl SuiteStatistics {
    pub fn compute(
        cases: &[TestCase],
        analyses: &IndexMap<String, RequirementAnalysis>,
        generated_at: DateTime<Utc>,
    ) -> Self {
        let total_requirements = analyses.len();
        let total_test_cases = cases.len();

        let average_tests_per_requirement = if total_requirements == 0 {
            0.0
        } else {
            round2(total_test_cases as f64 / total_requirements as f64)
        };

        let mut requirement_types = BTreeMap::new();
        for analysis in analyses.values() {
            *requirement_types
                .entry(analysis.requirement_type.to_string())
                .or_insert(0) += 1;
        }

        let mut test_types = BTreeMap::new();
        let mut priority_distribution = BTreeMap::new();
        let mut risk_distribution = BTreeMap::new();
        for case in cases {
            *test_types.entry(case.test_type.to_string()).or_insert(0) += 1;
            *priority_distribution
                .entry(case.priority.to_string())
                .or_insert(0) += 1;
            *risk_distribution
                .entry(case.risk_level.to_string())
                .or_insert(0) += 1;
        }

        let total_estimated_minutes: u64 =
            cases.iter().map(|c| u64::from(c.estimated_time)).sum();

        Self {
            total_requirements,
            total_test_cases,
            average_tests_per_requirement,
            requirement_types,
            test_types,
            priority_distribution,
            risk_distribution,
            total_estimated_minutes,
            total_estimated_hours: round2(total_estimated_minutes as f64 / 60.0),
            coverage: CoverageAnalysis {
                requirements_with_security_tests: requirements_with(cases, TestType::Security),
                requirements_with_performance_tests: requirements_with(
                    cases,
                    TestType::Performance,
                ),
                requirements_with_integration_tests: requirements_with(
                    cases,
                    TestType::Integration,
                ),
            },
            by_file: BTreeMap::new(),
            generated_at,
        }
    }
}

fn requirements_with(cases: &[TestCase], test_type: TestType) -> usize {
    cases
        .iter()
        .filter(|c| c.test_type == test_type)
        .map(|c| c.requirement_id.as_str())
        .collect::<BTreeSet<_>>()
        .len()
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
