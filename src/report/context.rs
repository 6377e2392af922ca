//! Template context for the summary report

use crate::pipeline::TestSuite;
use crate::stats::SuiteStatistics;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Serialize)]
pub struct SummaryContext<'a> {
    pub generated_at: String,
    pub stats: &'a SuiteStatistics,
    pub validation_repaired: usize,
    /// Non-empty count tables, in display order
    pub breakdowns: Vec<BreakdownView>,
    pub requirements: Vec<RequirementView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BreakdownView {
    pub title: &'static str,
    pub rows: Vec<CountView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CountView {
    pub label: String,
    pub count: usize,
}

/// One line per analyzed requirement
#[derive(Debug, Clone, Serialize)]
pub struct RequirementView {
    pub id: String,
    pub requirement_type: String,
    pub complexity: String,
    pub test_cases: usize,
}

impl<'a> SummaryContext<'a> {
    pub fn from_suite(suite: &'a TestSuite) -> Self {
        let stats = &suite.statistics;

        let breakdowns = [
            ("Requirement types", &stats.requirement_types),
            ("Test types", &stats.test_types),
            ("Priority", &stats.priority_distribution),
            ("Risk levels", &stats.risk_distribution),
            ("Source files", &stats.by_file),
        ]
        .into_iter()
        .filter(|(_, counts)| !counts.is_empty())
        .map(|(title, counts)| BreakdownView {
            title,
            rows: rows(counts),
        })
        .collect();

        let requirements = suite
            .analyses
            .values()
            .map(|analysis| RequirementView {
                id: analysis.requirement_id.clone(),
                requirement_type: analysis.requirement_type.to_string(),
                complexity: analysis.complexity.to_string(),
                test_cases: suite.cases_for(&analysis.requirement_id).count(),
            })
            .collect();

        Self {
            generated_at: stats.generated_at.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
            stats,
            validation_repaired: suite.validation.repaired,
            breakdowns,
            requirements,
        }
    }
}

fn rows(counts: &BTreeMap<String, usize>) -> Vec<CountView> {
    counts
        .iter()
        .map(|(label, count)| CountView {
            label: label.clone(),
            count: *count,
        })
        .collect()
}
