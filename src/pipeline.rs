//! Generation pipeline
//!
//! ```text
//! requirements ─▶ analyze ─▶ generate ─▶ validate ─▶ optimize ─▶ finalize ─▶ TestSuite
//! ```
//!
//! Stages run sequentially. The id sequence is created per run, so two runs
//! over the same input produce identical suites (apart from the timestamp).

use crate::analysis::{RequirementAnalysis, RequirementAnalyzer};
use crate::config::GeneratorConfig;
use crate::ingest;
use crate::optimize;
use crate::requirement::Requirement;
use crate::stats::SuiteStatistics;
use crate::testcase::{IdSequence, TestCase};
use crate::testgen::TestCaseGenerator;
use crate::validate::{validate_test_cases, ValidationOutcome};
use chrono::Utc;
use indexmap::IndexMap;
use serde::Serialize;
use std::collections::{BTreeMap, HashSet};
use std::path::Path;

/// Generate an optimized test suite for a batch with default settings
pub fn generate_test_cases(requirements: &[Requirement]) -> Vec<TestCase> {
    Pipeline::default().run(requirements).test_cases
}

/// Output of a pipeline run
#[derive(Debug, Clone, Serialize)]
pub struct TestSuite {
    /// Final, prioritised test cases
    pub test_cases: Vec<TestCase>,
    /// Analyses keyed by requirement id, in input order
    pub analyses: IndexMap<String, RequirementAnalysis>,
    pub validation: ValidationOutcome,
    pub statistics: SuiteStatistics,
}

impl TestSuite {
    pub fn is_empty(&self) -> bool {
        self.test_cases.is_empty()
    }

    /// Test cases tracing to one requirement
    pub fn cases_for<'a>(&'a self, requirement_id: &'a str) -> impl Iterator<Item = &'a TestCase> {
        self.test_cases
            .iter()
            .filter(move |c| c.requirement_id == requirement_id)
    }
}

/// Batch test-case generation pipeline
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    config: GeneratorConfig,
    analyzer: RequirementAnalyzer,
    generator: TestCaseGenerator,
}

impl Pipeline {
    pub fn new(config: GeneratorConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Run every stage over a batch of requirements.
    ///
    /// Requirements with a blank id or text are skipped with a warning.
    pub fn run(&self, requirements: &[Requirement]) -> TestSuite {
        let requirements: Vec<&Requirement> = requirements
            .iter()
            .filter(|req| match req.validate() {
                Ok(()) => true,
                Err(e) => {
                    tracing::warn!(requirement = %req.id, error = %e, "skipping invalid requirement");
                    false
                }
            })
            .collect();

        tracing::info!(requirements = requirements.len(), "stage: analyze");
        let analyses = self.analyze(&requirements);

        tracing::info!("stage: generate");
        let mut ids = IdSequence::new();
        let mut generated = HashSet::new();
        let mut cases: Vec<TestCase> = Vec::new();
        for req in requirements {
            if !generated.insert(req.id.as_str()) {
                continue;
            }
            if let Some(analysis) = analyses.get(&req.id) {
                cases.extend(self.generator.generate(req, analysis, &mut ids));
            }
        }

        tracing::info!(test_cases = cases.len(), "stage: validate");
        let validation =
            validate_test_cases(&mut cases, self.config.validation.min_title_length);

        tracing::info!(repaired = validation.repaired, "stage: optimize");
        let cases = optimize::optimize(cases, &analyses);

        tracing::info!(test_cases = cases.len(), "stage: finalize");
        let statistics = SuiteStatistics::compute(&cases, &analyses, Utc::now());

        TestSuite {
            test_cases: cases,
            analyses,
            validation,
            statistics,
        }
    }

    /// Load requirement files and run the batch, recording per-file counts.
    ///
    /// A file that cannot be loaded is logged and counted as 0; the rest of
    /// the batch still runs. A path given twice has its counts summed.
    pub fn run_files<P: AsRef<Path>>(&self, paths: &[P]) -> TestSuite {
        let mut requirements = Vec::new();
        let mut by_file: BTreeMap<String, usize> = BTreeMap::new();

        for path in paths {
            let path = path.as_ref();
            let loaded = ingest::load_file(path, &self.config.defaults).unwrap_or_else(|e| {
                tracing::warn!(path = %path.display(), error = %e, "skipping file");
                Vec::new()
            });
            *by_file.entry(path.display().to_string()).or_default() += loaded.len();
            requirements.extend(loaded);
        }

        let mut suite = self.run(&requirements);
        suite.statistics.by_file = by_file;
        suite
    }

    fn analyze(&self, requirements: &[&Requirement]) -> IndexMap<String, RequirementAnalysis> {
        let mut analyses = IndexMap::with_capacity(requirements.len());
        for req in requirements {
            if analyses.contains_key(&req.id) {
                tracing::warn!(requirement = %req.id, "duplicate requirement id, keeping the first");
                continue;
            }
            analyses.insert(req.id.clone(), self.analyzer.analyze(req));
        }
        analyses
    }
}
