//! Suite optimization: de-duplication, prioritisation and traceability

use crate::analysis::RequirementAnalysis;
use crate::testcase::TestCase;
use indexmap::IndexMap;
use std::collections::HashSet;

/// Prefix of the tag linking a case back to its requirement
pub const TRACE_TAG_PREFIX: &str = "traces_to_";

/// Tag linking a test case to its requirement
pub fn trace_tag(requirement_id: &str) -> String {
    format!("{}{}", TRACE_TAG_PREFIX, requirement_id)
}

/// De-duplicate, prioritise, then tag for traceability
pub fn optimize(
    cases: Vec<TestCase>,
    analyses: &IndexMap<String, RequirementAnalysis>,
) -> Vec<TestCase> {
    let before = cases.len();
    let mut cases = deduplicate(cases);
    tracing::debug!(
        removed = before - cases.len(),
        remaining = cases.len(),
        "removed duplicate test cases"
    );

    prioritize(&mut cases);
    add_traceability(&mut cases, analyses);
    cases
}

/// Keep the first case for each normalised title. Order is preserved.
pub fn deduplicate(cases: Vec<TestCase>) -> Vec<TestCase> {
    let mut seen = HashSet::new();
    cases
        .into_iter()
        .filter(|case| seen.insert(case.normalized_title()))
        .collect()
}

/// Stable sort: priority first (High, Medium, Low), then test type rank
pub fn prioritize(cases: &mut [TestCase]) {
    cases.sort_by_key(|case| (case.priority.rank(), case.test_type.rank()));
}

/// Add `traces_to_{requirement_id}` for every case whose requirement was
/// analyzed. Existing trace tags are not repeated.
pub fn add_traceability(cases: &mut [TestCase], analyses: &IndexMap<String, RequirementAnalysis>) {
    for case in cases.iter_mut() {
        if analyses.contains_key(&case.requirement_id) {
            let tag = trace_tag(&case.requirement_id);
            case.add_tag(tag);
        }
    }
}
